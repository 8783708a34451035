use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, warn};
use yew::prelude::*;

use super::count_up::CountUp;
use super::frame::{FrameLoop, FrameStep};
use super::latch::Threshold;
use super::observer::RegionWatch;
use crate::config;

/// Latched visibility of a region plus the ref to attach to that region.
#[derive(Clone, PartialEq)]
pub struct InView {
    pub node: NodeRef,
    pub visible: bool,
}

/// Watches the element behind `InView::node` and flips `visible` to `true`
/// the first time at least `threshold` of it is on screen. It never flips back.
#[hook]
pub fn use_in_view(threshold: f64) -> InView {
    let node = use_node_ref();
    let visible = use_state_eq(|| false);

    {
        let node = node.clone();
        let visible = visible.clone();
        use_effect_with_deps(
            move |_| {
                let threshold = Threshold::new(threshold).unwrap_or_else(|err| {
                    warn!("{}, clamping", err);
                    Threshold::clamped(threshold)
                });
                let watch = RegionWatch::attach(&node, threshold, move || visible.set(true));
                // Dropping the watch stops observation on unmount.
                move || drop(watch)
            },
            (),
        );
    }

    InView {
        node,
        visible: *visible,
    }
}

/// Displayed value of a count-up from 0 to `target`, started the first time
/// `trigger` is true. Unmounting mid-run cancels the pending frame.
#[hook]
pub fn use_count_up(target: u32, duration_ms: u32, trigger: bool) -> u32 {
    let displayed = use_state_eq(|| 0u32);
    let animator = use_mut_ref(|| {
        CountUp::with_duration_ms(target, duration_ms).unwrap_or_else(|err| {
            warn!("{}, falling back to {}ms", err, config::COUNT_UP_DURATION.get());
            CountUp::new(target, config::COUNT_UP_DURATION)
        })
    });

    {
        let displayed = displayed.clone();
        use_effect_with_deps(
            move |&trigger| {
                let frames = if trigger {
                    start_run(animator.clone(), displayed)
                } else {
                    None
                };
                move || {
                    if let Some(frames) = frames {
                        frames.cancel();
                        let mut animator = animator.borrow_mut();
                        if animator.is_running() {
                            debug!("count-up cancelled at {}", animator.displayed());
                            animator.cancel();
                        }
                    }
                }
            },
            trigger,
        );
    }

    *displayed
}

fn start_run(animator: Rc<RefCell<CountUp>>, displayed: UseStateHandle<u32>) -> Option<FrameLoop> {
    if !animator.borrow().is_idle() {
        return None;
    }
    debug!(
        "count-up to {} over {}ms",
        animator.borrow().target(),
        animator.borrow().duration_ms()
    );

    let frames = {
        let animator = animator.clone();
        let displayed = displayed.clone();
        FrameLoop::start(move |now| {
            let mut animator = animator.borrow_mut();
            animator.start(now);
            let frame = animator.advance(now);
            displayed.set(frame.value);
            if frame.done {
                debug!("count-up settled at {}", frame.value);
                FrameStep::Stop
            } else {
                FrameStep::Continue
            }
        })
    };

    if frames.is_none() {
        warn!("no animation frames available, showing final value");
        let mut animator = animator.borrow_mut();
        animator.finish();
        displayed.set(animator.displayed());
    }
    frames
}
