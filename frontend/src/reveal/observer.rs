use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::NodeRef;

use super::latch::{IntersectionSample, Threshold, VisibilityLatch};

/// Binds a [`VisibilityLatch`] to a mounted element through the browser's
/// `IntersectionObserver`.
///
/// `on_reveal` runs once, when the latch flips. Dropping the watch tears the
/// latch down and disconnects the observer, so nothing fires afterwards even
/// if an entry batch was already queued.
pub struct RegionWatch {
    latch: Rc<RefCell<VisibilityLatch>>,
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl RegionWatch {
    pub fn attach<F>(node: &NodeRef, threshold: Threshold, on_reveal: F) -> Option<Self>
    where
        F: Fn() + 'static,
    {
        let Some(element) = node.cast::<Element>() else {
            debug!("region is not mounted, nothing to observe");
            return None;
        };

        let on_reveal: Rc<dyn Fn()> = Rc::new(on_reveal);
        let latch = Rc::new(RefCell::new(VisibilityLatch::new(threshold)));

        let callback = {
            let latch = latch.clone();
            let on_reveal = on_reveal.clone();
            let region = element.id();
            Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    let sample =
                        IntersectionSample::new(entry.intersection_ratio(), entry.is_intersecting());
                    let revealed = latch.borrow_mut().observe(sample);
                    if revealed {
                        debug!("region '{}' revealed at ratio {:.2}", region, sample.ratio);
                        // One-shot: nothing left to watch for.
                        observer.disconnect();
                        on_reveal();
                        break;
                    }
                }
            }) as Box<dyn FnMut(Array, IntersectionObserver)>)
        };

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold.fraction()));

        match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
            Ok(observer) => {
                observer.observe(&element);
                debug!(
                    "observing region '{}' at threshold {}",
                    element.id(),
                    threshold.fraction()
                );
                Some(Self {
                    latch,
                    observer,
                    _callback: callback,
                })
            }
            Err(err) => {
                warn!("IntersectionObserver unavailable, revealing region immediately: {:?}", err);
                on_reveal();
                None
            }
        }
    }

}

impl Drop for RegionWatch {
    fn drop(&mut self) {
        self.latch.borrow_mut().teardown();
        self.observer.disconnect();
    }
}
