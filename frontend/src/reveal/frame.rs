use std::cell::RefCell;
use std::rc::Rc;

use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Window;

/// Returned by a frame callback to decide whether another frame is needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameStep {
    Continue,
    Stop,
}

struct LoopState {
    handle: Option<i32>,
    cancelled: bool,
    callback: Option<Closure<dyn FnMut(f64)>>,
}

/// A repeating task on the host's `requestAnimationFrame` tick.
///
/// Each callback gets the frame timestamp in milliseconds. The loop owns at
/// most one pending frame; `cancel` (or dropping the loop) withdraws it
/// synchronously.
pub struct FrameLoop {
    window: Window,
    state: Rc<RefCell<LoopState>>,
}

impl FrameLoop {
    pub fn start<F>(mut on_frame: F) -> Option<Self>
    where
        F: FnMut(f64) -> FrameStep + 'static,
    {
        let window = web_sys::window()?;
        let state = Rc::new(RefCell::new(LoopState {
            handle: None,
            cancelled: false,
            callback: None,
        }));

        // The closure only holds a weak reference so the loop state can be
        // freed as soon as the owner lets go of it.
        let callback = {
            let window = window.clone();
            let state = Rc::downgrade(&state);
            Closure::wrap(Box::new(move |timestamp: f64| {
                let Some(state) = state.upgrade() else {
                    return;
                };
                {
                    let mut state = state.borrow_mut();
                    state.handle = None;
                    if state.cancelled {
                        return;
                    }
                }
                if on_frame(timestamp) == FrameStep::Continue {
                    request_frame(&window, &state);
                }
            }) as Box<dyn FnMut(f64)>)
        };
        state.borrow_mut().callback = Some(callback);

        if !request_frame(&window, &state) {
            return None;
        }
        Some(Self { window, state })
    }

    pub fn cancel(&self) {
        let mut state = self.state.borrow_mut();
        state.cancelled = true;
        if let Some(handle) = state.handle.take() {
            if let Err(err) = self.window.cancel_animation_frame(handle) {
                warn!("cancelAnimationFrame failed: {:?}", err);
            }
        }
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.cancel();
    }
}

fn request_frame(window: &Window, state: &RefCell<LoopState>) -> bool {
    let mut guard = state.borrow_mut();
    let state = &mut *guard;
    if state.cancelled {
        return false;
    }
    let Some(callback) = state.callback.as_ref() else {
        return false;
    };
    match window.request_animation_frame(callback.as_ref().unchecked_ref()) {
        Ok(handle) => {
            state.handle = Some(handle);
            true
        }
        Err(err) => {
            warn!("requestAnimationFrame failed: {:?}", err);
            false
        }
    }
}
