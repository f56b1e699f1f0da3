use crate::error::DomError;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Window;

type FrameCallback = Closure<dyn FnMut(f64)>;

/// High-resolution timestamp on the same clock as animation frames.
pub fn now() -> Option<f64> {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
}

/// A chain of animation-frame callbacks. `tick` gets the frame timestamp
/// and returns whether it wants another frame. Dropping the loop cancels a
/// pending frame and frees the closure.
pub struct FrameLoop {
    window: Window,
    slot: Rc<RefCell<Option<FrameCallback>>>,
    pending: Rc<Cell<Option<i32>>>,
}

impl FrameLoop {
    pub fn start<F>(mut tick: F) -> Result<Self, DomError>
    where
        F: FnMut(f64) -> bool + 'static,
    {
        let window = web_sys::window().ok_or(DomError::MissingWindow)?;
        let slot: Rc<RefCell<Option<FrameCallback>>> = Rc::new(RefCell::new(None));
        let pending = Rc::new(Cell::new(None));

        let callback = {
            let slot = slot.clone();
            let pending = pending.clone();
            let window = window.clone();
            Closure::wrap(Box::new(move |timestamp: f64| {
                pending.set(None);
                if !tick(timestamp) {
                    return;
                }
                if let Some(callback) = slot.borrow().as_ref() {
                    match window.request_animation_frame(callback.as_ref().unchecked_ref()) {
                        Ok(id) => pending.set(Some(id)),
                        Err(e) => log::debug!("animation frame request failed: {:?}", e),
                    }
                }
            }) as Box<dyn FnMut(f64)>)
        };

        let id = window.request_animation_frame(callback.as_ref().unchecked_ref())?;
        pending.set(Some(id));
        *slot.borrow_mut() = Some(callback);

        Ok(FrameLoop { window, slot, pending })
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        if let Some(id) = self.pending.take() {
            let _ = self.window.cancel_animation_frame(id);
        }
        // Breaks the closure -> slot reference cycle.
        self.slot.borrow_mut().take();
    }
}
