use crate::controllers::scroll::ScrollSample;
use crate::error::DomError;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{AddEventListenerOptions, ScrollBehavior, ScrollToOptions, Window};

pub fn sample() -> Option<ScrollSample> {
    let window = web_sys::window()?;
    let root = window.document()?.document_element()?;
    let scroll_top = window
        .scroll_y()
        .ok()
        .filter(|y| *y > 0.0)
        .unwrap_or_else(|| f64::from(root.scroll_top()));
    Some(ScrollSample {
        scroll_top,
        scroll_height: f64::from(root.scroll_height()),
        client_height: f64::from(root.client_height()),
    })
}

pub fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

/// A passive listener on `window`, removed when dropped.
pub struct PassiveListener {
    window: Window,
    event: &'static str,
    callback: Closure<dyn FnMut()>,
}

impl PassiveListener {
    pub fn on_window<F>(event: &'static str, handler: F) -> Result<Self, DomError>
    where
        F: FnMut() + 'static,
    {
        let window = web_sys::window().ok_or(DomError::MissingWindow)?;
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut()>);
        let options = AddEventListenerOptions::new();
        options.set_passive(true);
        window.add_event_listener_with_callback_and_add_event_listener_options(
            event,
            callback.as_ref().unchecked_ref(),
            &options,
        )?;
        Ok(PassiveListener { window, event, callback })
    }
}

impl Drop for PassiveListener {
    fn drop(&mut self) {
        let _ = self
            .window
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}
