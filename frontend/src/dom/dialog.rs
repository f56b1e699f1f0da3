use wasm_bindgen::JsCast;
use web_sys::{Element, Event, HtmlDialogElement, Node};

/// Opens as a modal, falling back to the bare `open` attribute where the
/// modal API refuses.
pub fn show(dialog: &HtmlDialogElement) {
    if dialog.open() {
        return;
    }
    if let Err(e) = dialog.show_modal() {
        log::debug!("showModal unavailable, using open attribute: {:?}", e);
        let _ = dialog.set_attribute("open", "");
    }
}

pub fn hide(dialog: &HtmlDialogElement) {
    dialog.close();
    if dialog.has_attribute("open") {
        let _ = dialog.remove_attribute("open");
    }
}

/// Whether the event's target is `container` or one of its descendants.
pub fn target_within(container: &Element, event: &Event) -> bool {
    event
        .target()
        .and_then(|target| target.dyn_into::<Node>().ok())
        .map(|node| container.contains(Some(&node)))
        .unwrap_or(false)
}

/// Whether the click started on (or inside) a button or link.
pub fn target_is_control(event: &Event) -> bool {
    event
        .target()
        .and_then(|target| target.dyn_into::<Element>().ok())
        .and_then(|el| el.closest("button, a").ok().flatten())
        .is_some()
}
