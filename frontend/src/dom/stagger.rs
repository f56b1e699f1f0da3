use crate::controllers::stagger::delay_value;
use crate::error::DomError;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};

fn elements(root: &Element, selector: &str) -> Result<Vec<Element>, DomError> {
    let list = root.query_selector_all(selector)?;
    Ok((0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

/// Writes the `--d` entrance delay on every `.reveal` item, counted per
/// section, header and footer in document order.
pub fn apply_stagger() -> Result<usize, DomError> {
    let document = web_sys::window()
        .ok_or(DomError::MissingWindow)?
        .document()
        .ok_or(DomError::MissingDocument)?;
    let root = document.document_element().ok_or(DomError::MissingDocument)?;

    let mut styled = 0;
    for block in elements(&root, "section, header, footer")? {
        for (index, item) in elements(&block, ".reveal")?.into_iter().enumerate() {
            if let Some(item) = item.dyn_ref::<HtmlElement>() {
                item.style().set_property("--d", &delay_value(index))?;
                styled += 1;
            }
        }
    }
    Ok(styled)
}
