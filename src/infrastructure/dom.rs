//! Thin helpers over `web_sys` shared by the chart host and the chrome.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, Storage, Window};

use crate::domain::errors::DomError;

pub fn js_error(value: JsValue) -> DomError {
    DomError::BrowserApi(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
}

pub fn window() -> Result<Window, DomError> {
    web_sys::window().ok_or(DomError::WindowUnavailable)
}

pub fn document() -> Result<Document, DomError> {
    window()?.document().ok_or(DomError::DocumentUnavailable)
}

pub fn body(document: &Document) -> Result<HtmlElement, DomError> {
    document.body().ok_or_else(|| DomError::ElementMissing("body".to_string()))
}

pub fn html(document: &Document) -> Result<Element, DomError> {
    document
        .document_element()
        .ok_or_else(|| DomError::ElementMissing("html".to_string()))
}

pub fn by_id(document: &Document, id: &str) -> Result<Element, DomError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| DomError::ElementMissing(id.to_string()))
}

/// Every element matching `selector`, in document order.
pub fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>, DomError> {
    let list = document.query_selector_all(selector).map_err(js_error)?;
    Ok((0..list.length())
        .filter_map(|index| list.item(index))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

/// `depth`-th ancestor of `element`; depth 1 is the parent.
pub fn ancestor(element: &Element, depth: usize) -> Option<Element> {
    let mut current = element.clone();
    for _ in 0..depth {
        current = current.parent_element()?;
    }
    Some(current)
}

pub fn add_class(element: &Element, class: &str) -> Result<(), DomError> {
    element.class_list().add_1(class).map_err(js_error)
}

pub fn remove_class(element: &Element, class: &str) -> Result<(), DomError> {
    element.class_list().remove_1(class).map_err(js_error)
}

pub fn toggle_class(element: &Element, class: &str) -> Result<bool, DomError> {
    element.class_list().toggle(class).map_err(js_error)
}

/// Current `href` of the page, as the browser resolved it.
pub fn location_href() -> Result<String, DomError> {
    window()?.location().href().map_err(js_error)
}

pub fn window_width() -> Result<f64, DomError> {
    window()?
        .inner_width()
        .map_err(js_error)?
        .as_f64()
        .ok_or_else(|| DomError::BrowserApi("innerWidth is not a number".to_string()))
}

pub fn session_storage() -> Result<Storage, DomError> {
    window()?
        .session_storage()
        .map_err(js_error)?
        .ok_or_else(|| DomError::BrowserApi("sessionStorage is disabled".to_string()))
}

pub fn local_storage() -> Result<Storage, DomError> {
    window()?
        .local_storage()
        .map_err(js_error)?
        .ok_or_else(|| DomError::BrowserApi("localStorage is disabled".to_string()))
}
