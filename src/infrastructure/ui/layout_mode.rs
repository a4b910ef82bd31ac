use gloo::events::EventListener;
use strum::IntoEnumIterator;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlInputElement};

use crate::domain::errors::DomError;
use crate::domain::layout::LayoutMode;
use crate::domain::layout::mode::LAYOUT_STORAGE_KEY;
use crate::domain::logging::{LogComponent, get_logger};
use crate::infrastructure::dom::{self, js_error};

fn switch(document: &Document, mode: LayoutMode) -> Option<HtmlInputElement> {
    document.get_element_by_id(mode.switch_id())?.dyn_into().ok()
}

fn set_stylesheet(document: &Document, link_id: &str, href: &str) -> Result<(), DomError> {
    match document.get_element_by_id(link_id) {
        Some(link) => link.set_attribute("href", href).map_err(js_error),
        None => Ok(()),
    }
}

/// Apply `mode` to the page and remember it for the session.
pub fn apply_mode(document: &Document, mode: LayoutMode, static_root: &str) -> Result<(), DomError> {
    let plan = mode.plan(static_root);

    let html = dom::html(document)?;
    match plan.html_dir {
        Some(dir) => html.set_attribute("dir", dir).map_err(js_error)?,
        None => html.remove_attribute("dir").map_err(js_error)?,
    }

    for other in LayoutMode::iter().filter(|other| plan.unchecked_switches.contains(&other.switch_id())) {
        if let Some(input) = switch(document, other) {
            input.set_checked(false);
        }
    }

    set_stylesheet(document, "bootstrap-style", &plan.bootstrap_href)?;
    set_stylesheet(document, "app-style", &plan.app_href)?;
    dom::body(document)?
        .set_attribute("data-layout-mode", plan.body_layout_mode)
        .map_err(js_error)?;

    dom::session_storage()?
        .set_item(LAYOUT_STORAGE_KEY, mode.switch_id())
        .map_err(js_error)?;

    get_logger().debug(LogComponent::Infrastructure("LayoutMode"), &format!("applied {:?}", mode));
    Ok(())
}

/// Restore the session's mode and listen to the four switches.
pub fn install(document: &Document, static_root: &str, listeners: &mut Vec<EventListener>) -> Result<(), DomError> {
    if LayoutMode::iter().all(|mode| switch(document, mode).is_none()) {
        return Ok(());
    }

    let storage = dom::session_storage()?;
    let stored = storage.get_item(LAYOUT_STORAGE_KEY).map_err(js_error)?;
    let mode = match stored.as_deref().and_then(LayoutMode::from_switch_id) {
        Some(mode) => mode,
        None => {
            storage
                .set_item(LAYOUT_STORAGE_KEY, LayoutMode::default().switch_id())
                .map_err(js_error)?;
            LayoutMode::default()
        }
    };

    for checkbox in dom::query_all(document, ".right-bar input[type='checkbox']")? {
        if let Ok(input) = checkbox.dyn_into::<HtmlInputElement>() {
            input.set_checked(false);
        }
    }
    if let Some(input) = switch(document, mode) {
        input.set_checked(true);
    }
    apply_mode(document, mode, static_root)?;

    for mode in LayoutMode::iter() {
        let Some(input) = switch(document, mode) else {
            continue;
        };
        let document = document.clone();
        let static_root = static_root.to_string();
        let target = input.clone();
        listeners.push(EventListener::new(&input, "change", move |_| {
            if !target.checked() {
                return;
            }
            if let Err(error) = apply_mode(&document, mode, &static_root) {
                get_logger().warn(
                    LogComponent::Infrastructure("LayoutMode"),
                    &format!("switching to {:?} failed: {}", mode, error),
                );
            }
        }));
    }

    Ok(())
}
