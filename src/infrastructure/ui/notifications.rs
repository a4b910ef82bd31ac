use gloo::events::EventListener;
use gloo::timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

use crate::domain::errors::DomError;
use crate::domain::logging::{LogComponent, get_logger};
use crate::infrastructure::dom::{self, add_class, remove_class};

const TOAST_ID: &str = "myToast";
const PRELOADER_DELAY_MS: u32 = 350;

fn show(element: &Element) -> Result<(), DomError> {
    remove_class(element, "hide")?;
    add_class(element, "show")
}

fn hide(element: &Element) -> Result<(), DomError> {
    remove_class(element, "show")?;
    add_class(element, "hide")
}

fn log_hide_failure(result: Result<(), DomError>) {
    if let Err(error) = result {
        get_logger().warn(LogComponent::Infrastructure("Toast"), &format!("hide failed: {}", error));
    }
}

/// Show `#myToast`, closing it on its close button or after `timeout_ms`.
pub fn install_toast(
    document: &Document,
    timeout_ms: u32,
    listeners: &mut Vec<EventListener>,
    timers: &mut Vec<Timeout>,
) -> Result<(), DomError> {
    let Some(toast) = document.get_element_by_id(TOAST_ID) else {
        return Ok(());
    };
    show(&toast)?;

    if let Some(close) = toast.query_selector(".btn-close").map_err(dom::js_error)? {
        let target = toast.clone();
        listeners.push(EventListener::new(&close, "click", move |_| {
            log_hide_failure(hide(&target));
        }));
    }

    timers.push(Timeout::new(timeout_ms, move || log_hide_failure(hide(&toast))));
    Ok(())
}

fn hide_element(document: &Document, id: &str) {
    let Some(element) = document
        .get_element_by_id(id)
        .and_then(|element| element.dyn_into::<HtmlElement>().ok())
    else {
        return;
    };
    if let Err(error) = element.style().set_property("display", "none").map_err(dom::js_error) {
        get_logger().warn(
            LogComponent::Infrastructure("Preloader"),
            &format!("#{} not hidden: {}", id, error),
        );
    }
}

fn dismiss_preloader(document: &Document) {
    hide_element(document, "status");
    let document = document.clone();
    Timeout::new(PRELOADER_DELAY_MS, move || hide_element(&document, "preloader")).forget();
}

/// Fade out the page preloader once everything has loaded.
pub fn install_preloader(document: &Document, listeners: &mut Vec<EventListener>) -> Result<(), DomError> {
    if document.get_element_by_id("preloader").is_none() {
        return Ok(());
    }

    if document.ready_state() == "complete" {
        dismiss_preloader(document);
        return Ok(());
    }

    let window = dom::window()?;
    let document = document.clone();
    listeners.push(EventListener::once(&window, "load", move |_| dismiss_preloader(&document)));
    Ok(())
}
