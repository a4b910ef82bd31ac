use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlInputElement};

use crate::domain::errors::DomError;
use crate::domain::layout::navigation::{CollapseAction, collapse_action};
use crate::domain::layout::selection::{master_checked, toggled_password_type};
use crate::domain::logging::{LogComponent, get_logger};
use crate::infrastructure::dom::{self, remove_class, toggle_class};

fn report(control: &str, result: Result<(), DomError>) {
    if let Err(error) = result {
        get_logger().warn(
            LogComponent::Infrastructure("Controls"),
            &format!("{} handler failed: {}", control, error),
        );
    }
}

fn toggle_sidebar(body: &Element, breakpoint: f64) -> Result<(), DomError> {
    toggle_class(body, "sidebar-enable")?;
    match collapse_action(dom::window_width()?, breakpoint) {
        CollapseAction::Toggle => toggle_class(body, "vertical-collpsed").map(|_| ()),
        CollapseAction::Remove => remove_class(body, "vertical-collpsed"),
    }
}

fn toggle_fullscreen(document: &Document, body: &Element) -> Result<(), DomError> {
    toggle_class(body, "fullscreen-enable")?;
    if document.fullscreen_element().is_some() {
        document.exit_fullscreen();
        Ok(())
    } else {
        dom::html(document)?.request_fullscreen().map_err(dom::js_error)
    }
}

/// `#vertical-menu-btn`: show the sidebar, collapsing it on wide screens.
pub fn install_vertical_menu(
    document: &Document,
    breakpoint: f64,
    listeners: &mut Vec<EventListener>,
) -> Result<(), DomError> {
    let Some(button) = document.get_element_by_id("vertical-menu-btn") else {
        return Ok(());
    };
    let body = dom::body(document)?;

    listeners.push(EventListener::new(&button, "click", move |event: &Event| {
        event.prevent_default();
        report("vertical menu", toggle_sidebar(&body, breakpoint));
    }));
    Ok(())
}

/// `[data-bs-toggle="fullscreen"]` buttons and the fullscreen exit hook.
pub fn install_fullscreen(document: &Document, listeners: &mut Vec<EventListener>) -> Result<(), DomError> {
    let toggles = dom::query_all(document, "[data-bs-toggle='fullscreen']")?;
    if toggles.is_empty() {
        return Ok(());
    }
    let body = dom::body(document)?;

    for toggle in toggles {
        let document = document.clone();
        let body = body.clone();
        listeners.push(EventListener::new(&toggle, "click", move |event: &Event| {
            event.prevent_default();
            report("fullscreen", toggle_fullscreen(&document, &body));
        }));
    }

    let watched = document.clone();
    listeners.push(EventListener::new(document, "fullscreenchange", move |_| {
        if watched.fullscreen_element().is_none() {
            report("fullscreen exit", remove_class(&body, "fullscreen-enable"));
        }
    }));
    Ok(())
}

/// Right settings bar: toggled by its buttons, closed by clicks elsewhere.
pub fn install_right_bar(document: &Document, listeners: &mut Vec<EventListener>) -> Result<(), DomError> {
    let toggles = dom::query_all(document, ".right-bar-toggle")?;
    let body = dom::body(document)?;

    for toggle in toggles {
        let body = body.clone();
        listeners.push(EventListener::new(&toggle, "click", move |_| {
            report("right bar", toggle_class(&body, "right-bar-enabled").map(|_| ()));
        }));
    }

    let target_body = body.clone();
    listeners.push(EventListener::new(&body, "click", move |event: &Event| {
        let inside_bar = event
            .target()
            .and_then(|target| target.dyn_into::<Element>().ok())
            .and_then(|element| element.closest(".right-bar-toggle, .right-bar").ok().flatten())
            .is_some();
        if !inside_bar {
            report("right bar", remove_class(&target_body, "right-bar-enabled"));
        }
    }));
    Ok(())
}

fn inputs(document: &Document, selector: &str) -> Result<Vec<HtmlInputElement>, DomError> {
    Ok(dom::query_all(document, selector)?
        .into_iter()
        .filter_map(|element| element.dyn_into::<HtmlInputElement>().ok())
        .collect())
}

/// `#checkAll` drives the table checkboxes and mirrors their state.
pub fn install_check_all(document: &Document, listeners: &mut Vec<EventListener>) -> Result<(), DomError> {
    let Some(master) = document
        .get_element_by_id("checkAll")
        .and_then(|element| element.dyn_into::<HtmlInputElement>().ok())
    else {
        return Ok(());
    };
    let items = inputs(document, ".table-check .form-check-input")?;

    let driven = items.clone();
    let source = master.clone();
    listeners.push(EventListener::new(&master, "change", move |_| {
        for item in &driven {
            item.set_checked(source.checked());
        }
    }));

    for item in &items {
        let siblings = items.clone();
        let master = master.clone();
        listeners.push(EventListener::new(item, "change", move |_| {
            let checked = siblings.iter().filter(|item| item.checked()).count();
            master.set_checked(master_checked(checked, siblings.len()));
        }));
    }
    Ok(())
}

/// `#password-addon` reveals or hides the neighbouring password input.
pub fn install_password_addon(document: &Document, listeners: &mut Vec<EventListener>) -> Result<(), DomError> {
    let Some(addon) = document.get_element_by_id("password-addon") else {
        return Ok(());
    };

    let target = addon.clone();
    listeners.push(EventListener::new(&addon, "click", move |_| {
        let Some(parent) = target.parent_element() else {
            return;
        };
        let siblings = parent.children();
        let input = (0..siblings.length())
            .filter_map(|index| siblings.item(index))
            .find(|element| element.tag_name().eq_ignore_ascii_case("input") && *element != target);

        if let Some(input) = input {
            let current = input.get_attribute("type").unwrap_or_default();
            report(
                "password addon",
                input
                    .set_attribute("type", toggled_password_type(&current))
                    .map_err(dom::js_error),
            );
        }
    }));
    Ok(())
}
