use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlAnchorElement};

use crate::domain::errors::DomError;
use crate::domain::logging::{LogComponent, get_logger};
use crate::domain::layout::navigation::{
    SIDEBAR_ACTIVE_CLASSES, SidebarTarget, TOPNAV_ACTIVE_DEPTH, is_current_page, sidebar_scroll_target,
};
use crate::infrastructure::dom::{self, add_class, ancestor, remove_class, toggle_class};

const OPEN_DROPDOWN_CLASS: &str = "nav-item dropdown active";

/// Absolute href as resolved by the browser, empty for non-anchors.
fn resolved_href(anchor: &Element) -> String {
    anchor
        .dyn_ref::<HtmlAnchorElement>()
        .map(HtmlAnchorElement::href)
        .unwrap_or_default()
}

fn mark_sidebar_anchor(anchor: &Element) -> Result<(), DomError> {
    add_class(anchor, "active")?;
    for (target, class) in SIDEBAR_ACTIVE_CLASSES {
        let element = match target {
            SidebarTarget::Ancestor(depth) => ancestor(anchor, depth),
            SidebarTarget::PreviousOfAncestor(depth) => {
                ancestor(anchor, depth).and_then(|el| el.previous_element_sibling())
            }
        };
        if let Some(element) = element {
            add_class(&element, class)?;
        }
    }
    Ok(())
}

fn mark_topnav_anchor(anchor: &Element) -> Result<(), DomError> {
    add_class(anchor, "active")?;
    for depth in 1..=TOPNAV_ACTIVE_DEPTH {
        if let Some(element) = ancestor(anchor, depth) {
            add_class(&element, "active")?;
        }
    }
    Ok(())
}

fn scroll_sidebar_to_active(document: &Document) -> Result<(), DomError> {
    let Some(active) = document
        .query_selector("#sidebar-menu .mm-active .active")
        .map_err(dom::js_error)?
    else {
        return Ok(());
    };

    let page_offset = dom::window()?.scroll_y().map_err(dom::js_error)?;
    let offset_top = active.get_bounding_client_rect().top() + page_offset;

    if let Some(scroll_top) = sidebar_scroll_target(offset_top) {
        if let Some(wrapper) = document
            .query_selector(".vertical-menu .simplebar-content-wrapper")
            .map_err(dom::js_error)?
        {
            wrapper.set_scroll_top(scroll_top as i32);
        }
    }
    Ok(())
}

/// Highlight the sidebar and top-nav entries that point at this page.
pub fn highlight_current_page(document: &Document) -> Result<(), DomError> {
    let location = dom::location_href()?;

    for anchor in dom::query_all(document, "#sidebar-menu a")? {
        if is_current_page(&resolved_href(&anchor), &location) {
            mark_sidebar_anchor(&anchor)?;
        }
    }

    for anchor in dom::query_all(document, ".navbar-nav a")? {
        if is_current_page(&resolved_href(&anchor), &location) {
            mark_topnav_anchor(&anchor)?;
        }
    }

    scroll_sidebar_to_active(document)
}

fn menu_anchors(menu: &Element) -> Vec<Element> {
    let anchors = menu.get_elements_by_tag_name("a");
    (0..anchors.length()).filter_map(|index| anchors.item(index)).collect()
}

fn close_open_dropdowns(menu: &Element) -> Result<(), DomError> {
    for anchor in menu_anchors(menu) {
        let Some(parent) = anchor.parent_element() else {
            continue;
        };
        if parent.get_attribute("class").as_deref() == Some(OPEN_DROPDOWN_CLASS) {
            remove_class(&parent, "active")?;
            if let Some(panel) = anchor.next_element_sibling() {
                remove_class(&panel, "show")?;
            }
        }
    }
    Ok(())
}

fn toggle_dropdown(anchor: &Element) -> Result<(), DomError> {
    if let Some(parent) = anchor.parent_element() {
        toggle_class(&parent, "active")?;
    }
    if let Some(panel) = anchor.next_element_sibling() {
        toggle_class(&panel, "show")?;
    }
    Ok(())
}

fn report(action: &str, result: Result<(), DomError>) {
    if let Err(error) = result {
        get_logger().warn(
            LogComponent::Infrastructure("TopNav"),
            &format!("{} failed: {}", action, error),
        );
    }
}

/// Dropdown toggles of the horizontal top menu.
pub fn install_topnav(document: &Document, listeners: &mut Vec<EventListener>) -> Result<(), DomError> {
    let Some(menu) = document.get_element_by_id("topnav-menu-content") else {
        return Ok(());
    };

    for anchor in menu_anchors(&menu) {
        let target = anchor.clone();
        listeners.push(EventListener::new(&anchor, "click", move |_| {
            if target.get_attribute("href").as_deref() == Some("#") {
                report("dropdown toggle", toggle_dropdown(&target));
            }
        }));
    }

    let window = dom::window()?;
    listeners.push(EventListener::new(&window, "resize", move |_| {
        report("dropdown close", close_open_dropdowns(&menu));
    }));

    Ok(())
}
