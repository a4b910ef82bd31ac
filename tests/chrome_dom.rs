#![cfg(target_arch = "wasm32")]

use dashboard_charts_wasm::domain::layout::navigation::page_url;
use dashboard_charts_wasm::infrastructure::ui::controls::install_check_all;
use dashboard_charts_wasm::infrastructure::ui::navigation::{highlight_current_page, install_topnav};
use dashboard_charts_wasm::infrastructure::ui::notifications::install_toast;
use gloo::events::EventListener;
use gloo::timers::callback::Timeout;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Document, Element, Event, HtmlElement, HtmlInputElement};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

fn fixture(document: &Document, html: &str) -> Element {
    let root = document.create_element("div").unwrap();
    root.set_inner_html(html);
    document.body().unwrap().append_child(&root).unwrap();
    root
}

fn has_class(root: &Element, selector: &str, class: &str) -> bool {
    root.query_selector(selector)
        .unwrap()
        .unwrap()
        .class_list()
        .contains(class)
}

fn input(document: &Document, selector: &str) -> HtmlInputElement {
    document.query_selector(selector).unwrap().unwrap().dyn_into().unwrap()
}

fn fire(target: &web_sys::EventTarget, kind: &str) {
    target.dispatch_event(&Event::new(kind).unwrap()).unwrap();
}

#[wasm_bindgen_test]
fn current_page_lights_up_sidebar_and_top_nav() {
    let document = document();
    let here = page_url(&web_sys::window().unwrap().location().href().unwrap()).to_string();
    let root = fixture(
        &document,
        &format!(
            r#"<div id="sidebar-menu">
                 <ul class="depth-6"><li class="depth-5"><ul class="depth-4"><li class="depth-3">
                   <a class="menu-toggle" href="javascript:void(0)">Reports</a>
                   <ul class="depth-2"><li class="depth-1"><a class="link" href="{here}">Profit</a></li></ul>
                 </li></ul></li></ul>
               </div>
               <div class="nav-7"><div class="nav-6"><div class="nav-5"><div class="nav-4"><div class="nav-3">
                 <ul class="navbar-nav nav-2"><li class="nav-1"><a class="top-link" href="{here}">Dashboard</a></li></ul>
               </div></div></div></div></div>"#
        ),
    );

    highlight_current_page(&document).unwrap();

    assert!(has_class(&root, ".link", "active"));
    assert!(has_class(&root, ".depth-1", "mm-active"));
    assert!(has_class(&root, ".depth-2", "mm-show"));
    assert!(has_class(&root, ".menu-toggle", "mm-active"));
    assert!(has_class(&root, ".depth-3", "mm-active"));
    assert!(has_class(&root, ".depth-4", "mm-show"));
    assert!(has_class(&root, ".depth-5", "mm-active"));
    assert!(!has_class(&root, ".depth-6", "mm-active"));

    assert!(has_class(&root, ".top-link", "active"));
    for depth in ["nav-1", "nav-2", "nav-3", "nav-4", "nav-5", "nav-6"] {
        assert!(has_class(&root, &format!(".{depth}"), "active"), "{depth} not active");
    }
    assert!(!has_class(&root, ".nav-7", "active"));

    root.remove();
}

#[wasm_bindgen_test]
fn top_menu_dropdown_opens_and_closes_on_resize() {
    let document = document();
    let root = fixture(
        &document,
        r##"<div id="topnav-menu-content"><ul>
              <li class="nav-item dropdown"><a class="reports" href="#">Reports</a><div class="dropdown-menu"></div></li>
            </ul></div>"##,
    );
    let mut listeners: Vec<EventListener> = Vec::new();
    install_topnav(&document, &mut listeners).unwrap();

    let anchor = root.query_selector(".reports").unwrap().unwrap();
    fire(&anchor, "click");
    assert!(has_class(&root, ".dropdown", "active"));
    assert!(has_class(&root, ".dropdown-menu", "show"));

    fire(&web_sys::window().unwrap(), "resize");
    assert!(!has_class(&root, ".dropdown", "active"));
    assert!(!has_class(&root, ".dropdown-menu", "show"));

    root.remove();
}

#[wasm_bindgen_test]
fn check_all_drives_and_mirrors_the_table() {
    let document = document();
    let root = fixture(
        &document,
        r#"<input type="checkbox" id="checkAll">
           <table class="table-check"><tbody>
             <tr><td><input type="checkbox" class="form-check-input" id="row-a"></td></tr>
             <tr><td><input type="checkbox" class="form-check-input" id="row-b"></td></tr>
           </tbody></table>"#,
    );
    let mut listeners: Vec<EventListener> = Vec::new();
    install_check_all(&document, &mut listeners).unwrap();

    let master = input(&document, "#checkAll");
    let row_a = input(&document, "#row-a");
    let row_b = input(&document, "#row-b");

    master.set_checked(true);
    fire(&master, "change");
    assert!(row_a.checked() && row_b.checked());

    row_a.set_checked(false);
    fire(&row_a, "change");
    assert!(!master.checked());

    row_a.set_checked(true);
    fire(&row_a, "change");
    assert!(master.checked());

    root.remove();
}

#[wasm_bindgen_test]
fn toast_shows_then_hides_on_close() {
    let document = document();
    let root = fixture(
        &document,
        r#"<div id="myToast" class="toast hide"><button type="button" class="btn-close"></button></div>"#,
    );
    let mut listeners: Vec<EventListener> = Vec::new();
    let mut timers: Vec<Timeout> = Vec::new();
    install_toast(&document, 5_000, &mut listeners, &mut timers).unwrap();

    assert!(has_class(&root, "#myToast", "show"));
    assert!(!has_class(&root, "#myToast", "hide"));
    assert_eq!(timers.len(), 1);

    root.query_selector(".btn-close")
        .unwrap()
        .unwrap()
        .dyn_into::<HtmlElement>()
        .unwrap()
        .click();
    assert!(has_class(&root, "#myToast", "hide"));
    assert!(!has_class(&root, "#myToast", "show"));

    root.remove();
}
