#![cfg(target_arch = "wasm32")]

use dashboard_charts_wasm::application::ChartHost;
use dashboard_charts_wasm::domain::chart::CssVariableSource;
use dashboard_charts_wasm::domain::layout::LayoutMode;
use dashboard_charts_wasm::infrastructure::BrowserChartHost;
use dashboard_charts_wasm::infrastructure::ui::layout_mode::apply_mode;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> web_sys::Document {
    web_sys::window().unwrap().document().unwrap()
}

#[wasm_bindgen_test]
fn css_variables_come_from_the_document_root() {
    let root = document()
        .document_element()
        .unwrap()
        .dyn_into::<web_sys::HtmlElement>()
        .unwrap();
    root.style().set_property("--bs-primary", "#556ee6").unwrap();

    let host = BrowserChartHost::new().unwrap();
    assert_eq!(host.css_variable("--bs-primary").as_deref(), Some("#556ee6"));
    assert_eq!(host.css_variable("--bs-undefined-color"), None);
}

#[wasm_bindgen_test]
fn activating_a_range_button_clears_its_siblings() {
    let document = document();
    let group = document.create_element("div").unwrap();
    group.set_inner_html(
        r#"<button id="one_month" class="btn active"></button>
           <button id="six_months" class="btn"></button>
           <button id="one_year" class="btn"></button>
           <button id="all" class="btn"></button>"#,
    );
    document.body().unwrap().append_child(&group).unwrap();

    let host = BrowserChartHost::new().unwrap();
    assert!(host.has_container("six_months"));
    host.activate_button("six_months").unwrap();

    let active = group.query_selector_all("button.active").unwrap();
    assert_eq!(active.length(), 1);
    let id = active.item(0).unwrap().dyn_into::<web_sys::Element>().unwrap().id();
    assert_eq!(id, "six_months");

    group.remove();
}

#[wasm_bindgen_test]
fn missing_range_button_is_an_error() {
    let host = BrowserChartHost::new().unwrap();
    assert!(host.activate_button("two_weeks").is_err());
}

#[wasm_bindgen_test]
fn rtl_mode_sets_direction_and_layout_attribute() {
    let document = document();
    apply_mode(&document, LayoutMode::DarkRtl, "/static").unwrap();

    let html = document.document_element().unwrap();
    assert_eq!(html.get_attribute("dir").as_deref(), Some("rtl"));
    assert_eq!(
        document.body().unwrap().get_attribute("data-layout-mode").as_deref(),
        Some("dark")
    );

    apply_mode(&document, LayoutMode::Light, "/static").unwrap();
    assert_eq!(html.get_attribute("dir"), None);
}
