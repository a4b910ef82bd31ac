//! Bindings to the page's global `ApexCharts` and the browser chart host.

use gloo::utils::format::JsValueSerdeExt;
use js_sys::{Object, Reflect};
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element};

use crate::application::ports::{ChartHost, ChartSurface};
use crate::domain::chart::{AxisWindow, ChartOptions, CssVariableSource};
use crate::domain::errors::{ChartLibraryError, DomError, InfrastructureResult};
use crate::domain::logging::{LogComponent, get_logger};
use crate::infrastructure::dom;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_name = ApexCharts)]
    type ApexChartsJs;

    #[wasm_bindgen(catch, constructor, js_class = "ApexCharts")]
    fn new(element: &Element, options: &JsValue) -> Result<ApexChartsJs, JsValue>;

    #[wasm_bindgen(catch, method)]
    fn render(this: &ApexChartsJs) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch, method, js_name = updateOptions)]
    fn update_options(this: &ApexChartsJs, options: &JsValue) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(method)]
    fn destroy(this: &ApexChartsJs);
}

fn chart_call_error(value: JsValue) -> ChartLibraryError {
    ChartLibraryError::Call(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
}

/// Live chart bound to one container; destroyed when dropped.
pub struct ApexChart {
    inner: ApexChartsJs,
    container_id: String,
}

impl ApexChart {
    pub fn container_id(&self) -> &str {
        &self.container_id
    }
}

impl ChartSurface for ApexChart {
    fn apply_window(&self, window: &AxisWindow) -> InfrastructureResult<()> {
        let update = window_update(window).map_err(chart_call_error)?;
        self.inner.update_options(&update).map_err(chart_call_error)?;
        Ok(())
    }
}

impl Drop for ApexChart {
    fn drop(&mut self) {
        get_logger().debug(
            LogComponent::Infrastructure("ApexChart"),
            &format!("destroying chart in #{}", self.container_id),
        );
        self.inner.destroy();
    }
}

/// `{xaxis: {min, max}}` with unset bounds passed as `undefined`, which
/// is what clears them in `updateOptions`.
fn window_update(window: &AxisWindow) -> Result<JsValue, JsValue> {
    let bound = |value: Option<i64>| value.map(|ms| JsValue::from_f64(ms as f64)).unwrap_or(JsValue::UNDEFINED);

    let xaxis = Object::new();
    Reflect::set(&xaxis, &"min".into(), &bound(window.min))?;
    Reflect::set(&xaxis, &"max".into(), &bound(window.max))?;

    let update = Object::new();
    Reflect::set(&update, &"xaxis".into(), &xaxis)?;
    Ok(update.into())
}

/// The current document as a place to mount charts
#[derive(Clone)]
pub struct BrowserChartHost {
    document: Document,
}

impl BrowserChartHost {
    pub fn new() -> Result<Self, DomError> {
        Ok(Self { document: dom::document()? })
    }

    fn library_loaded() -> bool {
        Reflect::has(&js_sys::global(), &"ApexCharts".into()).unwrap_or(false)
    }
}

impl CssVariableSource for BrowserChartHost {
    fn css_variable(&self, name: &str) -> Option<String> {
        let root = self.document.document_element()?;
        let style = dom::window().ok()?.get_computed_style(&root).ok()??;
        let value = style.get_property_value(name).ok()?;
        let value = value.trim();
        (!value.is_empty()).then(|| value.to_string())
    }
}

impl ChartHost for BrowserChartHost {
    type Chart = ApexChart;

    fn has_container(&self, container_id: &str) -> bool {
        self.document.get_element_by_id(container_id).is_some()
    }

    fn container_attribute(&self, container_id: &str, attribute: &str) -> Option<String> {
        self.document.get_element_by_id(container_id)?.get_attribute(attribute)
    }

    fn mount(&self, container_id: &str, options: &ChartOptions) -> InfrastructureResult<ApexChart> {
        if !Self::library_loaded() {
            return Err(ChartLibraryError::LibraryMissing.into());
        }

        let container = dom::by_id(&self.document, container_id)?;
        let options = JsValue::from_serde(options).map_err(|e| ChartLibraryError::Options(e.to_string()))?;

        let inner = ApexChartsJs::new(&container, &options).map_err(chart_call_error)?;
        inner.render().map_err(chart_call_error)?;

        Ok(ApexChart {
            inner,
            container_id: container_id.to_string(),
        })
    }

    fn activate_button(&self, button_id: &str) -> InfrastructureResult<()> {
        let button = dom::by_id(&self.document, button_id)?;

        if let Some(parent) = button.parent_element() {
            let siblings = parent.children();
            for index in 0..siblings.length() {
                if let Some(sibling) = siblings.item(index) {
                    if sibling.tag_name().eq_ignore_ascii_case("button") {
                        dom::remove_class(&sibling, "active")?;
                    }
                }
            }
        }

        dom::add_class(&button, "active").map_err(Into::into)
    }
}
