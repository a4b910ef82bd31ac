use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use dashboard_charts_wasm::application::{ChartHost, ChartService, ChartSurface, JsonSource};
use dashboard_charts_wasm::config::DashboardConfig;
use dashboard_charts_wasm::domain::chart::{AxisWindow, ChartOptions, CssVariableSource, RangeSelection};
use dashboard_charts_wasm::domain::errors::{
    AppError, DomError, DomainError, InfrastructureError, InfrastructureResult, NetworkError, RangeError,
};
use futures::FutureExt;
use futures::executor::block_on;
use futures::future::LocalBoxFuture;
use serde_json::{Value, json};

#[derive(Default)]
struct StaticSource {
    bodies: HashMap<&'static str, Value>,
}

impl JsonSource for StaticSource {
    fn get_json<'a>(&'a self, endpoint: &'a str) -> LocalBoxFuture<'a, InfrastructureResult<Value>> {
        let response = self.bodies.get(endpoint).cloned().ok_or_else(|| {
            InfrastructureError::from(NetworkError::HttpStatus {
                url: endpoint.to_string(),
                status: 500,
                status_text: "Internal Server Error".to_string(),
            })
        });
        async move { response }.boxed_local()
    }
}

struct RecordingChart {
    windows: Rc<RefCell<Vec<AxisWindow>>>,
}

impl ChartSurface for RecordingChart {
    fn apply_window(&self, window: &AxisWindow) -> InfrastructureResult<()> {
        self.windows.borrow_mut().push(*window);
        Ok(())
    }
}

#[derive(Default)]
struct RecordingHost {
    containers: HashMap<&'static str, HashMap<&'static str, &'static str>>,
    variables: HashMap<&'static str, &'static str>,
    mounted: RefCell<Vec<(String, ChartOptions)>>,
    windows: Rc<RefCell<Vec<AxisWindow>>>,
    activated: RefCell<Vec<String>>,
    without_buttons: bool,
}

impl CssVariableSource for RecordingHost {
    fn css_variable(&self, name: &str) -> Option<String> {
        self.variables.get(name).map(|value| value.to_string())
    }
}

impl ChartHost for RecordingHost {
    type Chart = RecordingChart;

    fn has_container(&self, container_id: &str) -> bool {
        self.containers.contains_key(container_id)
    }

    fn container_attribute(&self, container_id: &str, attribute: &str) -> Option<String> {
        self.containers.get(container_id)?.get(attribute).map(|value| value.to_string())
    }

    fn mount(&self, container_id: &str, options: &ChartOptions) -> InfrastructureResult<RecordingChart> {
        self.mounted.borrow_mut().push((container_id.to_string(), options.clone()));
        Ok(RecordingChart { windows: Rc::clone(&self.windows) })
    }

    fn activate_button(&self, button_id: &str) -> InfrastructureResult<()> {
        if self.without_buttons {
            return Err(DomError::ElementMissing(button_id.to_string()).into());
        }
        self.activated.borrow_mut().push(button_id.to_string());
        Ok(())
    }
}

fn profit_body() -> Value {
    json!({
        "series": [[120.0, 80.5, 133.25]],
        "labels": ["2024-01-15", "2024-02-15", "2024-03-01"],
    })
}

fn dashboard_page(colors: &'static str) -> RecordingHost {
    RecordingHost {
        containers: HashMap::from([
            ("profit-chart-timeline", HashMap::from([("data-colors", colors)])),
            ("balance-chart", HashMap::new()),
        ]),
        variables: HashMap::from([("--bs-primary", "#556ee6")]),
        ..Default::default()
    }
}

fn service_with(bodies: &[(&'static str, Value)], host: RecordingHost) -> ChartService<StaticSource, RecordingHost> {
    let source = StaticSource { bodies: bodies.iter().cloned().collect() };
    ChartService::new(source, host, DashboardConfig::default())
}

#[test]
fn failed_fetch_mounts_nothing() {
    let service = service_with(&[], dashboard_page(r#"["--bs-primary"]"#));

    assert!(block_on(service.mount_profit_chart()).is_none());
    assert!(block_on(service.mount_wallet_chart()).is_none());
    assert!(service.host().mounted.borrow().is_empty());
}

#[test]
fn page_without_container_is_left_alone() {
    let service = service_with(&[("/profit_chart_data/", profit_body())], RecordingHost::default());

    assert!(block_on(service.mount_profit_chart()).is_none());
    assert!(service.host().mounted.borrow().is_empty());
}

#[test]
fn container_without_palette_is_skipped() {
    let mut host = dashboard_page("");
    host.containers.insert("profit-chart-timeline", HashMap::new());
    let service = service_with(&[("/profit_chart_data/", profit_body())], host);

    assert!(block_on(service.mount_profit_chart()).is_none());
    assert!(service.host().mounted.borrow().is_empty());
}

#[test]
fn profit_chart_mounts_with_resolved_colors() {
    let service = service_with(&[("/profit_chart_data/", profit_body())], dashboard_page(r#"["--bs-primary"]"#));

    let profit = block_on(service.mount_profit_chart()).unwrap();
    assert_eq!(profit.point_count, 3);
    assert_eq!(profit.filter.active(), None);

    let mounted = service.host().mounted.borrow();
    assert_eq!(mounted.len(), 1);
    let (container, options) = &mounted[0];
    assert_eq!(container, "profit-chart-timeline");
    assert_eq!(options.labels().len(), 3);
    match options {
        ChartOptions::Area(area) => assert_eq!(area.colors, ["#556ee6"]),
        other => panic!("expected an area chart, got {:?}", other),
    }
}

#[test]
fn malformed_palette_stops_the_render() {
    let service = service_with(&[], dashboard_page("primary"));
    let payload = block_on(service.load::<Vec<f64>>("/missing/"));
    assert!(matches!(payload, Err(AppError::Infrastructure(InfrastructureError::Network(_)))));

    let body = dashboard_charts_wasm::domain::chart::ProfitPayload::from_json(profit_body()).unwrap();
    let result = service.render_profit(&body);
    assert!(matches!(result, Err(AppError::Domain(DomainError::Palette(_)))));
    assert!(service.host().mounted.borrow().is_empty());
}

#[test]
fn range_selection_narrows_the_axis_and_moves_the_marker() {
    let service = service_with(&[("/profit_chart_data/", profit_body())], dashboard_page(r#"["--bs-primary"]"#));
    let mut profit = block_on(service.mount_profit_chart()).unwrap();

    let transition = service.select_range(&mut profit, RangeSelection::OneMonth).unwrap();
    assert_eq!(transition.window.min, Some(1_706_745_600_000));
    assert_eq!(transition.window.max, Some(1_709_251_200_000));

    service.select_range(&mut profit, RangeSelection::All).unwrap();

    let windows = service.host().windows.borrow();
    assert_eq!(windows.len(), 2);
    assert_eq!(windows[1], AxisWindow::unbounded());
    assert_eq!(*service.host().activated.borrow(), ["one_month", "all"]);
    assert_eq!(profit.filter.active(), Some(RangeSelection::All));
}

#[test]
fn rejected_range_leaves_chart_and_buttons_untouched() {
    let body = json!({ "series": [[1.0]], "labels": ["yesterday"] });
    let service = service_with(&[("/profit_chart_data/", body)], dashboard_page(r#"["--bs-primary"]"#));
    let mut profit = block_on(service.mount_profit_chart()).unwrap();

    let result = service.select_range(&mut profit, RangeSelection::SixMonths);
    assert!(matches!(
        result,
        Err(AppError::Domain(DomainError::Range(RangeError::InvalidAnchor(_))))
    ));
    assert!(service.host().windows.borrow().is_empty());
    assert!(service.host().activated.borrow().is_empty());
    assert_eq!(profit.filter.active(), None);
}

#[test]
fn wallet_chart_mounts_one_slice_per_currency() {
    let body = json!({ "series": [0.5, 1200.0, 3.0], "labels": ["BTC", "USDT", "ETH"] });
    let service = service_with(&[("/get_chart_data/", body)], dashboard_page("[]"));

    assert!(block_on(service.mount_wallet_chart()).is_some());

    let mounted = service.host().mounted.borrow();
    let (container, options) = &mounted[0];
    assert_eq!(container, "balance-chart");
    assert_eq!(options.point_count(), 3);
    assert_eq!(options.labels(), ["BTC", "USDT", "ETH"]);
}

#[test]
fn wallet_body_with_wrong_shape_is_not_rendered() {
    let body = json!({ "series": [[1.0]], "labels": ["BTC"] });
    let service = service_with(&[("/get_chart_data/", body)], dashboard_page("[]"));

    assert!(block_on(service.mount_wallet_chart()).is_none());
    assert!(service.host().mounted.borrow().is_empty());
}

#[test]
fn missing_range_buttons_do_not_undo_the_selection() {
    let body = json!({
        "series": [[10.0, 12.0, 9.0]],
        "labels": ["2024-01-01", "2024-02-01", "2024-03-01"],
    });
    let mut host = dashboard_page(r#"["--bs-primary"]"#);
    host.without_buttons = true;
    let service = service_with(&[("/profit_chart_data/", body)], host);
    let mut profit = block_on(service.mount_profit_chart()).unwrap();

    let transition = service.select_range(&mut profit, RangeSelection::OneMonth).unwrap();

    let expected = AxisWindow {
        min: Some(1_706_745_600_000),
        max: Some(1_709_251_200_000),
    };
    assert_eq!(transition.window, expected);
    assert_eq!(*service.host().windows.borrow(), [expected]);
    assert_eq!(profit.filter.active(), Some(RangeSelection::OneMonth));
    assert!(service.host().activated.borrow().is_empty());
}
