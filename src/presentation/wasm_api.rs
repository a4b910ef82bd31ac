use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::EventListener;
use gloo::utils::format::JsValueSerdeExt;
use js_sys::Promise;
use strum::IntoEnumIterator;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::{JsFuture, future_to_promise, spawn_local};

use crate::application::{ChartHost, ChartService, ProfitChart};
use crate::config::DashboardConfig;
use crate::domain::chart::{RangeSelection, RangeTransition};
use crate::domain::errors::AppResult;
use crate::domain::logging::{LogComponent, get_logger, init_logger};
use crate::infrastructure::{
    ApexChart, BrowserChartHost, ConsoleLogger, DashboardHttpClient, LayoutChrome, dom,
};

type DashboardCharts = ChartService<DashboardHttpClient, BrowserChartHost>;
type ProfitSlot = Rc<RefCell<Option<ProfitChart<ApexChart>>>>;

fn to_js(error: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&error.to_string())
}

fn select_in_slot(
    service: &DashboardCharts,
    slot: &ProfitSlot,
    selection: RangeSelection,
) -> AppResult<Option<RangeTransition>> {
    let mut profit = slot.borrow_mut();
    match profit.as_mut() {
        Some(profit) => service.select_range(profit, selection).map(Some),
        None => Ok(None),
    }
}

fn bind_range_buttons(service: &Rc<DashboardCharts>, slot: &ProfitSlot) -> AppResult<Vec<EventListener>> {
    let document = dom::document()?;
    let mut listeners = Vec::new();

    for selection in RangeSelection::iter() {
        let Some(button) = document.get_element_by_id(selection.button_id()) else {
            continue;
        };
        let service = Rc::clone(service);
        let slot = Rc::clone(slot);
        listeners.push(EventListener::new(&button, "click", move |_| {
            if let Err(error) = select_in_slot(&service, &slot, selection) {
                get_logger().warn(
                    LogComponent::Presentation("RangeButtons"),
                    &format!("range {} rejected: {}", selection.button_id(), error),
                );
            }
        }));
    }

    Ok(listeners)
}

/// Dashboard scripting exposed to the page.
///
/// One instance per page; it owns the mounted charts, the range buttons
/// and the chrome listeners, and releases all of them on `dispose()`.
#[wasm_bindgen]
pub struct DashboardApp {
    service: Rc<DashboardCharts>,
    profit: ProfitSlot,
    wallet: Rc<RefCell<Option<ApexChart>>>,
    range_listeners: Rc<RefCell<Vec<EventListener>>>,
    chrome: Option<LayoutChrome>,
}

#[wasm_bindgen]
impl DashboardApp {
    /// `config` is an optional object of `DashboardConfig` overrides.
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<DashboardApp, JsValue> {
        let config: DashboardConfig = if config.is_undefined() || config.is_null() {
            DashboardConfig::default()
        } else {
            config
                .into_serde()
                .map_err(|e| to_js(format!("invalid dashboard config: {}", e)))?
        };

        init_logger(Box::new(ConsoleLogger::new(config.min_log_level())));

        let host = BrowserChartHost::new().map_err(to_js)?;
        let service = ChartService::new(DashboardHttpClient::new(), host, config);

        Ok(Self {
            service: Rc::new(service),
            profit: Rc::new(RefCell::new(None)),
            wallet: Rc::new(RefCell::new(None)),
            range_listeners: Rc::new(RefCell::new(Vec::new())),
            chrome: None,
        })
    }

    /// Fetch and mount the profit chart, then wire the range buttons.
    /// Resolves to the number of plotted points, or `null` when nothing
    /// was mounted.
    #[wasm_bindgen(js_name = mountProfitChart)]
    pub fn mount_profit_chart(&self) -> Promise {
        let service = Rc::clone(&self.service);
        let slot = Rc::clone(&self.profit);
        let range_listeners = Rc::clone(&self.range_listeners);

        future_to_promise(async move {
            let Some(profit) = service.mount_profit_chart().await else {
                return Ok(JsValue::NULL);
            };
            let points = profit.point_count;
            *slot.borrow_mut() = Some(profit);

            let listeners = bind_range_buttons(&service, &slot).map_err(to_js)?;
            *range_listeners.borrow_mut() = listeners;

            Ok(JsValue::from(points as u32))
        })
    }

    /// Fetch and mount the wallet pie chart. Resolves to `true` when mounted.
    #[wasm_bindgen(js_name = mountWalletChart)]
    pub fn mount_wallet_chart(&self) -> Promise {
        let service = Rc::clone(&self.service);
        let slot = Rc::clone(&self.wallet);

        future_to_promise(async move {
            let chart = service.mount_wallet_chart().await;
            let mounted = chart.is_some();
            *slot.borrow_mut() = chart;
            Ok(JsValue::from_bool(mounted))
        })
    }

    /// Same as clicking the range button with id `button_id`.
    #[wasm_bindgen(js_name = selectRange)]
    pub fn select_range(&self, button_id: &str) -> Result<bool, JsValue> {
        let selection = RangeSelection::from_button_id(button_id).map_err(to_js)?;
        let transition = select_in_slot(&self.service, &self.profit, selection).map_err(to_js)?;
        Ok(transition.is_some())
    }

    /// Bind theme, language, menu, form and notification behaviors.
    #[wasm_bindgen(js_name = initChrome)]
    pub fn init_chrome(&mut self) -> Result<(), JsValue> {
        let chrome =
            LayoutChrome::install(self.service.config(), self.service.source()).map_err(to_js)?;
        get_logger().info(
            LogComponent::Presentation("DashboardApp"),
            &format!("chrome ready with {} listeners", chrome.listener_count()),
        );
        self.chrome = Some(chrome);
        Ok(())
    }

    /// Destroy the charts and detach every listener.
    pub fn dispose(&mut self) {
        self.range_listeners.borrow_mut().clear();
        self.profit.borrow_mut().take();
        self.wallet.borrow_mut().take();
        self.chrome = None;
    }
}

/// Page-ready entry point: chrome plus whichever charts the page hosts.
#[wasm_bindgen(js_name = startDashboard)]
pub fn start_dashboard(config: JsValue) -> Result<DashboardApp, JsValue> {
    let mut app = DashboardApp::new(config)?;
    app.init_chrome()?;

    let config = app.service.config();
    let host = app.service.host();
    if host.has_container(&config.profit_container_id) {
        settle_logged("profit chart", app.mount_profit_chart());
    }
    if host.has_container(&config.wallet_container_id) {
        settle_logged("wallet chart", app.mount_wallet_chart());
    }
    Ok(app)
}

/// Await `promise` in the background, logging a rejection instead of
/// leaving it unhandled.
fn settle_logged(task: &'static str, promise: Promise) {
    spawn_local(async move {
        if let Err(error) = JsFuture::from(promise).await {
            let reason = error.as_string().unwrap_or_else(|| format!("{:?}", error));
            get_logger().warn(
                LogComponent::Presentation("DashboardApp"),
                &format!("{} failed to mount: {}", task, reason),
            );
        }
    });
}
