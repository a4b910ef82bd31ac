use serde::de::DeserializeOwned;

use crate::application::ports::{ChartHost, ChartSurface, JsonSource};
use crate::config::DashboardConfig;
use crate::domain::chart::{
    AreaChartOptions, ChartOptions, ChartPayload, PieChartOptions, ProfitPayload, RangeSelection,
    RangeTransition, TimeRangeFilter, WalletPayload, resolve_palette,
};
use crate::domain::errors::AppResult;
use crate::domain::logging::{LogComponent, LogLevel, get_logger};
use crate::{log_debug, log_info, log_warn};

const COLORS_ATTRIBUTE: &str = "data-colors";

/// Profit chart together with its range filter
pub struct ProfitChart<C> {
    pub chart: C,
    pub filter: TimeRangeFilter,
    pub point_count: usize,
}

/// Fetch, build and mount pipeline shared by both dashboard charts.
pub struct ChartService<S, H> {
    source: S,
    host: H,
    config: DashboardConfig,
}

impl<S: JsonSource, H: ChartHost> ChartService<S, H> {
    pub fn new(source: S, host: H, config: DashboardConfig) -> Self {
        Self { source, host, config }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    /// One fetch of `endpoint`, decoded into a chart payload.
    pub async fn load<P: DeserializeOwned>(&self, endpoint: &str) -> AppResult<ChartPayload<P>> {
        log_debug!(LogComponent::Application("ChartService"), "fetching {}", endpoint);

        let body = self.source.get_json(endpoint).await?;
        let payload = ChartPayload::<P>::from_json(body)?;

        log_debug!(
            LogComponent::Application("ChartService"),
            "{} returned {} labels",
            endpoint,
            payload.labels.len()
        );
        Ok(payload)
    }

    /// Mount the profit area chart. `Ok(None)` when the page has no
    /// container or the container declares no palette.
    pub fn render_profit(&self, payload: &ProfitPayload) -> AppResult<Option<ProfitChart<H::Chart>>> {
        let container = self.config.profit_container_id.as_str();
        if !self.host.has_container(container) {
            log_warn!(LogComponent::Application("ChartService"), "no #{} on this page", container);
            return Ok(None);
        }

        let Some(raw_colors) = self.host.container_attribute(container, COLORS_ATTRIBUTE) else {
            log_warn!(
                LogComponent::Application("ChartService"),
                "#{} has no {} attribute, profit chart skipped",
                container,
                COLORS_ATTRIBUTE
            );
            return Ok(None);
        };
        let colors = resolve_palette(&raw_colors, &self.host)?;

        payload.warn_on_misalignment();
        let options = ChartOptions::Area(AreaChartOptions::profit(payload, colors));
        let point_count = options.point_count();
        let chart = self.host.mount(container, &options)?;

        log_info!(
            LogComponent::Application("ChartService"),
            "profit chart mounted with {} points",
            point_count
        );
        Ok(Some(ProfitChart {
            chart,
            filter: TimeRangeFilter::new(&payload.labels),
            point_count,
        }))
    }

    /// Mount the wallet pie chart. `Ok(None)` when the page has no container.
    pub fn render_wallet(&self, payload: &WalletPayload) -> AppResult<Option<H::Chart>> {
        let container = self.config.wallet_container_id.as_str();
        if !self.host.has_container(container) {
            log_warn!(LogComponent::Application("ChartService"), "no #{} on this page", container);
            return Ok(None);
        }

        payload.warn_on_misalignment();
        let options = ChartOptions::Pie(PieChartOptions::wallet(payload));
        let chart = self.host.mount(container, &options)?;

        log_info!(
            LogComponent::Application("ChartService"),
            "wallet chart mounted with {} slices",
            options.point_count()
        );
        Ok(Some(chart))
    }

    pub async fn mount_profit_chart(&self) -> Option<ProfitChart<H::Chart>> {
        let endpoint = self.config.profit_endpoint.clone();
        let result = async {
            let payload: ProfitPayload = self.load(&endpoint).await?;
            self.render_profit(&payload)
        }
        .await;

        result.unwrap_or_else(|error| {
            get_logger().log_with_metadata(
                LogLevel::Error,
                LogComponent::Application("ChartService"),
                &format!("profit chart not rendered: {}", error),
                &endpoint,
            );
            None
        })
    }

    pub async fn mount_wallet_chart(&self) -> Option<H::Chart> {
        let endpoint = self.config.wallet_endpoint.clone();
        let result = async {
            let payload: WalletPayload = self.load(&endpoint).await?;
            self.render_wallet(&payload)
        }
        .await;

        result.unwrap_or_else(|error| {
            get_logger().log_with_metadata(
                LogLevel::Error,
                LogComponent::Application("ChartService"),
                &format!("wallet chart not rendered: {}", error),
                &endpoint,
            );
            None
        })
    }

    /// Narrow the profit chart to `selection` and move the active marker.
    ///
    /// Once the chart has taken the new window the selection stands; a
    /// page without the range buttons only loses the marker.
    pub fn select_range(
        &self,
        profit: &mut ProfitChart<H::Chart>,
        selection: RangeSelection,
    ) -> AppResult<RangeTransition> {
        let mut filter = profit.filter.clone();
        let transition = filter.select(selection)?;

        profit.chart.apply_window(&transition.window)?;
        profit.filter = filter;

        if let Err(error) = self.host.activate_button(selection.button_id()) {
            log_warn!(
                LogComponent::Application("ChartService"),
                "range {} applied but its button was not marked: {}",
                selection.button_id(),
                error
            );
        }

        log_debug!(
            LogComponent::Application("ChartService"),
            "range {} -> {:?}",
            selection.button_id(),
            transition.window
        );
        Ok(transition)
    }
}
