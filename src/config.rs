use serde::Deserialize;

use crate::domain::logging::LogLevel;

/// Page-level settings, supplied from JS as an optional camelCase object.
///
/// Every field has a default matching the stock dashboard template, so
/// `new DashboardApp()` works without arguments.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DashboardConfig {
    pub profit_endpoint: String,
    pub wallet_endpoint: String,
    pub profit_container_id: String,
    pub wallet_container_id: String,
    /// Prefix for stylesheets, flags and translation bundles
    pub static_root: String,
    pub default_language: String,
    pub toast_timeout_ms: u32,
    pub collapse_breakpoint_px: f64,
    pub debug: bool,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            profit_endpoint: "/profit_chart_data/".to_string(),
            wallet_endpoint: "/get_chart_data/".to_string(),
            profit_container_id: "profit-chart-timeline".to_string(),
            wallet_container_id: "balance-chart".to_string(),
            static_root: "../../static".to_string(),
            default_language: "en".to_string(),
            toast_timeout_ms: 5000,
            collapse_breakpoint_px: crate::domain::layout::navigation::COLLAPSE_BREAKPOINT_PX,
            debug: false,
        }
    }
}

impl DashboardConfig {
    pub fn min_log_level(&self) -> LogLevel {
        if self.debug { LogLevel::Debug } else { LogLevel::Info }
    }
}
