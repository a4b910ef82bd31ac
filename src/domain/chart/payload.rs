use serde::{Deserialize, Serialize};
use serde::de::DeserializeOwned;

use crate::domain::errors::PayloadError;
use crate::domain::logging::LogComponent;
use crate::log_warn;

/// JSON body served by the chart endpoints.
///
/// `series` entries are aligned by index with `labels`; mismatches are
/// logged but not rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPayload<S> {
    pub series: Vec<S>,
    pub labels: Vec<String>,
}

/// `{series: [[f64, ..]], labels: [ISO date, ..]}` from the profit endpoint
pub type ProfitPayload = ChartPayload<Vec<f64>>;

/// `{series: [f64, ..], labels: [category, ..]}` from the wallet endpoint
pub type WalletPayload = ChartPayload<f64>;

impl<S: DeserializeOwned> ChartPayload<S> {
    pub fn from_json(body: serde_json::Value) -> Result<Self, PayloadError> {
        serde_json::from_value(body).map_err(|e| PayloadError::Shape(e.to_string()))
    }
}

impl<S> ChartPayload<S> {
    pub fn last_label(&self) -> Option<&str> {
        self.labels.last().map(String::as_str)
    }
}

impl ProfitPayload {
    /// The single profit series. An absent series renders as empty.
    pub fn profit_series(&self) -> &[f64] {
        self.series.first().map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn warn_on_misalignment(&self) {
        let points = self.profit_series().len();
        if self.series.len() != 1 || points != self.labels.len() {
            log_warn!(
                LogComponent::Domain("ProfitPayload"),
                "{} series with {} points for {} labels",
                self.series.len(),
                points,
                self.labels.len()
            );
        }
    }
}

impl WalletPayload {
    pub fn warn_on_misalignment(&self) {
        if self.series.len() != self.labels.len() {
            log_warn!(
                LogComponent::Domain("WalletPayload"),
                "{} balances for {} currencies",
                self.series.len(),
                self.labels.len()
            );
        }
    }
}
