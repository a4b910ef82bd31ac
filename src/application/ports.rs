//! Seams between the chart pipeline and the browser.

use futures::future::LocalBoxFuture;
use serde_json::Value;

use crate::domain::chart::{AxisWindow, ChartOptions, CssVariableSource};
use crate::domain::errors::InfrastructureResult;

/// Fetches JSON documents by endpoint path
pub trait JsonSource {
    fn get_json<'a>(&'a self, endpoint: &'a str) -> LocalBoxFuture<'a, InfrastructureResult<Value>>;
}

/// A mounted chart that accepts partial option updates
pub trait ChartSurface {
    fn apply_window(&self, window: &AxisWindow) -> InfrastructureResult<()>;
}

/// Page the charts are mounted into
pub trait ChartHost: CssVariableSource {
    type Chart: ChartSurface;

    fn has_container(&self, container_id: &str) -> bool;

    fn container_attribute(&self, container_id: &str, attribute: &str) -> Option<String>;

    fn mount(&self, container_id: &str, options: &ChartOptions) -> InfrastructureResult<Self::Chart>;

    /// Mark `button_id` active and clear `active` from its sibling buttons.
    fn activate_button(&self, button_id: &str) -> InfrastructureResult<()>;
}
