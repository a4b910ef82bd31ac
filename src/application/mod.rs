pub mod chart_service;
pub mod ports;

pub use chart_service::{ChartService, ProfitChart};
pub use ports::{ChartHost, ChartSurface, JsonSource};
