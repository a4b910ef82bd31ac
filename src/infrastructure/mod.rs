pub mod apex;
pub mod dom;
pub mod http;
pub mod services;
pub mod ui;

pub use apex::{ApexChart, BrowserChartHost};
pub use http::DashboardHttpClient;
pub use services::{BrowserTimeProvider, ConsoleLogger};
pub use ui::LayoutChrome;
