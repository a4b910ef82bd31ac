use wasm_bindgen::prelude::*;

use crate::domain::logging::{LogComponent, get_logger};

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
pub mod time_utils;

pub use presentation::{DashboardApp, start_dashboard};

/// Module start hook: panic reporting and the browser clock.
///
/// The console logger is installed by the first `DashboardApp`, since its
/// level comes from the page configuration.
#[wasm_bindgen(start)]
pub fn initialize() {
    console_error_panic_hook::set_once();

    let browser_time_provider = Box::new(infrastructure::services::BrowserTimeProvider::new());
    domain::logging::init_time_provider(browser_time_provider);

    get_logger().debug(LogComponent::Presentation("Initialize"), "dashboard module loaded");
}
