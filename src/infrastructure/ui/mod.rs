//! Page chrome: theme switches, menus, form helpers and notifications.

pub mod controls;
pub mod language;
pub mod layout_mode;
pub mod navigation;
pub mod notifications;

use gloo::events::EventListener;
use gloo::timers::callback::Timeout;

use crate::config::DashboardConfig;
use crate::domain::errors::DomError;
use crate::domain::logging::{LogComponent, get_logger};
use crate::infrastructure::dom;
use crate::infrastructure::http::DashboardHttpClient;

/// Every chrome listener and timer on the page. Dropping it detaches them.
#[derive(Default)]
pub struct LayoutChrome {
    listeners: Vec<EventListener>,
    timers: Vec<Timeout>,
}

impl LayoutChrome {
    /// Bind every behavior whose elements exist on this page.
    ///
    /// A behavior that fails to bind is logged and skipped; the others
    /// still install.
    pub fn install(config: &DashboardConfig, http: &DashboardHttpClient) -> Result<Self, DomError> {
        let document = dom::document()?;
        let mut chrome = Self::default();
        let listeners = &mut chrome.listeners;

        let steps = [
            ("layout mode", layout_mode::install(&document, &config.static_root, listeners)),
            (
                "language",
                language::install(&document, http, &config.static_root, &config.default_language, listeners),
            ),
            ("navigation", navigation::highlight_current_page(&document)),
            ("top menu", navigation::install_topnav(&document, listeners)),
            (
                "vertical menu",
                controls::install_vertical_menu(&document, config.collapse_breakpoint_px, listeners),
            ),
            ("fullscreen", controls::install_fullscreen(&document, listeners)),
            ("right bar", controls::install_right_bar(&document, listeners)),
            ("select all", controls::install_check_all(&document, listeners)),
            ("password addon", controls::install_password_addon(&document, listeners)),
            (
                "toast",
                notifications::install_toast(&document, config.toast_timeout_ms, listeners, &mut chrome.timers),
            ),
            ("preloader", notifications::install_preloader(&document, listeners)),
        ];

        for (behavior, result) in steps {
            if let Err(error) = result {
                get_logger().warn(
                    LogComponent::Infrastructure("LayoutChrome"),
                    &format!("{} not installed: {}", behavior, error),
                );
            }
        }

        get_logger().debug(
            LogComponent::Infrastructure("LayoutChrome"),
            &format!("{} listeners bound", chrome.listeners.len()),
        );
        Ok(chrome)
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}
