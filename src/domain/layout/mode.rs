use strum::{EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};

/// Session storage key remembering the chosen layout switch
pub const LAYOUT_STORAGE_KEY: &str = "is_visited";

/// Page theme selected through the right-bar switches.
///
/// The string form is the id of the switch input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, EnumIter, EnumString, IntoStaticStr)]
pub enum LayoutMode {
    #[default]
    #[strum(serialize = "light-mode-switch")]
    Light,
    #[strum(serialize = "dark-mode-switch")]
    Dark,
    #[strum(serialize = "rtl-mode-switch")]
    Rtl,
    #[strum(serialize = "dark-rtl-mode-switch")]
    DarkRtl,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextDirection {
    Ltr,
    Rtl,
}

/// Everything a mode changes on the page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutPlan {
    pub mode: LayoutMode,
    /// `None` removes the `dir` attribute from `<html>`.
    pub html_dir: Option<&'static str>,
    pub bootstrap_href: String,
    pub app_href: String,
    pub body_layout_mode: &'static str,
    /// Switch ids that must end up unchecked.
    pub unchecked_switches: Vec<&'static str>,
}

impl LayoutMode {
    pub fn switch_id(self) -> &'static str {
        self.into()
    }

    /// Unknown stored ids fall back to the light layout.
    pub fn from_switch_id(id: &str) -> Option<Self> {
        id.parse().ok()
    }

    pub fn direction(self) -> TextDirection {
        match self {
            LayoutMode::Light | LayoutMode::Dark => TextDirection::Ltr,
            LayoutMode::Rtl | LayoutMode::DarkRtl => TextDirection::Rtl,
        }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, LayoutMode::Dark | LayoutMode::DarkRtl)
    }

    pub fn plan(self, static_root: &str) -> LayoutPlan {
        let root = static_root.trim_end_matches('/');
        let (html_dir, suffix) = match self.direction() {
            TextDirection::Ltr => (None, ""),
            TextDirection::Rtl => (Some("rtl"), "-rtl"),
        };

        LayoutPlan {
            mode: self,
            html_dir,
            bootstrap_href: format!("{root}/css/bootstrap{suffix}.min.css"),
            app_href: format!("{root}/css/app{suffix}.min.css"),
            body_layout_mode: if self.is_dark() { "dark" } else { "light" },
            unchecked_switches: LayoutMode::iter()
                .filter(|other| *other != self)
                .map(LayoutMode::switch_id)
                .collect(),
        }
    }
}
