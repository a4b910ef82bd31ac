use chrono::{DateTime, Utc};
use strum::{EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};

use crate::domain::errors::RangeError;
use crate::time_utils::{months_before, parse_label};

/// Visible window choices offered next to the profit chart.
///
/// The string form is the id of the button that selects the range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, IntoStaticStr)]
pub enum RangeSelection {
    #[strum(serialize = "one_month")]
    OneMonth,
    #[strum(serialize = "six_months")]
    SixMonths,
    #[strum(serialize = "one_year")]
    OneYear,
    #[strum(serialize = "all")]
    All,
}

impl RangeSelection {
    pub fn button_id(self) -> &'static str {
        self.into()
    }

    pub fn from_button_id(id: &str) -> Result<Self, RangeError> {
        id.parse().map_err(|_| RangeError::UnknownButton(id.to_string()))
    }

    /// Calendar months covered, `None` for the unbounded range.
    pub fn months(self) -> Option<u32> {
        match self {
            RangeSelection::OneMonth => Some(1),
            RangeSelection::SixMonths => Some(6),
            RangeSelection::OneYear => Some(12),
            RangeSelection::All => None,
        }
    }

    /// Window ending at `anchor` for this selection.
    pub fn window_ending_at(self, anchor: DateTime<Utc>) -> Result<AxisWindow, RangeError> {
        match self.months() {
            None => Ok(AxisWindow::unbounded()),
            Some(months) => {
                let start = months_before(anchor, months).ok_or(RangeError::OutOfCalendar)?;
                Ok(AxisWindow {
                    min: Some(start.timestamp_millis()),
                    max: Some(anchor.timestamp_millis()),
                })
            }
        }
    }
}

/// x-axis bounds in epoch milliseconds; `None` clears a bound
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AxisWindow {
    pub min: Option<i64>,
    pub max: Option<i64>,
}

impl AxisWindow {
    pub fn unbounded() -> Self {
        Self::default()
    }

    pub fn is_bounded(&self) -> bool {
        self.min.is_some() || self.max.is_some()
    }
}

/// Outcome of a range click: the window to push to the chart and which
/// buttons end up active.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeTransition {
    pub selection: RangeSelection,
    pub window: AxisWindow,
}

impl RangeTransition {
    /// `(button id, active)` for every range button.
    pub fn button_states(&self) -> Vec<(&'static str, bool)> {
        RangeSelection::iter()
            .map(|range| (range.button_id(), range == self.selection))
            .collect()
    }
}

/// Tracks the active range of one profit chart.
///
/// Windows are anchored on the last label and recomputed on every
/// selection; nothing is cached between clicks.
#[derive(Debug, Clone)]
pub struct TimeRangeFilter {
    last_label: Option<String>,
    active: Option<RangeSelection>,
}

impl TimeRangeFilter {
    pub fn new(labels: &[String]) -> Self {
        Self {
            last_label: labels.last().cloned(),
            active: None,
        }
    }

    pub fn active(&self) -> Option<RangeSelection> {
        self.active
    }

    /// Enter `selection`. On error the active range is left untouched.
    pub fn select(&mut self, selection: RangeSelection) -> Result<RangeTransition, RangeError> {
        let window = match selection {
            RangeSelection::All => AxisWindow::unbounded(),
            bounded => {
                let anchor = self.anchor()?;
                bounded.window_ending_at(anchor)?
            }
        };

        self.active = Some(selection);
        Ok(RangeTransition { selection, window })
    }

    fn anchor(&self) -> Result<DateTime<Utc>, RangeError> {
        let label = self.last_label.as_deref().ok_or(RangeError::NoLabels)?;
        parse_label(label).map_err(RangeError::InvalidAnchor)
    }
}
