pub mod options;
pub mod palette;
pub mod payload;
pub mod range;

pub use options::{AreaChartOptions, ChartOptions, PieChartOptions};
pub use palette::{CssVariableSource, resolve_palette};
pub use payload::{ChartPayload, ProfitPayload, WalletPayload};
pub use range::{AxisWindow, RangeSelection, RangeTransition, TimeRangeFilter};
