//! ApexCharts option documents for the two dashboard charts.
//!
//! Field names follow the library's camelCase schema so the structs can be
//! handed to `new ApexCharts(el, options)` after serialization.

use serde::Serialize;

use super::payload::{ProfitPayload, WalletPayload};

pub const PROFIT_SERIES_NAME: &str = "Profit";
pub const PROFIT_CHART_HEIGHT: u32 = 240;
pub const PROFIT_TICK_AMOUNT: u32 = 6;
pub const WALLET_CHART_WIDTH: u32 = 380;
pub const WALLET_BREAKPOINT_PX: u32 = 480;
pub const WALLET_NARROW_WIDTH: u32 = 200;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ChartOptions {
    Area(AreaChartOptions),
    Pie(PieChartOptions),
}

impl ChartOptions {
    pub fn point_count(&self) -> usize {
        match self {
            ChartOptions::Area(area) => area.series.iter().map(|s| s.data.len()).sum(),
            ChartOptions::Pie(pie) => pie.series.len(),
        }
    }

    pub fn labels(&self) -> &[String] {
        match self {
            ChartOptions::Area(area) => &area.labels,
            ChartOptions::Pie(pie) => &pie.labels,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NamedSeries {
    pub name: String,
    pub data: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Toolbar {
    pub show: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AreaChartFrame {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub height: u32,
    pub toolbar: Toolbar,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DataLabels {
    pub enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Stroke {
    pub curve: &'static str,
    pub width: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Markers {
    pub size: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DatetimeAxis {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub tick_amount: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValueAxis {
    pub tick_amount: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TooltipX {
    pub format: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tooltip {
    pub x: TooltipX,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Gradient {
    pub shade_intensity: f64,
    pub opacity_from: f64,
    pub opacity_to: f64,
    pub stops: [u32; 4],
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Fill {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub gradient: Gradient,
}

/// Smoothed profit area chart over a datetime axis
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AreaChartOptions {
    pub series: Vec<NamedSeries>,
    pub chart: AreaChartFrame,
    pub data_labels: DataLabels,
    pub stroke: Stroke,
    pub markers: Markers,
    pub xaxis: DatetimeAxis,
    pub tooltip: Tooltip,
    pub yaxis: ValueAxis,
    pub labels: Vec<String>,
    pub colors: Vec<String>,
    pub fill: Fill,
}

impl AreaChartOptions {
    pub fn profit(payload: &ProfitPayload, colors: Vec<String>) -> Self {
        Self {
            series: vec![NamedSeries {
                name: PROFIT_SERIES_NAME.to_string(),
                data: payload.profit_series().to_vec(),
            }],
            chart: AreaChartFrame {
                kind: "area",
                height: PROFIT_CHART_HEIGHT,
                toolbar: Toolbar { show: false },
            },
            data_labels: DataLabels { enabled: false },
            stroke: Stroke { curve: "smooth", width: 2 },
            markers: Markers { size: 0 },
            xaxis: DatetimeAxis { kind: "datetime", tick_amount: PROFIT_TICK_AMOUNT },
            tooltip: Tooltip { x: TooltipX { format: "dd MMM yyyy" } },
            yaxis: ValueAxis { tick_amount: PROFIT_TICK_AMOUNT },
            labels: payload.labels.clone(),
            colors,
            fill: Fill {
                kind: "gradient",
                gradient: Gradient {
                    shade_intensity: 1.0,
                    opacity_from: 0.6,
                    opacity_to: 0.05,
                    stops: [42, 100, 100, 100],
                },
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieChartFrame {
    pub width: u32,
    #[serde(rename = "type")]
    pub kind: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartWidth {
    pub width: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Legend {
    pub position: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BreakpointOverrides {
    pub chart: ChartWidth,
    pub legend: Legend,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResponsiveRule {
    pub breakpoint: u32,
    pub options: BreakpointOverrides,
}

/// Wallet balance pie chart, one slice per currency
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieChartOptions {
    pub series: Vec<f64>,
    pub chart: PieChartFrame,
    pub labels: Vec<String>,
    pub responsive: Vec<ResponsiveRule>,
}

impl PieChartOptions {
    pub fn wallet(payload: &WalletPayload) -> Self {
        Self {
            series: payload.series.clone(),
            chart: PieChartFrame { width: WALLET_CHART_WIDTH, kind: "pie" },
            labels: payload.labels.clone(),
            responsive: vec![ResponsiveRule {
                breakpoint: WALLET_BREAKPOINT_PX,
                options: BreakpointOverrides {
                    chart: ChartWidth { width: WALLET_NARROW_WIDTH },
                    legend: Legend { position: "bottom" },
                },
            }],
        }
    }
}
