//! Error taxonomy for the dashboard, grouped by layer.
//!
//! None of these reach the end user: the page keeps working without the
//! chart or chrome behavior that failed, and the error is logged.

use derive_more::{Display, From};

/// Root error type for the dashboard
#[derive(Debug, Clone, PartialEq, Display, From)]
pub enum AppError {
    #[display(fmt = "Domain error: {}", _0)]
    Domain(DomainError),
    #[display(fmt = "Infrastructure error: {}", _0)]
    Infrastructure(InfrastructureError),
}

/// Errors raised by pure chart and layout logic
#[derive(Debug, Clone, PartialEq, Display, From)]
pub enum DomainError {
    #[display(fmt = "payload: {}", _0)]
    Payload(PayloadError),
    #[display(fmt = "palette: {}", _0)]
    Palette(PaletteError),
    #[display(fmt = "range: {}", _0)]
    Range(RangeError),
    #[display(fmt = "unknown language code '{}'", _0)]
    UnknownLanguage(String),
}

#[derive(Debug, Clone, PartialEq, Display)]
pub enum PayloadError {
    #[display(fmt = "body does not match the chart payload shape: {}", _0)]
    Shape(String),
    #[display(fmt = "label '{}' is not an ISO date or datetime", _0)]
    InvalidLabel(String),
}

#[derive(Debug, Clone, PartialEq, Display)]
pub enum PaletteError {
    #[display(fmt = "data-colors is not a JSON array of strings: {}", _0)]
    MalformedAttribute(String),
}

#[derive(Debug, Clone, PartialEq, Display)]
pub enum RangeError {
    #[display(fmt = "cannot compute a time window without labels")]
    NoLabels,
    #[display(fmt = "last label is unusable: {}", _0)]
    InvalidAnchor(PayloadError),
    #[display(fmt = "window start falls outside the supported calendar")]
    OutOfCalendar,
    #[display(fmt = "unknown range button '{}'", _0)]
    UnknownButton(String),
}

/// Errors raised while talking to the browser or external libraries
#[derive(Debug, Clone, PartialEq, Display, From)]
pub enum InfrastructureError {
    #[display(fmt = "network: {}", _0)]
    Network(NetworkError),
    #[display(fmt = "dom: {}", _0)]
    Dom(DomError),
    #[display(fmt = "chart library: {}", _0)]
    Chart(ChartLibraryError),
}

#[derive(Debug, Clone, PartialEq, Display)]
pub enum NetworkError {
    #[display(fmt = "request to {} failed: {}", url, reason)]
    RequestFailed { url: String, reason: String },
    #[display(fmt = "{} answered HTTP {} {}", url, status, status_text)]
    HttpStatus {
        url: String,
        status: u16,
        status_text: String,
    },
    #[display(fmt = "{} returned a non-JSON body: {}", url, reason)]
    InvalidJson { url: String, reason: String },
}

#[derive(Debug, Clone, PartialEq, Display)]
pub enum DomError {
    #[display(fmt = "window not available")]
    WindowUnavailable,
    #[display(fmt = "document not available")]
    DocumentUnavailable,
    #[display(fmt = "element '{}' not found", _0)]
    ElementMissing(String),
    #[display(fmt = "browser API call failed: {}", _0)]
    BrowserApi(String),
}

#[derive(Debug, Clone, PartialEq, Display)]
pub enum ChartLibraryError {
    #[display(fmt = "ApexCharts is not loaded on this page")]
    LibraryMissing,
    #[display(fmt = "options could not be converted: {}", _0)]
    Options(String),
    #[display(fmt = "chart call failed: {}", _0)]
    Call(String),
}

impl std::error::Error for AppError {}
impl std::error::Error for DomainError {}
impl std::error::Error for InfrastructureError {}

impl From<PayloadError> for AppError {
    fn from(error: PayloadError) -> Self {
        AppError::Domain(DomainError::Payload(error))
    }
}

impl From<PaletteError> for AppError {
    fn from(error: PaletteError) -> Self {
        AppError::Domain(DomainError::Palette(error))
    }
}

impl From<RangeError> for AppError {
    fn from(error: RangeError) -> Self {
        AppError::Domain(DomainError::Range(error))
    }
}

impl From<NetworkError> for AppError {
    fn from(error: NetworkError) -> Self {
        AppError::Infrastructure(InfrastructureError::Network(error))
    }
}

impl From<DomError> for AppError {
    fn from(error: DomError) -> Self {
        AppError::Infrastructure(InfrastructureError::Dom(error))
    }
}

impl From<ChartLibraryError> for AppError {
    fn from(error: ChartLibraryError) -> Self {
        AppError::Infrastructure(InfrastructureError::Chart(error))
    }
}

pub type AppResult<T> = Result<T, AppError>;
pub type InfrastructureResult<T> = Result<T, InfrastructureError>;
