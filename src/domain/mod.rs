pub mod chart;
pub mod errors;
pub mod layout;
pub mod logging;
