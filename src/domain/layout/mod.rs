//! Page chrome rules, free of DOM access so they run in native tests.

pub mod language;
pub mod mode;
pub mod navigation;
pub mod selection;

pub use language::{Language, TranslationBundle};
pub use mode::{LayoutMode, LayoutPlan};
