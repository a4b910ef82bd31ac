//! Chart colors declared in a container's `data-colors` attribute.
//!
//! The attribute holds a JSON array of tokens. A bare token names a CSS
//! custom property (`--bs-primary`); a `name,alpha` token becomes an
//! `rgba(...)` composite of that property's RGB triplet, left empty when
//! the property is unset.

use crate::domain::errors::PaletteError;

/// Lookup of CSS custom properties on the document root
pub trait CssVariableSource {
    /// Computed value of `name`, or `None` when unset or blank.
    fn css_variable(&self, name: &str) -> Option<String>;
}

/// Parse and resolve a raw `data-colors` attribute.
pub fn resolve_palette(raw: &str, source: &impl CssVariableSource) -> Result<Vec<String>, PaletteError> {
    let tokens: Vec<String> =
        serde_json::from_str(raw).map_err(|e| PaletteError::MalformedAttribute(e.to_string()))?;

    Ok(tokens.iter().map(|token| resolve_token(token, source)).collect())
}

pub fn resolve_token(token: &str, source: &impl CssVariableSource) -> String {
    let stripped: String = token.chars().filter(|c| !c.is_whitespace()).collect();
    let parts: Vec<&str> = stripped.split(',').collect();

    match parts.as_slice() {
        [name] => source.css_variable(name).unwrap_or_else(|| stripped.clone()),
        [name, alpha] => {
            let rgb = source.css_variable(name).unwrap_or_default();
            format!("rgba({},{})", rgb, alpha)
        }
        _ => stripped,
    }
}
