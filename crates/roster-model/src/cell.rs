//! Tagged cell values.

use std::fmt;

use serde::{Deserialize, Serialize};

/// String forms that mean "no value" once a cell has been stringified.
///
/// The comparison is exact: `NAN` or `Null` are kept as data.
pub const MISSING_VALUE_TOKENS: [&str; 7] = ["nan", "NaT", "<NA>", "None", "none", "NULL", "null"];

/// A single value loaded from a roster export.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum Cell {
    Text(String),
    Number(f64),
    #[default]
    Missing,
}

impl Cell {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    pub fn empty() -> Self {
        Self::Text(String::new())
    }

    /// True for [`Cell::Missing`] and for NaN numbers.
    pub fn is_missing(&self) -> bool {
        match self {
            Self::Missing => true,
            Self::Number(value) => value.is_nan(),
            Self::Text(_) => false,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(value) => Some(value),
            _ => None,
        }
    }

    /// Raw string form without missing-token folding.
    pub fn display_string(&self) -> String {
        match self {
            Self::Text(value) => value.clone(),
            Self::Number(value) if value.is_nan() => String::new(),
            Self::Number(value) => format_numeric(*value),
            Self::Missing => String::new(),
        }
    }

    /// String form with every missing representation collapsed to "".
    pub fn to_normalized_string(&self) -> String {
        let raw = self.display_string();
        if is_missing_token(&raw) {
            String::new()
        } else {
            raw
        }
    }

    /// True when the normalized string form is empty.
    pub fn is_blank(&self) -> bool {
        self.is_missing() || self.to_normalized_string().is_empty()
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Cell {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<f64> for Cell {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i64> for Cell {
    fn from(value: i64) -> Self {
        Self::Number(value as f64)
    }
}

impl<T: Into<Cell>> From<Option<T>> for Cell {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Missing, Into::into)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_string())
    }
}

/// Returns true if `value` is one of [`MISSING_VALUE_TOKENS`].
pub fn is_missing_token(value: &str) -> bool {
    MISSING_VALUE_TOKENS.contains(&value)
}

/// Formats a number without a trailing `.0` when it is integral.
pub fn format_numeric(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_render_without_trailing_zero() {
        assert_eq!(Cell::Number(1001.0).display_string(), "1001");
        assert_eq!(Cell::Number(-3.0).display_string(), "-3");
        assert_eq!(Cell::Number(2.5).display_string(), "2.5");
    }

    #[test]
    fn nan_number_is_missing() {
        let cell = Cell::Number(f64::NAN);
        assert!(cell.is_missing());
        assert_eq!(cell.to_normalized_string(), "");
    }

    #[test]
    fn missing_tokens_fold_to_empty() {
        for token in MISSING_VALUE_TOKENS {
            assert_eq!(Cell::text(token).to_normalized_string(), "", "{token}");
        }
        assert_eq!(Cell::text("NAN").to_normalized_string(), "NAN");
        assert_eq!(Cell::text(" nan").to_normalized_string(), " nan");
    }

    #[test]
    fn blank_covers_missing_and_empty_text() {
        assert!(Cell::Missing.is_blank());
        assert!(Cell::empty().is_blank());
        assert!(Cell::text("None").is_blank());
        assert!(!Cell::text(" ").is_blank());
        assert!(!Cell::Number(0.0).is_blank());
    }

    #[test]
    fn option_conversion() {
        assert_eq!(Cell::from(None::<&str>), Cell::Missing);
        assert_eq!(Cell::from(Some("x")), Cell::text("x"));
    }
}
