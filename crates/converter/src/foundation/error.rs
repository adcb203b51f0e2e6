//! The error surfaced by failed conversions.
//!
//! Unmarshalling fails when the serialized input does not represent a value.
//! Wrapper converters hand the inner converter's error to the caller as is,
//! so the offending value is kept in rendered form and one error type serves
//! every value type.
//!
//! # Examples
//!
//! ```rust,ignore
//! use morph_converter::foundation::{ConversionError, ConversionErrorKind};
//!
//! let error = ConversionError::unknown_enum_name("XXX");
//! assert_eq!(error.kind(), ConversionErrorKind::UnknownEnumName);
//! assert_eq!(error.to_string(), "cannot parse enum string: XXX");
//! ```

use std::fmt;

// ============================================================================
// ERROR KIND
// ============================================================================

/// The cause of a [`ConversionError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ConversionErrorKind {
    /// The serialized input has the wrong shape.
    Malformed,
    /// No enum member has the given name.
    UnknownEnumName,
    /// The value is missing from the enum's member table.
    UnknownEnumValue,
}

impl fmt::Display for ConversionErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Malformed => "malformed",
            Self::UnknownEnumName => "unknown_enum_name",
            Self::UnknownEnumValue => "unknown_enum_value",
        })
    }
}

// ============================================================================
// CONVERSION ERROR
// ============================================================================

/// A failed conversion: a description plus the offending value, if any.
///
/// Displays as `description` or `description: value`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{description}{}", value_suffix(.value))]
pub struct ConversionError {
    kind: ConversionErrorKind,
    description: String,
    value: Option<String>,
}

#[allow(clippy::ref_option)] // thiserror hands fields over by reference
fn value_suffix(value: &Option<String>) -> String {
    value
        .as_ref()
        .map(|value| format!(": {value}"))
        .unwrap_or_default()
}

/// Result of a conversion.
pub type ConversionResult<T> = Result<T, ConversionError>;

impl ConversionError {
    /// Creates a [`Malformed`](ConversionErrorKind::Malformed) error without
    /// a value.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            kind: ConversionErrorKind::Malformed,
            description: description.into(),
            value: None,
        }
    }

    /// Creates a [`Malformed`](ConversionErrorKind::Malformed) error for
    /// `value`.
    pub fn malformed(description: impl Into<String>, value: impl fmt::Display) -> Self {
        Self::new(description).with_value(value)
    }

    /// The serialized name matches no enum member.
    pub fn unknown_enum_name(name: impl fmt::Display) -> Self {
        Self {
            kind: ConversionErrorKind::UnknownEnumName,
            ..Self::new("cannot parse enum string")
        }
        .with_value(name)
    }

    /// The value has no name in the enum's member table.
    pub fn unknown_enum_value(value: impl fmt::Display) -> Self {
        Self {
            kind: ConversionErrorKind::UnknownEnumValue,
            ..Self::new("cannot marshal enum value")
        }
        .with_value(value)
    }

    /// Attaches the offending value.
    pub fn with_value(mut self, value: impl fmt::Display) -> Self {
        self.value = Some(value.to_string());
        self
    }

    pub fn kind(&self) -> ConversionErrorKind {
        self.kind
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// The offending value as rendered at construction.
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_display_without_value() {
        let error = ConversionError::new("cannot convert");
        assert_eq!(error.to_string(), "cannot convert");
        assert_eq!(error.value(), None);
        assert_eq!(error.kind(), ConversionErrorKind::Malformed);
    }

    #[test]
    fn test_display_with_value() {
        let error = ConversionError::malformed("cannot parse color string", "nope");
        assert_eq!(error.to_string(), "cannot parse color string: nope");
        assert_eq!(error.description(), "cannot parse color string");
        assert_eq!(error.value(), Some("nope"));
    }

    #[test]
    fn test_enum_errors() {
        let name = ConversionError::unknown_enum_name("XXX");
        assert_eq!(name.kind(), ConversionErrorKind::UnknownEnumName);
        assert_eq!(name.to_string(), "cannot parse enum string: XXX");

        let value = ConversionError::unknown_enum_value(42);
        assert_eq!(value.kind(), ConversionErrorKind::UnknownEnumValue);
        assert_eq!(value.value(), Some("42"));
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(ConversionErrorKind::UnknownEnumName.to_string(), "unknown_enum_name");
    }
}
