//! Declarative constraints for the order form.
//!
//! Each validated field owns exactly one [`FieldRule`]. Rules are pure: the
//! same input always produces the same outcome, so a later check simply
//! supersedes an earlier one.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::order::form::FormData;

pub const FULL_NAME_MIN_LEN: usize = 3;
pub const FULL_NAME_MAX_LEN: usize = 20;
pub const SIZE_CODES: [&str; 3] = ["S", "M", "L"];

const FULL_NAME_TOO_SHORT: &str = "full name must be at least 3 characters";
const FULL_NAME_TOO_LONG: &str = "full name must be at most 20 characters";
const SIZE_INCORRECT: &str = "size must be S or M or L";

/// Fields that carry a validation rule. Toppings are unconstrained and have
/// no entry here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FieldName {
    #[serde(rename = "fullName")]
    FullName,
    #[serde(rename = "size")]
    Size,
}

impl FieldName {
    pub const ALL: [FieldName; 2] = [FieldName::FullName, FieldName::Size];

    /// Form key as it appears on the input's `name` attribute.
    pub fn key(self) -> &'static str {
        match self {
            FieldName::FullName => "fullName",
            FieldName::Size => "size",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.key() == key)
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Field-level validation failure. The message set is closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{}", FULL_NAME_TOO_SHORT)]
    FullNameTooShort,
    #[error("{}", FULL_NAME_TOO_LONG)]
    FullNameTooLong,
    #[error("{}", SIZE_INCORRECT)]
    SizeIncorrect,
}

impl ValidationError {
    pub fn message(self) -> &'static str {
        match self {
            ValidationError::FullNameTooShort => FULL_NAME_TOO_SHORT,
            ValidationError::FullNameTooLong => FULL_NAME_TOO_LONG,
            ValidationError::SizeIncorrect => SIZE_INCORRECT,
        }
    }
}

/// Whitespace stripped from both ends before a length check: the ECMAScript
/// WhiteSpace and LineTerminator sets. Unlike [`char::is_whitespace`] this
/// includes U+FEFF and excludes U+0085.
pub fn is_form_whitespace(c: char) -> bool {
    matches!(
        c,
        '\u{0009}'..='\u{000D}'
            | '\u{0020}'
            | '\u{00A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

/// Length of `input` after trimming form whitespace, in UTF-16 code units.
/// Characters outside the Basic Multilingual Plane count twice.
pub fn trimmed_len(input: &str) -> usize {
    input
        .trim_matches(is_form_whitespace)
        .encode_utf16()
        .count()
}

/// Built-in rule kinds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldRule {
    /// [`trimmed_len`] of the input must fall in `min..=max`.
    TrimmedLength {
        min: usize,
        max: usize,
        too_short: ValidationError,
        too_long: ValidationError,
    },
    /// Input must equal one of the options exactly.
    OneOf {
        options: Vec<&'static str>,
        error: ValidationError,
    },
}

impl FieldRule {
    pub fn check(&self, input: &str) -> Result<(), ValidationError> {
        match self {
            FieldRule::TrimmedLength {
                min,
                max,
                too_short,
                too_long,
            } => {
                let len = trimmed_len(input);
                if len < *min {
                    Err(*too_short)
                } else if len > *max {
                    Err(*too_long)
                } else {
                    Ok(())
                }
            }
            FieldRule::OneOf { options, error } => {
                if options.iter().any(|option| *option == input) {
                    Ok(())
                } else {
                    Err(*error)
                }
            }
        }
    }
}

/// Declarative description of one validated field.
#[derive(Debug, Clone)]
pub struct FieldSchema {
    pub field: FieldName,
    pub label: &'static str,
    pub rule: FieldRule,
}

impl FieldSchema {
    pub fn new(field: FieldName, label: &'static str, rule: FieldRule) -> Self {
        Self { field, label, rule }
    }
}

/// Complete rule set for the pizza order form.
#[derive(Debug, Clone)]
pub struct OrderSchema {
    fields: Vec<FieldSchema>,
}

impl Default for OrderSchema {
    fn default() -> Self {
        Self {
            fields: vec![
                FieldSchema::new(
                    FieldName::FullName,
                    "Full Name",
                    FieldRule::TrimmedLength {
                        min: FULL_NAME_MIN_LEN,
                        max: FULL_NAME_MAX_LEN,
                        too_short: ValidationError::FullNameTooShort,
                        too_long: ValidationError::FullNameTooLong,
                    },
                ),
                FieldSchema::new(
                    FieldName::Size,
                    "Size",
                    FieldRule::OneOf {
                        options: SIZE_CODES.to_vec(),
                        error: ValidationError::SizeIncorrect,
                    },
                ),
            ],
        }
    }
}

impl OrderSchema {
    pub fn fields(&self) -> &[FieldSchema] {
        &self.fields
    }

    pub fn field(&self, field: FieldName) -> Option<&FieldSchema> {
        self.fields.iter().find(|schema| schema.field == field)
    }

    /// Checks a single candidate value against the named field's rule.
    pub fn validate_field(&self, field: FieldName, value: &str) -> Result<(), ValidationError> {
        match self.field(field) {
            Some(schema) => schema.rule.check(value),
            None => Ok(()),
        }
    }

    /// True iff every validated field of `data` satisfies its rule.
    pub fn is_valid(&self, data: &FormData) -> bool {
        self.fields
            .iter()
            .all(|schema| schema.rule.check(data.field_value(schema.field)).is_ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_name_bounds_use_trimmed_length() {
        let schema = OrderSchema::default();
        assert_eq!(
            schema.validate_field(FieldName::FullName, "  Al  "),
            Err(ValidationError::FullNameTooShort)
        );
        assert_eq!(schema.validate_field(FieldName::FullName, "  Bob  "), Ok(()));
        assert_eq!(
            schema.validate_field(FieldName::FullName, "abcdefghijklmnopqrst"),
            Ok(())
        );
        assert_eq!(
            schema.validate_field(FieldName::FullName, "abcdefghijklmnopqrstu"),
            Err(ValidationError::FullNameTooLong)
        );
    }

    #[test]
    fn full_name_counts_code_units_not_bytes() {
        let schema = OrderSchema::default();
        assert_eq!(schema.validate_field(FieldName::FullName, "Zoë"), Ok(()));
        assert_eq!(
            schema.validate_field(FieldName::FullName, "ééééééééééééééééééé"),
            Ok(())
        );
    }

    #[test]
    fn trimmed_len_counts_utf16_units() {
        assert_eq!(trimmed_len("Al"), 2);
        assert_eq!(trimmed_len("\u{1F355}\u{1F355}"), 4);
        assert_eq!(trimmed_len("\u{FEFF}Al\u{FEFF}"), 2);
        assert_eq!(trimmed_len("\u{0085}Al"), 3);
        assert_eq!(trimmed_len("\u{3000} Bob \u{2028}"), 3);
    }

    #[test]
    fn size_accepts_only_exact_codes() {
        let schema = OrderSchema::default();
        for code in SIZE_CODES {
            assert_eq!(schema.validate_field(FieldName::Size, code), Ok(()));
        }
        for bad in ["", "s", "XL", " M"] {
            assert_eq!(
                schema.validate_field(FieldName::Size, bad),
                Err(ValidationError::SizeIncorrect),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn messages_match_display() {
        for error in [
            ValidationError::FullNameTooShort,
            ValidationError::FullNameTooLong,
            ValidationError::SizeIncorrect,
        ] {
            assert_eq!(error.to_string(), error.message());
        }
    }

    #[test]
    fn field_keys_round_trip() {
        for field in FieldName::ALL {
            assert_eq!(FieldName::from_key(field.key()), Some(field));
        }
        assert_eq!(FieldName::from_key("toppings"), None);
    }
}
