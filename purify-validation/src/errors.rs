// Validation report and error types

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

/// Message reported when the validated value is not a record.
pub const EXPECTED_STRUCT: &str = "expected a struct";

/// Report key used for the structural fallback.
pub const STRUCT_FIELD: &str = "";

/// Aggregated validation report.
///
/// A report is only ever produced when at least one rule failed, so `errors`
/// is never empty. Messages for a field keep the order their rules were
/// evaluated in.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, Error)]
#[error("{message}")]
pub struct ValidateError {
    /// Messages keyed by field display name
    pub errors: BTreeMap<String, Vec<String>>,

    /// First message produced, in field-then-rule order
    pub message: String,
}

impl ValidateError {
    /// Report for a value that is not record-shaped
    pub fn expected_struct() -> Self {
        Self {
            errors: BTreeMap::from([(
                STRUCT_FIELD.to_string(),
                vec![EXPECTED_STRUCT.to_string()],
            )]),
            message: EXPECTED_STRUCT.to_string(),
        }
    }

    /// Whether this is the structural fallback report
    pub fn is_structural(&self) -> bool {
        self.message == EXPECTED_STRUCT && self.errors.contains_key(STRUCT_FIELD)
    }

    /// Get messages for a field
    pub fn field_errors(&self, field: &str) -> &[String] {
        self.errors.get(field).map(Vec::as_slice).unwrap_or_default()
    }

    /// Names of the fields that failed
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.errors.keys().map(String::as_str)
    }

    /// Total number of messages across all fields
    pub fn len(&self) -> usize {
        self.errors.values().map(Vec::len).sum()
    }

    /// Check if there are any messages
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Convert to JSON representation
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "errors": self.errors,
            "message": self.message,
        })
    }
}

/// Accumulates messages during a single validation call.
#[derive(Debug, Default)]
pub(crate) struct ReportBuilder {
    errors: BTreeMap<String, Vec<String>>,
    message: Option<String>,
}

impl ReportBuilder {
    pub(crate) fn push(&mut self, field: &str, message: String) {
        if self.message.is_none() {
            self.message = Some(message.clone());
        }

        match self.errors.get_mut(field) {
            Some(messages) => messages.push(message),
            None => {
                self.errors.insert(field.to_string(), vec![message]);
            }
        }
    }

    pub(crate) fn finish(self) -> Option<ValidateError> {
        if self.errors.is_empty() {
            return None;
        }

        Some(ValidateError {
            errors: self.errors,
            message: self.message.unwrap_or_default(),
        })
    }
}

/// Failure to obtain the fields of a value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IntrospectError {
    /// The value has no named fields to validate
    #[error("expected a struct, found {found}")]
    NotAStruct { found: String },
}

impl IntrospectError {
    /// Create a `NotAStruct` error naming the offending kind
    pub fn not_a_struct(found: impl Into<String>) -> Self {
        Self::NotAStruct {
            found: found.into(),
        }
    }
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_without_messages_yields_nothing() {
        assert!(ReportBuilder::default().finish().is_none());
    }

    #[test]
    fn test_builder_keeps_first_message() {
        let mut builder = ReportBuilder::default();
        builder.push("name", "required".to_string());
        builder.push("name", "min length is 3".to_string());
        builder.push("email", "invalid email".to_string());

        let report = builder.finish().unwrap();
        assert_eq!(report.message, "required");
        assert_eq!(report.field_errors("name"), ["required", "min length is 3"]);
        assert_eq!(report.field_errors("email"), ["invalid email"]);
        assert_eq!(report.len(), 3);
    }

    #[test]
    fn test_field_errors_for_unknown_field() {
        let report = ValidateError::expected_struct();
        assert!(report.field_errors("name").is_empty());
    }

    #[test]
    fn test_expected_struct_report() {
        let report = ValidateError::expected_struct();
        assert!(report.is_structural());
        assert_eq!(report.field_errors(""), ["expected a struct"]);
        assert_eq!(report.to_string(), "expected a struct");
    }

    #[test]
    fn test_to_json_shape() {
        let mut builder = ReportBuilder::default();
        builder.push("name", "required".to_string());
        let report = builder.finish().unwrap();

        assert_eq!(
            report.to_json(),
            serde_json::json!({
                "errors": { "name": ["required"] },
                "message": "required",
            })
        );
    }

    #[test]
    fn test_serde_round_trip_keys() {
        let report = ValidateError::expected_struct();
        let json = serde_json::to_string(&report).unwrap();
        assert_eq!(
            json,
            r#"{"errors":{"":["expected a struct"]},"message":"expected a struct"}"#
        );
    }

    #[test]
    fn test_introspect_error_display() {
        let err = IntrospectError::not_a_struct("i32");
        assert_eq!(err.to_string(), "expected a struct, found i32");
    }
}
