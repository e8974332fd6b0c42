//! Rule dispatch
//!
//! Walks the fields of a record in order, runs each field's rules in order and
//! collects every failure into a [`ValidateError`].

use crate::errors::ReportBuilder;
use crate::{Introspect, Registry, ValidateError, parse_rules, registry};

impl Registry {
    /// Validate a record against this registry.
    ///
    /// Returns `None` when no rule failed. A value that is not a record yields
    /// the [`ValidateError::expected_struct`] report instead of an error.
    /// Rules without a registered validator are skipped.
    pub fn validate<T: Introspect + ?Sized>(&self, record: &T) -> Option<ValidateError> {
        let fields = match record.introspect() {
            Ok(fields) => fields,
            Err(err) => {
                tracing::debug!(error = %err, "Value is not a record");
                return Some(ValidateError::expected_struct());
            }
        };

        let mut report = ReportBuilder::default();

        for field in fields.iter().filter(|field| field.has_rules()) {
            for rule in parse_rules(&field.rules) {
                let Some(validator) = self.lookup(rule.name) else {
                    if self.warn_unknown_rules {
                        tracing::warn!(
                            field = %field.name,
                            rule = %rule,
                            "Skipping unknown rule"
                        );
                    } else {
                        tracing::trace!(
                            field = %field.name,
                            rule = %rule,
                            "Skipping unknown rule"
                        );
                    }
                    continue;
                };

                let message = validator(field.value.as_str(), rule.param);
                if !message.is_empty() {
                    tracing::trace!(
                        field = %field.name,
                        rule = %rule,
                        message = %message,
                        "Rule failed"
                    );
                    report.push(&field.name, message);
                }
            }
        }

        report.finish()
    }
}

/// Validate a record against the process-wide registry
pub fn validate<T: Introspect + ?Sized>(record: &T) -> Option<ValidateError> {
    registry::global().validate(record)
}
