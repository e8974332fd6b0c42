//! Declarative field validation for purify
//!
//! Fields carry short rule specifications such as `"required|min(3)|max(20)"`.
//! The engine parses each specification, looks every rule up in a
//! [`Registry`] of validator functions, runs them against the field's
//! rendered value and collects the failures into a [`ValidateError`].
//!
//! # Examples
//!
//! ## Deriving validation
//!
//! ```
//! use purify_validation::Validate;
//!
//! #[derive(Validate)]
//! struct SignupInput {
//!     #[purify("required|min(3)|max(20)")]
//!     name: String,
//!     #[serde(rename = "emailAddress")]
//!     #[purify("required|email")]
//!     email: String,
//!     // No rules, never checked
//!     referrer: Option<String>,
//! }
//!
//! let input = SignupInput {
//!     name: "Al".to_string(),
//!     email: "al@example.com".to_string(),
//!     referrer: None,
//! };
//!
//! let report = input.validate().unwrap_err();
//! assert_eq!(report.field_errors("name"), ["min length is 3"]);
//! assert_eq!(report.message, "min length is 3");
//! ```
//!
//! ## Custom validators
//!
//! Validators receive the rendered value and the rule parameter and return an
//! empty string when the value passes.
//!
//! ```
//! use purify_validation::{FieldDescriptor, Introspect, IntrospectError, Registry};
//!
//! struct Order {
//!     quantity: u32,
//! }
//!
//! impl Introspect for Order {
//!     fn introspect(&self) -> Result<Vec<FieldDescriptor>, IntrospectError> {
//!         Ok(vec![FieldDescriptor::new(
//!             "quantity",
//!             "multiple_of(6)",
//!             self.quantity.to_string(),
//!         )])
//!     }
//! }
//!
//! let registry = Registry::with_builtins();
//! registry.register("multiple_of", |value: &str, param: &str| {
//!     let value: u64 = value.parse().unwrap_or(0);
//!     let step: u64 = param.parse().unwrap_or(1);
//!     if step != 0 && value % step == 0 {
//!         String::new()
//!     } else {
//!         format!("must be a multiple of {}", param)
//!     }
//! });
//!
//! assert!(registry.validate(&Order { quantity: 12 }).is_none());
//! assert!(registry.validate(&Order { quantity: 7 }).is_some());
//! ```
//!
//! # Rule handling
//!
//! - Fields with an empty specification are skipped.
//! - Rules with no registered validator are skipped, never reported.
//! - Malformed parameters are extracted on a best-effort basis, never rejected.
//! - A value that is not a record produces a report keyed by `""` with the
//!   message `"expected a struct"`.

// Lets the derive macro's `::purify_validation` paths resolve inside this crate.
extern crate self as purify_validation;

mod config;
mod engine;
mod errors;
pub mod registry;
mod rules;
mod schema;
mod traits;
pub mod validators;

pub use config::*;
pub use engine::validate;
pub use errors::{ConfigError, EXPECTED_STRUCT, IntrospectError, STRUCT_FIELD, ValidateError};
pub use registry::{Registry, ValidatorFn, global, init, register_validator};
pub use rules::*;
pub use schema::*;
pub use traits::*;

#[cfg(feature = "derive")]
pub use purify_macro::Validate;
