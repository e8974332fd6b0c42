// Procedural macros for purify validation

use proc_macro::TokenStream;

mod attributes;
mod validate;

/// Derives field introspection for rule-based validation.
///
/// Rules are attached with `#[purify("...")]`. The report key of a field is its
/// `#[serde(rename = "...")]` name when present, otherwise its declared name.
/// Fields without rules are never rendered, so their types need no
/// `RenderValue` implementation.
///
/// ```rust,ignore
/// #[derive(Validate)]
/// struct CreateUser {
///     #[purify("required|min(3)|max(20)")]
///     name: String,
///     #[serde(rename = "emailAddress")]
///     #[purify("required|email")]
///     email: String,
/// }
/// ```
///
/// Deriving on an enum or union yields a type that always reports
/// `"expected a struct"`.
#[proc_macro_derive(Validate, attributes(purify, serde))]
pub fn validate_derive(input: TokenStream) -> TokenStream {
    validate::validate_derive_impl(input)
}
