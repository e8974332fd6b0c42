//! Field attribute parsing
//!
//! Reads the rule specification from `#[purify("...")]` and the serialized
//! name from `#[serde(rename = "...")]` or `#[serde(rename(serialize = "..."))]`.

use proc_macro2::TokenStream as TokenStream2;
use syn::meta::ParseNestedMeta;
use syn::{Attribute, Error, Field, LitStr, Token};

/// Validation-relevant attributes of one field
pub struct FieldAttrs {
    /// Rule specification, empty when the field has none
    pub rules: String,
    /// Name from a serde `rename`, if any
    pub rename: Option<String>,
}

impl FieldAttrs {
    pub fn from_field(field: &Field) -> Result<Self, Error> {
        let mut rules: Option<LitStr> = None;
        let mut rename = None;

        for attr in &field.attrs {
            if attr.path().is_ident("purify") {
                if rules.is_some() {
                    return Err(Error::new_spanned(
                        attr,
                        "duplicate #[purify] attribute\n\
                         hint: join the rules with '|', e.g. #[purify(\"required|email\")]",
                    ));
                }
                rules = Some(attr.parse_args::<LitStr>().map_err(|e| {
                    Error::new(
                        e.span(),
                        "expected a rule string, e.g. #[purify(\"required|min(3)\")]",
                    )
                })?);
            } else if attr.path().is_ident("serde")
                && let Some(name) = serde_rename(attr)
            {
                rename = Some(name);
            }
        }

        Ok(Self {
            rules: rules.map(|lit| lit.value()).unwrap_or_default(),
            rename,
        })
    }
}

/// Serialized name from a serde attribute.
///
/// Malformed serde attributes are left for serde's own derive to report.
fn serde_rename(attr: &Attribute) -> Option<String> {
    let mut rename = None;

    let parsed = attr.parse_nested_meta(|meta| {
        if !meta.path.is_ident("rename") {
            return skip_value(&meta);
        }

        if meta.input.peek(Token![=]) {
            let name: LitStr = meta.value()?.parse()?;
            rename = Some(name.value());
            return Ok(());
        }

        meta.parse_nested_meta(|inner| {
            if inner.path.is_ident("serialize") {
                let name: LitStr = inner.value()?.parse()?;
                rename = Some(name.value());
                Ok(())
            } else {
                skip_value(&inner)
            }
        })
    });

    parsed.ok().and(rename)
}

/// Consume whatever follows a meta path we do not care about
fn skip_value(meta: &ParseNestedMeta) -> Result<(), Error> {
    if meta.input.peek(Token![=]) {
        meta.value()?.parse::<syn::Expr>()?;
    } else if meta.input.peek(syn::token::Paren) {
        let content;
        syn::parenthesized!(content in meta.input);
        content.parse::<TokenStream2>()?;
    }
    Ok(())
}

/// Report key for a field: the serialized name unless it is empty or the
/// omit placeholder `-`, otherwise the declared name without `r#`.
pub fn display_name(declared: &str, rename: Option<&str>) -> String {
    match rename {
        Some(name) if !name.is_empty() && name != "-" => name.to_string(),
        _ => declared.strip_prefix("r#").unwrap_or(declared).to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use syn::parse_quote;

    fn attrs(field: Field) -> Result<FieldAttrs, String> {
        FieldAttrs::from_field(&field).map_err(|e| e.to_string())
    }

    #[test]
    fn test_rules_and_rename() {
        let parsed = attrs(parse_quote! {
            #[serde(default, rename = "userName")]
            #[purify("required|min(3)")]
            user_name: String
        })
        .unwrap();
        assert_eq!(parsed.rules, "required|min(3)");
        assert_eq!(parsed.rename.as_deref(), Some("userName"));
    }

    #[test]
    fn test_no_attributes() {
        let parsed = attrs(parse_quote! { id: u64 }).unwrap();
        assert!(parsed.rules.is_empty());
        assert!(parsed.rename.is_none());
    }

    #[test]
    fn test_duplicate_purify_attribute() {
        let err = attrs(parse_quote! {
            #[purify("required")]
            #[purify("email")]
            email: String
        })
        .err()
        .unwrap();
        assert!(err.starts_with("duplicate #[purify] attribute"));
        assert!(err.contains("hint:"));
    }

    #[test]
    fn test_non_string_rules() {
        let err = attrs(parse_quote! {
            #[purify(required)]
            name: String
        })
        .err()
        .unwrap();
        assert!(err.starts_with("expected a rule string"));

        assert!(attrs(parse_quote! { #[purify] name: String }).is_err());
    }

    #[test]
    fn test_serialize_rename() {
        let parsed = attrs(parse_quote! {
            #[serde(rename(serialize = "web", deserialize = "website"))]
            site: String
        })
        .unwrap();
        assert_eq!(parsed.rename.as_deref(), Some("web"));
    }

    #[test]
    fn test_deserialize_rename_is_ignored() {
        let parsed = attrs(parse_quote! {
            #[serde(rename(deserialize = "website"))]
            site: String
        })
        .unwrap();
        assert!(parsed.rename.is_none());
        assert_eq!(display_name("site", parsed.rename.as_deref()), "site");
    }

    #[test]
    fn test_malformed_serde_falls_back() {
        let parsed = attrs(parse_quote! {
            #[serde(rename = 5)]
            #[purify("required")]
            name: String
        })
        .unwrap();
        assert_eq!(parsed.rules, "required");
        assert!(parsed.rename.is_none());
        assert_eq!(display_name("name", parsed.rename.as_deref()), "name");
    }

    #[test]
    fn test_other_attributes_are_ignored() {
        let parsed = attrs(parse_quote! {
            #[doc = "The user's name"]
            #[serde(skip_serializing_if = "Option::is_none", with = "codec")]
            nickname: Option<String>
        })
        .unwrap();
        assert!(parsed.rules.is_empty());
        assert!(parsed.rename.is_none());
    }

    #[test]
    fn test_display_name() {
        assert_eq!(display_name("user_name", Some("userName")), "userName");
        assert_eq!(display_name("user_name", None), "user_name");
        assert_eq!(display_name("user_name", Some("")), "user_name");
        assert_eq!(display_name("user_name", Some("-")), "user_name");
        assert_eq!(display_name("r#type", None), "type");
    }
}
