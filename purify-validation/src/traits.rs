// Introspection and validation traits

use crate::{IntrospectError, Registry, ValidateError, registry};
use std::borrow::Cow;

/// A field as seen by the dispatch engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// Display name, used as the report key
    pub name: String,

    /// Raw rule specification, empty when the field has no rules
    pub rules: String,

    /// Field value rendered as a string
    pub value: String,
}

impl FieldDescriptor {
    /// Create a descriptor for a field with rules
    pub fn new(
        name: impl Into<String>,
        rules: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            rules: rules.into(),
            value: value.into(),
        }
    }

    /// Create a descriptor for a field without rules.
    ///
    /// The value is never looked at, so it is not rendered.
    pub fn unchecked(name: impl Into<String>) -> Self {
        Self::new(name, String::new(), String::new())
    }

    /// Check if the field has any rules to apply
    pub fn has_rules(&self) -> bool {
        !self.rules.is_empty()
    }
}

/// Produces the ordered field list of a record.
///
/// `#[derive(Validate)]` implements this for structs; [`crate::JsonRecord`]
/// implements it for JSON objects checked against a [`crate::Schema`].
pub trait Introspect {
    /// Fields in declaration order, or an error if the value is not a record
    fn introspect(&self) -> Result<Vec<FieldDescriptor>, IntrospectError>;
}

impl<T: Introspect + ?Sized> Introspect for &T {
    fn introspect(&self) -> Result<Vec<FieldDescriptor>, IntrospectError> {
        (**self).introspect()
    }
}

impl<T: Introspect + ?Sized> Introspect for Box<T> {
    fn introspect(&self) -> Result<Vec<FieldDescriptor>, IntrospectError> {
        (**self).introspect()
    }
}

macro_rules! impl_scalar_introspect {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Introspect for $ty {
                fn introspect(&self) -> Result<Vec<FieldDescriptor>, IntrospectError> {
                    Err(IntrospectError::not_a_struct(stringify!($ty)))
                }
            }
        )*
    };
}

impl_scalar_introspect!(
    bool, char, str, String, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize,
    f32, f64
);

/// Renders a field value into the string handed to validators.
///
/// Strings are passed through, numbers use their canonical decimal form and
/// `None` renders as the empty string.
pub trait RenderValue {
    fn render(&self) -> String;
}

macro_rules! impl_render_display {
    ($($ty:ty),* $(,)?) => {
        $(
            impl RenderValue for $ty {
                fn render(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

impl_render_display!(
    bool, char, str, String, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize,
    f32, f64
);

impl RenderValue for Cow<'_, str> {
    fn render(&self) -> String {
        self.to_string()
    }
}

impl<T: RenderValue> RenderValue for Option<T> {
    fn render(&self) -> String {
        match self {
            Some(value) => value.render(),
            None => String::new(),
        }
    }
}

impl<T: RenderValue + ?Sized> RenderValue for &T {
    fn render(&self) -> String {
        (**self).render()
    }
}

impl<T: RenderValue + ?Sized> RenderValue for Box<T> {
    fn render(&self) -> String {
        (**self).render()
    }
}

/// Trait for validatable types.
///
/// Implemented for every [`Introspect`] type; this is the `Result` view of
/// [`Registry::validate`].
pub trait Validate {
    /// Validate against the process-wide registry
    fn validate(&self) -> Result<(), ValidateError>;

    /// Validate against a specific registry
    fn validate_with(&self, registry: &Registry) -> Result<(), ValidateError>;
}

impl<T: Introspect + ?Sized> Validate for T {
    fn validate(&self) -> Result<(), ValidateError> {
        self.validate_with(registry::global())
    }

    fn validate_with(&self, registry: &Registry) -> Result<(), ValidateError> {
        match registry.validate(self) {
            Some(report) => Err(report),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_scalars() {
        assert_eq!(42u8.render(), "42");
        assert_eq!((-7i64).render(), "-7");
        assert_eq!(1.5f64.render(), "1.5");
        assert_eq!(2.0f32.render(), "2");
        assert_eq!(true.render(), "true");
        assert_eq!('x'.render(), "x");
        assert_eq!("hi".render(), "hi");
    }

    #[test]
    fn test_render_option() {
        assert_eq!(Some("Al".to_string()).render(), "Al");
        assert_eq!(None::<String>.render(), "");
        assert_eq!(Some(3u32).render(), "3");
    }

    #[test]
    fn test_scalars_are_not_records() {
        assert_eq!(
            42i32.introspect(),
            Err(IntrospectError::not_a_struct("i32"))
        );
        assert!("text".introspect().is_err());
    }

    #[test]
    fn test_unchecked_descriptor() {
        let field = FieldDescriptor::unchecked("id");
        assert!(!field.has_rules());
        assert!(field.value.is_empty());
    }
}
