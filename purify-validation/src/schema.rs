//! Rule schemas for dynamic JSON payloads
//!
//! A [`Schema`] lists field names with their rule specifications, the same way
//! `#[purify("...")]` attributes do on a struct. Binding it to a
//! `serde_json::Value` yields a [`JsonRecord`] the engine can validate.
//!
//! ```
//! use purify_validation::{Registry, Schema};
//!
//! let schema = Schema::new()
//!     .field("name", "required|min(3)")
//!     .field("email", "required|email");
//!
//! let payload = serde_json::json!({ "name": "Al", "email": "al@example.com" });
//! let report = Registry::with_builtins().validate(&schema.bind(&payload)).unwrap();
//! assert_eq!(report.message, "min length is 3");
//! ```

use crate::{FieldDescriptor, Introspect, IntrospectError, RenderValue};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A field and its rule specification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaField {
    /// Object key, also used as the report key
    pub name: String,

    /// Rule specification
    #[serde(default)]
    pub rules: String,
}

/// Ordered set of field rules for JSON objects.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Schema {
    fields: Vec<SchemaField>,
}

impl Schema {
    /// Create an empty schema
    pub fn new() -> Self {
        Self::default()
    }

    /// Add rules for a field
    pub fn field(mut self, name: impl Into<String>, rules: impl Into<String>) -> Self {
        self.fields.push(SchemaField {
            name: name.into(),
            rules: rules.into(),
        });
        self
    }

    /// Parse a schema from a JSON array of `{ "name", "rules" }` entries
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Fields in declaration order
    pub fn fields(&self) -> &[SchemaField] {
        &self.fields
    }

    /// Bind the schema to a value for validation
    pub fn bind<'a>(&'a self, value: &'a Value) -> JsonRecord<'a> {
        JsonRecord {
            schema: self,
            value,
        }
    }
}

/// A JSON value checked against a [`Schema`].
#[derive(Debug, Clone, Copy)]
pub struct JsonRecord<'a> {
    schema: &'a Schema,
    value: &'a Value,
}

impl Introspect for JsonRecord<'_> {
    fn introspect(&self) -> Result<Vec<FieldDescriptor>, IntrospectError> {
        let Value::Object(object) = self.value else {
            return Err(IntrospectError::not_a_struct(kind(self.value)));
        };

        Ok(self
            .schema
            .fields
            .iter()
            .map(|field| {
                let value = object.get(&field.name).map(RenderValue::render);
                FieldDescriptor::new(&field.name, &field.rules, value.unwrap_or_default())
            })
            .collect())
    }
}

/// Strings render without quotes, `null` as the empty string, arrays and
/// objects as compact JSON.
impl RenderValue for Value {
    fn render(&self) -> String {
        match self {
            Value::Null => String::new(),
            Value::String(s) => s.clone(),
            Value::Bool(b) => b.to_string(),
            Value::Number(n) => n.to_string(),
            Value::Array(_) | Value::Object(_) => self.to_string(),
        }
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
