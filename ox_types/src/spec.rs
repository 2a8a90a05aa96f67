//! References to registered types.
//!
//! A reference is either a bare name or an object carrying a `name` plus
//! parameters for parameterized type families, e.g.
//! `{"name": "selection", "data": ["red", "green"]}`. Both forms
//! deserialize from configuration, so parameter declarations written in
//! JSON or YAML resolve through the registry unchanged.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::TypeError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TypeSpec {
    Name(String),
    Object(Map<String, Value>),
}

impl TypeSpec {
    /// Builds a spec from a JSON value. Strings become names, objects keep
    /// all their fields.
    pub fn from_value(value: Value) -> Result<Self, TypeError> {
        match value {
            Value::String(name) => Ok(TypeSpec::Name(name)),
            Value::Object(map) => Ok(TypeSpec::Object(map)),
            other => Err(TypeError::InvalidSpec(format!(
                "expected a name or an object, found {}",
                describe(&other)
            ))),
        }
    }

    /// The registry key this spec refers to.
    ///
    /// An object with no `name`, a null one or an empty one is missing its
    /// name. A `name` of any other non-string shape is an invalid spec.
    pub fn name(&self) -> Result<&str, TypeError> {
        match self {
            TypeSpec::Name(name) => Ok(name.as_str()),
            TypeSpec::Object(map) => match map.get("name") {
                Some(Value::String(name)) if !name.is_empty() => Ok(name.as_str()),
                None | Some(Value::Null) | Some(Value::String(_)) => Err(TypeError::MissingName),
                Some(other) => Err(TypeError::InvalidSpec(format!(
                    "'name' must be a string, found {}",
                    describe(other)
                ))),
            },
        }
    }

    /// A named field of an object spec. Bare names carry no parameters.
    pub fn param(&self, key: &str) -> Option<&Value> {
        match self {
            TypeSpec::Name(_) => None,
            TypeSpec::Object(map) => map.get(key),
        }
    }
}

impl From<&str> for TypeSpec {
    fn from(name: &str) -> Self {
        TypeSpec::Name(name.to_string())
    }
}

impl From<String> for TypeSpec {
    fn from(name: String) -> Self {
        TypeSpec::Name(name)
    }
}

impl From<Map<String, Value>> for TypeSpec {
    fn from(map: Map<String, Value>) -> Self {
        TypeSpec::Object(map)
    }
}

/// Short description of a JSON value's shape for error messages.
pub(crate) fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
