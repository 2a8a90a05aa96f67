use thiserror::Error;

/// Misuse of the type contract by calling code.
///
/// Bad user input never ends up here, it is reported through
/// [`Conversion`](crate::Conversion) instead.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TypeError {
    #[error("missing 'name' member in type spec")]
    MissingName,

    #[error("invalid type spec: {0}")]
    InvalidSpec(String),

    #[error("type '{type_name}' cannot stringify {found}")]
    UnexpectedValue { type_name: String, found: String },

    #[error("type '{type_name}' has invalid parameter '{param}': {reason}")]
    InvalidParameter {
        type_name: String,
        param: String,
        reason: String,
    },

    #[error("type '{type_name}' does not round-trip: {detail}")]
    RoundTrip { type_name: String, detail: String },
}
