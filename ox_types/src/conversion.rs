//! Result of parsing a string with a [`Type`](crate::Type).
//!
//! A failed parse is an ordinary event for user input, so it is reported as
//! data through [`Status`] and a message rather than as an error.

use serde::Serialize;
use serde_json::Value;

use crate::status::Status;

/// Number of predictions a reader can take in at a glance.
pub const PREDICTION_TARGET: usize = 7;

/// Upper bound producers should stay under when offering predictions.
pub const PREDICTION_LIMIT: usize = 20;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Conversion {
    value: Value,
    status: Status,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
    predictions: Vec<String>,
}

impl Conversion {
    /// A valid conversion holding `value`, with no message or predictions.
    pub fn new(value: impl Into<Value>) -> Self {
        Self {
            value: value.into(),
            status: Status::Valid,
            message: None,
            predictions: Vec::new(),
        }
    }

    /// Builds a conversion from optional parts. Missing parts fall back to
    /// `Valid`, no message and no predictions.
    ///
    /// The value and status are not checked against each other.
    pub fn from_parts(
        value: impl Into<Value>,
        status: Option<Status>,
        message: Option<String>,
        predictions: Option<Vec<String>>,
    ) -> Self {
        Self {
            value: value.into(),
            status: status.unwrap_or_default(),
            message,
            predictions: predictions.unwrap_or_default(),
        }
    }

    /// A valid conversion holding `value`.
    pub fn valid(value: impl Into<Value>) -> Self {
        Self::new(value)
    }

    /// A failed conversion with a null value and a reason.
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::new(Value::Null)
            .with_status(Status::Invalid)
            .with_message(message)
    }

    /// Unfinished input, with a null value and a hint on what is missing.
    pub fn incomplete(message: impl Into<String>) -> Self {
        Self::new(Value::Null)
            .with_status(Status::Incomplete)
            .with_message(message)
    }

    /// Replaces the status.
    pub fn with_status(mut self, status: Status) -> Self {
        self.status = status;
        self
    }

    /// Sets the message, which may accompany any status.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Sets the predictions, best guess first. The order is kept as given.
    pub fn with_predictions<I, S>(mut self, predictions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.predictions = predictions.into_iter().map(Into::into).collect();
        self
    }

    /// Like [`with_predictions`](Self::with_predictions) but keeps only the
    /// first `max` candidates.
    pub fn with_predictions_limited<I, S>(self, predictions: I, max: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.with_predictions(predictions.into_iter().take(max))
    }

    /// The converted value, null unless the conversion is valid.
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Takes the converted value out of the conversion.
    pub fn into_value(self) -> Value {
        self.value
    }

    /// The outcome of the conversion.
    pub fn status(&self) -> Status {
        self.status
    }

    /// Explanation or warning, if one was given.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Suggested replacement inputs, best guess first.
    pub fn predictions(&self) -> &[String] {
        &self.predictions
    }

    /// Check if the converted value is usable
    pub fn is_valid(&self) -> bool {
        self.status.is_valid()
    }
}
