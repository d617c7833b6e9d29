use serde::{Deserialize, Serialize};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, FieldsError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldsError {
    #[error("Invalid field name: {0:?}")]
    InvalidName(String),

    #[error("Duplicate column '{column}' declared by field '{field}'")]
    DuplicateColumn { field: String, column: String },
}

/// Field-scoped error returned to callers that render validation messages.
///
/// `field` is the lower-snake-case name of the offending record field, or
/// empty when the failure could not be attributed to a field. Serializes as
/// `{"field": ..., "message": ...}`; `constraint` is only emitted when a key
/// name was captured from the driver message.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[error("Error {field}: {message}")]
pub struct FieldError {
    field: String,
    message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    constraint: Option<String>,
}

impl FieldError {
    /// Create a field error without any validation of its inputs
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            constraint: None,
        }
    }

    /// Create an error that is not attributed to any field
    pub fn unfielded(message: impl Into<String>) -> Self {
        Self::new(String::new(), message)
    }

    /// Attach the name of the violated key or constraint
    pub fn with_constraint(mut self, constraint: Option<String>) -> Self {
        self.constraint = constraint;
        self
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn constraint(&self) -> Option<&str> {
        self.constraint.as_deref()
    }

    /// Whether the error names a field on the record
    pub fn is_fielded(&self) -> bool {
        !self.field.is_empty()
    }
}
