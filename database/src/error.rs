use fields::FieldError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, DatabaseError>;

#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("Record error: {0}")]
    Record(#[from] FieldError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Configuration parsing error: {0}")]
    ConfigParsing(#[from] serde_json::Error),
}

impl DatabaseError {
    /// The field error carried by this error, if any
    pub fn field_error(&self) -> Option<&FieldError> {
        match self {
            DatabaseError::Record(err) => Some(err),
            _ => None,
        }
    }
}
