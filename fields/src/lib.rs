pub mod error;
pub mod naming;
pub mod record;
pub mod tags;

pub use error::{FieldError, FieldsError, Result};
pub use naming::to_snake_case;
pub use record::{FieldDescriptor, Record, RecordShape};
pub use tags::parse_tag_settings;

/// Build an arbitrary field error, e.g. for application-level checks that
/// should surface the same way as translated database errors
pub fn custom_error(field: impl Into<String>, message: impl Into<String>) -> FieldError {
    FieldError::new(field, message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_custom_error_returns_inputs_unchanged() {
        for (field, message) in [
            ("email", "is invalid"),
            ("", ""),
            ("", "something went wrong"),
            ("NotNormalized", "  spaced  "),
        ] {
            let err = custom_error(field, message);
            assert_eq!(err.field(), field);
            assert_eq!(err.message(), message);
            assert_eq!(err.constraint(), None);
        }
    }
}
