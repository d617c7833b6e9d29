//! Translation of MySQL server errors into field errors.
//!
//! The translator looks for the offending column among the single-quoted
//! values of the server message and attributes the error to the first
//! declared record field stored in that column. Errors that cannot be
//! attributed come back unfielded, carrying the full error text.

use crate::codes::ErrorCode;
use crate::config::{TranslatorConfig, UnregisteredCode};
use crate::failure::Failure;
use crate::scan::{quoted_tokens, scan_template};
use fields::{FieldError, Record, RecordShape};
use tracing::{debug, trace};

/// Stateless translator from [`Failure`]s to [`FieldError`]s
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Translator {
    config: TranslatorConfig,
}

impl Translator {
    pub fn new(config: TranslatorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &TranslatorConfig {
        &self.config
    }

    /// Translate a failure against the fields of a record type
    pub fn translate_record<R: Record>(&self, failure: &Failure) -> FieldError {
        self.translate(failure, &R::shape())
    }

    /// Translate a failure against an explicit record shape.
    ///
    /// Never fails: anything that cannot be attributed to a field of `shape`
    /// yields an unfielded error holding the failure's full text.
    pub fn translate(&self, failure: &Failure, shape: &RecordShape) -> FieldError {
        let (number, message) = match failure {
            Failure::MySql {
                number, message, ..
            } => (*number, message.as_str()),
            Failure::Other(text) => {
                trace!("Not a server error, passing through: {}", text);
                return FieldError::unfielded(text.as_str());
            }
        };

        let code = ErrorCode::from_number(number);
        if code.is_none() {
            debug!("No registered message for MySQL error {}", number);
        }
        let constraint = code.and_then(|code| self.constraint(code, message));
        let tokens = quoted_tokens(message);

        for field in shape.fields() {
            if tokens.iter().any(|token| token == field.column()) {
                debug!(
                    "Attributed MySQL error {} to field '{}'",
                    number,
                    field.normalized_name()
                );
                return FieldError::new(field.normalized_name(), self.short_message(code, message))
                    .with_constraint(constraint);
            }
        }

        debug!(
            "MySQL error {} matched no field among {} candidates",
            number,
            shape.len()
        );
        FieldError::unfielded(failure.to_string()).with_constraint(constraint)
    }

    /// Value bound to the first placeholder of the code's server template.
    ///
    /// This is the raw value the server interpolated, with no check that it
    /// names a record field. `None` for non-server errors and unregistered
    /// numbers.
    pub fn extract_template_token(failure: &Failure) -> Option<String> {
        let code = failure.code()?;
        let message = failure.driver_message()?;
        scan_template(code.template(), message).into_iter().next()
    }

    fn short_message(&self, code: Option<ErrorCode>, message: &str) -> String {
        match (code, self.config.unregistered_code) {
            (Some(code), _) => code.message().to_string(),
            (None, UnregisteredCode::PassThrough) => message.to_string(),
            (None, UnregisteredCode::Empty) => String::new(),
        }
    }

    fn constraint(&self, code: ErrorCode, message: &str) -> Option<String> {
        if !self.config.capture_constraint {
            return None;
        }
        let slot = code.constraint_placeholder()?;
        scan_template(code.template(), message).into_iter().nth(slot)
    }
}

/// Translate with the default configuration
pub fn translate(failure: &Failure, shape: &RecordShape) -> FieldError {
    Translator::default().translate(failure, shape)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user_shape() -> RecordShape {
        RecordShape::new()
            .with_field("ID")
            .with_tagged_field("Email", "unique;size:255")
            .with_tagged_field("UserName", "not null")
            .with_field("Age")
    }

    #[test]
    fn test_other_error_passes_through() {
        let failure = Failure::other("connection refused");
        let err = translate(&failure, &user_shape());
        assert_eq!(err, FieldError::new("", "connection refused"));
    }

    #[test]
    fn test_not_null_attributed_to_field() {
        let failure = Failure::mysql(1048, "Column 'user_name' cannot be null");
        let err = translate(&failure, &user_shape());
        assert_eq!(err.field(), "user_name");
        assert_eq!(err.message(), "cant't be blank");
        assert_eq!(err.constraint(), None);
    }

    #[test]
    fn test_duplicate_entry_on_column_key() {
        let failure = Failure::mysql(1062, "Duplicate entry 'bob@example.com' for key 'email'");
        let err = translate(&failure, &user_shape());
        assert_eq!(err.field(), "email");
        assert_eq!(err.message(), "has already been taken");
        assert_eq!(err.constraint(), Some("email"));
    }

    #[test]
    fn test_duplicate_entry_on_index_name_falls_back() {
        let failure = Failure::mysql(
            1062,
            "Duplicate entry 'bob@example.com' for key 'users.email_unique'",
        );
        let err = translate(&failure, &user_shape());
        assert_eq!(err.field(), "");
        assert_eq!(
            err.message(),
            "Error 1062: Duplicate entry 'bob@example.com' for key 'users.email_unique'"
        );
        assert_eq!(err.constraint(), Some("users.email_unique"));
    }

    #[test]
    fn test_constraint_capture_can_be_disabled() {
        let translator = Translator::new(TranslatorConfig::new().with_capture_constraint(false));
        let failure = Failure::mysql(1062, "Duplicate entry 'x' for key 'email'");
        let err = translator.translate(&failure, &user_shape());
        assert_eq!(err.field(), "email");
        assert_eq!(err.constraint(), None);
    }

    #[test]
    fn test_first_declared_field_wins() {
        // `age` is quoted first, but `user_name` is declared before it.
        let failure = Failure::mysql(1054, "Unknown column 'age' in 'user_name'");
        let err = translate(&failure, &user_shape());
        assert_eq!(err.field(), "user_name");
        assert_eq!(err.message(), "unknown column");
    }

    #[test]
    fn test_column_override_is_matched() {
        let shape = RecordShape::new().with_tagged_field("EmailAddress", "column:mail");
        let failure = Failure::mysql(1406, "Data too long for column 'mail' at row 1");
        let err = translate(&failure, &shape);
        assert_eq!(err.field(), "email_address");
        assert_eq!(err.message(), "data too long");

        let failure = Failure::mysql(1406, "Data too long for column 'email_address' at row 1");
        assert!(!translate(&failure, &shape).is_fielded());
    }

    #[test]
    fn test_unregistered_code_passes_message_through() {
        let failure = Failure::mysql(9999, "Something odd about 'age'");
        let err = translate(&failure, &user_shape());
        assert_eq!(err.field(), "age");
        assert_eq!(err.message(), "Something odd about 'age'");
    }

    #[test]
    fn test_unregistered_code_with_empty_policy() {
        let translator = Translator::new(
            TranslatorConfig::new().with_unregistered_code(UnregisteredCode::Empty),
        );
        let failure = Failure::mysql(9999, "Something odd about 'age'");
        let err = translator.translate(&failure, &user_shape());
        assert_eq!(err.field(), "age");
        assert_eq!(err.message(), "");
    }

    #[test]
    fn test_empty_shape_never_attributes() {
        let failure = Failure::mysql(1048, "Column 'email' cannot be null");
        let err = translate(&failure, &RecordShape::new());
        assert_eq!(err, FieldError::new("", "Error 1048: Column 'email' cannot be null"));
    }

    #[test]
    fn test_extract_template_token() {
        let failure = Failure::mysql(1048, "Column 'username' cannot be null");
        assert_eq!(
            Translator::extract_template_token(&failure),
            Some("username".to_string())
        );

        let failure = Failure::mysql(1062, "Duplicate entry 'bob@example.com' for key 'users.email'");
        assert_eq!(
            Translator::extract_template_token(&failure),
            Some("bob@example.com".to_string())
        );

        assert_eq!(
            Translator::extract_template_token(&Failure::mysql(9999, "'x'")),
            None
        );
        assert_eq!(
            Translator::extract_template_token(&Failure::other("'x'")),
            None
        );
    }

    #[test]
    fn test_translation_is_pure() {
        let failure = Failure::mysql(1264, "Out of range value for column 'age' at row 1");
        let shape = user_shape();
        let translator = Translator::default();
        assert_eq!(
            translator.translate(&failure, &shape),
            translator.translate(&failure, &shape)
        );
    }
}
