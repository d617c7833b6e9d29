use crate::codes::ErrorCode;
use sqlx::mysql::MySqlDatabaseError;
use std::fmt;

/// An error handed to the translator: either a MySQL server error carrying
/// its error number, or anything else, kept as text
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Failure {
    MySql {
        number: u16,
        sql_state: Option<String>,
        message: String,
    },
    Other(String),
}

impl Failure {
    /// Create a MySQL server failure without an SQLSTATE
    pub fn mysql(number: u16, message: impl Into<String>) -> Self {
        Failure::MySql {
            number,
            sql_state: None,
            message: message.into(),
        }
    }

    /// Wrap any non-driver error by its textual description
    pub fn other(err: impl fmt::Display) -> Self {
        Failure::Other(err.to_string())
    }

    /// Registered error code, if this is a server error with a known number
    pub fn code(&self) -> Option<ErrorCode> {
        match self {
            Failure::MySql { number, .. } => ErrorCode::from_number(*number),
            Failure::Other(_) => None,
        }
    }

    /// Server error number, if this is a server error
    pub fn number(&self) -> Option<u16> {
        match self {
            Failure::MySql { number, .. } => Some(*number),
            Failure::Other(_) => None,
        }
    }

    /// The server's message, without the error number prefix
    pub fn driver_message(&self) -> Option<&str> {
        match self {
            Failure::MySql { message, .. } => Some(message),
            Failure::Other(_) => None,
        }
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Failure::MySql {
                number,
                sql_state: Some(state),
                message,
            } => write!(f, "Error {} ({}): {}", number, state, message),
            Failure::MySql {
                number, message, ..
            } => write!(f, "Error {}: {}", number, message),
            Failure::Other(text) => f.write_str(text),
        }
    }
}

impl From<&sqlx::Error> for Failure {
    fn from(err: &sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = err {
            if let Some(mysql) = db_err.try_downcast_ref::<MySqlDatabaseError>() {
                return Failure::MySql {
                    number: mysql.number(),
                    sql_state: mysql.code().map(str::to_string),
                    message: mysql.message().to_string(),
                };
            }
        }

        Failure::other(err)
    }
}

impl From<sqlx::Error> for Failure {
    fn from(err: sqlx::Error) -> Self {
        Failure::from(&err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_without_sql_state() {
        let failure = Failure::mysql(1048, "Column 'username' cannot be null");
        assert_eq!(failure.to_string(), "Error 1048: Column 'username' cannot be null");
    }

    #[test]
    fn test_display_with_sql_state() {
        let failure = Failure::MySql {
            number: 1062,
            sql_state: Some("23000".to_string()),
            message: "Duplicate entry 'a' for key 'b'".to_string(),
        };
        assert_eq!(
            failure.to_string(),
            "Error 1062 (23000): Duplicate entry 'a' for key 'b'"
        );
    }

    #[test]
    fn test_code_lookup() {
        assert_eq!(
            Failure::mysql(1062, "").code(),
            Some(ErrorCode::DuplicateEntry)
        );
        assert_eq!(Failure::mysql(9999, "").code(), None);
        assert_eq!(Failure::mysql(9999, "").number(), Some(9999));
        assert_eq!(Failure::other("boom").code(), None);
        assert_eq!(Failure::other("boom").number(), None);
    }

    #[test]
    fn test_non_database_sqlx_error_is_other() {
        let err = sqlx::Error::RowNotFound;
        let failure = Failure::from(&err);
        assert_eq!(failure, Failure::Other(err.to_string()));
        assert_eq!(failure.driver_message(), None);
    }

    #[test]
    fn test_other_keeps_text_verbatim() {
        let io = std::io::Error::new(std::io::ErrorKind::Other, "disk on fire");
        assert_eq!(Failure::other(&io).to_string(), "disk on fire");
    }
}
