/// MySQL server error codes that can be attributed to a record field.
///
/// Each code carries the short message shown to users and the driver's own
/// message template, used only to pull values back out of driver messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum ErrorCode {
    /// `ER_DUP_ENTRY`
    DuplicateEntry = 1062,
    /// `ER_BAD_NULL_ERROR`
    NotNullViolation = 1048,
    /// `ER_NO_REFERENCED_ROW_2`
    NoReferencedRow = 1452,
    /// `ER_DATA_TOO_LONG`
    DataTooLong = 1406,
    /// `ER_WARN_DATA_OUT_OF_RANGE`
    OutOfRange = 1264,
    /// `ER_BAD_FIELD_ERROR`
    BadField = 1054,
    /// `ER_DUP_FIELDNAME`
    DuplicateFieldName = 1060,
    /// `ER_CANT_DROP_FIELD_OR_KEY`
    CantDropFieldOrKey = 1091,
}

impl ErrorCode {
    pub const ALL: [ErrorCode; 8] = [
        ErrorCode::DuplicateEntry,
        ErrorCode::NotNullViolation,
        ErrorCode::NoReferencedRow,
        ErrorCode::DataTooLong,
        ErrorCode::OutOfRange,
        ErrorCode::BadField,
        ErrorCode::DuplicateFieldName,
        ErrorCode::CantDropFieldOrKey,
    ];

    /// Look up a registered code by its server error number
    pub const fn from_number(number: u16) -> Option<Self> {
        match number {
            1062 => Some(ErrorCode::DuplicateEntry),
            1048 => Some(ErrorCode::NotNullViolation),
            1452 => Some(ErrorCode::NoReferencedRow),
            1406 => Some(ErrorCode::DataTooLong),
            1264 => Some(ErrorCode::OutOfRange),
            1054 => Some(ErrorCode::BadField),
            1060 => Some(ErrorCode::DuplicateFieldName),
            1091 => Some(ErrorCode::CantDropFieldOrKey),
            _ => None,
        }
    }

    pub const fn number(self) -> u16 {
        self as u16
    }

    /// Short message shown next to the offending field
    pub const fn message(self) -> &'static str {
        match self {
            ErrorCode::DuplicateEntry => "has already been taken",
            // Kept byte-for-byte; clients match on this string.
            ErrorCode::NotNullViolation => "cant't be blank",
            ErrorCode::NoReferencedRow => "cannot add or update a child row",
            ErrorCode::DataTooLong => "data too long",
            ErrorCode::OutOfRange => "out of range value",
            ErrorCode::BadField => "unknown column",
            ErrorCode::DuplicateFieldName => "duplicate column name",
            ErrorCode::CantDropFieldOrKey => "can't drop column or key",
        }
    }

    /// Server message template, one `%s` per value the server interpolates
    pub const fn template(self) -> &'static str {
        match self {
            ErrorCode::DuplicateEntry => "Duplicate entry '%s' for key '%s'",
            ErrorCode::NotNullViolation => "Column '%s' cannot be null",
            ErrorCode::NoReferencedRow => {
                "Cannot add or update a child row: a foreign key constraint fails (%s)"
            }
            ErrorCode::DataTooLong => "Data too long for column '%s' at row %s",
            ErrorCode::OutOfRange => "Out of range value for column '%s' at row %s",
            ErrorCode::BadField => "Unknown column '%s' in '%s'",
            ErrorCode::DuplicateFieldName => "Duplicate column name '%s'",
            ErrorCode::CantDropFieldOrKey => "Can't DROP '%s'; check that column/key exists",
        }
    }

    /// Template placeholder holding the violated key name, if the code has one
    pub const fn constraint_placeholder(self) -> Option<usize> {
        match self {
            ErrorCode::DuplicateEntry => Some(1),
            _ => None,
        }
    }
}

impl TryFrom<u16> for ErrorCode {
    type Error = u16;

    fn try_from(number: u16) -> std::result::Result<Self, Self::Error> {
        ErrorCode::from_number(number).ok_or(number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbers_round_trip_through_registry() {
        for code in ErrorCode::ALL {
            assert_eq!(ErrorCode::from_number(code.number()), Some(code));
        }
    }

    #[test]
    fn test_unregistered_number() {
        assert_eq!(ErrorCode::from_number(9999), None);
        assert_eq!(ErrorCode::try_from(9999u16), Err(9999));
        assert_eq!(ErrorCode::try_from(1062u16), Ok(ErrorCode::DuplicateEntry));
    }

    #[test]
    fn test_legacy_messages() {
        assert_eq!(ErrorCode::DuplicateEntry.message(), "has already been taken");
        assert_eq!(ErrorCode::NotNullViolation.message(), "cant't be blank");
        assert_eq!(ErrorCode::NoReferencedRow.number(), 1452);
    }

    #[test]
    fn test_every_template_has_a_placeholder() {
        for code in ErrorCode::ALL {
            assert!(code.template().contains("%s"), "{:?}", code);
            assert!(!code.message().is_empty());
        }
    }
}
