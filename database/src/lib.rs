//! Translation of MySQL server errors into field-scoped record errors.
//!
//! ```
//! use database::{translate, Failure};
//! use fields::RecordShape;
//!
//! let shape = RecordShape::new().with_field("ID").with_field("UserName");
//! let failure = Failure::mysql(1048, "Column 'user_name' cannot be null");
//!
//! let err = translate(&failure, &shape);
//! assert_eq!(err.field(), "user_name");
//! assert_eq!(err.message(), "cant't be blank");
//! ```

pub mod codes;
pub mod config;
pub mod error;
pub mod ext;
pub mod failure;
pub mod scan;
pub mod translator;

pub use codes::ErrorCode;
pub use config::{TranslatorConfig, UnregisteredCode};
pub use error::{DatabaseError, Result};
pub use ext::ResultExt;
pub use failure::Failure;
pub use translator::{translate, Translator};

// Re-export the record types translation works against
pub use fields::{custom_error, FieldError, Record, RecordShape};
