use crate::failure::Failure;
use crate::translator::Translator;
use fields::{FieldError, Record, RecordShape};

/// Map `sqlx` query results straight to field errors
///
/// # Example
/// ```no_run
/// use database::ResultExt;
/// use fields::{FieldError, Record, RecordShape};
///
/// struct User;
///
/// impl Record for User {
///     fn shape() -> RecordShape {
///         RecordShape::new().with_field("Email")
///     }
/// }
///
/// async fn insert(pool: &sqlx::MySqlPool, email: &str) -> Result<(), FieldError> {
///     sqlx::query("INSERT INTO users (email) VALUES (?)")
///         .bind(email)
///         .execute(pool)
///         .await
///         .map_record_err::<User>()?;
///     Ok(())
/// }
/// ```
pub trait ResultExt<T> {
    /// Translate an error against the fields of `R`
    fn map_record_err<R: Record>(self) -> Result<T, FieldError>;

    /// Translate an error against an explicit shape with a given translator
    fn map_shape_err(self, translator: &Translator, shape: &RecordShape) -> Result<T, FieldError>;
}

impl<T> ResultExt<T> for Result<T, sqlx::Error> {
    fn map_record_err<R: Record>(self) -> Result<T, FieldError> {
        self.map_err(|err| Translator::default().translate_record::<R>(&Failure::from(&err)))
    }

    fn map_shape_err(self, translator: &Translator, shape: &RecordShape) -> Result<T, FieldError> {
        self.map_err(|err| translator.translate(&Failure::from(&err), shape))
    }
}
