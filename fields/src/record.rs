use crate::naming::to_snake_case;
use crate::tags::{parse_tag_settings, COLUMN_SETTING};
use crate::{FieldsError, Result};
use std::collections::{HashMap, HashSet};
use tracing::debug;

/// A single declared field of a record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    name: String,
    normalized: String,
    column: String,
    settings: HashMap<String, String>,
}

impl FieldDescriptor {
    /// Create a field descriptor without tag settings
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_tag(name, "")
    }

    /// Create a field descriptor from its identifier and ORM tag string
    pub fn with_tag(name: impl Into<String>, tag: &str) -> Self {
        let name = name.into();
        let normalized = to_snake_case(&name);
        let settings = parse_tag_settings(tag);
        let column = settings
            .get(COLUMN_SETTING)
            .map(|column| column.trim().to_string())
            .filter(|column| !column.is_empty())
            .unwrap_or_else(|| normalized.clone());

        Self {
            name,
            normalized,
            column,
            settings,
        }
    }

    /// Identifier as declared
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Lower-snake-case identifier reported in field errors
    pub fn normalized_name(&self) -> &str {
        &self.normalized
    }

    /// Column name the database reports for this field
    pub fn column(&self) -> &str {
        &self.column
    }

    /// Parsed tag settings, keyed by upper-cased setting name
    pub fn settings(&self) -> &HashMap<String, String> {
        &self.settings
    }

    /// Look up a tag setting, case-insensitively on the key
    pub fn setting(&self, key: &str) -> Option<&str> {
        self.settings.get(&key.to_uppercase()).map(String::as_str)
    }
}

/// Ordered field vocabulary of a record type.
///
/// Declaration order matters: when several fields could match a driver
/// message, the first declared one wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordShape {
    fields: Vec<FieldDescriptor>,
}

impl RecordShape {
    /// Create an empty shape
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a shape from `(name, tag)` pairs, rejecting blank names and
    /// fields that resolve to the same column
    pub fn try_from_pairs<'a, I>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let shape = pairs
            .into_iter()
            .fold(Self::new(), |shape, (name, tag)| shape.with_tagged_field(name, tag));
        shape.validate()?;
        Ok(shape)
    }

    /// Append an untagged field
    pub fn with_field(self, name: impl Into<String>) -> Self {
        self.with_descriptor(FieldDescriptor::new(name))
    }

    /// Append a field carrying an ORM tag string
    pub fn with_tagged_field(self, name: impl Into<String>, tag: &str) -> Self {
        self.with_descriptor(FieldDescriptor::with_tag(name, tag))
    }

    /// Append a prepared descriptor
    pub fn with_descriptor(mut self, descriptor: FieldDescriptor) -> Self {
        self.fields.push(descriptor);
        self
    }

    /// Get all fields in declaration order
    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    /// Get a field by the column it is stored in
    pub fn get_by_column(&self, column: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.column == column)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Check that every field has a usable name and a distinct column
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();

        for field in &self.fields {
            if field.name.trim().is_empty() || field.normalized.is_empty() {
                debug!("Rejected blank field name {:?}", field.name);
                return Err(FieldsError::InvalidName(field.name.clone()));
            }

            if !seen.insert(field.column.as_str()) {
                debug!("Field '{}' reuses column '{}'", field.name, field.column);
                return Err(FieldsError::DuplicateColumn {
                    field: field.name.clone(),
                    column: field.column.clone(),
                });
            }
        }

        Ok(())
    }
}

/// Types that declare the field vocabulary used to attribute database errors
///
/// # Example
/// ```
/// use fields::{Record, RecordShape};
///
/// struct User;
///
/// impl Record for User {
///     fn shape() -> RecordShape {
///         RecordShape::new()
///             .with_field("ID")
///             .with_tagged_field("Email", "unique;size:255")
///     }
/// }
///
/// assert_eq!(User::shape().fields()[1].column(), "email");
/// ```
pub trait Record {
    fn shape() -> RecordShape;
}
