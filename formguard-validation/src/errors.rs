// Validation errors

use formguard_config::ConfigError;
use std::fmt;
use thiserror::Error;

/// A value that failed one rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Field identifier that failed validation
    pub field: String,

    /// Message shown next to the field
    pub message: String,

    /// Name of the failed constraint
    pub constraint: String,

    /// Value that failed validation (optional)
    pub value: Option<String>,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            constraint: "custom".to_string(),
            value: None,
        }
    }

    pub fn with_constraint(mut self, constraint: impl Into<String>) -> Self {
        self.constraint = constraint.into();
        self
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Failed rules of one submission, in rule order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    pub errors: Vec<ValidationError>,
}

impl ValidationErrors {
    pub fn new(errors: Vec<ValidationError>) -> Self {
        Self { errors }
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn add(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ValidationError> {
        self.errors.iter()
    }

    /// Errors for one field, in rule order.
    pub fn get_field_errors(&self, field: &str) -> Vec<&ValidationError> {
        self.errors.iter().filter(|e| e.field == field).collect()
    }

    /// Distinct failing fields, in first-failure order.
    pub fn fields(&self) -> Vec<&str> {
        let mut fields: Vec<&str> = Vec::new();
        for error in &self.errors {
            if !fields.contains(&error.field.as_str()) {
                fields.push(&error.field);
            }
        }
        fields
    }

    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "errors": self.errors.iter().map(|e| {
                serde_json::json!({
                    "field": e.field,
                    "message": e.message,
                    "constraint": e.constraint,
                    "value": e.value,
                })
            }).collect::<Vec<_>>()
        })
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for error in &self.errors {
            writeln!(f, "{}", error)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

impl From<Vec<ValidationError>> for ValidationErrors {
    fn from(errors: Vec<ValidationError>) -> Self {
        Self::new(errors)
    }
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a ValidationError;
    type IntoIter = std::slice::Iter<'a, ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

/// Wiring failures between the validator and the form it drives.
///
/// A failing rule is never a `FormError`; it is reported through
/// [`ValidationErrors`] and shown inline.
#[derive(Error, Debug)]
pub enum FormError {
    /// A rule or input handler names a field the form does not contain.
    #[error("form field not found: {0}")]
    FieldNotFound(String),

    #[error(transparent)]
    Config(#[from] ConfigError),
}
