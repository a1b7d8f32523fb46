// Seams between the validator and the rendered form

use crate::FormError;
use formguard_config::AnnotationStyle;

/// What an error annotation shows: an outline on the input and one
/// message element right after it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ErrorAnnotation<'a> {
    pub message: &'a str,
    pub style: &'a AnnotationStyle,
}

/// Read and annotate form fields by identifier.
///
/// Implementations return [`FormError::FieldNotFound`] for unknown ids.
pub trait FieldView {
    /// Current value of the field as a string.
    fn get_value(&self, field: &str) -> Result<String, FormError>;

    /// Outline the field and make sure exactly one message element follows
    /// it, showing `annotation.message`. Calling it again replaces the text.
    fn set_error_state(
        &mut self,
        field: &str,
        annotation: &ErrorAnnotation<'_>,
    ) -> Result<(), FormError>;

    /// Drop the outline and the message element, if there is one.
    fn clear_error_state(&mut self, field: &str) -> Result<(), FormError>;
}

/// The form's own submission (navigation or network request).
pub trait FormSubmitter {
    fn submit(&mut self) -> Result<(), FormError>;
}
