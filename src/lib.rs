// Formguard - contact form validation with inline error annotations
//
// Re-exports the validation crate and, behind features, the configuration
// and logging crates it is built on.

pub use formguard_validation::*;

#[cfg(feature = "config")]
pub use formguard_config;

#[cfg(feature = "log")]
pub use formguard_log;

// Prelude for common imports
pub mod prelude {
    pub use crate::{
        ContactForm, ErrorAnnotation, FieldRule, FieldView, FormDocument, FormError,
        FormSubmitter, FormValidator, SubmitEvent, SubmitOutcome, Validate, ValidationError,
        ValidationErrors, ValidationRules,
    };

    #[cfg(feature = "config")]
    pub use formguard_config::{AnnotationStyle, FieldIds, FormConfig, Messages};
}
