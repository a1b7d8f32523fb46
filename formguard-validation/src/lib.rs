//! Contact form validation for Formguard
//!
//! Checks a contact form (email, phone, first name, last name, comments)
//! before it is submitted and toggles inline error annotations on the
//! offending fields.
//!
//! # Examples
//!
//! ## Validating a submission
//!
//! ```
//! use formguard_validation::{FormDocument, FormValidator, SubmitEvent};
//!
//! let validator = FormValidator::contact_form();
//! let mut form = FormDocument::new()
//!     .with_input("email", "bad@x.com")
//!     .with_input("phone", "+504 23456789")
//!     .with_input("first-name", "Maria")
//!     .with_input("last-name", "Lopez")
//!     .with_input("comments", "Great service!");
//!
//! let outcome = validator.on_submit(&mut form, &mut SubmitEvent::new()).unwrap();
//! assert!(!outcome.is_submitted());
//! assert_eq!(form.annotated_fields(), vec!["email"]);
//!
//! // Editing the field drops its annotation straight away.
//! form.type_into("email", "maria@gmail.com").unwrap();
//! validator.on_field_input(&mut form, "email").unwrap();
//! assert_eq!(form.annotation_count(), 0);
//! ```
//!
//! ## Predicates
//!
//! ```
//! use formguard_validation::{has_min_trimmed_length, is_allowed_email, is_honduras_phone};
//!
//! assert!(is_allowed_email("ana@icloud.es"));
//! assert!(!is_allowed_email("user@outlook.com"));
//! assert!(is_honduras_phone("+504 23456789"));
//! assert!(!is_honduras_phone("+504 12345678"));
//! assert!(has_min_trimmed_length("this is ok", 10));
//! ```
//!
//! ## Custom rules without a view
//!
//! ```
//! use formguard_validation::ValidationRules;
//! use std::collections::HashMap;
//!
//! let rules = ValidationRules::new()
//!     .add("city", "notBlank", |v: &str| !v.trim().is_empty(), "City is required.");
//!
//! let values = HashMap::from([("city".to_string(), " ".to_string())]);
//! let errors = rules.collect_errors(&values).unwrap();
//! assert_eq!(errors.len(), 1);
//! ```

mod contact;
mod document;
mod errors;
mod event;
mod form;
mod rules;
mod traits;
mod validators;
mod view;

pub use contact::*;
pub use document::*;
pub use errors::*;
pub use event::*;
pub use form::*;
pub use rules::*;
pub use traits::*;
pub use validators::*;
pub use view::*;
