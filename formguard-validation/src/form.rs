// Form validator: submit and input handlers

use crate::{
    ErrorAnnotation, FieldRule, FieldView, FormError, FormSubmitter, SubmitEvent, SubmitOutcome,
    ValidationErrors, ValidationRules,
};
use formguard_config::{AnnotationStyle, FormConfig};
use formguard_log::{debug, info, warn};
use std::collections::HashSet;
use std::path::Path;

/// Runs an ordered rule set against a form and toggles error annotations.
///
/// The validator owns no form state; every handler borrows the view it
/// acts on, so it can drive any [`FieldView`] implementation.
#[derive(Debug, Clone)]
pub struct FormValidator {
    rules: ValidationRules,
    watched: Vec<String>,
    style: AnnotationStyle,
}

impl FormValidator {
    /// Build a validator. `watched` lists the fields whose annotation is
    /// cleared on input.
    pub fn new(rules: ValidationRules, watched: Vec<String>, style: AnnotationStyle) -> Self {
        info!("initializing form validation ({} rules)", rules.len());
        Self {
            rules,
            watched,
            style,
        }
    }

    /// Contact form rules with default ids, messages and style.
    pub fn contact_form() -> Self {
        Self::from_config(&FormConfig::default())
    }

    /// Contact form rules with ids, messages and style from `config`.
    /// Every field that has a rule is watched.
    pub fn from_config(config: &FormConfig) -> Self {
        let rules = ValidationRules::contact_form(config);
        let watched = rules.fields().into_iter().map(str::to_string).collect();
        Self::new(rules, watched, config.style.clone())
    }

    /// Load the form configuration (defaults, then `path`, then
    /// `FORMGUARD_*` variables) and build the contact form validator.
    pub fn load(path: Option<&Path>) -> Result<Self, FormError> {
        let config = FormConfig::load(path)?;
        Ok(Self::from_config(&config))
    }

    pub fn rules(&self) -> &ValidationRules {
        &self.rules
    }

    pub fn watched_fields(&self) -> &[String] {
        &self.watched
    }

    pub fn style(&self) -> &AnnotationStyle {
        &self.style
    }

    /// Evaluate one rule against a value. No side effects.
    pub fn validate_field(value: &str, rule: &FieldRule) -> bool {
        rule.check(value)
    }

    /// Outline `field` and show `message` in its single message element.
    pub fn show_error<V>(&self, view: &mut V, field: &str, message: &str) -> Result<(), FormError>
    where
        V: FieldView + ?Sized,
    {
        let annotation = ErrorAnnotation {
            message,
            style: &self.style,
        };
        view.set_error_state(field, &annotation)
    }

    /// Remove the outline and message element of `field`, if any.
    pub fn clear_error<V>(&self, view: &mut V, field: &str) -> Result<(), FormError>
    where
        V: FieldView + ?Sized,
    {
        view.clear_error_state(field)
    }

    /// Handle a submission.
    ///
    /// Prevents the default action, then evaluates every rule in order.
    /// A failing rule shows its message; when several rules on one field
    /// fail, the last one's message is what remains visible. Fields with
    /// no failing rule are cleared. The form is submitted only when every
    /// rule passed.
    pub fn on_submit<F>(&self, form: &mut F, event: &mut SubmitEvent) -> Result<SubmitOutcome, FormError>
    where
        F: FieldView + FormSubmitter + ?Sized,
    {
        event.prevent_default();
        debug!("validating form");

        let outcomes = self.rules.evaluate(|field| form.get_value(field))?;

        let failing: HashSet<&str> = outcomes
            .iter()
            .filter(|o| !o.passed)
            .map(|o| o.rule.field())
            .collect();

        let mut errors = ValidationErrors::default();
        for outcome in &outcomes {
            let field = outcome.rule.field();
            if !outcome.passed {
                self.show_error(form, field, outcome.rule.message())?;
                errors.add(outcome.rule.to_error(&outcome.value));
            } else if !failing.contains(field) {
                self.clear_error(form, field)?;
            }
        }

        if errors.is_empty() {
            info!("form valid, submitting");
            form.submit()?;
            Ok(SubmitOutcome::Submitted)
        } else {
            warn!(
                "validation errors found, fix before submitting ({} failed on {})",
                errors.len(),
                errors.fields().join(", ")
            );
            Ok(SubmitOutcome::Blocked(errors))
        }
    }

    /// Handle an edit of `field`: drop its annotation without re-validating.
    ///
    /// Returns `false` when the field is not watched and nothing was done.
    pub fn on_field_input<V>(&self, view: &mut V, field: &str) -> Result<bool, FormError>
    where
        V: FieldView + ?Sized,
    {
        if !self.watched.iter().any(|w| w == field) {
            return Ok(false);
        }
        self.clear_error(view, field)?;
        Ok(true)
    }
}
