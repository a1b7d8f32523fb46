// Field rules and ordered rule sets

use crate::validators::{
    COMMENTS_MIN_LENGTH, NAME_MIN_LENGTH, has_min_trimmed_length, is_allowed_email,
    is_honduras_phone, is_not_blank,
};
use crate::{FormError, ValidationError, ValidationErrors};
use formguard_config::FormConfig;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

type PredicateFn = Arc<dyn Fn(&str) -> bool + Send + Sync>;

/// A predicate over one field's value plus the message shown when it fails.
#[derive(Clone)]
pub struct FieldRule {
    field: String,
    constraint: String,
    predicate: PredicateFn,
    message: String,
}

impl FieldRule {
    pub fn new<F>(
        field: impl Into<String>,
        constraint: impl Into<String>,
        predicate: F,
        message: impl Into<String>,
    ) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        Self {
            field: field.into(),
            constraint: constraint.into(),
            predicate: Arc::new(predicate),
            message: message.into(),
        }
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn constraint(&self) -> &str {
        &self.constraint
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Run the predicate. No side effects.
    pub fn check(&self, value: &str) -> bool {
        (self.predicate)(value)
    }

    pub fn to_error(&self, value: &str) -> ValidationError {
        ValidationError::new(&self.field, &self.message)
            .with_constraint(&self.constraint)
            .with_value(value)
    }
}

impl fmt::Debug for FieldRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldRule")
            .field("field", &self.field)
            .field("constraint", &self.constraint)
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}

/// Evaluate one rule against a value.
pub fn validate_field(value: &str, rule: &FieldRule) -> bool {
    rule.check(value)
}

/// Result of one rule in an evaluation pass.
#[derive(Debug, Clone)]
pub struct RuleOutcome<'r> {
    pub rule: &'r FieldRule,
    pub value: String,
    pub passed: bool,
}

/// Rules evaluated in declaration order.
#[derive(Debug, Clone, Default)]
pub struct ValidationRules {
    rules: Vec<FieldRule>,
}

impl ValidationRules {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a rule. Order of calls is evaluation order.
    pub fn rule(mut self, rule: FieldRule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Shorthand for `rule(FieldRule::new(..))`.
    #[allow(clippy::should_implement_trait)]
    pub fn add<F>(
        self,
        field: impl Into<String>,
        constraint: impl Into<String>,
        predicate: F,
        message: impl Into<String>,
    ) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        self.rule(FieldRule::new(field, constraint, predicate, message))
    }

    /// The contact form rule set, with ids and messages from `config`.
    ///
    /// Order: email, phone, first name (non-empty, length), last name
    /// (non-empty, length), comments.
    pub fn contact_form(config: &FormConfig) -> Self {
        let fields = &config.fields;
        let messages = &config.messages;

        Self::new()
            .add(&fields.email, "isAllowedEmail", is_allowed_email, &messages.email)
            .add(&fields.phone, "isHondurasPhone", is_honduras_phone, &messages.phone)
            .add(
                &fields.first_name,
                "notBlank",
                is_not_blank,
                &messages.first_name_required,
            )
            .add(
                &fields.first_name,
                "minTrimmedLength",
                |v: &str| has_min_trimmed_length(v, NAME_MIN_LENGTH),
                &messages.first_name_length,
            )
            .add(
                &fields.last_name,
                "notBlank",
                is_not_blank,
                &messages.last_name_required,
            )
            .add(
                &fields.last_name,
                "minTrimmedLength",
                |v: &str| has_min_trimmed_length(v, NAME_MIN_LENGTH),
                &messages.last_name_length,
            )
            .add(
                &fields.comments,
                "minTrimmedLength",
                |v: &str| has_min_trimmed_length(v, COMMENTS_MIN_LENGTH),
                &messages.comments_length,
            )
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FieldRule> {
        self.rules.iter()
    }

    /// Distinct field ids in first-declaration order.
    pub fn fields(&self) -> Vec<&str> {
        let mut fields: Vec<&str> = Vec::new();
        for rule in &self.rules {
            if !fields.contains(&rule.field()) {
                fields.push(rule.field());
            }
        }
        fields
    }

    /// Evaluate every rule in order, reading each value through `value_of`.
    ///
    /// Stops at the first lookup error; predicates themselves never fail.
    pub fn evaluate<F>(&self, mut value_of: F) -> Result<Vec<RuleOutcome<'_>>, FormError>
    where
        F: FnMut(&str) -> Result<String, FormError>,
    {
        self.rules
            .iter()
            .map(|rule| {
                let value = value_of(rule.field())?;
                let passed = rule.check(&value);
                Ok(RuleOutcome {
                    rule,
                    value,
                    passed,
                })
            })
            .collect()
    }

    /// Validate plain values keyed by field id. Empty result means valid.
    pub fn collect_errors(
        &self,
        values: &HashMap<String, String>,
    ) -> Result<ValidationErrors, FormError> {
        let outcomes = self.evaluate(|field| {
            values
                .get(field)
                .cloned()
                .ok_or_else(|| FormError::FieldNotFound(field.to_string()))
        })?;

        Ok(outcomes
            .into_iter()
            .filter(|o| !o.passed)
            .map(|o| o.rule.to_error(&o.value))
            .collect::<Vec<_>>()
            .into())
    }
}

impl<'a> IntoIterator for &'a ValidationRules {
    type Item = &'a FieldRule;
    type IntoIter = std::slice::Iter<'a, FieldRule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn valid_values() -> HashMap<String, String> {
        values(&[
            ("email", "maria@gmail.com"),
            ("phone", "+504 23456789"),
            ("first-name", "Maria"),
            ("last-name", "Lopez"),
            ("comments", "Great service!"),
        ])
    }

    #[test]
    fn test_contact_form_order() {
        let rules = ValidationRules::contact_form(&FormConfig::default());
        let order: Vec<(&str, &str)> = rules.iter().map(|r| (r.field(), r.constraint())).collect();

        assert_eq!(
            order,
            vec![
                ("email", "isAllowedEmail"),
                ("phone", "isHondurasPhone"),
                ("first-name", "notBlank"),
                ("first-name", "minTrimmedLength"),
                ("last-name", "notBlank"),
                ("last-name", "minTrimmedLength"),
                ("comments", "minTrimmedLength"),
            ]
        );
        assert_eq!(
            rules.fields(),
            vec!["email", "phone", "first-name", "last-name", "comments"]
        );
    }

    #[test]
    fn test_validate_field_is_pure() {
        let rules = ValidationRules::contact_form(&FormConfig::default());
        let name_required = rules.iter().nth(2).unwrap();
        let name_length = rules.iter().nth(3).unwrap();

        assert!(!validate_field("  ", name_required));
        assert!(validate_field("Ana", name_required));
        assert!(!validate_field("An", name_length));
        assert!(validate_field("Ana", name_length));
    }

    #[test]
    fn test_collect_errors_valid() {
        let rules = ValidationRules::contact_form(&FormConfig::default());
        assert!(rules.collect_errors(&valid_values()).unwrap().is_empty());
    }

    #[test]
    fn test_collect_errors_both_name_rules_fire() {
        let rules = ValidationRules::contact_form(&FormConfig::default());
        let mut input = valid_values();
        input.insert("first-name".to_string(), "   ".to_string());

        let errors = rules.collect_errors(&input).unwrap();
        let name_errors = errors.get_field_errors("first-name");
        assert_eq!(name_errors.len(), 2);
        assert_eq!(name_errors[0].constraint, "notBlank");
        assert_eq!(name_errors[1].constraint, "minTrimmedLength");
    }

    #[test]
    fn test_collect_errors_missing_field() {
        let rules = ValidationRules::contact_form(&FormConfig::default());
        let mut input = valid_values();
        input.remove("phone");

        match rules.collect_errors(&input) {
            Err(FormError::FieldNotFound(field)) => assert_eq!(field, "phone"),
            other => panic!("expected missing phone, got {:?}", other),
        }
    }

    #[test]
    fn test_custom_rules() {
        let rules = ValidationRules::new().add(
            "zip",
            "fiveDigits",
            |v: &str| v.len() == 5 && v.chars().all(|c| c.is_ascii_digit()),
            "ZIP must have 5 digits",
        );

        let errors = rules.collect_errors(&values(&[("zip", "1101")])).unwrap();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.errors[0].message, "ZIP must have 5 digits");
        assert_eq!(errors.errors[0].value.as_deref(), Some("1101"));
    }

    #[test]
    fn test_rule_debug_omits_predicate() {
        let rule = FieldRule::new("email", "isAllowedEmail", is_allowed_email, "bad email");
        let debug = format!("{:?}", rule);
        assert!(debug.contains("isAllowedEmail"));
        assert!(debug.contains(".."));
    }
}
