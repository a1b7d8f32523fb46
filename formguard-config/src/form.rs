//! Form configuration: field identifiers, rule messages and the error
//! annotation look.

use crate::{ConfigManager, ConfigValidator, Result, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Environment prefix read by [`FormConfig::load`].
pub const ENV_PREFIX: &str = "FORMGUARD";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct FormConfig {
    pub fields: FieldIds,
    pub messages: Messages,
    pub style: AnnotationStyle,
}

/// Element identifiers of the validated inputs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldIds {
    pub email: String,
    pub phone: String,
    pub first_name: String,
    pub last_name: String,
    pub comments: String,
}

impl Default for FieldIds {
    fn default() -> Self {
        Self {
            email: "email".to_string(),
            phone: "phone".to_string(),
            first_name: "first-name".to_string(),
            last_name: "last-name".to_string(),
            comments: "comments".to_string(),
        }
    }
}

impl FieldIds {
    /// `(name, id)` pairs in rule declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        [
            ("email", self.email.as_str()),
            ("phone", self.phone.as_str()),
            ("first_name", self.first_name.as_str()),
            ("last_name", self.last_name.as_str()),
            ("comments", self.comments.as_str()),
        ]
        .into_iter()
    }
}

/// One message per rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Messages {
    pub email: String,
    pub phone: String,
    pub first_name_required: String,
    pub first_name_length: String,
    pub last_name_required: String,
    pub last_name_length: String,
    pub comments_length: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            email: "Email must be well formed and belong to an allowed provider \
                    (gmail, yahoo, hotmail, icloud) ending in .com or .es."
                .to_string(),
            phone: "Phone must start with +504 followed by 8 digits, the first being 2, 3, 8 or 9."
                .to_string(),
            first_name_required: "First name cannot be empty.".to_string(),
            first_name_length: "First name must be at least 3 characters long.".to_string(),
            last_name_required: "Last name cannot be empty.".to_string(),
            last_name_length: "Last name must be at least 3 characters long.".to_string(),
            comments_length: "Comments must be at least 10 characters long.".to_string(),
        }
    }
}

impl Messages {
    fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        [
            ("email", self.email.as_str()),
            ("phone", self.phone.as_str()),
            ("first_name_required", self.first_name_required.as_str()),
            ("first_name_length", self.first_name_length.as_str()),
            ("last_name_required", self.last_name_required.as_str()),
            ("last_name_length", self.last_name_length.as_str()),
            ("comments_length", self.comments_length.as_str()),
        ]
        .into_iter()
    }
}

/// Look of an error annotation: outline on the input, message element below it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnnotationStyle {
    pub outline: String,
    pub color: String,
    pub font_size: String,
    pub display: String,
}

impl Default for AnnotationStyle {
    fn default() -> Self {
        Self {
            outline: "2px solid red".to_string(),
            color: "red".to_string(),
            font_size: "12px".to_string(),
            display: "block".to_string(),
        }
    }
}

const DISPLAY_VALUES: [&str; 3] = ["block", "inline", "inline-block"];

impl Validate for FormConfig {
    fn validate(&self) -> Result<()> {
        for (name, id) in self.fields.iter() {
            ConfigValidator::not_empty(id, &format!("fields.{}", name))?;
        }
        ConfigValidator::distinct(self.fields.iter(), "fields")?;

        for (name, message) in self.messages.iter() {
            ConfigValidator::not_empty(message, &format!("messages.{}", name))?;
        }

        ConfigValidator::one_of(&self.style.display.as_str(), &DISPLAY_VALUES, "style.display")
    }
}

impl FormConfig {
    /// Defaults, then the optional file, then `FORMGUARD_*` variables.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let manager = ConfigManager::with_prefix(ENV_PREFIX.to_string());
        manager.set_defaults(&FormConfig::default())?;
        if let Some(path) = path {
            manager.load_file(path)?;
        }
        manager.load_env()?;
        manager.load_validated()
    }

    /// Same layering as [`FormConfig::load`] but with explicit variables.
    pub fn from_sources<I>(path: Option<&Path>, vars: I) -> Result<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let manager = ConfigManager::with_prefix(ENV_PREFIX.to_string());
        manager.set_defaults(&FormConfig::default())?;
        if let Some(path) = path {
            manager.load_file(path)?;
        }
        manager.load_env_from(vars);
        manager.load_validated()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ConfigError;

    fn env(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_defaults_are_valid() {
        let config = FormConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.fields.first_name, "first-name");
        assert_eq!(config.style.outline, "2px solid red");
        assert_eq!(config.style.font_size, "12px");
    }

    #[test]
    fn test_duplicate_field_ids_rejected() {
        let mut config = FormConfig::default();
        config.fields.last_name = "first-name".to_string();

        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
        assert!(err.to_string().contains("fields.last_name"));
    }

    #[test]
    fn test_empty_message_rejected() {
        let mut config = FormConfig::default();
        config.messages.phone = " ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_unknown_display_rejected() {
        let mut config = FormConfig::default();
        config.style.display = "grid".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_env_overrides_defaults() {
        let config = FormConfig::from_sources(
            None,
            env(&[
                ("FORMGUARD_FIELDS__EMAIL", "txtEmail"),
                ("FORMGUARD_STYLE__COLOR", "crimson"),
                ("FORMGUARD_LOG_LEVEL", "debug"),
            ]),
        )
        .unwrap();

        assert_eq!(config.fields.email, "txtEmail");
        assert_eq!(config.fields.phone, "phone");
        assert_eq!(config.style.color, "crimson");
        assert_eq!(config.style.outline, "2px solid red");
    }

    #[test]
    fn test_file_then_env_layering() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("form.json");
        std::fs::write(
            &path,
            r#"{"fields": {"phone": "txtPhone", "comments": "txtComments"}}"#,
        )
        .unwrap();

        let config = FormConfig::from_sources(
            Some(&path),
            env(&[("FORMGUARD_FIELDS__COMMENTS", "notes")]),
        )
        .unwrap();

        assert_eq!(config.fields.phone, "txtPhone");
        assert_eq!(config.fields.comments, "notes");
        assert_eq!(config.fields.email, "email");
    }

    #[test]
    fn test_invalid_layered_config_is_an_error() {
        let result = FormConfig::from_sources(None, env(&[("FORMGUARD_FIELDS__PHONE", "email")]));
        assert!(matches!(result, Err(ConfigError::ValidationError(_))));
    }
}
