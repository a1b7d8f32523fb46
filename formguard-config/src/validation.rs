// Configuration validation

use crate::{ConfigError, Result};
use std::collections::HashSet;

/// Checks a loaded configuration before it is used.
pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Reusable checks for configuration values.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Reject empty or whitespace-only values.
    pub fn not_empty(value: &str, field: &str) -> Result<()> {
        if value.trim().is_empty() {
            return Err(ConfigError::ValidationError(format!(
                "{} cannot be empty",
                field
            )));
        }
        Ok(())
    }

    /// Reject duplicate values among `(name, value)` pairs.
    pub fn distinct<'n, 'v, I>(values: I, group: &str) -> Result<()>
    where
        I: IntoIterator<Item = (&'n str, &'v str)>,
    {
        let mut seen = HashSet::new();
        for (name, value) in values {
            if !seen.insert(value) {
                return Err(ConfigError::ValidationError(format!(
                    "{}.{} reuses the value '{}'",
                    group, name, value
                )));
            }
        }
        Ok(())
    }

    pub fn one_of<T: PartialEq>(value: &T, allowed: &[T], field: &str) -> Result<()> {
        if !allowed.contains(value) {
            return Err(ConfigError::ValidationError(format!(
                "{} must be one of the allowed values",
                field
            )));
        }
        Ok(())
    }
}
