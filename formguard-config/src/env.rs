// Environment variable loading

use crate::Result;
use std::collections::HashMap;
use std::env;

/// Separator that turns `STYLE__COLOR` into the nested key `style.color`.
pub const NESTING_SEPARATOR: &str = "__";

/// Loads `PREFIX_`-scoped environment variables as dotted config keys.
pub struct EnvLoader {
    prefix: Option<String>,
}

impl EnvLoader {
    pub fn new(prefix: Option<String>) -> Self {
        Self { prefix }
    }

    /// Load matching variables from the process environment.
    pub fn load(&self) -> Result<HashMap<String, String>> {
        Ok(self.collect(env::vars()))
    }

    /// Filter and rename an arbitrary set of variables.
    ///
    /// With a prefix, only `PREFIX_*` variables are kept and the prefix is
    /// stripped. Keys are lowercased and `__` becomes `.`.
    pub fn collect<I>(&self, vars: I) -> HashMap<String, String>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut config = HashMap::new();

        for (key, value) in vars {
            let key = match self.prefix {
                Some(ref prefix) => match key.strip_prefix(prefix.as_str()) {
                    Some(rest) if rest.starts_with('_') => rest.trim_start_matches('_').to_string(),
                    _ => continue,
                },
                None => key,
            };
            if key.is_empty() {
                continue;
            }
            config.insert(to_config_key(&key), value);
        }

        config
    }
}

impl Default for EnvLoader {
    fn default() -> Self {
        Self::new(None)
    }
}

fn to_config_key(raw: &str) -> String {
    raw.to_lowercase()
        .split(NESTING_SEPARATOR)
        .collect::<Vec<_>>()
        .join(".")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_collect_strips_prefix_and_nests() {
        let loader = EnvLoader::new(Some("FORMGUARD".to_string()));
        let loaded = loader.collect(vars(&[
            ("FORMGUARD_STYLE__COLOR", "crimson"),
            ("FORMGUARD_FIELDS__EMAIL", "txtEmail"),
            ("PATH", "/usr/bin"),
            ("FORMGUARDIAN_X", "ignored"),
        ]));

        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded.get("style.color").map(String::as_str), Some("crimson"));
        assert_eq!(loaded.get("fields.email").map(String::as_str), Some("txtEmail"));
    }

    #[test]
    fn test_collect_without_prefix_keeps_everything() {
        let loader = EnvLoader::default();
        let loaded = loader.collect(vars(&[("HOME", "/root"), ("A__B", "c")]));

        assert_eq!(loaded.get("home").map(String::as_str), Some("/root"));
        assert_eq!(loaded.get("a.b").map(String::as_str), Some("c"));
    }
}
