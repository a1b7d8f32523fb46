// Configuration management for Formguard

pub mod env;
pub mod error;
pub mod form;
pub mod loader;
pub mod validation;

pub use env::EnvLoader;
pub use error::{ConfigError, Result};
pub use form::{AnnotationStyle, ENV_PREFIX, FieldIds, FormConfig, Messages};
pub use loader::{ConfigLoader, FileFormat};
pub use validation::{ConfigValidator, Validate};

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::path::Path;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Layered configuration tree.
///
/// Every layer is deep-merged over the previous one, so a file that only
/// sets `style.color` keeps the other style defaults. Keys are dotted
/// paths into the tree.
#[derive(Clone, Default)]
pub struct ConfigManager {
    config: Arc<RwLock<Map<String, Value>>>,
    env_prefix: Option<String>,
}

impl ConfigManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_prefix(prefix: String) -> Self {
        Self {
            config: Arc::default(),
            env_prefix: Some(prefix),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, Map<String, Value>> {
        self.config.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Map<String, Value>> {
        self.config.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Merge a serializable value as the lowest layer.
    pub fn set_defaults<T: Serialize>(&self, defaults: &T) -> Result<()> {
        let value = serde_json::to_value(defaults)
            .map_err(|e| ConfigError::SerializationError(e.to_string()))?;
        self.merge_value(value)
    }

    /// Load `PREFIX_*` variables from the process environment.
    pub fn load_env(&self) -> Result<()> {
        let loader = EnvLoader::new(self.env_prefix.clone());
        let vars = loader.load()?;
        self.insert_strings(vars);
        Ok(())
    }

    /// Like [`ConfigManager::load_env`] over an explicit variable set.
    pub fn load_env_from<I>(&self, vars: I)
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let loader = EnvLoader::new(self.env_prefix.clone());
        self.insert_strings(loader.collect(vars));
    }

    fn insert_strings(&self, vars: impl IntoIterator<Item = (String, String)>) {
        let mut config = self.write();
        for (key, value) in vars {
            insert_path(&mut config, &key, Value::String(value));
        }
    }

    /// Read a `.env` file into the process environment, then load variables.
    pub fn load_dotenv(&self, path: Option<&Path>) -> Result<()> {
        if let Some(path) = path {
            dotenvy::from_path(path).map_err(|e| ConfigError::LoadError(e.to_string()))?;
        } else {
            dotenvy::dotenv().ok();
        }
        self.load_env()
    }

    /// Merge a JSON, TOML or `.env` file picked by extension.
    pub fn load_file(&self, path: &Path) -> Result<()> {
        let data = ConfigLoader::auto(path)?.load_file(path)?;
        self.merge_value(data)
    }

    fn merge_value(&self, value: Value) -> Result<()> {
        match value {
            Value::Object(map) => {
                let mut config = self.write();
                for (key, value) in map {
                    merge_into(&mut config, key, value);
                }
                Ok(())
            }
            other => Err(ConfigError::ParseError(format!(
                "top-level configuration must be a table, found {}",
                other
            ))),
        }
    }

    pub fn set<T: Serialize>(&self, key: &str, value: T) -> Result<()> {
        let json_value = serde_json::to_value(value)
            .map_err(|e| ConfigError::SerializationError(e.to_string()))?;

        insert_path(&mut self.write(), key, json_value);
        Ok(())
    }

    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<T> {
        let config = self.read();
        let value =
            lookup_path(&config, key).ok_or_else(|| ConfigError::KeyNotFound(key.to_string()))?;

        serde_json::from_value(value.clone())
            .map_err(|e| ConfigError::DeserializationError(e.to_string()))
    }

    pub fn get_or<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        self.get(key).unwrap_or(default)
    }

    pub fn has(&self, key: &str) -> bool {
        lookup_path(&self.read(), key).is_some()
    }

    /// Top-level keys.
    pub fn keys(&self) -> Vec<String> {
        self.read().keys().cloned().collect()
    }

    /// Merge another manager's tree over this one.
    pub fn merge(&self, other: &ConfigManager) -> Result<()> {
        let snapshot = Value::Object(other.read().clone());
        self.merge_value(snapshot)
    }

    /// Deserialize the whole tree and run its [`Validate`] checks.
    pub fn load_validated<T: DeserializeOwned + Validate>(&self) -> Result<T> {
        let json_value = Value::Object(self.read().clone());

        let validated: T = serde_json::from_value(json_value)
            .map_err(|e| ConfigError::DeserializationError(e.to_string()))?;

        validated.validate()?;

        Ok(validated)
    }
}

fn merge_into(target: &mut Map<String, Value>, key: String, value: Value) {
    match value {
        Value::Object(incoming) => {
            if let Some(Value::Object(existing)) = target.get_mut(&key) {
                for (k, v) in incoming {
                    merge_into(existing, k, v);
                }
            } else {
                target.insert(key, Value::Object(incoming));
            }
        }
        value => {
            target.insert(key, value);
        }
    }
}

/// Insert `value` at a dotted path, creating (or replacing non-table)
/// intermediate tables.
pub(crate) fn insert_path(root: &mut Map<String, Value>, path: &str, value: Value) {
    let mut segments = path.split('.').filter(|s| !s.is_empty()).peekable();
    let mut current = root;

    while let Some(segment) = segments.next() {
        if segments.peek().is_none() {
            current.insert(segment.to_string(), value);
            return;
        }

        let entry = current
            .entry(segment.to_string())
            .or_insert_with(|| Value::Object(Map::new()));
        if !entry.is_object() {
            *entry = Value::Object(Map::new());
        }
        current = match entry {
            Value::Object(map) => map,
            _ => return,
        };
    }
}

fn lookup_path<'a>(root: &'a Map<String, Value>, path: &str) -> Option<&'a Value> {
    let mut segments = path.split('.');
    let mut current = root.get(segments.next()?)?;
    for segment in segments {
        current = current.as_object()?.get(segment)?;
    }
    Some(current)
}
