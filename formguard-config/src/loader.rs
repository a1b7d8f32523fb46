// Configuration file loaders

use crate::{ConfigError, Result, insert_path};
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Supported configuration file formats
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FileFormat {
    Json,
    Toml,
    Env,
}

impl FileFormat {
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "json" => Some(FileFormat::Json),
            "toml" => Some(FileFormat::Toml),
            "env" => Some(FileFormat::Env),
            _ => None,
        }
    }

    /// Detect the format from a path's extension. `.env` files have no
    /// extension, only a file name.
    pub fn from_path(path: &Path) -> Option<Self> {
        if path.file_name().and_then(|n| n.to_str()) == Some(".env") {
            return Some(FileFormat::Env);
        }
        path.extension()
            .and_then(|s| s.to_str())
            .and_then(Self::from_extension)
    }
}

/// Parses configuration documents into a JSON value tree.
pub struct ConfigLoader {
    format: FileFormat,
}

impl ConfigLoader {
    pub fn new(format: FileFormat) -> Self {
        Self { format }
    }

    /// Pick the loader from the file extension.
    pub fn auto(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let format = FileFormat::from_path(path).ok_or_else(|| {
            ConfigError::LoadError(format!("Unsupported config file: {}", path.display()))
        })?;

        Ok(Self::new(format))
    }

    pub fn format(&self) -> FileFormat {
        self.format
    }

    pub fn load_file(&self, path: impl AsRef<Path>) -> Result<Value> {
        let content = fs::read_to_string(path.as_ref())?;
        self.parse(&content)
    }

    pub fn parse(&self, content: &str) -> Result<Value> {
        match self.format {
            FileFormat::Json => parse_json(content),
            FileFormat::Toml => parse_toml(content),
            FileFormat::Env => Ok(parse_env(content)),
        }
    }
}

fn parse_json(content: &str) -> Result<Value> {
    serde_json::from_str(content)
        .map_err(|e| ConfigError::ParseError(format!("JSON parse error: {}", e)))
}

fn parse_toml(content: &str) -> Result<Value> {
    let toml_value: toml::Value = toml::from_str(content)
        .map_err(|e| ConfigError::ParseError(format!("TOML parse error: {}", e)))?;

    serde_json::to_value(toml_value).map_err(|e| ConfigError::SerializationError(e.to_string()))
}

/// `KEY=value` lines; `__` in a key nests (`STYLE__COLOR` -> `style.color`).
fn parse_env(content: &str) -> Value {
    let mut root = serde_json::Map::new();

    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if let Some((key, value)) = line.split_once('=') {
            let key = key.trim().to_lowercase().replace("__", ".");
            let value = value.trim().trim_matches('"').trim_matches('\'');
            insert_path(&mut root, &key, Value::String(value.to_string()));
        }
    }

    Value::Object(root)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_json() {
        let loader = ConfigLoader::new(FileFormat::Json);
        let value = loader
            .parse(r#"{"fields": {"email": "txtEmail"}}"#)
            .unwrap();
        assert_eq!(value["fields"]["email"], "txtEmail");
    }

    #[test]
    fn test_parse_toml() {
        let loader = ConfigLoader::new(FileFormat::Toml);
        let value = loader
            .parse(
                r#"
                [style]
                color = "crimson"
                font_size = "14px"
                "#,
            )
            .unwrap();
        assert_eq!(value["style"]["color"], "crimson");
        assert_eq!(value["style"]["font_size"], "14px");
    }

    #[test]
    fn test_parse_env_nests_keys() {
        let loader = ConfigLoader::new(FileFormat::Env);
        let value = loader
            .parse(
                r#"
                # annotation look
                STYLE__COLOR="crimson"
                MESSAGES__EMAIL='Use a supported provider'
                "#,
            )
            .unwrap();
        assert_eq!(value["style"]["color"], "crimson");
        assert_eq!(value["messages"]["email"], "Use a supported provider");
    }

    #[test]
    fn test_parse_errors() {
        assert!(ConfigLoader::new(FileFormat::Json).parse("{").is_err());
        assert!(ConfigLoader::new(FileFormat::Toml).parse("= nope").is_err());
    }

    #[test]
    fn test_format_detection() {
        assert_eq!(FileFormat::from_extension("JSON"), Some(FileFormat::Json));
        assert_eq!(FileFormat::from_extension("toml"), Some(FileFormat::Toml));
        assert_eq!(FileFormat::from_extension("yaml"), None);
        assert_eq!(
            FileFormat::from_path(Path::new("/srv/form/.env")),
            Some(FileFormat::Env)
        );
        assert!(ConfigLoader::auto("form.yaml").is_err());
    }

    #[test]
    fn test_load_file_by_extension() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[fields]\nphone = \"txtPhone\"").unwrap();

        let loader = ConfigLoader::auto(file.path()).unwrap();
        assert_eq!(loader.format(), FileFormat::Toml);
        let value = loader.load_file(file.path()).unwrap();
        assert_eq!(value["fields"]["phone"], "txtPhone");
    }
}
