//! Integration tests for formguard-config

use formguard_config::*;
use std::env;

#[test]
fn test_load_defaults_without_file() {
    let config = FormConfig::load(None).unwrap();
    assert_eq!(config.fields.comments, "comments");
    assert_eq!(config.style.display, "block");
}

#[test]
fn test_load_toml_file_with_env_override() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("form.toml");
    std::fs::write(
        &path,
        r#"
        [fields]
        email = "txtEmail"
        first_name = "txtNombre"

        [messages]
        comments_length = "Tell us a little more."
        "#,
    )
    .unwrap();

    unsafe {
        env::set_var("FORMGUARD_STYLE__FONT_SIZE", "11px");
    }

    let config = FormConfig::load(Some(&path)).unwrap();

    unsafe {
        env::remove_var("FORMGUARD_STYLE__FONT_SIZE");
    }

    assert_eq!(config.fields.email, "txtEmail");
    assert_eq!(config.fields.first_name, "txtNombre");
    assert_eq!(config.fields.last_name, "last-name");
    assert_eq!(config.messages.comments_length, "Tell us a little more.");
    assert_eq!(config.messages.phone, Messages::default().phone);
    assert_eq!(config.style.font_size, "11px");
}

#[test]
fn test_load_rejects_unsupported_extension() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("form.yaml");
    std::fs::write(&path, "fields: {}").unwrap();

    assert!(matches!(
        FormConfig::load(Some(&path)),
        Err(ConfigError::LoadError(_))
    ));
}

#[test]
fn test_load_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.json");

    assert!(matches!(
        FormConfig::load(Some(&path)),
        Err(ConfigError::IoError(_))
    ));
}

#[test]
fn test_non_table_document_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("form.json");
    std::fs::write(&path, "[1, 2, 3]").unwrap();

    assert!(matches!(
        FormConfig::load(Some(&path)),
        Err(ConfigError::ParseError(_))
    ));
}
