// tests/config_test.rs
use release_outputs::config::{load_config, Config};
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_load_default_config() {
    let config = Config::default();
    assert_eq!(config.input.path, "./temp/schema.json");
    assert_eq!(config.output.env_var, "GITHUB_OUTPUT");
    assert_eq!(config.output.key_prefix, "release_");
}

#[test]
fn test_load_from_file() {
    let mut temp_file = NamedTempFile::new().unwrap();
    let toml_content = r#"
[output]
key_prefix = "nightly_"
"#;
    temp_file.write_all(toml_content.as_bytes()).unwrap();
    temp_file.flush().unwrap();

    let config = load_config(Some(temp_file.path().to_str().unwrap())).unwrap();
    assert_eq!(config.output.key_prefix, "nightly_");
    // Sections and keys left out keep their defaults
    assert_eq!(config.output.env_var, "GITHUB_OUTPUT");
    assert_eq!(config.input.path, "./temp/schema.json");
}

#[test]
fn test_load_fixture() {
    let config =
        load_config(Some("tests/fixtures/custom_output.toml")).expect("Failed to load test config");
    assert_eq!(config.input.path, "release/schema.json");
    assert_eq!(config.output.env_var, "RELEASE_STEP_OUTPUT");
    assert_eq!(config.output.key_prefix, "rc_");
}

#[test]
fn test_load_missing_file_fails() {
    let err = load_config(Some("tests/fixtures/does_not_exist.toml")).unwrap_err();
    assert!(err.to_string().contains("I/O error"));
}

#[test]
fn test_load_invalid_toml_fails() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(b"[output\nkey_prefix = ").unwrap();
    temp_file.flush().unwrap();

    let err = load_config(Some(temp_file.path().to_str().unwrap())).unwrap_err();
    assert!(err.to_string().starts_with("Configuration error"));
}

#[test]
fn test_load_rejects_prefix_with_equals() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file
        .write_all(b"[output]\nkey_prefix = \"a=\"\n")
        .unwrap();
    temp_file.flush().unwrap();

    let err = load_config(Some(temp_file.path().to_str().unwrap())).unwrap_err();
    assert!(err.to_string().contains("key_prefix"));
}
