// tests/config_test.rs
use add_ticket::config::{load_config, Config, OnMissing};
use add_ticket::domain::ErrorPolicy;
use add_ticket::AddTicketError;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

#[test]
fn test_load_default_config() {
    let config = Config::default();
    assert_eq!(config.policy.on_missing, OnMissing::Omit);
    assert_eq!(config.policy.placeholder, None);
}

#[test]
fn test_load_from_file() {
    let mut temp_file = NamedTempFile::new().unwrap();
    let toml_content = r#"
[policy]
on_missing = "abort"
"#;
    temp_file.write_all(toml_content.as_bytes()).unwrap();
    temp_file.flush().unwrap();

    let config = load_config(temp_file.path()).unwrap();
    assert_eq!(config.policy.on_missing, OnMissing::Abort);
    assert_eq!(config.error_policy().unwrap(), ErrorPolicy::Abort);
}

#[test]
fn test_placeholder_fixture() {
    let config = load_config(Path::new("tests/fixtures/policy_placeholder.toml"))
        .expect("Failed to load test config");
    assert_eq!(
        config.error_policy().unwrap(),
        ErrorPolicy::Placeholder("No ticket".to_string())
    );
}

#[test]
fn test_invalid_fixture_is_config_error() {
    let err = load_config(Path::new("tests/fixtures/policy_invalid.toml")).unwrap_err();
    assert!(matches!(err, AddTicketError::Config(_)));
    assert!(err.to_string().contains("policy_invalid.toml"));
}

#[test]
fn test_unknown_keys_are_ignored() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file
        .write_all(b"[policy]\non_missing = \"omit\"\n\n[extra]\nfoo = 1\n")
        .unwrap();
    temp_file.flush().unwrap();

    let config = load_config(temp_file.path()).unwrap();
    assert_eq!(config.error_policy().unwrap(), ErrorPolicy::Omit);
}
