//! Tests for layered configuration loading.
//!
//! These tests mutate process environment variables and therefore run
//! serially.

use super::*;
use asaas_billing_core::Environment;
use serial_test::serial;
use std::io::Write;

const MANAGED_VARS: [&str; 5] = [
    LEGACY_TOKEN_ENV,
    APP_ENV,
    "ASAAS__WEBHOOK__WEBHOOK_TOKEN",
    "ASAAS__SERVER__PORT",
    "ASAAS__ENVIRONMENT",
];

fn clear_env() {
    for name in MANAGED_VARS {
        std::env::remove_var(name);
    }
}

fn yaml_file(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".yaml")
        .tempfile()
        .unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
#[serial]
fn test_no_sources_yields_defaults() {
    clear_env();

    let config = load_from(&[], None).unwrap();

    assert_eq!(config.environment, Environment::Development);
    assert!(config.webhook.configured_token().is_none());
    assert_eq!(config.server.port, 8080);
}

#[test]
#[serial]
fn test_explicit_yaml_file_is_loaded() {
    clear_env();
    let file = yaml_file(
        "environment: production\n\
         server:\n  port: 9090\n\
         webhook:\n  webhook_token: from-file\n  endpoint_path: /billing/asaas\n",
    );

    let config = load_from(&[], Some(file.path().to_str().unwrap())).unwrap();

    assert!(config.environment.is_production());
    assert_eq!(config.server.port, 9090);
    assert_eq!(config.webhook.configured_token(), Some("from-file"));
    assert_eq!(config.webhook.endpoint_path, "/billing/asaas");
}

#[test]
#[serial]
fn test_missing_explicit_file_is_an_error() {
    clear_env();

    let result = load_from(&[], Some("/nonexistent/asaas/service.yaml"));

    assert!(result.is_err());
}

#[test]
#[serial]
fn test_legacy_variables_apply_when_nothing_else_is_set() {
    clear_env();
    std::env::set_var(LEGACY_TOKEN_ENV, "legacy-token");
    std::env::set_var(APP_ENV, "production");

    let config = load_from(&[], None).unwrap();
    clear_env();

    assert_eq!(config.webhook.configured_token(), Some("legacy-token"));
    assert!(config.environment.is_production());
}

#[test]
#[serial]
fn test_prefixed_variables_override_legacy_and_files() {
    clear_env();
    let file = yaml_file("webhook:\n  webhook_token: from-file\n");
    std::env::set_var(LEGACY_TOKEN_ENV, "legacy-token");
    std::env::set_var("ASAAS__WEBHOOK__WEBHOOK_TOKEN", "from-env");
    std::env::set_var("ASAAS__SERVER__PORT", "7070");

    let config = load_from(&[], Some(file.path().to_str().unwrap())).unwrap();
    clear_env();

    assert_eq!(config.webhook.configured_token(), Some("from-env"));
    assert_eq!(config.server.port, 7070);
}

#[test]
#[serial]
fn test_empty_legacy_token_is_ignored() {
    clear_env();
    std::env::set_var(LEGACY_TOKEN_ENV, "");

    let config = load_from(&[], None).unwrap();
    clear_env();

    assert!(config.webhook.configured_token().is_none());
}

#[test]
#[serial]
fn test_unknown_environment_name_fails() {
    clear_env();
    std::env::set_var("ASAAS__ENVIRONMENT", "moon");

    let result = load_from(&[], None);
    clear_env();

    assert!(result.is_err());
}
