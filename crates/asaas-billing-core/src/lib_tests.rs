//! Tests for the asaas-billing-core library module.

use super::*;

#[test]
fn test_environment_parsing_accepts_aliases() {
    assert_eq!("prod".parse::<Environment>().unwrap(), Environment::Production);
    assert_eq!("Production".parse::<Environment>().unwrap(), Environment::Production);
    assert_eq!("dev".parse::<Environment>().unwrap(), Environment::Development);
    assert_eq!("test".parse::<Environment>().unwrap(), Environment::Testing);
    assert_eq!("stage".parse::<Environment>().unwrap(), Environment::Staging);
    assert_eq!(" local ".parse::<Environment>().unwrap(), Environment::Local);
}

#[test]
fn test_environment_parsing_rejects_unknown_values() {
    let result = "qa".parse::<Environment>();
    assert!(matches!(result, Err(ParseError::InvalidFormat { .. })));
}

#[test]
fn test_only_production_is_production() {
    assert!(Environment::Production.is_production());
    for env in [
        Environment::Local,
        Environment::Development,
        Environment::Testing,
        Environment::Staging,
    ] {
        assert!(!env.is_production(), "{} must not count as production", env);
    }
}

#[test]
fn test_environment_defaults_to_development() {
    assert_eq!(Environment::default(), Environment::Development);
}

#[test]
fn test_environment_serde_uses_lowercase_names() {
    let json = serde_json::to_string(&Environment::Production).unwrap();
    assert_eq!(json, "\"production\"");

    let parsed: Environment = serde_json::from_str("\"PROD\"").unwrap();
    assert_eq!(parsed, Environment::Production);

    assert!(serde_json::from_str::<Environment>("\"moon\"").is_err());
}
