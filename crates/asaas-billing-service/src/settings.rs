//! Layered configuration loading.
//!
//! Sources, later ones overriding earlier ones:
//!  1. legacy flat variables `ASAAS_WEBHOOK_TOKEN` and `APP_ENV` (defaults only)
//!  2. `/etc/asaas-billing/service.yaml`  system-wide, optional
//!  3. `./config/service.yaml`            deployment-local, optional
//!  4. file named by `ASAAS_CONFIG_FILE`   required when set
//!  5. environment variables prefixed `ASAAS__` with `__` as separator,
//!     e.g. `ASAAS__WEBHOOK__WEBHOOK_TOKEN=...` sets `webhook.webhook_token`
//!
//! Every field has a serde default, so a host with no files and no variables
//! still yields a valid development configuration.

use anyhow::Context;
use asaas_billing_api::ServiceConfig;

pub const CONFIG_FILE_ENV: &str = "ASAAS_CONFIG_FILE";
pub const LEGACY_TOKEN_ENV: &str = "ASAAS_WEBHOOK_TOKEN";
pub const APP_ENV: &str = "APP_ENV";

const DEFAULT_FILES: [&str; 2] = ["/etc/asaas-billing/service", "config/service"];

/// Load configuration from the standard locations.
pub fn load() -> anyhow::Result<ServiceConfig> {
    let explicit = std::env::var(CONFIG_FILE_ENV)
        .ok()
        .filter(|path| !path.is_empty());
    load_from(&DEFAULT_FILES, explicit.as_deref())
}

fn load_from(optional_files: &[&str], explicit_file: Option<&str>) -> anyhow::Result<ServiceConfig> {
    let mut builder = config::Config::builder();

    if let Some(token) = non_empty_var(LEGACY_TOKEN_ENV) {
        builder = builder.set_default("webhook.webhook_token", token)?;
    }
    if let Some(environment) = non_empty_var(APP_ENV) {
        builder = builder.set_default("environment", environment)?;
    }

    for name in optional_files {
        builder = builder.add_source(
            config::File::with_name(name)
                .required(false)
                .format(config::FileFormat::Yaml),
        );
    }

    if let Some(path) = explicit_file {
        builder = builder.add_source(config::File::with_name(path).required(true));
    }

    let config = builder
        .add_source(config::Environment::with_prefix("ASAAS").separator("__"))
        .build()
        .context("failed to build configuration")?;

    config
        .try_deserialize()
        .context("failed to deserialize service configuration")
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.is_empty())
}

#[cfg(test)]
#[path = "settings_tests.rs"]
mod tests;
