//! # Asaas Billing Service
//!
//! Binary entry point for the Asaas webhook receiver.
//!
//! This executable:
//! - Initializes structured logging
//! - Loads configuration from files and environment
//! - Starts the HTTP server from asaas-billing-api

mod settings;

use asaas_billing_api::start_server;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let service_config = match settings::load() {
        Ok(config) => config,
        Err(e) => {
            // Logging is not initialized yet; the level lives in this config.
            eprintln!("Could not load service configuration: {:#}", e);
            std::process::exit(3);
        }
    };

    init_logging(&service_config.logging);

    info!(
        environment = %service_config.environment,
        "Starting Asaas Billing Service"
    );

    if let Err(e) = service_config.validate() {
        error!(error = %e, "Service configuration is invalid; aborting");
        std::process::exit(3);
    }

    start_server(service_config).await?;
    Ok(())
}

fn init_logging(logging: &asaas_billing_api::LoggingConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!(
            "asaas_billing_service={level},asaas_billing_api={level},tower_http=debug",
            level = logging.level
        )
        .into()
    });

    let registry = tracing_subscriber::registry().with(filter);

    if logging.json_format {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}
