//! Standalone REST API server binary.
//!
//! ## Purpose
//! Runs the appointment REST API on its own.
//!
//! ## Intended use
//! Useful for development and debugging when you only want the REST server
//! (with OpenAPI/Swagger UI). Deployments normally use the workspace's main
//! `dental-run` binary.

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api_rest::{app, AppState};
use dental_core::{MailConfig, MailEnvValues};
use dental_mailer::SmtpMailer;

/// Main entry point for the standalone appointment REST API server
///
/// Starts the REST API server on the configured address (default: 0.0.0.0:3000).
///
/// # Environment Variables
/// - `DENTAL_REST_ADDR`: Server address (default: "0.0.0.0:3000")
/// - `SMTP_HOST`, `SMTP_PORT`, `SMTP_USER`, `SMTP_PASSWORD`: mail relay settings
/// - `FROM_NAME`, `FROM_EMAIL`: sender identity (practice defaults when unset)
/// - `BUSINESS_EMAIL`: business notification recipient (skipped when unset)
///
/// # Errors
/// Returns an error if:
/// - the logging/tracing configuration cannot be initialised,
/// - the mail configuration is invalid,
/// - the server address cannot be bound, or
/// - the HTTP server fails while running.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("api_rest=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let addr = std::env::var("DENTAL_REST_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".into());

    tracing::info!("-- Starting appointment REST API on {}", addr);

    let config = MailConfig::from_env_values(MailEnvValues::from_process_env())?;
    let mailer = SmtpMailer::new(
        config.smtp_host(),
        config.smtp_port(),
        config.smtp_credentials(),
    )?;

    let state = AppState {
        config: Arc::new(config),
        mailer: Arc::new(mailer),
    };

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app(state)).await?;

    Ok(())
}
