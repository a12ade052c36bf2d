use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api_rest::{app, AppState};
use dental_core::{MailConfig, MailEnvValues};
use dental_mailer::SmtpMailer;

/// Main entry point for the Somerville Dental appointment service
///
/// Starts the REST server that backs the website's appointment-request form.
/// Mail configuration is resolved once here and handed to the request
/// handlers; nothing reads the environment after startup.
///
/// # Environment Variables
/// - `DENTAL_REST_ADDR`: REST server address (default: "0.0.0.0:3000")
/// - `SMTP_HOST`: mail relay hostname (default: "smtp.gmail.com")
/// - `SMTP_PORT`: mail relay port (default: 587)
/// - `SMTP_USER`, `SMTP_PASSWORD`: relay credentials (anonymous when unset)
/// - `FROM_NAME`, `FROM_EMAIL`: sender identity (practice defaults when unset)
/// - `BUSINESS_EMAIL`: business notification recipient (send skipped when unset)
///
/// # Returns
/// * `Ok(())` - If the server starts and runs successfully
/// * `Err(anyhow::Error)` - If startup or runtime fails
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("dental=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let addr = std::env::var("DENTAL_REST_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".into());

    tracing::info!("++ Starting Somerville Dental appointment API on {}", addr);

    let config = MailConfig::from_env_values(MailEnvValues::from_process_env())?;
    if config.business_address().is_none() {
        tracing::warn!("BUSINESS_EMAIL is unset; business notifications will be skipped");
    }

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
