//! Transport seam between the form controller and the server endpoint.

use async_trait::async_trait;
use dental_core::AppointmentRequest;
use serde::Deserialize;

/// Errors surfaced by a submission transport.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// The server rejected the payload (400-equivalent).
    #[error("server rejected the submission: {0}")]
    Rejected(String),
    /// The request could not be delivered or the server failed (500-equivalent).
    #[error("failed to deliver the submission: {0}")]
    Delivery(String),
}

/// Carries a validated-shape payload to the submission endpoint.
///
/// The controller only depends on this trait, so tests can substitute an
/// in-memory transport and assert on exactly what was (or wasn't) sent.
#[async_trait]
pub trait SubmissionTransport: Send + Sync {
    async fn submit(&self, request: &AppointmentRequest) -> Result<(), TransportError>;
}

/// Error body returned by the endpoint on failure.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
    details: Option<String>,
}

/// HTTP implementation posting the JSON payload to the API endpoint.
pub struct HttpTransport {
    endpoint: String,
    client: reqwest::Client,
}

impl HttpTransport {
    /// Creates a transport targeting the given endpoint URL.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl SubmissionTransport for HttpTransport {
    async fn submit(&self, request: &AppointmentRequest) -> Result<(), TransportError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .await
            .map_err(|e| TransportError::Delivery(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let message = match response.json::<ErrorBody>().await {
            Ok(body) => match body.details {
                Some(details) => format!("{}: {details}", body.error),
                None => body.error,
            },
            Err(_) => format!("HTTP {status}"),
        };

        if status == reqwest::StatusCode::BAD_REQUEST {
            Err(TransportError::Rejected(message))
        } else {
            Err(TransportError::Delivery(message))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api_rest::{app, AppState};
    use dental_core::{MailConfig, MailEnvValues};
    use dental_mailer::{MailError, Mailer, OutboundEmail};
    use std::sync::Arc;

    /// Accepts or refuses every send, so the endpoint's success and failure
    /// responses can both be provoked.
    struct StubMailer {
        fail: bool,
    }

    #[async_trait]
    impl Mailer for StubMailer {
        async fn send(&self, _email: &OutboundEmail) -> Result<(), MailError> {
            if self.fail {
                return Err(MailError::Smtp("relay unavailable".into()));
            }
            Ok(())
        }
    }

    /// Serves the real router on an ephemeral port; returns the endpoint URL.
    async fn serve(fail: bool) -> String {
        let config = MailConfig::from_env_values(MailEnvValues::default()).unwrap();
        let state = AppState {
            config: Arc::new(config),
            mailer: Arc::new(StubMailer { fail }),
        };
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app(state)).await.unwrap();
        });
        format!("http://{addr}/api/send-appointment-email")
    }

    fn request() -> AppointmentRequest {
        AppointmentRequest {
            name: "Jane Doe".into(),
            email: "jane@example.com".into(),
            phone: "(781) 874-1630".into(),
            insurance_carrier: "Delta Dental".into(),
            insurance_id: "DD-12345".into(),
            appointment_request: "Cleaning and checkup".into(),
        }
    }

    #[tokio::test]
    async fn accepted_submission_returns_ok() {
        let transport = HttpTransport::new(serve(false).await);
        assert!(transport.submit(&request()).await.is_ok());
    }

    #[tokio::test]
    async fn rejected_payload_surfaces_as_rejected_with_server_message() {
        let transport = HttpTransport::new(serve(false).await);
        let mut req = request();
        req.insurance_id = String::new();

        match transport.submit(&req).await.unwrap_err() {
            TransportError::Rejected(message) => {
                assert!(message.contains("insuranceId"), "message was: {message}");
            }
            other => panic!("expected Rejected, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn server_failure_surfaces_as_delivery_with_details() {
        let transport = HttpTransport::new(serve(true).await);

        match transport.submit(&request()).await.unwrap_err() {
            TransportError::Delivery(message) => {
                assert!(message.contains("Failed to send email"), "message was: {message}");
                assert!(message.contains("relay unavailable"), "message was: {message}");
            }
            other => panic!("expected Delivery, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn unreachable_endpoint_surfaces_as_delivery() {
        // Grab an ephemeral port and release it so the connect is refused.
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let transport = HttpTransport::new(format!("http://{addr}/api/send-appointment-email"));
        assert!(matches!(
            transport.submit(&request()).await,
            Err(TransportError::Delivery(_))
        ));
    }
}
