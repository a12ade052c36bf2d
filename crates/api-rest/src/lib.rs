//! REST API for the appointment-request pipeline.
//!
//! One substantive endpoint (`POST /api/send-appointment-email`) plus a
//! health probe, with OpenAPI/Swagger documentation. The handler delegates
//! to [`dental_core::process_submission`]; the mailer is injected through
//! application state so tests can run the router against an in-memory fake.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use serde::Serialize;
use tower_http::cors::CorsLayer;
use utoipa::{OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;

use dental_core::{process_submission, AppointmentRequest, MailConfig, SubmissionError};
use dental_mailer::Mailer;

/// Application state shared across REST API handlers
///
/// Holds the startup-resolved mail configuration and the mail-sending
/// dependency behind its trait, so request handling never touches the
/// process environment or a concrete transport.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<MailConfig>,
    pub mailer: Arc<dyn Mailer>,
}

#[derive(OpenApi)]
#[openapi(
    paths(health, send_appointment_email),
    components(schemas(AppointmentRequest, SendAppointmentRes, HealthRes, ApiError))
)]
struct ApiDoc;

/// Health check response body.
#[derive(Serialize, ToSchema)]
pub struct HealthRes {
    pub ok: bool,
    pub message: String,
}

/// Success response for the appointment endpoint.
#[derive(Serialize, ToSchema)]
pub struct SendAppointmentRes {
    pub success: bool,
    pub message: String,
}

/// Error response body: `error` always, `details` for transport failures.
#[derive(Serialize, ToSchema)]
pub struct ApiError {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// Builds the API router with Swagger UI and permissive CORS.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/send-appointment-email", post(send_appointment_email))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check response", body = HealthRes)
    )
)]
/// Health check endpoint for the REST API
///
/// Returns the current health status of the appointment API service.
/// This endpoint is used for monitoring and load balancer health checks.
#[axum::debug_handler]
async fn health(State(_state): State<AppState>) -> Json<HealthRes> {
    Json(HealthRes {
        ok: true,
        message: "Somerville Dental appointment API is alive".into(),
    })
}

#[utoipa::path(
    post,
    path = "/api/send-appointment-email",
    request_body = AppointmentRequest,
    responses(
        (status = 200, description = "Both notification emails dispatched", body = SendAppointmentRes),
        (status = 400, description = "Missing required fields", body = ApiError),
        (status = 500, description = "Mail dispatch failed", body = ApiError)
    )
)]
/// Accepts an appointment request and dispatches the notification emails
///
/// Validates presence of the six required fields, sanitizes them for HTML
/// embedding, renders the confirmation and business-notification documents,
/// and sends them through the configured mailer. Missing fields yield a 400
/// naming them; a failed send yields a 500 carrying the transport error.
#[axum::debug_handler]
async fn send_appointment_email(
    State(state): State<AppState>,
    Json(req): Json<AppointmentRequest>,
) -> Result<Json<SendAppointmentRes>, (StatusCode, Json<ApiError>)> {
    match process_submission(&req, &state.config, state.mailer.as_ref()).await {
        Ok(summary) => {
            tracing::info!(
                business_notified = summary.business_notified,
                "appointment request dispatched"
            );
            Ok(Json(SendAppointmentRes {
                success: true,
                message: "Email sent successfully".into(),
            }))
        }
        Err(err @ SubmissionError::MissingFields(_)) => Err((
            StatusCode::BAD_REQUEST,
            Json(ApiError {
                error: err.to_string(),
                details: None,
            }),
        )),
        Err(err) => {
            tracing::error!("Error sending email: {err}");
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiError {
                    error: "Failed to send email".into(),
                    details: Some(err.to_string()),
                }),
            ))
        }
    }
}
