//! # Dental Core
//!
//! Server-side appointment-request pipeline for the Somerville Dental site:
//! - presence validation of the submitted payload
//! - HTML-entity sanitization of every field
//! - rendering of the confirmation and business-notification email documents
//! - dispatch of both emails through the [`dental_mailer::Mailer`] boundary
//!
//! **No API concerns**: the HTTP server and OpenAPI surface belong in
//! `api-rest`; the client-side draft state belongs in `dental-form`.

pub mod config;
pub mod constants;
pub mod error;
pub mod sanitize;
pub mod submission;
pub mod templates;

pub use config::{MailConfig, MailEnvValues};
pub use error::{SubmissionError, SubmissionResult};
pub use submission::{process_submission, DispatchSummary};

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// An appointment request as submitted by the website form.
///
/// All six fields are required; the server checks presence (non-empty after
/// trimming) and rejects the request otherwise. Fields default to empty
/// strings during deserialization so that an absent key surfaces as a
/// missing-field error rather than a deserialization failure, matching the
/// original wire contract.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct AppointmentRequest {
    /// Requester's full name.
    pub name: String,
    /// Requester's email address.
    pub email: String,
    /// Requester's phone number, usually formatted as `(NNN) NNN-NNNN`.
    pub phone: String,
    /// Insurance carrier name.
    pub insurance_carrier: String,
    /// Insurance member ID.
    pub insurance_id: String,
    /// Free-text appointment request; newlines are meaningful.
    pub appointment_request: String,
}

impl AppointmentRequest {
    /// Wire names of every field that is absent or blank.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.name.trim().is_empty() {
            missing.push("name");
        }
        if self.email.trim().is_empty() {
            missing.push("email");
        }
        if self.phone.trim().is_empty() {
            missing.push("phone");
        }
        if self.insurance_carrier.trim().is_empty() {
            missing.push("insuranceCarrier");
        }
        if self.insurance_id.trim().is_empty() {
            missing.push("insuranceId");
        }
        if self.appointment_request.trim().is_empty() {
            missing.push("appointmentRequest");
        }
        missing
    }
}
