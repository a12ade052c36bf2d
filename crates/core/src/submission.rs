//! Submission dispatch orchestration.
//!
//! One linear sequence per request: presence check, sanitize, render, then up
//! to two independent sends. The confirmation is always attempted first; the
//! business notification is attempted only when a recipient is configured,
//! and a confirmation failure does not prevent the business attempt.

use dental_mailer::{MailError, Mailer, OutboundEmail};

use crate::templates::{business_document, confirmation_document, EmailDocument, SanitizedRequest};
use crate::{AppointmentRequest, MailConfig, SubmissionError, SubmissionResult};

/// What the pipeline actually dispatched for one submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DispatchSummary {
    /// True when a business recipient was configured and notified.
    pub business_notified: bool,
}

fn outbound(config: &MailConfig, to: &str, document: EmailDocument) -> OutboundEmail {
    OutboundEmail {
        from_name: config.from_name().to_string(),
        from_address: config.from_address().to_string(),
        to: to.to_string(),
        subject: document.subject,
        text: document.text,
        html: document.html,
    }
}

/// Runs the full submission pipeline for one appointment request.
///
/// # Errors
///
/// Returns `SubmissionError::MissingFields` if any of the six fields is
/// absent or blank, or a send error naming which dispatch failed. Sends are
/// fire-and-forget single attempts; nothing is retried or rolled back.
pub async fn process_submission(
    request: &AppointmentRequest,
    config: &MailConfig,
    mailer: &dyn Mailer,
) -> SubmissionResult<DispatchSummary> {
    let missing = request.missing_fields();
    if !missing.is_empty() {
        return Err(SubmissionError::MissingFields(missing));
    }

    let safe = SanitizedRequest::from_request(request);

    let confirmation = outbound(
        config,
        request.email.trim(),
        confirmation_document(&safe, request),
    );
    let confirmation_result = mailer.send(&confirmation).await;
    if let Err(err) = &confirmation_result {
        tracing::error!("confirmation send failed: {err}");
    }

    let business_result: Option<Result<(), MailError>> = match config.business_address() {
        Some(address) => {
            let notification = outbound(config, address, business_document(&safe, request));
            let result = mailer.send(&notification).await;
            if let Err(err) = &result {
                tracing::error!("business notification send failed: {err}");
            }
            Some(result)
        }
        None => {
            tracing::info!("no business recipient configured; skipping notification send");
            None
        }
    };

    match (confirmation_result, business_result) {
        (Ok(()), None) => Ok(DispatchSummary {
            business_notified: false,
        }),
        (Ok(()), Some(Ok(()))) => Ok(DispatchSummary {
            business_notified: true,
        }),
        (Err(confirmation), Some(Err(business))) => Err(SubmissionError::BothSendsFailed {
            confirmation,
            business,
        }),
        (Err(err), _) => Err(SubmissionError::ConfirmationSend(err)),
        (Ok(()), Some(Err(err))) => Err(SubmissionError::BusinessSend(err)),
    }
}
