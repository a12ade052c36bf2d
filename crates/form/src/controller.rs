//! Draft-submission state and validation.

use std::collections::BTreeMap;

use dental_core::AppointmentRequest;
use dental_types::{EmailAddress, PhoneNumber};

use crate::phone::format_phone;
use crate::transport::SubmissionTransport;

pub const INVALID_EMAIL_MESSAGE: &str = "Please enter a valid email address.";
pub const INVALID_PHONE_MESSAGE: &str = "Please enter a valid phone number.";

/// The six fields of an appointment-request form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Email,
    Phone,
    InsuranceCarrier,
    InsuranceId,
    AppointmentRequest,
}

impl Field {
    pub const ALL: [Field; 6] = [
        Field::Name,
        Field::Email,
        Field::Phone,
        Field::InsuranceCarrier,
        Field::InsuranceId,
        Field::AppointmentRequest,
    ];

    fn index(self) -> usize {
        match self {
            Field::Name => 0,
            Field::Email => 1,
            Field::Phone => 2,
            Field::InsuranceCarrier => 3,
            Field::InsuranceId => 4,
            Field::AppointmentRequest => 5,
        }
    }

    fn required_message(self) -> &'static str {
        match self {
            Field::Name => "Name is required.",
            Field::Email => "Email is required.",
            Field::Phone => "Phone is required.",
            Field::InsuranceCarrier => "Insurance carrier is required.",
            Field::InsuranceId => "Insurance ID is required.",
            Field::AppointmentRequest => "Appointment request is required.",
        }
    }
}

/// What a call to [`FormController::submit`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation failed; the field errors describe what needs correcting.
    Invalid,
    /// A previous submission has not settled yet; nothing was sent.
    InFlight,
    /// The submission was sent and the confirmation can be shown. Delivery
    /// may still have failed; see [`FormController::delivery_error`].
    Accepted,
}

/// Owns the mutable draft of one appointment request.
///
/// The controller is constructed fresh per form session, mutated field by
/// field as the user types, and discarded (or [`reset`](Self::reset)) after a
/// successful submission or modal dismissal. Nothing is ever persisted.
#[derive(Debug, Default)]
pub struct FormController {
    values: [String; 6],
    errors: BTreeMap<Field, &'static str>,
    submitting: bool,
    success: bool,
    delivery_error: Option<String>,
}

impl FormController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current value of a field.
    pub fn value(&self, field: Field) -> &str {
        &self.values[field.index()]
    }

    /// Current validation message for a field, if any.
    pub fn error(&self, field: Field) -> Option<&'static str> {
        self.errors.get(&field).copied()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Delivery failure recorded by the last submission, if any.
    ///
    /// The confirmation is still shown when this is set; the failure is
    /// surfaced here (and logged) instead of being silently swallowed.
    pub fn delivery_error(&self) -> Option<&str> {
        self.delivery_error.as_deref()
    }

    /// Stores a new raw value for a field.
    ///
    /// The phone field is formatted live; every edit optimistically clears
    /// that field's error, which is not re-checked until blur or submit.
    pub fn update_field(&mut self, field: Field, raw: &str) {
        let value = if field == Field::Phone {
            format_phone(raw)
        } else {
            raw.to_string()
        };
        self.values[field.index()] = value;
        self.errors.remove(&field);
    }

    /// Validates a single field, as happens on blur.
    ///
    /// Sets the field-specific message on failure and clears any stale
    /// message on success, consistent with edit-time clearing.
    pub fn validate_field(&mut self, field: Field) {
        match Self::check(field, self.value(field)) {
            Some(message) => {
                self.errors.insert(field, message);
            }
            None => {
                self.errors.remove(&field);
            }
        }
    }

    fn check(field: Field, value: &str) -> Option<&'static str> {
        if value.trim().is_empty() {
            return Some(field.required_message());
        }
        match field {
            Field::Email if EmailAddress::parse(value).is_err() => Some(INVALID_EMAIL_MESSAGE),
            Field::Phone if PhoneNumber::parse(value).is_err() => Some(INVALID_PHONE_MESSAGE),
            _ => None,
        }
    }

    fn to_request(&self) -> AppointmentRequest {
        AppointmentRequest {
            name: self.value(Field::Name).to_string(),
            email: self.value(Field::Email).to_string(),
            phone: self.value(Field::Phone).to_string(),
            insurance_carrier: self.value(Field::InsuranceCarrier).to_string(),
            insurance_id: self.value(Field::InsuranceId).to_string(),
            appointment_request: self.value(Field::AppointmentRequest).to_string(),
        }
    }

    /// Validates everything and, if clean, submits through the transport.
    ///
    /// All six fields are re-checked with the blur predicates, independent of
    /// any prior error state. On failure the complete error map is set and
    /// the transport is never invoked. On a well-formed submission the
    /// success flag is set when the call settles regardless of the transport
    /// outcome; a delivery failure is logged and recorded on the controller.
    ///
    /// Dropping the returned future mid-send leaves the controller in the
    /// submitting state, so later calls return [`SubmitOutcome::InFlight`]
    /// until [`reset`](Self::reset).
    pub async fn submit(&mut self, transport: &dyn SubmissionTransport) -> SubmitOutcome {
        if self.submitting {
            return SubmitOutcome::InFlight;
        }

        let mut errors = BTreeMap::new();
        for field in Field::ALL {
            if let Some(message) = Self::check(field, self.value(field)) {
                errors.insert(field, message);
            }
        }
        if !errors.is_empty() {
            self.errors = errors;
            return SubmitOutcome::Invalid;
        }
        self.errors.clear();

        self.submitting = true;
        let request = self.to_request();
        let result = transport.submit(&request).await;
        self.submitting = false;
        self.success = true;

        if let Err(err) = result {
            tracing::error!("appointment submission delivery failed: {err}");
            self.delivery_error = Some(err.to_string());
        }

        SubmitOutcome::Accepted
    }

    /// Clears all fields, errors, and flags, ready for a fresh session.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::TransportError;
    use async_trait::async_trait;
    use std::sync::{Arc, Mutex};

    #[derive(Default, Clone)]
    struct FakeTransport {
        submitted: Arc<Mutex<Vec<AppointmentRequest>>>,
        fail_with: Arc<Mutex<Option<String>>>,
    }

    impl FakeTransport {
        fn failing(message: &str) -> Self {
            Self {
                fail_with: Arc::new(Mutex::new(Some(message.to_string()))),
                ..Default::default()
            }
        }

        fn submissions(&self) -> Vec<AppointmentRequest> {
            self.submitted.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl SubmissionTransport for FakeTransport {
        async fn submit(&self, request: &AppointmentRequest) -> Result<(), TransportError> {
            if let Some(message) = self.fail_with.lock().unwrap().clone() {
                return Err(TransportError::Delivery(message));
            }
            self.submitted.lock().unwrap().push(request.clone());
            Ok(())
        }
    }

    fn filled_controller() -> FormController {
        let mut form = FormController::new();
        form.update_field(Field::Name, "Jane Doe");
        form.update_field(Field::Email, "jane@example.com");
        form.update_field(Field::Phone, "7818741630");
        form.update_field(Field::InsuranceCarrier, "Delta Dental");
        form.update_field(Field::InsuranceId, "DD-12345");
        form.update_field(Field::AppointmentRequest, "Cleaning please");
        form
    }

    #[test]
    fn phone_edits_are_formatted_live() {
        let mut form = FormController::new();
        form.update_field(Field::Phone, "7818");
        assert_eq!(form.value(Field::Phone), "(781) 8");
        form.update_field(Field::Phone, "7818741630");
        assert_eq!(form.value(Field::Phone), "(781) 874-1630");
    }

    #[test]
    fn editing_clears_existing_error() {
        let mut form = FormController::new();
        form.validate_field(Field::Name);
        assert_eq!(form.error(Field::Name), Some("Name is required."));
        form.update_field(Field::Name, "J");
        assert!(form.error(Field::Name).is_none());
    }

    #[test]
    fn blur_sets_required_and_format_errors() {
        let mut form = FormController::new();
        form.validate_field(Field::InsuranceCarrier);
        assert_eq!(
            form.error(Field::InsuranceCarrier),
            Some("Insurance carrier is required.")
        );

        form.update_field(Field::Email, "not-an-email");
        form.validate_field(Field::Email);
        assert_eq!(form.error(Field::Email), Some(INVALID_EMAIL_MESSAGE));

        form.update_field(Field::Phone, "781874");
        form.validate_field(Field::Phone);
        assert_eq!(form.error(Field::Phone), Some(INVALID_PHONE_MESSAGE));
    }

    #[test]
    fn blur_clears_stale_error_on_valid_value() {
        let mut form = FormController::new();
        form.update_field(Field::Email, "bad");
        form.validate_field(Field::Email);
        assert!(form.error(Field::Email).is_some());
        form.update_field(Field::Email, "jane@example.com");
        form.validate_field(Field::Email);
        assert!(form.error(Field::Email).is_none());
    }

    #[tokio::test]
    async fn submit_blocks_on_any_empty_field() {
        let transport = FakeTransport::default();
        let mut form = filled_controller();
        form.update_field(Field::InsuranceId, "   ");

        let outcome = form.submit(&transport).await;
        assert_eq!(outcome, SubmitOutcome::Invalid);
        assert_eq!(
            form.error(Field::InsuranceId),
            Some("Insurance ID is required.")
        );
        assert!(transport.submissions().is_empty());
        assert!(!form.is_success());
    }

    #[tokio::test]
    async fn submit_revalidates_all_fields_ignoring_stale_state() {
        let transport = FakeTransport::default();
        let mut form = FormController::new();

        let outcome = form.submit(&transport).await;
        assert_eq!(outcome, SubmitOutcome::Invalid);
        // Every field gets its required message in one pass.
        for field in Field::ALL {
            assert!(form.error(field).is_some(), "missing error for {field:?}");
        }
        assert!(transport.submissions().is_empty());
    }

    #[tokio::test]
    async fn well_formed_submit_reaches_transport_and_shows_success() {
        let transport = FakeTransport::default();
        let mut form = filled_controller();

        let outcome = form.submit(&transport).await;
        assert_eq!(outcome, SubmitOutcome::Accepted);
        assert!(form.is_success());
        assert!(!form.is_submitting());
        assert!(form.delivery_error().is_none());

        let sent = transport.submissions();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].phone, "(781) 874-1630");
        assert_eq!(sent[0].insurance_carrier, "Delta Dental");
    }

    #[tokio::test]
    async fn delivery_failure_still_shows_success_but_is_recorded() {
        let transport = FakeTransport::failing("relay unavailable");
        let mut form = filled_controller();

        let outcome = form.submit(&transport).await;
        assert_eq!(outcome, SubmitOutcome::Accepted);
        assert!(form.is_success());
        assert!(form
            .delivery_error()
            .is_some_and(|e| e.contains("relay unavailable")));
    }

    /// Never completes, so a submission can be abandoned mid-send.
    struct StalledTransport;

    #[async_trait]
    impl SubmissionTransport for StalledTransport {
        async fn submit(&self, _request: &AppointmentRequest) -> Result<(), TransportError> {
            std::future::pending().await
        }
    }

    #[tokio::test]
    async fn abandoned_submission_refuses_later_calls_until_reset() {
        let mut form = filled_controller();

        let abandoned = tokio::time::timeout(
            std::time::Duration::from_millis(20),
            form.submit(&StalledTransport),
        )
        .await;
        assert!(abandoned.is_err());
        assert!(form.is_submitting());

        let transport = FakeTransport::default();
        let outcome = form.submit(&transport).await;
        assert_eq!(outcome, SubmitOutcome::InFlight);
        assert!(transport.submissions().is_empty());

        form.reset();
        assert_eq!(form.submit(&transport).await, SubmitOutcome::Invalid);
    }

    #[tokio::test]
    async fn reset_returns_to_pristine_state() {
        let transport = FakeTransport::default();
        let mut form = filled_controller();
        form.submit(&transport).await;
        assert!(form.is_success());

        form.reset();
        assert!(!form.is_success());
        assert!(form.delivery_error().is_none());
        for field in Field::ALL {
            assert!(form.value(field).is_empty());
            assert!(form.error(field).is_none());
        }
    }
}
