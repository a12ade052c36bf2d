use dental_mailer::MailError;

/// Errors produced by the appointment-submission pipeline.
#[derive(Debug, thiserror::Error)]
pub enum SubmissionError {
    #[error("Missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),
    #[error("invalid mail configuration: {0}")]
    InvalidConfig(String),
    #[error("failed to send confirmation email: {0}")]
    ConfirmationSend(#[source] MailError),
    #[error("failed to send business notification email: {0}")]
    BusinessSend(#[source] MailError),
    #[error("failed to send confirmation ({confirmation}) and business notification ({business}) emails")]
    BothSendsFailed {
        confirmation: MailError,
        business: MailError,
    },
}

pub type SubmissionResult<T> = std::result::Result<T, SubmissionError>;
