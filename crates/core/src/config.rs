//! Mail configuration.
//!
//! Configuration is resolved once at process startup and then passed into the
//! submission pipeline. The intent is to avoid reading process-wide
//! environment variables during request handling, which can lead to
//! inconsistent behaviour in multi-threaded runtimes and test harnesses.

use crate::constants::{
    DEFAULT_FROM_ADDRESS, DEFAULT_FROM_NAME, DEFAULT_SMTP_HOST, DEFAULT_SMTP_PORT,
};
use crate::{SubmissionError, SubmissionResult};
use dental_types::{EmailAddress, NonEmptyText};

/// Raw environment values feeding [`MailConfig`].
///
/// Kept as plain `Option<String>` so tests can construct configurations
/// without touching the process environment.
#[derive(Debug, Default, Clone)]
pub struct MailEnvValues {
    pub smtp_host: Option<String>,
    pub smtp_port: Option<String>,
    pub smtp_user: Option<String>,
    pub smtp_password: Option<String>,
    pub from_name: Option<String>,
    pub from_email: Option<String>,
    pub business_email: Option<String>,
}

impl MailEnvValues {
    /// Reads the `SMTP_*`, `FROM_*`, and `BUSINESS_EMAIL` variables from the
    /// process environment. Intended for binary entry points only.
    pub fn from_process_env() -> Self {
        Self {
            smtp_host: std::env::var("SMTP_HOST").ok(),
            smtp_port: std::env::var("SMTP_PORT").ok(),
            smtp_user: std::env::var("SMTP_USER").ok(),
            smtp_password: std::env::var("SMTP_PASSWORD").ok(),
            from_name: std::env::var("FROM_NAME").ok(),
            from_email: std::env::var("FROM_EMAIL").ok(),
            business_email: std::env::var("BUSINESS_EMAIL").ok(),
        }
    }
}

/// Mail settings resolved at startup.
///
/// The from name and address always have values (falling back to the practice
/// defaults); the business recipient is optional, and when unset the
/// notification send is skipped entirely.
#[derive(Clone, Debug)]
pub struct MailConfig {
    smtp_host: NonEmptyText,
    smtp_port: u16,
    smtp_user: Option<String>,
    smtp_password: Option<String>,
    from_name: NonEmptyText,
    from_address: EmailAddress,
    business_address: Option<EmailAddress>,
}

/// Treats empty and whitespace-only values the same as unset.
fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl MailConfig {
    /// Builds a `MailConfig` from optional environment values.
    ///
    /// Unset or blank values fall back to the documented defaults; the
    /// business recipient stays `None` when unset.
    ///
    /// # Errors
    ///
    /// Returns `SubmissionError::InvalidConfig` if the port does not parse as
    /// a `u16` or if a provided from/business address fails the email-shape
    /// check.
    pub fn from_env_values(values: MailEnvValues) -> SubmissionResult<Self> {
        let smtp_host = NonEmptyText::new(
            non_blank(values.smtp_host).unwrap_or_else(|| DEFAULT_SMTP_HOST.into()),
        )
        .map_err(|e| SubmissionError::InvalidConfig(format!("SMTP host: {e}")))?;

        let smtp_port = match non_blank(values.smtp_port) {
            Some(raw) => raw
                .parse::<u16>()
                .map_err(|e| SubmissionError::InvalidConfig(format!("SMTP port: {e}")))?,
            None => DEFAULT_SMTP_PORT,
        };

        let from_name = NonEmptyText::new(
            non_blank(values.from_name).unwrap_or_else(|| DEFAULT_FROM_NAME.into()),
        )
        .map_err(|e| SubmissionError::InvalidConfig(format!("from name: {e}")))?;

        let from_address = EmailAddress::parse(
            non_blank(values.from_email).unwrap_or_else(|| DEFAULT_FROM_ADDRESS.into()),
        )
        .map_err(|e| SubmissionError::InvalidConfig(format!("from address: {e}")))?;

        let business_address = non_blank(values.business_email)
            .map(|addr| {
                EmailAddress::parse(&addr)
                    .map_err(|e| SubmissionError::InvalidConfig(format!("business address: {e}")))
            })
            .transpose()?;

        Ok(Self {
            smtp_host,
            smtp_port,
            smtp_user: non_blank(values.smtp_user),
            smtp_password: non_blank(values.smtp_password),
            from_name,
            from_address,
            business_address,
        })
    }

    pub fn smtp_host(&self) -> &str {
        self.smtp_host.as_str()
    }

    pub fn smtp_port(&self) -> u16 {
        self.smtp_port
    }

    /// Username/password pair, present only when both are configured.
    pub fn smtp_credentials(&self) -> Option<(String, String)> {
        match (&self.smtp_user, &self.smtp_password) {
            (Some(user), Some(password)) => Some((user.clone(), password.clone())),
            _ => None,
        }
    }

    pub fn from_name(&self) -> &str {
        self.from_name.as_str()
    }

    pub fn from_address(&self) -> &str {
        self.from_address.as_str()
    }

    pub fn business_address(&self) -> Option<&str> {
        self.business_address.as_ref().map(EmailAddress::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_everything_unset() {
        let cfg = MailConfig::from_env_values(MailEnvValues::default()).unwrap();
        assert_eq!(cfg.smtp_host(), DEFAULT_SMTP_HOST);
        assert_eq!(cfg.smtp_port(), DEFAULT_SMTP_PORT);
        assert_eq!(cfg.from_name(), DEFAULT_FROM_NAME);
        assert_eq!(cfg.from_address(), DEFAULT_FROM_ADDRESS);
        assert!(cfg.business_address().is_none());
        assert!(cfg.smtp_credentials().is_none());
    }

    #[test]
    fn blank_values_fall_back_to_defaults() {
        let cfg = MailConfig::from_env_values(MailEnvValues {
            smtp_host: Some("  ".into()),
            smtp_port: Some(String::new()),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(cfg.smtp_host(), DEFAULT_SMTP_HOST);
        assert_eq!(cfg.smtp_port(), DEFAULT_SMTP_PORT);
    }

    #[test]
    fn explicit_values_override_defaults() {
        let cfg = MailConfig::from_env_values(MailEnvValues {
            smtp_host: Some("smtp.example.com".into()),
            smtp_port: Some("2525".into()),
            smtp_user: Some("mailer".into()),
            smtp_password: Some("secret".into()),
            from_name: Some("Front Desk".into()),
            from_email: Some("desk@example.com".into()),
            business_email: Some("office@example.com".into()),
        })
        .unwrap();
        assert_eq!(cfg.smtp_host(), "smtp.example.com");
        assert_eq!(cfg.smtp_port(), 2525);
        assert_eq!(cfg.from_name(), "Front Desk");
        assert_eq!(cfg.from_address(), "desk@example.com");
        assert_eq!(cfg.business_address(), Some("office@example.com"));
        assert_eq!(
            cfg.smtp_credentials(),
            Some(("mailer".into(), "secret".into()))
        );
    }

    #[test]
    fn credentials_require_both_halves() {
        let cfg = MailConfig::from_env_values(MailEnvValues {
            smtp_user: Some("mailer".into()),
            ..Default::default()
        })
        .unwrap();
        assert!(cfg.smtp_credentials().is_none());
    }

    #[test]
    fn invalid_port_is_rejected() {
        let result = MailConfig::from_env_values(MailEnvValues {
            smtp_port: Some("not-a-port".into()),
            ..Default::default()
        });
        assert!(matches!(result, Err(SubmissionError::InvalidConfig(_))));
    }

    #[test]
    fn invalid_business_address_is_rejected() {
        let result = MailConfig::from_env_values(MailEnvValues {
            business_email: Some("not-an-email".into()),
            ..Default::default()
        });
        assert!(matches!(result, Err(SubmissionError::InvalidConfig(_))));
    }
}
