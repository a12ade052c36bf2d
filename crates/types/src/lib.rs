//! Validated text types for the appointment-request pipeline.
//!
//! Each type enforces its invariant at construction, so downstream code can
//! hold an `EmailAddress` or `PhoneNumber` without re-checking its shape.

/// Validation failures for the text newtypes in this crate.
#[derive(Debug, thiserror::Error)]
pub enum TextError {
    /// Nothing remained after trimming whitespace
    #[error("Text cannot be blank")]
    Empty,
    /// The input did not match the `local@domain.tld` shape
    #[error("Invalid email address")]
    InvalidEmail,
    /// The input did not contain exactly 10 digits
    #[error("Invalid phone number")]
    InvalidPhone,
}

/// Owned text guaranteed to hold at least one non-whitespace character.
///
/// Construction trims the input, so the stored value never carries leading
/// or trailing whitespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NonEmptyText(String);

impl NonEmptyText {
    /// Trims the input and wraps it.
    ///
    /// # Returns
    ///
    /// Returns `Ok(NonEmptyText)` holding the trimmed text, or
    /// `Err(TextError::Empty)` when nothing remains after trimming.
    pub fn new(input: impl AsRef<str>) -> Result<Self, TextError> {
        let text = input.as_ref().trim();
        if text.is_empty() {
            return Err(TextError::Empty);
        }
        Ok(Self(text.to_owned()))
    }

    /// Borrows the inner text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for NonEmptyText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for NonEmptyText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl serde::Serialize for NonEmptyText {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> serde::Deserialize<'de> for NonEmptyText {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        NonEmptyText::new(&s).map_err(serde::de::Error::custom)
    }
}

/// An email address with a verified `local@domain.tld` shape.
///
/// This intentionally checks shape only, not deliverability: no whitespace,
/// exactly one `@`, a non-empty local part, and a domain containing an
/// interior dot. `a@b.co` passes; `a@b` and `plainstring` do not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Parses an email address, trimming surrounding whitespace first.
    ///
    /// # Returns
    ///
    /// Returns `Ok(EmailAddress)` if the input matches the expected shape,
    /// `Err(TextError::Empty)` for blank input, or `Err(TextError::InvalidEmail)`
    /// otherwise.
    pub fn parse(input: impl AsRef<str>) -> Result<Self, TextError> {
        let trimmed = input.as_ref().trim();
        if trimmed.is_empty() {
            return Err(TextError::Empty);
        }
        if !Self::has_valid_shape(trimmed) {
            return Err(TextError::InvalidEmail);
        }
        Ok(Self(trimmed.to_owned()))
    }

    fn has_valid_shape(candidate: &str) -> bool {
        if candidate.chars().any(char::is_whitespace) {
            return false;
        }
        let Some((local, domain)) = candidate.split_once('@') else {
            return false;
        };
        if local.is_empty() || domain.is_empty() || domain.contains('@') {
            return false;
        }
        // The domain needs a dot with at least one character on each side.
        domain
            .char_indices()
            .any(|(i, c)| c == '.' && i > 0 && i < domain.len() - 1)
    }

    /// Returns the inner address as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl serde::Serialize for EmailAddress {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> serde::Deserialize<'de> for EmailAddress {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        EmailAddress::parse(&s).map_err(serde::de::Error::custom)
    }
}

/// A North American phone number holding exactly 10 digits.
///
/// Construction strips every non-digit character, so formatted input such as
/// `(781) 874-1630` is accepted. `Display` renders the canonical
/// `(NNN) NNN-NNNN` form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Parses a phone number from raw or formatted input.
    ///
    /// # Returns
    ///
    /// Returns `Ok(PhoneNumber)` if the input contains exactly 10 digits after
    /// stripping non-digits, or `Err(TextError::InvalidPhone)` otherwise.
    pub fn parse(input: impl AsRef<str>) -> Result<Self, TextError> {
        let digits: String = input
            .as_ref()
            .chars()
            .filter(char::is_ascii_digit)
            .collect();
        if digits.len() != 10 {
            return Err(TextError::InvalidPhone);
        }
        Ok(Self(digits))
    }

    /// Returns the bare 10-digit string, suitable for `tel:` links.
    pub fn digits(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}) {}-{}", &self.0[..3], &self.0[3..6], &self.0[6..])
    }
}

impl serde::Serialize for PhoneNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for PhoneNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        PhoneNumber::parse(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_empty_text_trims_input() {
        let text = NonEmptyText::new("  Somerville Dental  ").unwrap();
        assert_eq!(text.as_str(), "Somerville Dental");
    }

    #[test]
    fn non_empty_text_rejects_whitespace_only() {
        assert!(NonEmptyText::new("   ").is_err());
        assert!(NonEmptyText::new("").is_err());
    }

    #[test]
    fn email_accepts_minimal_shape() {
        assert!(EmailAddress::parse("a@b.co").is_ok());
        assert!(EmailAddress::parse("patient@example.com").is_ok());
    }

    #[test]
    fn email_rejects_missing_tld() {
        assert!(EmailAddress::parse("a@b").is_err());
    }

    #[test]
    fn email_rejects_plain_string() {
        assert!(EmailAddress::parse("plainstring").is_err());
    }

    #[test]
    fn email_rejects_whitespace_and_double_at() {
        assert!(EmailAddress::parse("a b@c.co").is_err());
        assert!(EmailAddress::parse("a@b@c.co").is_err());
        assert!(EmailAddress::parse("@b.co").is_err());
        assert!(EmailAddress::parse("a@.co").is_err());
        assert!(EmailAddress::parse("a@b.").is_err());
    }

    #[test]
    fn email_trims_surrounding_whitespace() {
        let email = EmailAddress::parse(" patient@example.com ").unwrap();
        assert_eq!(email.as_str(), "patient@example.com");
    }

    #[test]
    fn phone_accepts_exactly_ten_digits() {
        let phone = PhoneNumber::parse("7818741630").unwrap();
        assert_eq!(phone.digits(), "7818741630");
        assert_eq!(phone.to_string(), "(781) 874-1630");
    }

    #[test]
    fn phone_accepts_formatted_input() {
        let phone = PhoneNumber::parse("(781) 874-1630").unwrap();
        assert_eq!(phone.digits(), "7818741630");
    }

    #[test]
    fn phone_rejects_nine_and_eleven_digits() {
        assert!(PhoneNumber::parse("781874163").is_err());
        assert!(PhoneNumber::parse("78187416301").is_err());
    }

    #[test]
    fn phone_serializes_formatted() {
        let phone = PhoneNumber::parse("7818741630").unwrap();
        let json = serde_json::to_string(&phone).unwrap();
        assert_eq!(json, "\"(781) 874-1630\"");
    }
}
