//! Practice identity and mail defaults.
//!
//! The contact details mirror what the marketing site publishes; the SMTP
//! values are fallbacks used when the environment leaves them unset.

pub const PRACTICE_NAME: &str = "Somerville Dental Associates";
pub const PRACTICE_PHONE: &str = "(+1) (781)-(874)-(1630)";
pub const PRACTICE_EMAIL: &str = "somervilledental@verizon.net";
pub const PRACTICE_ADDRESS: &str = "3 Ashland Street, Medford, MA 02155";

pub const DEFAULT_SMTP_HOST: &str = "smtp.gmail.com";
pub const DEFAULT_SMTP_PORT: u16 = 587;
pub const DEFAULT_FROM_NAME: &str = PRACTICE_NAME;
pub const DEFAULT_FROM_ADDRESS: &str = "business@alexshick.com";
