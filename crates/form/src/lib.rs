//! # Dental Form
//!
//! Client-side half of the appointment-request pipeline: the form controller
//! owning the mutable submission draft, live phone formatting, field
//! validation, the transport seam used to reach the server endpoint, and the
//! RAII scroll lock held while the request modal is open.

pub mod controller;
pub mod phone;
pub mod transport;
pub mod ui_lock;

pub use controller::{Field, FormController, SubmitOutcome};
pub use phone::format_phone;
pub use transport::{HttpTransport, SubmissionTransport, TransportError};
pub use ui_lock::{ScrollLock, UiLockState};
