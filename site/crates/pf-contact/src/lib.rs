//! Contact form submission.
//!
//! [`ContactFormHandler`] reads the form through a [`ContactFormView`],
//! validates it, posts it to the contact endpoint with [`ContactClient`] and
//! renders the outcome as a [`StatusMessage`] that hides itself after a
//! fixed delay.

pub mod client;
pub mod error;
pub mod handler;
pub mod payload;
pub mod status;
pub mod view;

#[cfg(test)]
mod tests;

pub use client::{ContactClient, ContactReply};
pub use error::{ContactError, Result as ContactResult};
pub use handler::{ContactFormHandler, FormPhase, SubmitOutcome};
pub use payload::{ContactFormPayload, FormField};
pub use status::{StatusDisplay, StatusKind, StatusMessage};
pub use view::ContactFormView;

/// Shown inline when any field is blank
pub const VALIDATION_MESSAGE: &str = "Please fill in all fields";
/// Shown on a 2xx response whose body carries no `message`
pub const DEFAULT_SUCCESS_MESSAGE: &str = "Message sent successfully!";
/// Shown on a non-2xx response whose body carries no `error`
pub const DEFAULT_FAILURE_MESSAGE: &str = "Failed to send message. Please try again.";
/// Shown when no response arrives: connection failure or deadline expiry
pub const NETWORK_ERROR_MESSAGE: &str =
    "Network error. Please check your connection and try again.";
