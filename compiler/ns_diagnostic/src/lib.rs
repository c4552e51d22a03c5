//! Diagnostic system for error reporting.
//!
//! Every phase reports failures as a typed error that converts into a
//! [`Diagnostic`]:
//! - Error codes for searchability
//! - Clear messages (what went wrong)
//! - Primary span (where it went wrong)
//! - Notes and suggestions (how to fix it)
//!
//! Rendering is separate from construction: a [`emitter::DiagnosticEmitter`]
//! decides how a diagnostic reaches the user.

mod diagnostic;
pub mod emitter;
mod error_code;
pub mod span_utils;

pub use diagnostic::{Diagnostic, Label};
pub use error_code::ErrorCode;
