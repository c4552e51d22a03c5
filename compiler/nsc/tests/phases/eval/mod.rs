//! Evaluation phase tests.
//!
//! - `programs` - complete programs and their printed output
//! - `errors` - runtime errors, their categories and rendering
//! - `memory` - reference counts and environment reclamation

mod errors;
mod memory;
mod programs;
