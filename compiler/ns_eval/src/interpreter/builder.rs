//! `InterpreterBuilder` for creating Interpreter instances.

use ns_ir::SharedInterner;

use super::Interpreter;
use crate::{stdout_handler, SharedPrintHandler};

/// Builder for creating Interpreter instances.
///
/// The only knob is where `print` output goes; the default is stdout.
pub struct InterpreterBuilder {
    interner: SharedInterner,
    print_handler: Option<SharedPrintHandler>,
}

impl InterpreterBuilder {
    pub fn new(interner: SharedInterner) -> Self {
        Self {
            interner,
            print_handler: None,
        }
    }

    /// Set the print handler for output.
    #[must_use]
    pub fn print_handler(mut self, handler: SharedPrintHandler) -> Self {
        self.print_handler = Some(handler);
        self
    }

    /// Build the interpreter.
    pub fn build(self) -> Interpreter {
        let underscore = self.interner.intern("_");
        Interpreter {
            print: self.print_handler.unwrap_or_else(stdout_handler),
            interner: self.interner,
            underscore,
        }
    }
}
