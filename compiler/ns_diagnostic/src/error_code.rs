//! Error codes for all interpreter diagnostics.
//!
//! Each error code is a unique identifier (e.g., `E1001`) with the first digit
//! indicating the phase that produced it.

use std::fmt;

/// Error codes for all interpreter diagnostics.
///
/// Format: E#### where first digit indicates phase:
/// - E0xxx: Lexer errors
/// - E1xxx: Parser errors
/// - E6xxx: Runtime / eval errors
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Lexer Errors (E0xxx)
    /// Character that starts no token
    E0001,

    // Parser Errors (E1xxx)
    /// Unexpected token
    E1001,
    /// Expected expression
    E1002,
    /// Unexpected end of input
    E1003,
    /// Argument, parameter or case list too long
    E1004,

    // Runtime Errors (E6xxx)
    /// Operation applied to a value of the wrong tag
    E6010,
    /// Undefined variable
    E6020,
    /// Argument count mismatch
    E6030,
    /// Called a value that is not a function
    E6032,
    /// No case matched and no default
    E6040,
}

impl ErrorCode {
    /// All error codes, in numeric order.
    pub const ALL: &'static [ErrorCode] = &[
        ErrorCode::E0001,
        ErrorCode::E1001,
        ErrorCode::E1002,
        ErrorCode::E1003,
        ErrorCode::E1004,
        ErrorCode::E6010,
        ErrorCode::E6020,
        ErrorCode::E6030,
        ErrorCode::E6032,
        ErrorCode::E6040,
    ];

    /// Get the string representation of this error code.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "E0001",
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E1003 => "E1003",
            ErrorCode::E1004 => "E1004",
            ErrorCode::E6010 => "E6010",
            ErrorCode::E6020 => "E6020",
            ErrorCode::E6030 => "E6030",
            ErrorCode::E6032 => "E6032",
            ErrorCode::E6040 => "E6040",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ErrorCode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.to_ascii_uppercase();
        ErrorCode::ALL
            .iter()
            .copied()
            .find(|code| code.as_str() == upper)
            .ok_or(())
    }
}
