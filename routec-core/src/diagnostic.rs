//! Structured compilation errors.
//!
//! A [`CompilationError`] is data, not a fault: the parser and generator
//! report malformed input through it and the pipeline returns the collected
//! list verbatim instead of raising.

use serde::Serialize;

/// One error in a routes file, with an optional 1-based source position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompilationError {
    /// Human-readable description of the problem.
    pub message: String,
    /// 1-based line in the input file, when known.
    pub line: Option<usize>,
    /// 1-based column in the input line, when known.
    pub column: Option<usize>,
}

impl CompilationError {
    /// Create an error with no source position.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            line: None,
            column: None,
        }
    }

    /// Create an error pinned to a line and column.
    pub fn at(message: impl Into<String>, line: usize, column: usize) -> Self {
        Self {
            message: message.into(),
            line: Some(line),
            column: Some(column),
        }
    }

    /// Create an error pinned to a line only.
    pub fn on_line(message: impl Into<String>, line: usize) -> Self {
        Self {
            message: message.into(),
            line: Some(line),
            column: None,
        }
    }
}

impl std::fmt::Display for CompilationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.line, self.column) {
            (Some(line), Some(column)) => write!(f, "{}:{}: {}", line, column, self.message),
            (Some(line), None) => write!(f, "{}: {}", line, self.message),
            _ => write!(f, "{}", self.message),
        }
    }
}
