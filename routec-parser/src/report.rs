//! Pretty rendering of compilation errors with source context.

use miette::{Diagnostic, NamedSource, SourceSpan};
use routec_core::CompilationError;
use thiserror::Error;

/// A [`CompilationError`] attached to its source text for miette rendering.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
#[diagnostic(code(routec::syntax_error))]
pub struct SyntaxError {
    #[source_code]
    src: NamedSource<String>,
    #[label("{message}")]
    span: Option<SourceSpan>,
    message: String,
}

impl SyntaxError {
    /// Attach `error` to the content of the file it was reported against.
    pub fn new(error: &CompilationError, src: impl Into<String>, filename: &str) -> Self {
        let src = src.into();
        let span = span_of(&src, error);
        Self {
            src: NamedSource::new(filename, src),
            span,
            message: error.message.clone(),
        }
    }
}

/// Byte span of the error position, when the error carries one.
fn span_of(src: &str, error: &CompilationError) -> Option<SourceSpan> {
    let line = error.line?;
    let (offset, text) = src
        .lines()
        .scan(0, |acc, l| {
            let start = *acc;
            *acc += l.len() + 1;
            Some((start, l))
        })
        .nth(line.checked_sub(1)?)?;

    let column = match error.column {
        Some(column) => text
            .char_indices()
            .map(|(i, _)| i)
            .nth(column.checked_sub(1)?)
            .unwrap_or(text.len()),
        None => 0,
    };
    Some(SourceSpan::from(offset + column))
}
