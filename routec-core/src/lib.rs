//! Core primitives for the routec routes compiler.
//!
//! This crate defines the pieces the rest of the workspace is built on: the
//! marker protocol embedded in generated files, the detector that reads it
//! back, and the task/error/file types shared by the compile pipeline.

mod detect;
mod diagnostic;
mod encoding;
mod file;
mod marker;
mod task;

// Provenance
pub use detect::GeneratedSource;
pub use marker::{GENERATOR_MARKER, LINE_MARKER_PREFIX, SOURCE_MARKER_PREFIX};
pub use marker::{line_marker, parse_line_marker, source_marker};
// Compile primitives
pub use diagnostic::CompilationError;
pub use encoding::{decode, encode};
pub use file::write_file;
pub use task::CompileTask;
