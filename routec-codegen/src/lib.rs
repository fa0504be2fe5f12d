//! Router code generation and the compile pipeline for routec.
//!
//! # Module Organization
//!
//! - [`builder`] - Indentation-aware code building
//! - [`generator`] - The `RouterGenerator` seam and the Rust generator
//! - [`pipeline`] - The compile orchestrator tying parse, generate, and
//!   file materialization together

pub mod builder;
pub mod generator;
pub mod pipeline;

mod forward;
mod reverse;

pub use builder::CodeBuilder;
pub use generator::{GeneratedContent, RouterGenerator, RustRouterGenerator};
pub use pipeline::{CompileOutcome, RouteParser, compile, namespace_for};
