//! The compile pipeline orchestrator.
//!
//! One `compile` call runs parse, generate, and materialize strictly in
//! sequence. Parse errors short-circuit before anything touches the
//! filesystem; filesystem faults propagate as-is because partial output may
//! already be on disk. The orchestrator does no locking: callers own mutual
//! exclusion over the output directory when running tasks in parallel.

use std::path::{Path, PathBuf};

use encoding_rs::Encoding;
use eyre::Result;
use routec_core::{CompilationError, CompileTask, write_file};
use routec_parser::{RoutesFileParser, Rule};

use crate::generator::RouterGenerator;

/// The parser seam of the pipeline.
///
/// Malformed input is reported as a non-empty error list, never raised.
pub trait RouteParser {
    fn parse(&self, path: &Path) -> Result<Vec<Rule>, Vec<CompilationError>>;
}

impl RouteParser for RoutesFileParser {
    fn parse(&self, path: &Path) -> Result<Vec<Rule>, Vec<CompilationError>> {
        RoutesFileParser::parse(self, path)
    }
}

/// Result of one compile: written output paths, or the parse errors that
/// stopped it. Filesystem faults are not represented here; they surface as
/// `eyre` errors from [`compile`].
#[derive(Debug)]
pub enum CompileOutcome {
    /// Every output buffer was materialized, in generator order.
    Success(Vec<PathBuf>),
    /// The parser rejected the input; nothing was generated or written.
    ParseFailed(Vec<CompilationError>),
}

impl CompileOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, CompileOutcome::Success(_))
    }

    /// Written paths on success.
    pub fn written(&self) -> Option<&[PathBuf]> {
        match self {
            CompileOutcome::Success(paths) => Some(paths),
            CompileOutcome::ParseFailed(_) => None,
        }
    }

    /// Parse errors on failure.
    pub fn errors(&self) -> Option<&[CompilationError]> {
        match self {
            CompileOutcome::Success(_) => None,
            CompileOutcome::ParseFailed(errors) => Some(errors),
        }
    }
}

/// Derive the generated-code namespace from the input file name.
///
/// `foo.routes` yields `foo`; any other name falls back to `router`. Pure
/// and total: never fails, reads nothing from disk.
pub fn namespace_for(input: &Path) -> String {
    input
        .file_name()
        .and_then(|name| name.to_str())
        .and_then(|name| name.strip_suffix(".routes"))
        .map(str::to_owned)
        .unwrap_or_else(|| "router".to_string())
}

/// Compile one task into `output_dir`.
///
/// Parse errors come back as [`CompileOutcome::ParseFailed`] with zero
/// writes performed. Filesystem faults during materialization mean unknown
/// partial completion; callers should treat the whole output set for this
/// task as suspect and recompile.
///
/// Re-running with unchanged input and a deterministic generator produces
/// byte-identical files: every output is rewritten whole, never merged.
pub fn compile<P: RouteParser, G: RouterGenerator>(
    task: &CompileTask,
    parser: &P,
    generator: &G,
    output_dir: &Path,
    encoding: &'static Encoding,
) -> Result<CompileOutcome> {
    let namespace = namespace_for(task.input());
    let task = task.resolved()?;

    let rules = match parser.parse(task.input()) {
        Ok(rules) => rules,
        Err(errors) => return Ok(CompileOutcome::ParseFailed(errors)),
    };

    let mut written = Vec::new();
    for file in generator.generate(&task, &namespace, &rules) {
        let path = std::path::absolute(output_dir.join(&file.path))?;
        write_file(&path, &file.content, encoding)?;
        written.push(path);
    }
    Ok(CompileOutcome::Success(written))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_namespace_from_routes_suffix() {
        assert_eq!(namespace_for(Path::new("foo.routes")), "foo");
        assert_eq!(namespace_for(Path::new("conf/app.routes")), "app");
    }

    #[test]
    fn test_namespace_fallback() {
        assert_eq!(namespace_for(Path::new("foo.conf")), "router");
        assert_eq!(namespace_for(Path::new("routes")), "router");
        assert_eq!(namespace_for(Path::new("/")), "router");
    }

    #[test]
    fn test_outcome_accessors() {
        let success = CompileOutcome::Success(vec![PathBuf::from("/out/app/routes.rs")]);
        assert!(success.is_success());
        assert_eq!(success.written().map(<[PathBuf]>::len), Some(1));
        assert!(success.errors().is_none());

        let failed = CompileOutcome::ParseFailed(vec![CompilationError::new("bad")]);
        assert!(!failed.is_success());
        assert!(failed.written().is_none());
        assert_eq!(failed.errors().map(<[CompilationError]>::len), Some(1));
    }
}
