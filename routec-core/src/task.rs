//! Description of one compilation request.

use std::path::{Path, PathBuf};

use serde::Serialize;

/// An immutable description of one compile invocation.
///
/// Created once by the caller and passed by reference through the pipeline.
#[derive(Debug, Clone, Serialize)]
pub struct CompileTask {
    /// The routes file to compile.
    pub input: PathBuf,
    /// Extra `use` lines emitted at the top of each generated file.
    pub additional_imports: Vec<String>,
    /// Whether to generate the forward (dispatch) router.
    pub forward_router: bool,
    /// Whether to generate the reverse (URL-building) router.
    pub reverse_router: bool,
    /// Whether to wrap the reverse router in a namespace module.
    pub namespace_reverse_router: bool,
}

impl CompileTask {
    /// Create a task with default options: both routers, no extra imports.
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            additional_imports: Vec::new(),
            forward_router: true,
            reverse_router: true,
            namespace_reverse_router: false,
        }
    }

    /// Add imports emitted verbatim into generated files.
    pub fn with_imports(mut self, imports: impl IntoIterator<Item = String>) -> Self {
        self.additional_imports.extend(imports);
        self
    }

    /// Enable or disable the forward router.
    pub fn forward(mut self, enabled: bool) -> Self {
        self.forward_router = enabled;
        self
    }

    /// Enable or disable the reverse router.
    pub fn reverse(mut self, enabled: bool) -> Self {
        self.reverse_router = enabled;
        self
    }

    /// Wrap the reverse router in a namespace module.
    pub fn namespaced_reverse(mut self, enabled: bool) -> Self {
        self.namespace_reverse_router = enabled;
        self
    }

    /// The input path as given by the caller.
    pub fn input(&self) -> &Path {
        &self.input
    }

    /// The same task with `input` resolved to an absolute path.
    ///
    /// Resolution is purely lexical against the current directory; the input
    /// need not exist. A missing file is the parser's to report.
    pub fn resolved(&self) -> std::io::Result<CompileTask> {
        let mut task = self.clone();
        task.input = std::path::absolute(&self.input)?;
        Ok(task)
    }
}
