//! The generator seam of the compile pipeline.

use routec_core::CompileTask;
use routec_parser::Rule;

use crate::{forward, reverse};

/// One generated output buffer: a path relative to the output directory and
/// the full file content.
#[derive(Debug, Clone)]
pub struct GeneratedContent {
    pub path: String,
    pub content: String,
}

/// Trait for router code generators.
///
/// The pipeline treats the returned content as opaque text; a generator that
/// wants its output to support reverse line mapping embeds the marker lines
/// from `routec_core` itself.
pub trait RouterGenerator {
    /// Generate all output buffers for one compile, in order.
    ///
    /// `task.input` has already been resolved to an absolute path, suitable
    /// for the `@SOURCE` marker. Must be a pure function of its arguments.
    fn generate(&self, task: &CompileTask, namespace: &str, rules: &[Rule])
    -> Vec<GeneratedContent>;
}

/// The built-in generator emitting Rust router source.
///
/// Produces `<namespace>/routes.rs` (forward dispatch) and
/// `<namespace>/routes_reverse.rs` (URL builders) according to the task
/// flags, each carrying generator, source, and line markers.
#[derive(Debug, Clone, Copy, Default)]
pub struct RustRouterGenerator;

impl RustRouterGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl RouterGenerator for RustRouterGenerator {
    fn generate(
        &self,
        task: &CompileTask,
        namespace: &str,
        rules: &[Rule],
    ) -> Vec<GeneratedContent> {
        let mut files = Vec::new();
        if task.forward_router {
            files.push(GeneratedContent {
                path: format!("{}/routes.rs", namespace),
                content: forward::render(task, namespace, rules),
            });
        }
        if task.reverse_router {
            files.push(GeneratedContent {
                path: format!("{}/routes_reverse.rs", namespace),
                content: reverse::render(task, namespace, rules),
            });
        }
        files
    }
}
