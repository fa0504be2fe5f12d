//! Forward router generation: verb + path dispatch.

use routec_core::{CompileTask, GENERATOR_MARKER, line_marker, source_marker};
use routec_parser::{PathPart, Rule};

use crate::builder::CodeBuilder;

/// Render the forward router for `namespace`.
pub(crate) fn render(task: &CompileTask, namespace: &str, rules: &[Rule]) -> String {
    let builder = CodeBuilder::rust()
        .line(GENERATOR_MARKER)
        .line(&source_marker(task.input()))
        .blank()
        .line(&format!("//! Forward router for `{}`.", namespace))
        .blank()
        .when(!task.additional_imports.is_empty(), |b| {
            b.each(&task.additional_imports, |b, import| b.line(import))
                .blank()
        })
        .rust_doc("One matched route: the handler identifier and its bound")
        .rust_doc("path parameters, in path order.")
        .block_with_close("pub struct RouteMatch {", "}", |b| {
            b.line("pub handler: &'static str,")
                .line("pub params: Vec<(&'static str, String)>,")
        })
        .blank()
        .rust_doc(&format!(
            "Dispatch `method` and `path` against the `{}` routes.",
            namespace
        ))
        .block_with_close(
            "pub fn route(method: &str, path: &str) -> Option<RouteMatch> {",
            "}",
            |b| {
                b.line("let segments: Vec<&str> = path")
                    .indent()
                    .line(".split('/')")
                    .line(".filter(|segment| !segment.is_empty())")
                    .line(".collect();")
                    .dedent()
                    .block_with_close("match (method, segments.as_slice()) {", "}", |b| {
                        b.each(rules, render_arm).line("_ => None,")
                    })
            },
        );

    builder.build()
}

fn render_arm(builder: CodeBuilder, rule: &Rule) -> CodeBuilder {
    let pattern = rule
        .path
        .iter()
        .map(|part| match part {
            PathPart::Static(s) => format!("\"{}\"", s),
            PathPart::Param(name) => name.clone(),
            PathPart::Wildcard(name) => format!("{} @ ..", name),
        })
        .collect::<Vec<_>>()
        .join(", ");

    let params: Vec<String> = rule
        .path
        .iter()
        .filter_map(|part| match part {
            PathPart::Static(_) => None,
            PathPart::Param(name) => Some(format!("(\"{}\", {}.to_string())", name, name)),
            PathPart::Wildcard(name) => Some(format!("(\"{}\", {}.join(\"/\"))", name, name)),
        })
        .collect();

    let header = format!(
        "(\"{}\", [{}]) => Some(RouteMatch {{",
        rule.verb, pattern
    );
    builder
        .line(&line_marker(rule.line))
        .block_with_close(&header, "}),", |b| {
            let b = b.line(&format!("handler: \"{}\",", rule.call));
            if params.is_empty() {
                b.line("params: Vec::new(),")
            } else {
                b.line(&format!("params: vec![{}],", params.join(", ")))
            }
        })
}
