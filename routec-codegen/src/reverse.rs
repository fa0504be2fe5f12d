//! Reverse router generation: URL builders per handler.

use indexmap::IndexMap;
use routec_core::{CompileTask, GENERATOR_MARKER, line_marker, source_marker};
use routec_parser::{PathPart, Rule};

use crate::builder::CodeBuilder;

/// Render the reverse router for `namespace`.
pub(crate) fn render(task: &CompileTask, namespace: &str, rules: &[Rule]) -> String {
    let mut tree = ModuleTree::default();
    for rule in rules {
        tree.insert(rule);
    }

    let builder = CodeBuilder::rust()
        .line(GENERATOR_MARKER)
        .line(&source_marker(task.input()))
        .blank()
        .line(&format!("//! Reverse router for `{}`.", namespace))
        .blank()
        .when(!task.additional_imports.is_empty(), |b| {
            b.each(&task.additional_imports, |b, import| b.line(import))
                .blank()
        });

    let builder = if task.namespace_reverse_router {
        builder.block_with_close(&format!("pub mod {} {{", namespace), "}", |b| tree.render(b))
    } else {
        tree.render(builder)
    };

    builder.build()
}

/// Controller modules in first-seen order, one URL builder per handler.
#[derive(Default)]
struct ModuleTree<'a> {
    children: IndexMap<&'a str, ModuleTree<'a>>,
    functions: Vec<&'a Rule>,
}

impl<'a> ModuleTree<'a> {
    fn insert(&mut self, rule: &'a Rule) {
        let mut node = self;
        for part in &rule.call.controller {
            node = node.children.entry(part.as_str()).or_default();
        }
        node.functions.push(rule);
    }

    fn render(&self, builder: CodeBuilder) -> CodeBuilder {
        // First rule per method name wins.
        let mut seen = Vec::new();
        let builder = self.functions.iter().fold(builder, |builder, rule| {
            if seen.contains(&rule.call.method.as_str()) {
                return builder;
            }
            seen.push(rule.call.method.as_str());
            render_function(builder, rule)
        });

        self.children.iter().fold(builder, |builder, (name, child)| {
            builder.block_with_close(&format!("pub mod {} {{", name), "}", |b| child.render(b))
        })
    }
}

fn render_function(builder: CodeBuilder, rule: &Rule) -> CodeBuilder {
    let args = rule
        .param_names()
        .map(|name| format!("{}: impl std::fmt::Display", name))
        .collect::<Vec<_>>()
        .join(", ");
    let header = format!("pub fn {}({}) -> String {{", rule.call.method, args);

    let mut pattern = String::new();
    for part in &rule.path {
        pattern.push('/');
        match part {
            PathPart::Static(s) => pattern.push_str(s),
            PathPart::Param(_) | PathPart::Wildcard(_) => pattern.push_str("{}"),
        }
    }
    if pattern.is_empty() {
        pattern.push('/');
    }

    let params: Vec<&str> = rule.param_names().collect();
    let body = if params.is_empty() {
        format!("\"{}\".to_string()", pattern)
    } else {
        format!("format!(\"{}\", {})", pattern, params.join(", "))
    };

    builder
        .line(&line_marker(rule.line))
        .rust_doc(&format!("`{} {}`", rule.verb, rule.path_pattern()))
        .block_with_close(&header, "}", |b| b.line(&body))
}
