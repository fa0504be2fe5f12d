//! Code builder utility for generating properly indented code.

/// Indentation unit for generated code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Indent(&'static str);

impl Indent {
    /// Four spaces, the Rust default.
    pub const RUST: Indent = Indent("    ");

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

/// Fluent API for building code with proper indentation.
///
/// # Example
///
/// ```
/// use routec_codegen::CodeBuilder;
///
/// let code = CodeBuilder::rust()
///     .line("fn main() {")
///     .indent()
///     .line("println!(\"Hello, world!\");")
///     .dedent()
///     .line("}")
///     .build();
///
/// assert_eq!(code, "fn main() {\n    println!(\"Hello, world!\");\n}\n");
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    indent_level: usize,
    indent: Indent,
    buffer: String,
}

impl CodeBuilder {
    /// Create a new CodeBuilder with the specified indentation.
    pub fn new(indent: Indent) -> Self {
        Self {
            indent_level: 0,
            indent,
            buffer: String::new(),
        }
    }

    /// Create a new CodeBuilder with 4-space indentation (Rust default).
    pub fn rust() -> Self {
        Self::new(Indent::RUST)
    }

    /// Add a line of code with current indentation.
    pub fn line(mut self, s: &str) -> Self {
        self.write_indent();
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Add a blank line (no indentation).
    pub fn blank(mut self) -> Self {
        self.buffer.push('\n');
        self
    }

    /// Increase indentation level.
    pub fn indent(mut self) -> Self {
        self.indent_level += 1;
        self
    }

    /// Decrease indentation level.
    pub fn dedent(mut self) -> Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    /// Add a block with a closing line.
    ///
    /// # Example
    ///
    /// ```
    /// use routec_codegen::CodeBuilder;
    ///
    /// let code = CodeBuilder::rust()
    ///     .block_with_close("fn main() {", "}", |b| {
    ///         b.line("println!(\"Hello\");")
    ///     })
    ///     .build();
    /// ```
    pub fn block_with_close<F>(self, header: &str, close: &str, f: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        let builder = self.line(header).indent();
        f(builder).dedent().line(close)
    }

    /// Add a Rust doc comment (`/// text`).
    pub fn rust_doc(mut self, text: &str) -> Self {
        self.write_indent();
        self.buffer.push_str("/// ");
        self.buffer.push_str(text);
        self.buffer.push('\n');
        self
    }

    /// Conditionally add content.
    pub fn when<F>(self, condition: bool, f: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        if condition { f(self) } else { self }
    }

    /// Iterate and add content for each item.
    pub fn each<T, I, F>(mut self, items: I, f: F) -> Self
    where
        I: IntoIterator<Item = T>,
        F: Fn(Self, T) -> Self,
    {
        for item in items {
            self = f(self, item);
        }
        self
    }

    /// Consume the builder and return the generated code.
    pub fn build(self) -> String {
        self.buffer
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.buffer.push_str(self.indent.as_str());
        }
    }
}

impl Default for CodeBuilder {
    fn default() -> Self {
        Self::rust()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_line() {
        let code = CodeBuilder::rust().line("let x = 1;").build();
        assert_eq!(code, "let x = 1;\n");
    }

    #[test]
    fn test_indentation() {
        let code = CodeBuilder::rust()
            .line("fn main() {")
            .indent()
            .line("println!(\"Hello\");")
            .dedent()
            .line("}")
            .build();

        assert_eq!(code, "fn main() {\n    println!(\"Hello\");\n}\n");
    }

    #[test]
    fn test_block() {
        let code = CodeBuilder::rust()
            .block_with_close("impl Foo {", "}", |b| b.line("fn bar(&self) {}"))
            .build();

        assert_eq!(code, "impl Foo {\n    fn bar(&self) {}\n}\n");
    }

    #[test]
    fn test_blank_line() {
        let code = CodeBuilder::rust()
            .line("use std::io;")
            .blank()
            .line("fn main() {}")
            .build();

        assert_eq!(code, "use std::io;\n\nfn main() {}\n");
    }

    #[test]
    fn test_doc_comment() {
        let code = CodeBuilder::rust()
            .rust_doc("A test function")
            .line("fn test() {}")
            .build();

        assert_eq!(code, "/// A test function\nfn test() {}\n");
    }

    #[test]
    fn test_conditional() {
        let with_attr = CodeBuilder::rust()
            .when(true, |b| b.line("#[derive(Debug)]"))
            .line("struct Foo;")
            .build();

        let without_attr = CodeBuilder::rust()
            .when(false, |b| b.line("#[derive(Debug)]"))
            .line("struct Foo;")
            .build();

        assert_eq!(with_attr, "#[derive(Debug)]\nstruct Foo;\n");
        assert_eq!(without_attr, "struct Foo;\n");
    }

    #[test]
    fn test_each() {
        let code = CodeBuilder::rust()
            .line("enum Verb {")
            .indent()
            .each(["Get", "Post"], |b, verb| b.line(&format!("{},", verb)))
            .dedent()
            .line("}")
            .build();

        assert_eq!(code, "enum Verb {\n    Get,\n    Post,\n}\n");
    }
}
