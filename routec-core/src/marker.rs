//! Reserved marker lines embedded in generated output.
//!
//! Three marker forms carry provenance inline as ordinary comments, so
//! generated files stay valid source in the target language while remaining
//! self-describing. No sidecar index exists to drift out of sync.

/// Generator-identity marker. Exactly one per generated file, verbatim.
pub const GENERATOR_MARKER: &str = "// @GENERATOR:play-routes-compiler";

/// Prefix of the marker recording the absolute path of the original input.
pub const SOURCE_MARKER_PREFIX: &str = "// @SOURCE:";

/// Prefix of the marker tying a block of generated code to an input line.
pub const LINE_MARKER_PREFIX: &str = "// @LINE:";

/// Render a line marker for the given 1-based original source line.
pub fn line_marker(line: usize) -> String {
    format!("{}{}", LINE_MARKER_PREFIX, line)
}

/// Render a source marker for the given original input path.
pub fn source_marker(path: &std::path::Path) -> String {
    format!("{}{}", SOURCE_MARKER_PREFIX, path.display())
}

/// Parse a line as a `// @LINE:<N>` marker.
///
/// `N` must be a positive decimal integer; whitespace around the line and
/// around the payload is tolerated. Returns `None` for anything else.
pub fn parse_line_marker(line: &str) -> Option<usize> {
    let payload = line.trim().strip_prefix(LINE_MARKER_PREFIX)?;
    match payload.trim().parse::<usize>() {
        Ok(n) if n > 0 => Some(n),
        _ => None,
    }
}
