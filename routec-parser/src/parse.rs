//! Line-oriented parser for routes files.

use std::fs;
use std::path::Path;

use encoding_rs::Encoding;
use routec_core::{CompilationError, decode};

use crate::rule::{HandlerCall, HttpVerb, PathPart, Rule};

/// Parser over a routes file on disk, reading it under a fixed encoding.
#[derive(Debug, Clone, Copy)]
pub struct RoutesFileParser {
    encoding: &'static Encoding,
}

impl RoutesFileParser {
    pub fn new(encoding: &'static Encoding) -> Self {
        Self { encoding }
    }

    /// Parse the routes file at `path`.
    pub fn parse(&self, path: &Path) -> Result<Vec<Rule>, Vec<CompilationError>> {
        parse(path, self.encoding)
    }
}

/// Parse the routes file at `path`, decoding it under `encoding`.
///
/// An unreadable or undecodable input yields a single [`CompilationError`]
/// rather than a fault; the caller sees every failure mode as the same
/// structured error list.
pub fn parse(path: &Path, encoding: &'static Encoding) -> Result<Vec<Rule>, Vec<CompilationError>> {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(err) => {
            return Err(vec![CompilationError::new(format!(
                "cannot read '{}': {}",
                path.display(),
                err
            ))]);
        }
    };
    let Some(content) = decode(&bytes, encoding) else {
        return Err(vec![CompilationError::new(format!(
            "'{}' is not valid {}",
            path.display(),
            encoding.name()
        ))]);
    };
    parse_str(&content)
}

/// Parse routes-file content.
///
/// Scans every line and collects every error found, so a single run reports
/// all malformed rules at once.
pub fn parse_str(content: &str) -> Result<Vec<Rule>, Vec<CompilationError>> {
    let mut rules = Vec::new();
    let mut errors = Vec::new();

    for (index, line) in content.lines().enumerate() {
        let number = index + 1;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        match parse_rule(line, number) {
            Ok(rule) => rules.push(rule),
            Err(err) => errors.push(err),
        }
    }

    if errors.is_empty() { Ok(rules) } else { Err(errors) }
}

/// Split a line into whitespace-separated fields with 1-based character
/// columns, matching how error spans are later resolved against the source.
fn fields(line: &str) -> Vec<(usize, &str)> {
    let mut out = Vec::new();
    let mut start = None;
    for (column, (byte, ch)) in line.char_indices().enumerate() {
        match (ch.is_whitespace(), start) {
            (false, None) => start = Some((byte, column + 1)),
            (true, Some((begin, col))) => {
                out.push((col, &line[begin..byte]));
                start = None;
            }
            _ => {}
        }
    }
    if let Some((begin, col)) = start {
        out.push((col, &line[begin..]));
    }
    out
}

fn parse_rule(line: &str, number: usize) -> Result<Rule, CompilationError> {
    let fields = fields(line);
    let [(verb_col, verb), (path_col, path), (call_col, call)] = fields.as_slice() else {
        if let Some(&(col, extra)) = fields.get(3) {
            return Err(CompilationError::at(
                format!("unexpected trailing content '{}'", extra),
                number,
                col,
            ));
        }
        return Err(CompilationError::on_line(
            "expected '<VERB> <path> <controller.method>'",
            number,
        ));
    };

    let verb = verb.parse::<HttpVerb>().map_err(|_| {
        CompilationError::at(format!("unknown HTTP verb '{}'", verb), number, *verb_col)
    })?;
    let path = parse_path(path, number, *path_col)?;
    let call = parse_call(call, number, *call_col)?;

    Ok(Rule {
        verb,
        path,
        call,
        line: number,
    })
}

fn parse_path(path: &str, number: usize, column: usize) -> Result<Vec<PathPart>, CompilationError> {
    let Some(rest) = path.strip_prefix('/') else {
        return Err(CompilationError::at(
            format!("path '{}' must start with '/'", path),
            number,
            column,
        ));
    };
    if rest.is_empty() {
        return Ok(Vec::new());
    }

    let segments: Vec<&str> = rest.split('/').collect();
    let last = segments.len() - 1;
    let mut parts = Vec::with_capacity(segments.len());
    for (index, segment) in segments.into_iter().enumerate() {
        let part = match segment.split_at_checked(1) {
            Some((":", name)) => PathPart::Param(name.to_string()),
            Some(("*", name)) => {
                if index != last {
                    return Err(CompilationError::at(
                        format!("wildcard '*{}' must be the final segment", name),
                        number,
                        column,
                    ));
                }
                PathPart::Wildcard(name.to_string())
            }
            _ => PathPart::Static(segment.to_string()),
        };
        if let Some(name) = part.param_name() {
            if !is_identifier(name) {
                return Err(CompilationError::at(
                    format!("invalid parameter name '{}'", name),
                    number,
                    column,
                ));
            }
            if is_rust_keyword(name) {
                return Err(CompilationError::at(
                    format!("parameter name '{}' is a Rust reserved keyword", name),
                    number,
                    column,
                ));
            }
        }
        if let PathPart::Static(s) = &part {
            if s.is_empty() {
                return Err(CompilationError::at(
                    format!("path '{}' has an empty segment", path),
                    number,
                    column,
                ));
            }
            if let Some(bad) = s.chars().find(|c| matches!(c, '"' | '\\' | '{' | '}')) {
                return Err(CompilationError::at(
                    format!("path segment '{}' contains unsupported character '{}'", s, bad),
                    number,
                    column,
                ));
            }
        }
        parts.push(part);
    }
    Ok(parts)
}

fn parse_call(call: &str, number: usize, column: usize) -> Result<HandlerCall, CompilationError> {
    let parts: Vec<&str> = call.split('.').collect();
    if let Some(keyword) = parts.iter().find(|part| is_rust_keyword(part)) {
        return Err(CompilationError::at(
            format!("'{}' in handler call is a Rust reserved keyword", keyword),
            number,
            column,
        ));
    }
    match parts.split_last() {
        Some((method, controller))
            if !controller.is_empty() && parts.iter().all(|part| is_identifier(part)) =>
        {
            Ok(HandlerCall {
                controller: controller.iter().map(|s| s.to_string()).collect(),
                method: method.to_string(),
            })
        }
        _ => Err(CompilationError::at(
            format!("handler call '{}' must be '<controller>.<method>'", call),
            number,
            column,
        )),
    }
}

fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Rust reserved keywords that cannot be used as identifiers
/// Source: https://doc.rust-lang.org/reference/keywords.html
const RUST_KEYWORDS: &[&str] = &[
    // Strict keywords (2021 edition)
    "as", "async", "await", "break", "const", "continue", "crate", "dyn", "else", "enum", "extern",
    "false", "fn", "for", "if", "impl", "in", "let", "loop", "match", "mod", "move", "mut", "pub",
    "ref", "return", "self", "Self", "static", "struct", "super", "trait", "true", "type",
    "unsafe", "use", "where", "while",
    // Reserved keywords (may be used in future)
    "abstract", "become", "box", "do", "final", "macro", "override", "priv", "try", "typeof",
    "unsized", "virtual", "yield",
    // Weak keywords (context-sensitive, but best to avoid)
    "union", "dyn",
];

/// Check if a name is a Rust reserved keyword
fn is_rust_keyword(name: &str) -> bool {
    RUST_KEYWORDS.contains(&name)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use encoding_rs::UTF_8;
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_parse_basic_rules() {
        let rules = parse_str(
            "GET /users/:id controllers.users.show\n\
             POST /users controllers.users.create\n",
        )
        .unwrap();

        assert_eq!(rules.len(), 2);
        assert_eq!(rules[0].verb, HttpVerb::Get);
        assert_eq!(rules[0].path_pattern(), "/users/:id");
        assert_eq!(rules[0].call.to_string(), "controllers.users.show");
        assert_eq!(rules[0].line, 1);
        assert_eq!(rules[1].line, 2);
    }

    #[test]
    fn test_comments_and_blanks_skipped() {
        let rules = parse_str(
            "# user routes\n\
             \n\
             GET / controllers.home.index\n",
        )
        .unwrap();

        assert_eq!(rules.len(), 1);
        assert_eq!(rules[0].line, 3);
        assert!(rules[0].path.is_empty());
    }

    #[test]
    fn test_wildcard_path() {
        let rules = parse_str("GET /assets/*file controllers.assets.at\n").unwrap();
        assert_eq!(
            rules[0].path,
            vec![
                PathPart::Static("assets".to_string()),
                PathPart::Wildcard("file".to_string()),
            ]
        );
    }

    #[test]
    fn test_unknown_verb_position() {
        let errors = parse_str("GETT /users controllers.users.index\n").unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].message, "unknown HTTP verb 'GETT'");
        assert_eq!(errors[0].line, Some(1));
        assert_eq!(errors[0].column, Some(1));
    }

    #[test]
    fn test_bad_path_position() {
        let errors = parse_str("GET users controllers.users.index\n").unwrap_err();
        assert_eq!(errors[0].message, "path 'users' must start with '/'");
        assert_eq!(errors[0].column, Some(5));
    }

    #[test]
    fn test_bad_call() {
        let errors = parse_str("GET /users index\n").unwrap_err();
        assert!(errors[0].message.contains("handler call 'index'"));
        assert_eq!(errors[0].column, Some(12));
    }

    #[test]
    fn test_missing_fields() {
        let errors = parse_str("GET /users\n").unwrap_err();
        assert_eq!(errors[0].line, Some(1));
        assert_eq!(errors[0].column, None);
    }

    #[test]
    fn test_trailing_content() {
        let errors = parse_str("GET /users controllers.users.index extra\n").unwrap_err();
        assert_eq!(errors[0].message, "unexpected trailing content 'extra'");
        assert_eq!(errors[0].column, Some(36));
    }

    #[test]
    fn test_wildcard_not_final() {
        let errors = parse_str("GET /*rest/tail controllers.assets.at\n").unwrap_err();
        assert!(errors[0].message.contains("must be the final segment"));
    }

    #[test]
    fn test_empty_segment() {
        let errors = parse_str("GET /users//edit controllers.users.edit\n").unwrap_err();
        assert!(errors[0].message.contains("empty segment"));
    }

    #[test]
    fn test_columns_are_character_based() {
        // 'é' is two bytes; the call column must count characters.
        let errors = parse_str("GET /héllo index\n").unwrap_err();
        assert!(errors[0].message.contains("handler call 'index'"));
        assert_eq!(errors[0].column, Some(12));
    }

    #[test]
    fn test_keyword_parameter_rejected() {
        let errors = parse_str("GET /users/:type controllers.users.show\n").unwrap_err();
        assert_eq!(
            errors[0].message,
            "parameter name 'type' is a Rust reserved keyword"
        );
        assert_eq!(errors[0].column, Some(5));
    }

    #[test]
    fn test_keyword_in_call_rejected() {
        let errors = parse_str("GET /users controllers.match.show\n").unwrap_err();
        assert_eq!(
            errors[0].message,
            "'match' in handler call is a Rust reserved keyword"
        );
    }

    #[test]
    fn test_static_segment_with_render_breaking_chars_rejected() {
        for (path, bad) in [
            ("/a\"b", '"'),
            ("/a\\b", '\\'),
            ("/a{b", '{'),
            ("/a}b", '}'),
        ] {
            let errors =
                parse_str(&format!("GET {} controllers.a.index\n", path)).unwrap_err();
            assert!(
                errors[0]
                    .message
                    .contains(&format!("unsupported character '{}'", bad)),
                "{} should be rejected",
                path
            );
        }
    }

    #[test]
    fn test_non_ascii_static_segment_accepted() {
        let rules = parse_str("GET /héllo controllers.pages.show\n").unwrap();
        assert_eq!(rules[0].path_pattern(), "/héllo");
    }

    #[test]
    fn test_all_errors_collected() {
        let errors = parse_str(
            "GETT /a controllers.a.index\n\
             GET b controllers.b.index\n\
             GET /c controllers.c.index\n\
             GET /d d\n",
        )
        .unwrap_err();

        assert_eq!(errors.len(), 3);
        assert_eq!(errors[0].line, Some(1));
        assert_eq!(errors[1].line, Some(2));
        assert_eq!(errors[2].line, Some(4));
    }

    #[test]
    fn test_parse_missing_file_is_error_not_fault() {
        let temp = TempDir::new().unwrap();
        let errors = parse(&temp.path().join("absent.routes"), UTF_8).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].message.contains("cannot read"));
    }

    #[test]
    fn test_parse_undecodable_file_is_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("app.routes");
        fs::write(&path, [0xff, 0x00, 0xfe]).unwrap();

        let errors = parse(&path, UTF_8).unwrap_err();
        assert!(errors[0].message.contains("not valid UTF-8"));
    }

    #[test]
    fn test_parser_struct_reads_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("app.routes");
        fs::write(&path, "GET / controllers.home.index\n").unwrap();

        let rules = RoutesFileParser::new(UTF_8).parse(&path).unwrap();
        assert_eq!(rules.len(), 1);
    }
}
