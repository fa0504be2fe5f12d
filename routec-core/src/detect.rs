//! Detection of compiler-authored files and reverse line mapping.

use std::fs;
use std::path::{Path, PathBuf};

use encoding_rs::Encoding;

use crate::encoding::decode;
use crate::marker::{GENERATOR_MARKER, SOURCE_MARKER_PREFIX, parse_line_marker};

/// A file recognized as output of this compiler.
///
/// Holds the decoded line sequence of the file; the original-source path and
/// the line mapping are derived from the markers interleaved with the
/// generated content. Each [`detect`](GeneratedSource::detect) call re-reads
/// the file fresh; there is no caching layer.
#[derive(Debug, Clone)]
pub struct GeneratedSource {
    lines: Vec<String>,
    source: Option<PathBuf>,
}

impl GeneratedSource {
    /// Decide whether `path` was produced by this compiler.
    ///
    /// Returns `None` when the file is missing, when its bytes are not valid
    /// under `encoding`, or when the generator-identity marker is absent.
    /// Detection is speculative by nature (any file may be checked, e.g. from
    /// a stack-trace frame), so a miss is a normal outcome and never an
    /// error.
    pub fn detect(path: &Path, encoding: &'static Encoding) -> Option<GeneratedSource> {
        let bytes = fs::read(path).ok()?;
        let text = decode(&bytes, encoding)?;
        let lines: Vec<String> = text.lines().map(str::to_owned).collect();

        if !lines.iter().any(|line| line == GENERATOR_MARKER) {
            return None;
        }

        let source = lines
            .iter()
            .find_map(|line| line.strip_prefix(SOURCE_MARKER_PREFIX))
            .map(|payload| PathBuf::from(payload.trim()));

        Some(GeneratedSource { lines, source })
    }

    /// Path of the original input file, when the `@SOURCE` marker is present.
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// Map a 1-based generated line number back to its original source line.
    ///
    /// Scans backwards from `generated` (inclusive) and returns the payload
    /// of the nearest preceding `// @LINE:` marker, or `None` when no marker
    /// precedes that line.
    pub fn map_line(&self, generated: usize) -> Option<usize> {
        let end = generated.min(self.lines.len());
        self.lines[..end].iter().rev().find_map(|l| parse_line_marker(l))
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use encoding_rs::UTF_8;
    use tempfile::TempDir;

    use super::*;
    use crate::marker::GENERATOR_MARKER;

    fn write_lines(dir: &TempDir, name: &str, lines: &[&str]) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, lines.join("\n")).unwrap();
        path
    }

    #[test]
    fn test_detect_missing_file_is_none() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("absent.rs");
        assert!(GeneratedSource::detect(&path, UTF_8).is_none());
    }

    #[test]
    fn test_detect_foreign_file_is_none() {
        let temp = TempDir::new().unwrap();
        let path = write_lines(&temp, "hand_written.rs", &["fn main() {}"]);
        assert!(GeneratedSource::detect(&path, UTF_8).is_none());
    }

    #[test]
    fn test_detect_invalid_encoding_is_none() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("binary.rs");
        fs::write(&path, [0xff, 0xfe, 0x00, 0x01]).unwrap();
        assert!(GeneratedSource::detect(&path, UTF_8).is_none());
    }

    #[test]
    fn test_detect_generated_file() {
        let temp = TempDir::new().unwrap();
        let path = write_lines(
            &temp,
            "routes.rs",
            &[
                GENERATOR_MARKER,
                "// @SOURCE:/src/foo.routes",
                "// @LINE:3",
                "code-for-line-3",
                "more-code",
            ],
        );

        let source = GeneratedSource::detect(&path, UTF_8).expect("should detect");
        assert_eq!(source.source(), Some(Path::new("/src/foo.routes")));
        assert_eq!(source.map_line(4), Some(3));
        assert_eq!(source.map_line(5), Some(3));
        assert_eq!(source.map_line(1), None);
    }

    #[test]
    fn test_map_line_is_inclusive_of_marker_line() {
        let temp = TempDir::new().unwrap();
        let path = write_lines(&temp, "r.rs", &[GENERATOR_MARKER, "// @LINE:9", "x"]);

        let source = GeneratedSource::detect(&path, UTF_8).unwrap();
        assert_eq!(source.map_line(2), Some(9));
    }

    #[test]
    fn test_map_line_nearest_preceding_marker_wins() {
        let temp = TempDir::new().unwrap();
        let path = write_lines(
            &temp,
            "r.rs",
            &[GENERATOR_MARKER, "// @LINE:1", "a", "// @LINE:5", "b", "c"],
        );

        let source = GeneratedSource::detect(&path, UTF_8).unwrap();
        assert_eq!(source.map_line(3), Some(1));
        assert_eq!(source.map_line(4), Some(5));
        assert_eq!(source.map_line(6), Some(5));
    }

    #[test]
    fn test_map_line_past_end_of_file() {
        let temp = TempDir::new().unwrap();
        let path = write_lines(&temp, "r.rs", &[GENERATOR_MARKER, "// @LINE:2", "a"]);

        let source = GeneratedSource::detect(&path, UTF_8).unwrap();
        assert_eq!(source.map_line(100), Some(2));
    }

    #[test]
    fn test_missing_source_marker() {
        let temp = TempDir::new().unwrap();
        let path = write_lines(&temp, "r.rs", &[GENERATOR_MARKER, "fn x() {}"]);

        let source = GeneratedSource::detect(&path, UTF_8).unwrap();
        assert_eq!(source.source(), None);
    }
}
