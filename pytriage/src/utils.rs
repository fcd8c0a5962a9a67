//! Utilities shared across the pipeline: offset/line mapping, inline
//! suppression handling, and parse-error cleanup.

use ruff_text_size::TextSize;
use rustc_hash::{FxHashMap, FxHashSet};

/// A utility struct to convert byte offsets to line numbers.
///
/// The AST parser works with byte offsets, but findings are reported with
/// 1-based line numbers.
#[derive(Debug, Clone)]
pub struct LineIndex {
    /// Stores the byte index of the start of each line.
    line_starts: Vec<usize>,
}

impl LineIndex {
    /// Creates a new `LineIndex` by scanning the source code for newlines.
    /// Uses byte iteration since '\n' is always a single byte in UTF-8.
    #[must_use]
    pub fn new(source: &str) -> Self {
        let mut line_starts = vec![0];
        for (i, byte) in source.as_bytes().iter().enumerate() {
            if *byte == b'\n' {
                line_starts.push(i + 1);
            }
        }
        Self { line_starts }
    }

    /// Converts a `TextSize` (byte offset) to a 1-indexed line number.
    #[must_use]
    pub fn line_index(&self, offset: TextSize) -> usize {
        let offset = offset.to_usize();
        match self.line_starts.binary_search(&offset) {
            Ok(line) => line + 1,
            Err(line) => line,
        }
    }

    /// Converts a raw byte offset to a 1-indexed line number.
    #[must_use]
    pub fn line_of_byte(&self, offset: usize) -> usize {
        match self.line_starts.binary_search(&offset) {
            Ok(line) => line + 1,
            Err(line) => line,
        }
    }
}

/// Suppression specification for one line.
#[derive(Debug, Clone, PartialEq)]
pub enum Suppression {
    /// Suppress all findings on the line.
    All,
    /// Suppress findings for specific rule IDs.
    Specific(FxHashSet<String>),
}

/// Parses the suppression specification of a single line, if any.
///
/// Supports `# noqa` (bare, suppress all) and `# noqa: PYT-S001, PYT-T001`
/// (specific codes).
#[must_use]
pub fn get_line_suppression(line: &str) -> Option<Suppression> {
    let re = crate::constants::SUPPRESSION_RE();
    let caps = re.captures(line)?;

    if let Some(codes_match) = caps.get(1) {
        let mut specific = FxHashSet::default();
        for code in codes_match.as_str().split(',').map(str::trim) {
            if code.is_empty() {
                continue;
            }
            specific.insert(code.to_uppercase());
        }
        if specific.is_empty() {
            return Some(Suppression::All);
        }
        return Some(Suppression::Specific(specific));
    }

    // Bare `# noqa` with no codes.
    Some(Suppression::All)
}

/// Detects lines with suppression comments in a source file.
///
/// Returns a map of line numbers (1-indexed) to suppression specs.
#[must_use]
pub fn get_ignored_lines(source: &str) -> FxHashMap<usize, Suppression> {
    source
        .lines()
        .enumerate()
        .filter_map(|(i, line)| get_line_suppression(line).map(|suppression| (i + 1, suppression)))
        .collect()
}

/// Checks if a specific line and rule are suppressed.
#[must_use]
#[allow(clippy::implicit_hasher)]
pub fn is_line_suppressed(
    ignored_lines: &FxHashMap<usize, Suppression>,
    line: usize,
    rule_id: &str,
) -> bool {
    match ignored_lines.get(&line) {
        Some(Suppression::All) => true,
        Some(Suppression::Specific(rules)) => rules.contains(rule_id),
        None => false,
    }
}

/// Rewrites `byte range X..Y` spans in a ruff parse error into `line N`.
///
/// Ruff parser errors report byte offsets which are not user-friendly.
#[must_use]
pub fn convert_byte_range_to_line(error_msg: &str, source: &str) -> String {
    let re = crate::constants::BYTE_RANGE_RE();
    re.replace_all(error_msg, |caps: &regex::Captures| {
        if let Ok(start_byte) = caps[1].parse::<usize>() {
            let line = source[..start_byte.min(source.len())].matches('\n').count() + 1;
            format!("at line {line}")
        } else {
            caps[0].to_string()
        }
    })
    .to_string()
}

/// Extracts the 1-based line of the first `byte range X..Y` span in a ruff
/// parse error, or `None` when the error carries no offset.
#[must_use]
pub fn parse_error_line(error_msg: &str, source: &str) -> Option<usize> {
    let re = crate::constants::BYTE_RANGE_RE();
    let caps = re.captures(error_msg)?;
    let start_byte: usize = caps[1].parse().ok()?;
    Some(source[..start_byte.min(source.len())].matches('\n').count() + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_noqa_suppresses_all() {
        assert_eq!(get_line_suppression("x = 1  # noqa"), Some(Suppression::All));
        assert_eq!(get_line_suppression("x = 1"), None);
    }

    #[test]
    fn noqa_with_codes_is_specific() {
        let Some(Suppression::Specific(rules)) =
            get_line_suppression("eval(x)  # noqa: PYT-S001")
        else {
            panic!("expected specific suppression");
        };
        assert!(rules.contains("PYT-S001"));
    }

    #[test]
    fn line_index_maps_offsets() {
        let idx = LineIndex::new("a\nbb\nccc\n");
        assert_eq!(idx.line_of_byte(0), 1);
        assert_eq!(idx.line_of_byte(2), 2);
        assert_eq!(idx.line_of_byte(5), 3);
    }

    #[test]
    fn byte_range_rewrite() {
        let source = "x = 1\ny = (\n";
        let msg = "Expected ')' at byte range 10..11";
        assert_eq!(convert_byte_range_to_line(msg, source), "Expected ')' at line 2");
        assert_eq!(parse_error_line(msg, source), Some(2));
        assert_eq!(parse_error_line("no offsets here", source), None);
    }
}
