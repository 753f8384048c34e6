//! Contextual error reports.
//!
//! An error report is a block of error-styled lines: a title, the error
//! message, up to two promoted entries (detail and suggestion), then every
//! other context entry aligned on its first colon.
//!
//! ```text
//! ! Failed To Render Pack
//! !   Error: template not found
//! !   Details: missing file job.nomad.tpl
//! !   Context:
//! !       Pack Name: example
//! !     Output Path: ./out
//! ```

use crate::color::ColorSink;
use crate::render::{format_message, LineEnd};
use crate::style::Style;

/// Entry prefixes promoted above the `Context:` block.
///
/// An entry is promoted when it starts with the marker text. Only the first
/// match for each marker is promoted; the detail marker is checked first.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContextMarkers {
    /// Prefix of the detail entry.
    pub detail: String,
    /// Prefix of the suggestion entry.
    pub suggestion: String,
}

impl Default for ContextMarkers {
    fn default() -> Self {
        Self {
            detail: "Detail".to_string(),
            suggestion: "Suggestion".to_string(),
        }
    }
}

impl ContextMarkers {
    /// Creates markers from explicit prefixes.
    pub fn new(detail: impl Into<String>, suggestion: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
            suggestion: suggestion.into(),
        }
    }
}

/// Builds the full error report text.
pub(crate) fn format_error_with_context(
    err: &str,
    subject: &str,
    mut entries: Vec<String>,
    markers: &ContextMarkers,
    colors: &dyn ColorSink,
) -> String {
    let mut lines = vec![title_case(subject), format!("  Error: {err}")];

    for marker in [&markers.detail, &markers.suggestion] {
        if let Some(entry) = take_first_with_prefix(&mut entries, marker) {
            lines.push(promoted_line(&entry));
        }
    }

    lines.push("  Context:".to_string());
    lines.extend(aligned_entries(&entries));

    lines
        .iter()
        .map(|line| format_message(line, Style::Error, colors, LineEnd::Newline))
        .collect()
}

fn take_first_with_prefix(entries: &mut Vec<String>, prefix: &str) -> Option<String> {
    let pos = entries.iter().position(|e| e.starts_with(prefix))?;
    Some(entries.remove(pos))
}

fn promoted_line(entry: &str) -> String {
    match entry.split_once(": ") {
        Some((key, rest)) => format!("  {key}: {rest}"),
        None => format!("  {entry}"),
    }
}

/// Pads each entry so the colons line up.
///
/// The column is the largest `colon index + 1`. An entry without a colon
/// uses index -1 in the padding formula, which pushes it two columns past
/// the aligned keys.
fn aligned_entries(entries: &[String]) -> Vec<String> {
    let colon = |entry: &str| entry.find(':').map_or(-1, |i| i as isize);

    let max = entries
        .iter()
        .map(|e| colon(e) + 1)
        .max()
        .unwrap_or(0)
        .max(0);

    entries
        .iter()
        .map(|entry| {
            let padding = (max - colon(entry) + 1) as usize;
            format!("  {}{entry}", " ".repeat(padding))
        })
        .collect()
}

/// Upper-cases the first letter of every whitespace-separated word.
pub(crate) fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut at_word_start = true;
    for c in s.chars() {
        if c.is_whitespace() {
            at_word_start = true;
            out.push(c);
        } else if at_word_start {
            at_word_start = false;
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::NoColor;

    fn report(err: &str, subject: &str, entries: &[&str]) -> Vec<String> {
        let entries = entries.iter().map(|s| s.to_string()).collect();
        format_error_with_context(err, subject, entries, &ContextMarkers::default(), &NoColor)
            .lines()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("failed to render pack"), "Failed To Render Pack");
        assert_eq!(title_case("  already Mixed  case"), "  Already Mixed  Case");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn test_detail_promoted_above_context() {
        let lines = report("boom", "render", &["Detail: foo", "bar: 1"]);
        assert_eq!(
            lines,
            vec![
                "! Render",
                "!   Error: boom",
                "!   Detail: foo",
                "!   Context:",
                "!     bar: 1",
            ]
        );
    }

    #[test]
    fn test_detail_then_suggestion_order() {
        let lines = report(
            "boom",
            "x",
            &["a: 1", "Suggestion: try again", "Details: more"],
        );
        assert_eq!(lines[2], "!   Details: more");
        assert_eq!(lines[3], "!   Suggestion: try again");
        assert_eq!(lines[4], "!   Context:");
        assert_eq!(lines[5], "!     a: 1");
        assert_eq!(lines.len(), 6);
    }

    #[test]
    fn test_only_first_match_promoted() {
        let lines = report("e", "s", &["Detail: one", "Detail: two"]);
        assert_eq!(lines[2], "!   Detail: one");
        assert_eq!(lines[3], "!   Context:");
        assert_eq!(lines[4], "!     Detail: two");
    }

    #[test]
    fn test_promoted_value_keeps_inner_separators() {
        let lines = report("e", "s", &["Detail: a: b: c"]);
        assert_eq!(lines[2], "!   Detail: a: b: c");
    }

    #[test]
    fn test_promoted_without_separator() {
        let lines = report("e", "s", &["Detail-only"]);
        assert_eq!(lines[2], "!   Detail-only");
    }

    #[test]
    fn test_context_keys_right_aligned() {
        let lines = report("e", "s", &["Pack Name: example", "Output Path: ./out", "x: 1"]);
        assert_eq!(lines[3], "!       Pack Name: example");
        assert_eq!(lines[4], "!     Output Path: ./out");
        assert_eq!(lines[5], "!               x: 1");
    }

    #[test]
    fn test_entry_without_colon_uses_sentinel_padding() {
        let lines = report("e", "s", &["ab: 1", "plain"]);
        // max = 3; "ab" has colon at 2 -> 2 spaces; "plain" -> 3 - (-1) + 1 = 5.
        assert_eq!(lines[3], "!     ab: 1");
        assert_eq!(lines[4], "!        plain");
    }

    #[test]
    fn test_no_context_entries() {
        let lines = report("e", "s", &[]);
        assert_eq!(lines, vec!["! S", "!   Error: e", "!   Context:"]);
    }

    #[test]
    fn test_custom_markers() {
        let markers = ContextMarkers::new("- Details", "- Suggestion");
        let out = format_error_with_context(
            "e",
            "s",
            vec!["- Suggestion: retry".into(), "k: v".into()],
            &markers,
            &NoColor,
        );
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[2], "!   - Suggestion: retry");
        assert_eq!(lines[4], "!     k: v");
    }
}
