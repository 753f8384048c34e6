//! ANSI escape sequence stripping for plain-text output.
//!
//! Non-interactive output (test logs, pipes, CI) must not carry terminal
//! control codes. This crate provides [`AnsiFilter`], a [`Write`] adapter that
//! removes escape sequences from every chunk before handing the remaining bytes
//! to the wrapped writer, plus [`strip_ansi`] and [`strip_ansi_str`] for
//! one-shot use.
//!
//! # Example
//!
//! ```rust
//! use plainterm_ansi::AnsiFilter;
//! use std::io::Write;
//!
//! let mut filter = AnsiFilter::new(Vec::new());
//! filter.write_all(b"\x1b[31mred\x1b[0m text").unwrap();
//! assert_eq!(filter.into_inner(), b"red text");
//! ```
//!
//! # Matched Sequences
//!
//! Sequences start with `ESC` (0x1B) or the single-character CSI (U+009B),
//! followed by optional intermediate characters, then either an OSC-style
//! payload terminated by `BEL` or a CSI-style numeric parameter list with a
//! final byte. SGR colors (`ESC[1;31m`), cursor movement (`ESC[2K`) and window
//! titles (`ESC]0;title BEL`) are all covered.
//!
//! # Chunk Boundaries
//!
//! Matching is applied independently to each `write` call. A sequence split
//! across two writes is not guaranteed to be stripped; callers that need that
//! must hand complete lines to the filter.

use once_cell::sync::Lazy;
use std::borrow::Cow;
use std::io::{self, Write};

const ANSI_PATTERN: &str = r"[\x1B\x{9B}][\[\]()#;?]*(?:(?:(?:[a-zA-Z\d]*(?:;[a-zA-Z\d]*)*)?\x07)|(?:(?:\d{1,4}(?:;\d{0,4})*)?[\dA-PRZcf-ntqry=><~]))";

static ANSI_BYTES: Lazy<regex::bytes::Regex> =
    Lazy::new(|| regex::bytes::Regex::new(ANSI_PATTERN).expect("ANSI pattern is valid"));

static ANSI_STR: Lazy<regex::Regex> =
    Lazy::new(|| regex::Regex::new(ANSI_PATTERN).expect("ANSI pattern is valid"));

/// Removes every ANSI escape sequence from `input`.
///
/// Borrows when nothing matched.
///
/// ```rust
/// use plainterm_ansi::strip_ansi;
///
/// assert_eq!(&*strip_ansi(b"\x1b[1mbold\x1b[0m"), b"bold");
/// assert_eq!(&*strip_ansi(b"plain"), b"plain");
/// ```
pub fn strip_ansi(input: &[u8]) -> Cow<'_, [u8]> {
    ANSI_BYTES.replace_all(input, &b""[..])
}

/// String flavor of [`strip_ansi`].
///
/// ```rust
/// use plainterm_ansi::strip_ansi_str;
///
/// assert_eq!(strip_ansi_str("\x1b[32mok\x1b[0m"), "ok");
/// ```
pub fn strip_ansi_str(input: &str) -> Cow<'_, str> {
    ANSI_STR.replace_all(input, "")
}

/// A writer that strips ANSI escape sequences before forwarding.
///
/// Every call to [`write`](Write::write) filters the given chunk and writes
/// the remainder to the inner writer in full. The reported length is the
/// length of the unfiltered input, so callers see their whole buffer as
/// consumed.
#[derive(Debug)]
pub struct AnsiFilter<W: Write> {
    next: W,
}

impl<W: Write> AnsiFilter<W> {
    /// Wraps `next`.
    pub fn new(next: W) -> Self {
        Self { next }
    }

    /// Returns a reference to the wrapped writer.
    pub fn get_ref(&self) -> &W {
        &self.next
    }

    /// Returns a mutable reference to the wrapped writer.
    pub fn get_mut(&mut self) -> &mut W {
        &mut self.next
    }

    /// Unwraps the filter, returning the inner writer.
    pub fn into_inner(self) -> W {
        self.next
    }
}

impl<W: Write> Write for AnsiFilter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let filtered = strip_ansi(buf);
        self.next.write_all(&filtered)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.next.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filter_chunks(chunks: &[&[u8]]) -> Vec<u8> {
        let mut filter = AnsiFilter::new(Vec::new());
        for chunk in chunks {
            filter.write_all(chunk).unwrap();
        }
        filter.into_inner()
    }

    #[test]
    fn test_strips_sgr_color() {
        assert_eq!(filter_chunks(&[b"before\x1b[31mafter"]), b"beforeafter");
    }

    #[test]
    fn test_strips_compound_sgr() {
        assert_eq!(
            filter_chunks(&[b"\x1b[1;32mok\x1b[0m done"]),
            b"ok done".to_vec()
        );
    }

    #[test]
    fn test_strips_reset_without_params() {
        assert_eq!(filter_chunks(&[b"a\x1b[mb"]), b"ab");
    }

    #[test]
    fn test_strips_cursor_and_erase() {
        assert_eq!(filter_chunks(&[b"\x1b[2K\x1b[1Aline"]), b"line");
    }

    #[test]
    fn test_strips_osc_title() {
        assert_eq!(filter_chunks(&[b"\x1b]0;title\x07text"]), b"text");
    }

    #[test]
    fn test_strips_single_char_csi() {
        let input = "x\u{9b}31my".as_bytes();
        assert_eq!(filter_chunks(&[input]), b"xy");
    }

    #[test]
    fn test_plain_text_untouched() {
        let input = b"no escapes here: [brackets] (parens) #hash;";
        assert_eq!(filter_chunks(&[input]), input.to_vec());
    }

    #[test]
    fn test_utf8_preserved() {
        let input = "» \x1b[36mcafé\x1b[0m ✓";
        assert_eq!(filter_chunks(&[input.as_bytes()]), "» café ✓".as_bytes());
    }

    #[test]
    fn test_reports_full_length() {
        let mut filter = AnsiFilter::new(Vec::new());
        let input = b"\x1b[31mred";
        assert_eq!(filter.write(input).unwrap(), input.len());
        assert_eq!(filter.get_ref(), b"red");
    }

    #[test]
    fn test_split_sequence_not_joined() {
        // Each chunk is matched on its own; the tail of a split sequence
        // survives.
        let out = filter_chunks(&[b"a\x1b", b"[31mb"]);
        assert!(out.starts_with(b"a"));
        assert!(out.ends_with(b"b"));
        assert_ne!(out, b"ab".to_vec());
    }

    #[test]
    fn test_strip_ansi_borrows_when_clean() {
        assert!(matches!(strip_ansi(b"clean"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_strip_ansi_str() {
        assert_eq!(strip_ansi_str("\x1b[1m\x1b[33mwarn\x1b[0m"), "warn");
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn plain_text() -> impl Strategy<Value = String> {
        "[a-zA-Z0-9 .,!?:;'\"\\[\\]()#-]{0,60}"
    }

    fn sgr() -> impl Strategy<Value = String> {
        prop::collection::vec(0u8..108, 0..4).prop_map(|codes| {
            let params: Vec<String> = codes.iter().map(|c| c.to_string()).collect();
            format!("\x1b[{}m", params.join(";"))
        })
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(300))]

        #[test]
        fn plain_text_passes_through(text in plain_text()) {
            prop_assert_eq!(strip_ansi_str(&text), text.as_str());
        }

        #[test]
        fn sgr_between_text_is_removed(
            left in plain_text(),
            code in sgr(),
            right in plain_text(),
        ) {
            let input = format!("{left}{code}{right}");
            let mut filter = AnsiFilter::new(Vec::new());
            filter.write_all(input.as_bytes()).unwrap();
            prop_assert_eq!(filter.into_inner(), format!("{left}{right}").into_bytes());
        }
    }
}
