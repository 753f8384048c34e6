//! Style-to-text rendering.
//!
//! [`format_message`] turns a message and a [`Style`] into the exact bytes a
//! non-interactive UI writes. It is pure; locking and writing happen in
//! [`NonInteractiveUi`](crate::NonInteractiveUi).
//!
//! | Style | Output for `"msg"` |
//! |-------|--------------------|
//! | Default, Success, SuccessBold | `msg` |
//! | Debug | `debug: msg` |
//! | Trace | `trace: msg` |
//! | Warning, WarningBold | `warning: msg` |
//! | Header | blank line, then `» msg` |
//! | Info | `  msg` (each line, through the info color) |
//! | Error, ErrorBold | `! msg` (continuation lines indented two spaces) |

use crate::color::ColorSink;
use crate::style::Style;

/// How a rendered message ends.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum LineEnd {
    /// Terminate the message with a newline.
    Newline,
    /// Leave the row open for further appends.
    Open,
}

/// Renders `msg` in `style`.
///
/// Error styles always terminate each of their lines and render nothing for
/// an empty message. Every other style is written as a single block, followed
/// by a newline when `end` is [`LineEnd::Newline`].
pub(crate) fn format_message(
    msg: &str,
    style: Style,
    colors: &dyn ColorSink,
    end: LineEnd,
) -> String {
    if style.is_error() {
        return format_error_lines(msg);
    }

    let mut text = match style {
        Style::Info => msg
            .split('\n')
            .map(|line| colors.info(&format!("  {line}")))
            .collect::<Vec<_>>()
            .join("\n"),
        _ => match style.prefix() {
            Some(prefix) => format!("{prefix}{msg}"),
            None => msg.to_string(),
        },
    };

    if end == LineEnd::Newline {
        text.push('\n');
    }
    text
}

/// `! first`, then `  rest` for every following line.
fn format_error_lines(msg: &str) -> String {
    if msg.is_empty() {
        return String::new();
    }

    let mut out = String::with_capacity(msg.len() + 8);
    for (i, line) in msg.split('\n').enumerate() {
        out.push_str(if i == 0 { "! " } else { "  " });
        out.push_str(line);
        out.push('\n');
    }
    out
}
