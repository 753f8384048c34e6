//! Message styles and status markers.

use std::fmt;

/// Selects the formatting rule applied to a rendered message.
///
/// See [`NonInteractiveUi::output`](crate::NonInteractiveUi::output) for the
/// text each style produces.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Style {
    /// Written unchanged.
    #[default]
    Default,
    /// Prefixed with `debug: `.
    Debug,
    /// Preceded by a blank line and prefixed with `» `.
    Header,
    /// `! ` on the first line, two spaces on continuation lines.
    Error,
    /// Same as [`Style::Error`].
    ErrorBold,
    /// Prefixed with `warning: `.
    Warning,
    /// Same as [`Style::Warning`].
    WarningBold,
    /// Prefixed with `trace: `.
    Trace,
    /// Written unchanged.
    Success,
    /// Written unchanged.
    SuccessBold,
    /// Every line indented by two spaces and passed through the info color.
    Info,
}

impl Style {
    /// All styles, in declaration order.
    pub const ALL: [Style; 11] = [
        Style::Default,
        Style::Debug,
        Style::Header,
        Style::Error,
        Style::ErrorBold,
        Style::Warning,
        Style::WarningBold,
        Style::Trace,
        Style::Success,
        Style::SuccessBold,
        Style::Info,
    ];

    /// True for [`Style::Error`] and [`Style::ErrorBold`].
    pub fn is_error(self) -> bool {
        matches!(self, Style::Error | Style::ErrorBold)
    }

    /// The fixed prefix put in front of a single-line message, if any.
    ///
    /// Error and Info styles format per line and have no single prefix.
    pub(crate) fn prefix(self) -> Option<&'static str> {
        match self {
            Style::Debug => Some("debug: "),
            Style::Header => Some("\n» "),
            Style::Trace => Some("trace: "),
            Style::Warning | Style::WarningBold => Some("warning: "),
            _ => None,
        }
    }
}

/// Outcome reported through [`Status::step`](crate::Status::step).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StatusKind {
    /// The step succeeded.
    Ok,
    /// The step failed.
    Error,
    /// The step finished with a warning.
    Warn,
    /// The step timed out.
    Timeout,
}

impl StatusKind {
    /// Text marker printed before the status message.
    pub fn marker(self) -> &'static str {
        match self {
            StatusKind::Ok => " +",
            StatusKind::Error => " !",
            StatusKind::Warn => " *",
            StatusKind::Timeout => "<>",
        }
    }
}

impl fmt::Display for StatusKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.marker())
    }
}
