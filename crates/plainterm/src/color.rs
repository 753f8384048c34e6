//! The color collaborator.
//!
//! The renderer never decides on its own whether color codes are emitted. It
//! hands text to a [`ColorSink`] unconditionally and writes whatever comes back.
//! A sink with color disabled returns its input unchanged.

use console::Style as ConsoleStyle;
use std::fmt::Debug;

/// Applies color to rendered text.
pub trait ColorSink: Send + Sync + Debug {
    /// Colors one line of an informational message.
    fn info(&self, text: &str) -> String;
}

/// [`ColorSink`] backed by [`console::Style`].
///
/// Whether codes are actually emitted follows `console`'s own switch
/// (`console::colors_enabled`), unless the style was built with
/// `force_styling`. The default info style has no attributes, so it renders
/// plain text.
///
/// ```rust
/// use plainterm::{ColorSink, ConsoleColors};
///
/// let colors = ConsoleColors::default();
/// assert_eq!(colors.info("  hello"), "  hello");
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConsoleColors {
    info: ConsoleStyle,
}

impl ConsoleColors {
    /// Creates a sink with no styling.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the style used for informational lines.
    pub fn info_style(mut self, style: ConsoleStyle) -> Self {
        self.info = style;
        self
    }
}

impl ColorSink for ConsoleColors {
    fn info(&self, text: &str) -> String {
        self.info.apply_to(text).to_string()
    }
}

/// [`ColorSink`] that never emits color codes.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoColor;

impl ColorSink for NoColor {
    fn info(&self, text: &str) -> String {
        text.to_string()
    }
}
