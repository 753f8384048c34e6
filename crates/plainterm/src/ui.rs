//! The non-interactive UI session.

use crate::color::{ColorSink, ConsoleColors};
use crate::context::{format_error_with_context, ContextMarkers};
use crate::error::UiError;
use crate::render::{format_message, LineEnd};
use crate::sink::{SharedOutput, SinkWriter, Stream};
use crate::status::Status;
use crate::step::StepGroup;
use crate::style::Style;
use crate::table::{PlainTable, Table, TableRender};
use crate::values::{format_named_values, NamedValue};
use std::fmt;
use std::io::Write;
use std::sync::Arc;

/// A request for interactive input.
///
/// A [`NonInteractiveUi`] rejects every request; the type exists so callers
/// can describe what they would have asked.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Input {
    /// Text shown before the cursor.
    pub prompt: String,
    /// Style the prompt would be shown in.
    pub style: Style,
    /// Whether the answer should be hidden while typing.
    pub secret: bool,
}

impl Input {
    /// Creates a visible prompt in the default style.
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            ..Self::default()
        }
    }

    /// Hides the answer while typing.
    pub fn secret(mut self) -> Self {
        self.secret = true;
        self
    }
}

/// A UI session that renders everything as flat text.
///
/// All rendering methods take the session's output lock for their full
/// duration, so output from concurrent threads interleaves only between
/// whole messages. Cloning the session is cheap and clones share the lock
/// and the sinks.
///
/// # Example
///
/// ```rust
/// use plainterm::{Capture, NonInteractiveUi, Style};
///
/// let out = Capture::new();
/// let ui = NonInteractiveUi::new(out.clone(), Capture::new());
///
/// ui.header("Plan");
/// ui.output("first\nsecond", Style::Error);
///
/// assert_eq!(out.contents(), "\n» Plan\n! first\n  second\n");
/// ```
#[derive(Clone)]
pub struct NonInteractiveUi {
    output: SharedOutput,
    colors: Arc<dyn ColorSink>,
    table: Arc<dyn TableRender>,
    markers: ContextMarkers,
}

impl fmt::Debug for NonInteractiveUi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NonInteractiveUi")
            .field("colors", &self.colors)
            .field("table", &self.table)
            .field("markers", &self.markers)
            .finish_non_exhaustive()
    }
}

impl NonInteractiveUi {
    /// Creates a session writing normal output to `out` and error output to
    /// `err`.
    pub fn new(out: impl Write + Send + 'static, err: impl Write + Send + 'static) -> Self {
        Self {
            output: SharedOutput::new(Box::new(out), Box::new(err)),
            colors: Arc::new(ConsoleColors::default()),
            table: Arc::new(PlainTable::default()),
            markers: ContextMarkers::default(),
        }
    }

    /// Creates a session on the process's stdout and stderr.
    pub fn stdio() -> Self {
        Self::new(std::io::stdout(), std::io::stderr())
    }

    /// Sets the color collaborator.
    pub fn with_colors(mut self, colors: impl ColorSink + 'static) -> Self {
        self.colors = Arc::new(colors);
        self
    }

    /// Sets the table collaborator.
    pub fn with_table_renderer(mut self, table: impl TableRender + 'static) -> Self {
        self.table = Arc::new(table);
        self
    }

    /// Sets the entry prefixes promoted by
    /// [`error_with_context`](Self::error_with_context).
    pub fn with_markers(mut self, markers: ContextMarkers) -> Self {
        self.markers = markers;
        self
    }

    /// Always fails: this backend cannot prompt.
    pub fn input(&self, input: &Input) -> Result<String, UiError> {
        tracing::debug!(prompt = %input.prompt, "rejecting interactive input");
        Err(UiError::NonInteractive)
    }

    /// Always `false`.
    pub fn interactive(&self) -> bool {
        false
    }

    /// Writes `msg` in `style`, followed by a newline.
    ///
    /// Error styles write one line per message line (`! ` first, two spaces
    /// after) and nothing at all for an empty message.
    pub fn output(&self, msg: &str, style: Style) {
        self.emit(&format_message(msg, style, self.colors.as_ref(), LineEnd::Newline));
    }

    /// Like [`output`](Self::output) but leaves the row open: no trailing
    /// newline is written (error styles still terminate each line).
    pub fn append_to_row(&self, msg: &str, style: Style) {
        self.emit(&format_message(msg, style, self.colors.as_ref(), LineEnd::Open));
    }

    /// Writes a right-aligned key/value block followed by a blank line.
    ///
    /// Rows whose value is an empty string are skipped.
    pub fn named_values(&self, rows: &[NamedValue]) {
        self.emit(&format_named_values(rows));
    }

    /// Renders `table` through the table collaborator.
    pub fn table(&self, table: &Table) {
        let renderer = Arc::clone(&self.table);
        self.output.with_lock(|sinks| {
            if let Err(err) = renderer.render(sinks.out.as_mut(), table) {
                tracing::warn!(error = %err, "table rendering failed");
            }
        });
    }

    /// Writes an error report: title, error message, promoted detail and
    /// suggestion entries, then the remaining context aligned on the colon.
    pub fn error_with_context<E, I, S>(&self, err: &E, subject: &str, context: I)
    where
        E: fmt::Display + ?Sized,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let entries = context.into_iter().map(Into::into).collect();
        self.emit(&format_error_with_context(
            &err.to_string(),
            subject,
            entries,
            &self.markers,
            self.colors.as_ref(),
        ));
    }

    /// Handles onto the normal and error sinks.
    ///
    /// Writes through them take the session's output lock.
    pub fn output_writers(&self) -> (SinkWriter, SinkWriter) {
        (
            self.output.writer(Stream::Out),
            self.output.writer(Stream::Err),
        )
    }

    /// A status reporter sharing this session's output.
    pub fn status(&self) -> Status {
        Status::new(self.output.clone())
    }

    /// A new, open step group sharing this session's output.
    pub fn step_group(&self) -> StepGroup {
        StepGroup::new(self.output.clone())
    }

    /// [`output`](Self::output) with [`Style::Debug`].
    pub fn debug(&self, msg: &str) {
        self.output(msg, Style::Debug);
    }

    /// [`output`](Self::output) with [`Style::Error`].
    pub fn error(&self, msg: &str) {
        self.output(msg, Style::Error);
    }

    /// [`output`](Self::output) with [`Style::Header`].
    pub fn header(&self, msg: &str) {
        self.output(msg, Style::Header);
    }

    /// [`output`](Self::output) with [`Style::Info`].
    pub fn info(&self, msg: &str) {
        self.output(msg, Style::Info);
    }

    /// [`output`](Self::output) with [`Style::Success`].
    pub fn success(&self, msg: &str) {
        self.output(msg, Style::Success);
    }

    /// [`output`](Self::output) with [`Style::Trace`].
    pub fn trace(&self, msg: &str) {
        self.output(msg, Style::Trace);
    }

    /// [`output`](Self::output) with [`Style::Warning`].
    pub fn warning(&self, msg: &str) {
        self.output(msg, Style::Warning);
    }

    /// [`output`](Self::output) with [`Style::WarningBold`].
    pub fn warning_bold(&self, msg: &str) {
        self.output(msg, Style::WarningBold);
    }

    fn emit(&self, text: &str) {
        self.output.emit(Stream::Out, text);
    }
}
