//! # Plainterm - Non-Interactive UI Rendering
//!
//! `plainterm` renders the calls of a command-line UI (styled messages,
//! key/value blocks, tables, contextual error reports and multi-step progress)
//! as flat, ordered text. It is meant for places where there is no terminal to
//! control: test runs, CI logs and piped output.
//!
//! ## Core Concepts
//!
//! - [`NonInteractiveUi`]: one UI session, owning the output sink pair and the
//!   lock that serializes every write
//! - [`Style`]: selects how a message is rendered (prefixes, indentation)
//! - [`NamedValue`] / [`Value`]: rows of a right-aligned key/value block
//! - [`StepGroup`] / [`Step`]: progress reporting from many threads with a
//!   barrier that waits for all tracked steps
//! - [`Status`]: single-operation status lines
//! - [`Capture`]: an in-memory sink for asserting on output in tests
//!
//! ## Quick Start
//!
//! ```rust
//! use plainterm::{Capture, NamedValue, NonInteractiveUi};
//!
//! let out = Capture::new();
//! let ui = NonInteractiveUi::new(out.clone(), Capture::new());
//!
//! ui.header("Deployment");
//! ui.named_values(&[
//!     NamedValue::new("Job", "web"),
//!     NamedValue::new("Count", 3),
//!     NamedValue::new("Namespace", ""),
//! ]);
//! ui.success("done");
//!
//! assert_eq!(
//!     out.contents(),
//!     "\n» Deployment\n    Job: web\n  Count: 3\n\ndone\n"
//! );
//! ```
//!
//! ## Error Reports
//!
//! ```rust
//! use plainterm::{Capture, NonInteractiveUi};
//!
//! let out = Capture::new();
//! let ui = NonInteractiveUi::new(out.clone(), Capture::new());
//!
//! ui.error_with_context(
//!     "template not found",
//!     "failed to render",
//!     ["Detail: missing job.tpl", "Pack: web"],
//! );
//!
//! assert_eq!(out.lines(), vec![
//!     "! Failed To Render",
//!     "!   Error: template not found",
//!     "!   Detail: missing job.tpl",
//!     "!   Context:",
//!     "!     Pack: web",
//! ]);
//! ```
//!
//! ## Collaborators
//!
//! Color and table layout are pluggable through [`ColorSink`] and
//! [`TableRender`]. The defaults are [`ConsoleColors`] (plain unless given a
//! style) and [`PlainTable`].

mod color;
mod context;
mod error;
mod render;
mod sink;
mod status;
pub mod step;
mod style;
mod table;
mod ui;
mod values;

pub use color::{ColorSink, ConsoleColors, NoColor};
pub use context::ContextMarkers;
pub use error::UiError;
pub use sink::{Capture, SinkWriter, Stream};
pub use status::Status;
pub use step::{Step, StepGroup};
pub use style::{StatusKind, Style};
pub use table::{PlainTable, Table, TableRender};
pub use ui::{Input, NonInteractiveUi};
pub use values::{NamedValue, Value};

// Re-export the filter so callers can strip output from other sources.
pub use plainterm_ansi::{strip_ansi, strip_ansi_str, AnsiFilter};
