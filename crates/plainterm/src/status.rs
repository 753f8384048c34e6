//! Single-line status reporting.

use crate::error::UiError;
use crate::sink::{SharedOutput, Stream};
use crate::style::StatusKind;

/// Reports the status of one long-running operation.
///
/// Without a terminal there is nothing to redraw, so every update is
/// written as a new line.
#[derive(Debug, Clone)]
pub struct Status {
    output: SharedOutput,
}

impl Status {
    pub(crate) fn new(output: SharedOutput) -> Self {
        Self { output }
    }

    /// Writes `message` as a line.
    pub fn update(&self, message: impl AsRef<str>) {
        self.output
            .emit(Stream::Out, &format!("{}\n", message.as_ref()));
    }

    /// Writes `message` prefixed with the marker for `kind` (` +`, ` !`,
    /// ` *` or `<>`).
    pub fn step(&self, kind: StatusKind, message: impl AsRef<str>) {
        self.output.emit(
            Stream::Out,
            &format!("{}: {}\n", kind.marker(), message.as_ref()),
        );
    }

    /// Releases the status. Always succeeds.
    pub fn close(&self) -> Result<(), UiError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::Capture;
    use std::io;

    fn status() -> (Status, Capture) {
        let out = Capture::new();
        let output = SharedOutput::new(Box::new(out.clone()), Box::new(io::sink()));
        (Status::new(output), out)
    }

    #[test]
    fn test_update_writes_line() {
        let (status, out) = status();
        status.update("fetching registry");
        assert_eq!(out.contents(), "fetching registry\n");
    }

    #[test]
    fn test_step_markers() {
        let (status, out) = status();
        status.step(StatusKind::Ok, "rendered");
        status.step(StatusKind::Error, "failed");
        status.step(StatusKind::Warn, "deprecated");
        status.step(StatusKind::Timeout, "gave up");
        assert_eq!(
            out.lines(),
            vec![" +: rendered", " !: failed", " *: deprecated", "<>: gave up"]
        );
    }

    #[test]
    fn test_close_succeeds() {
        let (status, _out) = status();
        assert!(status.close().is_ok());
    }
}
