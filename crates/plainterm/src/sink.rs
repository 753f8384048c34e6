//! The shared output sink pair.
//!
//! Every write made by a UI session, its step groups, steps and status
//! reporters goes through one [`SharedOutput`]. Its single mutex gives
//! line-level atomicity: one render operation holds the lock for all of its
//! bytes, so concurrent writers interleave only between whole operations.

use parking_lot::Mutex;
use std::io::{self, Write};
use std::sync::Arc;

/// Which of the two sinks a write targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stream {
    /// Normal output.
    Out,
    /// Error output.
    Err,
}

pub(crate) struct Sinks {
    pub(crate) out: Box<dyn Write + Send>,
    pub(crate) err: Box<dyn Write + Send>,
}

impl Sinks {
    pub(crate) fn stream(&mut self, stream: Stream) -> &mut (dyn Write + Send) {
        match stream {
            Stream::Out => self.out.as_mut(),
            Stream::Err => self.err.as_mut(),
        }
    }
}

/// Cloneable handle to the locked sink pair of one UI session.
#[derive(Clone)]
pub(crate) struct SharedOutput {
    inner: Arc<Mutex<Sinks>>,
}

impl SharedOutput {
    pub(crate) fn new(out: Box<dyn Write + Send>, err: Box<dyn Write + Send>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Sinks { out, err })),
        }
    }

    /// Runs `f` with exclusive access to both sinks.
    pub(crate) fn with_lock<R>(&self, f: impl FnOnce(&mut Sinks) -> R) -> R {
        let mut sinks = self.inner.lock();
        f(&mut sinks)
    }

    /// Writes `text` to `stream` in one locked operation.
    ///
    /// Failures are logged and dropped: rendering has no error channel.
    pub(crate) fn emit(&self, stream: Stream, text: &str) {
        if text.is_empty() {
            return;
        }
        self.with_lock(|sinks| write_logged(sinks.stream(stream), text));
    }

    pub(crate) fn writer(&self, stream: Stream) -> SinkWriter {
        SinkWriter {
            output: self.clone(),
            stream,
        }
    }
}

impl std::fmt::Debug for SharedOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SharedOutput").finish_non_exhaustive()
    }
}

pub(crate) fn write_logged(w: &mut (dyn Write + Send), text: &str) {
    if let Err(err) = w.write_all(text.as_bytes()).and_then(|()| w.flush()) {
        tracing::warn!(error = %err, "dropping output after sink write failure");
    }
}

/// A [`Write`] handle onto one of a session's sinks.
///
/// Each `write` call takes the session's output lock, so bytes written
/// through a `SinkWriter` never split a line rendered by another thread.
/// Returned by [`NonInteractiveUi::output_writers`](crate::NonInteractiveUi::output_writers).
#[derive(Debug, Clone)]
pub struct SinkWriter {
    output: SharedOutput,
    stream: Stream,
}

impl SinkWriter {
    /// The sink this writer targets.
    pub fn stream(&self) -> Stream {
        self.stream
    }
}

impl Write for SinkWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let stream = self.stream;
        self.output
            .with_lock(|sinks| sinks.stream(stream).write_all(buf))?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        let stream = self.stream;
        self.output.with_lock(|sinks| sinks.stream(stream).flush())
    }
}

/// An in-memory sink for tests.
///
/// Clones share the same buffer: hand one clone to the UI and keep another
/// to read what was written.
///
/// ```rust
/// use plainterm::{Capture, NonInteractiveUi};
///
/// let out = Capture::new();
/// let ui = NonInteractiveUi::new(out.clone(), Capture::new());
/// ui.warning("disk almost full");
/// assert_eq!(out.contents(), "warning: disk almost full\n");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Capture {
    buf: Arc<Mutex<Vec<u8>>>,
}

impl Capture {
    /// Creates an empty capture buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far, decoded lossily as UTF-8.
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.buf.lock()).into_owned()
    }

    /// Everything written so far, split into lines without terminators.
    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_string).collect()
    }

    /// Raw bytes written so far.
    pub fn bytes(&self) -> Vec<u8> {
        self.buf.lock().clone()
    }

    /// Discards everything captured so far.
    pub fn clear(&self) {
        self.buf.lock().clear();
    }
}

impl Write for Capture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buf.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_emit_routes_by_stream() {
        let out = Capture::new();
        let err = Capture::new();
        let shared = SharedOutput::new(Box::new(out.clone()), Box::new(err.clone()));

        shared.emit(Stream::Out, "to out\n");
        shared.emit(Stream::Err, "to err\n");

        assert_eq!(out.contents(), "to out\n");
        assert_eq!(err.contents(), "to err\n");
    }

    #[test]
    fn test_emit_swallows_write_failure() {
        let shared = SharedOutput::new(Box::new(FailingWriter), Box::new(io::sink()));
        shared.emit(Stream::Out, "lost\n");
    }

    #[test]
    fn test_sink_writer_reports_errors() {
        let shared = SharedOutput::new(Box::new(FailingWriter), Box::new(io::sink()));
        let mut writer = shared.writer(Stream::Out);
        assert!(writer.write_all(b"x").is_err());
    }

    #[test]
    fn test_sink_writer_shares_buffer() {
        let out = Capture::new();
        let shared = SharedOutput::new(Box::new(out.clone()), Box::new(io::sink()));
        let mut a = shared.writer(Stream::Out);
        let mut b = a.clone();

        writeln!(a, "one").unwrap();
        writeln!(b, "two").unwrap();

        assert_eq!(out.lines(), vec!["one", "two"]);
    }

    #[test]
    fn test_capture_clear() {
        let mut cap = Capture::new();
        cap.write_all(b"abc").unwrap();
        assert_eq!(cap.bytes(), b"abc");
        cap.clear();
        assert!(cap.contents().is_empty());
    }
}
