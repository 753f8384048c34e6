//! Step groups: progress reporting with a completion barrier.
//!
//! A [`StepGroup`] hands out [`Step`]s to independently running units of
//! work. Each step prints progress lines and is finished exactly once with
//! [`Step::done`] or [`Step::abort`]. [`StepGroup::wait`] closes the group and
//! blocks until every step registered before the close has finished.
//!
//! # Lifecycle
//!
//! ```text
//!            add()                 done() / abort()
//! (none) ───────────► running ─────────────────────► done
//!                       │ ▲                            │
//!                       └─┘ update()        further done()/abort(): no-op
//! ```
//!
//! # Late Steps
//!
//! Steps added after `wait` was called are still fully usable but are not
//! tracked, so they can never hold `wait` up.
//!
//! # Example
//!
//! ```rust
//! use plainterm::{Capture, NonInteractiveUi};
//! use std::thread;
//!
//! let out = Capture::new();
//! let ui = NonInteractiveUi::new(out.clone(), Capture::new());
//! let group = ui.step_group();
//!
//! thread::scope(|s| {
//!     for name in ["api", "worker"] {
//!         let step = group.add(format!("deploying {name}"));
//!         s.spawn(move || {
//!             step.update(format!("{name} healthy"));
//!             step.done();
//!         });
//!     }
//!     group.wait();
//! });
//!
//! assert_eq!(out.lines().len(), 4);
//! ```

use crate::sink::{SharedOutput, SinkWriter, Stream};
use crate::style::StatusKind;
use parking_lot::{Condvar, Mutex};
use plainterm_ansi::AnsiFilter;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    /// New steps are tracked.
    Open,
    /// `wait` has been called; new steps are orphans.
    Closed,
}

#[derive(Debug)]
struct Tracking {
    phase: Phase,
    outstanding: usize,
}

#[derive(Debug)]
struct Barrier {
    tracking: Mutex<Tracking>,
    finished: Condvar,
}

impl Barrier {
    /// Registers a step unless the group is closed.
    fn register(&self) -> bool {
        let mut tracking = self.tracking.lock();
        match tracking.phase {
            Phase::Open => {
                tracking.outstanding += 1;
                true
            }
            Phase::Closed => false,
        }
    }

    fn complete_one(&self) {
        let mut tracking = self.tracking.lock();
        debug_assert!(tracking.outstanding > 0, "step completed twice");
        tracking.outstanding = tracking.outstanding.saturating_sub(1);
        if tracking.outstanding == 0 {
            self.finished.notify_all();
        }
    }
}

/// A set of [`Step`]s that can be waited on as a whole.
///
/// Obtained from [`NonInteractiveUi::step_group`](crate::NonInteractiveUi::step_group).
/// The group is `Sync`: steps may be added from any thread.
#[derive(Debug)]
pub struct StepGroup {
    output: SharedOutput,
    barrier: Arc<Barrier>,
}

impl StepGroup {
    pub(crate) fn new(output: SharedOutput) -> Self {
        Self {
            output,
            barrier: Arc::new(Barrier {
                tracking: Mutex::new(Tracking {
                    phase: Phase::Open,
                    outstanding: 0,
                }),
                finished: Condvar::new(),
            }),
        }
    }

    /// Starts a step and prints its initial status line.
    ///
    /// If the group has already been closed by [`wait`](Self::wait), the
    /// returned step works normally but is not tracked.
    pub fn add(&self, message: impl AsRef<str>) -> Step {
        let step = Step {
            output: self.output.clone(),
            done: AtomicBool::new(false),
            barrier: None,
        };

        // Print before taking the group lock.
        step.update(message);

        let barrier = if self.barrier.register() {
            Some(Arc::clone(&self.barrier))
        } else {
            tracing::trace!("step added after group closed; not tracked");
            None
        };

        Step { barrier, ..step }
    }

    /// Closes the group and blocks until all tracked steps are done.
    ///
    /// Steps added after this call starts are never waited for. Calling
    /// `wait` again returns as soon as the tracked steps are done.
    pub fn wait(&self) {
        let mut tracking = self.barrier.tracking.lock();
        tracking.phase = Phase::Closed;
        tracing::debug!(outstanding = tracking.outstanding, "waiting on step group");

        while tracking.outstanding > 0 {
            self.barrier.finished.wait(&mut tracking);
        }
        tracing::debug!("step group finished");
    }

    /// Number of tracked steps that have not finished yet.
    pub fn outstanding(&self) -> usize {
        self.barrier.tracking.lock().outstanding
    }

    /// Whether [`wait`](Self::wait) has been called.
    pub fn is_closed(&self) -> bool {
        self.barrier.tracking.lock().phase == Phase::Closed
    }

    /// Does nothing.
    ///
    /// Present so a step group can be released the same way as the other
    /// renderer handles.
    pub fn close(&self) {}
}

/// One unit of progress inside a [`StepGroup`].
///
/// All methods take `&self`; share a step across threads by reference or
/// wrap it in an `Arc`.
#[derive(Debug)]
pub struct Step {
    output: SharedOutput,
    done: AtomicBool,
    barrier: Option<Arc<Barrier>>,
}

impl Step {
    /// Prints a progress line (`-> message`).
    ///
    /// May be called any number of times, including after the step is done.
    pub fn update(&self, message: impl AsRef<str>) {
        self.output
            .emit(Stream::Out, &format!("-> {}\n", message.as_ref()));
    }

    /// Accepted and ignored; non-interactive output has no per-step status
    /// indicator.
    pub fn status(&self, _status: StatusKind) {}

    /// Marks the step finished.
    ///
    /// Only the first call (of `done` or [`abort`](Self::abort)) has an
    /// effect; later calls are no-ops, even when racing from other threads.
    pub fn done(&self) {
        if self.done.swap(true, Ordering::AcqRel) {
            tracing::trace!("step already finished");
            return;
        }
        if let Some(barrier) = &self.barrier {
            barrier.complete_one();
        }
    }

    /// Same as [`done`](Self::done).
    pub fn abort(&self) {
        self.done();
    }

    /// Whether the step has been finished.
    pub fn is_done(&self) -> bool {
        self.done.load(Ordering::Acquire)
    }

    /// Whether the step counts toward its group's [`wait`](StepGroup::wait).
    pub fn is_tracked(&self) -> bool {
        self.barrier.is_some()
    }

    /// A writer for raw command output belonging to this step.
    ///
    /// Escape sequences are stripped from each write, and each write goes
    /// out under the UI's output lock.
    pub fn term_output(&self) -> AnsiFilter<SinkWriter> {
        AnsiFilter::new(self.output.writer(Stream::Out))
    }
}
