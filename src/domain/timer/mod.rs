mod handle;
mod routine;
mod state;

pub use handle::{QueryResponse, TimerHandle};
pub use routine::CompletionCallback;

use std::sync::Arc;

use snafu::prelude::*;

use crate::domain::entity::QuizDuration;
use crate::domain::outbound::DisplayPort;

use routine::{TimerContext, TimerRoutine};

/// Remaining seconds at or below which the display's container is marked
/// with the persistent low-time warning.
pub const WARNING_THRESHOLD_SECONDS: i64 = 120;

/// A countdown timer for one quiz attempt.
///
/// The timer owns a remaining-seconds counter, renders it through a
/// [`DisplayPort`] once per second, marks the display once remaining time
/// drops to [`WARNING_THRESHOLD_SECONDS`], and invokes its completion
/// callback exactly once when the counter is consumed.
pub struct CountdownTimer {
    duration: QuizDuration,
    display: Arc<dyn DisplayPort>,
    on_complete: Option<CompletionCallback>,
}

impl CountdownTimer {
    /// Creates a new [`CountdownTimer`] in the not-started state.
    pub fn new(
        duration: QuizDuration,
        display: Arc<dyn DisplayPort>,
        on_complete: impl FnOnce() + Send + 'static,
    ) -> Self {
        Self {
            duration,
            display,
            on_complete: Some(Box::new(on_complete)),
        }
    }

    /// Spawn the tick stream on the current runtime and return a handle
    /// controlling it. The first tick renders the full duration immediately,
    /// then one tick follows per second.
    ///
    /// # Errors
    ///
    /// This function will return an error if the timer has already been
    /// started. A second tick stream would drain the same counter twice as
    /// fast, so starting is a one-shot operation.
    pub fn start(&mut self) -> Result<TimerHandle, StartTimerError> {
        let on_complete = self.on_complete.take().context(AlreadyStartedSnafu)?;
        let (requester, commands) = tokio::sync::mpsc::channel(1);

        let context = TimerContext {
            display: Arc::clone(&self.display),
            commands,
            on_complete: Some(on_complete),
        };
        TimerRoutine::spawn(self.duration.total_seconds(), context);

        Ok(TimerHandle::new(requester))
    }
}

/// An error for starting a [`CountdownTimer`].
#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum StartTimerError {
    #[snafu(display("Countdown has already been started"))]
    #[non_exhaustive]
    AlreadyStarted,
}
