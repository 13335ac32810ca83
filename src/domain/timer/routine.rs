use std::sync::Arc;

use tokio::sync::mpsc::Receiver;
use tokio::task::JoinHandle;

use crate::domain::outbound::DisplayPort;
use crate::domain::timer::handle::Command;
use crate::domain::timer::state::TimerState;

/// Zero-argument callback invoked exactly once when the countdown is
/// consumed.
pub type CompletionCallback = Box<dyn FnOnce() + Send>;

/// A [`TimerContext`] stores all objects relevant to the [`TimerRoutine`]
/// and the tick logic.
pub struct TimerContext {
    pub display: Arc<dyn DisplayPort>,
    pub commands: Receiver<Command>,
    pub on_complete: Option<CompletionCallback>,
}

/// A type responsible for driving one countdown. A [`TimerRoutine`] runs on
/// background, ticking once per second and receiving [`Command`]s from a
/// [`TimerHandle`].
///
/// [`TimerHandle`]: crate::domain::timer::handle::TimerHandle
pub struct TimerRoutine {
    context: TimerContext,
    state: TimerState,
}

impl TimerRoutine {
    /// Spawn a running [`TimerRoutine`] on background.
    pub fn spawn(total_seconds: i64, context: TimerContext) -> JoinHandle<()> {
        tokio::spawn(async move {
            let mut routine = Self {
                context,
                state: TimerState::new(total_seconds),
            };
            routine.run().await;
        })
    }

    /// Main part of the countdown logic.
    async fn run(&mut self) {
        while !self.state.is_stopped() {
            self.state.run(&mut self.context).await;
        }
    }
}
