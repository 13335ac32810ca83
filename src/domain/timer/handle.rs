use tokio::sync::mpsc::Sender;
use tokio::sync::oneshot::{self, Sender as OneshotSender};

/// Result of one query of the countdown state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryResponse {
    pub total_seconds: i64,
    pub remaining_seconds: i64,
    pub warning: bool,
}

/// Actions that a [`TimerRoutine`] runs.
///
/// [`TimerRoutine`]: crate::domain::timer::routine::TimerRoutine
#[derive(Debug)]
pub enum Command {
    Stop,
    Query {
        responder: OneshotSender<QueryResponse>,
    },
}

/// Handle that controls a running countdown.
#[derive(Debug)]
pub struct TimerHandle {
    requester: Sender<Command>,
}

impl TimerHandle {
    /// Creates a new [`TimerHandle`].
    pub fn new(requester: Sender<Command>) -> Self {
        Self { requester }
    }

    /// Send [`Command::Stop`] to cancel the tick stream. Idempotent: once
    /// the countdown has completed or stopped the command is simply dropped.
    pub async fn stop(&self) {
        let _ = self.requester.send(Command::Stop).await;
    }

    /// Send [`Command::Query`] to get the current countdown state. Returns
    /// `None` once the countdown has completed or stopped.
    pub async fn query(&self) -> Option<QueryResponse> {
        let (responder, receiver) = oneshot::channel();
        self.requester.send(Command::Query { responder }).await.ok()?;
        receiver.await.ok()
    }
}
