use tokio::sync::oneshot::Sender;
use tokio::time::{Duration, Interval};

use crate::domain::entity::RemainingTime;
use crate::domain::timer::handle::{Command, QueryResponse};
use crate::domain::timer::routine::TimerContext;
use crate::domain::timer::WARNING_THRESHOLD_SECONDS;

/// Nominal delay between two ticks.
const TICK_PERIOD: Duration = Duration::from_secs(1);

#[derive(Debug)]
#[repr(transparent)]
pub struct TimerState {
    inner: Option<TimerStateInner>,
}

impl TimerState {
    /// Creates a new [`TimerState`] with a full counter.
    pub fn new(total_seconds: i64) -> Self {
        Self {
            inner: Some(TimerStateInner::new(total_seconds)),
        }
    }

    /// Do the tick logic based on its inner state.
    pub async fn run(&mut self, context: &mut TimerContext) {
        self.inner = match self.inner.take() {
            Some(inner) => Some(inner.run(context).await),
            None => unreachable!("`TimerState`'s inner should not be `None`"),
        };
    }

    /// Returns `true` if is stopped of this [`TimerState`].
    pub fn is_stopped(&self) -> bool {
        matches!(self.inner, Some(TimerStateInner::Stopped(_)))
    }
}

#[enum_dispatch::enum_dispatch]
trait StateRun {
    async fn run(self, context: &mut TimerContext) -> TimerStateInner;
}

/// Actual implementation of running state of [`TimerRoutine`].
///
/// [`TimerRoutine`]: crate::domain::timer::routine::TimerRoutine
#[derive(Debug)]
#[enum_dispatch::enum_dispatch(StateRun)]
enum TimerStateInner {
    Running(RunningState),
    Stopped(StoppedState),
}

impl TimerStateInner {
    fn new(total_seconds: i64) -> Self {
        Self::Running(RunningState::new(total_seconds))
    }
}

/// A state which indicates that the countdown is ticking.
#[derive(Debug)]
struct RunningState {
    total: i64,
    remaining: i64,
    timer: Interval,
}

impl RunningState {
    fn new(total_seconds: i64) -> Self {
        // The interval yields its first tick immediately, so the full
        // duration is rendered as soon as the countdown starts.
        Self {
            total: total_seconds,
            remaining: total_seconds,
            timer: tokio::time::interval(TICK_PERIOD),
        }
    }
}

impl StateRun for RunningState {
    async fn run(mut self, context: &mut TimerContext) -> TimerStateInner {
        tokio::select! {
            _ = self.timer.tick() => self.handle_tick(context).await,
            Some(command) = context.commands.recv() => match command {
                Command::Stop => self.handle_stop(),
                Command::Query { responder } => self.handle_query(responder),
            },
            else => self.into(),
        }
    }
}

impl RunningState {
    async fn handle_tick(mut self, context: &mut TimerContext) -> TimerStateInner {
        let time = RemainingTime::new(self.remaining);

        if let Err(err) = context.display.render(&time).await {
            tracing::error!(err = %err);
        }

        if self.remaining <= WARNING_THRESHOLD_SECONDS {
            if let Err(err) = context.display.mark_warning().await {
                tracing::error!(err = %err);
            }
        }

        if self.remaining <= 0 {
            if let Some(on_complete) = context.on_complete.take() {
                on_complete();
            }
            // The completion tick still consumes a decrement, leaving the
            // counter one below zero.
            self.remaining -= 1;
            StoppedState {
                remaining: self.remaining,
            }
            .into()
        } else {
            self.remaining -= 1;
            self.into()
        }
    }

    fn handle_query(self, responder: Sender<QueryResponse>) -> TimerStateInner {
        let _ = responder.send(QueryResponse {
            total_seconds: self.total,
            remaining_seconds: self.remaining,
            warning: self.remaining <= WARNING_THRESHOLD_SECONDS,
        });

        self.into()
    }

    fn handle_stop(self) -> TimerStateInner {
        StoppedState {
            remaining: self.remaining,
        }
        .into()
    }
}

/// A state which indicates that the countdown has been consumed or
/// cancelled. Terminal: no further ticks occur.
#[derive(Debug)]
struct StoppedState {
    #[allow(dead_code)]
    remaining: i64,
}

impl StateRun for StoppedState {
    async fn run(self, _context: &mut TimerContext) -> TimerStateInner {
        self.into()
    }
}
