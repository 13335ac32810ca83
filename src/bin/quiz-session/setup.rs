use std::sync::Arc;

use quiz_session::config::{self, Configuration};
use quiz_session::domain::entity::{CompletionMessage, QuizDuration};
use quiz_session::domain::repository::{DurationRepository, NotificationRepository};
use quiz_session::domain::timer::CountdownTimer;
use quiz_session::platform::repository::{DurationConfiguration, NotificationConfiguration};
use quiz_session::platform::{ConsoleDisplay, NotifyService};
use snafu::{prelude::*, Whatever};
use tokio::sync::oneshot::{self, Receiver};

use crate::cli::Arguments;

const APP_NAME: &str = "quiz-session";

/// One interactive countdown session, ready to run.
pub struct Session {
    timer: CountdownTimer,
    completed: Receiver<()>,
    message: CompletionMessage,
    notifier: NotifyService,
}

impl Session {
    /// Run the countdown until it is consumed or Ctrl-C cancels it.
    pub async fn run(mut self) -> Result<(), Whatever> {
        let handle = self
            .timer
            .start()
            .whatever_context("Could not start the countdown")?;

        tokio::select! {
            res = &mut self.completed => {
                res.whatever_context("Countdown ended without completing")?;
                println!();
                self.notifier
                    .notify(&self.message)
                    .await
                    .whatever_context("Could not announce the finished countdown")?;
            }
            res = tokio::signal::ctrl_c() => {
                res.whatever_context("Could not listen for interrupts")?;
                handle.stop().await;
                println!();
                tracing::info!("Countdown cancelled");
            }
        }

        Ok(())
    }
}

pub async fn bootstrap(arg: Arguments) -> Result<Session, Whatever> {
    let configuration = configuration(&arg)?;
    let duration = duration(&arg, Arc::clone(&configuration)).await?;
    let message = message(configuration).await?;

    let display = Arc::new(ConsoleDisplay::new());
    let (done, completed) = oneshot::channel();
    let timer = CountdownTimer::new(duration, display, move || {
        let _ = done.send(());
    });

    let session = Session {
        timer,
        completed,
        message,
        notifier: NotifyService::new(APP_NAME.to_owned()),
    };

    Ok(session)
}

fn configuration(arg: &Arguments) -> Result<Arc<Configuration>, Whatever> {
    let res = match &arg.config {
        Some(path) => config::load_with_path(path.clone()),
        None => config::load_with_xdg(APP_NAME.to_owned()),
    };

    let configuration = res.whatever_context("Could not load configuration")?;
    Ok(Arc::new(configuration))
}

async fn duration(arg: &Arguments, config: Arc<Configuration>) -> Result<QuizDuration, Whatever> {
    match arg.minutes {
        Some(minutes) => {
            QuizDuration::try_new(minutes).whatever_context("Invalid duration on command line")
        }
        None => DurationConfiguration::new(config)
            .quiz_duration()
            .await
            .whatever_context("Could not load the configured duration"),
    }
}

async fn message(config: Arc<Configuration>) -> Result<CompletionMessage, Whatever> {
    NotificationConfiguration::new(config)
        .completion_message()
        .await
        .whatever_context("Could not load the configured notification")
}
