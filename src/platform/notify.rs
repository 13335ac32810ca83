use std::error::Error as StdError;

use notify_rust::Notification;
use snafu::prelude::*;

use crate::domain::entity::CompletionMessage;

/// Shows the time-is-up desktop notification.
#[derive(Debug, Clone)]
pub struct NotifyService {
    app_name: String,
}

impl NotifyService {
    /// Creates a new [`NotifyService`].
    pub fn new(app_name: String) -> Self {
        Self { app_name }
    }

    /// Show the completion message as a desktop notification.
    ///
    /// # Errors
    ///
    /// This function will return an error if failed to make a notification.
    pub async fn notify(&self, message: &CompletionMessage) -> Result<(), NotifyError> {
        let mut notification = Notification::new();
        notification.appname(&self.app_name);
        notification.summary(message.summary());

        if let Some(body) = message.body() {
            notification.body(body);
        }

        let _ = whatever!(
            notification.show_async().await,
            "Could not show notification",
        );

        Ok(())
    }
}

/// An error type of the notification operation.
#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum NotifyError {
    #[snafu(whatever, display("Could not emit a notification: {message}"))]
    Unknown {
        message: String,
        #[snafu(source(from(Box<dyn StdError>, Some)))]
        source: Option<Box<dyn StdError>>,
    },
}
