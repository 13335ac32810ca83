use std::error::Error as StdError;

use snafu::prelude::*;

use crate::domain::entity::notification::{CompletionMessage, TryNewCompletionMessageError};

/// An abstract interface for accessing the configured completion message.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait NotificationRepository: Send + Sync + 'static {
    /// Get the message shown when the countdown runs out.
    ///
    /// # Errors
    ///
    /// This function will return an error if failed to get the message.
    async fn completion_message(&self) -> Result<CompletionMessage, GetNotificationError>;
}

/// An error type of accessing the repository of [`CompletionMessage`]s.
#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum GetNotificationError {
    #[snafu(display("Could not create an invalid message"))]
    #[non_exhaustive]
    Invalid {
        source: TryNewCompletionMessageError,
    },
    #[snafu(whatever, display("Load notification failed: {message}"))]
    #[non_exhaustive]
    Unknown {
        message: String,
        #[snafu(source(from(Box<dyn StdError>, Some)))]
        source: Option<Box<dyn StdError>>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn notification_repository_get() {
        let mut mock = MockNotificationRepository::new();
        mock.expect_completion_message()
            .returning(|| whatever!("error"));

        assert!(mock.completion_message().await.is_err());
    }
}
