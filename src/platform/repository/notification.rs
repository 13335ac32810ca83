use std::sync::Arc;

use crate::config::Configuration;
use crate::domain::entity::CompletionMessage;
use crate::domain::repository::{notification::GetNotificationError, NotificationRepository};

/// A [`NotificationRepository`] implementation which reads configuration
/// files.
pub struct NotificationConfiguration {
    config: Arc<Configuration>,
}

impl NotificationConfiguration {
    /// Creates a new [`NotificationConfiguration`].
    pub fn new(config: Arc<Configuration>) -> Self {
        Self { config }
    }
}

#[async_trait::async_trait]
impl NotificationRepository for NotificationConfiguration {
    async fn completion_message(&self) -> Result<CompletionMessage, GetNotificationError> {
        let summary = self.config.notification.summary.clone();
        let body = self.config.notification.body.clone();
        let value = CompletionMessage::try_new(summary, body)
            .map_err(|err| GetNotificationError::Invalid { source: err })?;
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn message_from_configuration() {
        let config: Configuration = toml::from_str(
            r#"
            [timer]
            minutes = 30

            [notification]
            summary = "Time is up"
            body = "Your answers are being submitted automatically."
            "#,
        )
        .unwrap();

        let repository = NotificationConfiguration::new(Arc::new(config));
        let message = repository.completion_message().await.unwrap();
        assert_eq!(message.summary(), "Time is up");
        assert_eq!(
            message.body(),
            Some("Your answers are being submitted automatically.")
        );
    }

    #[tokio::test]
    async fn empty_summary_is_rejected() {
        let config: Configuration = toml::from_str(
            r#"
            [timer]
            minutes = 30

            [notification]
            summary = ""
            "#,
        )
        .unwrap();

        let repository = NotificationConfiguration::new(Arc::new(config));
        assert!(matches!(
            repository.completion_message().await,
            Err(GetNotificationError::Invalid { .. })
        ));
    }
}
