use std::sync::Arc;

use crate::config::Configuration;
use crate::domain::entity::QuizDuration;
use crate::domain::repository::{duration::GetDurationError, DurationRepository};

/// A [`DurationRepository`] implementation which reads configuration files.
pub struct DurationConfiguration {
    config: Arc<Configuration>,
}

impl DurationConfiguration {
    /// Creates a new [`DurationConfiguration`].
    pub fn new(config: Arc<Configuration>) -> Self {
        Self { config }
    }
}

#[async_trait::async_trait]
impl DurationRepository for DurationConfiguration {
    async fn quiz_duration(&self) -> Result<QuizDuration, GetDurationError> {
        let raw = self.config.timer.minutes;
        let value = raw
            .try_into()
            .map_err(|err| GetDurationError::Invalid { source: err })?;
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn duration_from_configuration() {
        let config: Configuration = toml::from_str(
            r#"
            [timer]
            minutes = 45

            [notification]
            summary = "Time is up"
            "#,
        )
        .unwrap();

        let repository = DurationConfiguration::new(Arc::new(config));
        assert_eq!(
            repository.quiz_duration().await.unwrap(),
            QuizDuration::try_new(45).unwrap()
        );
    }
}
