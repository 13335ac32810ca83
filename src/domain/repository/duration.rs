use std::error::Error as StdError;

use snafu::prelude::*;

use crate::domain::entity::duration::{QuizDuration, TryNewQuizDurationError};

/// An abstract interface for accessing the configured quiz duration.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait DurationRepository: Send + Sync + 'static {
    /// Get the duration allotted for the quiz.
    ///
    /// # Errors
    ///
    /// This function will return an error if failed to get the duration.
    async fn quiz_duration(&self) -> Result<QuizDuration, GetDurationError>;
}

/// An error type of accessing the repository of [`QuizDuration`]s.
#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum GetDurationError {
    #[snafu(display("Could not create an invalid duration"))]
    #[non_exhaustive]
    Invalid { source: TryNewQuizDurationError },
    #[snafu(whatever, display("Load duration failed: {message}"))]
    #[non_exhaustive]
    Unknown {
        message: String,
        #[snafu(source(from(Box<dyn StdError>, Some)))]
        source: Option<Box<dyn StdError>>,
    },
}
