use snafu::prelude::*;

/// Essential information in the notification shown when a countdown runs
/// out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionMessage {
    summary: String,
    body: Option<String>,
}

impl CompletionMessage {
    /// Try to create a [`CompletionMessage`].
    ///
    /// # Errors
    ///
    /// This function will return an error if the summary is empty.
    pub fn try_new(
        summary: String,
        body: Option<String>,
    ) -> Result<Self, TryNewCompletionMessageError> {
        ensure!(!summary.is_empty(), EmptySummarySnafu);
        Ok(Self { summary, body })
    }

    /// Returns a reference to the summary of this [`CompletionMessage`].
    pub fn summary(&self) -> &str {
        &self.summary
    }

    /// Returns the body of this [`CompletionMessage`].
    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }
}

impl From<CompletionMessage> for (String, Option<String>) {
    fn from(val: CompletionMessage) -> Self {
        (val.summary, val.body)
    }
}

/// An error type of creating a [`CompletionMessage`].
#[derive(Debug, Clone, Snafu, PartialEq, Eq)]
#[non_exhaustive]
pub enum TryNewCompletionMessageError {
    #[snafu(display("Summary of a notification must be non-empty."))]
    #[non_exhaustive]
    EmptySummary,
}
