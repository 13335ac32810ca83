use std::error::Error as StdError;

use snafu::prelude::*;

use crate::domain::entity::display::RemainingTime;
use crate::domain::entity::progress::ProgressPercent;

/// A public port for rendering the countdown to its display target.
#[async_trait::async_trait]
pub trait DisplayPort: Send + Sync + 'static {
    /// Do the render operation. This method is not intended to be
    /// implemented by adapters directly.
    ///
    /// # Errors
    ///
    /// This function will return an error if failed to update the display.
    async fn render(&self, time: &RemainingTime) -> Result<(), RenderError> {
        self.render_impl(time.to_string()).await
    }

    /// Actual implementation of the render operation, receiving the
    /// formatted `MM:SS` text.
    ///
    /// # Errors
    ///
    /// This function will return an error if failed to update the display.
    async fn render_impl(&self, text: String) -> Result<(), RenderError>;

    /// Apply the persistent low-time warning marker to the display's
    /// container. Called on every tick once remaining time is low, so
    /// implementations must tolerate reapplication.
    ///
    /// # Errors
    ///
    /// This function will return an error if failed to update the display.
    async fn mark_warning(&self) -> Result<(), RenderError>;
}

/// An error type of the render operation.
#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum RenderError {
    #[snafu(whatever, display("Could not update the display: {message}"))]
    Unknown {
        message: String,
        #[snafu(source(from(Box<dyn StdError>, Some)))]
        source: Option<Box<dyn StdError>>,
    },
}

/// A public port for delivering a lecture progress report.
#[async_trait::async_trait]
pub trait ReportPort: Send + Sync + 'static {
    /// Do the report operation. This method is not intended to be
    /// implemented by adapters directly.
    ///
    /// # Errors
    ///
    /// This function will return an error if failed to deliver the report.
    async fn report(&self, progress: &ProgressPercent) -> Result<(), ReportError> {
        let request = ReportRequest {
            progress: progress.value(),
        };
        self.report_impl(request).await
    }

    /// Actual implementation of the report operation.
    ///
    /// # Errors
    ///
    /// This function will return an error if failed to deliver the report.
    async fn report_impl(&self, request: ReportRequest) -> Result<(), ReportError>;
}

/// A structure that stores required data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRequest {
    pub progress: u8,
}

/// An error type of the report operation.
#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum ReportError {
    #[snafu(whatever, display("Could not deliver a progress report: {message}"))]
    Unknown {
        message: String,
        #[snafu(source(from(Box<dyn StdError>, Some)))]
        source: Option<Box<dyn StdError>>,
    },
}

/// A public port for retrieving the request authentication token attached to
/// progress reports.
pub trait TokenPort: Send + Sync + 'static {
    /// Get the current token, if one is available.
    fn token(&self) -> Option<String>;
}
