use std::sync::Arc;

use crate::domain::entity::ProgressPercent;
use crate::domain::outbound::ReportPort;
use crate::tracing_report;

/// Smallest advance in watched percentage that triggers a report.
const REPORT_STEP: u8 = 10;

/// Forwards lecture progress updates to a [`ReportPort`], throttled so that
/// only every [`REPORT_STEP`] percent of new progress is delivered.
///
/// Delivery is fire-and-forget: a failed report is logged and dropped, and
/// the throttle still advances, matching the page's best-effort semantics.
pub struct ProgressTracker {
    reporter: Arc<dyn ReportPort>,
    last_reported: u8,
}

impl ProgressTracker {
    /// Creates a new [`ProgressTracker`] with no progress reported yet.
    pub fn new(reporter: Arc<dyn ReportPort>) -> Self {
        Self {
            reporter,
            last_reported: 0,
        }
    }

    /// Record the latest watched percentage, reporting it if it advanced far
    /// enough past the previously reported one.
    pub async fn update(&mut self, progress: ProgressPercent) {
        let advance = progress.value().saturating_sub(self.last_reported);
        if advance < REPORT_STEP {
            return;
        }

        self.last_reported = progress.value();
        if let Err(err) = self.reporter.report(&progress).await {
            tracing_report!(err);
        }
    }

    /// The last percentage that was forwarded to the reporter.
    pub fn last_reported(&self) -> u8 {
        self.last_reported
    }
}
