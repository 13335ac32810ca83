use std::sync::Arc;

use snafu::prelude::*;

use crate::domain::outbound::{ReportError, ReportPort, ReportRequest, TokenPort};

/// Header carrying the anti-forgery token expected by the endpoint.
const TOKEN_HEADER: &str = "X-CSRFToken";

/// A [`ReportPort`] adapter delivering progress as a form-encoded POST.
pub struct HttpReportService {
    client: reqwest::Client,
    endpoint: String,
    tokens: Arc<dyn TokenPort>,
}

impl HttpReportService {
    /// Creates a new [`HttpReportService`] posting to the given endpoint.
    pub fn new(endpoint: String, tokens: Arc<dyn TokenPort>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint,
            tokens,
        }
    }
}

#[async_trait::async_trait]
impl ReportPort for HttpReportService {
    async fn report_impl(&self, request: ReportRequest) -> Result<(), ReportError> {
        let mut delivery = self
            .client
            .post(&self.endpoint)
            .form(&[("progress", request.progress.to_string())]);

        if let Some(token) = self.tokens.token() {
            delivery = delivery.header(TOKEN_HEADER, token);
        }

        // Fire-and-forget: the response is not consumed.
        let _ = whatever!(
            delivery.send().await,
            "Could not reach the progress endpoint",
        );

        Ok(())
    }
}
