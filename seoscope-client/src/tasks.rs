//! Task-related API endpoints

use tracing::debug;

use crate::BackendClient;
use crate::error::{ClientError, Result};
use seoscope_core::domain::task::TaskId;
use seoscope_core::dto::analyze::{AnalyzeRequest, AnalyzeResponse};
use seoscope_core::dto::log::LogSnapshot;
use seoscope_core::dto::result::ResultEnvelope;

impl BackendClient {
    /// Submit a site URL for analysis
    ///
    /// The URL is forwarded to the backend as-is; validation is the
    /// backend's responsibility.
    ///
    /// # Arguments
    /// * `url` - The site URL to analyze
    ///
    /// # Returns
    /// The id of the newly created task
    ///
    /// # Errors
    /// [`ClientError::Rejected`] when the backend answers with a structured
    /// `{"error": ...}` payload, [`ClientError::RequestFailed`] on
    /// transport failures.
    ///
    /// # Example
    /// ```no_run
    /// # use seoscope_client::BackendClient;
    /// # async fn example() -> anyhow::Result<()> {
    /// let client = BackendClient::new("http://localhost:8000");
    /// let task_id = client.submit_analysis("https://example.com").await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn submit_analysis(&self, url: &str) -> Result<TaskId> {
        let endpoint = format!("{}/analyze", self.base_url);
        debug!("submitting analysis request for {url}");

        let response = self
            .client
            .post(&endpoint)
            .json(&AnalyzeRequest {
                url: url.to_string(),
            })
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        // Rejections arrive as a structured {"error": ...} payload, usually
        // on a 4xx status. Decode before checking the status code so the
        // backend's message survives verbatim.
        match serde_json::from_str::<AnalyzeResponse>(&body) {
            Ok(AnalyzeResponse::Accepted { task_id }) => Ok(task_id),
            Ok(AnalyzeResponse::Rejected { error }) => Err(ClientError::Rejected(error)),
            Err(_) if !status.is_success() => Err(ClientError::api_error(status.as_u16(), body)),
            Err(e) => Err(ClientError::ParseError(format!(
                "unexpected analyze response: {}",
                e
            ))),
        }
    }

    /// Fetch the current log snapshot for a task
    ///
    /// # Arguments
    /// * `task_id` - The task id
    ///
    /// # Returns
    /// The complete progress log so far, together with the task status
    pub async fn fetch_log(&self, task_id: &TaskId) -> Result<LogSnapshot> {
        let endpoint = format!("{}/log/{}", self.base_url, task_id);
        let response = self.client.get(&endpoint).send().await?;

        self.handle_response(response).await
    }

    /// Fetch the final result for a task
    ///
    /// The envelope's `result` is `None` until the backend has produced
    /// one; failed tasks may never populate it.
    ///
    /// # Arguments
    /// * `task_id` - The task id
    pub async fn fetch_result(&self, task_id: &TaskId) -> Result<ResultEnvelope> {
        let endpoint = format!("{}/result/{}", self.base_url, task_id);
        let response = self.client.get(&endpoint).send().await?;

        self.handle_response(response).await
    }
}
