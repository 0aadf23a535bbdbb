use reqwest::Client;
use serde_json::Value;
use tracing::{info, warn};

use crate::error::BackendError;
use crate::models::ApplicationPayload;

pub const SUBMIT_PATH: &str = "/application/formsubmit";

/// Posts finished applications to the backend. Public endpoint, no auth.
#[derive(Clone)]
pub struct IntakeClient {
    client: Client,
    submit_url: String,
}

impl IntakeClient {
    pub fn new(backend_url: &str) -> Self {
        Self {
            client: Client::new(),
            submit_url: format!("{}{}", backend_url, SUBMIT_PATH),
        }
    }

    /// One POST, no retry. The backend's JSON body is returned on 2xx; any
    /// other status becomes [`BackendError::Rejected`] carrying its `message`.
    pub async fn submit(&self, payload: &ApplicationPayload) -> Result<Value, BackendError> {
        let response = self.client.post(&self.submit_url).json(payload).send().await?;
        let status = response.status();
        let text = response.text().await?;
        let body: Value = serde_json::from_str(&text)?;

        if !status.is_success() {
            let message = body
                .get("message")
                .and_then(Value::as_str)
                .map(str::to_string);
            warn!(%status, ?message, "application submission rejected");
            return Err(BackendError::Rejected { status, message });
        }

        info!(%status, category = %payload.loan_category, "application submitted");
        Ok(body)
    }
}
