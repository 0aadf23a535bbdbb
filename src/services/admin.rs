use reqwest::{Client, Response, StatusCode};
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::error::BackendError;
use crate::models::Application;
use crate::session::BearerToken;

pub const APPLICATIONS_PATH: &str = "/api/applications";

pub struct PdfDocument {
    pub filename: String,
    pub bytes: Vec<u8>,
}

pub fn pdf_filename(id: &str) -> String {
    format!("application_{}.pdf", id)
}

/// Bearer-authenticated calls against the backend's application store.
#[derive(Clone)]
pub struct AdminClient {
    client: Client,
    applications_url: String,
}

impl AdminClient {
    pub fn new(backend_url: &str) -> Self {
        Self {
            client: Client::new(),
            applications_url: format!("{}{}", backend_url, APPLICATIONS_PATH),
        }
    }

    pub async fn list(&self, token: &BearerToken) -> Result<Vec<Application>, BackendError> {
        let response = self
            .client
            .get(&self.applications_url)
            .bearer_auth(token.as_str())
            .send()
            .await?;
        let text = check(response).await?.text().await?;
        let applications: Vec<Application> = serde_json::from_str(&text)?;
        debug!(count = applications.len(), "fetched applications");
        Ok(applications)
    }

    pub async fn delete(&self, token: &BearerToken, id: &str) -> Result<(), BackendError> {
        let url = format!("{}/{}", self.applications_url, id);
        let response = self
            .client
            .delete(&url)
            .bearer_auth(token.as_str())
            .send()
            .await?;
        check(response).await?;
        info!(%id, "application deleted");
        Ok(())
    }

    pub async fn fetch_pdf(&self, token: &BearerToken, id: &str) -> Result<PdfDocument, BackendError> {
        let url = format!("{}/{}/pdf", self.applications_url, id);
        let response = self
            .client
            .get(&url)
            .bearer_auth(token.as_str())
            .send()
            .await?;
        let bytes = check(response).await?.bytes().await?;
        Ok(PdfDocument {
            filename: pdf_filename(id),
            bytes: bytes.to_vec(),
        })
    }
}

async fn check(response: Response) -> Result<Response, BackendError> {
    let status = response.status();
    if status == StatusCode::UNAUTHORIZED {
        warn!("backend rejected admin token");
        return Err(BackendError::Unauthorized);
    }
    if !status.is_success() {
        let message = response
            .json::<Value>()
            .await
            .ok()
            .and_then(|body| body.get("message").and_then(Value::as_str).map(str::to_string));
        warn!(%status, ?message, "admin request failed");
        return Err(BackendError::Rejected { status, message });
    }
    Ok(response)
}
