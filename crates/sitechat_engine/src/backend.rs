use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::{BackendError, QueryAnswer};

#[derive(Debug, Clone)]
pub struct BackendSettings {
    pub base_url: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl Default for BackendSettings {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
        }
    }
}

impl BackendSettings {
    fn ingest_url(&self) -> String {
        format!("{}/api/v1/scrape/", self.base_url.trim_end_matches('/'))
    }

    fn ask_url(&self) -> String {
        format!("{}/api/v1/ask/", self.base_url.trim_end_matches('/'))
    }
}

#[derive(Debug, Serialize)]
struct IngestRequest<'a> {
    url: &'a str,
}

#[derive(Debug, Serialize)]
struct AskRequest<'a> {
    question: &'a str,
}

// The backend sends more fields (e.g. the detected intent); only the answer
// matters to the client.
#[derive(Debug, Deserialize)]
struct AskResponse {
    answer: Option<String>,
}

#[async_trait::async_trait]
pub trait Backend: Send + Sync {
    async fn ingest(&self, url: &str) -> Result<(), BackendError>;
    async fn ask(&self, question: &str) -> Result<QueryAnswer, BackendError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestBackend {
    client: reqwest::Client,
    settings: BackendSettings,
}

impl ReqwestBackend {
    pub fn new(settings: BackendSettings) -> Result<Self, BackendError> {
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| BackendError::Network(err.to_string()))?;
        Ok(Self { client, settings })
    }
}

#[async_trait::async_trait]
impl Backend for ReqwestBackend {
    async fn ingest(&self, url: &str) -> Result<(), BackendError> {
        let response = self
            .client
            .post(self.settings.ingest_url())
            .json(&IngestRequest { url })
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(BackendError::HttpStatus(status.as_u16()));
        }
        // A 2xx body is opaque to the client.
        Ok(())
    }

    async fn ask(&self, question: &str) -> Result<QueryAnswer, BackendError> {
        let response = self
            .client
            .post(self.settings.ask_url())
            .json(&AskRequest { question })
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(BackendError::HttpStatus(status.as_u16()));
        }

        let body: AskResponse = response.json().await.map_err(|err| {
            if err.is_timeout() {
                BackendError::Timeout
            } else {
                BackendError::InvalidResponse(err.to_string())
            }
        })?;

        Ok(QueryAnswer {
            answer: body.answer,
        })
    }
}

fn map_reqwest_error(err: reqwest::Error) -> BackendError {
    if err.is_timeout() {
        return BackendError::Timeout;
    }
    BackendError::Network(err.to_string())
}
