use std::time::Duration;

use async_trait::async_trait;
use feed::{BackendInfo, FetchError, SearchBackend, SearchRequest, SearchResponse};

pub struct HttpSearchBackend {
    endpoint: String,
    client: reqwest::Client,
}

impl HttpSearchBackend {
    pub fn new(endpoint: String, timeout: Duration) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { endpoint, client })
    }
}

#[async_trait]
impl SearchBackend for HttpSearchBackend {
    async fn search(&self, request: &SearchRequest) -> Result<SearchResponse, FetchError> {
        let resp = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = resp.bytes().await.map_err(|e| FetchError::Transport(e.to_string()))?;
        serde_json::from_slice(&body).map_err(|e| FetchError::Malformed(e.to_string()))
    }

    fn info(&self) -> BackendInfo {
        BackendInfo {
            name: "http".to_string(),
            endpoint: self.endpoint.clone(),
        }
    }
}
