use async_trait::async_trait;
use lookbook::Identifier;
use serde::{Deserialize, Serialize};

use crate::FetchError;

/// Body of `POST /search`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRequest {
    pub query: String,
    pub top_k: u32,
    /// 1-based.
    pub page: u32,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResponse {
    pub results: Vec<Identifier>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendInfo {
    pub name: String,
    pub endpoint: String,
}

/// The ranked-search endpoint. Ranking is entirely its business.
#[async_trait]
pub trait SearchBackend: Send + Sync {
    async fn search(&self, request: &SearchRequest) -> Result<SearchResponse, FetchError>;
    fn info(&self) -> BackendInfo;
}
