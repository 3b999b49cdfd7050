use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// A single system + user exchange sent to a chat model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub system: String,
    pub prompt: String,
    pub temperature: f32,
    pub max_tokens: u32,
}

#[async_trait]
pub trait ChatBackend: Send + Sync {
    /// Returns the assistant message text for `request`.
    async fn complete(&self, request: &ChatRequest) -> Result<String>;

    fn model(&self) -> &str;
}
