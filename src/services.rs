//! AI services client: the five career insight capabilities
//!
//! A capability call has three outcomes:
//! - `Ok(Some(insight))`: the model returned a non-empty JSON object.
//! - `Ok(None)`: soft failure. The reply was empty, held no JSON object, or held `{}`.
//! - `Err(_)`: hard failure. Transport, HTTP status, or response-shape errors from the backend.

use async_trait::async_trait;
use serde_json::{Map, Value};
use tracing::{debug, info, warn};

use crate::clients::{ChatBackend, ChatRequest, OpenAiClient};
use crate::config::AiConfig;
use crate::error::Result;
use crate::parsing::{extract_json_object, truncate_chars};
use crate::prompts::{self, Prompt, SYSTEM_PROMPT};

/// JSON mapping returned by a capability
pub type Insight = Map<String, Value>;

#[async_trait]
pub trait CareerInsights: Send + Sync {
    async fn analyze_job_market(&self, role: &str, company: &str) -> Result<Option<Insight>>;

    async fn generate_career_plan(
        &self,
        role: &str,
        experience_level: &str,
    ) -> Result<Option<Insight>>;

    async fn analyze_company_culture(&self, company: &str) -> Result<Option<Insight>>;

    async fn analyze_industry_trends(&self, role: &str) -> Result<Option<Insight>>;

    async fn research_job_postings(&self, role: &str, location: &str)
    -> Result<Option<Insight>>;
}

pub struct AiServices<B: ChatBackend = OpenAiClient> {
    backend: B,
    temperature: f32,
    max_tokens: u32,
}

impl AiServices<OpenAiClient> {
    /// Build the client against the configured chat-completions provider.
    pub fn new(config: &AiConfig) -> Result<Self> {
        let backend = OpenAiClient::new(config)?;
        info!(
            "AI services ready (model={}, base_url={})",
            config.model, config.base_url
        );
        Ok(Self::with_backend(backend, config))
    }
}

impl<B: ChatBackend> AiServices<B> {
    pub fn with_backend(backend: B, config: &AiConfig) -> Self {
        Self {
            backend,
            temperature: config.temperature,
            max_tokens: config.max_tokens,
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    async fn run_prompt(&self, prompt: &Prompt, values: &[(&str, &str)]) -> Result<Option<Insight>> {
        debug!("{}: {} (model={})", prompt.id, prompt.one_liner, self.backend.model());
        let request = ChatRequest {
            system: SYSTEM_PROMPT.to_string(),
            prompt: prompt.render(values)?,
            temperature: self.temperature,
            max_tokens: self.max_tokens,
        };

        let reply = self.backend.complete(&request).await?;
        if reply.trim().is_empty() {
            warn!("{}: model returned an empty reply", prompt.id);
            return Ok(None);
        }

        match extract_json_object(&reply) {
            Some(insight) if !insight.is_empty() => {
                info!(
                    "{}: parsed insight with {} top-level keys",
                    prompt.id,
                    insight.len()
                );
                Ok(Some(insight))
            }
            Some(_) => {
                warn!("{}: model returned an empty JSON object", prompt.id);
                Ok(None)
            }
            None => {
                warn!(
                    "{}: no JSON object in model reply: {}",
                    prompt.id,
                    truncate_chars(reply.trim(), 200)
                );
                Ok(None)
            }
        }
    }
}

#[async_trait]
impl<B: ChatBackend> CareerInsights for AiServices<B> {
    async fn analyze_job_market(&self, role: &str, company: &str) -> Result<Option<Insight>> {
        self.run_prompt(&prompts::JOB_MARKET, &[("role", role), ("company", company)])
            .await
    }

    async fn generate_career_plan(
        &self,
        role: &str,
        experience_level: &str,
    ) -> Result<Option<Insight>> {
        self.run_prompt(
            &prompts::CAREER_PLAN,
            &[("role", role), ("experience_level", experience_level)],
        )
        .await
    }

    async fn analyze_company_culture(&self, company: &str) -> Result<Option<Insight>> {
        self.run_prompt(&prompts::COMPANY_CULTURE, &[("company", company)])
            .await
    }

    async fn analyze_industry_trends(&self, role: &str) -> Result<Option<Insight>> {
        self.run_prompt(&prompts::INDUSTRY_TRENDS, &[("role", role)])
            .await
    }

    async fn research_job_postings(
        &self,
        role: &str,
        location: &str,
    ) -> Result<Option<Insight>> {
        self.run_prompt(&prompts::JOB_POSTINGS, &[("role", role), ("location", location)])
            .await
    }
}
