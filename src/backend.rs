//! Client for the career-roadmap REST backend

use std::time::Duration;

use reqwest::{Client, Method};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use crate::config::BackendConfig;
use crate::error::{CareerError, Result};

pub const DEFAULT_EXPERIENCE_LEVEL: &str = "entry";

/// Input for roadmap generation; optional fields get defaults when cleaned.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RoadmapRequest {
    pub job_role: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experience_level: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
}

/// The body actually sent to `/roadmap/generate`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CleanedRoadmapRequest {
    pub job_role: String,
    pub experience_level: String,
    pub location: String,
    pub industry: String,
}

impl RoadmapRequest {
    pub fn new(job_role: impl Into<String>) -> Self {
        Self {
            job_role: job_role.into(),
            ..Self::default()
        }
    }

    /// Trim the role (required), default the experience level, blank the rest.
    pub fn clean(&self) -> Result<CleanedRoadmapRequest> {
        let job_role = self.job_role.trim();
        if job_role.is_empty() {
            return Err(CareerError::validation("Job role is required"));
        }
        let experience_level = self
            .experience_level
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(DEFAULT_EXPERIENCE_LEVEL);

        Ok(CleanedRoadmapRequest {
            job_role: job_role.to_string(),
            experience_level: experience_level.to_string(),
            location: self.location.clone().unwrap_or_default(),
            industry: self.industry.clone().unwrap_or_default(),
        })
    }
}

pub struct RoadmapApi {
    client: Client,
    base_url: String,
}

impl RoadmapApi {
    pub fn new(config: &BackendConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| CareerError::Internal {
                message: format!("Failed to build HTTP client: {}", e),
            })?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn check_health(&self) -> Result<Value> {
        self.request(Method::GET, "/health", None).await
    }

    pub async fn generate_roadmap(&self, request: &RoadmapRequest) -> Result<Value> {
        let cleaned = request.clean()?;
        let body = serde_json::to_value(&cleaned)?;
        let response = self.request(Method::POST, "/roadmap/generate", Some(&body)).await?;

        match response.get("roadmap") {
            Some(roadmap) if is_truthy(roadmap) => Ok(response),
            _ => Err(CareerError::invalid_response(
                "Invalid response format from server: missing 'roadmap'",
            )),
        }
    }

    pub async fn interview_questions(&self, data: &Value) -> Result<Value> {
        self.request(Method::POST, "/interview/questions", Some(data))
            .await
    }

    pub async fn interview_feedback(&self, data: &Value) -> Result<Value> {
        self.request(Method::POST, "/interview/feedback", Some(data))
            .await
    }

    pub async fn analyze_skills(&self, data: &Value) -> Result<Value> {
        self.request(Method::POST, "/skills/analyze", Some(data)).await
    }

    pub async fn resume_tips(&self, data: &Value) -> Result<Value> {
        self.request(Method::POST, "/resume/tips", Some(data)).await
    }

    async fn request(&self, method: Method, endpoint: &str, data: Option<&Value>) -> Result<Value> {
        let url = format!("{}{}", self.base_url, endpoint);
        debug!("Making request to: {} {}", method, url);

        let mut builder = self
            .client
            .request(method.clone(), &url)
            .header("Content-Type", "application/json")
            .header("Accept", "application/json");
        if let Some(data) = data
            && method != Method::GET
        {
            debug!("Request data: {}", data);
            builder = builder.json(data);
        }

        let resp = builder.send().await.map_err(|e| {
            if e.is_connect() {
                CareerError::Connection {
                    message: format!(
                        "Unable to connect to the server. Please ensure the backend is running at {}",
                        self.base_url
                    ),
                }
            } else {
                CareerError::from(e)
            }
        })?;

        let status = resp.status();
        debug!("Response status: {}", status);
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            warn!("{} failed with HTTP {}", endpoint, status);
            return Err(CareerError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let payload: Value = resp.json().await?;
        debug!("Response data: {}", payload);
        Ok(payload)
    }
}

/// Null, `false`, zero and `""` count as absent.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
