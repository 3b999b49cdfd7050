use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::error::{CareerError, Result};

pub const DEFAULT_CONFIG_PATH: &str = "career_roadmap.toml";
pub const DEFAULT_AI_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_AI_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_BACKEND_BASE_URL: &str = "http://localhost:5000/api";
/// Tracing filter used when CAREER_LOG is unset
pub const DEFAULT_LOG_FILTER: &str = "career_roadmap=info";

/// Main configuration structure loaded from career_roadmap.toml and environment variables
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub ai: AiConfig,
    pub backend: BackendConfig,
}

/// Chat-completions provider used by the AI services client
#[derive(Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AiConfig {
    pub base_url: String,
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
    pub timeout_ms: u64,
    /// Only ever read from the environment (OPENAI_API_KEY)
    #[serde(skip)]
    pub api_key: Option<String>,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_AI_BASE_URL.to_string(),
            model: DEFAULT_AI_MODEL.to_string(),
            temperature: 0.7,
            max_tokens: 1500,
            timeout_ms: 60_000,
            api_key: None,
        }
    }
}

impl fmt::Debug for AiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AiConfig")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("temperature", &self.temperature)
            .field("max_tokens", &self.max_tokens)
            .field("timeout_ms", &self.timeout_ms)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

/// Career-roadmap REST backend
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct BackendConfig {
    pub base_url: String,
    pub timeout_ms: u64,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BACKEND_BASE_URL.to_string(),
            timeout_ms: 30_000,
        }
    }
}

impl Config {
    /// Load configuration from TOML file and environment variables.
    /// Uses CAREER_ROADMAP_CONFIG or defaults to "career_roadmap.toml"; a missing file means defaults.
    /// Call `crate::load_env()` first so `.env` values are visible.
    pub fn load() -> Result<Self> {
        let config_path = std::env::var("CAREER_ROADMAP_CONFIG")
            .unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        Self::load_from_path(Path::new(&config_path), |key| std::env::var(key).ok())
    }

    pub fn load_from_path<F>(config_path: &Path, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let content = match std::fs::read_to_string(config_path) {
            Ok(content) => Some(content),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::warn!(
                    "Config file {} not found, using defaults",
                    config_path.display()
                );
                None
            }
            Err(e) => {
                return Err(CareerError::config(format!(
                    "Failed to read config file {}: {}",
                    config_path.display(),
                    e
                )));
            }
        };

        Self::from_sources(content.as_deref(), lookup)
    }

    /// Build a configuration from optional TOML text and an environment lookup (env wins).
    pub fn from_sources<F>(toml_text: Option<&str>, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config: Config = match toml_text {
            Some(text) => toml::from_str(text)?,
            None => Self::default(),
        };

        config.ai.api_key = lookup("OPENAI_API_KEY")
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty());

        if let Some(url) = lookup("CAREER_AI_BASE_URL") {
            config.ai.base_url = url;
            tracing::debug!("CAREER_AI_BASE_URL env override applied");
        }
        if let Some(model) = lookup("CAREER_AI_MODEL") {
            config.ai.model = model;
        }
        if let Some(t) = parse_env::<f32, _>(&lookup, "CAREER_AI_TEMPERATURE") {
            config.ai.temperature = t;
        }
        if let Some(n) = parse_env::<u32, _>(&lookup, "CAREER_AI_MAX_TOKENS") {
            config.ai.max_tokens = n;
        }
        if let Some(ms) = parse_env::<u64, _>(&lookup, "CAREER_AI_TIMEOUT_MS") {
            config.ai.timeout_ms = ms;
        }
        if let Some(url) = lookup("CAREER_API_BASE_URL") {
            config.backend.base_url = url;
            tracing::debug!("CAREER_API_BASE_URL env override applied");
        }
        if let Some(ms) = parse_env::<u64, _>(&lookup, "CAREER_API_TIMEOUT_MS") {
            config.backend.timeout_ms = ms;
        }

        config.validate()?;
        Ok(config)
    }

    fn validate(&mut self) -> Result<()> {
        self.ai.base_url = normalize_base_url("ai.base_url", &self.ai.base_url)?;
        self.backend.base_url = normalize_base_url("backend.base_url", &self.backend.base_url)?;

        if !self.ai.temperature.is_finite() {
            return Err(CareerError::config(format!(
                "ai.temperature must be a finite number, got {}",
                self.ai.temperature
            )));
        }
        if !(0.0..=2.0).contains(&self.ai.temperature) {
            let clamped = self.ai.temperature.clamp(0.0, 2.0);
            tracing::warn!(
                "temperature {} outside 0.0..=2.0, clamping to {}",
                self.ai.temperature,
                clamped
            );
            self.ai.temperature = clamped;
        }
        if self.ai.max_tokens == 0 {
            return Err(CareerError::config("ai.max_tokens must be at least 1"));
        }
        if self.ai.timeout_ms == 0 || self.backend.timeout_ms == 0 {
            return Err(CareerError::config("timeout_ms must be greater than 0"));
        }
        Ok(())
    }
}

fn normalize_base_url(field: &str, url: &str) -> Result<String> {
    let url = url.trim();
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(CareerError::config(format!(
            "{} '{}' must start with http:// or https://",
            field, url
        )));
    }
    Ok(url.trim_end_matches('/').to_string())
}

fn parse_env<T, F>(lookup: &F, key: &str) -> Option<T>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    let raw = lookup(key)?;
    match raw.trim().parse::<T>() {
        Ok(v) => Some(v),
        Err(_) => {
            tracing::warn!("Ignoring unparseable {}={:?}", key, raw);
            None
        }
    }
}
