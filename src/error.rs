//! Domain-specific error types for career-roadmap

use thiserror::Error;

/// Main error type for the AI services and backend clients
#[derive(Error, Debug)]
pub enum CareerError {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("HTTP request failed: {message}")]
    Http { message: String },

    #[error("Connection error: {message}")]
    Connection { message: String },

    #[error("Server returned {status}: {body}")]
    Api { status: u16, body: String },

    #[error("Authentication failed ({status}): {body}")]
    Auth { status: u16, body: String },

    #[error("Rate limited: {body}")]
    RateLimited { body: String },

    #[error("Invalid response: {message}")]
    InvalidResponse { message: String },

    #[error("Serialization error: {message}")]
    Serialization { message: String },

    #[error("I/O error: {message}")]
    Io { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl CareerError {
    pub fn config(message: impl Into<String>) -> Self {
        CareerError::Config {
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        CareerError::Validation {
            message: message.into(),
        }
    }

    pub fn invalid_response(message: impl Into<String>) -> Self {
        CareerError::InvalidResponse {
            message: message.into(),
        }
    }
}

impl From<anyhow::Error> for CareerError {
    fn from(err: anyhow::Error) -> Self {
        CareerError::Internal {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for CareerError {
    fn from(err: serde_json::Error) -> Self {
        CareerError::Serialization {
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for CareerError {
    fn from(err: toml::de::Error) -> Self {
        CareerError::Config {
            message: format!("Invalid config file: {}", err),
        }
    }
}

impl From<std::io::Error> for CareerError {
    fn from(err: std::io::Error) -> Self {
        CareerError::Io {
            message: err.to_string(),
        }
    }
}

impl From<reqwest::Error> for CareerError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_connect() {
            CareerError::Connection {
                message: err.to_string(),
            }
        } else if err.is_decode() {
            CareerError::InvalidResponse {
                message: format!("Failed to decode response body: {}", err),
            }
        } else {
            CareerError::Http {
                message: err.to_string(),
            }
        }
    }
}

/// Result type alias for career-roadmap operations
pub type Result<T> = std::result::Result<T, CareerError>;
