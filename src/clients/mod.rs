pub mod openai;
pub mod traits;

pub use openai::OpenAiClient;
pub use traits::{ChatBackend, ChatRequest};

use crate::error::CareerError;
use crate::parsing::truncate_chars;

const ERROR_BODY_MAX_CHARS: usize = 500;

/// Map a non-success HTTP status from the chat provider to the matching error.
pub fn http_status_error(status: u16, body: &str, context: &str) -> CareerError {
    let body = truncate_chars(body.trim(), ERROR_BODY_MAX_CHARS);
    tracing::warn!("{} failed with HTTP {}: {}", context, status, body);
    match status {
        401 | 403 => CareerError::Auth { status, body },
        429 => CareerError::RateLimited { body },
        _ => CareerError::Api { status, body },
    }
}
