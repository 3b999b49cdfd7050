//! Pulling structured JSON out of free-form model replies

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{Map, Value};

static FENCE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)```[A-Za-z0-9_-]*\s*\n?(.*?)```").expect("fence regex should compile")
});

/// Extract a JSON object from model output.
///
/// Accepts a bare object, an object inside a Markdown code fence, or an object
/// embedded in surrounding prose. When several balanced objects appear, the last
/// one that parses wins. Arrays and scalars are rejected.
pub fn extract_json_object(text: &str) -> Option<Map<String, Value>> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Some(obj) = parse_object(trimmed) {
        return Some(obj);
    }

    if let Some(caps) = FENCE_RE.captures(trimmed)
        && let Some(inner) = caps.get(1)
        && let Some(obj) = parse_object(inner.as_str().trim())
    {
        return Some(obj);
    }

    json_candidates(trimmed)
        .iter()
        .rev()
        .find_map(|candidate| parse_object(candidate))
}

fn parse_object(text: &str) -> Option<Map<String, Value>> {
    match serde_json::from_str::<Value>(text) {
        Ok(Value::Object(map)) => Some(map),
        _ => None,
    }
}

/// Balanced top-level `{...}` spans, skipping braces inside string literals.
fn json_candidates(text: &str) -> Vec<&str> {
    let mut candidates = Vec::new();
    let mut depth: u32 = 0;
    let mut start: Option<usize> = None;
    let mut in_string = false;
    let mut escape = false;

    for (idx, ch) in text.char_indices() {
        if in_string {
            if escape {
                escape = false;
                continue;
            }
            match ch {
                '\\' => escape = true,
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }

        match ch {
            '"' if depth > 0 => in_string = true,
            '{' => {
                if depth == 0 {
                    start = Some(idx);
                }
                depth += 1;
            }
            '}' => {
                if depth > 0 {
                    depth -= 1;
                    if depth == 0
                        && let Some(s) = start.take()
                    {
                        candidates.push(&text[s..=idx]);
                    }
                }
            }
            _ => {}
        }
    }

    candidates
}

/// Truncate to `max` characters, appending "..." when anything was cut.
pub fn truncate_chars(input: &str, max: usize) -> String {
    let mut out = String::new();
    for (idx, ch) in input.chars().enumerate() {
        if idx >= max {
            out.push_str("...");
            break;
        }
        out.push(ch);
    }
    out
}
