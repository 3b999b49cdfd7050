//! AiServices over the OpenAI-compatible client, driven end to end by the smoke runner

use httpmock::prelude::*;
use serde_json::json;

use career_roadmap::config::AiConfig;
use career_roadmap::prompts;
use career_roadmap::{AiServices, CareerError, CareerInsights, SmokeParams, run_smoke_test};

fn config_for(server: &MockServer) -> AiConfig {
    AiConfig {
        base_url: server.base_url(),
        model: "gpt-test".into(),
        temperature: 0.2,
        max_tokens: 300,
        timeout_ms: 5_000,
        api_key: Some("sk-test".into()),
    }
}

fn completion(content: &str) -> serde_json::Value {
    json!({
        "id": "chatcmpl-1",
        "object": "chat.completion",
        "choices": [{"index": 0, "message": {"role": "assistant", "content": content}}]
    })
}

#[tokio::test]
async fn test_smoke_run_against_chat_endpoint() {
    let server = MockServer::start_async().await;
    let content = r#"{"market_overview": "strong demand", "core_analysis": "on track", "work_life_balance": "balanced"}"#;
    server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/chat/completions")
                .header("authorization", "Bearer sk-test");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(completion(content));
        })
        .await;

    let services = AiServices::new(&config_for(&server)).unwrap();
    let mut out = Vec::new();
    run_smoke_test(&services, &SmokeParams::default(), &mut out)
        .await
        .unwrap();
    let output = String::from_utf8(out).unwrap();

    assert_eq!(output.matches("successful!").count(), 5);
    assert!(output.contains("Market overview: strong demand"));
    assert!(output.contains("Core analysis: on track"));
    assert!(output.contains("Work-life balance: balanced"));
}

#[tokio::test]
async fn test_prose_reply_reports_soft_failures() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/chat/completions");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(completion("Sorry, I can't produce JSON today."));
        })
        .await;

    let services = AiServices::new(&config_for(&server)).unwrap();
    let mut out = Vec::new();
    run_smoke_test(&services, &SmokeParams::default(), &mut out)
        .await
        .unwrap();
    let output = String::from_utf8(out).unwrap();

    assert_eq!(output.matches("failed!").count(), 5);
    assert!(!output.contains("successful!"));
}

#[tokio::test]
async fn test_provider_outage_aborts_run_after_first_step() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/chat/completions");
            then.status(503).body("overloaded");
        })
        .await;

    let services = AiServices::new(&config_for(&server)).unwrap();
    let mut out = Vec::new();
    let err = run_smoke_test(&services, &SmokeParams::default(), &mut out)
        .await
        .unwrap_err();
    let output = String::from_utf8(out).unwrap();

    assert!(matches!(err, CareerError::Api { status: 503, .. }));
    assert!(output.ends_with("Testing market analysis...\n"));
}

#[tokio::test]
async fn test_prompt_carries_capability_inputs() {
    let server = MockServer::start_async().await;
    let prompt = prompts::JOB_POSTINGS
        .render(&[("role", "Software Engineer"), ("location", "San Francisco")])
        .unwrap();
    assert!(prompt.contains("San Francisco"));
    let mock = server
        .mock_async(|when, then| {
            when.method(POST).path("/chat/completions").json_body(json!({
                "model": "gpt-test",
                "messages": [
                    {"role": "system", "content": prompts::SYSTEM_PROMPT},
                    {"role": "user", "content": prompt}
                ],
                "temperature": 0.2,
                "max_tokens": 300
            }));
            then.status(200)
                .header("content-type", "application/json")
                .json_body(completion(r#"{"market_overview": {"posting_volume": "high"}}"#));
        })
        .await;

    let services = AiServices::new(&config_for(&server)).unwrap();
    let insight = services
        .research_job_postings("Software Engineer", "San Francisco")
        .await
        .unwrap()
        .unwrap();

    mock.assert_async().await;
    assert_eq!(insight["market_overview"]["posting_volume"], "high");
}
