//! Smoke runner behavior against a recording CareerInsights double

use std::collections::HashSet;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::{Value, json};

use career_roadmap::smoke::SmokeStep;
use career_roadmap::{CareerError, CareerInsights, Insight, Result, SmokeParams, run_smoke_test};

#[derive(Clone, Copy)]
enum Reply {
    Full,
    MissingField,
    EmptyMap,
    Empty,
    Raise,
}

/// Records every call with its arguments; replies per operation name.
struct RecordingClient {
    replies: Vec<(&'static str, Reply)>,
    calls: Mutex<Vec<(&'static str, Vec<String>)>>,
}

impl RecordingClient {
    fn uniform(reply: Reply) -> Self {
        Self::with(&[], reply)
    }

    fn with(overrides: &[(&'static str, Reply)], default: Reply) -> Self {
        let names = [
            "analyze_job_market",
            "generate_career_plan",
            "analyze_company_culture",
            "analyze_industry_trends",
            "research_job_postings",
        ];
        let replies = names
            .iter()
            .map(|name| {
                let reply = overrides
                    .iter()
                    .find(|(n, _)| n == name)
                    .map(|(_, r)| *r)
                    .unwrap_or(default);
                (*name, reply)
            })
            .collect();
        Self {
            replies,
            calls: Mutex::new(Vec::new()),
        }
    }

    fn call_names(&self) -> Vec<&'static str> {
        self.calls.lock().unwrap().iter().map(|(n, _)| *n).collect()
    }

    fn respond(&self, name: &'static str, args: &[&str]) -> Result<Option<Insight>> {
        self.calls
            .lock()
            .unwrap()
            .push((name, args.iter().map(|a| a.to_string()).collect()));

        let reply = self
            .replies
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, r)| *r)
            .unwrap_or(Reply::Empty);

        match reply {
            Reply::Full => {
                let value = json!({
                    "market_overview": {"demand": "high"},
                    "core_analysis": "solid fundamentals",
                    "work_life_balance": {"rating": 4},
                    "extra": [1, 2, 3]
                });
                match value {
                    Value::Object(map) => Ok(Some(map)),
                    _ => unreachable!(),
                }
            }
            Reply::MissingField => {
                let mut map = Insight::new();
                map.insert("unrelated".into(), json!(true));
                Ok(Some(map))
            }
            Reply::EmptyMap => Ok(Some(Insight::new())),
            Reply::Empty => Ok(None),
            Reply::Raise => Err(CareerError::Api {
                status: 500,
                body: format!("{} exploded", name),
            }),
        }
    }
}

#[async_trait]
impl CareerInsights for RecordingClient {
    async fn analyze_job_market(&self, role: &str, company: &str) -> Result<Option<Insight>> {
        self.respond("analyze_job_market", &[role, company])
    }

    async fn generate_career_plan(
        &self,
        role: &str,
        experience_level: &str,
    ) -> Result<Option<Insight>> {
        self.respond("generate_career_plan", &[role, experience_level])
    }

    async fn analyze_company_culture(&self, company: &str) -> Result<Option<Insight>> {
        self.respond("analyze_company_culture", &[company])
    }

    async fn analyze_industry_trends(&self, role: &str) -> Result<Option<Insight>> {
        self.respond("analyze_industry_trends", &[role])
    }

    async fn research_job_postings(
        &self,
        role: &str,
        location: &str,
    ) -> Result<Option<Insight>> {
        self.respond("research_job_postings", &[role, location])
    }
}

async fn run(client: &RecordingClient) -> (Result<()>, String) {
    let mut out = Vec::new();
    let result = run_smoke_test(client, &SmokeParams::default(), &mut out).await;
    (result, String::from_utf8(out).unwrap())
}

#[tokio::test]
async fn test_all_success_prints_each_designated_field() {
    let client = RecordingClient::uniform(Reply::Full);
    let (result, output) = run(&client).await;
    result.unwrap();

    let expected = "Testing API connection...\n\
\n\
Testing market analysis...\n\
Market analysis successful!\n\
Market overview: {\"demand\":\"high\"}\n\
\n\
Testing career plan generation...\n\
Career plan generation successful!\n\
Core analysis: solid fundamentals\n\
\n\
Testing company culture analysis...\n\
Company culture analysis successful!\n\
Work-life balance: {\"rating\":4}\n\
\n\
Testing industry trends analysis...\n\
Industry trends analysis successful!\n\
Market overview: {\"demand\":\"high\"}\n\
\n\
Testing job postings research...\n\
Job postings research successful!\n\
Market overview: {\"demand\":\"high\"}\n";
    assert_eq!(output, expected);
}

#[tokio::test]
async fn test_all_empty_prints_failed_and_does_not_raise() {
    let client = RecordingClient::uniform(Reply::Empty);
    let (result, output) = run(&client).await;
    assert!(result.is_ok());

    for step in SmokeStep::ALL {
        let heading = {
            let mut chars = step.name().chars();
            let first = chars.next().unwrap().to_uppercase().to_string();
            first + chars.as_str()
        };
        assert!(output.contains(&format!("{} failed!", heading)), "{output}");
    }
    assert!(!output.contains("successful!"));
    assert_eq!(client.call_names().len(), 5);
}

#[tokio::test]
async fn test_hard_failure_halts_remaining_steps() {
    let client = RecordingClient::with(&[("generate_career_plan", Reply::Raise)], Reply::Full);
    let (result, output) = run(&client).await;

    let err = result.unwrap_err();
    assert!(err.to_string().contains("generate_career_plan exploded"));
    assert_eq!(
        client.call_names(),
        vec!["analyze_job_market", "generate_career_plan"]
    );
    assert!(output.contains("Market analysis successful!"));
    assert!(output.ends_with("Testing career plan generation...\n"));
    assert!(!output.contains("company culture"));
}

#[tokio::test]
async fn test_calls_use_literal_parameters_in_order() {
    let client = RecordingClient::uniform(Reply::Full);
    run(&client).await.0.unwrap();

    let calls = client.calls.lock().unwrap().clone();
    let expected: Vec<(&str, Vec<String>)> = vec![
        (
            "analyze_job_market",
            vec!["Software Engineer".into(), "Google".into()],
        ),
        (
            "generate_career_plan",
            vec!["Software Engineer".into(), "Mid-level".into()],
        ),
        ("analyze_company_culture", vec!["Google".into()]),
        ("analyze_industry_trends", vec!["Software Engineer".into()]),
        (
            "research_job_postings",
            vec!["Software Engineer".into(), "San Francisco".into()],
        ),
    ];
    assert_eq!(calls, expected);
}

#[tokio::test]
async fn test_repeated_runs_produce_identical_output() {
    let client = RecordingClient::with(
        &[
            ("analyze_company_culture", Reply::Empty),
            ("research_job_postings", Reply::MissingField),
        ],
        Reply::Full,
    );
    let (first, out_a) = run(&client).await;
    let (second, out_b) = run(&client).await;
    first.unwrap();
    second.unwrap();
    assert_eq!(out_a, out_b);
}

#[tokio::test]
async fn test_missing_display_field_prints_empty_mapping() {
    let client = RecordingClient::uniform(Reply::MissingField);
    let (result, output) = run(&client).await;
    result.unwrap();

    assert!(output.contains("Market analysis successful!\nMarket overview: {}\n"));
    assert!(output.contains("Career plan generation successful!\nCore analysis: {}\n"));
    assert!(output.contains("Company culture analysis successful!\nWork-life balance: {}\n"));
}

#[tokio::test]
async fn test_soft_failure_does_not_stop_later_steps() {
    let client = RecordingClient::with(&[("analyze_job_market", Reply::Empty)], Reply::Full);
    let (result, output) = run(&client).await;
    result.unwrap();

    assert!(output.contains("Market analysis failed!"));
    assert!(output.contains("Job postings research successful!"));
    let distinct: HashSet<_> = client.call_names().into_iter().collect();
    assert_eq!(distinct.len(), 5);
}

#[tokio::test]
async fn test_empty_mapping_reported_as_failed_and_run_continues() {
    let client = RecordingClient::with(&[("generate_career_plan", Reply::EmptyMap)], Reply::Full);
    let (result, output) = run(&client).await;
    result.unwrap();

    assert!(output.contains("Testing career plan generation...\nCareer plan generation failed!\n"));
    assert!(!output.contains("Career plan generation successful!"));
    assert!(!output.contains("Core analysis:"));
    assert!(output.contains("Company culture analysis successful!"));
    assert_eq!(client.call_names().len(), 5);
}

#[tokio::test]
async fn test_runner_accepts_trait_object() {
    let client = RecordingClient::uniform(Reply::Full);
    let dyn_client: &dyn CareerInsights = &client;
    let mut out = Vec::new();
    run_smoke_test(dyn_client, &SmokeParams::default(), &mut out)
        .await
        .unwrap();
    assert_eq!(client.call_names().len(), 5);
}
