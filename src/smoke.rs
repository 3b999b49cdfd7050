//! Sequential smoke test over the five career insight capabilities

use std::io::Write;

use serde_json::Value;

use crate::error::Result;
use crate::services::{CareerInsights, Insight};

/// Literal inputs for a smoke run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SmokeParams {
    pub role: String,
    pub company: String,
    pub experience_level: String,
    pub location: String,
}

impl Default for SmokeParams {
    fn default() -> Self {
        Self {
            role: "Software Engineer".to_string(),
            company: "Google".to_string(),
            experience_level: "Mid-level".to_string(),
            location: "San Francisco".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SmokeStep {
    JobMarket,
    CareerPlan,
    CompanyCulture,
    IndustryTrends,
    JobPostings,
}

impl SmokeStep {
    /// Fixed execution order
    pub const ALL: [SmokeStep; 5] = [
        SmokeStep::JobMarket,
        SmokeStep::CareerPlan,
        SmokeStep::CompanyCulture,
        SmokeStep::IndustryTrends,
        SmokeStep::JobPostings,
    ];

    pub fn name(self) -> &'static str {
        match self {
            SmokeStep::JobMarket => "market analysis",
            SmokeStep::CareerPlan => "career plan generation",
            SmokeStep::CompanyCulture => "company culture analysis",
            SmokeStep::IndustryTrends => "industry trends analysis",
            SmokeStep::JobPostings => "job postings research",
        }
    }

    /// Top-level key shown on success
    pub fn display_key(self) -> &'static str {
        match self {
            SmokeStep::CareerPlan => "core_analysis",
            SmokeStep::CompanyCulture => "work_life_balance",
            SmokeStep::JobMarket | SmokeStep::IndustryTrends | SmokeStep::JobPostings => {
                "market_overview"
            }
        }
    }

    pub fn display_label(self) -> &'static str {
        match self {
            SmokeStep::CareerPlan => "Core analysis",
            SmokeStep::CompanyCulture => "Work-life balance",
            SmokeStep::JobMarket | SmokeStep::IndustryTrends | SmokeStep::JobPostings => {
                "Market overview"
            }
        }
    }

    pub async fn invoke<C>(self, client: &C, params: &SmokeParams) -> Result<Option<Insight>>
    where
        C: CareerInsights + ?Sized,
    {
        match self {
            SmokeStep::JobMarket => {
                client
                    .analyze_job_market(&params.role, &params.company)
                    .await
            }
            SmokeStep::CareerPlan => {
                client
                    .generate_career_plan(&params.role, &params.experience_level)
                    .await
            }
            SmokeStep::CompanyCulture => client.analyze_company_culture(&params.company).await,
            SmokeStep::IndustryTrends => client.analyze_industry_trends(&params.role).await,
            SmokeStep::JobPostings => {
                client
                    .research_job_postings(&params.role, &params.location)
                    .await
            }
        }
    }
}

/// Run every step in order, writing a line-oriented report to `out`.
///
/// Soft failures print "<step> failed!" and the run continues. A hard failure
/// is returned as soon as it happens and later steps are never invoked.
pub async fn run_smoke_test<C, W>(client: &C, params: &SmokeParams, out: &mut W) -> Result<()>
where
    C: CareerInsights + ?Sized,
    W: Write,
{
    writeln!(out, "Testing API connection...")?;

    for step in SmokeStep::ALL {
        writeln!(out, "\nTesting {}...", step.name())?;
        out.flush()?;

        let heading = capitalize(step.name());
        match step.invoke(client, params).await? {
            Some(insight) if !insight.is_empty() => {
                writeln!(out, "{} successful!", heading)?;
                writeln!(
                    out,
                    "{}: {}",
                    step.display_label(),
                    display_value(insight.get(step.display_key()))
                )?;
            }
            _ => {
                tracing::warn!("smoke step '{}' returned no result", step.name());
                writeln!(out, "{} failed!", heading)?;
            }
        }
    }

    out.flush()?;
    Ok(())
}

/// Strings print raw, anything else as compact JSON; a missing field prints `{}`.
pub fn display_value(value: Option<&Value>) -> String {
    match value {
        None => "{}".to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
