//! Prompt templates for the career insight capabilities
//!
//! Each capability owns one template. Templates use `{name}` placeholders and
//! ask the model for a single JSON object that carries the capability's
//! display key, so a caller can always look that key up on success.

use crate::error::{CareerError, Result};

/// Shared system prompt; enforces JSON-only replies.
pub const SYSTEM_PROMPT: &str = "You are an expert career strategist and labor-market analyst. \
    You MUST respond with a single valid JSON object only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences.";

#[derive(Debug, Clone, Copy)]
pub struct Prompt {
    /// Stable identifier (format: capability-v1)
    pub id: &'static str,
    pub one_liner: &'static str,
    /// Placeholder names the template expects
    pub inputs: &'static [&'static str],
    pub template: &'static str,
}

impl Prompt {
    /// Substitute every `{input}` placeholder. Missing or blank inputs are rejected.
    pub fn render(&self, values: &[(&str, &str)]) -> Result<String> {
        let mut out = self.template.to_string();
        for input in self.inputs {
            let value = values
                .iter()
                .find(|(k, _)| k == input)
                .map(|(_, v)| v.trim())
                .filter(|v| !v.is_empty())
                .ok_or_else(|| {
                    CareerError::validation(format!("prompt {} requires '{}'", self.id, input))
                })?;
            out = out.replace(&format!("{{{}}}", input), value);
        }
        Ok(out)
    }
}

pub const JOB_MARKET: Prompt = Prompt {
    id: "job-market-v1",
    one_liner: "Job market analysis for a role at a company",
    inputs: &["role", "company"],
    template: r#"Analyze the current job market for the role "{role}" at "{company}".

Return a JSON object with this schema:
{
  "market_overview": {
    "demand_level": "high | medium | low",
    "summary": "two or three sentences",
    "growth_outlook": "short phrase"
  },
  "salary_range": {"min": 0, "max": 0, "currency": "USD"},
  "required_skills": ["skill"],
  "hiring_trends": ["trend"],
  "company_position": "how {company} hires for this role"
}"#,
};

pub const CAREER_PLAN: Prompt = Prompt {
    id: "career-plan-v1",
    one_liner: "Career development plan for a role and experience level",
    inputs: &["role", "experience_level"],
    template: r#"Create a career development plan for a {experience_level} {role}.

Return a JSON object with this schema:
{
  "core_analysis": {
    "current_position": "where a {experience_level} {role} typically stands",
    "strengths_to_build": ["skill"],
    "gaps": ["gap"]
  },
  "milestones": [
    {"timeframe": "0-6 months", "goals": ["goal"], "resources": ["resource"]}
  ],
  "certifications": ["certification"],
  "next_roles": ["role"]
}"#,
};

pub const COMPANY_CULTURE: Prompt = Prompt {
    id: "company-culture-v1",
    one_liner: "Company culture analysis",
    inputs: &["company"],
    template: r#"Analyze the workplace culture at "{company}".

Return a JSON object with this schema:
{
  "culture_summary": "two or three sentences",
  "work_life_balance": {"rating": "1-5", "notes": "short explanation"},
  "values": ["value"],
  "interview_process": ["stage"],
  "employee_sentiment": "short phrase"
}"#,
};

pub const INDUSTRY_TRENDS: Prompt = Prompt {
    id: "industry-trends-v1",
    one_liner: "Industry trends affecting a role",
    inputs: &["role"],
    template: r#"Describe the industry trends that affect the role "{role}".

Return a JSON object with this schema:
{
  "market_overview": {
    "summary": "two or three sentences",
    "momentum": "growing | stable | shrinking"
  },
  "emerging_technologies": ["technology"],
  "skills_in_demand": ["skill"],
  "risks": ["risk"],
  "five_year_outlook": "short paragraph"
}"#,
};

pub const JOB_POSTINGS: Prompt = Prompt {
    id: "job-postings-v1",
    one_liner: "Job postings research for a role in a location",
    inputs: &["role", "location"],
    template: r#"Research typical job postings for "{role}" positions in {location}.

Return a JSON object with this schema:
{
  "market_overview": {
    "summary": "two or three sentences about openings in {location}",
    "posting_volume": "high | medium | low"
  },
  "common_requirements": ["requirement"],
  "typical_salary": {"min": 0, "max": 0, "currency": "USD"},
  "top_employers": ["employer"],
  "remote_share": "short phrase"
}"#,
};
