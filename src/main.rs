//! career-roadmap - command line access to the AI services client and the roadmap backend
//!
//! Usage:
//!   cargo run -- market --role "Software Engineer" --company Google
//!   cargo run -- roadmap --job-role "Data Scientist" --location Berlin
//!   cargo run -- interview-questions --data '{"job_role": "SRE"}'
//!   cargo run -- smoke

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde_json::Value;

use career_roadmap::backend::{RoadmapApi, RoadmapRequest};
use career_roadmap::config::{Config, DEFAULT_LOG_FILTER};
use career_roadmap::{AiServices, CareerInsights, Insight, SmokeParams, run_smoke_test};

#[derive(Parser)]
#[command(name = "career-roadmap")]
#[command(about = "Career insights from an AI model and the roadmap backend", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Job market analysis for a role at a company
    Market {
        #[arg(long)]
        role: String,
        #[arg(long)]
        company: String,
    },
    /// Career development plan for a role and experience level
    Plan {
        #[arg(long)]
        role: String,
        #[arg(long)]
        experience_level: String,
    },
    /// Company culture analysis
    Culture {
        #[arg(long)]
        company: String,
    },
    /// Industry trends affecting a role
    Trends {
        #[arg(long)]
        role: String,
    },
    /// Job postings research for a role in a location
    Postings {
        #[arg(long)]
        role: String,
        #[arg(long)]
        location: String,
    },
    /// Run the five-capability smoke test with its fixed inputs
    Smoke,
    /// Backend health check
    Health,
    /// Generate a career roadmap via the backend
    Roadmap {
        #[arg(long)]
        job_role: String,
        #[arg(long)]
        experience_level: Option<String>,
        #[arg(long)]
        location: Option<String>,
        #[arg(long)]
        industry: Option<String>,
    },
    /// Interview questions via the backend
    InterviewQuestions {
        /// JSON request body
        #[arg(long)]
        data: String,
    },
    /// Interview answer feedback via the backend
    InterviewFeedback {
        #[arg(long)]
        data: String,
    },
    /// Skills gap analysis via the backend
    Skills {
        #[arg(long)]
        data: String,
    },
    /// Resume tips via the backend
    ResumeTips {
        #[arg(long)]
        data: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    career_roadmap::load_env();
    career_roadmap::init_tracing(DEFAULT_LOG_FILTER);

    let cli = Cli::parse();
    let config = Config::load().context("Failed to load configuration")?;

    match cli.command {
        Commands::Market { role, company } => {
            let ai = ai_services(&config)?;
            print_insight(ai.analyze_job_market(&role, &company).await?)
        }
        Commands::Plan {
            role,
            experience_level,
        } => {
            let ai = ai_services(&config)?;
            print_insight(ai.generate_career_plan(&role, &experience_level).await?)
        }
        Commands::Culture { company } => {
            let ai = ai_services(&config)?;
            print_insight(ai.analyze_company_culture(&company).await?)
        }
        Commands::Trends { role } => {
            let ai = ai_services(&config)?;
            print_insight(ai.analyze_industry_trends(&role).await?)
        }
        Commands::Postings { role, location } => {
            let ai = ai_services(&config)?;
            print_insight(ai.research_job_postings(&role, &location).await?)
        }
        Commands::Smoke => {
            let ai = ai_services(&config)?;
            let mut stdout = std::io::stdout().lock();
            run_smoke_test(&ai, &SmokeParams::default(), &mut stdout).await?;
            Ok(())
        }
        Commands::Health => print_json(&backend(&config)?.check_health().await?),
        Commands::Roadmap {
            job_role,
            experience_level,
            location,
            industry,
        } => {
            let request = RoadmapRequest {
                job_role,
                experience_level,
                location,
                industry,
            };
            print_json(&backend(&config)?.generate_roadmap(&request).await?)
        }
        Commands::InterviewQuestions { data } => {
            let body = parse_data(&data)?;
            print_json(&backend(&config)?.interview_questions(&body).await?)
        }
        Commands::InterviewFeedback { data } => {
            let body = parse_data(&data)?;
            print_json(&backend(&config)?.interview_feedback(&body).await?)
        }
        Commands::Skills { data } => {
            let body = parse_data(&data)?;
            print_json(&backend(&config)?.analyze_skills(&body).await?)
        }
        Commands::ResumeTips { data } => {
            let body = parse_data(&data)?;
            print_json(&backend(&config)?.resume_tips(&body).await?)
        }
    }
}

fn ai_services(config: &Config) -> Result<AiServices> {
    AiServices::new(&config.ai).context("Failed to initialize AI services client")
}

fn backend(config: &Config) -> Result<RoadmapApi> {
    RoadmapApi::new(&config.backend).context("Failed to initialize backend client")
}

fn parse_data(raw: &str) -> Result<Value> {
    serde_json::from_str(raw).context("--data must be valid JSON")
}

fn print_insight(insight: Option<Insight>) -> Result<()> {
    match insight {
        Some(map) if !map.is_empty() => print_json(&Value::Object(map)),
        _ => {
            println!("No result");
            Ok(())
        }
    }
}

fn print_json(value: &Value) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
