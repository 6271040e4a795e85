//! NutriRisk command line
//!
//! Runs one frontend action against the remote API and prints the rendered
//! region HTML to stdout. Logs go to stderr.

use clap::{Parser, Subcommand};
use nutririsk_frontend::input::{DayText, LifestyleForm, MismatchPolicy, ProfileForm};
use nutririsk_frontend::{
    ActionOutcome, ClientConfig, Frontend, HealthApi, Region, RegionBuffer, RemoteClient,
};
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "nutririsk")]
#[command(about = "Analyze foods and lifestyle risk against a NutriRisk API")]
struct Cli {
    /// Base URL of the analysis API
    #[arg(long, env = "API_BASE_URL", default_value = "http://localhost:5000/api")]
    base_url: String,

    /// Wrap the fragment in a standalone HTML page
    #[arg(long)]
    page: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Nutrition and risk for a comma-separated food list
    Analyze {
        /// e.g. "rice, chicken breast, apple"
        foods: String,
    },

    /// Run a server-side demo (healthy, unhealthy, mixed, junk)
    Demo {
        demo_type: String,
    },

    /// Lifestyle disease risk assessment
    Lifestyle {
        #[arg(long)]
        age: String,

        #[arg(long, default_value = "other")]
        gender: String,

        /// Weight in kg
        #[arg(long)]
        weight: String,

        /// Height in cm
        #[arg(long)]
        height: String,

        #[arg(long, default_value = "moderate")]
        activity: String,

        /// Comma-separated
        #[arg(long, default_value = "")]
        family_history: String,

        /// Comma-separated
        #[arg(long, default_value = "")]
        conditions: String,

        #[arg(long, default_value = "3")]
        meal_frequency: String,

        /// One tracked day as "foods|portions", repeatable
        #[arg(long = "day", required = true)]
        days: Vec<String>,

        /// Fail when a day's food and portion counts differ
        #[arg(long)]
        strict: bool,
    },

    /// Check that the API is reachable
    Health,
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "nutririsk_frontend=warn,warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = ClientConfig::new(cli.base_url)?;
    let frontend = Frontend::new(RemoteClient::new(config), RegionBuffer::new());

    let (region, result) = match cli.command {
        Commands::Analyze { foods } => (Region::FoodResults, frontend.analyze_foods(&foods).await),
        Commands::Demo { demo_type } => (Region::DemoResults, frontend.run_demo(&demo_type).await),
        Commands::Lifestyle {
            age,
            gender,
            weight,
            height,
            activity,
            family_history,
            conditions,
            meal_frequency,
            days,
            strict,
        } => {
            let form = LifestyleForm {
                profile: ProfileForm {
                    age,
                    gender,
                    weight,
                    height,
                    activity,
                    family_history,
                    current_conditions: conditions,
                    meal_frequency,
                    days_tracked: days.len().to_string(),
                },
                days: days
                    .iter()
                    .zip(1u32..)
                    .map(|(text, day)| (day, parse_day(text)))
                    .collect(),
                mismatch: if strict {
                    MismatchPolicy::Reject
                } else {
                    MismatchPolicy::Truncate
                },
            };
            (Region::LifestyleResults, frontend.assess_lifestyle(&form).await)
        }
        Commands::Health => {
            return Ok(if frontend.api().health_check().await {
                println!("ok");
                ExitCode::SUCCESS
            } else {
                println!("unreachable");
                ExitCode::FAILURE
            });
        }
    };

    let outcome = match result {
        Ok(outcome) => outcome,
        Err(err) => {
            eprintln!("{err}");
            return Ok(ExitCode::from(2));
        }
    };

    let fragment = frontend.target().take(region).unwrap_or_default();
    if cli.page {
        println!("{}", nutririsk_frontend::render::render_page("NutriRisk", &fragment));
    } else {
        println!("{fragment}");
    }

    Ok(match outcome {
        ActionOutcome::Failed(_) => ExitCode::FAILURE,
        _ => ExitCode::SUCCESS,
    })
}

/// "rice, apple|200, 120" → foods and portions text. Without `|` the whole
/// value is foods and the portions are blank.
fn parse_day(text: &str) -> DayText {
    match text.split_once('|') {
        Some((foods, portions)) => DayText::new(foods, portions),
        None => DayText::new(text, ""),
    }
}
