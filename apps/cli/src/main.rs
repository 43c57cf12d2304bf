use anyhow::Result;
use clap::Parser;
use client_core::{PredictionClient, SubmissionController, UiState};

mod config;
mod render;

use render::TerminalRenderer;

/// Lists institutions whose past closing ranks a given rank could reach,
/// by querying a prediction server.
#[derive(Parser, Debug)]
struct Args {
    /// Prediction server base URL; overrides predictor.toml and environment.
    #[arg(long)]
    server_url: Option<String>,
    /// Rank to evaluate.
    #[arg(long)]
    rank: Option<String>,
    /// Reservation category, e.g. GEN or OBC-NCL.
    #[arg(long)]
    category: Option<String>,
    /// Gender pool, e.g. Gender-Neutral or Female-Only.
    #[arg(long)]
    pool: Option<String>,
    /// Quota filter, e.g. AI or HS.
    #[arg(long)]
    quota: Option<String>,
    /// Institute type filter, e.g. IIT or NIT.
    #[arg(long)]
    institute_type: Option<String>,
    /// Admission year filter.
    #[arg(long)]
    year: Option<String>,
    /// Counselling round filter.
    #[arg(long)]
    round_no: Option<String>,
}

/// Flags become raw form fields; absent flags are absent fields. Required
/// and format checks belong to the controller, not the argument parser, so
/// the messages match the hosted form exactly.
fn form_fields(args: &Args) -> Vec<(String, String)> {
    let pairs = [
        ("rank", &args.rank),
        ("category", &args.category),
        ("pool", &args.pool),
        ("quota", &args.quota),
        ("institute_type", &args.institute_type),
        ("year", &args.year),
        ("round_no", &args.round_no),
    ];
    pairs
        .into_iter()
        .filter_map(|(name, value)| value.as_ref().map(|v| (name.to_string(), v.clone())))
        .collect()
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().init();
    let args = Args::parse();

    let settings = config::load_settings();
    let raw_url = args.server_url.clone().unwrap_or(settings.server_url);
    let server_url = config::normalize_server_url(&raw_url)?;

    let mut controller =
        SubmissionController::new(PredictionClient::new(server_url), TerminalRenderer);
    let fields = form_fields(&args);
    let outcome = controller.submit(&fields).await;

    if matches!(outcome, UiState::Error(_)) {
        std::process::exit(1);
    }
    Ok(())
}
