#![forbid(unsafe_code)]

//! `review-roster` — pull request triage automation binary.
//!
//! Loads the declarative configuration, decodes the triggering CI event,
//! evaluates the rule pipeline, and applies the decision via the GitHub
//! REST API.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use review_roster::config::Config;
use review_roster::event::EventPayload;
use review_roster::github::GithubClient;
use review_roster::rules::evaluator;
use review_roster::{runner, AppError, Result};

#[derive(Debug, Copy, Clone, Eq, PartialEq, ValueEnum)]
enum LogFormat {
    Text,
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "review-roster", about = "Pull request triage automation", version, long_about = None)]
struct Cli {
    /// Path to the YAML configuration file.
    #[arg(long)]
    config: PathBuf,

    /// Path to the CI event payload. Defaults to `GITHUB_EVENT_PATH`.
    #[arg(long)]
    event: Option<PathBuf>,

    /// Log output format (text or json).
    #[arg(long, value_enum, default_value_t = LogFormat::Text)]
    log_format: LogFormat,
}

fn main() -> Result<()> {
    let args = Cli::parse();
    init_tracing(args.log_format)?;
    info!("review-roster bootstrap");

    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(|err| AppError::Config(format!("failed to build tokio runtime: {err}")))?
        .block_on(run(args))
}

async fn run(args: Cli) -> Result<()> {
    let config = Config::load_from_path(&args.config)?;
    info!("configuration loaded");

    let event_path = match args.event {
        Some(path) => path,
        None => std::env::var_os("GITHUB_EVENT_PATH")
            .map(PathBuf::from)
            .ok_or_else(|| {
                AppError::Event("no --event path given and GITHUB_EVENT_PATH is unset".into())
            })?,
    };
    let raw = std::fs::read_to_string(&event_path)
        .map_err(|err| AppError::Io(format!("cannot read event payload: {err}")))?;
    let snapshot = EventPayload::from_json_str(&raw)?.into_snapshot()?;
    info!(
        pr = snapshot.number,
        author = %snapshot.author,
        base = %snapshot.base_ref,
        "pull request context decoded"
    );

    let decision = evaluator::evaluate(&snapshot, &config, &mut rand::thread_rng());

    if decision.labels.is_empty() && !decision.proceed() {
        if let Some(ref reason) = decision.skipped {
            info!(%reason, "nothing to apply");
        }
        return Ok(());
    }

    let client = GithubClient::from_env()?;
    runner::apply_decision(&client, &snapshot, &decision).await;

    info!(
        labels = decision.labels.len(),
        reviewers = decision.reviewers.len(),
        assignees = decision.assignees.len(),
        proceeded = decision.proceed(),
        "run finished"
    );

    Ok(())
}

fn init_tracing(log_format: LogFormat) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = fmt().with_env_filter(env_filter);

    match log_format {
        LogFormat::Text => subscriber
            .try_init()
            .map_err(|err| AppError::Config(format!("failed to init tracing: {err}")))?,
        LogFormat::Json => subscriber
            .json()
            .try_init()
            .map_err(|err| AppError::Config(format!("failed to init tracing: {err}")))?,
    }

    Ok(())
}
