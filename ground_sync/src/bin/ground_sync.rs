use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, anyhow};
use clap::{Parser, Subcommand};
use feed_ingestor::{CollectionKind, sources::http::HttpSource};
use ground_sync::{
    config::SyncConfig,
    logging,
    report::{self, Stage},
    store::{memory::MemoryStore, sqlite::SqliteStore},
    sync::coordinator::{RunReport, run_and_release},
};
use shared_utils::env::load_dotenv;

#[derive(Parser)]
#[command(version, about = "Ground Control data sync")]
struct Cli {
    #[command(subcommand)]
    cmd: Option<Cmd>,

    /// Load environment from this file instead of ./.env
    #[arg(long, value_name = "FILE", global = true)]
    env_file: Option<PathBuf>,

    /// Fetch and map everything but keep it in memory; the database is never opened
    #[arg(long, global = true)]
    dry_run: bool,
}

#[derive(Subcommand, Clone, Copy)]
enum Cmd {
    /// Sync launches, then articles (default)
    All,
    /// Sync upcoming launches only
    Launches,
    /// Sync articles only
    Articles,
}

impl Cmd {
    fn kinds(self) -> &'static [CollectionKind] {
        match self {
            Cmd::All => &CollectionKind::ALL,
            Cmd::Launches => &[CollectionKind::Launches],
            Cmd::Articles => &[CollectionKind::Articles],
        }
    }
}

struct Fatal {
    stage: Stage,
    error: anyhow::Error,
    report: Option<RunReport>,
}

impl Fatal {
    fn at(stage: Stage) -> impl FnOnce(anyhow::Error) -> Fatal {
        move |error| Fatal {
            stage,
            error,
            report: None,
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Loaded before logging so RUST_LOG from the env file applies.
    let dotenv = load_dotenv(cli.env_file.as_deref());
    logging::init("info");

    let outcome = match dotenv {
        Ok(()) => run(&cli).await,
        Err(e) => Err(Fatal::at(Stage::Initialization)(e.into())),
    };

    match outcome {
        Ok(()) => {
            tracing::info!("[Success] Full sync completed successfully!");
            ExitCode::SUCCESS
        }
        Err(fatal) => {
            let err: &(dyn std::error::Error + 'static) = fatal.error.as_ref();
            eprintln!("{}", report::render_failure(fatal.stage, err, fatal.report.as_ref()));
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: &Cli) -> Result<(), Fatal> {
    let kinds = cli.cmd.unwrap_or(Cmd::All).kinds();

    let config = SyncConfig::from_env(kinds, !cli.dry_run)
        .context("Invalid configuration")
        .map_err(Fatal::at(Stage::Initialization))?;
    let feed = HttpSource::new()
        .context("Failed to set up HTTP source")
        .map_err(Fatal::at(Stage::Initialization))?;

    println!("{}", report::render_start_banner(chrono::Utc::now()));

    let report = match config.database_url.as_deref() {
        Some(url) => {
            let store = SqliteStore::connect(url)
                .context("Failed to connect to database")
                .map_err(Fatal::at(Stage::DatabaseConnection))?;
            run_and_release(&feed, store, &config.targets).await
        }
        None => {
            tracing::warn!("dry run: nothing will be written");
            run_and_release(&feed, MemoryStore::new(), &config.targets).await
        }
    };

    println!("{}", report::render_summary(&report));

    if report.is_success() {
        return Ok(());
    }

    let failed: Vec<&str> = report.failed().map(|c| c.kind.name()).collect();
    Err(Fatal {
        stage: Stage::DataSync,
        error: anyhow!("Sync completed with failures in: {}", failed.join(", ")),
        report: Some(report),
    })
}
