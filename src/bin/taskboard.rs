//! Command-line front end for the task tracker.
//!
//! Usage:
//!
//! ```text
//! taskboard [--config <path>] [--data-dir <dir>] <command>
//! ```
//!
//! Commands:
//!
//! - `add --task <text> --assignee <email> --due <date> --location <name>`
//! - `complete <position>` marks the in-progress task at `position` done
//! - `list` prints both collections
//! - `suggest <text>` prints locations containing `text`
//!
//! Tasks are stored as JSON slots under the data directory. Logging goes to
//! stderr and honours `RUST_LOG`.

use camino::Utf8PathBuf;
use clap::{Parser, Subcommand};
use mockable::DefaultClock;
use std::io::{self, Write};
use std::process::ExitCode;
use std::sync::Arc;
use taskboard::config::{ConfigError, TrackerConfig};
use taskboard::task::{
    adapters::{directory::DirectoryKeyValueStore, http::HttpReferenceCatalog},
    domain::{FormField, TaskForm, TaskSnapshot},
    ports::{StorageError, TaskStoreObserver},
    services::{
        SuggestionOutcome, SuggestionService, TaskPersistence, TaskStore, TaskTracker,
        TaskTrackerError,
    },
    validation::ValidationPipeline,
};
use thiserror::Error;
use tracing::{error, warn};
use tracing_subscriber::EnvFilter;

type CliTracker = TaskTracker<DirectoryKeyValueStore, HttpReferenceCatalog, DefaultClock>;

#[derive(Debug, Parser)]
#[command(name = "taskboard", version, about = "Track tasks from submission to completion")]
struct Cli {
    /// Path to a TOML configuration file.
    #[arg(long, global = true)]
    config: Option<String>,

    /// Directory holding persisted tasks; overrides the configuration.
    #[arg(long, global = true)]
    data_dir: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Submit a new task.
    Add {
        /// What needs doing.
        #[arg(long)]
        task: String,
        /// Email address of the assignee.
        #[arg(long)]
        assignee: String,
        /// Due date, e.g. 2026-10-19 or 2026-10-19T17:00.
        #[arg(long)]
        due: String,
        /// Location listed in the reference catalog.
        #[arg(long)]
        location: String,
    },
    /// Mark the in-progress task at a position as done.
    Complete {
        /// Zero-based position in the in-progress list.
        position: usize,
    },
    /// Show in-progress and completed tasks.
    List,
    /// Suggest locations containing the given text.
    Suggest {
        /// Text typed so far.
        input: String,
    },
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Tracker(#[from] TaskTrackerError),
    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
}

/// Prints both collections whenever the store changes.
struct TableRenderer;

impl TaskStoreObserver for TableRenderer {
    fn tasks_changed(&self, snapshot: &TaskSnapshot) {
        if let Err(err) = render_tasks(&mut io::stdout().lock(), snapshot) {
            warn!(error = %err, "failed to render tasks");
        }
    }
}

fn render_tasks(out: &mut impl Write, snapshot: &TaskSnapshot) -> io::Result<()> {
    writeln!(out, "In progress:")?;
    for (position, task) in snapshot.in_progress.iter().enumerate() {
        writeln!(
            out,
            "  [{position}] {}  {}  {}  {}",
            task.due_date(),
            task.task_details(),
            task.assignee(),
            task.location()
        )?;
    }
    writeln!(out, "Completed:")?;
    for task in &snapshot.completed {
        writeln!(
            out,
            "  [x] {}  {}  {}  {}",
            task.due_date(),
            task.task_details(),
            task.assignee(),
            task.location()
        )?;
    }
    Ok(())
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn build_tracker(config: &TrackerConfig) -> Result<CliTracker, CliError> {
    let catalog = Arc::new(HttpReferenceCatalog::new(
        config.reference_url.clone(),
        config.request_timeout,
    ));
    let storage = Arc::new(DirectoryKeyValueStore::open(&config.data_dir)?);
    let pipeline = ValidationPipeline::new(
        Arc::clone(&catalog),
        Arc::new(DefaultClock),
        config.assignee_rule()?,
    )
    .with_utc_offset(config.utc_offset);
    let suggestions = SuggestionService::new(catalog, config.autocomplete_debounce);
    let store = TaskStore::new(TaskPersistence::new(storage)).with_utc_offset(config.utc_offset);
    Ok(TaskTracker::new(pipeline, suggestions, store))
}

async fn run(cli: Cli) -> Result<ExitCode, CliError> {
    let config_path = cli.config.map(Utf8PathBuf::from);
    let mut config = TrackerConfig::load(config_path.as_deref())?;
    if let Some(data_dir) = cli.data_dir {
        config.data_dir = Utf8PathBuf::from(data_dir);
    }
    let tracker = build_tracker(&config)?;
    let mut out = io::stdout();

    match cli.command {
        Command::Add {
            task,
            assignee,
            due,
            location,
        } => {
            tracker.start()?;
            tracker.subscribe(Arc::new(TableRenderer))?;
            let form = TaskForm::new(task, assignee, due, location);
            let outcome = tracker.submit(&form).await?;
            if outcome.accepted.is_some() {
                return Ok(ExitCode::SUCCESS);
            }
            for field in FormField::ALL {
                if let Some(message) = outcome.report.message(field) {
                    writeln!(out, "{}: {message}", field.as_str())?;
                }
            }
            Ok(ExitCode::FAILURE)
        }
        Command::Complete { position } => {
            tracker.start()?;
            tracker.subscribe(Arc::new(TableRenderer))?;
            if tracker.complete_at(position)?.is_none() {
                writeln!(out, "no in-progress task at position {position}")?;
            }
            Ok(ExitCode::SUCCESS)
        }
        Command::List => {
            tracker.subscribe(Arc::new(TableRenderer))?;
            tracker.start()?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Suggest { input } => match tracker.suggest(&input).await {
            SuggestionOutcome::Ready(suggestions) => {
                for title in suggestions {
                    writeln!(out, "{title}")?;
                }
                Ok(ExitCode::SUCCESS)
            }
            SuggestionOutcome::Unavailable(err) => {
                writeln!(out, "error occurred: {err}")?;
                Ok(ExitCode::FAILURE)
            }
            SuggestionOutcome::Cleared | SuggestionOutcome::Superseded => Ok(ExitCode::SUCCESS),
        },
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    init_logging();
    let cli = Cli::parse();
    match run(cli).await {
        Ok(code) => code,
        Err(err) => {
            error!(error = %err, "taskboard failed");
            ExitCode::FAILURE
        }
    }
}
