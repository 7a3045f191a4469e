//! Club registry command-line front end.
//!
//! # Usage
//!
//! ```bash
//! club-registry register --name "Jane Doe" --club "Book Club" --activity "Mystery novels"
//! club-registry list
//! club-registry search jane
//! club-registry delete 1 --yes
//! club-registry export --query jane --output jane.csv
//! ```

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use thiserror::Error;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use club_registry::adapters::{CsvMemberExporter, JsonFileMemberStorage};
use club_registry::application::{
    ExportMembersCommand, ExportMembersHandler, MemberError, MembershipStore,
};
use club_registry::config::{AppConfig, ConfigError, LoggingConfig};
use club_registry::domain::foundation::MemberId;
use club_registry::domain::member::MemberRecord;
use club_registry::ports::{ExportError, EXPORT_HEADER};

/// Club membership registration
#[derive(Parser, Debug)]
#[command(name = "club-registry")]
#[command(about = "Register and manage club members")]
#[command(version)]
struct Cli {
    /// Backing JSON file (overrides CLUB_REGISTRY__STORAGE__DATA_FILE)
    #[arg(long, global = true)]
    data_file: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Register a new member
    Register {
        #[arg(long)]
        name: String,

        /// One of the offered club types (see `clubs`)
        #[arg(long)]
        club: String,

        /// Favorite activity
        #[arg(long)]
        activity: String,
    },

    /// List all members
    List,

    /// Find members whose name contains QUERY (case-insensitive)
    Search { query: String },

    /// Delete a member by membership ID
    Delete {
        id: MemberId,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Export members to CSV
    Export {
        /// Only export members whose name contains QUERY
        #[arg(long)]
        query: Option<String>,

        /// Output file (overrides CLUB_REGISTRY__STORAGE__EXPORT_FILE)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show the offered club types
    Clubs,
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("[{}] {}", .0.code(), .0)]
    Member(#[from] MemberError),

    #[error("[{}] {}", .0.code(), .0)]
    Export(#[from] ExportError),

    #[error("Failed to read confirmation: {0}")]
    Prompt(#[from] io::Error),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(error = ?e, "Command failed");
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let mut config = AppConfig::load()?;
    if let Some(data_file) = cli.data_file {
        config.storage.data_file = data_file;
    }
    if let Some(level) = cli.log_level {
        config.logging.level = level;
    }
    config.validate().map_err(ConfigError::from)?;

    init_tracing(&config.logging);

    let storage = Arc::new(JsonFileMemberStorage::new(&config.storage.data_file));
    let opened = MembershipStore::open(storage.clone(), config.clubs.catalog());
    if let Some(e) = &opened.load_error {
        eprintln!("Warning: {}. Starting with an empty member list.", e);
        match storage.preserve_unreadable() {
            Ok(Some(backup)) => eprintln!(
                "Warning: the unreadable file was copied to {}.",
                backup.display()
            ),
            Ok(None) => {}
            Err(e) => eprintln!(
                "Warning: {}. The next change will overwrite {}.",
                e,
                storage.path().display()
            ),
        }
    }
    let mut store = opened.store;

    match cli.command {
        Command::Register {
            name,
            club,
            activity,
        } => {
            let record = store.register(&name, &club, &activity)?;
            println!("Member registered with ID: {}", record.id);
        }
        Command::List => print_table(store.list_all()),
        Command::Search { query } => print_table(&store.search(&query)),
        Command::Delete { id, yes } => {
            let member = store.get(id).ok_or(MemberError::NotFound(id))?;
            if !yes && !confirm(&format!("Delete member with ID {} ({})?", id, member.name))? {
                println!("Cancelled");
                return Ok(());
            }
            store.delete(id)?;
            println!("Member deleted successfully");
        }
        Command::Export { query, output } => {
            let path = output.unwrap_or(config.storage.export_file);
            let handler = ExportMembersHandler::new(Arc::new(CsvMemberExporter::new(path)));
            let result = handler.handle(&store, ExportMembersCommand { query })?;
            println!(
                "Exported {} member(s) to {}",
                result.row_count,
                result.path.display()
            );
        }
        Command::Clubs => {
            for club in store.catalog().iter() {
                println!("{}", club);
            }
        }
    }

    Ok(())
}

fn init_tracing(logging: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));

    if logging.json {
        tracing_subscriber::registry()
            .with(fmt::layer().json().with_writer(io::stderr))
            .with(filter)
            .init();
    } else {
        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(io::stderr))
            .with(filter)
            .init();
    }
}

fn confirm(question: &str) -> Result<bool, io::Error> {
    print!("{} [y/N] ", question);
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
}

fn print_table(members: &[MemberRecord]) {
    if members.is_empty() {
        println!("No members found");
        return;
    }

    let rows: Vec<[String; 4]> = members
        .iter()
        .map(|m| {
            [
                m.id.to_string(),
                m.name.clone(),
                m.club_type.to_string(),
                m.activity.clone(),
            ]
        })
        .collect();

    let mut widths = EXPORT_HEADER.map(|h| h.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    print_row(&EXPORT_HEADER.map(String::from), &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    println!("{}", rule.join("  "));
    for row in &rows {
        print_row(row, &widths);
    }
}

fn print_row(cells: &[String; 4], widths: &[usize; 4]) {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
        .collect();
    println!("{}", padded.join("  ").trim_end());
}
