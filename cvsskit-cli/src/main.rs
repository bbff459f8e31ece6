//! cvsskit CLI - score CVSS v2 / v3.0 / v3.1 / v4.0 vectors

#![deny(warnings)]

// Global invariants enforced:
// - Deterministic output ordering
// - Identical input yields byte-for-byte identical output

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use cvsskit_core::{history, option_impacts, parse, serialize, share, HistoryEntry};
use cvsskit_core::{compute_score, ScoreResult};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "cvsskit")]
#[command(about = "Score CVSS v2, v3.0, v3.1, and v4.0 vectors")]
#[command(version = env!("CVSSKIT_VERSION"))]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute base/temporal/environmental scores for a vector
    Score {
        /// Vector string (e.g. CVSS:3.1/AV:N/AC:L/PR:N/UI:N/S:U/C:H/I:H/A:H)
        vector: String,

        /// Output format
        #[arg(long, default_value = "text")]
        format: OutputFormat,

        /// Reject unknown options and unset base metrics instead of
        /// scoring them permissively
        #[arg(long)]
        strict: bool,
    },
    /// Show the score delta of every option of one metric
    Impact {
        /// Vector string holding the current selections
        vector: String,

        /// Metric key to sweep (e.g. AV)
        #[arg(long)]
        metric: String,
    },
    /// Re-emit a vector in canonical form
    Canonicalize {
        /// Vector string, pairs in any order
        vector: String,
    },
    /// Manage a JSON score history file
    History {
        #[command(subcommand)]
        action: HistoryAction,
    },
    /// Emit a shareable-link query fragment for a vector
    Share {
        /// Vector string
        vector: String,
    },
}

#[derive(Subcommand)]
enum HistoryAction {
    /// Score a vector and append it to the history file
    Add {
        /// Vector string
        vector: String,

        /// Display name for the entry
        #[arg(long)]
        name: Option<String>,

        /// History file path
        #[arg(long, default_value = ".cvsskit-history.json")]
        file: PathBuf,
    },
    /// List saved entries
    List {
        /// History file path
        #[arg(long, default_value = ".cvsskit-history.json")]
        file: PathBuf,
    },
    /// Print the history file as interchange JSON
    Export {
        /// History file path
        #[arg(long, default_value = ".cvsskit-history.json")]
        file: PathBuf,
    },
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Score {
            vector,
            format,
            strict,
        } => cmd_score(&vector, format, strict),
        Commands::Impact { vector, metric } => cmd_impact(&vector, &metric),
        Commands::Canonicalize { vector } => {
            let record = parse(&vector)?;
            println!("{}", serialize(&record));
            Ok(())
        }
        Commands::History { action } => match action {
            HistoryAction::Add { vector, name, file } => cmd_history_add(&vector, name, &file),
            HistoryAction::List { file } => cmd_history_list(&file),
            HistoryAction::Export { file } => {
                let entries = load_history(&file)?;
                println!("{}", history::render_json(&entries));
                Ok(())
            }
        },
        Commands::Share { vector } => {
            let record = parse(&vector)?;
            println!("{}", share::to_query(&record));
            Ok(())
        }
    }
}

fn cmd_score(vector: &str, format: OutputFormat, strict: bool) -> Result<()> {
    let record = parse(vector)?;
    if strict {
        record.validate().context("vector failed strict validation")?;
    }
    let result = compute_score(&record);
    match format {
        OutputFormat::Text => print!("{}", render_text(&result)),
        OutputFormat::Json => println!("{}", cvsskit_core::score::to_json(&result)),
    }
    Ok(())
}

fn render_text(result: &ScoreResult) -> String {
    let mut out = String::new();
    out.push_str(&format!("CVSS {}  {}\n", result.version, result.vector));
    out.push_str(&format!(
        "score: {:.1} ({})\n",
        result.score, result.severity
    ));
    out.push_str(&format!("base: {:.1}\n", result.base_score));
    if let Some(t) = result.temporal_score {
        out.push_str(&format!("temporal: {t:.1}\n"));
    }
    if let Some(e) = result.environmental_score {
        out.push_str(&format!("environmental: {e:.1}\n"));
    }
    out
}

fn cmd_impact(vector: &str, metric: &str) -> Result<()> {
    let record = parse(vector)?;
    let current = compute_score(&record);
    println!(
        "current: {:.1} ({})  metric {}",
        current.score, current.severity, metric
    );
    for (option, delta) in option_impacts(&record, metric)? {
        println!("{:<8} {:+.1}", option, delta);
    }
    Ok(())
}

fn load_history(path: &Path) -> Result<Vec<HistoryEntry>> {
    if !path.exists() {
        return Ok(Vec::new());
    }
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read history file {}", path.display()))?;
    history::parse_json(&json)
}

fn save_history(path: &Path, entries: &[HistoryEntry]) -> Result<()> {
    std::fs::write(path, history::render_json(entries))
        .with_context(|| format!("failed to write history file {}", path.display()))
}

fn cmd_history_add(vector: &str, name: Option<String>, file: &Path) -> Result<()> {
    let record = parse(vector)?;
    let result = compute_score(&record);

    let timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as i64)
        .unwrap_or(0);
    let mut entries = load_history(file)?;
    let id = format!("entry-{}", entries.len() + 1);
    let name = name.unwrap_or_else(|| result.vector.clone());
    entries.push(HistoryEntry::from_result(&result, id, name, timestamp));
    save_history(file, &entries)?;

    println!(
        "saved {:.1} ({}) as entry {}",
        result.score,
        result.severity,
        entries.len()
    );
    Ok(())
}

fn cmd_history_list(file: &Path) -> Result<()> {
    let entries = load_history(file)?;
    if entries.is_empty() {
        println!("no saved entries");
        return Ok(());
    }
    println!(
        "{:<10} {:<6} {:<6} {:<10} {}",
        "ID", "CVSS", "SCORE", "SEVERITY", "VECTOR"
    );
    for e in &entries {
        println!(
            "{:<10} {:<6} {:<6.1} {:<10} {}",
            e.id,
            e.version.as_str(),
            e.score,
            e.severity,
            e.vector
        );
    }
    Ok(())
}
