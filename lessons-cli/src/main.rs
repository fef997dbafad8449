//! lessons - terminal browser for the English With Simo video lessons
//!
//! Loads the lesson catalog once at startup (falling back to the built-in
//! sample when it cannot be read) and renders units, lessons and search
//! results as text.

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

use lessons_core::{load_catalog, LoadedCatalog, Settings, Source};

mod browse;
mod catalog_cli;
mod render;
mod theme_cli;

/// Log levels
#[derive(Debug, Clone, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn to_filter_directive(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

#[derive(Parser, Debug)]
#[clap(
    name = "lessons",
    about = "Browse English With Simo video lessons by unit or by search",
    version
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,

    /// Catalog location (file path or http(s) URL), overrides settings
    #[clap(long, global = true)]
    source: Option<String>,

    /// Override settings file path
    #[clap(long, global = true)]
    config: Option<PathBuf>,

    /// Set log level
    #[clap(long, default_value = "warn", global = true)]
    log_level: LogLevel,

    /// Emit logs as JSON
    #[clap(long, global = true)]
    log_json: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List all units
    Units {
        /// Output as JSON
        #[clap(long)]
        json: bool,
    },

    /// Show the lessons of one unit
    Unit {
        /// Unit number
        number: u32,

        /// Output as JSON
        #[clap(long)]
        json: bool,
    },

    /// Search lessons by title, unit title or number
    Search {
        /// Search query (case-insensitive)
        query: String,

        /// Output results as JSON
        #[clap(long)]
        json: bool,
    },

    /// Browse the catalog interactively
    Browse,

    /// Show or change the colour theme
    Theme {
        #[clap(subcommand)]
        command: Option<theme_cli::ThemeCommand>,
    },
}

/// Settings plus the per-run overrides from the command line
pub struct AppContext {
    pub settings: Settings,
    pub settings_path: PathBuf,
    source_override: Option<String>,
}

impl AppContext {
    fn load(config: Option<PathBuf>, source_override: Option<String>) -> Result<Self> {
        let settings_path = match config {
            Some(path) => path,
            None => Settings::default_path()?,
        };
        let settings = Settings::load_from_path(&settings_path)?;

        Ok(Self {
            settings,
            settings_path,
            source_override,
        })
    }

    /// Where this run reads its catalog from
    pub fn source(&self) -> Source {
        let location = self
            .source_override
            .as_deref()
            .unwrap_or(&self.settings.source);
        Source::from_location(
            location,
            Duration::from_secs(self.settings.fetch_timeout_secs),
        )
    }

    /// Load the catalog, noting on stderr when the fallback is used
    pub async fn load_catalog(&self) -> LoadedCatalog {
        let loaded = load_catalog(&self.source()).await;
        if loaded.is_fallback() {
            eprintln!("Note: showing the {}", loaded.origin);
        }
        loaded
    }

    pub fn save_settings(&self) -> Result<()> {
        self.settings.save_to_path(&self.settings_path)
    }
}

/// Initialize tracing
///
/// Logs always go to stderr so tables and JSON on stdout stay clean.
fn initialize_tracing(log_level: &LogLevel, json: bool) {
    let filter = EnvFilter::new(log_level.to_filter_directive());

    if json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .with_writer(std::io::stderr)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    initialize_tracing(&cli.log_level, cli.log_json);

    let mut ctx = AppContext::load(cli.config, cli.source)?;

    match cli.command {
        Command::Units { json } => catalog_cli::execute_units(&ctx, json).await,
        Command::Unit { number, json } => catalog_cli::execute_unit(&ctx, number, json).await,
        Command::Search { query, json } => catalog_cli::execute_search(&ctx, &query, json).await,
        Command::Browse => browse::run(&mut ctx).await,
        Command::Theme { command } => theme_cli::execute(&mut ctx, command),
    }
}

#[cfg(test)]
mod cli_tests {
    use super::*;

    #[test]
    fn test_parse_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "lessons",
            "search",
            "grammar",
            "--json",
            "--source",
            "videos.txt",
            "--log-level",
            "debug",
        ])
        .unwrap();

        assert_eq!(cli.source.as_deref(), Some("videos.txt"));
        assert!(matches!(cli.log_level, LogLevel::Debug));
        match cli.command {
            Command::Search { query, json } => {
                assert_eq!(query, "grammar");
                assert!(json);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_unit_number_must_be_numeric() {
        assert!(Cli::try_parse_from(["lessons", "unit", "abc"]).is_err());
        assert!(Cli::try_parse_from(["lessons", "unit", "3"]).is_ok());
    }

    #[test]
    fn test_context_prefers_source_override() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let ctx = AppContext::load(
            Some(temp_dir.path().join("settings.yaml")),
            Some("https://example.com/videos.txt".to_string()),
        )
        .unwrap();
        assert!(ctx.source().is_remote());

        let ctx = AppContext::load(Some(temp_dir.path().join("settings.yaml")), None).unwrap();
        assert!(!ctx.source().is_remote());
    }
}
