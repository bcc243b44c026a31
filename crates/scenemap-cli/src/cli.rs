//! Command-line interface for the scenemap utility
//!
//! Scans the Godot project around the working directory and writes a Mermaid.js
//! class diagram of its scenes.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::debug;

use scenemap::core::logging::init_logging;
use scenemap::{scan_project, RunStatistics, ScanOptions, DEFAULT_OUTPUT};

/// Scenemap - Map Godot scenes into a Mermaid.js class diagram
#[derive(Parser)]
#[command(name = "scenemap")]
#[command(about = "Map the scenes and scripts of a Godot project into a Mermaid.js class diagram")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
pub struct Cli {
    /// Directory to scan (defaults to the current directory)
    #[arg(short, long)]
    pub dir: Option<PathBuf>,

    /// Diagram file to write
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Maximum directory depth to descend below the scanned directory
    #[arg(long)]
    pub max_depth: Option<usize>,

    /// Print the scan summary as JSON
    #[arg(long)]
    pub json: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Set log level (trace|debug|info|warn|error)
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    /// Set log format (compact|pretty|json)
    #[arg(long, value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}

/// Log level options
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

/// Log format options
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogFormat {
    Compact,
    Pretty,
    Json,
}

impl LogFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogFormat::Compact => "compact",
            LogFormat::Pretty => "pretty",
            LogFormat::Json => "json",
        }
    }
}

/// Scan summary as printed with `--json`
#[derive(Debug, Serialize)]
pub struct Summary {
    pub directory: PathBuf,
    pub output: PathBuf,
    #[serde(flatten)]
    pub statistics: RunStatistics,
}

impl Summary {
    /// Human-readable summary lines
    pub fn to_text(&self) -> String {
        format!(
            "Scenes: {}\nLines of code: {}",
            self.statistics.scenes, self.statistics.lines_of_code
        )
    }
}

/// Main CLI application
#[derive(Default)]
pub struct ScenemapApp;

impl ScenemapApp {
    pub fn new() -> Self {
        Self
    }

    /// Run the application with the given CLI arguments
    pub fn run(&self, cli: Cli) -> Result<()> {
        // Environment variables take precedence over flags
        let log_level_str = std::env::var("SCENEMAP_LOG_LEVEL")
            .ok()
            .or_else(|| std::env::var("RUST_LOG").ok())
            .or_else(|| Some(cli.log_level.as_str().to_string()));

        let log_format_str = std::env::var("SCENEMAP_LOG_FORMAT")
            .ok()
            .or_else(|| Some(cli.log_format.as_str().to_string()));

        if let Err(e) = init_logging(log_level_str.as_deref(), log_format_str.as_deref()) {
            eprintln!("Warning: Failed to initialize logging: {}", e);
        }

        if cli.verbose {
            eprintln!("Scenemap v{}", env!("CARGO_PKG_VERSION"));
        }

        let current_dir = std::env::current_dir().context("Cannot read the working directory")?;
        let options = self.build_options(&cli, &current_dir)?;

        if cli.verbose {
            eprintln!("Project root: {}", options.project_root.display());
            eprintln!("Writing diagram to {}", options.output.display());
        }

        if !cli.json {
            println!("Scanning code in {}...", options.scan_root.display());
        }

        let statistics = scan_project(&options)?;
        debug!(?statistics, "Scan statistics");

        let summary = Summary {
            directory: options.scan_root,
            output: options.output,
            statistics,
        };

        if cli.json {
            println!("{}", serde_json::to_string_pretty(&summary)?);
        } else {
            println!("{}", summary.to_text());
        }

        if cli.verbose && statistics.skipped_scenes + statistics.unreadable_scripts > 0 {
            eprintln!(
                "Skipped {} unreadable scene(s) and {} unreadable script(s)",
                statistics.skipped_scenes, statistics.unreadable_scripts
            );
        }

        Ok(())
    }

    /// Resolve scan options from the arguments and the working directory
    pub fn build_options(&self, cli: &Cli, current_dir: &Path) -> Result<ScanOptions> {
        let scan_root = match &cli.dir {
            Some(dir) => current_dir.join(dir),
            None => current_dir.to_path_buf(),
        };

        let options = ScanOptions::discover(scan_root)?
            .with_output(current_dir.join(&cli.output))
            .with_max_depth(cli.max_depth);
        Ok(options)
    }
}
