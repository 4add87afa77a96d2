//! CLI argument parsing

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};

use crate::config::{ClientConfig, DetectionMethod};

#[derive(Parser, Debug)]
#[command(name = "voicecheckr")]
#[command(version, about = "Check voice recordings against a deepfake detection service")]
pub struct Args {
    /// Base URL of the detection service
    #[arg(short, long, global = true, env = "VOICECHECKR_SERVER")]
    pub server: Option<String>,

    /// Config file (defaults to <config dir>/voicecheckr/config.json)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Request timeout in seconds
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Upload one recording and show the verdict
    Detect {
        /// Audio file to upload
        file: Option<PathBuf>,

        /// Detection method (rule, ml, hybrid)
        #[arg(short, long, default_value_t = DetectionMethod::Hybrid)]
        method: DetectionMethod,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Run every audio file under a path and write a prediction CSV
    Export {
        /// File or directory to scan
        input: PathBuf,

        /// CSV destination
        #[arg(short, long, default_value = "predictions.csv")]
        output: PathBuf,

        /// Detection method (rule, ml, hybrid)
        #[arg(short, long, default_value_t = DetectionMethod::Hybrid)]
        method: DetectionMethod,

        /// Hide the progress bar
        #[arg(long)]
        no_progress: bool,
    },
    /// Check that the service is up
    Health,
    /// List available detection methods
    Methods,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    /// Result section markup
    Html,
}

/// Config file values with command-line overrides applied
pub fn resolve_config(args: &Args) -> Result<ClientConfig> {
    let mut config = ClientConfig::load(args.config.as_deref()).context("Failed to load config")?;

    if let Some(server) = &args.server {
        config.server_url = server.clone();
    }
    if let Some(timeout) = args.timeout {
        config.timeout_secs = Some(timeout);
    }

    config.validate()?;
    Ok(config)
}
