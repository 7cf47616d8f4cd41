pub mod report;

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Command-line arguments for ddsmcat
#[derive(Parser, Debug)]
#[command(name = "ddsmcat")]
#[command(about = "DDSM case-metadata and lesion-annotation inspection tool")]
#[command(version)]
pub struct Cli {
    /// Path to case-metadata (.ics) file
    #[arg(value_name = "ICS_FILE")]
    pub case_file: PathBuf,

    /// Lesion-annotation (.OVERLAY) files to parse alongside the case
    #[arg(short, long = "overlay", value_name = "OVERLAY_FILE")]
    pub overlays: Vec<PathBuf>,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

/// Output format options
#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text format
    Text,
    /// JSON format
    Json,
}
