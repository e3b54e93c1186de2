pub mod report;
pub mod style;

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Command-line arguments for exifcat
#[derive(Parser, Debug)]
#[command(name = "exifcat")]
#[command(about = "EXIF and GPS metadata inspection for image files")]
#[command(version)]
pub struct Cli {
    /// Path to image file
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

/// Output format options
#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable colored text
    Text,
    /// JSON format
    Json,
}
