pub mod cli;

use serde::{Deserialize, Serialize};
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// The surface area alone
    #[default]
    Text,
    /// A JSON object with the dimensions and the area
    Json,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, clap::Parser)]
#[command(name = "box-area", version)]
#[command(about = "Reads two base dimensions and a height, one per line, and prints the box's surface area")]
pub struct CliConfig {
    /// Read the three lines from this file instead of standard input
    #[arg(long)]
    pub input: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}
