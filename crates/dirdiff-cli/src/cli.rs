use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "dirdiff",
    about = "Compare two directory trees and report per-file changes",
    version,
)]
pub struct Cli {
    /// Configuration file (defaults to dirdiff.yaml in the current directory)
    pub config: Option<PathBuf>,

    /// Write an example configuration file and exit
    #[arg(long)]
    pub init: bool,

    /// Overwrite an existing configuration file with --init
    #[arg(long, requires = "init")]
    pub force: bool,

    /// Output format for the report
    #[arg(long, default_value = "text")]
    pub format: OutputFormat,

    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
