use std::path::PathBuf;

use clap::Parser;

use crate::Commands;

/// Main CLI application arguments and command structure
#[derive(Parser)]
#[clap(version, about = "Organize free-text notes under named titles")]
pub struct Cli {
    /// Directory where application data is stored
    #[clap(long, value_parser)]
    pub data_dir: Option<PathBuf>,

    /// Verbose output mode
    #[clap(short, long)]
    pub verbose: bool,

    /// Subcommands for the titlenote application
    #[clap(subcommand)]
    pub command: Commands,
}
