use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pitwall", version, about = "Race strategy advisor TUI")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to pitwall.yaml
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Compound fitted at launch (SOFT/MEDIUM/HARD/INTER/WET or S/M/H/I/W)
    #[arg(long, value_name = "COMPOUND")]
    pub compound: Option<String>,

    /// Increase log verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the season circuit directory
    Circuits,
    /// Validate config and test the weather API
    Check,
}
