use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "pollyanna")]
#[command(about = "Secret-gift-exchange assignment generator", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Assign every survey respondent a gift recipient and write the hand-outs
    Assign {
        /// Path to the survey CSV export
        input: PathBuf,

        /// Include every recipient's address regardless of reveal consent
        #[arg(long = "reveal-addresses")]
        reveal_addresses: bool,

        /// Output directory, created if absent (defaults to ./output)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Configuration file (defaults to .pollyanna.toml when present)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Increase verbosity level (can be repeated: -v, -vv)
        #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
        verbosity: u8,
    },

    /// Initialize configuration file
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}
