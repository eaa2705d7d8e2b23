use anyhow::Result;
use clap::Parser;
use pollyanna::cli::{Cli, Commands};
use pollyanna::commands::{self, AssignConfig};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Assign {
            input,
            reveal_addresses,
            output,
            config,
            verbosity,
        } => {
            init_logging(verbosity);
            commands::run_assignment(AssignConfig {
                input,
                reveal_addresses,
                output,
                config,
            })
        }
        Commands::Init { force } => commands::init_config(force),
    }
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        _ => log::LevelFilter::Debug,
    };
    // RUST_LOG still wins over the -v flags when set.
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}
