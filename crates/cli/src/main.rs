mod cli;
mod commands;
mod config;

use clap::Parser;

use crate::cli::{Cli, Commands};
use crate::config::Config;

fn main() -> eyre::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so converted output can be piped.
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let config = Config::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Convert {
            input,
            into,
            format,
            max_depth,
        } => commands::handle_convert(&input, into, format, max_depth, &config),
        Commands::Tags => commands::handle_tags(&config),
    }
}
