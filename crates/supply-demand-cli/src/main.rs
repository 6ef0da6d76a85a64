//! Supply/demand CLI: the `supply-demand` command.

mod cli;
mod commands;
mod config;
mod support;

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Demo { run } => commands::demo::run(run),
        Commands::Chain { run } => commands::chain::run(run),
        Commands::Missing { run } => commands::missing::run(run),
    }
}
