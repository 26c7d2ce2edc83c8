// file: src/main.rs
// version: 1.0.0
// guid: 0f8a2c57-d6e1-4b39-a7f4-19c5e8b3d260

//! scout-command - Main entry point

use clap::Parser;
use scout_command::{
    cli::{
        args::{Cli, Commands},
        commands::*,
    },
    logging::logger,
    Result,
};

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.json_logs {
        logger::init_json_logger(cli.verbose, cli.quiet)?;
    } else {
        logger::init_logger(cli.verbose, cli.quiet)?;
    }

    match cli.command {
        Commands::Render {
            node,
            environment,
            node_name,
            json,
        } => render_command(&node, environment, node_name, json),
        Commands::InstallPlan { node, manager } => {
            install_plan_command(&node, manager.map(Into::into))
        }
    }
}
