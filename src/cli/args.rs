// file: src/cli/args.rs
// version: 1.0.0
// guid: d18f3a70-5e2b-4c94-b6a1-8f07e9c2d5b3

//! Command line argument definitions

use crate::install::ManagerKind;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "scout-command")]
#[command(about = "Render the Scout agent command line from node attributes")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[arg(long, global = true, help = "Emit logs as JSON on stderr")]
    pub json_logs: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the agent command line
    Render {
        #[arg(short, long, help = "Node attribute file (.yaml, .json or .toml)")]
        node: PathBuf,

        #[arg(short, long, env = "SCOUT_ENVIRONMENT", help = "Override chef_environment")]
        environment: Option<String>,

        #[arg(long, env = "SCOUT_NODE_NAME", help = "Override the node name")]
        node_name: Option<String>,

        #[arg(short, long, help = "Print the rendered parts as JSON")]
        json: bool,
    },

    /// Print the gem install commands for the agent
    InstallPlan {
        #[arg(short, long, help = "Node attribute file (.yaml, .json or .toml)")]
        node: PathBuf,

        #[arg(short, long, value_enum, help = "Ruby manager; detected when omitted")]
        manager: Option<ManagerArg>,
    },
}

/// Ruby manager argument for CLI
#[derive(clap::ValueEnum, Clone, Copy, Debug)]
pub enum ManagerArg {
    Rvm,
    Rbenv,
    System,
}

impl From<ManagerArg> for ManagerKind {
    fn from(manager: ManagerArg) -> Self {
        match manager {
            ManagerArg::Rvm => ManagerKind::Rvm,
            ManagerArg::Rbenv => ManagerKind::Rbenv,
            ManagerArg::System => ManagerKind::System,
        }
    }
}
