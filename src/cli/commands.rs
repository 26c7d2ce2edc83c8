// file: src/cli/commands.rs
// version: 1.0.0
// guid: 7c25e0b9-f3d4-4186-a0e7-5b9d1c84f2a6

//! Command implementations for the CLI

use crate::{
    command::ScoutCommand,
    config::{ConfigLoader, NodeAttributes},
    install::{InstallPlan, ManagerKind, RubyManager},
    logging::with_operation_span,
    Result,
};
use std::path::Path;
use tracing::info;

/// Load node attributes and apply command line overrides
pub fn load_node(
    node_path: &Path,
    environment: Option<String>,
    node_name: Option<String>,
) -> Result<NodeAttributes> {
    let loader = ConfigLoader::new();
    let mut node = loader.load_node_attributes(node_path)?;

    if let Some(environment) = environment {
        info!("Using environment {} from the command line", environment);
        node.chef_environment = environment;
    }
    if let Some(node_name) = node_name {
        node.name = node_name;
    }

    Ok(node)
}

/// Render the agent command line, or its parts as JSON
pub fn render_output(node: &NodeAttributes, json: bool) -> Result<String> {
    with_operation_span("render", || -> Result<String> {
        let line = ScoutCommand::new(node).to_command_line()?;
        if json {
            Ok(serde_json::to_string_pretty(&line)?)
        } else {
            Ok(line.into_string())
        }
    })
}

/// Render the install commands, one per line
pub fn install_plan_output(node: &NodeAttributes, manager: Option<ManagerKind>) -> Result<String> {
    with_operation_span("install-plan", || -> Result<String> {
        let plan = match manager {
            Some(kind) => InstallPlan::for_node(node, RubyManager::from_kind(kind, &node.scout)?),
            None => InstallPlan::detect(node)?,
        };
        Ok(plan.commands().join("\n"))
    })
}

/// `render` subcommand
pub fn render_command(
    node_path: &Path,
    environment: Option<String>,
    node_name: Option<String>,
    json: bool,
) -> Result<()> {
    let node = load_node(node_path, environment, node_name)?;
    println!("{}", render_output(&node, json)?);
    Ok(())
}

/// `install-plan` subcommand
pub fn install_plan_command(node_path: &Path, manager: Option<ManagerKind>) -> Result<()> {
    let node = load_node(node_path, None, None)?;
    println!("{}", install_plan_output(&node, manager)?);
    Ok(())
}
