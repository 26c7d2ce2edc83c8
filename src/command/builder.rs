// file: src/command/builder.rs
// version: 1.0.0
// guid: a3f17c9e-4b62-4d08-9e5a-c8d20b61f7e3

//! Scout agent command line builder

use super::{shell, template};
use crate::config::{KeySetting, NodeAttributes};
use crate::error::ScoutError;
use crate::Result;
use indexmap::IndexMap;
use serde::Serialize;
use std::fmt;
use tracing::debug;

/// Agent binary on the PATH
pub const EXECUTABLE: &str = "scout";
/// Wrapper created by `rvm wrapper <ruby> scout scout`
pub const RVM_EXECUTABLE: &str = "/usr/local/rvm/bin/scout_scout";
/// Option key the display name is rendered under
pub const NAME_OPTION: &str = "name";

/// Derives the agent invocation from a node's attributes
///
/// Every accessor is a pure projection of the borrowed attributes, so calling
/// one repeatedly always gives the same answer.
#[derive(Debug, Clone, Copy)]
pub struct ScoutCommand<'a> {
    node: &'a NodeAttributes,
}

impl<'a> ScoutCommand<'a> {
    pub fn new(node: &'a NodeAttributes) -> Self {
        Self { node }
    }

    pub fn node(&self) -> &'a NodeAttributes {
        self.node
    }

    /// True when the agent runs from an rvm ruby
    pub fn is_rvm(&self) -> bool {
        self.node.scout.uses_rvm()
    }

    pub fn executable(&self) -> &'static str {
        if self.is_rvm() {
            RVM_EXECUTABLE
        } else {
            EXECUTABLE
        }
    }

    /// The account key for the node's environment
    pub fn key(&self) -> Result<&'a str> {
        let environment = self.node.chef_environment.as_str();
        let setting = self
            .node
            .scout
            .key
            .as_ref()
            .ok_or_else(|| ScoutError::missing_key(environment))?;

        match setting {
            KeySetting::Scalar(_) => debug!("Using shared scout key"),
            KeySetting::PerEnvironment(_) => {
                debug!("Looking up scout key for environment {}", environment)
            }
        }

        setting
            .resolve(environment)
            .ok_or_else(|| ScoutError::missing_key(environment))
    }

    /// The display name with affixes and placeholders applied
    pub fn name(&self) -> Option<String> {
        let scout = &self.node.scout;
        let name = scout.name.as_deref().filter(|n| !n.is_empty())?;

        let joined = template::join_name_parts(
            scout.name_prefix.as_deref(),
            name,
            scout.name_suffix.as_deref(),
        );
        Some(template::expand_placeholders(
            &joined,
            &self.node.name,
            &self.node.chef_environment,
        ))
    }

    /// Configured options plus the display name
    ///
    /// A configured `name` option keeps its position but takes the display
    /// name's value; otherwise the display name is appended last.
    pub fn options(&self) -> IndexMap<String, String> {
        let mut options = self.node.scout.options.clone();
        if let Some(name) = self.name() {
            options.insert(NAME_OPTION.to_string(), name);
        }
        options
    }

    /// Options rendered as `--option 'value'` tokens
    pub fn arguments(&self) -> String {
        render_arguments(&self.options())
    }

    /// Render the full invocation
    pub fn to_command_line(&self) -> Result<CommandLine> {
        let key = self.key()?;
        let options = self.options();
        let arguments = render_arguments(&options);
        let executable = self.executable();

        let command_line = [executable, key, arguments.as_str()]
            .join(" ")
            .trim()
            .to_string();

        debug!(
            "Rendered {} command with {} option(s)",
            executable,
            options.len()
        );

        Ok(CommandLine {
            executable: executable.to_string(),
            key: key.to_string(),
            name: self.name(),
            options,
            arguments,
            command_line,
        })
    }
}

fn render_arguments(options: &IndexMap<String, String>) -> String {
    options
        .iter()
        .map(|(option, value)| shell::long_option(option, value))
        .collect::<Vec<_>>()
        .join(" ")
}

/// A rendered agent invocation
///
/// The key is part of `command_line` but is left out of the serialized
/// fields and of `Debug` output.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct CommandLine {
    pub executable: String,
    #[serde(skip)]
    key: String,
    pub name: Option<String>,
    pub options: IndexMap<String, String>,
    pub arguments: String,
    pub command_line: String,
}

impl CommandLine {
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn as_str(&self) -> &str {
        &self.command_line
    }

    pub fn into_string(self) -> String {
        self.command_line
    }
}

impl fmt::Display for CommandLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.command_line)
    }
}

impl fmt::Debug for CommandLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandLine")
            .field("executable", &self.executable)
            .field("key", &"<redacted>")
            .field("name", &self.name)
            .field("options", &self.options)
            .field("arguments", &self.arguments)
            .finish()
    }
}
