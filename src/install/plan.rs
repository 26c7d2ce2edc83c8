// file: src/install/plan.rs
// version: 1.0.0
// guid: 2b7f5e19-c08d-4a63-91f4-d6e8a3b0c527

//! Ordered install steps for the agent and its companion gems

use super::RubyManager;
use crate::config::NodeAttributes;
use crate::Result;
use tracing::info;

/// Gem that ships the agent binary
pub const AGENT_GEM: &str = "scout";
/// Prefix and binary passed to `rvm wrapper`
pub const WRAPPER_PREFIX: &str = "scout";
pub const WRAPPER_BINARY: &str = "scout";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallStep {
    /// Install the rvm ruby and create its gemset
    EnsureRuby { ruby_string: String },
    /// Install a gem; latest when no version is pinned
    Gem { name: String, version: Option<String> },
    /// Expose a gem binary as `/usr/local/rvm/bin/<prefix>_<binary>`
    Wrapper {
        ruby_string: String,
        prefix: String,
        binary: String,
    },
}

impl InstallStep {
    /// Render the step as a shell command
    pub fn render(&self, manager: &RubyManager) -> String {
        match self {
            InstallStep::EnsureRuby { ruby_string } => {
                format!("rvm use --install --create {}", ruby_string)
            }
            InstallStep::Gem { name, version } => manager.gem_install(name, version.as_deref()),
            InstallStep::Wrapper {
                ruby_string,
                prefix,
                binary,
            } => format!("rvm wrapper {} {} {}", ruby_string, prefix, binary),
        }
    }
}

/// Install steps for one node under one ruby manager
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallPlan {
    manager: RubyManager,
    steps: Vec<InstallStep>,
}

impl InstallPlan {
    pub fn for_node(node: &NodeAttributes, manager: RubyManager) -> Self {
        let scout = &node.scout;
        let mut steps = Vec::new();

        if let RubyManager::Rvm { ruby_string } = &manager {
            steps.push(InstallStep::EnsureRuby {
                ruby_string: ruby_string.clone(),
            });
        }

        steps.push(InstallStep::Gem {
            name: AGENT_GEM.to_string(),
            version: pinned(scout.version.as_deref()),
        });

        for (gem, version) in &scout.gem_packages {
            steps.push(InstallStep::Gem {
                name: gem.clone(),
                version: pinned(version.as_deref()),
            });
        }

        if let RubyManager::Rvm { ruby_string } = &manager {
            steps.push(InstallStep::Wrapper {
                ruby_string: ruby_string.clone(),
                prefix: WRAPPER_PREFIX.to_string(),
                binary: WRAPPER_BINARY.to_string(),
            });
        }

        info!(
            "Planned {} install step(s) for {} under {}",
            steps.len(),
            node.name,
            manager.kind().as_str()
        );

        Self { manager, steps }
    }

    /// Plan with the manager detected from the attributes
    pub fn detect(node: &NodeAttributes) -> Result<Self> {
        let manager = RubyManager::detect(&node.scout)?;
        Ok(Self::for_node(node, manager))
    }

    pub fn manager(&self) -> &RubyManager {
        &self.manager
    }

    pub fn steps(&self) -> &[InstallStep] {
        &self.steps
    }

    /// Every step rendered in order
    pub fn commands(&self) -> Vec<String> {
        self.steps
            .iter()
            .map(|step| step.render(&self.manager))
            .collect()
    }
}

fn pinned(version: Option<&str>) -> Option<String> {
    version.filter(|v| !v.is_empty()).map(str::to_string)
}
