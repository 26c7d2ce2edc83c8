// file: src/install/mod.rs
// version: 1.0.1
// guid: f4a80c2d-71e9-4b35-8d6a-09c3e5b7a1f8

//! Gem install planning for the Scout agent
//!
//! The plan is rendered as shell commands; nothing here runs them.

pub mod plan;

pub use plan::{InstallPlan, InstallStep};

use crate::command::shell;
use crate::config::ScoutAttributes;
use crate::error::ScoutError;
use crate::Result;
use tracing::debug;

/// Which ruby manager owns the agent gems
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManagerKind {
    Rvm,
    Rbenv,
    System,
}

impl ManagerKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ManagerKind::Rvm => "rvm",
            ManagerKind::Rbenv => "rbenv",
            ManagerKind::System => "system",
        }
    }
}

impl std::str::FromStr for ManagerKind {
    type Err = ScoutError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "rvm" => Ok(ManagerKind::Rvm),
            "rbenv" => Ok(ManagerKind::Rbenv),
            "system" => Ok(ManagerKind::System),
            _ => Err(ScoutError::invalid_argument(format!(
                "Unknown ruby manager: {}",
                s
            ))),
        }
    }
}

/// A ruby manager together with the ruby it targets
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RubyManager {
    Rvm { ruby_string: String },
    Rbenv { ruby_version: String },
    System,
}

impl RubyManager {
    /// Pick the manager the attributes point at
    ///
    /// rvm wins over rbenv; with neither configured gems go to the system ruby.
    pub fn detect(scout: &ScoutAttributes) -> Result<Self> {
        let kind = if scout.uses_rvm() {
            ManagerKind::Rvm
        } else if scout.rbenv_ruby_string.as_deref().is_some_and(|r| !r.is_empty()) {
            ManagerKind::Rbenv
        } else {
            ManagerKind::System
        };

        debug!("Detected {} ruby manager", kind.as_str());
        Self::from_kind(kind, scout)
    }

    /// Build a manager of the requested kind from the attributes
    pub fn from_kind(kind: ManagerKind, scout: &ScoutAttributes) -> Result<Self> {
        match kind {
            ManagerKind::Rvm => scout
                .rvm_flag()
                .and_then(|flag| flag.ruby_string())
                .map(|ruby| RubyManager::Rvm {
                    ruby_string: ruby.to_string(),
                })
                .ok_or_else(|| {
                    ScoutError::config("rvm installs need rvm_ruby set to a ruby string")
                }),
            ManagerKind::Rbenv => scout
                .rbenv_ruby_string
                .as_deref()
                .filter(|ruby| !ruby.is_empty())
                .map(|ruby| RubyManager::Rbenv {
                    ruby_version: ruby.to_string(),
                })
                .ok_or_else(|| ScoutError::config("rbenv installs need rbenv_ruby_string")),
            ManagerKind::System => Ok(RubyManager::System),
        }
    }

    pub fn kind(&self) -> ManagerKind {
        match self {
            RubyManager::Rvm { .. } => ManagerKind::Rvm,
            RubyManager::Rbenv { .. } => ManagerKind::Rbenv,
            RubyManager::System => ManagerKind::System,
        }
    }

    /// `gem install` for this manager, pinned when a version is given
    pub fn gem_install(&self, gem: &str, version: Option<&str>) -> String {
        let mut install = format!("gem install {}", gem);
        if let Some(version) = version {
            install.push_str(" -v ");
            install.push_str(&shell::single_quote(version));
        }

        match self {
            RubyManager::Rvm { ruby_string } => format!("rvm {} do {}", ruby_string, install),
            RubyManager::Rbenv { ruby_version } => {
                format!("RBENV_VERSION={} rbenv exec {}", ruby_version, install)
            }
            RubyManager::System => install,
        }
    }
}
