// file: src/config/mod.rs
// version: 1.0.0
// guid: c52e9a07-3b18-4f6d-9e41-0a7d2b8c5f19

//! Configuration module for scout-command
//!
//! Holds the node attribute tree and the loader that reads it from disk.

pub mod loader;
pub mod node;

pub use loader::ConfigLoader;
pub use node::{KeySetting, NodeAttributes, RubyFlag, ScoutAttributes, DEFAULT_ENVIRONMENT};

use std::path::Path;

/// Attribute file formats understood by the loader
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Yaml,
    Json,
    Toml,
}

impl FileFormat {
    /// Guess the format from a file extension
    pub fn from_path(path: &Path) -> crate::Result<Self> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);

        match extension.as_deref() {
            Some("yaml") | Some("yml") => Ok(FileFormat::Yaml),
            Some("json") => Ok(FileFormat::Json),
            Some("toml") => Ok(FileFormat::Toml),
            _ => Err(crate::error::ScoutError::config(format!(
                "Unsupported attribute file format: {}",
                path.display()
            ))),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FileFormat::Yaml => "yaml",
            FileFormat::Json => "json",
            FileFormat::Toml => "toml",
        }
    }
}
