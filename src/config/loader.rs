// file: src/config/loader.rs
// version: 1.1.0
// guid: e7a4c1d8-2f95-4b3a-86e0-d9b15c7a2e40

//! Attribute file loading and environment variable substitution

use super::{FileFormat, NodeAttributes};
use crate::error::ScoutError;
use crate::Result;
use regex::Regex;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Attribute loader with environment variable substitution
pub struct ConfigLoader {
    env_vars: HashMap<String, String>,
}

impl ConfigLoader {
    /// Create a new loader seeded from the process environment
    pub fn new() -> Self {
        Self {
            env_vars: std::env::vars().collect(),
        }
    }

    /// Create a loader that only knows the given variables
    pub fn with_env_vars(env_vars: HashMap<String, String>) -> Self {
        Self { env_vars }
    }

    /// Load node attributes, choosing the parser from the file extension
    pub fn load_node_attributes<P: AsRef<Path>>(&self, path: P) -> Result<NodeAttributes> {
        let path = path.as_ref();
        let format = FileFormat::from_path(path)?;
        let content = fs::read_to_string(path).map_err(|e| {
            ScoutError::config(format!(
                "Failed to read attribute file {}: {}",
                path.display(),
                e
            ))
        })?;

        debug!("Loading {} attributes from {}", format.as_str(), path.display());
        self.parse_node_attributes(&content, format)
    }

    /// Parse node attributes from already loaded content
    pub fn parse_node_attributes(&self, content: &str, format: FileFormat) -> Result<NodeAttributes> {
        let expanded = self.expand_env_vars(content)?;
        let node = match format {
            FileFormat::Yaml => serde_yaml::from_str(&expanded)?,
            FileFormat::Json => serde_json::from_str(&expanded)?,
            FileFormat::Toml => toml::from_str(&expanded)?,
        };
        Ok(node)
    }

    /// Expand `${VAR}` references in attribute content
    ///
    /// Values are spliced into the raw text before parsing, so a value that
    /// contains YAML or JSON syntax (`: `, quotes, braces) must be quoted in
    /// the file or it changes the document structure.
    fn expand_env_vars(&self, content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}")
            .map_err(|e| ScoutError::config(format!("Invalid regex pattern: {}", e)))?;

        let mut missing_vars = Vec::new();
        let expanded = re.replace_all(content, |cap: &regex::Captures<'_>| {
            match self.env_vars.get(&cap[1]) {
                Some(value) => value.clone(),
                None => {
                    if !missing_vars.contains(&cap[1].to_string()) {
                        missing_vars.push(cap[1].to_string());
                    }
                    cap[0].to_string()
                }
            }
        });

        if !missing_vars.is_empty() {
            return Err(ScoutError::config(format!(
                "Missing environment variables: {}",
                missing_vars.join(", ")
            )));
        }

        Ok(expanded.into_owned())
    }

    /// Set environment variable for substitution
    pub fn set_env_var(&mut self, key: String, value: String) {
        self.env_vars.insert(key, value);
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
