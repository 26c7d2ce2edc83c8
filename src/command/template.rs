// file: src/command/template.rs
// version: 1.0.0
// guid: 0c9e7a52-d4b1-4e86-b3f8-25a6c1d7e094

//! Display name assembly

/// Placeholder replaced with the node name
pub const NODE_NAME_TOKEN: &str = "%{name}";
/// Placeholder replaced with the environment
pub const ENVIRONMENT_TOKEN: &str = "%{chef_environment}";

/// Join the present, non-empty name parts with single spaces
pub fn join_name_parts(prefix: Option<&str>, name: &str, suffix: Option<&str>) -> String {
    [prefix, Some(name), suffix]
        .into_iter()
        .flatten()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Substitute the node name and environment placeholders
pub fn expand_placeholders(template: &str, node_name: &str, environment: &str) -> String {
    template
        .replace(NODE_NAME_TOKEN, node_name)
        .replace(ENVIRONMENT_TOKEN, environment)
}
