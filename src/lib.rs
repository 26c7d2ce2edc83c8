// file: src/lib.rs
// version: 1.0.0
// guid: 5d7e3b18-a94c-4f02-8c6d-e1b07f2a9c45

//! # scout-command
//!
//! Turns a node's attribute tree into the shell command that starts the Scout
//! monitoring agent, and into the gem install plan that puts the agent on the
//! host under rvm, rbenv or the system ruby.
//!
//! ```
//! use scout_command::{command::ScoutCommand, config::{KeySetting, NodeAttributes, ScoutAttributes}};
//!
//! let node = NodeAttributes::new("i-12345678", "_default").with_scout(ScoutAttributes {
//!     key: Some(KeySetting::Scalar("key".to_string())),
//!     name: Some("Role Based Name (%{name})".to_string()),
//!     ..Default::default()
//! });
//!
//! let line = ScoutCommand::new(&node).to_command_line()?;
//! assert_eq!(line.as_str(), "scout key --name 'Role Based Name (i-12345678)'");
//! # Ok::<(), scout_command::ScoutError>(())
//! ```

pub mod cli;
pub mod command;
pub mod config;
pub mod error;
pub mod install;
pub mod logging;

pub use command::{CommandLine, ScoutCommand};
pub use error::{MissingKeyError, Result, ScoutError};

/// Version information for the utility
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
