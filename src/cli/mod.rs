// file: src/cli/mod.rs
// version: 1.0.0
// guid: b9e41d63-0a7c-4f25-9d8b-e6c3a05f17d2

//! Command line interface for scout-command

pub mod args;
pub mod commands;

pub use args::Cli;
pub use commands::*;
