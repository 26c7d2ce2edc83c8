// file: src/command/mod.rs
// version: 1.0.0
// guid: 6e2d9b40-8f13-4a7c-b5e9-3c04d1a8f762

//! Scout agent invocation rendering

pub mod builder;
pub mod shell;
pub mod template;

pub use builder::{CommandLine, ScoutCommand, EXECUTABLE, RVM_EXECUTABLE};
