// file: src/logging/mod.rs
// version: 1.0.0
// guid: 47d0b8e2-1c6f-4a9d-8e35-b2f90c6a1d74

//! Logging system for scout-command

pub mod logger;

pub use logger::{init_json_logger, init_logger, with_operation_span};
