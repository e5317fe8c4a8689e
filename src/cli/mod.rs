//! Command-line interface module.
//!
//! Provides argument parsing and report command handling.

pub mod args;
pub mod commands;
