//! CLI argument definitions for icon-prune
//!
//! This module contains all clap-derived structs and enums for CLI parsing.

mod core;

pub use core::{Cli, Commands, OutputFormat, RunArgs};
