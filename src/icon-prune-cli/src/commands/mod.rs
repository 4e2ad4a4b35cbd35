//! Command handlers for icon-prune CLI
//!
//! Each subcommand has its own module with handler functions.

pub mod avatars;
pub mod configure;
pub mod list;
pub mod run;
