//! CLI module
//!
//! Command-line interface over the resource APIs.
//!
//! # Commands
//!
//! - `rules` - Get or list a user's rules
//! - `devices` - Get or list a user's devices
//! - `device-types` - List device types
//! - `tags` - List tags or tag categories

mod commands;
mod runner;

pub use commands::{
    Cli, Commands, DeviceTypeCommands, DeviceCommands, OutputFormat, PageArgs, RuleCommands,
    TagCommands,
};
pub use runner::Runner;
