// ABOUTME: Shared setup for the devtoken command-line interface
// ABOUTME: Token commands, environment-driven configuration, and logging initialization

pub mod commands;
pub mod config;
pub mod logging;


pub use commands::tokens::TokenCommands;
pub use config::{Config, ConfigError};
