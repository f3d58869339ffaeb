//! Escala CLI library.
//!
//! This crate provides the command-line interface for the volunteer travel
//! allocation tool.

mod cli;
pub mod commands;
mod config;

pub use cli::{Cli, Commands, CreateArgs, EditArgs};
pub use config::Config;
