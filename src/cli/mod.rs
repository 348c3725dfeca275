//! CLI module
//!
//! Command-line interface for the image bed API. Each command prints one
//! JSON object to stdout.
//!
//! # Commands
//!
//! - `token` - Request an upload token
//! - `upload` - Upload a local file
//! - `delete` - Delete a stored file by key
//! - `domain` - Show the serving domain
//! - `key` - Generate a storage key locally

mod commands;
mod runner;

pub use commands::{Cli, Commands, RemoteCommand};
pub use runner::{execute_remote, Runner};
