//! CLI commands and argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Image bed command-line client
#[derive(Parser, Debug)]
#[command(name = "qiniu-bed")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (YAML or JSON)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Base URL of the API, e.g. http://localhost:8080/api
    #[arg(short, long, global = true)]
    pub base_url: Option<String>,

    /// Request timeout in milliseconds
    #[arg(short, long, global = true)]
    pub timeout_ms: Option<u64>,

    /// Do not store or send cookies
    #[arg(long, global = true)]
    pub no_credentials: bool,

    /// Cookie to send with every request, e.g. JSESSIONID=... (repeatable)
    #[arg(long = "cookie", global = true, value_name = "COOKIE")]
    pub cookies: Vec<String>,

    /// Pretty-print JSON output
    #[arg(short, long, global = true)]
    pub pretty: bool,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Commands that call the API
    #[command(flatten)]
    Remote(RemoteCommand),

    /// Generate a storage key for a file name (no request is made)
    Key {
        /// File name to take the extension from
        name: String,
    },
}

/// Subcommands that issue a request to the image bed
#[derive(Subcommand, Debug)]
pub enum RemoteCommand {
    /// Request an upload token
    Token,

    /// Upload a local file
    Upload {
        /// File to upload
        path: PathBuf,
    },

    /// Delete a stored file by key
    Delete {
        /// Storage key, e.g. bed/1700000000000.png
        key: String,
    },

    /// Show the domain stored files are served from
    Domain,
}
