//! # qiniu-bed
//!
//! An async client for an image bed HTTP API backed by Qiniu object storage.
//!
//! ## Features
//!
//! - **Upload tokens**: request an opaque token from the server
//! - **Multipart uploads**: send a file as the single `file` form part
//! - **Deletion by key**: remove a stored file
//! - **Serving domain**: look up where stored files are served from
//! - **Key generation**: build `bed/<millis>.<ext>` keys locally
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use qiniu_bed::{ClientConfig, FileHost, QiniuClient, Result, UploadFile};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let client = QiniuClient::new(
//!         ClientConfig::builder()
//!             .base_url("http://localhost:8080/api")
//!             .build(),
//!     )?;
//!
//!     let file = UploadFile::from_path("photo.png").await?;
//!     let uploaded = client.upload_file(file).await?;
//!     println!("{}", uploaded.body);
//!
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_possible_truncation)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types and type aliases
pub mod types;

/// Client configuration
pub mod config;

/// HTTP transport
pub mod http;

/// Image bed operations and key generation
pub mod qiniu;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::ClientConfig;
pub use error::{Error, Result};
pub use qiniu::{generate_key, generate_key_at, FileHost, QiniuClient, UploadFile};
pub use types::{ApiResponse, JsonValue};
