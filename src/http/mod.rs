//! HTTP client module
//!
//! Thin transport layer over `reqwest` used by the image bed operations.
//!
//! # Features
//!
//! - **Fixed base URL**: every path is joined onto the configured base
//! - **Uniform timeout**: one request timeout for every call
//! - **Credential forwarding**: cookie store shared across requests
//! - **Status classification**: non-2xx responses become `Error::HttpStatus`

mod client;

pub use client::HttpClient;
