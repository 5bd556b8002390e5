// src/error.rs
// =============================================================================
// Error types for the scanning pipeline.
//
// Every variant here is recoverable at the level of a single input item:
// the driver logs it, records a count of 0, and moves on to the next token.
// The Display strings are the exact diagnostic lines printed to stdout.
// =============================================================================

use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScanError {
    /// A file token could not be opened or read as text
    #[error("Error opening file {token}. File may not exist")]
    FileRead {
        token: String,
        #[source]
        source: io::Error,
    },

    /// A URL token could not be fetched (DNS, connect, TLS, timeout, bad URL...)
    #[error("Error opening {token}. URL syntax maybe wrong")]
    Fetch {
        token: String,
        #[source]
        source: reqwest::Error,
    },

    /// The resolved HTML was the empty string
    #[error("{token} Invalid HTML. Unable to parse")]
    EmptyDocument { token: String },

    /// The shared HTTP client could not be constructed
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, ScanError>;
