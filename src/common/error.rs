//! Error types for the runtest CLI
//!
//! Every fatal failure funnels into this enum and propagates to the entry
//! point, which normalizes it into an error-valued test result and exit
//! code 1. Missing required properties are deliberately not errors; they
//! are reported as ordinary test results (see the runner module).

use std::io;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the runtest CLI
#[derive(Error, Debug)]
pub enum Error {
    // === Configuration Errors ===
    #[error("Could not load properties file - {path}: {source}")]
    PropertiesFile {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("Unrecognized property in property file - {name}")]
    UnrecognizedProperty { name: String },

    // === Endpoint Errors ===
    #[error("URL property is not set")]
    UrlNotSet,

    #[error("Bad server URL - {url}")]
    BadServerUrl { url: String },

    // === Remote Invocation Errors ===
    #[error("Remote test invocation failed: {0}")]
    Remote(#[from] reqwest::Error),

    #[error("Server rejected test invocation ({status}): {message}")]
    RemoteRejected { status: u16, message: String },

    // === IO Errors ===
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}
