// src/error.rs

//! Crate-wide error type
//!
//! All planning failures are fatal to the single module being planned; there
//! is no retry inside the crate. Re-running the planner on the next build is
//! the only recovery path, and that is owned by the caller.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for planning operations
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// Module description or environment file failed to parse
    #[error("parse error: {0}")]
    ParseError(String),

    /// Configuration parsed but is not usable (bad directory reference, etc.)
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The manifest is required for every app module, even when the name is
    /// synthesized from the default
    #[error("manifest not found: {}", .0.display())]
    MissingManifest(PathBuf),

    /// IO error during directory enumeration
    #[error("IO error: {0}")]
    IoError(String),
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::IoError(e.to_string())
    }
}

impl From<walkdir::Error> for Error {
    fn from(e: walkdir::Error) -> Self {
        Error::IoError(e.to_string())
    }
}
