// src/env.rs

//! Build environment
//!
//! Product- and platform-wide values the planner consumes but never owns:
//! SDK/platform versions, the default signing certificate, overlay roots,
//! output locations. The environment is loaded once and threaded through
//! every resolver as an explicit read-only parameter; nothing in this crate
//! reaches for ambient global state.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Externally-supplied build environment for one planning run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildEnv {
    /// Platform SDK API level, used for SDK defaults and `--version-code`
    pub platform_sdk_version: String,

    /// Platform version string, e.g. "14"
    pub platform_version: String,

    /// Build number appended to the default `--version-name`
    pub build_number: String,

    /// Product characteristics passed to aapt via `--product`
    #[serde(default = "default_characteristics")]
    pub product_aapt_characteristics: String,

    /// Product default signing certificate, used verbatim when a module
    /// declares no certificate
    pub default_certificate: String,

    /// Directory searched when a module names a certificate without a path
    pub default_certificate_dir: PathBuf,

    /// Resource overlay roots, highest priority first
    #[serde(default)]
    pub resource_overlay_roots: Vec<PathBuf>,

    /// Root for per-module intermediate and package outputs
    pub out_dir: PathBuf,

    /// Root for install declarations
    pub install_dir: PathBuf,
}

fn default_characteristics() -> String {
    "default".to_string()
}

/// Parse a build environment from a TOML string
pub fn parse_env(content: &str) -> Result<BuildEnv> {
    toml::from_str(content).map_err(|e| Error::ParseError(format!("Invalid environment: {}", e)))
}

/// Parse a build environment from a file
pub fn parse_env_file(path: &Path) -> Result<BuildEnv> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| Error::IoError(format!("Failed to read environment file: {}", e)))?;

    parse_env(&content)
}
