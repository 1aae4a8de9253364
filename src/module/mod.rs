// src/module/mod.rs

//! Declarative app module descriptions
//!
//! An app module is described in a TOML file next to its sources:
//!
//! ```toml
//! [app]
//! name = "Calculator"
//! certificate = "platform"
//! resource_dirs = ["res"]
//! aapt_flags = ["--version-code 21"]
//! ```
//!
//! All directory references are relative to the module file's directory
//! (the module source root). The description is immutable after load; the
//! planner only ever reads it.

mod parser;

pub use parser::{parse_module, parse_module_file, validate_module};

use serde::{Deserialize, Serialize};

/// Manifest file name used when a module does not declare one
pub const DEFAULT_MANIFEST: &str = "AndroidManifest.xml";

/// Asset directory name used when `asset_dirs` is empty
pub const DEFAULT_ASSET_DIR: &str = "assets";

/// Resource directory name used when `resource_dirs` is empty
pub const DEFAULT_RESOURCE_DIR: &str = "res";

/// Per-module configuration for app packaging
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Module name; the installed artifact is `<name>.apk`
    pub name: String,

    /// Manifest file relative to the module source root.
    /// Defaults to `AndroidManifest.xml`.
    #[serde(default)]
    pub manifest: Option<String>,

    /// Path to a certificate, or the name of a certificate in the default
    /// certificate directory, or blank to use the default product certificate
    #[serde(default)]
    pub certificate: String,

    /// Extra certificates to sign the package with, relative to the module
    /// source root
    #[serde(default)]
    pub additional_certificates: Vec<String>,

    /// If set, create package-export.apk, which other modules can use to get
    /// product-agnostic resource data like IDs and type definitions
    #[serde(default)]
    pub export_package_resources: bool,

    /// Flags passed to aapt when creating the package
    #[serde(default)]
    pub aapt_flags: Vec<String>,

    /// Resource labels to generate individual resource packages for.
    /// Parsed and carried, but not yet consumed by any planning step.
    #[serde(default)]
    pub package_splits: Vec<String>,

    /// Directories containing assets, relative to the module source root.
    /// Defaults to "assets".
    #[serde(default)]
    pub asset_dirs: Vec<String>,

    /// Directories containing Android resources, relative to the module
    /// source root. Defaults to "res".
    #[serde(default)]
    pub resource_dirs: Vec<String>,

    /// Declared SDK version; when unset the platform default applies
    #[serde(default)]
    pub sdk_version: Option<String>,

    /// Skip the implicit platform resource dependency
    #[serde(default)]
    pub no_standard_libraries: bool,

    /// Test apps are packaged without the compression flag
    #[serde(default)]
    pub test_app: bool,
}

impl AppConfig {
    /// Manifest file name, falling back to the default
    pub fn manifest_file(&self) -> &str {
        self.manifest.as_deref().unwrap_or(DEFAULT_MANIFEST)
    }

    /// Declared SDK version, treating empty as unset
    pub fn declared_sdk_version(&self) -> Option<&str> {
        self.sdk_version.as_deref().filter(|v| !v.is_empty())
    }
}
