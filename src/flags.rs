// src/flags.rs

//! Packaging flag assembly
//!
//! A [`FlagSequence`] is an ordered list of opaque command-line tokens, one
//! token per flag (the flag and its value share a token, e.g. `"-M
//! AndroidManifest.xml"`). Order matters twice over: the packaging tool
//! honors last-flag-wins for some options, and reproducible invocation logs
//! need byte-identical sequences from identical inputs.
//!
//! Explicit module flags always come first, and a computed default is only
//! appended when no explicit token carries the same prefix. The `--product`
//! default is special: it is applied per invocation, on that invocation's
//! own copy of the sequence, never through shared state.

use crate::env::BuildEnv;
use crate::module::AppConfig;
use crate::resources::ResolvedDirSet;
use std::fmt;
use std::path::Path;

/// Ordered, append-only sequence of packaging flags
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlagSequence {
    flags: Vec<String>,
}

impl FlagSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a sequence from explicit module flags, verbatim
    pub fn from_flags(flags: &[String]) -> Self {
        Self {
            flags: flags.to_vec(),
        }
    }

    pub fn push(&mut self, flag: impl Into<String>) {
        self.flags.push(flag.into());
    }

    /// Prefix scan used for explicit-wins detection
    pub fn contains_prefix(&self, prefix: &str) -> bool {
        self.flags.iter().any(|f| f.starts_with(prefix))
    }

    /// Append the product characteristics default unless this sequence
    /// already carries an explicit `--product` flag.
    ///
    /// Consumes the sequence so each invocation extends its own copy.
    pub fn with_product_default(mut self, characteristics: &str) -> Self {
        if !self.contains_prefix("--product") {
            self.push(format!("--product {}", characteristics));
        }
        self
    }

    pub fn as_slice(&self) -> &[String] {
        &self.flags
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.flags.iter()
    }

    pub fn len(&self) -> usize {
        self.flags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }
}

impl fmt::Display for FlagSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.flags.join(" "))
    }
}

/// Assemble the base aapt flag sequence for one module
///
/// The order is fixed: explicit flags, compression, manifest, asset dirs,
/// resource dirs (overlays already prepended), dependency includes, SDK
/// versions, then version-code/version-name defaults gated on the explicit
/// scan. `--product` is not appended here; each invocation applies its own
/// default on its own copy.
pub fn assemble_aapt_flags(
    cfg: &AppConfig,
    asset_dirs: &ResolvedDirSet,
    resource_dirs: &ResolvedDirSet,
    manifest_path: &Path,
    dep_flags: &[String],
    env: &BuildEnv,
) -> FlagSequence {
    let mut flags = FlagSequence::from_flags(&cfg.aapt_flags);

    // Scan the explicit flags before any default is computed
    let has_version_code = flags.contains_prefix("--version-code");
    let has_version_name = flags.contains_prefix("--version-name");

    if !cfg.test_app {
        flags.push("-z");
    }

    flags.push(format!("-M {}", manifest_path.display()));

    for dir in asset_dirs.paths() {
        flags.push(format!("-A {}", dir.display()));
    }
    for dir in resource_dirs.paths() {
        flags.push(format!("-S {}", dir.display()));
    }

    for flag in dep_flags {
        flags.push(flag.clone());
    }

    let sdk_version = cfg
        .declared_sdk_version()
        .unwrap_or(&env.platform_sdk_version);
    flags.push(format!("--min-sdk-version {}", sdk_version));
    flags.push(format!("--target-sdk-version {}", sdk_version));

    if !has_version_code {
        flags.push(format!("--version-code {}", env.platform_sdk_version));
    }

    if !has_version_name {
        flags.push(format!(
            "--version-name {}-{}",
            env.platform_version, env.build_number
        ));
    }

    flags
}
