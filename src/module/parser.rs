// src/module/parser.rs

//! Module description parsing

use crate::error::{Error, Result};
use crate::module::AppConfig;
use crate::resources::check_reference;
use serde::Deserialize;
use std::path::Path;

#[derive(Deserialize)]
struct ModuleFile {
    app: AppConfig,
}

/// Parse a module description from a TOML string
pub fn parse_module(content: &str) -> Result<AppConfig> {
    let module: ModuleFile =
        toml::from_str(content).map_err(|e| Error::ParseError(format!("Invalid module: {}", e)))?;
    Ok(module.app)
}

/// Parse a module description from a file
pub fn parse_module_file(path: &Path) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| Error::IoError(format!("Failed to read module file: {}", e)))?;

    parse_module(&content)
}

/// Validate a module description
///
/// Returns warnings for suspicious but workable configurations. Malformed
/// directory references and unusable names are hard errors.
pub fn validate_module(cfg: &AppConfig) -> Result<Vec<String>> {
    let mut warnings = Vec::new();

    if cfg.name.is_empty() {
        return Err(Error::InvalidConfig("Module name cannot be empty".to_string()));
    }
    if cfg.name.contains('/') {
        return Err(Error::InvalidConfig(format!(
            "Module name cannot contain '/': {}",
            cfg.name
        )));
    }

    for dir in cfg.asset_dirs.iter().chain(cfg.resource_dirs.iter()) {
        check_reference(dir)?;
    }
    if let Some(manifest) = &cfg.manifest {
        check_reference(manifest)?;
    }

    if !cfg.package_splits.is_empty() {
        warnings.push("package_splits is declared but not consumed by packaging".to_string());
    }

    for flag in &cfg.aapt_flags {
        if flag.trim().is_empty() {
            return Err(Error::InvalidConfig("Empty aapt flag".to_string()));
        }
    }

    Ok(warnings)
}
