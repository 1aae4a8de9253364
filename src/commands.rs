// src/commands.rs

//! Command implementations
//!
//! Thin wrappers over the library: parse the inputs, run the planner, print
//! the plan. All user-facing output lives here; the library only logs.

use anyhow::{bail, Context, Result};
use apkforge::{
    generate_build_actions, implicit_deps, parse_env_file, parse_module_file, validate_module,
    DirectDep, PackagingInvocation,
};
use clap::CommandFactory;
use clap_complete::Shell;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::cli::Cli;

/// Parse one `--dep` specification
///
/// Formats: `name=classpath:<file>[,<file>...]`, `name=export:<file>`,
/// `name=lib`.
fn parse_dep_spec(spec: &str) -> Result<DirectDep> {
    let (name, provides) = spec
        .split_once('=')
        .with_context(|| format!("Invalid --dep '{}': expected name=kind[:paths]", spec))?;

    if provides == "lib" {
        return Ok(DirectDep::library(name, None));
    }
    if let Some(files) = provides.strip_prefix("classpath:") {
        let files: Vec<PathBuf> = files
            .split(',')
            .filter(|f| !f.is_empty())
            .map(PathBuf::from)
            .collect();
        if files.is_empty() {
            bail!("Invalid --dep '{}': classpath needs at least one file", spec);
        }
        return Ok(DirectDep::classpath(name, files));
    }
    if let Some(package) = provides.strip_prefix("export:") {
        return Ok(DirectDep::library(name, Some(PathBuf::from(package))));
    }

    bail!("Invalid --dep '{}': unknown kind '{}'", spec, provides)
}

fn print_invocation(invocation: &PackagingInvocation, title: &str) {
    println!("{}: {}", title, invocation.output.display());
    println!("  aapt {}", invocation.flags);
}

/// Plan the packaging actions for a module and print the result
pub fn cmd_plan(
    module_path: &str,
    env_path: &str,
    source_root: Option<&str>,
    dep_specs: &[String],
    show_inputs: bool,
) -> Result<()> {
    let module_path = Path::new(module_path);

    let cfg = parse_module_file(module_path)
        .with_context(|| format!("Failed to parse module: {}", module_path.display()))?;

    let warnings = validate_module(&cfg).with_context(|| "Module validation failed")?;
    for warning in &warnings {
        println!("Warning: {}", warning);
    }

    let env = parse_env_file(Path::new(env_path))
        .with_context(|| format!("Failed to parse environment: {}", env_path))?;

    // Module-relative paths resolve against the module file's directory
    // unless the caller overrides the source root.
    let source_root = match source_root {
        Some(root) => PathBuf::from(root),
        None => module_path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or(Path::new("."))
            .to_path_buf(),
    };

    let deps = dep_specs
        .iter()
        .map(|spec| parse_dep_spec(spec))
        .collect::<Result<Vec<_>>>()?;

    for implicit in implicit_deps(&cfg) {
        if !deps.iter().any(|d| d.name == implicit) {
            println!(
                "Note: module expects a direct dependency on {} (declare with --dep)",
                implicit
            );
        }
    }

    info!(module = %cfg.name, source_root = %source_root.display(), "planning");

    let actions = generate_build_actions(&cfg, &env, &source_root, &deps)?;

    println!("Module: {}", cfg.name);

    if show_inputs {
        println!("Dependency inputs:");
        for input in &actions.dep_files {
            println!("  {}", input.display());
        }
    } else {
        println!("Dependency inputs: {} files", actions.dep_files.len());
    }

    match &actions.resource_artifacts {
        Some(artifacts) => {
            println!("Resource compiler artifacts:");
            println!("  {}", artifacts.r_java_list.display());
            println!("  {}", artifacts.public_resources.display());
            println!("  {}", artifacts.proguard_options.display());
        }
        None => println!("Resource passes: skipped (no resource files)"),
    }

    if let Some(export) = &actions.export_invocation {
        print_invocation(export, "Export package");
    }
    print_invocation(&actions.main_invocation, "App package");

    println!("Certificates:");
    println!("  {} (primary)", actions.certificates.primary.display());
    for cert in &actions.certificates.additional {
        println!("  {}", cert.display());
    }

    println!("Install: {}", actions.install.path().display());

    Ok(())
}

/// Validate a module description without planning
pub fn cmd_validate(module_path: &str) -> Result<()> {
    let module_path = Path::new(module_path);

    let cfg = parse_module_file(module_path)
        .with_context(|| format!("Failed to parse module: {}", module_path.display()))?;

    let warnings = validate_module(&cfg).with_context(|| "Module validation failed")?;

    println!("Module {} is valid", cfg.name);
    if warnings.is_empty() {
        println!("[OK] No issues found");
    } else {
        for warning in &warnings {
            println!("Warning: {}", warning);
        }
        println!("[OK] {} warning(s)", warnings.len());
    }

    Ok(())
}

/// Generate shell completion scripts
pub fn cmd_completions(shell: Shell) -> Result<()> {
    let mut cmd = Cli::command();
    clap_complete::generate(shell, &mut cmd, "apkforge", &mut std::io::stdout());
    Ok(())
}
