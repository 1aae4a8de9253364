// src/lib.rs

//! Apkforge: Android app packaging planner
//!
//! Turns a declarative app module description into a reproducible packaging
//! plan: resolved aapt flag sequences for the resource-ID-export and main
//! package passes, the full rebuild-trigger dependency file set, and a
//! deterministic signing-certificate resolution.
//!
//! # Architecture
//!
//! - Declarative-first: modules are TOML descriptions, immutable after load
//! - Explicit environment: platform values are threaded as a read-only
//!   parameter, never ambient state
//! - Explicit wins: a module's own flags always beat computed defaults
//! - Copy-before-extend: each packaging pass extends its own flag copy
//! - Incremental-safe: every file that can affect the package is a declared
//!   input
//!
//! The build-graph walker, the packaging tool, and the installer are
//! external collaborators; this crate only plans.

pub mod actions;
pub mod deps;
pub mod env;
mod error;
pub mod flags;
pub mod module;
pub mod resources;
pub mod signing;

pub use actions::{
    generate_build_actions, BuildActions, InstallSpec, InvocationKind, PackagingInvocation,
    ResourceArtifacts,
};
pub use deps::{implicit_deps, resolve_dep_flags, DepProvides, DirectDep, FRAMEWORK_RES};
pub use env::{parse_env, parse_env_file, BuildEnv};
pub use error::{Error, Result};
pub use flags::{assemble_aapt_flags, FlagSequence};
pub use module::{parse_module, parse_module_file, validate_module, AppConfig};
pub use resources::{
    apply_overlays, collect_dir_files, resolve_dirs, IgnoreSet, Provenance, ResolvedDir,
    ResolvedDirSet,
};
pub use signing::{resolve_certificates, CertificateSet};
