// src/actions/mod.rs

//! Build-action planning for one app module
//!
//! [`generate_build_actions`] sequences the resolvers into a plan the
//! external command executor consumes: an optional resource-ID-export
//! invocation, the main package invocation, the resource-compiler artifact
//! declarations, the signing identity, and the install destination.
//!
//! Each invocation carries its own copy of the base flag sequence, extended
//! independently. Nothing here mutates the module configuration or the
//! environment, and the plan is recomputed from scratch on every call; no
//! state survives between modules.

use crate::deps::{resolve_dep_flags, DirectDep};
use crate::env::BuildEnv;
use crate::error::{Error, Result};
use crate::flags::{assemble_aapt_flags, FlagSequence};
use crate::module::{AppConfig, DEFAULT_ASSET_DIR, DEFAULT_RESOURCE_DIR};
use crate::resources::{apply_overlays, collect_dir_files, resolve_dirs, IgnoreSet};
use crate::signing::{resolve_certificates, CertificateSet};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Which packaging pass an invocation belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvocationKind {
    /// Resource-ID-export pass: produces a resource-only package other
    /// modules consume without pulling in compiled code
    ExportPackage,
    /// Full app package pass
    AppPackage,
}

/// One planned packaging invocation
#[derive(Debug, Clone)]
pub struct PackagingInvocation {
    pub kind: InvocationKind,
    pub flags: FlagSequence,
    /// Files whose change must retrigger this invocation
    pub inputs: Vec<PathBuf>,
    pub output: PathBuf,
}

/// Artifacts the external resource compiler produces when resources exist
#[derive(Debug, Clone)]
pub struct ResourceArtifacts {
    /// Flag copy handed to the resource compiler
    pub flags: FlagSequence,
    pub r_java_list: PathBuf,
    pub public_resources: PathBuf,
    pub proguard_options: PathBuf,
}

/// Install declaration for the finished package
#[derive(Debug, Clone)]
pub struct InstallSpec {
    pub dir: PathBuf,
    pub file_name: String,
}

impl InstallSpec {
    pub fn path(&self) -> PathBuf {
        self.dir.join(&self.file_name)
    }
}

/// The complete plan for one module
#[derive(Debug, Clone)]
pub struct BuildActions {
    /// Whether any resource file was found; gates the resource passes
    pub has_resources: bool,
    /// Every rebuild-trigger input (duplicates tolerated, order stable)
    pub dep_files: Vec<PathBuf>,
    pub resource_artifacts: Option<ResourceArtifacts>,
    pub export_invocation: Option<PackagingInvocation>,
    pub main_invocation: PackagingInvocation,
    pub certificates: CertificateSet,
    pub install: InstallSpec,
}

/// Plan the packaging actions for one module
///
/// `source_root` is the directory the module description lives in; all
/// module-relative paths resolve against it. `deps` is the module's direct
/// dependency list in the external walker's visitation order.
pub fn generate_build_actions(
    cfg: &AppConfig,
    env: &BuildEnv,
    source_root: &Path,
    deps: &[DirectDep],
) -> Result<BuildActions> {
    let ignore = IgnoreSet::aapt_defaults();

    let asset_dirs = resolve_dirs(source_root, &cfg.asset_dirs, DEFAULT_ASSET_DIR)?;
    let resource_base = resolve_dirs(source_root, &cfg.resource_dirs, DEFAULT_RESOURCE_DIR)?;
    let resource_dirs = apply_overlays(&resource_base, &env.resource_overlay_roots);

    // Resource files decide whether the resource passes run at all; asset
    // files are rebuild triggers but never flip that decision.
    let (resource_files, has_resources) = collect_dir_files(&resource_dirs, &ignore)?;
    let (asset_files, _) = collect_dir_files(&asset_dirs, &ignore)?;

    let manifest_path = source_root.join(cfg.manifest_file());
    if !manifest_path.is_file() {
        return Err(Error::MissingManifest(manifest_path));
    }

    let (dep_flags, dep_artifacts) = resolve_dep_flags(deps);

    let mut dep_files = resource_files;
    dep_files.extend(asset_files);
    dep_files.push(manifest_path.clone());
    dep_files.extend(dep_artifacts);

    let base_flags = assemble_aapt_flags(
        cfg,
        &asset_dirs,
        &resource_dirs,
        &manifest_path,
        &dep_flags,
        env,
    );

    let module_out = env.out_dir.join(&cfg.name);

    let resource_artifacts = if has_resources {
        Some(ResourceArtifacts {
            flags: base_flags.clone(),
            r_java_list: module_out.join("R.java.list"),
            public_resources: module_out.join("public_resources.xml"),
            proguard_options: module_out.join("proguard.options"),
        })
    } else {
        debug!(module = %cfg.name, "no resource files found, skipping resource passes");
        None
    };

    let export_invocation = if cfg.export_package_resources && has_resources {
        Some(PackagingInvocation {
            kind: InvocationKind::ExportPackage,
            flags: base_flags
                .clone()
                .with_product_default(&env.product_aapt_characteristics),
            inputs: dep_files.clone(),
            output: module_out.join("package-export.apk"),
        })
    } else {
        None
    };

    let main_invocation = PackagingInvocation {
        kind: InvocationKind::AppPackage,
        flags: base_flags.with_product_default(&env.product_aapt_characteristics),
        inputs: dep_files.clone(),
        output: module_out.join(format!("{}.apk", cfg.name)),
    };

    let certificates = resolve_certificates(
        &cfg.certificate,
        &cfg.additional_certificates,
        &env.default_certificate,
        &env.default_certificate_dir,
        source_root,
    );

    let install = InstallSpec {
        dir: env.install_dir.join("app"),
        file_name: format!("{}.apk", cfg.name),
    };

    info!(
        module = %cfg.name,
        inputs = dep_files.len(),
        has_resources,
        export = export_invocation.is_some(),
        "planned packaging actions"
    );

    Ok(BuildActions {
        has_resources,
        dep_files,
        resource_artifacts,
        export_invocation,
        main_invocation,
        certificates,
        install,
    })
}
