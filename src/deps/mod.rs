// src/deps/mod.rs

//! Direct-dependency capabilities consumed by packaging
//!
//! The external graph walker owns dependency discovery and visitation order;
//! this module only decides what each already-visited dependency contributes
//! to the packaging invocation. Two capabilities matter:
//!
//! - an SDK prebuilt publishes classpath files, every one of which becomes
//!   an `-I` include and a rebuild trigger;
//! - the well-known platform resource module publishes an exported resource
//!   package, consumed the same way.
//!
//! Ordinary library dependencies provide neither and contribute nothing here
//! (compilation consumes them, packaging does not).

use crate::module::AppConfig;
use std::path::PathBuf;
use tracing::debug;

/// Identity of the platform resource module
pub const FRAMEWORK_RES: &str = "framework-res";

/// What a direct dependency publishes to the packaging step
#[derive(Debug, Clone)]
pub enum DepProvides {
    /// SDK prebuilt: files placed on the compile classpath
    Classpath(Vec<PathBuf>),
    /// A library that may export a product-agnostic resource package
    Library { export_package: Option<PathBuf> },
    /// Publishes nothing the packager consumes
    Opaque,
}

/// One direct dependency, as handed over by the external graph walker
///
/// The artifact paths inside are read-only back references into the
/// dependency's own output; this module never takes ownership of them.
#[derive(Debug, Clone)]
pub struct DirectDep {
    pub name: String,
    pub provides: DepProvides,
}

impl DirectDep {
    pub fn classpath(name: impl Into<String>, files: Vec<PathBuf>) -> Self {
        Self {
            name: name.into(),
            provides: DepProvides::Classpath(files),
        }
    }

    pub fn library(name: impl Into<String>, export_package: Option<PathBuf>) -> Self {
        Self {
            name: name.into(),
            provides: DepProvides::Library { export_package },
        }
    }
}

/// Resolve include flags and dependency files from direct dependencies
///
/// Each dependency is visited exactly once, in the order given. Duplicate
/// artifacts are tolerated, not deduplicated; the consumer dedups.
pub fn resolve_dep_flags(deps: &[DirectDep]) -> (Vec<String>, Vec<PathBuf>) {
    let mut flags = Vec::new();
    let mut files = Vec::new();

    for dep in deps {
        let dep_files: &[PathBuf] = match &dep.provides {
            DepProvides::Classpath(classpath) => classpath,
            DepProvides::Library { export_package } if dep.name == FRAMEWORK_RES => {
                export_package.as_slice()
            }
            _ => {
                debug!(dep = %dep.name, "dependency contributes nothing to packaging");
                &[]
            }
        };

        for file in dep_files {
            flags.push(format!("-I {}", file.display()));
            files.push(file.clone());
        }
    }

    (flags, files)
}

/// Module names the external walker must add as direct dependencies
///
/// A module built against the in-tree platform needs the platform resource
/// module; any concrete SDK version means an SDK prebuilt supplies the
/// platform classpath instead.
pub fn implicit_deps(cfg: &AppConfig) -> Vec<String> {
    if cfg.no_standard_libraries {
        return Vec::new();
    }

    match cfg.declared_sdk_version() {
        None | Some("current") | Some("system_current") => vec![FRAMEWORK_RES.to_string()],
        Some(_) => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::module::parse_module;

    #[test]
    fn test_classpath_dep_contributes_includes() {
        let deps = vec![DirectDep::classpath(
            "sdk_v22",
            vec![PathBuf::from("/sdk/android.jar"), PathBuf::from("/sdk/uiautomator.jar")],
        )];

        let (flags, files) = resolve_dep_flags(&deps);
        assert_eq!(flags, vec!["-I /sdk/android.jar", "-I /sdk/uiautomator.jar"]);
        assert_eq!(files.len(), 2);
    }

    #[test]
    fn test_framework_res_export_package_consumed() {
        let deps = vec![DirectDep::library(
            FRAMEWORK_RES,
            Some(PathBuf::from("/out/framework-res/package-export.apk")),
        )];

        let (flags, files) = resolve_dep_flags(&deps);
        assert_eq!(flags, vec!["-I /out/framework-res/package-export.apk"]);
        assert_eq!(files, vec![PathBuf::from("/out/framework-res/package-export.apk")]);
    }

    #[test]
    fn test_ordinary_library_contributes_nothing() {
        let deps = vec![
            DirectDep::library("guava", None),
            DirectDep::library("support-v4", Some(PathBuf::from("/out/support/package-export.apk"))),
        ];

        // Only framework-res export packages are consumed by packaging
        let (flags, files) = resolve_dep_flags(&deps);
        assert!(flags.is_empty());
        assert!(files.is_empty());
    }

    #[test]
    fn test_visitation_order_preserved() {
        let deps = vec![
            DirectDep::classpath("b", vec![PathBuf::from("/b.jar")]),
            DirectDep::classpath("a", vec![PathBuf::from("/a.jar")]),
        ];

        let (flags, _) = resolve_dep_flags(&deps);
        assert_eq!(flags, vec!["-I /b.jar", "-I /a.jar"]);
    }

    #[test]
    fn test_implicit_deps_platform_builds() {
        let cfg = parse_module("[app]\nname = \"A\"").unwrap();
        assert_eq!(implicit_deps(&cfg), vec![FRAMEWORK_RES.to_string()]);

        let cfg = parse_module("[app]\nname = \"A\"\nsdk_version = \"current\"").unwrap();
        assert_eq!(implicit_deps(&cfg), vec![FRAMEWORK_RES.to_string()]);

        let cfg = parse_module("[app]\nname = \"A\"\nsdk_version = \"system_current\"").unwrap();
        assert_eq!(implicit_deps(&cfg), vec![FRAMEWORK_RES.to_string()]);
    }

    #[test]
    fn test_implicit_deps_sdk_prebuilt() {
        let cfg = parse_module("[app]\nname = \"A\"\nsdk_version = \"22\"").unwrap();
        assert!(implicit_deps(&cfg).is_empty());
    }

    #[test]
    fn test_implicit_deps_no_standard_libraries() {
        let cfg =
            parse_module("[app]\nname = \"A\"\nno_standard_libraries = true").unwrap();
        assert!(implicit_deps(&cfg).is_empty());
    }
}
