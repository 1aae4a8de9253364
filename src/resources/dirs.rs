// src/resources/dirs.rs

//! Directory resolution with overlay support

use crate::error::{Error, Result};
use std::path::{Component, Path, PathBuf};
use tracing::debug;

/// Where a resolved directory came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provenance {
    /// Declared in the module description
    Explicit,
    /// The conventional default directory (`res`, `assets`)
    Default,
    /// Matched under a resource overlay root
    Overlay,
}

/// One resolved directory, tagged with its origin
#[derive(Debug, Clone)]
pub struct ResolvedDir {
    /// Full path handed to the packaging tool
    pub path: PathBuf,
    /// Path relative to the module source root; overlay matching keys on this
    pub rel: PathBuf,
    pub provenance: Provenance,
}

/// Ordered directory list for one category (assets or resources)
///
/// Ordering is load-bearing: overlay entries precede every base entry, and
/// base entries keep their configuration order.
#[derive(Debug, Clone, Default)]
pub struct ResolvedDirSet {
    dirs: Vec<ResolvedDir>,
}

impl ResolvedDirSet {
    pub fn iter(&self) -> std::slice::Iter<'_, ResolvedDir> {
        self.dirs.iter()
    }

    /// Directory paths in resolved order
    pub fn paths(&self) -> impl Iterator<Item = &Path> {
        self.dirs.iter().map(|d| d.path.as_path())
    }

    pub fn len(&self) -> usize {
        self.dirs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dirs.is_empty()
    }
}

/// Reject directory and manifest references that leave the module source root
pub(crate) fn check_reference(reference: &str) -> Result<()> {
    let path = Path::new(reference);

    if path.is_absolute() {
        return Err(Error::InvalidConfig(format!(
            "Path must be relative to the module directory: {}",
            reference
        )));
    }

    for component in path.components() {
        if component == Component::ParentDir {
            return Err(Error::InvalidConfig(format!(
                "Path cannot escape the module directory: {}",
                reference
            )));
        }
    }

    Ok(())
}

/// Resolve a module's declared directories for one category
///
/// Declared directories are used verbatim, in declaration order, whether or
/// not they exist on disk. With nothing declared, the conventional default
/// directory is used only if it exists.
pub fn resolve_dirs(
    source_root: &Path,
    declared: &[String],
    default_name: &str,
) -> Result<ResolvedDirSet> {
    let mut dirs = Vec::new();

    if declared.is_empty() {
        let default_dir = source_root.join(default_name);
        if default_dir.is_dir() {
            dirs.push(ResolvedDir {
                path: default_dir,
                rel: PathBuf::from(default_name),
                provenance: Provenance::Default,
            });
        }
    } else {
        for dir in declared {
            check_reference(dir)?;
            dirs.push(ResolvedDir {
                path: source_root.join(dir),
                rel: PathBuf::from(dir),
                provenance: Provenance::Explicit,
            });
        }
    }

    Ok(ResolvedDirSet { dirs })
}

/// Prepend matching overlay directories ahead of the base list
///
/// For every overlay root, in configuration order, and every base directory,
/// `<overlay root>/<relative dir>` is included when it exists on disk. All
/// matches precede the entire base list. Asset directories never go through
/// this; only resources are overlaid.
pub fn apply_overlays(base: &ResolvedDirSet, overlay_roots: &[PathBuf]) -> ResolvedDirSet {
    let mut overlays = Vec::new();

    for root in overlay_roots {
        for dir in base.iter() {
            let candidate = root.join(&dir.rel);
            if candidate.is_dir() {
                debug!(overlay = %candidate.display(), base = %dir.path.display(), "resource overlay matched");
                overlays.push(ResolvedDir {
                    path: candidate,
                    rel: dir.rel.clone(),
                    provenance: Provenance::Overlay,
                });
            }
        }
    }

    if overlays.is_empty() {
        return base.clone();
    }

    overlays.extend(base.dirs.iter().cloned());
    ResolvedDirSet { dirs: overlays }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn mkdirs(root: &Path, dirs: &[&str]) {
        for dir in dirs {
            fs::create_dir_all(root.join(dir)).unwrap();
        }
    }

    #[test]
    fn test_explicit_dirs_verbatim() {
        let tmp = TempDir::new().unwrap();
        let declared = vec!["res".to_string(), "res-extra".to_string()];

        // Neither directory exists; explicit declarations are kept anyway
        let set = resolve_dirs(tmp.path(), &declared, "res").unwrap();
        assert_eq!(set.len(), 2);
        assert_eq!(set.iter().next().unwrap().provenance, Provenance::Explicit);
        assert_eq!(
            set.paths().collect::<Vec<_>>(),
            vec![tmp.path().join("res"), tmp.path().join("res-extra")]
        );
    }

    #[test]
    fn test_default_dir_requires_existence() {
        let tmp = TempDir::new().unwrap();

        let set = resolve_dirs(tmp.path(), &[], "res").unwrap();
        assert!(set.is_empty());

        mkdirs(tmp.path(), &["res"]);
        let set = resolve_dirs(tmp.path(), &[], "res").unwrap();
        assert_eq!(set.len(), 1);
        assert_eq!(set.iter().next().unwrap().provenance, Provenance::Default);
    }

    #[test]
    fn test_malformed_reference_rejected() {
        let tmp = TempDir::new().unwrap();
        assert!(resolve_dirs(tmp.path(), &["/abs".to_string()], "res").is_err());
        assert!(resolve_dirs(tmp.path(), &["../out".to_string()], "res").is_err());
    }

    #[test]
    fn test_overlay_precedes_base() {
        let module = TempDir::new().unwrap();
        let overlay = TempDir::new().unwrap();
        mkdirs(module.path(), &["res"]);
        mkdirs(overlay.path(), &["res"]);

        let base = resolve_dirs(module.path(), &[], "res").unwrap();
        let resolved = apply_overlays(&base, &[overlay.path().to_path_buf()]);

        let paths: Vec<_> = resolved.paths().collect();
        assert_eq!(paths, vec![overlay.path().join("res"), module.path().join("res")]);
        assert_eq!(resolved.iter().next().unwrap().provenance, Provenance::Overlay);
    }

    #[test]
    fn test_overlay_roots_keep_configuration_order() {
        let module = TempDir::new().unwrap();
        let overlay_a = TempDir::new().unwrap();
        let overlay_b = TempDir::new().unwrap();
        mkdirs(module.path(), &["res"]);
        mkdirs(overlay_a.path(), &["res"]);
        mkdirs(overlay_b.path(), &["res"]);

        let base = resolve_dirs(module.path(), &[], "res").unwrap();
        let roots = vec![overlay_a.path().to_path_buf(), overlay_b.path().to_path_buf()];
        let resolved = apply_overlays(&base, &roots);

        let paths: Vec<_> = resolved.paths().collect();
        assert_eq!(
            paths,
            vec![
                overlay_a.path().join("res"),
                overlay_b.path().join("res"),
                module.path().join("res"),
            ]
        );
    }

    #[test]
    fn test_no_overlay_match_leaves_base_unchanged() {
        let module = TempDir::new().unwrap();
        let overlay = TempDir::new().unwrap();
        mkdirs(module.path(), &["res"]);

        let base = resolve_dirs(module.path(), &[], "res").unwrap();
        let resolved = apply_overlays(&base, &[overlay.path().to_path_buf()]);

        assert_eq!(resolved.len(), 1);
        assert_eq!(resolved.paths().collect::<Vec<_>>(), base.paths().collect::<Vec<_>>());
    }

    #[test]
    fn test_overlay_matches_only_declared_rel_paths() {
        let module = TempDir::new().unwrap();
        let overlay = TempDir::new().unwrap();
        mkdirs(module.path(), &["res", "res-land"]);
        mkdirs(overlay.path(), &["res-land"]);

        let declared = vec!["res".to_string(), "res-land".to_string()];
        let base = resolve_dirs(module.path(), &declared, "res").unwrap();
        let resolved = apply_overlays(&base, &[overlay.path().to_path_buf()]);

        let paths: Vec<_> = resolved.paths().collect();
        assert_eq!(
            paths,
            vec![
                overlay.path().join("res-land"),
                module.path().join("res"),
                module.path().join("res-land"),
            ]
        );
    }
}
