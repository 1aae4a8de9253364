// src/signing.rs

//! Signing-certificate resolution
//!
//! A module's certificate property is resolved by shape:
//!
//! - empty: the product default certificate, used verbatim;
//! - a bare name: looked up in the default certificate directory;
//! - anything with a directory component: resolved against the module
//!   source root.
//!
//! Additional certificates are always module-source-relative. Resolution
//! only computes paths; a certificate that does not exist surfaces later,
//! when the external signing tool runs.

use std::path::{Path, PathBuf};

/// Resolved signing identity: exactly one primary plus extras, in order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CertificateSet {
    pub primary: PathBuf,
    pub additional: Vec<PathBuf>,
}

impl CertificateSet {
    /// All certificates, primary first
    pub fn all(&self) -> impl Iterator<Item = &Path> {
        std::iter::once(self.primary.as_path()).chain(self.additional.iter().map(|p| p.as_path()))
    }
}

fn is_bare_name(spec: &str) -> bool {
    Path::new(spec).components().count() == 1 && !spec.starts_with('/')
}

/// Resolve the certificate set for one module
pub fn resolve_certificates(
    cert_spec: &str,
    additional: &[String],
    default_cert: &str,
    default_cert_dir: &Path,
    source_root: &Path,
) -> CertificateSet {
    let primary = if cert_spec.is_empty() {
        PathBuf::from(default_cert)
    } else if is_bare_name(cert_spec) {
        default_cert_dir.join(cert_spec)
    } else {
        source_root.join(cert_spec)
    };

    let additional = additional
        .iter()
        .map(|cert| source_root.join(cert))
        .collect();

    CertificateSet { primary, additional }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_spec_uses_product_default() {
        let set = resolve_certificates(
            "",
            &[],
            "default.pk8",
            Path::new("/certs"),
            Path::new("/src"),
        );
        assert_eq!(set.primary, PathBuf::from("default.pk8"));
        assert!(set.additional.is_empty());
    }

    #[test]
    fn test_bare_name_looked_up_in_default_dir() {
        let set = resolve_certificates(
            "foo",
            &[],
            "unused",
            Path::new("/certs"),
            Path::new("/src"),
        );
        assert_eq!(set.primary, PathBuf::from("/certs/foo"));
    }

    #[test]
    fn test_path_shape_resolved_against_source_root() {
        let set = resolve_certificates(
            "keys/foo.pk8",
            &[],
            "unused",
            Path::new("/certs"),
            Path::new("/src"),
        );
        assert_eq!(set.primary, PathBuf::from("/src/keys/foo.pk8"));
    }

    #[test]
    fn test_additional_always_source_relative() {
        let set = resolve_certificates(
            "platform",
            &["keys/a.pk8".to_string(), "b.pk8".to_string()],
            "unused",
            Path::new("/certs"),
            Path::new("/src"),
        );
        // A bare additional name is still source-relative, never a store lookup
        assert_eq!(
            set.additional,
            vec![PathBuf::from("/src/keys/a.pk8"), PathBuf::from("/src/b.pk8")]
        );
    }

    #[test]
    fn test_ordering_primary_first() {
        let set = resolve_certificates(
            "platform",
            &["extra.pk8".to_string()],
            "unused",
            Path::new("/certs"),
            Path::new("/src"),
        );
        let all: Vec<_> = set.all().collect();
        assert_eq!(all, vec![Path::new("/certs/platform"), Path::new("/src/extra.pk8")]);
    }

    #[test]
    fn test_resolution_is_deterministic() {
        let resolve = || {
            resolve_certificates(
                "keys/release.pk8",
                &["keys/extra.pk8".to_string()],
                "default.pk8",
                Path::new("/certs"),
                Path::new("/src"),
            )
        };
        assert_eq!(resolve(), resolve());
    }
}
