// tests/common/mod.rs

//! Shared test utilities and helpers for integration tests.

use apkforge::BuildEnv;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Write a file, creating parent directories as needed.
pub fn write_file(path: &Path, content: &str) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

/// Create a module source tree with a manifest, two resource files, and an
/// asset file.
///
/// Returns the TempDir - keep it alive to prevent cleanup.
pub fn setup_app_module() -> TempDir {
    let tmp = tempfile::tempdir().unwrap();
    write_file(&tmp.path().join("AndroidManifest.xml"), "<manifest/>");
    write_file(&tmp.path().join("res/layout/main.xml"), "<LinearLayout/>");
    write_file(&tmp.path().join("res/values/strings.xml"), "<resources/>");
    write_file(&tmp.path().join("assets/data.bin"), "data");
    tmp
}

/// Build environment pointing output and install roots under `root`.
pub fn test_env(root: &Path) -> BuildEnv {
    BuildEnv {
        platform_sdk_version: "22".to_string(),
        platform_version: "5.1".to_string(),
        build_number: "eng.42".to_string(),
        product_aapt_characteristics: "default".to_string(),
        default_certificate: "/build/security/testkey".to_string(),
        default_certificate_dir: "/build/security".into(),
        resource_overlay_roots: Vec::new(),
        out_dir: root.join("out"),
        install_dir: root.join("system"),
    }
}
