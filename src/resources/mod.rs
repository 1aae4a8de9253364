// src/resources/mod.rs

//! Resource and asset directory resolution
//!
//! Turning a module's declared directories into the concrete ordered list
//! the packaging tool sees involves three steps:
//!
//! 1. Resolve declared directories against the module source root, falling
//!    back to the conventional default (`res`, `assets`) when none are
//!    declared ([`resolve_dirs`]).
//! 2. For resource directories only, prepend matching product overlay
//!    directories ahead of the base list ([`apply_overlays`]).
//! 3. Enumerate every file under the resolved directories, minus the fixed
//!    ignore list, to build the rebuild-trigger dependency set
//!    ([`collect_dir_files`]).

mod collect;
mod dirs;
mod ignore;

pub use collect::collect_dir_files;
pub use dirs::{apply_overlays, resolve_dirs, Provenance, ResolvedDir, ResolvedDirSet};
pub use ignore::{IgnoreSet, AAPT_IGNORE_PATTERNS};

pub(crate) use dirs::check_reference;
