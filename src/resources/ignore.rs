// src/resources/ignore.rs

//! Ignore-pattern matching for resource enumeration
//!
//! The packaging tool skips version-control droppings and editor backups
//! when scanning resource trees, and the dependency set must skip exactly
//! the same files or the planner would retrigger builds on files the tool
//! never reads.
//!
//! The pattern list is fixed and its shapes are limited to three forms, so
//! this is a dedicated matcher rather than a general globbing dependency:
//!
//! - `*suffix` — matches any name ending in `suffix`
//! - `prefix*` — matches any name starting with `prefix`
//! - anything else — exact literal match
//!
//! Patterns are matched against individual path segments; a matching
//! directory segment prunes its whole subtree.

/// Files and directories the packaging tool never reads
pub const AAPT_IGNORE_PATTERNS: [&str; 9] = [
    ".svn",
    ".git",
    ".ds_store",
    "*.scc",
    ".*",
    "CVS",
    "thumbs.db",
    "picasa.ini",
    "*~",
];

#[derive(Debug, Clone)]
enum Pattern {
    Exact(String),
    Prefix(String),
    Suffix(String),
}

impl Pattern {
    fn parse(pattern: &str) -> Self {
        if let Some(suffix) = pattern.strip_prefix('*') {
            Pattern::Suffix(suffix.to_string())
        } else if let Some(prefix) = pattern.strip_suffix('*') {
            Pattern::Prefix(prefix.to_string())
        } else {
            Pattern::Exact(pattern.to_string())
        }
    }

    fn matches(&self, name: &str) -> bool {
        match self {
            Pattern::Exact(literal) => name == literal,
            Pattern::Prefix(prefix) => name.starts_with(prefix),
            Pattern::Suffix(suffix) => name.ends_with(suffix),
        }
    }
}

/// A compiled set of ignore patterns
#[derive(Debug, Clone)]
pub struct IgnoreSet {
    patterns: Vec<Pattern>,
}

impl IgnoreSet {
    /// Compile a pattern list
    pub fn new(patterns: &[&str]) -> Self {
        Self {
            patterns: patterns.iter().map(|p| Pattern::parse(p)).collect(),
        }
    }

    /// The fixed ignore list applied to asset and resource scans
    pub fn aapt_defaults() -> Self {
        Self::new(&AAPT_IGNORE_PATTERNS)
    }

    /// Test a single path segment (file or directory name)
    pub fn matches(&self, name: &str) -> bool {
        self.patterns.iter().any(|p| p.matches(name))
    }
}

impl Default for IgnoreSet {
    fn default() -> Self {
        Self::aapt_defaults()
    }
}
