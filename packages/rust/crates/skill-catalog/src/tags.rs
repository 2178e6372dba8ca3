//! Path-based tag classification.
//!
//! Centralized category table. Order matters: the first key found in the
//! path wins, so a path under `pdi-core/02-language` is tagged as a
//! language skill.

use std::path::Path;

/// Ordered (path substring, tags) table.
pub const CATEGORY_TAGS: &[(&str, &[&str])] = &[
    ("01-core", &["core", "development"]),
    ("02-language", &["language", "specialist"]),
    ("03-infrastructure", &["infrastructure", "devops"]),
    ("04-quality", &["quality", "security"]),
    ("05-data", &["data", "ai"]),
    ("06-developer", &["dx", "tooling"]),
    ("07-specialized", &["specialized"]),
    ("08-business", &["business", "product"]),
    ("09-meta", &["meta", "orchestration"]),
    ("10-research", &["research", "analysis"]),
    ("pdi-n8n", &["n8n", "pdi"]),
    ("pdi-aws", &["aws", "pdi"]),
    ("pdi-python", &["python", "pdi"]),
    ("pdi-salesforce", &["salesforce", "pdi"]),
    ("pdi-okta", &["okta", "pdi"]),
    ("pdi-netsuite", &["netsuite", "pdi"]),
    ("pdi-core", &["core", "pdi"]),
    ("pdi-claude", &["claude", "pdi"]),
    ("pdi-development", &["development", "pdi"]),
    ("pdi-business", &["business", "pdi"]),
];

/// Substring marking ralph TUI skills that live outside a category folder.
pub const RALPH_MARKER: &str = "ralph";

/// Tags for ralph TUI skills.
pub const RALPH_TAGS: &[&str] = &["ralph", "tui"];

/// Tags when nothing matches.
pub const GENERAL_TAGS: &[&str] = &["general"];

/// Classify a file by substrings of its full path.
#[must_use]
pub fn tags_from_path(path: &Path) -> Vec<String> {
    let path_str = path.to_string_lossy();

    let tags = CATEGORY_TAGS
        .iter()
        .find(|(key, _)| path_str.contains(key))
        .map_or_else(
            || {
                if path_str.contains(RALPH_MARKER) {
                    RALPH_TAGS
                } else {
                    GENERAL_TAGS
                }
            },
            |(_, tags)| *tags,
        );

    to_owned_tags(tags)
}

pub(crate) fn to_owned_tags(tags: &[&str]) -> Vec<String> {
    tags.iter().map(|t| (*t).to_string()).collect()
}
