//! Catalog Types
//!
//! `CatalogEntry` is the single record type written to `catalog.json`.

use std::fmt;

use schemars::JsonSchema as SchemarsJsonSchema;
use serde::{Deserialize, Serialize};

/// Which scanner produced an entry.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, SchemarsJsonSchema, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum SkillSource {
    /// Claude plugin skill tree (`*.md` at any depth)
    ClaudePlugin,
    /// Ralph TUI skills (`SKILL.md` only)
    Ralph,
    /// Project-level skills
    Project,
}

impl SkillSource {
    /// Consumer tools associated with the source, in output order.
    #[must_use]
    pub const fn tools(self) -> &'static [&'static str] {
        match self {
            Self::ClaudePlugin => &["claude", "kilocode", "cline"],
            Self::Ralph => &["ralph", "claude"],
            Self::Project => &["claude", "kilocode"],
        }
    }
}

impl fmt::Display for SkillSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ClaudePlugin => write!(f, "claude-plugin"),
            Self::Ralph => write!(f, "ralph"),
            Self::Project => write!(f, "project"),
        }
    }
}

/// A discovered skill.
///
/// Field order is the JSON field order.
#[derive(Debug, Clone, Serialize, Deserialize, SchemarsJsonSchema, PartialEq, Eq)]
pub struct CatalogEntry {
    /// Human-readable name
    pub name: String,
    /// One-line summary
    pub description: String,
    /// Producing scanner
    pub source: SkillSource,
    /// Path of the originating file
    pub path: String,
    /// Classification tags, in table order
    pub tags: Vec<String>,
    /// Consumer tools
    pub tools: Vec<String>,
}

impl CatalogEntry {
    /// Create an entry; `tools` is filled from the source.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        source: SkillSource,
        path: impl Into<String>,
        tags: Vec<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            source,
            path: path.into(),
            tags,
            tools: source.tools().iter().map(|t| (*t).to_string()).collect(),
        }
    }
}
