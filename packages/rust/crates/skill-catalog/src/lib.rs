//! Skill Catalog - Static catalog of plugin, ralph and project skills.
//!
//! Walks the configured skill roots, extracts a name, description and tags
//! for every skill document, and writes the result to a single
//! `catalog.json` so menus, search indexes and agents can enumerate skills
//! without touching the filesystem.
//!
//! # Architecture (ODF-REP Compliant)
//!
//! ```text
//! skill-catalog/src/
//! ├── lib.rs            # Re-exports (this file)
//! ├── error.rs          # CatalogError
//! ├── types.rs          # CatalogEntry, SkillSource
//! ├── text.rs           # Lossy text reading
//! ├── description.rs    # description: line / heading extraction
//! ├── tags.rs           # Ordered path-substring tag table
//! ├── scanner/          # plugin, ralph and project scanners
//! ├── config.rs         # config.toml & default roots
//! ├── builder.rs        # CatalogBuilder
//! └── bin/skill_catalog.rs
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use skill_catalog::{CatalogBuilder, SourceRoots};
//!
//! let mut roots = SourceRoots::default();
//! roots.plugin = Some("plugins/skills".into());
//! let entries = CatalogBuilder::new(roots).build();
//! ```

// ============================================================================
// Module Declarations (ODF-REP: Atomic Structure)
// ============================================================================

pub mod builder;
pub mod config;
pub mod description;
mod error;
pub mod scanner;
pub mod tags;
pub mod text;
mod types;

// ============================================================================
// Public Re-exports
// ============================================================================

pub use builder::CatalogBuilder;
pub use config::{CatalogConfig, SourceRoots};
pub use description::{NO_DESCRIPTION, description_from_text, extract_description};
pub use error::{CatalogError, Result};
pub use scanner::{scan_plugin_skills, scan_project_skills, scan_ralph_skills, scan_source};
pub use tags::tags_from_path;
pub use text::read_text_lossy;
pub use types::{CatalogEntry, SkillSource};

// ============================================================================
// JSON Schema Generation
// ============================================================================

/// Generate JSON Schema for `CatalogEntry`.
#[must_use]
pub fn catalog_entry_schema() -> String {
    let schema = schemars::schema_for!(CatalogEntry);
    serde_json::to_string_pretty(&schema).unwrap_or_default()
}

// ============================================================================
// Version
// ============================================================================

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
