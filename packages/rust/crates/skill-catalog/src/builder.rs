//! Catalog Builder - runs every configured scanner and writes catalog.json.
//!
//! # Example
//!
//! ```ignore
//! use skill_catalog::{CatalogBuilder, CatalogConfig};
//!
//! let config = CatalogConfig::load(&CatalogConfig::default_workspace())?;
//! let count = CatalogBuilder::new(config.sources).generate(&config.output)?;
//! println!("{count} skills");
//! ```

use std::fs;
use std::path::Path;

use crate::config::SourceRoots;
use crate::error::{CatalogError, Result};
use crate::scanner::scan_source;
use crate::types::CatalogEntry;

/// Builds the full catalog from explicit source roots.
#[derive(Debug, Clone)]
pub struct CatalogBuilder {
    sources: SourceRoots,
}

impl CatalogBuilder {
    /// Create a builder over `sources`.
    #[must_use]
    pub fn new(sources: SourceRoots) -> Self {
        Self { sources }
    }

    /// Scan plugin, ralph and project sources, in that order.
    ///
    /// Unconfigured or missing roots contribute nothing.
    #[must_use]
    pub fn build(&self) -> Vec<CatalogEntry> {
        let mut catalog = Vec::new();
        for (source, root) in self.sources.iter() {
            catalog.extend(scan_source(source, root));
        }
        catalog
    }

    /// Serialize `entries` as pretty JSON and overwrite `output_path`.
    ///
    /// Parent directories are created if needed.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Io` if the directory or file cannot be
    /// written.
    pub fn write(entries: &[CatalogEntry], output_path: &Path) -> Result<()> {
        if let Some(parent) = output_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| CatalogError::io(parent, e))?;
            }
        }

        let json = serde_json::to_string_pretty(entries)?;
        fs::write(output_path, json).map_err(|e| CatalogError::io(output_path, e))?;

        log::info!(
            "Wrote catalog.json with {} skills to {:?}",
            entries.len(),
            output_path
        );
        Ok(())
    }

    /// Build and write the catalog, returning the entry count.
    ///
    /// # Errors
    ///
    /// See [`CatalogBuilder::write`].
    pub fn generate(&self, output_path: &Path) -> Result<usize> {
        let catalog = self.build();
        Self::write(&catalog, output_path)?;
        Ok(catalog.len())
    }
}
