//! Ralph TUI scanner: one skill per `SKILL.md`.

use std::path::Path;

use super::{
    MANIFEST_FILENAME, collect_files, file_name_is, parent_name, path_string, root_exists,
};
use crate::description::extract_description;
use crate::tags::{RALPH_TAGS, to_owned_tags};
use crate::types::{CatalogEntry, SkillSource};

/// Scan a ralph skill directory.
///
/// Names are the skill directory name, unmodified. Tags are fixed.
#[must_use]
pub fn scan_ralph_skills(root: &Path) -> Vec<CatalogEntry> {
    if !root_exists(root, SkillSource::Ralph) {
        return Vec::new();
    }

    let manifests = collect_files(root, None, |p| file_name_is(p, MANIFEST_FILENAME));

    let entries: Vec<CatalogEntry> = manifests
        .iter()
        .map(|skill_md| {
            CatalogEntry::new(
                parent_name(skill_md),
                extract_description(skill_md),
                SkillSource::Ralph,
                path_string(skill_md),
                to_owned_tags(RALPH_TAGS),
            )
        })
        .collect();

    log::info!("Scanned {} ralph skills from {:?}", entries.len(), root);
    entries
}
