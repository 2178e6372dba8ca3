//! Project-level scanner.
//!
//! Two passes: `SKILL.md` anywhere below the root, then loose `*.md`
//! files directly in the root. A root-level `SKILL.md` is reported by both.

use std::path::Path;

use super::{
    MANIFEST_FILENAME, README_FILENAME, collect_files, file_name_is, file_stem, has_doc_extension,
    humanize, parent_name, path_string, root_exists,
};
use crate::description::extract_description;
use crate::tags::to_owned_tags;
use crate::types::{CatalogEntry, SkillSource};

/// Tags applied to every project skill.
pub const PROJECT_TAGS: &[&str] = &["n8n", "project"];

/// Scan a project-level skill directory.
#[must_use]
pub fn scan_project_skills(root: &Path) -> Vec<CatalogEntry> {
    if !root_exists(root, SkillSource::Project) {
        return Vec::new();
    }

    let manifests = collect_files(root, None, |p| file_name_is(p, MANIFEST_FILENAME));
    let loose_docs = collect_files(root, Some(1), |p| {
        has_doc_extension(p) && !file_name_is(p, README_FILENAME)
    });

    let mut entries = Vec::with_capacity(manifests.len() + loose_docs.len());
    entries.extend(
        manifests
            .iter()
            .map(|skill_md| project_entry(parent_name(skill_md), skill_md)),
    );
    entries.extend(
        loose_docs
            .iter()
            .map(|md| project_entry(humanize(&file_stem(md)), md)),
    );

    log::info!(
        "Scanned {} project skills ({} manifests, {} standalone) from {:?}",
        entries.len(),
        manifests.len(),
        loose_docs.len(),
        root
    );
    entries
}

fn project_entry(name: String, path: &Path) -> CatalogEntry {
    CatalogEntry::new(
        name,
        extract_description(path),
        SkillSource::Project,
        path_string(path),
        to_owned_tags(PROJECT_TAGS),
    )
}
