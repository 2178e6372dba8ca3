//! Plugin-style scanner: every `*.md` below the root is a skill document.

use std::path::Path;

use super::{
    CHANGELOG_FILENAME, README_FILENAME, collect_files, file_name_is, file_stem, has_doc_extension,
    humanize, parent_name, path_string, root_exists,
};
use crate::description::extract_description;
use crate::tags::tags_from_path;
use crate::types::{CatalogEntry, SkillSource};

/// Stems (compared uppercased) too generic to name a skill on their own.
/// Entries for these take the parent directory name instead.
const GENERIC_STEMS: &[&str] = &["SKILL", "QUICK-REFERENCE", "INDEX"];

/// Scan a Claude plugin skill tree.
///
/// Returns an empty list if `root` does not exist.
#[must_use]
pub fn scan_plugin_skills(root: &Path) -> Vec<CatalogEntry> {
    if !root_exists(root, SkillSource::ClaudePlugin) {
        return Vec::new();
    }

    let files = collect_files(root, None, |p| {
        has_doc_extension(p)
            && !file_name_is(p, README_FILENAME)
            && !file_name_is(p, CHANGELOG_FILENAME)
    });

    let entries: Vec<CatalogEntry> = files
        .iter()
        .map(|md| {
            CatalogEntry::new(
                plugin_skill_name(md),
                extract_description(md),
                SkillSource::ClaudePlugin,
                path_string(md),
                tags_from_path(md),
            )
        })
        .collect();

    log::info!("Scanned {} plugin skills from {:?}", entries.len(), root);
    entries
}

fn plugin_skill_name(md: &Path) -> String {
    let stem = file_stem(md);
    if GENERIC_STEMS.contains(&stem.to_uppercase().as_str()) {
        humanize(&parent_name(md))
    } else {
        humanize(&stem)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generic_stems_use_parent() {
        assert_eq!(plugin_skill_name(Path::new("/p/git-flow/SKILL.md")), "git flow");
        assert_eq!(plugin_skill_name(Path::new("/p/aws-cdk/index.md")), "aws cdk");
        assert_eq!(
            plugin_skill_name(Path::new("/p/okta/Quick-Reference.md")),
            "okta"
        );
    }

    #[test]
    fn test_descriptive_stems_used_directly() {
        assert_eq!(
            plugin_skill_name(Path::new("/p/git/rebase-flow.md")),
            "rebase flow"
        );
    }
}
