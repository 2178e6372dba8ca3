//! Source scanners.
//!
//! Each source has its own directory convention:
//!
//! ```text
//! plugin/                      ralph/                  project/
//! ├── 01-core/                 ├── prd/                ├── n8n-workflows/
//! │   └── git/                 │   └── SKILL.md        │   └── SKILL.md
//! │       ├── SKILL.md         └── tasks/              ├── quick-start.md
//! │       └── rebase-flow.md       └── SKILL.md        └── README.md
//! └── README.md
//! ```
//!
//! All scanners visit files in lexicographic path order so repeated runs
//! produce identical catalogs.

mod plugin;
mod project;
mod ralph;

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::types::{CatalogEntry, SkillSource};

pub use plugin::scan_plugin_skills;
pub use project::scan_project_skills;
pub use ralph::scan_ralph_skills;

/// Reserved filename marking a directory as a single skill.
pub const MANIFEST_FILENAME: &str = "SKILL.md";
/// Extension shared by all skill documents.
pub const DOC_EXTENSION: &str = "md";
/// Excluded from every scan.
pub const README_FILENAME: &str = "README.md";
/// Excluded from plugin scans.
pub const CHANGELOG_FILENAME: &str = "CHANGELOG.md";

/// Run the scanner for `source` against `root`.
#[must_use]
pub fn scan_source(source: SkillSource, root: &Path) -> Vec<CatalogEntry> {
    match source {
        SkillSource::ClaudePlugin => scan_plugin_skills(root),
        SkillSource::Ralph => scan_ralph_skills(root),
        SkillSource::Project => scan_project_skills(root),
    }
}

/// Returns `false` (and logs) when a root is missing.
fn root_exists(root: &Path, source: SkillSource) -> bool {
    if root.exists() {
        return true;
    }
    log::warn!("Skill source '{}' not found: {:?}", source, root);
    false
}

/// Collect matching files below `root`, sorted by path.
///
/// `max_depth` of `None` walks the whole tree; `Some(1)` only looks at
/// direct children. Symlinked files are included, symlinked directories
/// are not descended into.
fn collect_files<F>(root: &Path, max_depth: Option<usize>, filter: F) -> Vec<PathBuf>
where
    F: Fn(&Path) -> bool,
{
    let mut walker = WalkDir::new(root).follow_links(false).min_depth(1);
    if let Some(depth) = max_depth {
        walker = walker.max_depth(depth);
    }

    let mut files: Vec<PathBuf> = walker
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(e) => Some(e),
            Err(err) => {
                log::debug!("Skipping unreadable entry under {:?}: {}", root, err);
                None
            }
        })
        .filter(|e| e.file_type().is_file() || (e.path_is_symlink() && e.path().is_file()))
        .map(walkdir::DirEntry::into_path)
        .filter(|p| filter(p.as_path()))
        .collect();

    files.sort();
    files
}

fn has_doc_extension(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == DOC_EXTENSION)
}

fn file_name_is(path: &Path, name: &str) -> bool {
    path.file_name().is_some_and(|n| n == name)
}

/// Replace `-` separators with spaces.
fn humanize(raw: &str) -> String {
    raw.replace('-', " ")
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn parent_name(path: &Path) -> String {
    path.parent()
        .and_then(Path::file_name)
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn path_string(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}
