//! Tests for the plugin, ralph and project scanners.

use std::fs;
use std::path::Path;
use tempfile::TempDir;

use skill_catalog::{
    NO_DESCRIPTION, SkillSource, scan_plugin_skills, scan_project_skills, scan_ralph_skills,
};

fn write(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn names(entries: &[skill_catalog::CatalogEntry]) -> Vec<&str> {
    entries.iter().map(|e| e.name.as_str()).collect()
}

/// Test README exclusion and parent-dir naming.
#[test]
fn test_plugin_readme_excluded() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    write(root, "a/SKILL.md", "description: Skill A\n");
    write(root, "a/README.md", "# Readme\n");
    write(root, "b/notes.md", "# Notes\n");

    let entries = scan_plugin_skills(root);

    assert_eq!(entries.len(), 2);
    assert_eq!(names(&entries), vec!["a", "notes"]);
    assert_eq!(entries[0].description, "Skill A");
    assert_eq!(entries[1].description, "Notes");
}

/// Test changelog exclusion, generic stems and separator replacement.
#[test]
fn test_plugin_naming_rules() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    write(root, "CHANGELOG.md", "# Changes\n");
    write(root, "01-core/git-flow/SKILL.md", "# Git flow\n");
    write(root, "01-core/git-flow/QUICK-REFERENCE.md", "# Cheatsheet\n");
    write(root, "01-core/git-flow/rebase-strategies.md", "# Rebase\n");
    write(root, "pdi-okta/scim-sync/index.md", "");
    write(root, "01-core/git-flow/script.py", "print()\n");

    let entries = scan_plugin_skills(root);

    assert_eq!(
        names(&entries),
        vec!["git flow", "git flow", "rebase strategies", "scim sync"]
    );
    assert!(entries[0].path.ends_with("QUICK-REFERENCE.md"));
    assert!(entries[1].path.ends_with("SKILL.md"));
    assert_eq!(entries[0].tags, vec!["core", "development"]);
    assert_eq!(entries[3].tags, vec!["okta", "pdi"]);
    assert_eq!(entries[3].description, NO_DESCRIPTION);
    for entry in &entries {
        assert_eq!(entry.source, SkillSource::ClaudePlugin);
        assert_eq!(entry.tools, vec!["claude", "kilocode", "cline"]);
    }
}

/// Test missing plugin root yields nothing.
#[test]
fn test_plugin_missing_root() {
    let temp_dir = TempDir::new().unwrap();
    assert!(scan_plugin_skills(&temp_dir.path().join("nope")).is_empty());
}

/// Test ralph scanner only picks SKILL.md and keeps directory names as-is.
#[test]
fn test_ralph_skills() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    write(root, "task-runner/SKILL.md", "description: Runs tasks\n");
    write(root, "prd/SKILL.md", "# PRD writer\n");
    write(root, "prd/extra.md", "# Ignored\n");
    write(root, "nested/deep/SKILL.md", "");

    let entries = scan_ralph_skills(root);

    assert_eq!(names(&entries), vec!["deep", "prd", "task-runner"]);
    assert_eq!(entries[1].description, "PRD writer");
    assert_eq!(entries[2].description, "Runs tasks");
    for entry in &entries {
        assert_eq!(entry.source, SkillSource::Ralph);
        assert_eq!(entry.tags, vec!["ralph", "tui"]);
        assert_eq!(entry.tools, vec!["ralph", "claude"]);
    }
}

/// Test ralph tags are fixed even under a category folder.
#[test]
fn test_ralph_tags_not_classified() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    write(root, "04-quality/lint/SKILL.md", "");

    let entries = scan_ralph_skills(root);
    assert_eq!(entries[0].tags, vec!["ralph", "tui"]);
}

#[test]
fn test_ralph_missing_root() {
    let temp_dir = TempDir::new().unwrap();
    assert!(scan_ralph_skills(&temp_dir.path().join("nope")).is_empty());
}

/// Test manifest pass precedes the top-level pass.
#[test]
fn test_project_two_passes() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    write(root, "zeta-flow/SKILL.md", "description: Zeta\n");
    write(root, "alpha/inner/SKILL.md", "description: Alpha\n");
    write(root, "n8n-quick-start.md", "# Quick start\n");
    write(root, "README.md", "# Readme\n");
    write(root, "alpha/loose.md", "# Not top-level\n");

    let entries = scan_project_skills(root);

    assert_eq!(
        names(&entries),
        vec!["inner", "zeta-flow", "n8n quick start"]
    );
    assert_eq!(entries[2].description, "Quick start");
    for entry in &entries {
        assert_eq!(entry.source, SkillSource::Project);
        assert_eq!(entry.tags, vec!["n8n", "project"]);
        assert_eq!(entry.tools, vec!["claude", "kilocode"]);
    }
}

/// Test a root-level SKILL.md is reported by both passes.
#[test]
fn test_project_root_manifest_duplicated() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("my-project");
    write(&root, "SKILL.md", "description: Root skill\n");

    let entries = scan_project_skills(&root);

    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].name, "my-project");
    assert_eq!(entries[1].name, "SKILL");
    assert_eq!(entries[0].path, entries[1].path);
}

#[test]
fn test_project_missing_root() {
    let temp_dir = TempDir::new().unwrap();
    assert!(scan_project_skills(&temp_dir.path().join("nope")).is_empty());
}
