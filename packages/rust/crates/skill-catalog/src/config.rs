//! Catalog configuration.
//!
//! Source roots come from `<workspace>/config.toml`:
//!
//! ```toml
//! [skills.sources.my-plugins]
//! path = "~/.claude/plugins/skills"
//! type = "claude-plugin"
//!
//! [skills.sources.ralph]
//! path = "~/.config/ralph-tui/skills"
//! type = "ralph-skill"
//! ```
//!
//! The workspace is `$SKILL_CATALOG_WORKSPACE` or `~/.ai-workspace`.
//! A missing config file falls back to [`SourceRoots::defaults`].

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{CatalogError, Result};
use crate::types::SkillSource;

/// Environment variable overriding the workspace root.
pub const WORKSPACE_ENV: &str = "SKILL_CATALOG_WORKSPACE";
/// Workspace directory name under the home directory.
pub const DEFAULT_WORKSPACE_DIR: &str = ".ai-workspace";
/// Config filename inside the workspace.
pub const CONFIG_FILENAME: &str = "config.toml";

#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    skills: SkillsSection,
}

/// `sources` keeps document order (`toml` with `preserve_order`).
#[derive(Debug, Default, Deserialize)]
struct SkillsSection {
    #[serde(default)]
    sources: toml::Table,
}

#[derive(Debug, Deserialize)]
struct SourceSection {
    path: Option<String>,
    #[serde(rename = "type")]
    source_type: Option<String>,
}

/// Map a config `type` value to the scanner that handles it.
#[must_use]
pub fn source_for_type(source_type: &str) -> Option<SkillSource> {
    match source_type {
        "claude-plugin" => Some(SkillSource::ClaudePlugin),
        "ralph-skill" => Some(SkillSource::Ralph),
        "claude-project" => Some(SkillSource::Project),
        _ => None,
    }
}

/// Root directory per source. `None` means the source is not scanned.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceRoots {
    /// Claude plugin skill tree.
    pub plugin: Option<PathBuf>,
    /// Ralph TUI skills.
    pub ralph: Option<PathBuf>,
    /// Project-level skills.
    pub project: Option<PathBuf>,
}

impl SourceRoots {
    /// Hard-coded roots used when no config file exists.
    ///
    /// The project root is resolved against the current directory.
    #[must_use]
    pub fn defaults() -> Self {
        let home = dirs::home_dir().unwrap_or_default();
        let cwd = env::current_dir().unwrap_or_default();
        Self {
            plugin: Some(home.join(".claude").join("skills")),
            ralph: Some(home.join(".config").join("ralph-tui").join("skills")),
            project: Some(cwd.join(".claude").join("skills")),
        }
    }

    /// Root for `source`, if configured.
    #[must_use]
    pub fn get(&self, source: SkillSource) -> Option<&Path> {
        match source {
            SkillSource::ClaudePlugin => self.plugin.as_deref(),
            SkillSource::Ralph => self.ralph.as_deref(),
            SkillSource::Project => self.project.as_deref(),
        }
    }

    /// Set the root for `source`.
    pub fn set(&mut self, source: SkillSource, root: PathBuf) {
        match source {
            SkillSource::ClaudePlugin => self.plugin = Some(root),
            SkillSource::Ralph => self.ralph = Some(root),
            SkillSource::Project => self.project = Some(root),
        }
    }

    /// Configured roots in scan order: plugin, ralph, project.
    pub fn iter(&self) -> impl Iterator<Item = (SkillSource, &Path)> {
        [SkillSource::ClaudePlugin, SkillSource::Ralph, SkillSource::Project]
            .into_iter()
            .filter_map(move |source| self.get(source).map(|root| (source, root)))
    }

    /// Parse `[skills.sources.*]` sections.
    ///
    /// Sections without `path` or `type`, or with an unknown `type`, are
    /// skipped. If two sections share a type the one later in the file wins.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Config` if `content` is not valid TOML or a
    /// source section has the wrong shape.
    pub fn from_toml_str(content: &str, origin: &Path) -> Result<Self> {
        let config_error = |message: String| CatalogError::Config {
            path: origin.to_path_buf(),
            message,
        };
        let file: ConfigFile = toml::from_str(content).map_err(|e| config_error(e.to_string()))?;

        let mut roots = Self::default();
        for (name, value) in file.skills.sources {
            let section = value
                .try_into::<SourceSection>()
                .map_err(|e| config_error(format!("skills.sources.{name}: {e}")))?;
            let (Some(path), Some(source_type)) = (section.path, section.source_type) else {
                log::warn!("Skill source '{}' needs both path and type; ignored", name);
                continue;
            };
            match source_for_type(&source_type) {
                Some(source) => roots.set(source, expand_home(&path)),
                None => log::warn!(
                    "Skill source '{}' has unknown type '{}'; ignored",
                    name,
                    source_type
                ),
            }
        }
        Ok(roots)
    }
}

/// Expand a leading `~/` to the home directory.
#[must_use]
pub fn expand_home(path: &str) -> PathBuf {
    match (path.strip_prefix("~/"), dirs::home_dir()) {
        (Some(rest), Some(home)) => home.join(rest),
        _ if path == "~" => dirs::home_dir().unwrap_or_else(|| PathBuf::from(path)),
        _ => PathBuf::from(path),
    }
}

/// Resolved settings for one catalog run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    /// Workspace root.
    pub workspace: PathBuf,
    /// Source roots to scan.
    pub sources: SourceRoots,
    /// Where `catalog.json` is written.
    pub output: PathBuf,
}

impl CatalogConfig {
    /// Workspace from `$SKILL_CATALOG_WORKSPACE`, else `~/.ai-workspace`.
    #[must_use]
    pub fn default_workspace() -> PathBuf {
        if let Ok(override_path) = env::var(WORKSPACE_ENV) {
            return PathBuf::from(override_path);
        }
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(DEFAULT_WORKSPACE_DIR)
    }

    /// Default output path: `<workspace>/skills/catalog.json`.
    #[must_use]
    pub fn default_output(workspace: &Path) -> PathBuf {
        workspace.join("skills").join("catalog.json")
    }

    /// Load `<workspace>/config.toml`.
    ///
    /// # Errors
    ///
    /// See [`CatalogConfig::load_from`].
    pub fn load(workspace: &Path) -> Result<Self> {
        Self::load_from(workspace, &workspace.join(CONFIG_FILENAME))
    }

    /// Load an explicit config file. A missing file yields default roots.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Io` if the file exists but cannot be read and
    /// `CatalogError::Config` if it cannot be parsed.
    pub fn load_from(workspace: &Path, config_path: &Path) -> Result<Self> {
        let sources = if config_path.exists() {
            let content =
                fs::read_to_string(config_path).map_err(|e| CatalogError::io(config_path, e))?;
            let roots = SourceRoots::from_toml_str(&content, config_path)?;
            log::debug!("Loaded skill sources from {:?}: {:?}", config_path, roots);
            roots
        } else {
            log::info!("No config at {:?}; using default skill roots", config_path);
            SourceRoots::defaults()
        };

        Ok(Self {
            workspace: workspace.to_path_buf(),
            sources,
            output: Self::default_output(workspace),
        })
    }
}
