//! Configuration file lookup.
//!
//! Priority order:
//!
//! 1. `--config` flag (explicit path, trusted as-is)
//! 2. `{descriptor dir}/field-lint.toml`, then `.field-lint.toml`
//! 3. `$FIELD_LINT_CONFIG_DIR/config.toml`, else `~/.field-lint/config.toml`
//! 4. Built-in defaults

use std::path::{Path, PathBuf};

/// Where the configuration was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Given with `--config`.
    Explicit(PathBuf),
    /// Next to the analyzed descriptors.
    Project(PathBuf),
    /// In the user-wide config directory.
    Global(PathBuf),
    /// Nothing found.
    Default,
}

impl ConfigSource {
    /// Returns the resolved path, if any.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Explicit(p) | Self::Project(p) | Self::Global(p) => Some(p),
            Self::Default => None,
        }
    }

    /// Returns `true` for the user-wide config.
    #[must_use]
    pub fn is_global(&self) -> bool {
        matches!(self, Self::Global(_))
    }
}

const PROJECT_CONFIG_NAMES: &[&str] = &["field-lint.toml", ".field-lint.toml"];

const GLOBAL_CONFIG_NAME: &str = "config.toml";

/// Resolves the configuration file for `project_dir`.
#[must_use]
pub fn resolve(project_dir: &Path, explicit: Option<&Path>) -> ConfigSource {
    resolve_with_global(project_dir, explicit, global_config_dir())
}

fn resolve_with_global(
    project_dir: &Path,
    explicit: Option<&Path>,
    global_dir: Option<PathBuf>,
) -> ConfigSource {
    if let Some(p) = explicit {
        return ConfigSource::Explicit(p.to_path_buf());
    }

    if let Some(found) = PROJECT_CONFIG_NAMES
        .iter()
        .map(|name| project_dir.join(name))
        .find(|candidate| candidate.exists())
    {
        tracing::debug!("Found project config: {}", found.display());
        return ConfigSource::Project(found);
    }

    match global_dir.map(|dir| dir.join(GLOBAL_CONFIG_NAME)) {
        Some(candidate) if candidate.exists() => {
            tracing::debug!("Found global config: {}", candidate.display());
            ConfigSource::Global(candidate)
        }
        _ => ConfigSource::Default,
    }
}

/// `$FIELD_LINT_CONFIG_DIR` if set, else `~/.field-lint/`.
fn global_config_dir() -> Option<PathBuf> {
    if let Ok(dir) = std::env::var("FIELD_LINT_CONFIG_DIR") {
        return Some(PathBuf::from(dir));
    }
    home::home_dir().map(|h| h.join(".field-lint"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn explicit_wins_even_if_missing() {
        let project = TempDir::new().unwrap();
        fs::write(project.path().join("field-lint.toml"), "").unwrap();

        let result = resolve_with_global(
            project.path(),
            Some(Path::new("/nonexistent.toml")),
            None,
        );
        assert_eq!(
            result,
            ConfigSource::Explicit(PathBuf::from("/nonexistent.toml"))
        );
    }

    #[test]
    fn plain_name_preferred_over_dot_name() {
        let project = TempDir::new().unwrap();
        fs::write(project.path().join(".field-lint.toml"), "").unwrap();
        assert_eq!(
            resolve_with_global(project.path(), None, None),
            ConfigSource::Project(project.path().join(".field-lint.toml"))
        );

        fs::write(project.path().join("field-lint.toml"), "").unwrap();
        assert_eq!(
            resolve_with_global(project.path(), None, None),
            ConfigSource::Project(project.path().join("field-lint.toml"))
        );
    }

    #[test]
    fn global_used_only_without_project_config() {
        let project = TempDir::new().unwrap();
        let global = TempDir::new().unwrap();
        fs::write(global.path().join("config.toml"), "").unwrap();

        let result =
            resolve_with_global(project.path(), None, Some(global.path().to_path_buf()));
        assert_eq!(result, ConfigSource::Global(global.path().join("config.toml")));
        assert!(result.is_global());

        fs::write(project.path().join("field-lint.toml"), "").unwrap();
        let result =
            resolve_with_global(project.path(), None, Some(global.path().to_path_buf()));
        assert!(matches!(result, ConfigSource::Project(_)));
    }

    #[test]
    fn falls_back_to_default() {
        let project = TempDir::new().unwrap();
        let empty_global = TempDir::new().unwrap();

        let result = resolve_with_global(
            project.path(),
            None,
            Some(empty_global.path().to_path_buf()),
        );
        assert_eq!(result, ConfigSource::Default);
        assert!(result.path().is_none());
    }
}
