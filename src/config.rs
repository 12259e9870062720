//! Persisted project configuration stored at `<root>/.ccds/config.yml`.

use std::path::{Path, PathBuf};

use crate::errors::{CcdsError, Result};
use crate::models::ProjectConfig;
use crate::paths;

/// Read/write access to one project's configuration file.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    /// Store for the project rooted at `root`.
    #[must_use]
    pub fn for_root(root: &Path) -> Self {
        Self {
            path: paths::config_file(root),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns `true` if the file exists and records a `ProjectRoot`.
    ///
    /// Only the sentinel key is inspected, so a partially written file still
    /// counts as initialized. A missing, null or empty-string value does not;
    /// any other value (number, list, map) does.
    pub fn is_initialized(&self) -> Result<bool> {
        if !self.path.exists() {
            return Ok(false);
        }
        let content = std::fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(false);
        }
        let value: serde_yaml_ng::Value =
            serde_yaml_ng::from_str(&content).map_err(|e| CcdsError::Config {
                message: format!("cannot parse {}: {e}", self.path.display()),
            })?;
        Ok(match value.get("ProjectRoot") {
            None | Some(serde_yaml_ng::Value::Null) => false,
            Some(serde_yaml_ng::Value::String(root)) => !root.is_empty(),
            Some(_) => true,
        })
    }

    /// Write `config`, creating the `.ccds` directory if needed.
    pub fn save(&self, config: &ProjectConfig) -> Result<()> {
        let yaml = serde_yaml_ng::to_string(config).map_err(|e| CcdsError::Config {
            message: format!("failed to serialize config: {e}"),
        })?;
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| CcdsError::CreateDir {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        std::fs::write(&self.path, yaml).map_err(|source| CcdsError::CreateFile {
            path: self.path.clone(),
            source,
        })?;
        tracing::debug!(path = %self.path.display(), "wrote project config");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Language, License};
    use tempfile::tempdir;

    fn read_back(store: &ConfigStore) -> ProjectConfig {
        let content = std::fs::read_to_string(store.path()).unwrap();
        serde_yaml_ng::from_str(&content).unwrap()
    }

    fn sample(root: &Path) -> ProjectConfig {
        ProjectConfig {
            project_root: root.to_path_buf(),
            author: "Ada".to_string(),
            license: License::Mit,
            primary_language: Language::Python,
        }
    }

    #[test]
    fn missing_file_is_not_initialized() {
        let dir = tempdir().unwrap();
        let store = ConfigStore::for_root(dir.path());
        assert!(!store.is_initialized().unwrap());
    }

    #[test]
    fn saved_config_marks_root_initialized() {
        let dir = tempdir().unwrap();
        let store = ConfigStore::for_root(dir.path());
        store.save(&sample(dir.path())).unwrap();
        assert!(dir.path().join(".ccds/config.yml").exists());
        assert!(store.is_initialized().unwrap());
    }

    #[test]
    fn save_then_load_preserves_values() {
        let dir = tempdir().unwrap();
        let store = ConfigStore::for_root(dir.path());
        let config = sample(dir.path());
        store.save(&config).unwrap();
        assert_eq!(read_back(&store), config);
    }

    #[test]
    fn empty_project_root_is_not_initialized() {
        let dir = tempdir().unwrap();
        let store = ConfigStore::for_root(dir.path());
        std::fs::create_dir_all(dir.path().join(".ccds")).unwrap();
        std::fs::write(store.path(), "ProjectRoot: ''\nAuthor: x\n").unwrap();
        assert!(!store.is_initialized().unwrap());
    }

    #[test]
    fn partial_file_with_root_is_initialized() {
        let dir = tempdir().unwrap();
        let store = ConfigStore::for_root(dir.path());
        std::fs::create_dir_all(dir.path().join(".ccds")).unwrap();
        std::fs::write(store.path(), "ProjectRoot: /somewhere\n").unwrap();
        assert!(store.is_initialized().unwrap());
    }

    #[test]
    fn non_string_project_root_is_initialized() {
        let dir = tempdir().unwrap();
        let store = ConfigStore::for_root(dir.path());
        std::fs::create_dir_all(dir.path().join(".ccds")).unwrap();
        for content in ["ProjectRoot: 42\n", "ProjectRoot: true\n", "ProjectRoot: [a]\n"] {
            std::fs::write(store.path(), content).unwrap();
            assert!(store.is_initialized().unwrap(), "{content}");
        }
    }

    #[test]
    fn null_project_root_is_not_initialized() {
        let dir = tempdir().unwrap();
        let store = ConfigStore::for_root(dir.path());
        std::fs::create_dir_all(dir.path().join(".ccds")).unwrap();
        for content in ["ProjectRoot:\n", "ProjectRoot: ~\n", "Author: Ada\n"] {
            std::fs::write(store.path(), content).unwrap();
            assert!(!store.is_initialized().unwrap(), "{content}");
        }
    }

    #[test]
    fn malformed_file_is_a_config_error() {
        let dir = tempdir().unwrap();
        let store = ConfigStore::for_root(dir.path());
        std::fs::create_dir_all(dir.path().join(".ccds")).unwrap();
        std::fs::write(store.path(), "ProjectRoot: [unclosed\n").unwrap();
        let err = store.is_initialized().unwrap_err();
        assert!(err.to_string().contains("config error"), "{err}");
    }

    #[test]
    fn save_overwrites_previous_config() {
        let dir = tempdir().unwrap();
        let store = ConfigStore::for_root(dir.path());
        store.save(&sample(dir.path())).unwrap();
        let mut updated = sample(dir.path());
        updated.author = "Grace".to_string();
        store.save(&updated).unwrap();
        assert_eq!(read_back(&store).author, "Grace");
    }
}
