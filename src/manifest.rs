//! Deterministic mapping from a [`ProjectConfig`] to the directories and
//! files of a project skeleton.

use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::languages;
use crate::models::ProjectConfig;
use crate::paths;

/// Directory catalog. The flag marks leaf directories that get a
/// placeholder file so they survive in version control while empty.
const DIRECTORIES: &[(&str, bool)] = &[
    (paths::CONFIG_DIR, false),
    ("data", false),
    ("data/external", true),
    ("data/interim", true),
    ("data/processed", true),
    ("data/raw", true),
    ("docs", true),
    ("models", true),
    ("notebooks", true),
    ("references", true),
    ("reports", false),
    ("reports/figures", true),
    ("src", false),
    ("src/datasets", true),
    ("src/features", true),
    ("src/models", true),
    ("src/scripts", true),
    ("src/visualization", true),
];

/// The resolved set of directories and template writes for one project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Manifest {
    /// Relative directory path → whether it needs a placeholder file.
    pub directories: BTreeMap<&'static str, bool>,
    /// Template name → absolute destination path.
    pub files: BTreeMap<String, PathBuf>,
}

/// Build the manifest for `config`.
///
/// Universal files come first; language starter files are added only where
/// neither their template name nor their destination is already taken.
#[must_use]
pub fn build(config: &ProjectConfig) -> Manifest {
    let root = &config.project_root;
    let language = config.primary_language;

    let directories = DIRECTORIES.iter().copied().collect();

    let mut files = BTreeMap::new();
    files.insert(format!("gitignore/{language}"), paths::gitignore(root));
    files.insert("docker/Dockerfile".to_string(), paths::dockerfile(root));
    files.insert(
        "docker/docker-compose.yml".to_string(),
        paths::docker_compose(root),
    );

    for (template, dest) in languages::init_files(language) {
        let dest = root.join(dest);
        if files.contains_key(*template) || files.values().any(|d| *d == dest) {
            continue;
        }
        files.insert((*template).to_string(), dest);
    }

    Manifest { directories, files }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Language, License};
    use std::collections::BTreeSet;
    use std::path::Path;

    fn config(language: Language) -> ProjectConfig {
        ProjectConfig {
            project_root: PathBuf::from("/work/project"),
            author: "Ada".to_string(),
            license: License::Mit,
            primary_language: language,
        }
    }

    #[test]
    fn build_is_deterministic() {
        for lang in languages::SUPPORTED {
            assert_eq!(build(&config(*lang)), build(&config(*lang)));
        }
    }

    #[test]
    fn universal_files_present_for_every_language() {
        let root = Path::new("/work/project");
        for lang in languages::SUPPORTED {
            let manifest = build(&config(*lang));
            assert_eq!(
                manifest.files.get(&format!("gitignore/{lang}")),
                Some(&root.join(".gitignore"))
            );
            assert_eq!(
                manifest.files.get("docker/Dockerfile"),
                Some(&root.join("Dockerfile"))
            );
            assert_eq!(
                manifest.files.get("docker/docker-compose.yml"),
                Some(&root.join("docker-compose.yml"))
            );
        }
    }

    #[test]
    fn language_files_are_added() {
        let manifest = build(&config(Language::Python));
        assert_eq!(
            manifest.files.get("python/make_dataset.py"),
            Some(&PathBuf::from("/work/project/src/datasets/make_dataset.py"))
        );
        let manifest = build(&config(Language::R));
        assert!(manifest.files.contains_key("r/make_dataset.R"));
        assert!(!manifest.files.contains_key("python/make_dataset.py"));
    }

    #[test]
    fn destinations_never_collide() {
        for lang in languages::SUPPORTED {
            let manifest = build(&config(*lang));
            let unique: BTreeSet<_> = manifest.files.values().collect();
            assert_eq!(unique.len(), manifest.files.len(), "{lang}");
        }
    }

    #[test]
    fn destinations_are_absolute_under_root() {
        for lang in languages::SUPPORTED {
            for dest in build(&config(*lang)).files.values() {
                assert!(dest.starts_with("/work/project"), "{}", dest.display());
            }
        }
    }

    #[test]
    fn leaf_directories_get_placeholders() {
        let manifest = build(&config(Language::Python));
        assert_eq!(manifest.directories.get("data/raw"), Some(&true));
        assert_eq!(manifest.directories.get("reports/figures"), Some(&true));
        assert_eq!(manifest.directories.get("src/scripts"), Some(&true));
        assert_eq!(manifest.directories.get("data"), Some(&false));
        assert_eq!(manifest.directories.get("src"), Some(&false));
        assert_eq!(manifest.directories.get(".ccds"), Some(&false));
    }

    #[test]
    fn catalog_covers_standard_layout() {
        let manifest = build(&config(Language::R));
        for dir in [
            "data/external",
            "data/interim",
            "data/processed",
            "data/raw",
            "docs",
            "models",
            "notebooks",
            "references",
            "reports/figures",
            "src/datasets",
            "src/features",
            "src/models",
            "src/scripts",
            "src/visualization",
        ] {
            assert!(manifest.directories.contains_key(dir), "missing {dir}");
        }
    }
}
