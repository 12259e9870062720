//! Supported primary languages and their starter files.

use crate::models::Language;

/// Supported languages in menu order. The first entry is the default.
pub const SUPPORTED: &[Language] = &[Language::Python, Language::R];

/// Language-specific starter files as `(template, destination)` pairs.
///
/// Destinations are relative to the project root and stay inside `src/` so
/// they land in the source-tree commit.
#[must_use]
pub fn init_files(language: Language) -> &'static [(&'static str, &'static str)] {
    match language {
        Language::Python => &[
            ("python/__init__.py", "src/__init__.py"),
            ("python/make_dataset.py", "src/datasets/make_dataset.py"),
        ],
        Language::R => &[("r/make_dataset.R", "src/datasets/make_dataset.R")],
    }
}

/// The language used when an interactive menu receives an empty answer.
#[must_use]
pub fn default_language() -> Language {
    SUPPORTED[0]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn python_is_the_default() {
        assert_eq!(default_language(), Language::Python);
    }

    #[test]
    fn every_supported_language_parses_from_its_name() {
        for lang in SUPPORTED {
            assert_eq!(lang.as_str().parse::<Language>().unwrap(), *lang);
        }
    }

    #[test]
    fn starter_files_live_under_src() {
        for lang in SUPPORTED {
            for (_, dest) in init_files(*lang) {
                assert!(dest.starts_with("src/"), "{lang}: {dest}");
            }
        }
    }
}
