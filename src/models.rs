use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::CcdsError;

/// Project license, matched case-sensitively by its identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum License {
    #[serde(rename = "MIT")]
    Mit,
    #[serde(rename = "BSD-3-Clause")]
    Bsd3Clause,
    #[serde(rename = "None")]
    None,
}

impl License {
    /// All licenses in menu order.
    pub const ALL: [License; 3] = [License::Mit, License::Bsd3Clause, License::None];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            License::Mit => "MIT",
            License::Bsd3Clause => "BSD-3-Clause",
            License::None => "None",
        }
    }
}

impl fmt::Display for License {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for License {
    type Err = CcdsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        License::ALL
            .into_iter()
            .find(|l| l.as_str() == s)
            .ok_or_else(|| CcdsError::UnknownLicense {
                name: s.to_string(),
            })
    }
}

/// Primary project language.
///
/// The order of [`crate::languages::SUPPORTED`] decides the menu order and
/// the default, not the order of these variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Python,
    R,
}

impl Language {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Language::Python => "python",
            Language::R => "r",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = CcdsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::languages::SUPPORTED
            .iter()
            .copied()
            .find(|l| l.as_str() == s)
            .ok_or_else(|| CcdsError::UnknownLanguage {
                name: s.to_string(),
            })
    }
}

/// Resolved configuration of one project, persisted under `.ccds/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectConfig {
    #[serde(rename = "ProjectRoot")]
    pub project_root: PathBuf,

    #[serde(rename = "Author")]
    pub author: String,

    #[serde(rename = "License")]
    pub license: License,

    #[serde(rename = "PrimaryLanguage")]
    pub primary_language: Language,
}
