//! Template rendering for generated project files.
//!
//! Rendering sits behind the [`Renderer`] trait so the scaffolding pipeline
//! does not depend on a particular engine. [`BuiltinTemplates`] registers the
//! templates compiled into the binary with `tera` and renders them against a
//! [`TemplateData`] record.

use std::collections::BTreeMap;
use std::path::Path;

use tera::{Context, Tera};

use crate::errors::{CcdsError, Result};

/// Key/value record a template is rendered against.
pub type TemplateData = BTreeMap<String, String>;

/// Produces rendered bytes for a named template.
pub trait Renderer {
    fn render(&self, name: &str, data: &TemplateData) -> Result<String>;
}

/// Template sources embedded at compile time from the `templates/` directory.
const SOURCES: &[(&str, &str)] = &[
    ("gitignore/python", include_str!("../templates/gitignore/python")),
    ("gitignore/r", include_str!("../templates/gitignore/r")),
    ("docker/Dockerfile", include_str!("../templates/docker/Dockerfile")),
    (
        "docker/docker-compose.yml",
        include_str!("../templates/docker/docker-compose.yml"),
    ),
    ("licenses/MIT", include_str!("../templates/licenses/MIT")),
    (
        "licenses/BSD-3-Clause",
        include_str!("../templates/licenses/BSD-3-Clause"),
    ),
    ("python/__init__.py", include_str!("../templates/python/__init__.py")),
    (
        "python/make_dataset.py",
        include_str!("../templates/python/make_dataset.py"),
    ),
    ("r/make_dataset.R", include_str!("../templates/r/make_dataset.R")),
];

/// The built-in template set, parsed once.
pub struct BuiltinTemplates {
    tera: Tera,
}

impl BuiltinTemplates {
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();
        tera.add_raw_templates(SOURCES.iter().copied())
            .map_err(|e| template_error("<builtin>", &e))?;
        Ok(Self { tera })
    }

    /// Raw, unrendered source of a built-in template.
    #[must_use]
    pub fn source(name: &str) -> Option<&'static str> {
        SOURCES
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, source)| *source)
    }
}

impl Renderer for BuiltinTemplates {
    fn render(&self, name: &str, data: &TemplateData) -> Result<String> {
        let mut context = Context::new();
        for (key, value) in data {
            context.insert(key.as_str(), value);
        }
        self.tera
            .render(name, &context)
            .map_err(|e| template_error(name, &e))
    }
}

/// Flatten a tera error and its causes into one message.
fn template_error(name: &str, err: &tera::Error) -> CcdsError {
    let mut message = err.to_string();
    let mut source = std::error::Error::source(err);
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    CcdsError::Template {
        name: name.to_string(),
        message,
    }
}

/// Render `name` against `data` and write the result to `dest`, replacing
/// any existing file.
pub fn write(renderer: &dyn Renderer, name: &str, dest: &Path, data: &TemplateData) -> Result<()> {
    let content = renderer.render(name, data)?;
    if let Some(parent) = dest.parent() {
        std::fs::create_dir_all(parent).map_err(|source| CcdsError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    std::fs::write(dest, content).map_err(|source| CcdsError::CreateFile {
        path: dest.to_path_buf(),
        source,
    })?;
    tracing::debug!(template = name, dest = %dest.display(), "rendered template");
    Ok(())
}
