use std::path::{Path, PathBuf};

use crate::errors::Result;
use crate::models::License;
use crate::paths;
use crate::template::{self, Renderer, TemplateData};

/// Render `licenses/<license>` into `<root>/LICENSE`.
///
/// Returns the written path, or `None` for [`License::None`].
pub fn write_license(
    root: &Path,
    author: &str,
    license: License,
    year: i32,
    renderer: &dyn Renderer,
) -> Result<Option<PathBuf>> {
    if license == License::None {
        return Ok(None);
    }

    let mut data = TemplateData::new();
    data.insert("Year".to_string(), year.to_string());
    data.insert("Author".to_string(), author.to_string());

    let dest = paths::license(root);
    template::write(renderer, &format!("licenses/{license}"), &dest, &data)?;
    Ok(Some(dest))
}
