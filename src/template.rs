// src/template.rs

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("Failed to read template {path}: {source}")]
    Read { path: PathBuf, source: io::Error },

    #[error("Failed to write unit file {path}: {source}")]
    Write { path: PathBuf, source: io::Error },
}

/// Replaces every occurrence of `{{KEY}}` with its value, for each supplied
/// pair. Plain substring replacement; placeholders without a pair are left
/// verbatim in the output.
pub fn render(template: &str, substitutions: &[(&str, String)]) -> String {
    let mut rendered = template.to_owned();
    for (key, value) in substitutions {
        let placeholder = format!("{{{{{key}}}}}");
        rendered = rendered.replace(&placeholder, value);
    }
    rendered
}

/// Reads `template_path`, applies `substitutions`, and writes the result to
/// `output_path`, truncating any existing file.
pub fn install_template(
    template_path: &Path,
    output_path: &Path,
    substitutions: &[(&str, String)],
) -> Result<(), TemplateError> {
    let text = fs::read_to_string(template_path).map_err(|source| TemplateError::Read {
        path: template_path.to_path_buf(),
        source,
    })?;

    let rendered = render(&text, substitutions);

    debug!(
        "Rendering {} -> {} ({} substitutions)",
        template_path.display(),
        output_path.display(),
        substitutions.len()
    );

    fs::write(output_path, &rendered).map_err(|source| TemplateError::Write {
        path: output_path.to_path_buf(),
        source,
    })
}
