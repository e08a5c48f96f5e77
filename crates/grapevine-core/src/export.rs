//! Export — renders the classified message list for downstream consumers.
//!
//! Two formats: a plain JSON array, or the same array assigned to a global
//! variable so a static portal page can pull it in with a `<script>` tag.

use crate::types::Message;
use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("failed to serialise messages: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("failed to write {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    /// `<variable> = <json>;`
    Js,
}

impl ExportFormat {
    /// `.js` files get the script wrapper, everything else plain JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("js") => ExportFormat::Js,
            _ => ExportFormat::Json,
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportFormat::Json => write!(f, "json"),
            ExportFormat::Js => write!(f, "js"),
        }
    }
}

/// Render messages in the given format. `js_variable` is only used for
/// [`ExportFormat::Js`].
pub fn render(messages: &[Message], format: ExportFormat, js_variable: &str) -> Result<String, ExportError> {
    let json = serde_json::to_string_pretty(messages)?;
    Ok(match format {
        ExportFormat::Json => json,
        ExportFormat::Js => format!("{js_variable} = {json};"),
    })
}

/// Render and write to `path`, choosing the format from its extension.
pub fn write(path: &Path, messages: &[Message], js_variable: &str) -> Result<ExportFormat, ExportError> {
    let format = ExportFormat::from_path(path);
    let text = render(messages, format, js_variable)?;
    std::fs::write(path, text).map_err(|source| ExportError::Write {
        path: path.display().to_string(),
        source,
    })?;
    tracing::info!(path = %path.display(), %format, count = messages.len(), "exported messages");
    Ok(format)
}
