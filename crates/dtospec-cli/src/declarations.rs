//! Loading declaration files and payloads from disk
//!
//! Declaration files are JSON, YAML or TOML (chosen by extension) holding a
//! declaration document. Failures carry file-level context through
//! `anyhow` and are flattened into a single message for the user.

use anyhow::{Context, Result};
use dtospec_core::{DeclarationDocument, DtoRegistry};
use serde_json::Value;
use std::io::Read;
use std::path::Path;

/// Serialization format of a declaration or payload file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Json,
    Yaml,
    Toml,
}

impl DocumentFormat {
    /// Pick the format from a file extension, defaulting to JSON
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|s| s.to_str()) {
            Some("yaml") | Some("yml") => DocumentFormat::Yaml,
            Some("toml") => DocumentFormat::Toml,
            _ => DocumentFormat::Json,
        }
    }
}

/// Parse document text into a JSON value
pub fn parse_document(content: &str, format: DocumentFormat) -> Result<Value> {
    match format {
        DocumentFormat::Json => serde_json::from_str(content).context("document is not valid JSON"),
        DocumentFormat::Yaml => serde_yaml::from_str(content).context("document is not valid YAML"),
        DocumentFormat::Toml => toml::from_str(content).context("document is not valid TOML"),
    }
}

/// Load a declaration file into a registry of DTO shapes
pub fn load_registry(path: &Path) -> Result<DtoRegistry> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let value = parse_document(&content, DocumentFormat::from_path(path))?;

    let document =
        DeclarationDocument::from_value(&value).context("malformed declaration document")?;
    let registry = document
        .into_registry()
        .context("declaration document rejected")?;

    tracing::info!(
        path = %path.display(),
        dtos = registry.len(),
        "Loaded declarations"
    );
    Ok(registry)
}

/// Read a payload from a file, or from stdin when `source` is `-`
///
/// Stdin is parsed as YAML, which also accepts JSON documents.
pub fn read_payload(source: &str) -> Result<Value> {
    if source == "-" {
        let mut content = String::new();
        std::io::stdin()
            .read_to_string(&mut content)
            .context("failed to read payload from stdin")?;
        return parse_document(&content, DocumentFormat::Yaml);
    }

    let path = Path::new(source);
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read payload {}", path.display()))?;
    parse_document(&content, DocumentFormat::from_path(path))
}
