//! Shared utilities for command handlers

use crate::declarations;
use crate::error::{Error, Result};
use dtospec_core::DtoRegistry;
use serde_json::Value;
use std::path::Path;

/// Load a declaration file, mapping failures to CLI errors
pub fn load_declarations(path: &Path) -> Result<DtoRegistry> {
    if !path.exists() {
        return Err(Error::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    declarations::load_registry(path).map_err(|e| Error::Declarations {
        path: path.to_path_buf(),
        message: format!("{:#}", e),
    })
}

/// Read a payload file (or stdin for `-`)
pub fn load_payload(source: &str) -> Result<Value> {
    if source != "-" && !Path::new(source).exists() {
        return Err(Error::FileNotFound {
            path: source.into(),
        });
    }

    declarations::read_payload(source).map_err(|e| Error::InvalidFormat {
        path: source.into(),
        expected: format!("JSON, YAML or TOML ({:#})", e),
    })
}
