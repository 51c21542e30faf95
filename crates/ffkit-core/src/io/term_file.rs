use crate::forcefield::codec::{self, AttrMap, CodecError, TermRegistry};
use crate::forcefield::collection::{ForceField, ForceFieldError};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum FileError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("TOML parsing error for '{path}': {source}")]
    Toml {
        path: String,
        source: toml::de::Error,
    },
    #[error("TOML serialization error for '{path}': {source}")]
    TomlSer {
        path: String,
        source: toml::ser::Error,
    },
    #[error("Invalid term entry in '{path}': {source}")]
    Codec { path: String, source: CodecError },
    #[error("Inconsistent term table in '{path}': {source}")]
    ForceField {
        path: String,
        source: ForceFieldError,
    },
}

#[derive(Debug, Serialize, Deserialize)]
struct TermEntry {
    class: String,
    attrs: AttrMap,
}

#[derive(Debug, Serialize, Deserialize, Default)]
struct TermDocument {
    #[serde(default)]
    terms: Vec<TermEntry>,
}

fn path_string(path: &Path) -> String {
    path.to_string_lossy().to_string()
}

/// Loads a term table into a [`ForceField`], decoding every entry through the
/// registry.
pub fn load(path: &Path, registry: &TermRegistry) -> Result<ForceField, FileError> {
    let content = std::fs::read_to_string(path).map_err(|e| FileError::Io {
        path: path_string(path),
        source: e,
    })?;
    let document: TermDocument = toml::from_str(&content).map_err(|e| FileError::Toml {
        path: path_string(path),
        source: e,
    })?;

    let mut forcefield = ForceField::new();
    for entry in &document.terms {
        let term = registry
            .create(&entry.class, &entry.attrs)
            .map_err(|e| FileError::Codec {
                path: path_string(path),
                source: e,
            })?;
        forcefield
            .add_term(term)
            .map_err(|e| FileError::ForceField {
                path: path_string(path),
                source: e,
            })?;
    }
    info!(
        path = %path.display(),
        terms = forcefield.len(),
        "loaded force field term table"
    );
    Ok(forcefield)
}

/// Saves a [`ForceField`] as a term table, family by family with canonical
/// names ascending, so the output is reproducible.
pub fn save(path: &Path, forcefield: &ForceField) -> Result<(), FileError> {
    let document = TermDocument {
        terms: forcefield
            .iter_terms()
            .map(|term| TermEntry {
                class: term.class_name().to_string(),
                attrs: codec::encode(term),
            })
            .collect(),
    };
    let content = toml::to_string(&document).map_err(|e| FileError::TomlSer {
        path: path_string(path),
        source: e,
    })?;
    std::fs::write(path, content).map_err(|e| FileError::Io {
        path: path_string(path),
        source: e,
    })?;
    info!(
        path = %path.display(),
        terms = document.terms.len(),
        "saved force field term table"
    );
    Ok(())
}
