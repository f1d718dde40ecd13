use crate::TypeDescriptor;
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Failures raised by the descriptor catalog.
#[derive(Debug, Error)]
pub enum DescriptorError {
    #[error("cannot read descriptor catalog at {path}")]
    CatalogRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed descriptor file {path}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("unknown type: {name}")]
    UnknownType { name: String },
}

/// The type-introspection facility: a canonical-name-keyed catalog of
/// descriptors loaded from JSON files.
#[derive(Debug, Default)]
pub struct DescriptorIndex {
    types: BTreeMap<String, TypeDescriptor>,
}

impl DescriptorIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load every `*.json` descriptor under `dir` into the index.
    pub fn load_dir(dir: &Path) -> Result<Self, DescriptorError> {
        let mut index = Self::new();
        let entries = fs::read_dir(dir).map_err(|source| DescriptorError::CatalogRead {
            path: dir.to_path_buf(),
            source,
        })?;

        for entry in entries {
            let entry = entry.map_err(|source| DescriptorError::CatalogRead {
                path: dir.to_path_buf(),
                source,
            })?;
            let path = entry.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some("json") {
                continue;
            }

            let content =
                fs::read_to_string(&path).map_err(|source| DescriptorError::CatalogRead {
                    path: path.clone(),
                    source,
                })?;
            let descriptor: TypeDescriptor = serde_json::from_str(&content).map_err(|source| {
                DescriptorError::Malformed {
                    path: path.clone(),
                    source,
                }
            })?;

            debug!(
                name = %descriptor.canonical_name(),
                path = %path.display(),
                "descriptor loaded"
            );
            index.insert(descriptor);
        }

        Ok(index)
    }

    pub fn insert(&mut self, descriptor: TypeDescriptor) {
        self.types.insert(descriptor.canonical_name(), descriptor);
    }

    /// Resolve a canonical type name, failing for names the catalog
    /// does not know. This is where the original design's "null token"
    /// rejection lives.
    pub fn resolve(&self, name: &str) -> Result<&TypeDescriptor, DescriptorError> {
        self.types
            .get(name)
            .ok_or_else(|| DescriptorError::UnknownType {
                name: name.to_string(),
            })
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}
