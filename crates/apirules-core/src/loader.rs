//! JSON type model decoding.
//!
//! A model document lists every declaration under a document-local `id`.
//! Members and element slots refer to other declarations by that id, so
//! forward and cyclic references are fine. Decoding runs in two passes:
//! first every id gets a handle, then references are resolved.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::graph::TypeGraph;
use crate::types::{Kind, Member, TypeDecl, TypeId, TypeName};

#[derive(Debug, Deserialize)]
pub struct ModelDocument {
    pub types: Vec<TypeEntry>,
}

#[derive(Debug, Deserialize)]
pub struct TypeEntry {
    pub id: String,
    pub kind: Kind,
    #[serde(default)]
    pub package: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub members: Vec<MemberEntry>,
    #[serde(default)]
    pub elem: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct MemberEntry {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
    #[serde(default)]
    pub embedded: bool,
    #[serde(default)]
    pub annotations: Vec<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid model JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("duplicate type id '{0}'")]
    DuplicateType(String),

    #[error("type '{from}' references unknown type '{target}'")]
    UnknownReference { from: String, target: String },
}

/// Decode a model document from a JSON string.
pub fn load_str(content: &str) -> Result<TypeGraph, LoadError> {
    let doc: ModelDocument = serde_json::from_str(content)?;
    build_graph(doc)
}

/// Read and decode a model file.
pub fn load_file(path: &Path) -> Result<TypeGraph, LoadError> {
    let content = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    load_str(&content)
}

pub fn build_graph(doc: ModelDocument) -> Result<TypeGraph, LoadError> {
    // Handles are positional, so entry `i` becomes `TypeId(i)` once added.
    let mut ids: HashMap<String, TypeId> = HashMap::with_capacity(doc.types.len());
    for (index, entry) in doc.types.iter().enumerate() {
        if ids.insert(entry.id.clone(), TypeId(index)).is_some() {
            return Err(LoadError::DuplicateType(entry.id.clone()));
        }
    }

    let lookup = |from: &str, target: &str| -> Result<TypeId, LoadError> {
        ids.get(target)
            .copied()
            .ok_or_else(|| LoadError::UnknownReference {
                from: from.to_string(),
                target: target.to_string(),
            })
    };

    let mut graph = TypeGraph::new();
    for entry in doc.types {
        let members = entry
            .members
            .into_iter()
            .map(|m| {
                Ok::<_, LoadError>(Member {
                    ty: lookup(&entry.id, &m.ty)?,
                    name: m.name,
                    embedded: m.embedded,
                    annotation_lines: m.annotations,
                })
            })
            .collect::<Result<Vec<_>, LoadError>>()?;
        let elem = entry
            .elem
            .as_deref()
            .map(|e| lookup(&entry.id, e))
            .transpose()?;
        graph.add(TypeDecl {
            kind: entry.kind,
            name: entry.name.map(|n| TypeName::new(entry.package, n)),
            members,
            elem,
        });
    }

    Ok(graph)
}
