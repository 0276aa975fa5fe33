use std::path::Path;

use anyhow::Context as _;

use crate::{
    foundation::error::{ReelError, ReelResult},
    graph::model::{Entity, Graph, Relationship, Variant},
};

/// Serialized form of a graph as produced by external loaders.
///
/// ```json
/// {
///   "name": "USAHistory",
///   "variant": "History",
///   "entities": [{ "id": "e1", "type": "Event", "name": "A", "attributes": { "year": 1776 } }],
///   "relationships": [{ "id": "r1", "source": "e1", "target": "e2", "type": "PRECEDES" }]
/// }
/// ```
#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
pub struct GraphDescription {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub variant: Variant,
    #[serde(default)]
    pub entities: Vec<Entity>,
    #[serde(default)]
    pub relationships: Vec<Relationship>,
}

impl GraphDescription {
    pub fn from_json_str(s: &str) -> ReelResult<Self> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> ReelResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read graph description '{}'", path.display()))?;
        Self::from_json_str(&text).map_err(|e| match e {
            ReelError::Serde(msg) => ReelError::serde(format!("{}: {msg}", path.display())),
            other => other,
        })
    }

    pub fn into_graph(self) -> ReelResult<Graph> {
        let graph = Graph::new(self.entities, self.relationships, self.variant)?;
        Ok(match self.name {
            Some(name) => graph.with_name(name),
            None => graph,
        })
    }
}

impl TryFrom<GraphDescription> for Graph {
    type Error = ReelError;

    fn try_from(value: GraphDescription) -> Result<Self, Self::Error> {
        value.into_graph()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/graph/description.rs"]
mod tests;
