use std::collections::BTreeMap;

use crate::foundation::error::{ReelError, ReelResult};

/// Semantic type of an entity. Unknown tags decode as [`EntityType::Other`].
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub enum EntityType {
    Event,
    System,
    Component,
    Space,
    #[serde(other)]
    Other,
}

impl EntityType {
    /// Legend order.
    pub const ALL: [Self; 5] = [
        Self::Event,
        Self::System,
        Self::Component,
        Self::Space,
        Self::Other,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Event => "Event",
            Self::System => "System",
            Self::Component => "Component",
            Self::Space => "Space",
            Self::Other => "Other",
        }
    }
}

/// Domain variant selecting the supplementary diagram. Unknown tags decode as
/// [`Variant::Generic`].
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub enum Variant {
    #[serde(alias = "history", alias = "USAHistory")]
    History,
    #[serde(rename = "POMDP", alias = "Pomdp", alias = "pomdp")]
    Pomdp,
    #[serde(alias = "car")]
    Car,
    #[default]
    #[serde(other)]
    Generic,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Entity {
    pub id: String,
    #[serde(rename = "type")]
    pub entity_type: EntityType,
    pub name: String,
    #[serde(default)]
    pub attributes: BTreeMap<String, serde_json::Value>, // open mapping
}

impl Entity {
    pub fn new(id: impl Into<String>, entity_type: EntityType, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            entity_type,
            name: name.into(),
            attributes: BTreeMap::new(),
        }
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.attributes.insert(key.into(), value);
        self
    }

    /// Numeric view of an attribute. Numbers and numeric strings qualify; anything
    /// else (including non-finite values) is treated as absent.
    pub fn numeric_attribute(&self, key: &str) -> Option<f64> {
        let v = match self.attributes.get(key)? {
            serde_json::Value::Number(n) => n.as_f64()?,
            serde_json::Value::String(s) => s.trim().parse::<f64>().ok()?,
            _ => return None,
        };
        v.is_finite().then_some(v)
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Relationship {
    pub id: String,
    pub source: String,
    pub target: String,
    #[serde(rename = "type")]
    pub relation_type: String,
}

impl Relationship {
    pub fn new(
        id: impl Into<String>,
        source: impl Into<String>,
        target: impl Into<String>,
        relation_type: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            source: source.into(),
            target: target.into(),
            relation_type: relation_type.into(),
        }
    }
}

/// Immutable knowledge graph. Entity ids are unique; relationships may dangle.
#[derive(Clone, Debug)]
pub struct Graph {
    name: Option<String>,
    entities: Vec<Entity>,
    relationships: Vec<Relationship>,
    variant: Variant,
    index: BTreeMap<String, usize>,
}

impl Graph {
    pub fn new(
        entities: Vec<Entity>,
        relationships: Vec<Relationship>,
        variant: Variant,
    ) -> ReelResult<Self> {
        let mut index = BTreeMap::new();
        for (i, entity) in entities.iter().enumerate() {
            if index.insert(entity.id.clone(), i).is_some() {
                return Err(ReelError::malformed(format!(
                    "duplicate entity id '{}'",
                    entity.id
                )));
            }
        }

        Ok(Self {
            name: None,
            entities,
            relationships,
            variant,
            index,
        })
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        self.name = (!name.trim().is_empty()).then_some(name);
        self
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    pub fn relationships(&self) -> &[Relationship] {
        &self.relationships
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn lookup(&self, id: &str) -> Option<&Entity> {
        self.index.get(id).map(|&i| &self.entities[i])
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty() && self.relationships.is_empty()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/graph/model.rs"]
mod tests;
