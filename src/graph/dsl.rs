use crate::{
    foundation::error::ReelResult,
    graph::model::{Entity, EntityType, Graph, Relationship, Variant},
};

/// Fluent in-memory alternative to [`GraphDescription`](crate::GraphDescription).
#[derive(Debug, Default)]
pub struct GraphBuilder {
    name: Option<String>,
    variant: Variant,
    entities: Vec<Entity>,
    relationships: Vec<Relationship>,
}

impl GraphBuilder {
    pub fn new(variant: Variant) -> Self {
        Self {
            variant,
            ..Self::default()
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn entity(mut self, entity: Entity) -> Self {
        self.entities.push(entity);
        self
    }

    /// Shorthand for an entity carrying a numeric `year` attribute.
    pub fn dated(
        self,
        id: impl Into<String>,
        entity_type: EntityType,
        name: impl Into<String>,
        year: i64,
    ) -> Self {
        self.entity(Entity::new(id, entity_type, name).with_attribute("year", year.into()))
    }

    pub fn relationship(mut self, relationship: Relationship) -> Self {
        self.relationships.push(relationship);
        self
    }

    pub fn link(
        self,
        id: impl Into<String>,
        source: impl Into<String>,
        target: impl Into<String>,
        relation_type: impl Into<String>,
    ) -> Self {
        self.relationship(Relationship::new(id, source, target, relation_type))
    }

    pub fn build(self) -> ReelResult<Graph> {
        let graph = Graph::new(self.entities, self.relationships, self.variant)?;
        Ok(match self.name {
            Some(name) => graph.with_name(name),
            None => graph,
        })
    }
}
