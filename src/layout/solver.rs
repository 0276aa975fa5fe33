use std::collections::BTreeMap;

use crate::{
    config::LayoutConfig,
    foundation::core::Point,
    graph::model::{Graph, Relationship},
};

/// Entity id to scene position, in graph insertion order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Placement {
    slots: Vec<(String, Point)>,
    index: BTreeMap<String, usize>,
}

impl Placement {
    pub fn get(&self, entity_id: &str) -> Option<Point> {
        self.index.get(entity_id).map(|&i| self.slots[i].1)
    }

    pub fn contains(&self, entity_id: &str) -> bool {
        self.index.contains_key(entity_id)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Point)> + '_ {
        self.slots.iter().map(|(id, p)| (id.as_str(), *p))
    }
}

/// Lays entities out left to right on a single row centred on the origin.
///
/// Placement depends only on entity count and order, never on relationships.
pub fn layout_entities(graph: &Graph, layout: &LayoutConfig) -> Placement {
    let n = graph.entities().len();
    let span = (n.saturating_sub(1) as f64) * layout.entity_gap;
    let x0 = -span * 0.5;

    let mut slots = Vec::with_capacity(n);
    let mut index = BTreeMap::new();
    for (i, entity) in graph.entities().iter().enumerate() {
        let x = x0 + (i as f64) * layout.entity_gap;
        index.insert(entity.id.clone(), i);
        slots.push((entity.id.clone(), Point::new(x, 0.0)));
    }
    Placement { slots, index }
}

/// A relationship whose endpoints were both placed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResolvedEdge<'g> {
    pub relationship: &'g Relationship,
    pub start: Point,
    pub end: Point,
}

impl ResolvedEdge<'_> {
    pub fn midpoint(&self) -> Point {
        self.start.midpoint(self.end)
    }
}

/// Derives arrow endpoints from the placement. Relationships with an endpoint
/// missing from `placement` are dropped.
pub fn resolve_edges<'g>(graph: &'g Graph, placement: &Placement) -> Vec<ResolvedEdge<'g>> {
    graph
        .relationships()
        .iter()
        .filter_map(|rel| {
            match (placement.get(&rel.source), placement.get(&rel.target)) {
                (Some(start), Some(end)) => Some(ResolvedEdge {
                    relationship: rel,
                    start,
                    end,
                }),
                _ => {
                    tracing::debug!(
                        relationship = %rel.id,
                        source = %rel.source,
                        target = %rel.target,
                        "dropping dangling relationship"
                    );
                    None
                }
            }
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/layout/solver.rs"]
mod tests;
