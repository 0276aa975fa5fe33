use super::*;
use crate::{
    EntityType, GraphBuilder, OpKind, Phase, Rgba8, Shape, Stage, Entity,
};

fn render(variant: Variant, graph: &Graph) -> (Vec<Batch>, crate::Reel) {
    let cfg = ReelConfig::default();
    let renderer = renderer_for(variant, &cfg).unwrap();
    assert_eq!(renderer.variant(), variant);
    let mut stage = Stage::new(Rgba8::BLACK);
    let batches = renderer.render(graph, &cfg, &mut stage);
    let kept = batches.clone();
    for b in batches {
        stage.play(Phase::VariantContent, b);
    }
    (kept, stage.finish())
}

fn graph(variant: Variant) -> Graph {
    GraphBuilder::new(variant)
        .dated("e1", EntityType::Event, "A", 1776)
        .entity(Entity::new("e2", EntityType::System, "Undated"))
        .dated("e3", EntityType::Event, "Future", 3000)
        .build()
        .unwrap()
}

#[test]
fn generic_renders_nothing() {
    let (batches, reel) = render(Variant::Generic, &graph(Variant::Generic));
    assert!(batches.is_empty());
    assert!(reel.objects.is_empty());
}

#[test]
fn history_draws_axis_then_in_range_markers() {
    let (batches, reel) = render(Variant::History, &graph(Variant::History));
    assert_eq!(batches.len(), 2);
    assert!(matches!(
        reel.object_by_key("timeline/axis").unwrap().shape,
        Shape::NumberLine { min, max, .. } if min == 1700.0 && max == 2024.0
    ));
    assert!(reel.object_by_key("timeline/e1/marker").is_some());
    assert!(reel.object_by_key("timeline/e2/marker").is_none());
    assert!(reel.object_by_key("timeline/e3/marker").is_none());
    assert_eq!(reel.ops.len(), 2);
}

#[test]
fn history_without_dated_entities_only_draws_axis() {
    let g = GraphBuilder::new(Variant::History)
        .entity(Entity::new("x", EntityType::Space, "X"))
        .build()
        .unwrap();
    let (_, reel) = render(Variant::History, &g);
    assert_eq!(reel.ops.len(), 1);
    assert_eq!(reel.ops[0].kind, OpKind::Draw);
}

#[test]
fn pomdp_is_fixed_and_ignores_graph() {
    let (_, a) = render(Variant::Pomdp, &graph(Variant::Pomdp));
    let empty = Graph::new(vec![], vec![], Variant::Pomdp).unwrap();
    let (_, b) = render(Variant::Pomdp, &empty);
    assert_eq!(a, b);
    assert_eq!(a.ops.len(), 6);
    assert_eq!(a.batch_count(Phase::VariantContent), 1);

    let cycle = a.object_by_key("pomdp/cycle").unwrap();
    let Shape::Circle { radius } = cycle.shape else {
        panic!("cycle must be a circle");
    };
    let Shape::Arrow { end, .. } = a.object_by_key("pomdp/observation").unwrap().shape else {
        panic!("observation must be an arrow");
    };
    assert!((end.distance(cycle.position) - radius).abs() < 1e-9);
    let Shape::Arrow { start, .. } = a.object_by_key("pomdp/action").unwrap().shape else {
        panic!("action must be an arrow");
    };
    assert!((start.distance(cycle.position) - radius).abs() < 1e-9);

    let labels: Vec<&str> = a
        .objects
        .iter()
        .filter_map(|o| match &o.shape {
            Shape::Text { content, .. } => Some(content.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(labels, ["State Transition", "Observation", "Action"]);
}

#[test]
fn hierarchy_stacks_levels_with_connectors() {
    let (_, reel) = render(Variant::Car, &graph(Variant::Car));
    let boxes: Vec<_> = reel
        .objects
        .iter()
        .filter(|o| matches!(o.shape, Shape::Rectangle { .. }))
        .collect();
    assert_eq!(boxes.len(), 3);
    assert!(boxes.windows(2).all(|w| w[0].position.y > w[1].position.y));

    let connectors = reel
        .objects
        .iter()
        .filter(|o| matches!(o.shape, Shape::Line { .. }))
        .count();
    assert_eq!(connectors, 2);

    let Shape::Line { start, end } = reel.object_by_key("hierarchy/0/connector").unwrap().shape
    else {
        panic!("connector must be a line");
    };
    assert_eq!(start.y, boxes[0].position.y - 0.5);
    assert_eq!(end.y, boxes[1].position.y + 0.5);

    assert_eq!(
        HierarchyRenderer::default().levels(),
        ["System", "Subsystem", "Component"]
    );
}
