use crate::{
    config::ReelConfig,
    foundation::core::{Point, Rgba8, Vec2},
    graph::model::{Graph, Variant},
    sequence::{
        ops::{OpKind, Shape},
        stage::{Batch, Stage},
    },
    variant::VariantRenderer,
};

const CYCLE_RADIUS: f64 = 2.0;
const ARROW_LENGTH: f64 = 2.5;
const FONT_SIZE: f64 = 20.0;
const OBSERVATION_COLOR: Rgba8 = Rgba8::opaque(0x83, 0xC1, 0x67);
const ACTION_COLOR: Rgba8 = Rgba8::opaque(0xFC, 0x62, 0x55);

/// Schematic belief-update diagram: a state-transition cycle, an inbound
/// "Observation" arrow and an outbound "Action" arrow. Ignores graph content.
#[derive(Clone, Copy, Debug, Default)]
pub struct PomdpRenderer;

impl VariantRenderer for PomdpRenderer {
    fn variant(&self) -> Variant {
        Variant::Pomdp
    }

    fn render(&self, _graph: &Graph, config: &ReelConfig, stage: &mut Stage) -> Vec<Batch> {
        let secs = config.timing.variant_draw;
        let text = config.theme.text;
        let lift = Vec2::new(0.0, config.layout.label_offset);

        let cycle = stage.spawn(
            "pomdp/cycle",
            Shape::Circle {
                radius: CYCLE_RADIUS,
            },
            Point::ORIGIN,
            config.theme.diagram,
        );
        let cycle_label = stage.spawn(
            "pomdp/cycle/label",
            label("State Transition"),
            Point::ORIGIN,
            text,
        );

        // Enters the cycle from the left.
        let obs_start = Point::new(-CYCLE_RADIUS - ARROW_LENGTH, 0.0);
        let obs_end = Point::new(-CYCLE_RADIUS, 0.0);
        let obs_arrow = stage.spawn(
            "pomdp/observation",
            Shape::Arrow {
                start: obs_start,
                end: obs_end,
            },
            obs_start.midpoint(obs_end),
            OBSERVATION_COLOR,
        );
        let obs_label = stage.spawn(
            "pomdp/observation/label",
            label("Observation"),
            obs_start.midpoint(obs_end) + lift,
            text,
        );

        // Leaves the cycle to the right.
        let act_start = Point::new(CYCLE_RADIUS, 0.0);
        let act_end = Point::new(CYCLE_RADIUS + ARROW_LENGTH, 0.0);
        let act_arrow = stage.spawn(
            "pomdp/action",
            Shape::Arrow {
                start: act_start,
                end: act_end,
            },
            act_start.midpoint(act_end),
            ACTION_COLOR,
        );
        let act_label = stage.spawn(
            "pomdp/action/label",
            label("Action"),
            act_start.midpoint(act_end) + lift,
            text,
        );

        vec![
            Batch::new()
                .op(OpKind::Draw, [cycle], secs)
                .op(OpKind::Write, [cycle_label], secs)
                .op(OpKind::Draw, [obs_arrow], secs)
                .op(OpKind::Write, [obs_label], secs)
                .op(OpKind::Draw, [act_arrow], secs)
                .op(OpKind::Write, [act_label], secs),
        ]
    }
}

fn label(content: &str) -> Shape {
    Shape::Text {
        content: content.to_string(),
        font_size: FONT_SIZE,
    }
}
