use crate::{
    config::ReelConfig,
    foundation::core::Vec2,
    foundation::error::ReelResult,
    graph::{
        model::{Graph, Variant},
        palette::color_for,
    },
    layout::timeline::{TimelineAxis, format_axis_value, project_entities},
    sequence::{
        ops::{OpKind, Shape},
        stage::{Batch, Stage},
    },
    variant::VariantRenderer,
};

const MARKER_RADIUS: f64 = 0.08;
const MARKER_FONT_SIZE: f64 = 16.0;

/// Number line along the bottom edge with one labelled marker per dated entity.
#[derive(Clone, Debug)]
pub struct HistoryRenderer {
    axis: TimelineAxis,
    attribute: String,
}

impl HistoryRenderer {
    pub fn new(config: &ReelConfig) -> ReelResult<Self> {
        let origin = config.frame.bottom(config.layout.edge_margin + 0.5);
        Ok(Self {
            axis: TimelineAxis::new(&config.timeline, origin)?,
            attribute: config.timeline.attribute.clone(),
        })
    }

    pub fn axis(&self) -> &TimelineAxis {
        &self.axis
    }
}

impl VariantRenderer for HistoryRenderer {
    fn variant(&self) -> Variant {
        Variant::History
    }

    fn render(&self, graph: &Graph, config: &ReelConfig, stage: &mut Stage) -> Vec<Batch> {
        let secs = config.timing.variant_draw;
        let axis = stage.spawn(
            "timeline/axis",
            Shape::NumberLine {
                min: self.axis.min,
                max: self.axis.max,
                step: self.axis.step,
                length: self.axis.length,
                ticks: self.axis.ticks(),
            },
            self.axis.origin,
            config.theme.text,
        );

        let mut markers = Vec::new();
        for mark in project_entities(graph, &self.axis, &self.attribute) {
            let color = graph
                .lookup(&mark.entity_id)
                .map(|e| color_for(e.entity_type))
                .unwrap_or(config.theme.text);
            markers.push(stage.spawn(
                format!("timeline/{}/marker", mark.entity_id),
                Shape::Dot {
                    radius: MARKER_RADIUS,
                },
                mark.position,
                color,
            ));
            markers.push(stage.spawn(
                format!("timeline/{}/label", mark.entity_id),
                Shape::Text {
                    content: format_axis_value(mark.value),
                    font_size: MARKER_FONT_SIZE,
                },
                mark.position + Vec2::new(0.0, config.layout.label_offset),
                config.theme.text,
            ));
        }

        vec![
            Batch::new().op(OpKind::Draw, [axis], secs),
            Batch::new().op(OpKind::Draw, markers, secs),
        ]
    }
}
