use crate::{
    config::ReelConfig,
    foundation::core::Point,
    graph::model::{Graph, Variant},
    sequence::{
        ops::{OpKind, Shape},
        stage::{Batch, Stage},
    },
    variant::VariantRenderer,
};

const BOX_WIDTH: f64 = 3.0;
const BOX_HEIGHT: f64 = 1.0;
const LEVEL_SPACING: f64 = 1.5;
const FONT_SIZE: f64 = 20.0;

/// Vertical stack of hierarchy levels joined by connectors.
#[derive(Clone, Debug)]
pub struct HierarchyRenderer {
    levels: Vec<String>,
}

impl Default for HierarchyRenderer {
    fn default() -> Self {
        Self {
            levels: ["System", "Subsystem", "Component"]
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }
}

impl HierarchyRenderer {
    pub fn levels(&self) -> &[String] {
        &self.levels
    }
}

impl VariantRenderer for HierarchyRenderer {
    fn variant(&self) -> Variant {
        Variant::Car
    }

    fn render(&self, _graph: &Graph, config: &ReelConfig, stage: &mut Stage) -> Vec<Batch> {
        let secs = config.timing.variant_draw;
        let mut frames = Vec::with_capacity(self.levels.len() * 2);
        let mut labels = Vec::with_capacity(self.levels.len());
        let mut centres = Vec::with_capacity(self.levels.len());

        for (i, level) in self.levels.iter().enumerate() {
            let centre = Point::new(0.0, -(i as f64) * LEVEL_SPACING);
            centres.push(centre);
            frames.push(stage.spawn(
                format!("hierarchy/{i}/box"),
                Shape::Rectangle {
                    width: BOX_WIDTH,
                    height: BOX_HEIGHT,
                },
                centre,
                config.theme.diagram,
            ));
            labels.push(stage.spawn(
                format!("hierarchy/{i}/label"),
                Shape::Text {
                    content: level.clone(),
                    font_size: FONT_SIZE,
                },
                centre,
                config.theme.text,
            ));
        }

        for (i, pair) in centres.windows(2).enumerate() {
            let start = Point::new(pair[0].x, pair[0].y - BOX_HEIGHT * 0.5);
            let end = Point::new(pair[1].x, pair[1].y + BOX_HEIGHT * 0.5);
            frames.push(stage.spawn(
                format!("hierarchy/{i}/connector"),
                Shape::Line { start, end },
                start.midpoint(end),
                config.theme.arrow,
            ));
        }

        vec![
            Batch::new()
                .op(OpKind::Draw, frames, secs)
                .op(OpKind::Write, labels, secs),
        ]
    }
}
