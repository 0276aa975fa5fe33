use crate::{
    config::ReelConfig,
    foundation::core::{Point, Vec2},
    foundation::error::ReelResult,
    graph::{
        model::{EntityType, Graph},
        palette::color_for,
    },
    layout::solver::{Placement, layout_entities, resolve_edges},
    sequence::{
        ops::{OpEffect, OpKind, Phase, Reel, Shape, VisualId},
        stage::{Batch, Stage},
    },
    variant::{VariantRenderer, renderer_for},
};

const TITLE_FONT_SIZE: f64 = 48.0;
const SUBTITLE_FONT_SIZE: f64 = 36.0;
const LEGEND_TITLE_FONT_SIZE: f64 = 24.0;
const LEGEND_ENTRY_FONT_SIZE: f64 = 18.0;
const ENTITY_FONT_SIZE: f64 = 20.0;
const RELATIONSHIP_FONT_SIZE: f64 = 16.0;
const DOT_RADIUS: f64 = 0.08;
const LEGEND_ROW: f64 = 0.45;
const SUBTITLE_SHIFT: f64 = 0.5;

/// Bookkeeping carried across phases. Only ever grows.
#[derive(Debug, Default)]
struct Session {
    title_group: Vec<VisualId>,
    placement: Placement,
    revealed: Vec<VisualId>,
}

/// Turns one graph into one [`Reel`] by walking [`Phase::ORDER`] once.
pub struct Sequencer<'a> {
    graph: &'a Graph,
    config: &'a ReelConfig,
    renderer: Box<dyn VariantRenderer>,
}

impl<'a> Sequencer<'a> {
    /// Validates the configuration and selects the variant renderer. This is the
    /// last point at which sequencing can fail.
    pub fn new(graph: &'a Graph, config: &'a ReelConfig) -> ReelResult<Self> {
        config.validate_for(graph.variant())?;
        let renderer = renderer_for(graph.variant(), config)?;
        Ok(Self {
            graph,
            config,
            renderer,
        })
    }

    #[tracing::instrument(
        skip_all,
        fields(
            entities = self.graph.entities().len(),
            relationships = self.graph.relationships().len(),
            variant = ?self.renderer.variant(),
        )
    )]
    pub fn run(&self) -> Reel {
        let mut stage = Stage::new(self.config.theme.background);
        let mut session = Session::default();

        let mut phase = Some(Phase::Intro);
        while let Some(current) = phase {
            let before = stage.op_count();
            self.run_phase(current, &mut stage, &mut session);
            tracing::debug!(
                phase = ?current,
                ops = stage.op_count() - before,
                clock = stage.clock(),
                "phase complete"
            );
            phase = current.next();
        }

        stage.finish()
    }

    fn run_phase(&self, phase: Phase, stage: &mut Stage, session: &mut Session) {
        match phase {
            Phase::Intro => self.intro(stage, session),
            Phase::Legend => self.legend(stage),
            Phase::EntityReveal => self.entity_reveal(stage, session),
            Phase::RelationshipReveal => self.relationship_reveal(stage, session),
            Phase::VariantContent => self.variant_content(stage),
            Phase::Rescale => self.rescale(stage, session),
            Phase::Conclusion => self.conclusion(stage, session),
        }
    }

    fn intro(&self, stage: &mut Stage, session: &mut Session) {
        let t = &self.config.timing;
        let text = self.config.theme.text;
        let title = stage.spawn(
            "intro/title",
            Shape::Text {
                content: self.config.title_for(self.graph.name()),
                font_size: TITLE_FONT_SIZE,
            },
            Point::new(0.0, 0.4),
            text,
        );
        let subtitle = stage.spawn(
            "intro/subtitle",
            Shape::Text {
                content: self.config.subtitle.clone(),
                font_size: SUBTITLE_FONT_SIZE,
            },
            Point::new(0.0, -0.4),
            text,
        );
        session.title_group = vec![title, subtitle];

        stage.play(
            Phase::Intro,
            Batch::new()
                .op(OpKind::Write, [title], t.intro_write)
                .op_with(
                    OpKind::Appear,
                    [subtitle],
                    t.intro_write,
                    OpEffect::Shift(Vec2::new(0.0, -SUBTITLE_SHIFT)),
                ),
        );
        stage.play(Phase::Intro, Batch::new().wait(t.intro_hold));

        // Settled: the title group shrinks and docks to the top edge.
        let anchor = self.config.frame.top(self.config.layout.edge_margin);
        stage.play(
            Phase::Intro,
            Batch::new().op_with(
                OpKind::Transform,
                session.title_group.iter().copied(),
                t.settle,
                OpEffect::Dock {
                    scale: self.config.layout.title_dock_scale,
                    anchor,
                },
            ),
        );
    }

    fn legend(&self, stage: &mut Stage) {
        let text = self.config.theme.text;
        let left = self.config.frame.left(self.config.layout.edge_margin);
        let top = LEGEND_ROW * (EntityType::ALL.len() as f64) * 0.5;

        let mut items = vec![stage.spawn(
            "legend/title",
            Shape::Text {
                content: "Entity Types".to_string(),
                font_size: LEGEND_TITLE_FONT_SIZE,
            },
            Point::new(left.x + 1.0, top),
            text,
        )];
        for (row, entity_type) in EntityType::ALL.into_iter().enumerate() {
            let y = top - LEGEND_ROW * (row as f64 + 1.0);
            let name = entity_type.label();
            items.push(stage.spawn(
                format!("legend/{name}/swatch"),
                Shape::Dot { radius: DOT_RADIUS },
                Point::new(left.x + 0.1, y),
                color_for(entity_type),
            ));
            items.push(stage.spawn(
                format!("legend/{name}/label"),
                Shape::Text {
                    content: name.to_string(),
                    font_size: LEGEND_ENTRY_FONT_SIZE,
                },
                Point::new(left.x + 1.0, y),
                text,
            ));
        }

        stage.play(
            Phase::Legend,
            Batch::new().op(OpKind::Write, items, self.config.timing.legend),
        );
    }

    fn entity_reveal(&self, stage: &mut Stage, session: &mut Session) {
        let secs = self.config.timing.entity_reveal;
        let below = Vec2::new(0.0, -self.config.layout.label_offset);
        session.placement = layout_entities(self.graph, &self.config.layout);

        for ((id, position), entity) in session.placement.iter().zip(self.graph.entities()) {
            let marker = stage.spawn(
                format!("entity/{id}/marker"),
                Shape::Dot { radius: DOT_RADIUS },
                position,
                color_for(entity.entity_type),
            );
            let label = stage.spawn(
                format!("entity/{id}/label"),
                Shape::Text {
                    content: entity.name.clone(),
                    font_size: ENTITY_FONT_SIZE,
                },
                position + below,
                self.config.theme.text,
            );
            stage.play(
                Phase::EntityReveal,
                Batch::new()
                    .op(OpKind::Draw, [marker], secs)
                    .op(OpKind::Write, [label], secs),
            );
            session.revealed.push(marker);
            session.revealed.push(label);
        }
    }

    fn relationship_reveal(&self, stage: &mut Stage, session: &mut Session) {
        let secs = self.config.timing.relationship_reveal;
        let above = Vec2::new(0.0, self.config.layout.label_offset);
        let edges = resolve_edges(self.graph, &session.placement);

        for (i, edge) in edges.into_iter().enumerate() {
            let rel = edge.relationship;
            let arrow = stage.spawn(
                format!("relationship/{i}/{}/arrow", rel.id),
                Shape::Arrow {
                    start: edge.start,
                    end: edge.end,
                },
                edge.midpoint(),
                self.config.theme.arrow,
            );
            let label = stage.spawn(
                format!("relationship/{i}/{}/label", rel.id),
                Shape::Text {
                    content: rel.relation_type.clone(),
                    font_size: RELATIONSHIP_FONT_SIZE,
                },
                edge.midpoint() + above,
                self.config.theme.text,
            );
            stage.play(
                Phase::RelationshipReveal,
                Batch::new()
                    .op(OpKind::Draw, [arrow], secs)
                    .op(OpKind::Write, [label], secs),
            );
            session.revealed.extend([arrow, label]);
        }
    }

    fn variant_content(&self, stage: &mut Stage) {
        if self.graph.is_empty() {
            tracing::debug!("empty graph, skipping variant content");
            return;
        }
        for batch in self.renderer.render(self.graph, self.config, stage) {
            stage.play(Phase::VariantContent, batch);
        }
    }

    fn rescale(&self, stage: &mut Stage, session: &Session) {
        stage.play(
            Phase::Rescale,
            Batch::new().op_with(
                OpKind::Transform,
                session.revealed.iter().copied(),
                self.config.timing.rescale,
                OpEffect::Scale(self.config.layout.rescale_factor),
            ),
        );
    }

    fn conclusion(&self, stage: &mut Stage, session: &Session) {
        let t = &self.config.timing;
        let rest: Vec<VisualId> = stage
            .on_stage()
            .iter()
            .copied()
            .filter(|id| !session.title_group.contains(id))
            .collect();
        stage.play(
            Phase::Conclusion,
            Batch::new().op(OpKind::FadeOut, rest, t.conclusion_fade),
        );

        let caption = stage.spawn(
            "conclusion/caption",
            Shape::Text {
                content: self.config.caption_for(self.graph.name()),
                font_size: TITLE_FONT_SIZE,
            },
            Point::ORIGIN,
            self.config.theme.text,
        );
        stage.play(
            Phase::Conclusion,
            Batch::new().op(OpKind::Write, [caption], t.caption_write),
        );
        stage.play(Phase::Conclusion, Batch::new().wait(t.caption_hold));

        let mut last = vec![caption];
        last.extend(session.title_group.iter().copied());
        stage.play(
            Phase::Conclusion,
            Batch::new().op(OpKind::FadeOut, last, t.final_fade),
        );
    }
}

/// Builds the complete, deterministic render-op sequence for `graph`.
pub fn sequence_graph(graph: &Graph, config: &ReelConfig) -> ReelResult<Reel> {
    Ok(Sequencer::new(graph, config)?.run())
}

#[cfg(test)]
#[path = "../../tests/unit/sequence/sequencer.rs"]
mod tests;
