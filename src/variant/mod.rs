//! Variant-specific supplementary diagrams.
//!
//! Exactly one [`VariantRenderer`] runs per session, chosen from
//! [`Graph::variant`]. Renderers declare their objects on the [`Stage`] and
//! return the batches to play; they never emit ops themselves, so the sequencer
//! owns phase labelling and ordering.

mod hierarchy;
mod history;
mod pomdp;

pub use hierarchy::HierarchyRenderer;
pub use history::HistoryRenderer;
pub use pomdp::PomdpRenderer;

use crate::{
    config::ReelConfig,
    foundation::error::ReelResult,
    graph::model::{Graph, Variant},
    sequence::stage::{Batch, Stage},
};

pub trait VariantRenderer {
    fn variant(&self) -> Variant;

    /// Declares the diagram's objects on `stage` and returns its batches in play
    /// order. An empty vector means the variant adds nothing.
    fn render(&self, graph: &Graph, config: &ReelConfig, stage: &mut Stage) -> Vec<Batch>;
}

/// Base graph only.
#[derive(Clone, Copy, Debug, Default)]
pub struct GenericRenderer;

impl VariantRenderer for GenericRenderer {
    fn variant(&self) -> Variant {
        Variant::Generic
    }

    fn render(&self, _graph: &Graph, _config: &ReelConfig, _stage: &mut Stage) -> Vec<Batch> {
        Vec::new()
    }
}

pub fn renderer_for(variant: Variant, config: &ReelConfig) -> ReelResult<Box<dyn VariantRenderer>> {
    Ok(match variant {
        Variant::History => Box::new(HistoryRenderer::new(config)?),
        Variant::Pomdp => Box::new(PomdpRenderer),
        Variant::Car => Box::new(HierarchyRenderer::default()),
        Variant::Generic => Box::new(GenericRenderer),
    })
}

#[cfg(test)]
#[path = "../../tests/unit/variant/renderers.rs"]
mod tests;
