//! graphreel turns a typed knowledge graph into a deterministic, timed sequence of
//! render operations.
//!
//! # Pipeline overview
//!
//! 1. **Load**: `GraphDescription -> Graph` (the only fatal check: duplicate entity ids)
//! 2. **Layout**: `Graph -> Placement` (single centred row, insertion order) and,
//!    for the History variant, `Graph -> [TimelineMark]`
//! 3. **Sequence**: `Graph + ReelConfig -> Reel` via the [`Sequencer`] phases
//!    (intro, legend, entities, relationships, variant content, rescale, conclusion)
//!
//! A [`Reel`] declares every visual object once (shape, position, colour) and lists
//! [`RenderOp`]s with a global `order`, a `batch`, a `start` time and a `duration`.
//! Pixels, fonts and encoding belong to whatever backend consumes the reel.
//!
//! Design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic**: the same graph and config always produce an identical reel
//!   (see [`fingerprint_reel`]).
//! - **No IO in the core**: only the description/config loaders touch the filesystem.
//!
//! See [`crate::guide`] for a walkthrough.
#![forbid(unsafe_code)]

mod config;
mod foundation;
mod graph;
mod layout;
mod sequence;
mod variant;

/// Standalone walkthrough of graphreel's concepts.
pub mod guide;

pub use config::{
    LayoutConfig, MAX_TIMELINE_TICKS, ReelConfig, Theme, TimelineConfig, Timing,
};
pub use foundation::core::{Point, Rgba8, SceneFrame, Vec2};
pub use foundation::error::{ReelError, ReelResult};
pub use graph::description::GraphDescription;
pub use graph::dsl::GraphBuilder;
pub use graph::model::{Entity, EntityType, Graph, Relationship, Variant};
pub use graph::palette::{DEFAULT_COLOR, color_for};
pub use layout::solver::{Placement, ResolvedEdge, layout_entities, resolve_edges};
pub use layout::timeline::{TimelineAxis, TimelineMark, format_axis_value, project_entities};
pub use sequence::fingerprint::{ReelFingerprint, fingerprint_reel};
pub use sequence::ops::{
    OpEffect, OpKind, Phase, Reel, RenderOp, Shape, VisualId, VisualObject,
};
pub use sequence::sequencer::{Sequencer, sequence_graph};
pub use sequence::stage::{Batch, Stage};
pub use variant::{
    GenericRenderer, HierarchyRenderer, HistoryRenderer, PomdpRenderer, VariantRenderer,
    renderer_for,
};
