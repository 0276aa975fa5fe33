//! # graphreel guide
//!
//! ## Core concepts
//!
//! - [`Graph`](crate::Graph): entities + relationships + a [`Variant`](crate::Variant).
//!   Immutable once built; entity ids are unique.
//! - [`Placement`](crate::Placement): entity id to scene point, derived from entity
//!   count and order only.
//! - [`Reel`](crate::Reel): declared [`VisualObject`](crate::VisualObject)s plus an
//!   ordered list of [`RenderOp`](crate::RenderOp)s.
//! - [`Phase`](crate::Phase): one step of the forward-only sequencer.
//!
//! ## Scene units
//!
//! Positions use scene units with the origin at the centre of the frame and +y up.
//! The default [`SceneFrame`](crate::SceneFrame) is 14.222 x 8.0.
//!
//! ## Phases
//!
//! | phase | batches |
//! |---|---|
//! | `Intro` | write title + shifted subtitle, hold, dock title group to the top edge |
//! | `Legend` | write the entity-type legend |
//! | `EntityReveal` | one batch per entity (marker + label) |
//! | `RelationshipReveal` | one batch per relationship whose endpoints both exist |
//! | `VariantContent` | delegated to the [`VariantRenderer`](crate::VariantRenderer) |
//! | `Rescale` | scale everything revealed by entities/relationships |
//! | `Conclusion` | fade all but the title, write caption, hold, fade caption + title |
//!
//! A phase with nothing to show emits no batch and the sequencer moves on.
//!
//! ## Tolerated input
//!
//! - relationships pointing at unknown entities are dropped
//! - entities without the timeline attribute get no timeline marker
//! - unknown entity types colour as the default; unknown variants render as `Generic`
//!
//! Only a duplicate entity id is an error ([`ReelError::MalformedGraph`](crate::ReelError::MalformedGraph)).
//!
//! ## Example
//!
//! ```
//! use graphreel::{EntityType, GraphBuilder, Phase, ReelConfig, Variant, sequence_graph};
//!
//! let graph = GraphBuilder::new(Variant::History)
//!     .name("USAHistory")
//!     .dated("e1", EntityType::Event, "American Revolution", 1776)
//!     .dated("e2", EntityType::Event, "Civil War", 1861)
//!     .link("r1", "e1", "e2", "PRECEDES")
//!     .build()?;
//!
//! let reel = sequence_graph(&graph, &ReelConfig::default())?;
//! assert_eq!(reel.batch_count(Phase::EntityReveal), 2);
//! assert_eq!(reel.batch_count(Phase::RelationshipReveal), 1);
//! # Ok::<(), graphreel::ReelError>(())
//! ```
