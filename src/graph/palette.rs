use crate::{foundation::core::Rgba8, graph::model::EntityType};

pub const EVENT_COLOR: Rgba8 = Rgba8::opaque(0xFF, 0xFF, 0x00);
pub const SYSTEM_COLOR: Rgba8 = Rgba8::opaque(0xFC, 0x62, 0x55);
pub const COMPONENT_COLOR: Rgba8 = Rgba8::opaque(0x83, 0xC1, 0x67);
pub const SPACE_COLOR: Rgba8 = Rgba8::opaque(0x9A, 0x72, 0xAC);
/// Fallback for [`EntityType::Other`].
pub const DEFAULT_COLOR: Rgba8 = Rgba8::opaque(0x58, 0xC4, 0xDD);

/// Fixed entity-type colouring, shared by entity markers and the legend.
pub fn color_for(entity_type: EntityType) -> Rgba8 {
    match entity_type {
        EntityType::Event => EVENT_COLOR,
        EntityType::System => SYSTEM_COLOR,
        EntityType::Component => COMPONENT_COLOR,
        EntityType::Space => SPACE_COLOR,
        EntityType::Other => DEFAULT_COLOR,
    }
}
