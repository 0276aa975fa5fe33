use std::path::Path;

use anyhow::Context as _;

use crate::{
    foundation::{
        core::{Rgba8, SceneFrame},
        error::{ReelError, ReelResult},
    },
    graph::model::Variant,
};

/// Everything the sequencer needs besides the graph itself.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ReelConfig {
    pub frame: SceneFrame,
    pub timing: Timing,
    pub layout: LayoutConfig,
    pub timeline: TimelineConfig,
    pub theme: Theme,
    /// Overrides the title derived from the graph name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub subtitle: String,
}

/// Declared durations in seconds.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Timing {
    pub intro_write: f64,
    pub intro_hold: f64,
    pub settle: f64,
    pub legend: f64,
    pub entity_reveal: f64,
    pub relationship_reveal: f64,
    pub variant_draw: f64,
    pub rescale: f64,
    pub conclusion_fade: f64,
    pub caption_write: f64,
    pub caption_hold: f64,
    pub final_fade: f64,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            intro_write: 1.0,
            intro_hold: 1.0,
            settle: 1.0,
            legend: 1.0,
            entity_reveal: 0.5,
            relationship_reveal: 0.3,
            variant_draw: 1.0,
            rescale: 1.0,
            conclusion_fade: 1.0,
            caption_write: 1.0,
            caption_hold: 1.0,
            final_fade: 1.0,
        }
    }
}

impl Timing {
    fn entries(&self) -> [(&'static str, f64); 12] {
        [
            ("intro_write", self.intro_write),
            ("intro_hold", self.intro_hold),
            ("settle", self.settle),
            ("legend", self.legend),
            ("entity_reveal", self.entity_reveal),
            ("relationship_reveal", self.relationship_reveal),
            ("variant_draw", self.variant_draw),
            ("rescale", self.rescale),
            ("conclusion_fade", self.conclusion_fade),
            ("caption_write", self.caption_write),
            ("caption_hold", self.caption_hold),
            ("final_fade", self.final_fade),
        ]
    }

    pub fn validate(&self) -> ReelResult<()> {
        for (name, secs) in self.entries() {
            if !(secs.is_finite() && secs >= 0.0) {
                return Err(ReelError::validation(format!(
                    "timing.{name} must be finite and >= 0"
                )));
            }
        }
        Ok(())
    }
}

/// Scene-unit spacing and scaling knobs.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Centre-to-centre distance between neighbouring entities.
    pub entity_gap: f64,
    /// Offset from a marker to its label, and from an arrow midpoint to its label.
    pub label_offset: f64,
    /// Distance kept from the frame edges for docked/edge-aligned groups.
    pub edge_margin: f64,
    pub title_dock_scale: f64,
    pub rescale_factor: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            entity_gap: 2.0,
            label_offset: 0.35,
            edge_margin: 0.5,
            title_dock_scale: 0.6,
            rescale_factor: 0.8,
        }
    }
}

impl LayoutConfig {
    pub fn validate(&self) -> ReelResult<()> {
        let positive = [
            ("entity_gap", self.entity_gap),
            ("title_dock_scale", self.title_dock_scale),
            ("rescale_factor", self.rescale_factor),
        ];
        for (name, v) in positive {
            if !(v.is_finite() && v > 0.0) {
                return Err(ReelError::validation(format!(
                    "layout.{name} must be finite and > 0"
                )));
            }
        }
        if !(self.label_offset.is_finite() && self.edge_margin.is_finite()) {
            return Err(ReelError::validation(
                "layout.label_offset/edge_margin must be finite",
            ));
        }
        Ok(())
    }
}

/// Upper bound on `(max - min) / step` for a timeline axis.
pub const MAX_TIMELINE_TICKS: usize = 10_000;

/// Fixed numeric axis used by the History variant.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct TimelineConfig {
    pub min: f64,
    pub max: f64,
    pub step: f64,
    /// Axis length in scene units.
    pub length: f64,
    /// Entity attribute projected onto the axis.
    pub attribute: String,
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self {
            min: 1700.0,
            max: 2024.0,
            step: 50.0,
            length: 10.0,
            attribute: "year".to_string(),
        }
    }
}

impl TimelineConfig {
    pub fn validate(&self) -> ReelResult<()> {
        if !(self.min.is_finite() && self.max.is_finite()) || self.max <= self.min {
            return Err(ReelError::validation(
                "timeline.min/max must be finite with max > min",
            ));
        }
        if !(self.step.is_finite() && self.step > 0.0) {
            return Err(ReelError::validation("timeline.step must be finite and > 0"));
        }
        if (self.max - self.min) / self.step > MAX_TIMELINE_TICKS as f64 {
            return Err(ReelError::validation(format!(
                "timeline.step too small: more than {MAX_TIMELINE_TICKS} ticks"
            )));
        }
        if !(self.length.is_finite() && self.length > 0.0) {
            return Err(ReelError::validation(
                "timeline.length must be finite and > 0",
            ));
        }
        if self.attribute.trim().is_empty() {
            return Err(ReelError::validation("timeline.attribute must be non-empty"));
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Theme {
    pub background: Rgba8,
    pub text: Rgba8,
    pub arrow: Rgba8,
    pub diagram: Rgba8,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: Rgba8::BLACK,
            text: Rgba8::WHITE,
            arrow: Rgba8::WHITE,
            diagram: Rgba8::opaque(0x58, 0xC4, 0xDD),
        }
    }
}

impl Default for ReelConfig {
    fn default() -> Self {
        Self {
            frame: SceneFrame::default(),
            timing: Timing::default(),
            layout: LayoutConfig::default(),
            timeline: TimelineConfig::default(),
            theme: Theme::default(),
            title: None,
            subtitle: "System Visualization".to_string(),
        }
    }
}

impl ReelConfig {
    pub fn from_json_str(s: &str) -> ReelResult<Self> {
        let cfg: Self = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_path(path: impl AsRef<Path>) -> ReelResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read config '{}'", path.display()))?;
        Self::from_json_str(&text)
    }

    /// Checks every section, including the timeline.
    pub fn validate(&self) -> ReelResult<()> {
        self.validate_for(Variant::History)
    }

    /// Checks the sections `variant` reads. Only History uses the timeline.
    pub fn validate_for(&self, variant: Variant) -> ReelResult<()> {
        self.frame.validate()?;
        self.timing.validate()?;
        self.layout.validate()?;
        if variant == Variant::History {
            self.timeline.validate()?;
        }
        Ok(())
    }

    /// Title shown in the intro and kept docked until the end.
    pub fn title_for(&self, graph_name: Option<&str>) -> String {
        if let Some(title) = &self.title {
            return title.clone();
        }
        match graph_name {
            Some(name) => format!("{name} Knowledge Graph"),
            None => "Knowledge Graph".to_string(),
        }
    }

    pub fn caption_for(&self, graph_name: Option<&str>) -> String {
        format!("{} Visualization", self.title_for(graph_name))
    }
}

#[cfg(test)]
#[path = "../tests/unit/config/config.rs"]
mod tests;
