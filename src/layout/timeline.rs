use crate::{
    config::{MAX_TIMELINE_TICKS, TimelineConfig},
    foundation::core::Point,
    foundation::error::ReelResult,
    graph::model::Graph,
};

/// Horizontal numeric axis with fixed bounds, centred on `origin`.
#[derive(Clone, Debug, PartialEq)]
pub struct TimelineAxis {
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub length: f64,
    pub origin: Point,
}

impl TimelineAxis {
    pub fn new(cfg: &TimelineConfig, origin: Point) -> ReelResult<Self> {
        cfg.validate()?;
        Ok(Self {
            min: cfg.min,
            max: cfg.max,
            step: cfg.step,
            length: cfg.length,
            origin,
        })
    }

    pub fn start(&self) -> Point {
        Point::new(self.origin.x - self.length * 0.5, self.origin.y)
    }

    pub fn end(&self) -> Point {
        Point::new(self.origin.x + self.length * 0.5, self.origin.y)
    }

    /// Maps a value onto the axis; values outside `[min, max]` have no position.
    pub fn project(&self, value: f64) -> Option<Point> {
        if !value.is_finite() || value < self.min || value > self.max {
            return None;
        }
        let t = (value - self.min) / (self.max - self.min);
        let x = self.start().x + t * self.length;
        Some(Point::new(x, self.origin.y))
    }

    /// Tick values `min, min + step, ...` up to and including `max`, at most
    /// `MAX_TIMELINE_TICKS + 1` of them.
    pub fn ticks(&self) -> Vec<f64> {
        let count = ((self.max - self.min) / self.step + 1e-9).floor() as u64;
        let count = count.min(MAX_TIMELINE_TICKS as u64);
        (0..=count)
            .map(|k| self.min + (k as f64) * self.step)
            .collect()
    }
}

/// One entity projected onto the axis.
#[derive(Clone, Debug, PartialEq)]
pub struct TimelineMark {
    pub entity_id: String,
    pub value: f64,
    pub position: Point,
}

/// Projects every entity carrying a numeric `attribute` inside the axis bounds.
/// Entities without the attribute, or outside the bounds, are left out.
pub fn project_entities(graph: &Graph, axis: &TimelineAxis, attribute: &str) -> Vec<TimelineMark> {
    let mut marks = Vec::new();
    for entity in graph.entities() {
        let Some(value) = entity.numeric_attribute(attribute) else {
            tracing::trace!(entity = %entity.id, attribute, "no numeric timeline attribute");
            continue;
        };
        let Some(position) = axis.project(value) else {
            tracing::debug!(entity = %entity.id, value, "timeline value outside axis bounds");
            continue;
        };
        marks.push(TimelineMark {
            entity_id: entity.id.clone(),
            value,
            position,
        });
    }
    marks
}

/// Axis/marker label text: integral values print without a fractional part.
pub fn format_axis_value(v: f64) -> String {
    if v.fract() == 0.0 && v.abs() < 1e15 {
        format!("{}", v as i64)
    } else {
        format!("{v}")
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/timeline.rs"]
mod tests;
