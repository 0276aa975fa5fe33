use crate::foundation::core::{Point, Rgba8, Vec2};

/// Abstract handle naming a declared [`VisualObject`].
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct VisualId(pub u32);

/// Geometry of a visual object, in scene units.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum Shape {
    Dot {
        radius: f64,
    },
    Text {
        content: String,
        font_size: f64,
    },
    /// Endpoints are absolute; the object position is the midpoint.
    Arrow {
        start: Point,
        end: Point,
    },
    Line {
        start: Point,
        end: Point,
    },
    Circle {
        radius: f64,
    },
    Rectangle {
        width: f64,
        height: f64,
    },
    NumberLine {
        min: f64,
        max: f64,
        step: f64,
        length: f64,
        ticks: Vec<f64>,
    },
}

/// A visual object the backend must be able to realize. Declared once; ops refer
/// to it by id.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct VisualObject {
    pub id: VisualId,
    pub key: String, // stable, human-readable
    #[serde(flatten)]
    pub shape: Shape,
    pub position: Point,
    pub color: Rgba8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum OpKind {
    Appear,
    Draw,
    Write,
    Transform,
    FadeOut,
    Wait,
}

impl OpKind {
    /// Kinds after which the targets are on stage.
    pub fn reveals(self) -> bool {
        matches!(self, Self::Appear | Self::Draw | Self::Write)
    }
}

/// Extra motion attached to an op.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OpEffect {
    /// Slide in from `-offset` (used with `Appear`).
    Shift(Vec2),
    /// Uniform scale about each target's own centre.
    Scale(f64),
    /// Scale the targets as one group and move the group centre to `anchor`.
    Dock { scale: f64, anchor: Point },
}

/// Sequencer states, in emission order.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub enum Phase {
    Intro,
    Legend,
    EntityReveal,
    RelationshipReveal,
    VariantContent,
    Rescale,
    Conclusion,
}

impl Phase {
    pub const ORDER: [Self; 7] = [
        Self::Intro,
        Self::Legend,
        Self::EntityReveal,
        Self::RelationshipReveal,
        Self::VariantContent,
        Self::Rescale,
        Self::Conclusion,
    ];

    pub fn next(self) -> Option<Self> {
        match self {
            Self::Intro => Some(Self::Legend),
            Self::Legend => Some(Self::EntityReveal),
            Self::EntityReveal => Some(Self::RelationshipReveal),
            Self::RelationshipReveal => Some(Self::VariantContent),
            Self::VariantContent => Some(Self::Rescale),
            Self::Rescale => Some(Self::Conclusion),
            Self::Conclusion => None,
        }
    }
}

/// One timed instruction. Ops sharing a `batch` start together at `start`.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RenderOp {
    pub order: u64,
    pub batch: u32,
    pub phase: Phase,
    pub kind: OpKind,
    pub targets: Vec<VisualId>,
    pub duration: f64, // seconds
    pub start: f64,    // seconds since session start
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effect: Option<OpEffect>,
}

/// Complete output of one sequencing session.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Reel {
    pub background: Rgba8,
    pub objects: Vec<VisualObject>,
    pub ops: Vec<RenderOp>,
}

impl Reel {
    pub fn object(&self, id: VisualId) -> Option<&VisualObject> {
        // Ids are dense and assigned in declaration order.
        self.objects
            .get(id.0 as usize)
            .filter(|o| o.id == id)
            .or_else(|| self.objects.iter().find(|o| o.id == id))
    }

    pub fn object_by_key(&self, key: &str) -> Option<&VisualObject> {
        self.objects.iter().find(|o| o.key == key)
    }

    pub fn ops_in(&self, phase: Phase) -> impl Iterator<Item = &RenderOp> + '_ {
        self.ops.iter().filter(move |op| op.phase == phase)
    }

    /// Number of distinct batches emitted in `phase`.
    pub fn batch_count(&self, phase: Phase) -> usize {
        let mut last = None;
        let mut n = 0;
        for op in self.ops_in(phase) {
            if last != Some(op.batch) {
                n += 1;
                last = Some(op.batch);
            }
        }
        n
    }

    pub fn total_duration(&self) -> f64 {
        self.ops
            .iter()
            .map(|op| op.start + op.duration)
            .fold(0.0, f64::max)
    }
}
