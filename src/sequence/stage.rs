use std::collections::BTreeSet;

use crate::{
    foundation::core::{Point, Rgba8},
    sequence::ops::{OpEffect, OpKind, Phase, Reel, RenderOp, Shape, VisualId, VisualObject},
};

#[derive(Clone, Debug)]
struct Step {
    kind: OpKind,
    targets: Vec<VisualId>,
    duration: f64,
    effect: Option<OpEffect>,
}

/// Ops that play simultaneously.
#[derive(Clone, Debug, Default)]
pub struct Batch {
    steps: Vec<Step>,
}

impl Batch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn op(self, kind: OpKind, targets: impl IntoIterator<Item = VisualId>, duration: f64) -> Self {
        self.push(kind, targets, duration, None)
    }

    pub fn op_with(
        self,
        kind: OpKind,
        targets: impl IntoIterator<Item = VisualId>,
        duration: f64,
        effect: OpEffect,
    ) -> Self {
        self.push(kind, targets, duration, Some(effect))
    }

    pub fn wait(self, duration: f64) -> Self {
        self.push(OpKind::Wait, std::iter::empty(), duration, None)
    }

    fn push(
        mut self,
        kind: OpKind,
        targets: impl IntoIterator<Item = VisualId>,
        duration: f64,
        effect: Option<OpEffect>,
    ) -> Self {
        let targets: Vec<VisualId> = targets.into_iter().collect();
        // Only waits are meaningful without targets.
        if kind == OpKind::Wait || !targets.is_empty() {
            self.steps.push(Step {
                kind,
                targets,
                duration: duration.max(0.0),
                effect,
            });
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    fn span(&self) -> f64 {
        self.steps.iter().map(|s| s.duration).fold(0.0, f64::max)
    }
}

/// Append-only scene under construction: declared objects, emitted ops, and the
/// session clock.
#[derive(Debug)]
pub struct Stage {
    background: Rgba8,
    objects: Vec<VisualObject>,
    ops: Vec<RenderOp>,
    clock: f64,
    next_batch: u32,
    on_stage: Vec<VisualId>,
    visible: BTreeSet<VisualId>,
}

impl Stage {
    pub fn new(background: Rgba8) -> Self {
        Self {
            background,
            objects: Vec::new(),
            ops: Vec::new(),
            clock: 0.0,
            next_batch: 0,
            on_stage: Vec::new(),
            visible: BTreeSet::new(),
        }
    }

    /// Declares a visual object. Declaring does not show it.
    pub fn spawn(
        &mut self,
        key: impl Into<String>,
        shape: Shape,
        position: Point,
        color: Rgba8,
    ) -> VisualId {
        let id = VisualId(self.objects.len() as u32);
        self.objects.push(VisualObject {
            id,
            key: key.into(),
            shape,
            position,
            color,
        });
        id
    }

    /// Emits `batch` at the current clock and advances the clock by the batch's
    /// longest op. Empty batches emit nothing and return `false`.
    pub fn play(&mut self, phase: Phase, batch: Batch) -> bool {
        if batch.is_empty() {
            return false;
        }

        let span = batch.span();
        let batch_index = self.next_batch;
        self.next_batch += 1;

        for step in batch.steps {
            match step.kind {
                kind if kind.reveals() => {
                    for id in &step.targets {
                        if self.visible.insert(*id) {
                            self.on_stage.push(*id);
                        }
                    }
                }
                OpKind::FadeOut => {
                    let mut faded = false;
                    for id in &step.targets {
                        faded |= self.visible.remove(id);
                    }
                    if faded {
                        let visible = &self.visible;
                        self.on_stage.retain(|id| visible.contains(id));
                    }
                }
                _ => {}
            }

            let order = self.ops.len() as u64;
            tracing::trace!(order, batch = batch_index, ?phase, kind = ?step.kind, "emit op");
            self.ops.push(RenderOp {
                order,
                batch: batch_index,
                phase,
                kind: step.kind,
                targets: step.targets,
                duration: step.duration,
                start: self.clock,
                effect: step.effect,
            });
        }

        self.clock += span;
        true
    }

    /// Objects currently visible, in the order they appeared.
    pub fn on_stage(&self) -> &[VisualId] {
        &self.on_stage
    }

    pub fn op_count(&self) -> usize {
        self.ops.len()
    }

    pub fn clock(&self) -> f64 {
        self.clock
    }

    pub fn finish(self) -> Reel {
        Reel {
            background: self.background,
            objects: self.objects,
            ops: self.ops,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/sequence/stage.rs"]
mod tests;
