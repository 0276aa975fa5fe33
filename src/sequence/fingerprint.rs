use crate::{
    foundation::core::Point,
    foundation::math::Fnv1a64,
    sequence::ops::{OpEffect, OpKind, Phase, Reel, Shape},
};

/// 128-bit digest of a [`Reel`]; equal reels always hash equal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
pub struct ReelFingerprint {
    pub hi: u64,
    pub lo: u64,
}

impl std::fmt::Display for ReelFingerprint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:016x}{:016x}", self.hi, self.lo)
    }
}

struct Pair(Fnv1a64, Fnv1a64);

impl Pair {
    fn u8(&mut self, v: u8) {
        self.0.write_u8(v);
        self.1.write_u8(v);
    }

    fn u64(&mut self, v: u64) {
        self.0.write_u64(v);
        self.1.write_u64(v);
    }

    fn f64(&mut self, v: f64) {
        self.0.write_f64(v);
        self.1.write_f64(v);
    }

    fn str(&mut self, s: &str) {
        self.0.write_str(s);
        self.1.write_str(s);
    }

    fn point(&mut self, p: Point) {
        self.f64(p.x);
        self.f64(p.y);
    }
}

pub fn fingerprint_reel(reel: &Reel) -> ReelFingerprint {
    let mut h = Pair(
        Fnv1a64::new(Fnv1a64::OFFSET_BASIS),
        Fnv1a64::new(0x9ae1_6a3b_2f90_404f),
    );

    h.str(&reel.background.to_hex());

    h.u64(reel.objects.len() as u64);
    for obj in &reel.objects {
        h.u64(u64::from(obj.id.0));
        h.str(&obj.key);
        h.point(obj.position);
        h.str(&obj.color.to_hex());
        write_shape(&mut h, &obj.shape);
    }

    h.u64(reel.ops.len() as u64);
    for op in &reel.ops {
        h.u64(op.order);
        h.u64(u64::from(op.batch));
        h.u8(phase_tag(op.phase));
        h.u8(kind_tag(op.kind));
        h.u64(op.targets.len() as u64);
        for t in &op.targets {
            h.u64(u64::from(t.0));
        }
        h.f64(op.duration);
        h.f64(op.start);
        match op.effect {
            None => h.u8(0),
            Some(OpEffect::Shift(v)) => {
                h.u8(1);
                h.f64(v.x);
                h.f64(v.y);
            }
            Some(OpEffect::Scale(s)) => {
                h.u8(2);
                h.f64(s);
            }
            Some(OpEffect::Dock { scale, anchor }) => {
                h.u8(3);
                h.f64(scale);
                h.point(anchor);
            }
        }
    }

    ReelFingerprint {
        hi: h.0.finish(),
        lo: h.1.finish(),
    }
}

fn write_shape(h: &mut Pair, shape: &Shape) {
    match shape {
        Shape::Dot { radius } => {
            h.u8(0);
            h.f64(*radius);
        }
        Shape::Text { content, font_size } => {
            h.u8(1);
            h.str(content);
            h.f64(*font_size);
        }
        Shape::Arrow { start, end } => {
            h.u8(2);
            h.point(*start);
            h.point(*end);
        }
        Shape::Line { start, end } => {
            h.u8(3);
            h.point(*start);
            h.point(*end);
        }
        Shape::Circle { radius } => {
            h.u8(4);
            h.f64(*radius);
        }
        Shape::Rectangle { width, height } => {
            h.u8(5);
            h.f64(*width);
            h.f64(*height);
        }
        Shape::NumberLine {
            min,
            max,
            step,
            length,
            ticks,
        } => {
            h.u8(6);
            h.f64(*min);
            h.f64(*max);
            h.f64(*step);
            h.f64(*length);
            h.u64(ticks.len() as u64);
            for t in ticks {
                h.f64(*t);
            }
        }
    }
}

fn phase_tag(phase: Phase) -> u8 {
    match phase {
        Phase::Intro => 0,
        Phase::Legend => 1,
        Phase::EntityReveal => 2,
        Phase::RelationshipReveal => 3,
        Phase::VariantContent => 4,
        Phase::Rescale => 5,
        Phase::Conclusion => 6,
    }
}

fn kind_tag(kind: OpKind) -> u8 {
    match kind {
        OpKind::Appear => 0,
        OpKind::Draw => 1,
        OpKind::Write => 2,
        OpKind::Transform => 3,
        OpKind::FadeOut => 4,
        OpKind::Wait => 5,
    }
}
