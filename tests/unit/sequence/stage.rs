use super::*;

fn dot(stage: &mut Stage, key: &str) -> VisualId {
    stage.spawn(key, Shape::Dot { radius: 0.1 }, Point::ORIGIN, Rgba8::WHITE)
}

#[test]
fn empty_batch_emits_nothing_and_keeps_clock() {
    let mut stage = Stage::new(Rgba8::BLACK);
    assert!(!stage.play(Phase::Legend, Batch::new()));
    assert!(!stage.play(Phase::Legend, Batch::new().op(OpKind::Draw, Vec::new(), 1.0)));
    assert_eq!(stage.op_count(), 0);
    assert_eq!(stage.clock(), 0.0);
}

#[test]
fn batch_ops_share_start_and_clock_advances_by_longest() {
    let mut stage = Stage::new(Rgba8::BLACK);
    let a = dot(&mut stage, "a");
    let b = dot(&mut stage, "b");
    stage.play(
        Phase::EntityReveal,
        Batch::new().op(OpKind::Draw, [a], 0.5).op(OpKind::Write, [b], 0.3),
    );
    stage.play(Phase::Conclusion, Batch::new().wait(1.0));
    let reel = stage.finish();

    assert_eq!(reel.ops.len(), 3);
    assert_eq!(reel.ops[0].start, 0.0);
    assert_eq!(reel.ops[1].start, 0.0);
    assert_eq!(reel.ops[0].batch, reel.ops[1].batch);
    assert_eq!(reel.ops[2].start, 0.5);
    assert_eq!(reel.ops[2].batch, 1);
    assert!(reel.ops[2].targets.is_empty());
    assert_eq!(reel.total_duration(), 1.5);
    let orders: Vec<u64> = reel.ops.iter().map(|op| op.order).collect();
    assert_eq!(orders, [0, 1, 2]);
}

#[test]
fn on_stage_tracks_reveals_and_fade_outs() {
    let mut stage = Stage::new(Rgba8::BLACK);
    let a = dot(&mut stage, "a");
    let b = dot(&mut stage, "b");
    let c = dot(&mut stage, "c");
    assert!(stage.on_stage().is_empty());

    stage.play(Phase::Intro, Batch::new().op(OpKind::Write, [a, b], 1.0));
    stage.play(Phase::Legend, Batch::new().op(OpKind::Appear, [c, a], 1.0));
    assert_eq!(stage.on_stage(), [a, b, c]);

    stage.play(
        Phase::Rescale,
        Batch::new().op_with(OpKind::Transform, [a], 1.0, OpEffect::Scale(0.8)),
    );
    assert_eq!(stage.on_stage(), [a, b, c]);

    stage.play(Phase::Conclusion, Batch::new().op(OpKind::FadeOut, [b], 1.0));
    assert_eq!(stage.on_stage(), [a, c]);
}

#[test]
fn negative_durations_clamp_to_zero() {
    let mut stage = Stage::new(Rgba8::BLACK);
    let a = dot(&mut stage, "a");
    stage.play(Phase::Intro, Batch::new().op(OpKind::Draw, [a], -3.0));
    let reel = stage.finish();
    assert_eq!(reel.ops[0].duration, 0.0);
    assert_eq!(reel.object(a).unwrap().key, "a");
}

#[test]
fn faded_objects_can_reappear_at_the_end() {
    let mut stage = Stage::new(Rgba8::BLACK);
    let a = dot(&mut stage, "a");
    let b = dot(&mut stage, "b");
    let c = dot(&mut stage, "c");

    stage.play(Phase::Intro, Batch::new().op(OpKind::Write, [a, b, c], 1.0));
    stage.play(Phase::Legend, Batch::new().op(OpKind::FadeOut, [a, a], 1.0));
    assert_eq!(stage.on_stage(), [b, c]);

    stage.play(Phase::Legend, Batch::new().op(OpKind::FadeOut, [a], 1.0));
    assert_eq!(stage.on_stage(), [b, c]);
    assert_eq!(stage.op_count(), 3);

    stage.play(Phase::EntityReveal, Batch::new().op(OpKind::Draw, [a, b], 1.0));
    assert_eq!(stage.on_stage(), [b, c, a]);
}

#[test]
fn many_objects_reveal_and_fade_once_each() {
    let mut stage = Stage::new(Rgba8::BLACK);
    let ids: Vec<VisualId> = (0..20_000).map(|i| dot(&mut stage, &format!("d{i}"))).collect();
    for id in &ids {
        stage.play(Phase::EntityReveal, Batch::new().op(OpKind::Draw, [*id], 0.0));
    }
    stage.play(Phase::EntityReveal, Batch::new().op(OpKind::Draw, ids.clone(), 0.0));
    assert_eq!(stage.on_stage(), ids.as_slice());

    stage.play(Phase::Conclusion, Batch::new().op(OpKind::FadeOut, ids[1..].to_vec(), 1.0));
    assert_eq!(stage.on_stage(), [ids[0]]);
}
