use super::*;

#[test]
fn defaults_validate() {
    ReelConfig::default().validate().unwrap();
}

#[test]
fn partial_json_keeps_other_defaults() {
    let cfg = ReelConfig::from_json_str(
        r##"{ "timeline": { "min": 1900, "max": 2000 }, "theme": { "text": "#ECE6E2" } }"##,
    )
    .unwrap();
    assert_eq!(cfg.timeline.min, 1900.0);
    assert_eq!(cfg.timeline.step, 50.0);
    assert_eq!(cfg.theme.text, Rgba8::opaque(0xEC, 0xE6, 0xE2));
    assert_eq!(cfg.timing, Timing::default());
}

#[test]
fn inverted_timeline_is_rejected() {
    let err = ReelConfig::from_json_str(r#"{ "timeline": { "min": 2000, "max": 1900 } }"#)
        .unwrap_err();
    assert!(matches!(err, ReelError::Validation(_)));
}

#[test]
fn zero_step_and_negative_durations_are_rejected() {
    let mut cfg = ReelConfig::default();
    cfg.timeline.step = 0.0;
    assert!(cfg.validate().is_err());

    let mut cfg = ReelConfig::default();
    cfg.timing.entity_reveal = -0.5;
    let err = cfg.validate().unwrap_err();
    assert!(err.to_string().contains("entity_reveal"));
}

#[test]
fn bad_colour_is_a_serde_error() {
    let err = ReelConfig::from_json_str(r#"{ "theme": { "text": "white" } }"#).unwrap_err();
    assert!(matches!(err, ReelError::Serde(_)));
}

#[test]
fn titles_follow_graph_name_unless_overridden() {
    let mut cfg = ReelConfig::default();
    assert_eq!(cfg.title_for(Some("USAHistory")), "USAHistory Knowledge Graph");
    assert_eq!(
        cfg.caption_for(Some("USAHistory")),
        "USAHistory Knowledge Graph Visualization"
    );
    assert_eq!(cfg.title_for(None), "Knowledge Graph");

    cfg.title = Some("Custom".to_string());
    assert_eq!(cfg.title_for(Some("USAHistory")), "Custom");
}

#[test]
fn timeline_step_too_small_for_tick_bound_is_rejected() {
    let err = ReelConfig::from_json_str(r#"{ "timeline": { "step": 1e-7 } }"#).unwrap_err();
    assert!(matches!(err, ReelError::Validation(_)));
    assert!(err.to_string().contains("timeline.step"));

    let mut cfg = ReelConfig::default();
    cfg.timeline.step = (cfg.timeline.max - cfg.timeline.min) / (MAX_TIMELINE_TICKS as f64 - 1.0);
    cfg.validate().unwrap();
}

#[test]
fn timeline_is_only_checked_for_history() {
    let mut cfg = ReelConfig::default();
    cfg.timeline.step = 0.0;
    for variant in [Variant::Pomdp, Variant::Car, Variant::Generic] {
        cfg.validate_for(variant).unwrap();
    }
    assert!(cfg.validate_for(Variant::History).is_err());
    assert!(cfg.validate().is_err());
}
