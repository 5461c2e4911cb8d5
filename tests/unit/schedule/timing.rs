use super::*;

#[test]
fn defaults_validate() {
    TimingConfig::default().validate().unwrap();
}

#[test]
fn partial_json_fills_defaults() {
    let cfg: TimingConfig =
        serde_json::from_str(r#"{ "sequence_start_fraction": 0.4, "scene_duration": { "fixed": 0.1 } }"#)
            .unwrap();
    assert_eq!(cfg.sequence_start_fraction, 0.4);
    assert_eq!(cfg.scene_duration, SceneDuration::Fixed(0.1));
    assert_eq!(cfg.enter_fraction, TimingConfig::default().enter_fraction);

    let cfg: TimingConfig = serde_json::from_str(r#"{ "scene_duration": "fit_to_range" }"#).unwrap();
    assert_eq!(cfg.scene_duration, SceneDuration::FitToRange);
}

#[test]
fn unknown_fields_are_rejected() {
    let res: Result<TimingConfig, _> = serde_json::from_str(r#"{ "enter_fraktion": 0.2 }"#);
    assert!(res.is_err());
}

#[test]
fn out_of_order_fractions_are_rejected() {
    let cfg = TimingConfig {
        enter_fraction: 0.7,
        exit_start_fraction: 0.7,
        ..TimingConfig::default()
    };
    let err = cfg.validate().unwrap_err();
    assert!(err.is_invalid_configuration());
    assert!(err.to_string().contains("timing.enter_fraction"));

    let cfg = TimingConfig {
        exit_start_fraction: 1.2,
        ..TimingConfig::default()
    };
    assert!(cfg.validate().is_err());
}

#[test]
fn non_finite_and_out_of_range_values_are_rejected() {
    let cases = [
        TimingConfig {
            intro_exit_fraction: f64::NAN,
            ..TimingConfig::default()
        },
        TimingConfig {
            intro_exit_fraction: 0.0,
            ..TimingConfig::default()
        },
        TimingConfig {
            sequence_start_fraction: 1.5,
            ..TimingConfig::default()
        },
        TimingConfig {
            overlap: 1.0,
            ..TimingConfig::default()
        },
        TimingConfig {
            min_scale: 0.0,
            ..TimingConfig::default()
        },
        TimingConfig {
            max_scale: 0.9,
            ..TimingConfig::default()
        },
        TimingConfig {
            intro_end_scale: 1.1,
            ..TimingConfig::default()
        },
        TimingConfig {
            scene_duration: SceneDuration::Fixed(0.0),
            ..TimingConfig::default()
        },
        TimingConfig {
            scene_duration: SceneDuration::Fixed(f64::INFINITY),
            ..TimingConfig::default()
        },
    ];
    for cfg in cases {
        assert!(cfg.validate().is_err(), "{cfg:?}");
    }
}

#[test]
fn fit_to_range_fills_remaining_progress() {
    let cfg = TimingConfig::default();
    let slot = cfg.slot_layout(4).unwrap();
    assert!((slot.duration - 0.1).abs() < 1e-12);
    assert!((cfg.required_extent(4) - 1.0).abs() < 1e-12);

    let cfg = TimingConfig {
        overlap: 0.5,
        ..TimingConfig::default()
    };
    let slot = cfg.slot_layout(3).unwrap();
    // 2 half-steps plus one full slot span the 0.4 remaining.
    assert!((slot.duration - 0.2).abs() < 1e-12);
    assert!((slot.spacing - 0.1).abs() < 1e-12);
    assert!((cfg.required_extent(3) - 1.0).abs() < 1e-12);
}

#[test]
fn fixed_duration_extent_grows_with_scene_count() {
    let cfg = TimingConfig {
        scene_duration: SceneDuration::Fixed(0.1),
        ..TimingConfig::default()
    };
    assert!((cfg.required_extent(2) - 0.8).abs() < 1e-12);
    assert!(cfg.required_extent(5) > 1.0);
    assert_eq!(cfg.required_extent(0), cfg.intro_exit_fraction);
    assert!(cfg.slot_layout(0).is_none());
}
