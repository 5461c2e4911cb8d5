use super::*;

#[test]
fn clamp_progress_bounds_and_nan() {
    assert_eq!(clamp_progress(-0.5), 0.0);
    assert_eq!(clamp_progress(0.25), 0.25);
    assert_eq!(clamp_progress(3.0), 1.0);
    assert_eq!(clamp_progress(f64::NAN), 0.0);
    assert_eq!(clamp_progress(f64::INFINITY), 1.0);
    assert_eq!(clamp_progress(f64::NEG_INFINITY), 0.0);
}

#[test]
fn lerp_endpoints() {
    assert_eq!(lerp(0.8, 1.0, 0.0), 0.8);
    assert_eq!(lerp(0.8, 1.0, 1.0), 1.0);
    assert!((lerp(1.0, 1.5, 0.5) - 1.25).abs() < 1e-12);
}

#[test]
fn scene_id_serializes_as_plain_string() {
    let id = SceneId::new("portal-1");
    assert_eq!(serde_json::to_string(&id).unwrap(), "\"portal-1\"");
    let back: SceneId = serde_json::from_str("\"portal-1\"").unwrap();
    assert_eq!(back, id);
    assert_eq!(id.to_string(), "portal-1");
}
