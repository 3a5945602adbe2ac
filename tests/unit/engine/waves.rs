use super::*;

#[test]
fn first_layer_matches_breathing_formula() {
    let layer = WaveLayer::defaults()[0];
    let (time, index, count) = (3.7, 5, 20);
    let progress = 5.0 / 20.0;
    let want = Vec2::new(
        (time * 0.6 + progress * TAU).sin() * 15.0,
        (time * 0.5 + progress * TAU).cos() * 15.0,
    );
    let got = layer.offset(time, index, count);
    assert!((got - want).hypot() < 1e-12);
}

#[test]
fn per_index_phase_ignores_count() {
    let layer = WaveLayer::defaults()[2];
    assert_eq!(layer.offset(1.0, 4, 10), layer.offset(1.0, 4, 999));
}

#[test]
fn idle_offset_is_bounded_by_amplitudes() {
    let layers = WaveLayer::defaults();
    let bound = (15.0 + 8.0 + 5.0) * 0.5;
    for step in 0..200 {
        let t = f64::from(step) * 0.37;
        let v = idle_offset(&layers, t, step as usize % 60, 60, 0.5);
        assert!(v.x.abs() <= bound + 1e-9);
        assert!(v.y.abs() <= bound + 1e-9);
    }
}

#[test]
fn no_layers_means_no_offset() {
    assert_eq!(idle_offset(&[], 12.0, 3, 10, 1.0), Vec2::ZERO);
}

#[test]
fn size_factor_is_clamped() {
    assert_eq!(size_factor(1000.0, 500.0, 0.2), 1.0);
    assert_eq!(size_factor(250.0, 500.0, 0.2), 0.5);
    assert_eq!(size_factor(10.0, 500.0, 0.2), 0.2);
}
