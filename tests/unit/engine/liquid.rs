use super::*;
use crate::engine::options::{Radius, Tuning};
use crate::engine::point::Motion;
use crate::engine::target::{FrameRecorder, SvgPathData};
use crate::foundation::core::Vec2;

fn square() -> BezPath {
    BezPath::from_svg("M0,0 L100,0 L100,100 L0,100 Z").unwrap()
}

fn square_options() -> LiquidOptions {
    LiquidOptions {
        detail: 4,
        tension: 1.0,
        closed: true,
        interaction_radius: Radius::uniform(100.0),
        seed: 0,
        tuning: Tuning::still(),
    }
}

fn drag_corner(engine: &mut LiquidPath) {
    engine.step(&FrameCtx::idle(0.0));
    engine.step(&FrameCtx::with_pointer(
        0.0,
        PointerState {
            position: Point::new(0.0, 0.0),
            velocity: Vec2::new(10.0, 0.0),
        },
    ));
}

#[test]
fn corner_drag_targets_velocity_times_strength() {
    let mut engine = LiquidPath::try_attach(&square(), Affine::IDENTITY, square_options()).unwrap();
    drag_corner(&mut engine);

    let corner = engine.points()[0];
    assert_eq!(corner.drag_target(), Some(Point::new(70.0, 0.0)));

    // Adjacent corners sit on the radius edge, the opposite one is beyond it.
    for (live, origin) in engine.points()[1..].iter().zip(&engine.outline().points()[1..]) {
        let pull = live.drag_target().map_or(0.0, |t| (t - *origin).hypot());
        assert!(pull < 1e-6);
    }
    let opposite = engine.points()[2];
    assert_eq!(opposite.motion(), Motion::Resting);
    assert_eq!(opposite.drag_target(), None);
    assert_eq!(opposite.position(), engine.outline().points()[2]);
}

#[test]
fn pointer_is_mapped_into_outline_space() {
    // Outline drawn at 2x and shifted by (100, 100) on screen.
    let space = Affine::translate((100.0, 100.0)) * Affine::scale(2.0);
    let mut engine = LiquidPath::try_attach(&square(), space, square_options()).unwrap();
    engine.step(&FrameCtx::with_pointer(
        0.0,
        PointerState {
            position: Point::new(300.0, 300.0),
            velocity: Vec2::new(0.0, 20.0),
        },
    ));
    let target = engine.points()[2].drag_target().unwrap();
    assert!((target - Point::new(100.0, 170.0)).hypot() < 1e-6);
}

#[test]
fn hidden_paths_do_not_change() {
    let mut engine = LiquidPath::try_attach(&square(), Affine::IDENTITY, square_options()).unwrap();
    engine.set_visible(false);
    let before = engine.points().to_vec();
    let wave_time = engine.wave_time();

    let mut target = FrameRecorder::default();
    for i in 0..30 {
        let ctx = FrameCtx::with_pointer(
            f64::from(i) / 60.0,
            PointerState {
                position: Point::new(0.0, 0.0),
                velocity: Vec2::new(25.0, 25.0),
            },
        );
        assert_eq!(engine.present(&ctx, &mut target), Presented::Hidden);
    }
    assert_eq!(engine.points(), &before[..]);
    assert_eq!(engine.wave_time(), wave_time);
    assert!(target.frames().is_empty());
}

#[test]
fn hidden_time_does_not_count() {
    let mut engine = LiquidPath::try_attach(&square(), Affine::IDENTITY, square_options()).unwrap();
    engine.step(&FrameCtx::idle(0.0));
    engine.step(&FrameCtx::idle(1.0));
    engine.set_visible(false);
    engine.step(&FrameCtx::idle(50.0));
    engine.set_visible(true);
    engine.step(&FrameCtx::idle(60.0));
    engine.step(&FrameCtx::idle(60.5));
    assert!((engine.clock() - 1.5).abs() < 1e-12);
}

#[test]
fn waves_advance_with_visible_time() {
    let opts = LiquidOptions {
        tuning: Tuning::default(),
        ..square_options()
    };
    let mut engine = LiquidPath::try_attach(&square(), Affine::IDENTITY, opts).unwrap();
    let t0 = engine.wave_time();
    engine.step(&FrameCtx::idle(10.0));
    engine.step(&FrameCtx::idle(12.0));
    assert!((engine.wave_time() - t0 - 2.0 * 0.36).abs() < 1e-9);

    // A 100-unit square is small: waves are damped to the minimum factor.
    assert_eq!(engine.size_factor(), 0.2);
}

#[test]
fn seed_picks_the_starting_phase() {
    let a = LiquidPath::try_attach(&square(), Affine::IDENTITY, square_options()).unwrap();
    let b = LiquidPath::try_attach(&square(), Affine::IDENTITY, square_options()).unwrap();
    let c = LiquidPath::try_attach(
        &square(),
        Affine::IDENTITY,
        LiquidOptions {
            seed: 9,
            ..square_options()
        },
    )
    .unwrap();
    assert_eq!(a.wave_time(), b.wave_time());
    assert_ne!(a.wave_time(), c.wave_time());
    assert!((0.0..PHASE_SPAN).contains(&a.wave_time()));
}

#[test]
fn still_outline_renders_its_rest_shape() {
    let mut engine = LiquidPath::try_attach(&square(), Affine::IDENTITY, square_options()).unwrap();
    let mut target = SvgPathData::default();
    assert_eq!(
        engine.present(&FrameCtx::idle(0.0), &mut target),
        Presented::Rendered
    );
    assert_eq!(engine.rendered_points(), engine.outline().points().to_vec());
    assert_eq!(target.data(), Some(engine.render().to_svg().as_str()));
}

#[test]
fn failing_target_skips_the_frame_only() {
    struct Detached;
    impl RenderTarget for Detached {
        fn set_outline(&mut self, _curve: &BezPath) -> LiquidResult<()> {
            Err(LiquidError::render("target detached"))
        }
    }

    let mut engine = LiquidPath::try_attach(&square(), Affine::IDENTITY, square_options()).unwrap();
    assert_eq!(
        engine.present(&FrameCtx::idle(0.0), &mut Detached),
        Presented::Skipped
    );
    let mut target = SvgPathData::default();
    assert_eq!(
        engine.present(&FrameCtx::idle(0.1), &mut target),
        Presented::Rendered
    );
}

#[test]
fn setup_failures_are_contained() {
    let dot = BezPath::from_svg("M1,1 L1,1").unwrap();
    assert!(LiquidPath::attach(&dot, Affine::IDENTITY, square_options()).is_none());
    assert!(matches!(
        LiquidPath::try_attach(&dot, Affine::IDENTITY, square_options()),
        Err(LiquidError::Geometry(_))
    ));

    assert!(LiquidPath::attach(&square(), Affine::scale(0.0), square_options()).is_none());
    assert!(matches!(
        LiquidPath::try_attach(&square(), Affine::scale(0.0), square_options()),
        Err(LiquidError::Transform(_))
    ));

    let mut engine = LiquidPath::try_attach(&square(), Affine::IDENTITY, square_options()).unwrap();
    assert!(engine.set_space(Affine::scale_non_uniform(1.0, 0.0)).is_err());
}

#[test]
fn oversized_detail_fails_soft() {
    let options = LiquidOptions {
        detail: usize::MAX / 2,
        ..square_options()
    };
    assert!(LiquidPath::attach(&square(), Affine::IDENTITY, options.clone()).is_none());
    assert!(matches!(
        LiquidPath::try_attach(&square(), Affine::IDENTITY, options),
        Err(LiquidError::Validation(_))
    ));
}

#[test]
fn tiny_spaces_still_invert() {
    let mut engine =
        LiquidPath::try_attach(&square(), Affine::scale(1e-7), square_options()).unwrap();
    drag_corner(&mut engine);
    assert_eq!(engine.points()[0].drag_target(), Some(Point::new(150.0, 0.0)));
    assert!(engine.set_space(Affine::scale(1e-9)).is_ok());
}

#[test]
fn moving_away_releases_dragged_points() {
    let mut engine = LiquidPath::try_attach(&square(), Affine::IDENTITY, square_options()).unwrap();
    drag_corner(&mut engine);
    engine.step(&FrameCtx::idle(0.3));
    engine.step(&FrameCtx::with_pointer(
        0.4,
        PointerState {
            position: Point::new(500.0, 500.0),
            velocity: Vec2::new(5.0, 5.0),
        },
    ));
    match engine.points()[0].motion() {
        Motion::Returning(tw) => assert_eq!(tw.duration, 2.5),
        other => panic!("expected Returning, got {other:?}"),
    }
}
