use super::*;
use crate::scene::model::{PointerSample, Viewport};
use crate::engine::options::LiquidOptions;

fn path(id: &str, d: &str) -> PathDef {
    PathDef {
        id: id.to_string(),
        d: d.to_string(),
        closed: None,
        options: LiquidOptions {
            detail: 16,
            ..LiquidOptions::default()
        },
        transform: None,
        visible_from: 0.0,
        visible_until: None,
    }
}

fn scene(paths: Vec<PathDef>) -> Scene {
    Scene {
        fps: 30.0,
        duration_secs: 0.5,
        viewport: Viewport::default(),
        reduced_motion: false,
        paths,
        pointer: vec![
            PointerSample {
                t: 0.2,
                x: 60.0,
                y: 0.0,
            },
            PointerSample {
                t: 0.1,
                x: 50.0,
                y: 0.0,
            },
        ],
    }
}

#[test]
fn replays_every_frame() {
    let s = scene(vec![path("a", "M0,0 L200,0 L200,200 L0,200 Z")]);
    let frames = Playback::run(&s).unwrap();
    assert_eq!(frames.len(), 15);
    assert_eq!(frames[0].frame, 0);
    assert!((frames[3].time - 0.1).abs() < 1e-12);
    for f in &frames {
        assert!(f.paths["a"].starts_with('M'));
    }
    assert_ne!(frames[0].paths["a"], frames[14].paths["a"]);
}

#[test]
fn replay_is_deterministic() {
    let s = scene(vec![
        path("a", "M0,0 L200,0 L200,200 L0,200 Z"),
        path("b", "M300,300 C350,250 400,350 450,300"),
    ]);
    assert_eq!(Playback::run(&s).unwrap(), Playback::run(&s).unwrap());
}

#[test]
fn unanimatable_paths_stay_static() {
    let s = scene(vec![
        path("ok", "M0,0 L200,0 L200,200 Z"),
        path("dot", "M5,5 L5,5"),
        path("junk", "M0,0 X1"),
    ]);
    let playback = Playback::new(&s).unwrap();
    assert_eq!(playback.live_count(), 1);

    let frames = Playback::run(&s).unwrap();
    assert!(frames.iter().all(|f| f.paths["dot"] == "M5,5 L5,5"));
    assert!(frames.iter().all(|f| f.paths["junk"] == "M0,0 X1"));
}

#[test]
fn reduced_motion_attaches_nothing() {
    let mut s = scene(vec![path("a", "M0,0 L200,0 L200,200 Z")]);
    s.reduced_motion = true;
    let playback = Playback::new(&s).unwrap();
    assert_eq!(playback.live_count(), 0);
    let frames = Playback::run(&s).unwrap();
    assert!(frames.iter().all(|f| f.paths["a"] == "M0,0 L200,0 L200,200 Z"));
}

#[test]
fn hidden_paths_hold_their_last_frame() {
    let mut late = path("late", "M0,0 L200,0 L200,200 Z");
    late.visible_from = 0.2;
    let frames = Playback::run(&scene(vec![late])).unwrap();
    // Not yet on screen: the source data is emitted untouched.
    assert_eq!(frames[0].paths["late"], "M0,0 L200,0 L200,200 Z");
    assert_ne!(frames[10].paths["late"], "M0,0 L200,0 L200,200 Z");
}

#[test]
fn invalid_scene_is_rejected() {
    let mut s = scene(vec![path("a", "M0,0 L1,0"), path("a", "M0,0 L1,0")]);
    assert!(Playback::new(&s).is_err());
    s.paths.pop();
    s.fps = -1.0;
    assert!(Playback::run(&s).is_err());
}
