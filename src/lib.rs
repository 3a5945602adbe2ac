//! Liquid-distortion engine for vector outlines.
//!
//! A static outline is sampled into points at equal arc-length steps. Every frame those points
//! are perturbed by layered idle waves and by pointer-driven "drag" displacement that springs
//! back to rest, and the outline is redrawn as a Catmull-Rom curve.
//!
//! # Frame loop
//!
//! 1. **Attach**: [`LiquidPath::attach`] samples a [`BezPath`] into an [`Outline`] and seeds one
//!    [`LivePoint`] per sample. Degenerate outlines and unresolvable coordinate spaces fail soft.
//! 2. **Step**: [`LiquidPath::step`] reads a [`FrameCtx`] (host time plus the latest pointer
//!    sample) and advances each point's [`Motion`] state machine.
//! 3. **Render**: [`LiquidPath::present`] builds the curve and hands it to a [`RenderTarget`].
//!
//! [`Ticker`] runs many instances against one shared [`PointerTracker`]; [`Playback`] replays a
//! JSON [`Scene`] deterministically, which is what the `liquid-path` binary drives.
//!
//! The core never touches a windowing or DOM API: hosts feed samples in and receive curves out.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod engine;
mod foundation;
mod geometry;
mod scene;

pub use animation::ease::Ease;
pub use animation::tween::Tween;
pub use engine::liquid::{LiquidPath, Presented};
pub use engine::options::{LiquidOptions, Radius, Tuning};
pub use engine::point::{LivePoint, Motion, drag_target, falloff};
pub use engine::pointer::{DEFAULT_VELOCITY_DECAY, FrameCtx, PointerState, PointerTracker};
pub use engine::target::{FrameRecorder, RenderTarget, SvgPathData};
pub use engine::ticker::{InstanceId, TickStats, Ticker};
pub use engine::waves::{WaveLayer, WavePhase, idle_offset, size_factor};
pub use foundation::core::{Affine, BezPath, Point, Rect, Vec2, clamp_around};
pub use foundation::error::{LiquidError, LiquidResult};
pub use foundation::math::Rng64;
pub use geometry::outline::{ARCLEN_ACCURACY, MAX_DETAIL, Outline, infer_closed, sample_outline};
pub use geometry::spline::spline;
pub use scene::model::{MAX_FRAMES, PathDef, PointerSample, Scene, Viewport};
pub use scene::playback::{FrameRecord, Playback};
pub use scene::snapshot::{SnapshotStyle, svg_document};
