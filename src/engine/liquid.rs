use crate::engine::options::LiquidOptions;
use crate::engine::point::{LivePoint, drag_target, falloff};
use crate::engine::pointer::{FrameCtx, PointerState};
use crate::engine::target::RenderTarget;
use crate::engine::waves::{idle_offset, size_factor};
use crate::foundation::core::{Affine, BezPath, Point, transform_vector};
use crate::foundation::error::{LiquidError, LiquidResult};
use crate::foundation::math::Rng64;
use crate::geometry::outline::Outline;
use crate::geometry::spline::spline;

const MIN_DETERMINANT: f64 = 1e-12;

/// Span of the randomised starting wave time.
const PHASE_SPAN: f64 = 1000.0;

/// What [`LiquidPath::present`] did with a frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Presented {
    /// Not visible: nothing advanced, nothing written.
    Hidden,
    /// Advanced and written to the target.
    Rendered,
    /// Advanced, but the target rejected the write.
    Skipped,
}

/// One animated outline: rest shape, live points and the clocks driving them.
#[derive(Clone, Debug)]
pub struct LiquidPath {
    outline: Outline,
    points: Vec<LivePoint>,
    options: LiquidOptions,
    screen_to_local: Affine,
    size_factor: f64,
    wave_time: f64,
    clock: f64,
    last_now: Option<f64>,
    visible: bool,
}

impl LiquidPath {
    /// Sample `source` and prepare its animation.
    ///
    /// `space` maps outline coordinates to screen coordinates. Setup failures are logged and
    /// yield `None`; use [`LiquidPath::try_attach`] to inspect them.
    #[tracing::instrument(skip_all, fields(detail = options.detail, closed = options.closed))]
    pub fn attach(source: &BezPath, space: Affine, options: LiquidOptions) -> Option<Self> {
        match Self::try_attach(source, space, options) {
            Ok(path) => Some(path),
            Err(err) => {
                tracing::warn!(error = %err, "liquid path not attached");
                None
            }
        }
    }

    /// Fallible form of [`LiquidPath::attach`].
    pub fn try_attach(source: &BezPath, space: Affine, options: LiquidOptions) -> LiquidResult<Self> {
        options.validate()?;
        let outline = Outline::sample(source, options.detail, options.closed)?;
        Self::from_outline(outline, space, options)
    }

    /// Animate an already sampled outline. `options.detail` and `options.closed` are taken
    /// from the outline.
    pub fn from_outline(
        outline: Outline,
        space: Affine,
        mut options: LiquidOptions,
    ) -> LiquidResult<Self> {
        options.detail = outline.len();
        options.closed = outline.is_closed();
        options.validate()?;
        let screen_to_local = invert(space)?;

        let size_factor = size_factor(
            outline.max_dimension(),
            options.tuning.reference_size,
            options.tuning.min_size_factor,
        );
        let wave_time = Rng64::new(options.seed).next_f64_01() * PHASE_SPAN;
        let points = outline.points().iter().copied().map(LivePoint::new).collect();

        tracing::debug!(
            points = outline.len(),
            length = outline.length(),
            max_dimension = outline.max_dimension(),
            size_factor,
            "liquid path attached"
        );

        Ok(Self {
            outline,
            points,
            options,
            screen_to_local,
            size_factor,
            wave_time,
            clock: 0.0,
            last_now: None,
            visible: true,
        })
    }

    /// Rest shape.
    pub fn outline(&self) -> &Outline {
        &self.outline
    }

    /// Live points, one per outline sample.
    pub fn points(&self) -> &[LivePoint] {
        &self.points
    }

    /// Effective options.
    pub fn options(&self) -> &LiquidOptions {
        &self.options
    }

    /// Wave amplitude scale derived from the outline size.
    pub fn size_factor(&self) -> f64 {
        self.size_factor
    }

    /// Current idle wave time.
    pub fn wave_time(&self) -> f64 {
        self.wave_time
    }

    /// Seconds of visible time elapsed since attach.
    pub fn clock(&self) -> f64 {
        self.clock
    }

    /// Whether the outline is on screen.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Report whether the outline's container is on screen. Hidden paths do no work.
    pub fn set_visible(&mut self, visible: bool) {
        if self.visible != visible {
            tracing::trace!(visible, "liquid path visibility changed");
        }
        self.visible = visible;
    }

    /// Replace the outline-to-screen transform, e.g. after a resize.
    pub fn set_space(&mut self, space: Affine) -> LiquidResult<()> {
        self.screen_to_local = invert(space)?;
        Ok(())
    }

    /// Advance one frame. Returns `false` (and changes no point) while hidden.
    pub fn step(&mut self, ctx: &FrameCtx) -> bool {
        if !self.visible {
            self.last_now = None;
            return false;
        }

        let dt = match self.last_now {
            Some(prev) if ctx.now.is_finite() => (ctx.now - prev).max(0.0),
            _ => 0.0,
        };
        if ctx.now.is_finite() {
            self.last_now = Some(ctx.now);
        }
        self.clock += dt;
        self.wave_time += dt * self.options.tuning.idle_rate;

        if let Some(pointer) = ctx.pointer {
            self.apply_pointer(pointer);
        }

        let tuning = &self.options.tuning;
        for (live, origin) in self.points.iter_mut().zip(self.outline.points()) {
            live.advance(*origin, self.clock, tuning);
        }
        true
    }

    /// Positions to draw this frame: live points plus idle waves.
    pub fn rendered_points(&self) -> Vec<Point> {
        let count = self.points.len();
        let tuning = &self.options.tuning;
        self.points
            .iter()
            .enumerate()
            .map(|(i, live)| {
                live.position()
                    + idle_offset(&tuning.waves, self.wave_time, i, count, self.size_factor)
            })
            .collect()
    }

    /// Current curve.
    pub fn render(&self) -> BezPath {
        spline(
            &self.rendered_points(),
            self.options.tension,
            self.options.closed,
        )
    }

    /// Step, render and write to `target`.
    pub fn present(&mut self, ctx: &FrameCtx, target: &mut dyn RenderTarget) -> Presented {
        if !self.step(ctx) {
            return Presented::Hidden;
        }
        match target.set_outline(&self.render()) {
            Ok(()) => Presented::Rendered,
            Err(err) => {
                tracing::debug!(error = %err, "render target rejected frame");
                Presented::Skipped
            }
        }
    }

    fn apply_pointer(&mut self, pointer: PointerState) {
        let local = self.screen_to_local * pointer.position;
        let velocity = transform_vector(self.screen_to_local, pointer.velocity);
        let radius = self.options.interaction_radius;
        let tuning = &self.options.tuning;

        for (live, origin) in self.points.iter_mut().zip(self.outline.points()) {
            let force = falloff(*origin, local, radius);
            if force > 0.0 {
                live.drag_toward(drag_target(*origin, velocity, force, tuning), self.clock, tuning);
            } else {
                live.release(*origin, self.clock, tuning);
            }
        }
    }
}

fn invert(space: Affine) -> LiquidResult<Affine> {
    let det = space.determinant();
    if !space.as_coeffs().iter().all(|c| c.is_finite()) || !det.is_finite() {
        return Err(LiquidError::transform("coordinate space is not finite"));
    }
    let [a, b, c, d, _, _] = space.as_coeffs();
    let scale = a.abs().max(b.abs()).max(c.abs()).max(d.abs());
    if det.abs() <= f64::EPSILON * scale * scale {
        return Err(LiquidError::transform(format!(
            "coordinate space is not invertible (determinant {det})"
        )));
    }
    let inverse = space.inverse();
    if !inverse.as_coeffs().iter().all(|c| c.is_finite()) {
        return Err(LiquidError::transform("coordinate space inverse is not finite"));
    }
    Ok(inverse)
}

#[cfg(test)]
#[path = "../../tests/unit/engine/liquid.rs"]
mod tests;
