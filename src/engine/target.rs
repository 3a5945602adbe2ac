use crate::foundation::core::BezPath;
use crate::foundation::error::LiquidResult;

/// Where a liquid path writes its curve every frame.
///
/// Returning an error skips that frame's write; the next frame is computed fresh.
pub trait RenderTarget {
    /// Replace the displayed outline with `curve`.
    fn set_outline(&mut self, curve: &BezPath) -> LiquidResult<()>;
}

impl<T: RenderTarget + ?Sized> RenderTarget for Box<T> {
    fn set_outline(&mut self, curve: &BezPath) -> LiquidResult<()> {
        (**self).set_outline(curve)
    }
}

/// Keeps the latest curve as SVG path data (the `d` attribute).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SvgPathData {
    data: Option<String>,
    writes: u64,
}

impl SvgPathData {
    /// Latest path data, if anything was written yet.
    pub fn data(&self) -> Option<&str> {
        self.data.as_deref()
    }

    /// Number of successful writes.
    pub fn writes(&self) -> u64 {
        self.writes
    }
}

impl RenderTarget for SvgPathData {
    fn set_outline(&mut self, curve: &BezPath) -> LiquidResult<()> {
        self.data = Some(curve.to_svg());
        self.writes += 1;
        Ok(())
    }
}

/// Keeps every curve written to it, in order.
#[derive(Clone, Debug, Default)]
pub struct FrameRecorder {
    frames: Vec<BezPath>,
}

impl FrameRecorder {
    /// Recorded curves.
    pub fn frames(&self) -> &[BezPath] {
        &self.frames
    }

    /// Most recent curve.
    pub fn last(&self) -> Option<&BezPath> {
        self.frames.last()
    }
}

impl RenderTarget for FrameRecorder {
    fn set_outline(&mut self, curve: &BezPath) -> LiquidResult<()> {
        self.frames.push(curve.clone());
        Ok(())
    }
}
