use crate::engine::liquid::{LiquidPath, Presented};
use crate::engine::options::LiquidOptions;
use crate::engine::pointer::{FrameCtx, PointerTracker};
use crate::engine::target::RenderTarget;
use crate::foundation::core::{Affine, BezPath, Point};

/// Handle to an instance registered with a [`Ticker`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct InstanceId(usize);

/// Per-tick counters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TickStats {
    /// Instances that advanced and wrote a frame.
    pub rendered: usize,
    /// Instances skipped because they were hidden.
    pub hidden: usize,
    /// Instances whose target rejected the frame.
    pub skipped: usize,
}

struct Slot<T> {
    engine: LiquidPath,
    target: T,
}

/// Shared frame scheduler: one pointer tracker, many independent liquid paths.
pub struct Ticker<T> {
    slots: Vec<Slot<T>>,
    pointer: PointerTracker,
    frames: u64,
}

impl<T: RenderTarget> Default for Ticker<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: RenderTarget> Ticker<T> {
    /// Empty ticker with the default pointer velocity decay.
    pub fn new() -> Self {
        Self::with_pointer(PointerTracker::default())
    }

    /// Empty ticker using `pointer` as the shared pointer record.
    pub fn with_pointer(pointer: PointerTracker) -> Self {
        Self {
            slots: Vec::new(),
            pointer,
            frames: 0,
        }
    }

    /// Attach a new liquid path drawing into `target`. Setup failures yield `None`.
    pub fn attach(
        &mut self,
        source: &BezPath,
        space: Affine,
        options: LiquidOptions,
        target: T,
    ) -> Option<InstanceId> {
        LiquidPath::attach(source, space, options).map(|engine| self.insert(engine, target))
    }

    /// Register an existing engine.
    pub fn insert(&mut self, engine: LiquidPath, target: T) -> InstanceId {
        self.slots.push(Slot { engine, target });
        InstanceId(self.slots.len() - 1)
    }

    /// Number of registered instances.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// `true` when nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Number of ticks run so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Engine behind `id`.
    pub fn engine(&self, id: InstanceId) -> Option<&LiquidPath> {
        self.slots.get(id.0).map(|s| &s.engine)
    }

    /// Target behind `id`.
    pub fn target(&self, id: InstanceId) -> Option<&T> {
        self.slots.get(id.0).map(|s| &s.target)
    }

    /// Mutable target behind `id`.
    pub fn target_mut(&mut self, id: InstanceId) -> Option<&mut T> {
        self.slots.get_mut(id.0).map(|s| &mut s.target)
    }

    /// Visibility signal for one instance. Returns `false` for unknown ids.
    pub fn set_visible(&mut self, id: InstanceId, visible: bool) -> bool {
        match self.slots.get_mut(id.0) {
            Some(slot) => {
                slot.engine.set_visible(visible);
                true
            }
            None => false,
        }
    }

    /// Shared pointer record.
    pub fn pointer(&self) -> &PointerTracker {
        &self.pointer
    }

    /// Pointer moved to `position` (screen coordinates).
    pub fn pointer_move(&mut self, position: Point) {
        self.pointer.sample(position);
    }

    /// Run one frame at host time `now` on every instance.
    pub fn tick(&mut self, now: f64) -> TickStats {
        let ctx = FrameCtx {
            now,
            pointer: self.pointer.take_pending(),
        };

        let mut stats = TickStats::default();
        for slot in &mut self.slots {
            match slot.engine.present(&ctx, &mut slot.target) {
                Presented::Rendered => stats.rendered += 1,
                Presented::Hidden => stats.hidden += 1,
                Presented::Skipped => stats.skipped += 1,
            }
        }

        self.pointer.decay();
        self.frames += 1;
        stats
    }
}

#[cfg(test)]
#[path = "../../tests/unit/engine/ticker.rs"]
mod tests;
