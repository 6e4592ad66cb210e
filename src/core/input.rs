// Input adapter state for the glyph field.
//
// DOM listeners write into `InputState`; the frame loop only reads it.
// Nothing is queued, so a frame always sees the most recent pointer
// position, button state and viewport.

#[derive(Default, Clone, Copy, Debug, PartialEq)]
pub struct PointerState {
    pub x: f32,
    pub y: f32,
    pub down: bool,
}

/// CSS-pixel viewport plus the device pixel ratio it was measured with.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
    pub pixel_ratio: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 0.0,
            height: 0.0,
            pixel_ratio: 1.0,
        }
    }
}

impl Viewport {
    /// Ratio used for the backing store; never below 1.
    #[inline]
    pub fn effective_ratio(&self) -> f32 {
        if self.pixel_ratio.is_finite() {
            self.pixel_ratio.max(1.0)
        } else {
            1.0
        }
    }

    /// Canvas backing-store size in device pixels.
    pub fn backing_size(&self) -> (u32, u32) {
        let dpr = self.effective_ratio();
        let w = (self.width.max(0.0) * dpr).round() as u32;
        let h = (self.height.max(0.0) * dpr).round() as u32;
        (w, h)
    }

    #[inline]
    pub fn center(&self) -> (f32, f32) {
        (self.width / 2.0, self.height / 2.0)
    }
}

#[derive(Default, Clone, Debug)]
pub struct InputState {
    pointer: PointerState,
    viewport: Viewport,
}

impl InputState {
    pub fn new(viewport: Viewport) -> Self {
        let mut state = Self::default();
        state.apply_resize(viewport);
        state
    }

    #[inline]
    pub fn pointer(&self) -> &PointerState {
        &self.pointer
    }

    #[inline]
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn pointer_moved(&mut self, x: f32, y: f32) {
        self.pointer.x = x;
        self.pointer.y = y;
    }

    pub fn set_button(&mut self, down: bool) {
        self.pointer.down = down;
    }

    /// Store a settled viewport. The pointer is parked at the new centre
    /// until the next move event arrives.
    pub fn apply_resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        let (cx, cy) = viewport.center();
        self.pointer.x = cx;
        self.pointer.y = cy;
    }
}
