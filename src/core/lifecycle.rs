// Frame-loop state machine.
//
// `Idle` is terminal: it is entered at construction when animation is not
// allowed (reduced motion, no drawing surface) and nothing leaves it.
// `Stopped` and `Running` toggle through `LoopControl::start` and
// `LoopControl::stop`. The control owns the pending frame handle so the
// driver knows what to cancel.

use super::constants::MAX_FRAME_STEP_MS;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopState {
    Idle,
    Stopped,
    Running,
}

#[derive(Clone, Debug)]
pub struct LoopControl {
    state: LoopState,
    last_ms: f64,
    pending: Option<i32>,
}

impl LoopControl {
    pub fn idle() -> Self {
        Self {
            state: LoopState::Idle,
            last_ms: 0.0,
            pending: None,
        }
    }

    pub fn stopped() -> Self {
        Self {
            state: LoopState::Stopped,
            ..Self::idle()
        }
    }

    #[inline]
    pub fn state(&self) -> LoopState {
        self.state
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.state == LoopState::Running
    }

    /// Timestamp (ms) of the last start or frame.
    #[inline]
    pub fn last_timestamp(&self) -> f64 {
        self.last_ms
    }

    #[cfg(test)]
    #[inline]
    pub fn pending_frame(&self) -> Option<i32> {
        self.pending
    }

    /// Returns true when the caller must schedule the first frame.
    pub fn start(&mut self, now_ms: f64) -> bool {
        if self.state != LoopState::Stopped {
            return false;
        }
        self.state = LoopState::Running;
        self.last_ms = now_ms;
        true
    }

    pub fn frame_scheduled(&mut self, handle: i32) {
        if self.is_running() {
            self.pending = Some(handle);
        }
    }

    /// Leave `Running`. Returns the frame handle to cancel, if any; a second
    /// call has nothing left to cancel.
    pub fn stop(&mut self) -> Option<i32> {
        if self.state == LoopState::Running {
            self.state = LoopState::Stopped;
        }
        self.pending.take()
    }

    /// Called at the top of every frame callback. `None` means the loop was
    /// stopped since the frame was scheduled and the frame must do nothing.
    /// Otherwise returns the step in ms, clamped to `[0, MAX_FRAME_STEP_MS]`.
    pub fn begin_frame(&mut self, now_ms: f64) -> Option<f64> {
        self.pending = None;
        if !self.is_running() {
            return None;
        }
        let elapsed = now_ms - self.last_ms;
        self.last_ms = now_ms;
        let dt = if elapsed.is_finite() {
            elapsed.clamp(0.0, MAX_FRAME_STEP_MS)
        } else {
            0.0
        };
        Some(dt)
    }
}
