/// Trailing-edge debouncer over millisecond timestamps.
///
/// Every [`notify`](Debouncer::notify) pushes the deadline out by the quiet
/// period; [`poll`](Debouncer::poll) fires once the deadline has passed and
/// then disarms until the next notify.
#[derive(Clone, Debug)]
pub struct Debouncer {
    quiet_ms: f64,
    deadline: Option<f64>,
}

// Browser timers and performance.now() do not tick in lockstep.
const TIMER_SLACK_MS: f64 = 1.0;

impl Debouncer {
    pub fn new(quiet_ms: f64) -> Self {
        Self {
            quiet_ms: quiet_ms.max(0.0),
            deadline: None,
        }
    }

    #[inline]
    pub fn quiet_ms(&self) -> f64 {
        self.quiet_ms
    }

    #[inline]
    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Record an event at `now_ms` and return the new deadline.
    pub fn notify(&mut self, now_ms: f64) -> f64 {
        let deadline = now_ms + self.quiet_ms;
        self.deadline = Some(deadline);
        deadline
    }

    pub fn poll(&mut self, now_ms: f64) -> bool {
        match self.deadline {
            Some(deadline) if now_ms + TIMER_SLACK_MS >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    /// The quiet-period timer went off. Coarse clocks can report a time
    /// short of the deadline even though the timer waited the full period,
    /// so any pending burst settles here.
    pub fn timer_fired(&mut self, now_ms: f64) -> bool {
        if self.poll(now_ms) {
            return true;
        }
        self.deadline.take().is_some()
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }
}
