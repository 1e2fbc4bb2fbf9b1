//! Trailing-edge debouncer driven by explicit timestamps.

/// Fires once after `quiet` seconds have passed without a [`poke`](Self::poke).
#[derive(Debug, Clone)]
pub struct Debouncer {
    quiet: f64,
    deadline: Option<f64>,
}

impl Debouncer {
    pub fn new(quiet_secs: f64) -> Self {
        Self {
            quiet: quiet_secs,
            deadline: None,
        }
    }

    /// Register an event at `now`, pushing the deadline out.
    pub fn poke(&mut self, now: f64) {
        self.deadline = Some(now + self.quiet);
    }

    /// Returns `true` exactly once when the quiet window has elapsed.
    pub fn fire_if_quiet(&mut self, now: f64) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Seconds left until the pending call fires, if one is pending.
    pub fn remaining(&self, now: f64) -> Option<f64> {
        self.deadline.map(|d| (d - now).max(0.0))
    }
}
