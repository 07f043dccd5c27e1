//! Side-effecting driver around the pure typewriter machine.

use web_time::{Duration, Instant};

use super::machine::{Step, TypewriterScript, TypewriterState};

/// Applies [`Step`]s from a [`TypewriterScript`] as time passes.
///
/// Drive it either from a clock with [`poll`](Self::poll) or from one-shot
/// host timers: arm a timer for [`next_delay`](Self::next_delay) and call
/// [`fire`](Self::fire) when it elapses, which returns the delay for the
/// next timer.
#[derive(Debug, Clone)]
pub struct TypewriterRunner {
    script: TypewriterScript,
    state: TypewriterState,
    pending: Option<Step>,
    /// Time the current state was entered, for clock-driven polling.
    entered: Instant,
    cancelled: bool,
}

impl TypewriterRunner {
    /// Start at the script's initial state.
    #[must_use]
    pub fn new(script: TypewriterScript) -> Self {
        Self::starting_at(script, Instant::now())
    }

    /// Start with an explicit start time (for testing).
    #[must_use]
    pub fn starting_at(script: TypewriterScript, now: Instant) -> Self {
        let state = script.initial();
        let pending = script.step(&state);
        Self {
            script,
            state,
            pending,
            entered: now,
            cancelled: false,
        }
    }

    /// Current machine state.
    #[must_use]
    pub fn state(&self) -> TypewriterState {
        self.state
    }

    /// Text currently displayed.
    #[must_use]
    pub fn displayed(&self) -> &str {
        self.script.displayed(&self.state)
    }

    /// Delay until the next transition, `None` when nothing more is
    /// scheduled (finished or cancelled).
    #[must_use]
    pub fn next_delay(&self) -> Option<Duration> {
        self.pending.map(|step| step.delay)
    }

    /// Whether no further transition is scheduled.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.pending.is_none()
    }

    /// Apply the pending transition now. Returns the delay for the
    /// following one.
    pub fn fire(&mut self) -> Option<Duration> {
        if let Some(step) = self.pending {
            self.entered += step.delay;
            self.apply(step);
        }
        self.next_delay()
    }

    /// Apply every transition due by `now`. Returns whether the displayed
    /// state changed.
    pub fn poll(&mut self, now: Instant) -> bool {
        let mut changed = false;
        while let Some(step) = self.pending {
            let due = self.entered + step.delay;
            if due > now {
                break;
            }
            // Advance from the deadline, not from `now`, to keep cadence
            // when frames arrive late.
            self.entered = due;
            self.apply(step);
            changed = true;
        }
        changed
    }

    /// Stop scheduling. The displayed text stays as it is.
    pub fn cancel(&mut self) {
        if !self.cancelled {
            log::debug!("typewriter cancelled at {:?}", self.state);
        }
        self.cancelled = true;
        self.pending = None;
    }

    fn apply(&mut self, step: Step) {
        self.state = step.next;
        self.pending = if self.cancelled {
            None
        } else {
            self.script.step(&self.state)
        };
    }
}
