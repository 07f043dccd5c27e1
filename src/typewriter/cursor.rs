use web_time::Duration;

use crate::options::CursorOptions;

/// Fixed-period cursor blink, independent of typing.
///
/// The cursor is shown for the first half of each period and hidden for
/// the second.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CursorBlink {
    period: Duration,
}

impl CursorBlink {
    /// Blink with the given full period. A zero period never blinks.
    #[must_use]
    pub fn new(period: Duration) -> Self {
        Self { period }
    }

    /// Blink configured from cursor options.
    #[must_use]
    pub fn from_options(options: &CursorOptions) -> Self {
        Self::new(Duration::from_millis(options.blink_period_ms.into()))
    }

    /// Interval between visibility toggles.
    #[must_use]
    pub fn half_period(&self) -> Duration {
        self.period / 2
    }

    /// Whether the cursor is visible `elapsed` after the blink started.
    #[must_use]
    pub fn is_visible(&self, elapsed: Duration) -> bool {
        let period = self.period.as_micros();
        if period == 0 {
            return true;
        }
        elapsed.as_micros() % period < period / 2
    }
}
