use super::ScrollProgress;

/// Progress at which the phone finishes turning to face the viewer.
pub const INTRO_END: f32 = 0.3;
/// Progress at which the phone has risen out of view.
pub const ASCEND_END: f32 = 0.6;

/// Partition of scroll progress into animation phases.
///
/// Always derived from the current progress, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnimationPhase {
    /// `[0, 0.3]`: phone rises from below while rotating upright.
    Intro,
    /// `(0.3, 0.6]`: phone, now upright, moves up and out of frame.
    Ascend,
    /// `(0.6, 1]`: phone hidden, "coming soon" fades in.
    Done,
}

impl AnimationPhase {
    /// Phase containing `progress`.
    #[must_use]
    pub fn of(progress: ScrollProgress) -> Self {
        let p = progress.value();
        if p <= INTRO_END {
            Self::Intro
        } else if p <= ASCEND_END {
            Self::Ascend
        } else {
            Self::Done
        }
    }

    /// Progress normalized to `[0, 1]` within this phase.
    #[must_use]
    pub fn local_t(self, progress: ScrollProgress) -> f32 {
        let p = progress.value();
        let (start, end) = match self {
            Self::Intro => (0.0, INTRO_END),
            Self::Ascend => (INTRO_END, ASCEND_END),
            Self::Done => (ASCEND_END, 1.0),
        };
        ((p - start) / (end - start)).clamp(0.0, 1.0)
    }
}
