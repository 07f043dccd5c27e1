//! Pure typewriter state machine.
//!
//! A [`TypewriterScript`] owns the texts and timing; [`TypewriterState`] is
//! the small `Copy` cursor into it. [`TypewriterScript::step`] answers "what
//! happens next, and after how long" without touching any clock, so the
//! whole cycle can be walked in tests.

use web_time::Duration;

use crate::error::ShowcaseError;
use crate::options::TypewriterOptions;

/// Where the cycler is within the current text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    /// Appending characters.
    Typing,
    /// Holding the fully typed text.
    Pausing,
    /// Removing characters.
    Deleting,
    /// Last text typed with looping off; nothing more will happen.
    Finished,
}

/// Position of the cycler: which text, how much of it is shown, and what
/// it is doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypewriterState {
    /// Index of the active text.
    pub index: usize,
    /// Number of characters of the active text currently displayed.
    pub shown: usize,
    /// Current stage.
    pub stage: Stage,
}

/// A scheduled transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    /// Wait before applying `next`.
    pub delay: Duration,
    /// State after the wait.
    pub next: TypewriterState,
}

/// Per-character and pause timings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypewriterTiming {
    /// Delay before each typed character.
    pub typing: Duration,
    /// Delay before each deleted character.
    pub deleting: Duration,
    /// Hold on a fully typed text.
    pub pause: Duration,
}

impl TypewriterTiming {
    /// Timings from the options' millisecond fields.
    #[must_use]
    pub fn from_options(options: &TypewriterOptions) -> Self {
        Self {
            typing: Duration::from_millis(options.typing_speed_ms.into()),
            deleting: Duration::from_millis(options.deleting_speed_ms.into()),
            pause: Duration::from_millis(options.pause_duration_ms.into()),
        }
    }
}

/// The texts to cycle and how to cycle them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypewriterScript {
    texts: Vec<String>,
    /// Length of each text in characters, not bytes.
    lengths: Vec<usize>,
    timing: TypewriterTiming,
    looping: bool,
}

impl TypewriterScript {
    /// Build a script. An empty text list is a configuration error.
    pub fn new(
        texts: Vec<String>,
        timing: TypewriterTiming,
        looping: bool,
    ) -> Result<Self, ShowcaseError> {
        if texts.is_empty() {
            return Err(ShowcaseError::EmptyTypewriterTexts);
        }
        let lengths = texts.iter().map(|t| t.chars().count()).collect();
        Ok(Self {
            texts,
            lengths,
            timing,
            looping,
        })
    }

    /// Build a script from typewriter options.
    pub fn from_options(
        options: &TypewriterOptions,
    ) -> Result<Self, ShowcaseError> {
        Self::new(
            options.texts.clone(),
            TypewriterTiming::from_options(options),
            options.looping,
        )
    }

    /// Number of texts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.texts.len()
    }

    /// Always false: construction rejects empty scripts.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.texts.is_empty()
    }

    /// Timings in use.
    #[must_use]
    pub fn timing(&self) -> TypewriterTiming {
        self.timing
    }

    /// Starting state: nothing typed on the first text.
    #[must_use]
    pub fn initial(&self) -> TypewriterState {
        self.settle(TypewriterState {
            index: 0,
            shown: 0,
            stage: Stage::Typing,
        })
    }

    /// The prefix of the active text that `state` displays.
    #[must_use]
    pub fn displayed(&self, state: &TypewriterState) -> &str {
        let Some(text) = self.texts.get(state.index) else {
            return "";
        };
        let end = text
            .char_indices()
            .nth(state.shown)
            .map_or(text.len(), |(byte, _)| byte);
        &text[..end]
    }

    /// Next transition from `state`, or `None` once finished.
    #[must_use]
    pub fn step(&self, state: &TypewriterState) -> Option<Step> {
        let (delay, next) = match state.stage {
            Stage::Typing => (
                self.timing.typing,
                TypewriterState {
                    shown: state.shown + 1,
                    ..*state
                },
            ),
            Stage::Pausing => (
                self.timing.pause,
                TypewriterState {
                    stage: Stage::Deleting,
                    ..*state
                },
            ),
            Stage::Deleting => (
                self.timing.deleting,
                TypewriterState {
                    shown: state.shown.saturating_sub(1),
                    ..*state
                },
            ),
            Stage::Finished => return None,
        };
        Some(Step {
            delay,
            next: self.settle(next),
        })
    }

    fn length(&self, index: usize) -> usize {
        self.lengths.get(index).copied().unwrap_or(0)
    }

    fn is_last(&self, index: usize) -> bool {
        index + 1 >= self.texts.len()
    }

    /// Resolve the instantaneous transitions: a fully typed text starts its
    /// pause (or finishes), a fully deleted one moves on to the next text.
    fn settle(&self, state: TypewriterState) -> TypewriterState {
        let state = match state.stage {
            Stage::Deleting if state.shown == 0 => TypewriterState {
                index: (state.index + 1) % self.texts.len(),
                shown: 0,
                stage: Stage::Typing,
            },
            _ => state,
        };
        match state.stage {
            Stage::Typing if state.shown >= self.length(state.index) => {
                let stage = if self.looping || !self.is_last(state.index) {
                    Stage::Pausing
                } else {
                    Stage::Finished
                };
                TypewriterState {
                    shown: self.length(state.index),
                    stage,
                    ..state
                }
            }
            _ => state,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn timing() -> TypewriterTiming {
        TypewriterTiming {
            typing: Duration::from_millis(75),
            deleting: Duration::from_millis(40),
            pause: Duration::from_millis(2000),
        }
    }

    fn script(texts: &[&str], looping: bool) -> TypewriterScript {
        TypewriterScript::new(
            texts.iter().map(|t| (*t).to_owned()).collect(),
            timing(),
            looping,
        )
        .unwrap()
    }

    #[test]
    fn empty_texts_are_rejected() {
        let err = TypewriterScript::new(Vec::new(), timing(), true);
        assert!(matches!(err, Err(ShowcaseError::EmptyTypewriterTexts)));
    }

    #[test]
    fn types_one_character_per_step() {
        let s = script(&["abc"], true);
        let mut state = s.initial();
        assert_eq!(s.displayed(&state), "");
        for expected in ["a", "ab", "abc"] {
            let step = s.step(&state).unwrap();
            assert_eq!(step.delay, Duration::from_millis(75));
            state = step.next;
            assert_eq!(s.displayed(&state), expected);
        }
        assert_eq!(state.stage, Stage::Pausing);
    }

    #[test]
    fn pause_then_delete() {
        let s = script(&["ab"], true);
        let paused = TypewriterState {
            index: 0,
            shown: 2,
            stage: Stage::Pausing,
        };
        let step = s.step(&paused).unwrap();
        assert_eq!(step.delay, Duration::from_millis(2000));
        assert_eq!(step.next.stage, Stage::Deleting);
        assert_eq!(s.displayed(&step.next), "ab");

        let step = s.step(&step.next).unwrap();
        assert_eq!(step.delay, Duration::from_millis(40));
        assert_eq!(s.displayed(&step.next), "a");
    }

    #[test]
    fn single_looping_text_is_periodic() {
        let s = script(&["hey"], true);
        let start = s.initial();
        let mut state = start;
        let mut total = Duration::ZERO;
        let mut saw_deleting = false;
        // 3 typed + 1 pause + 3 deleted
        for _ in 0..7 {
            let step = s.step(&state).unwrap();
            total += step.delay;
            state = step.next;
            saw_deleting |= state.stage == Stage::Deleting;
        }
        assert!(saw_deleting);
        assert_eq!(state, start);
        assert_eq!(s.displayed(&state), "");
        assert_eq!(total, Duration::from_millis(3 * 75 + 2000 + 3 * 40));
    }

    #[test]
    fn advances_and_wraps_through_texts() {
        let s = script(&["a", "b"], true);
        let mut state = s.initial();
        let mut indices = Vec::new();
        for _ in 0..12 {
            state = s.step(&state).unwrap().next;
            if state.stage == Stage::Pausing {
                indices.push(state.index);
            }
        }
        assert_eq!(indices, [0, 1, 0, 1]);
    }

    #[test]
    fn non_looping_stops_on_last_text() {
        let s = script(&["hi"], false);
        let mut state = s.initial();
        state = s.step(&state).unwrap().next;
        state = s.step(&state).unwrap().next;
        assert_eq!(state.stage, Stage::Finished);
        assert_eq!(s.displayed(&state), "hi");
        assert!(s.step(&state).is_none());
        assert!(s.step(&state).is_none());
    }

    #[test]
    fn non_looping_still_deletes_earlier_texts() {
        let s = script(&["a", "b"], false);
        let mut state = s.initial();
        state = s.step(&state).unwrap().next;
        assert_eq!(state.stage, Stage::Pausing);
        while let Some(step) = s.step(&state) {
            state = step.next;
        }
        assert_eq!(state.index, 1);
        assert_eq!(s.displayed(&state), "b");
    }

    #[test]
    fn multibyte_text_types_per_character() {
        let s = script(&["极创客"], true);
        let state = s.step(&s.initial()).unwrap().next;
        assert_eq!(s.displayed(&state), "极");
    }

    #[test]
    fn empty_text_in_list_is_skipped_through_a_pause() {
        let s = script(&["", "x"], true);
        let start = s.initial();
        assert_eq!(start.stage, Stage::Pausing);
        let deleting = s.step(&start).unwrap().next;
        assert_eq!(deleting.index, 1);
        assert_eq!(deleting.stage, Stage::Typing);
    }
}
