//! Typewriter text cycler: a pure state machine over
//! {Typing, Pausing, Deleting, Finished}, a runner that schedules it, and
//! the blinking cursor.

mod cursor;
pub mod machine;
mod runner;

pub use cursor::CursorBlink;
pub use machine::{
    Stage, Step, TypewriterScript, TypewriterState, TypewriterTiming,
};
pub use runner::TypewriterRunner;
