//! Typewriter text component.
//!
//! Wraps a [`TypewriterRunner`] in a signal and drives it with cascading
//! one-shot `gloo-timers` timeouts: every state change re-arms exactly one
//! timeout for the next step. Dropping a timeout cancels it, so unmounting
//! the component stops the cycle.

use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use gloo_timers::callback::{Interval, Timeout};
use phone_showcase::options::{CursorOptions, TypewriterOptions};
use phone_showcase::typewriter::{
    CursorBlink, TypewriterRunner, TypewriterScript,
};
use web_time::{Duration, Instant};

fn millis(delay: Duration) -> u32 {
    u32::try_from(delay.as_millis()).unwrap_or(u32::MAX)
}

/// Cursor visibility, toggled every half blink period. Always visible
/// when the cursor is hidden by options (the caller skips rendering then).
fn use_cursor_blink(options: &CursorOptions) -> Signal<bool> {
    let mut visible = use_signal(|| true);
    let blink = CursorBlink::from_options(options);
    let enabled = options.show;
    let _interval = use_hook(move || {
        let started = Instant::now();
        let half = millis(blink.half_period()).max(1);
        enabled.then(|| {
            Rc::new(Interval::new(half, move || {
                visible.set(blink.is_visible(started.elapsed()));
            }))
        })
    });
    visible
}

/// Text that types itself, pauses, deletes, and moves to the next entry.
#[component]
pub fn TextType(options: TypewriterOptions, class: String) -> Element {
    let mut runner = use_signal(|| {
        match TypewriterScript::from_options(&options) {
            Ok(script) => Some(TypewriterRunner::new(script)),
            Err(e) => {
                log::warn!("typewriter disabled: {e}");
                None
            }
        }
    });
    let timer: Rc<RefCell<Option<Timeout>>> =
        use_hook(|| Rc::new(RefCell::new(None)));
    let cursor_visible = use_cursor_blink(&options.cursor);

    let slot = timer.clone();
    let _ = use_effect(move || {
        let delay = runner
            .read()
            .as_ref()
            .and_then(TypewriterRunner::next_delay);
        // Replacing the slot drops, and so cancels, any earlier timeout.
        *slot.borrow_mut() = delay.map(|delay| {
            Timeout::new(millis(delay), move || {
                if let Some(r) = runner.write().as_mut() {
                    let _ = r.fire();
                }
            })
        });
    });

    use_drop(move || {
        let _ = timer.borrow_mut().take();
        if let Ok(mut r) = runner.try_write() {
            if let Some(r) = r.as_mut() {
                r.cancel();
            }
        }
    });

    let guard = runner.read();
    let Some(active) = guard.as_ref() else {
        return rsx! {};
    };
    let text = active.displayed().to_owned();
    let cursor_opacity = if cursor_visible() { 1 } else { 0 };

    rsx! {
        div { class: "text-type {class}",
            span { class: "text-type__content", "{text}" }
            if options.cursor.show {
                span {
                    class: "text-type__cursor",
                    style: "opacity: {cursor_opacity};",
                    "{options.cursor.glyph}"
                }
            }
        }
    }
}
