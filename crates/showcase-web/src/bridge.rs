//! Browser bindings for the showcase engine.
//!
//! **Inbound**: `scroll` and `resize` listeners on `window` write the
//! sampled geometry into the engine's progress cell; the phone asset is
//! fetched once with `gloo-net`.
//!
//! **Outbound**: a `requestAnimationFrame` loop runs one engine frame per
//! display refresh and hands the result to the page. The loop drops its own
//! callback once the engine is torn down.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_net::http::Request;
use phone_showcase::engine::{FrameOutput, ShowcaseEngine};
use phone_showcase::error::ShowcaseError;
use phone_showcase::scene::{PhoneModel, Scene};
use phone_showcase::scroll::ScrollGeometry;
use wasm_bindgen::prelude::*;

type SharedEngine = Rc<RefCell<ShowcaseEngine>>;

// ── Sampling ─────────────────────────────────────────────────────────────

/// Viewport size in CSS pixels, `(0, 0)` outside a browser window.
pub fn viewport_size() -> (f32, f32) {
    let Some(window) = web_sys::window() else {
        return (0.0, 0.0);
    };
    let dim = |v: Result<JsValue, JsValue>| {
        v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0) as f32
    };
    (dim(window.inner_width()), dim(window.inner_height()))
}

/// Current scroll geometry of the page.
pub fn scroll_geometry() -> ScrollGeometry {
    let Some(window) = web_sys::window() else {
        return ScrollGeometry::default();
    };
    let document_height = window
        .document()
        .and_then(|d| d.document_element())
        .map_or(0.0, |e| f64::from(e.scroll_height()));
    ScrollGeometry {
        scroll_top: window.scroll_y().unwrap_or(0.0),
        document_height,
        viewport_height: window
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0),
    }
}

// ── Inbound listeners ────────────────────────────────────────────────────

/// `scroll` and `resize` listeners on `window`. Dropping the value removes
/// them.
pub struct PageListeners {
    on_scroll: Closure<dyn FnMut()>,
    on_resize: Closure<dyn FnMut()>,
}

impl PageListeners {
    /// Register both listeners against `engine`. Returns `None` (after
    /// logging) when there is no window to listen on.
    pub fn register(engine: &SharedEngine) -> Option<Self> {
        let window = web_sys::window()?;

        let scroll_engine = engine.clone();
        let on_scroll = Closure::<dyn FnMut()>::new(move || {
            scroll_engine.borrow().handle_scroll(&scroll_geometry());
        });

        let resize_engine = engine.clone();
        let on_resize = Closure::<dyn FnMut()>::new(move || {
            let (width, height) = viewport_size();
            let mut engine = resize_engine.borrow_mut();
            engine.resize(width, height);
            // The scrollable range changes with the viewport.
            engine.handle_scroll(&scroll_geometry());
        });

        let options = web_sys::AddEventListenerOptions::new();
        options.set_passive(true);
        let added = add_all(
            &[("scroll", &on_scroll), ("resize", &on_resize)],
            |event, callback| {
                let callback: &Closure<dyn FnMut()> = callback;
                window
                    .add_event_listener_with_callback_and_add_event_listener_options(
                        event,
                        callback.as_ref().unchecked_ref(),
                        &options,
                    )
            },
            |event, callback| {
                let callback: &Closure<dyn FnMut()> = callback;
                let _ = window.remove_event_listener_with_callback(
                    event,
                    callback.as_ref().unchecked_ref(),
                );
            },
        );
        if let Err((event, e)) = added {
            log::error!("failed to add {event} listener: {e:?}");
            return None;
        }

        // Pick up a restored scroll position before the first event.
        engine.borrow().handle_scroll(&scroll_geometry());

        Some(Self {
            on_scroll,
            on_resize,
        })
    }

    fn callbacks(&self) -> [(&'static str, &Closure<dyn FnMut()>); 2] {
        [("scroll", &self.on_scroll), ("resize", &self.on_resize)]
    }
}

impl Drop for PageListeners {
    fn drop(&mut self) {
        let Some(window) = web_sys::window() else {
            return;
        };
        for (event, callback) in self.callbacks() {
            let _ = window.remove_event_listener_with_callback(
                event,
                callback.as_ref().unchecked_ref(),
            );
        }
        log::debug!("page listeners removed");
    }
}

/// Add each listener in order. On the first failure, remove the ones
/// already added and return the failing event with its error.
fn add_all<T, E>(
    listeners: &[(&'static str, T)],
    mut add: impl FnMut(&'static str, &T) -> Result<(), E>,
    mut remove: impl FnMut(&'static str, &T),
) -> Result<(), (&'static str, E)> {
    for (i, (event, target)) in listeners.iter().enumerate() {
        if let Err(e) = add(event, target) {
            for (added, target) in &listeners[..i] {
                remove(added, target);
            }
            return Err((event, e));
        }
    }
    Ok(())
}

// ── Frame loop ───────────────────────────────────────────────────────────

fn request_frame(callback: &Closure<dyn FnMut()>) -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    match window.request_animation_frame(callback.as_ref().unchecked_ref()) {
        Ok(_) => true,
        Err(e) => {
            log::error!("requestAnimationFrame failed: {e:?}");
            false
        }
    }
}

/// Run `engine.frame()` once per display refresh, passing each output and
/// the scene to `on_frame`. Stops once the engine is torn down.
pub fn start_frame_loop(
    engine: SharedEngine,
    mut on_frame: impl FnMut(&FrameOutput, &Scene) + 'static,
) {
    let slot: Rc<RefCell<Option<Closure<dyn FnMut()>>>> =
        Rc::new(RefCell::new(None));
    let inner = slot.clone();

    *slot.borrow_mut() = Some(Closure::new(move || {
        let output = engine.borrow_mut().frame();
        let Some(output) = output else {
            // Torn down: dropping our handle deregisters the loop.
            log::debug!("frame loop stopped");
            let _ = inner.borrow_mut().take();
            return;
        };
        on_frame(&output, engine.borrow().scene());
        if let Some(callback) = inner.borrow().as_ref() {
            let _ = request_frame(callback);
        }
    }));

    if let Some(callback) = slot.borrow().as_ref() {
        if request_frame(callback) {
            log::debug!("frame loop started");
        }
    };
}

// ── Asset fetch ──────────────────────────────────────────────────────────

/// Fetch and parse the phone model asset.
pub async fn fetch_model(
    url: &str,
    scale: f32,
) -> Result<PhoneModel, ShowcaseError> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| ShowcaseError::ModelLoad(format!("{url}: {e}")))?;
    if !response.ok() {
        return Err(ShowcaseError::ModelLoad(format!(
            "{url}: HTTP {}",
            response.status()
        )));
    }
    let bytes = response
        .binary()
        .await
        .map_err(|e| ShowcaseError::ModelLoad(format!("{url}: {e}")))?;
    PhoneModel::from_glb(&bytes, scale)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_all_registers_every_listener() {
        let mut added = Vec::new();
        let mut removed = 0;
        let result = add_all(
            &[("scroll", 1), ("resize", 2)],
            |event, _| {
                added.push(event);
                Ok::<(), ()>(())
            },
            |_, _| removed += 1,
        );
        assert!(result.is_ok());
        assert_eq!(added, ["scroll", "resize"]);
        assert_eq!(removed, 0);
    }

    #[test]
    fn failed_add_removes_earlier_listeners() {
        let mut removed = Vec::new();
        let result = add_all(
            &[("scroll", 1), ("resize", 2)],
            |event, _| if event == "resize" { Err("denied") } else { Ok(()) },
            |event, target| removed.push((event, *target)),
        );
        assert_eq!(result, Err(("resize", "denied")));
        assert_eq!(removed, [("scroll", 1)]);
    }

    #[test]
    fn first_failure_removes_nothing() {
        let mut removed = 0;
        let result = add_all(
            &[("scroll", ()), ("resize", ())],
            |_, _| Err(()),
            |_, _| removed += 1,
        );
        assert_eq!(result, Err(("scroll", ())));
        assert_eq!(removed, 0);
    }
}
