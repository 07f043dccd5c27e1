//! Dioxus web app for the phone showcase landing page.
//!
//! Compiled to WASM. Owns one [`ShowcaseEngine`], feeds it scroll and resize
//! events, runs its frame loop on `requestAnimationFrame` and renders the
//! overlays, the posed phone and the typewriter text from each frame.

mod bridge;
mod page;
mod typewriter;

use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use phone_showcase::engine::ShowcaseEngine;

use crate::page::{page_options, Header, Overlay, PageFrame, Phone, STYLES};
use crate::typewriter::TextType;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::warn_1(&format!("logger init failed: {e}").into());
    }
    launch(app);
}

fn app() -> Element {
    let options = use_hook(page_options);
    let mut frame: Signal<PageFrame> = use_signal(|| PageFrame::INITIAL);

    let engine = use_hook(|| {
        let (width, height) = bridge::viewport_size();
        Rc::new(RefCell::new(ShowcaseEngine::new(&options, width, height)))
    });
    let listeners: Rc<RefCell<Option<bridge::PageListeners>>> =
        use_hook(|| Rc::new(RefCell::new(None)));

    // Mount once: listeners, frame loop, model fetch.
    {
        let engine = engine.clone();
        let listeners = listeners.clone();
        let model = options.model.clone();
        use_hook(move || {
            *listeners.borrow_mut() = bridge::PageListeners::register(&engine);

            bridge::start_frame_loop(engine.clone(), move |output, scene| {
                let next = PageFrame::new(output, scene);
                if *frame.peek() != next {
                    frame.set(next);
                }
            });

            let _task = spawn(async move {
                let result = bridge::fetch_model(&model.asset, model.scale).await;
                engine.borrow_mut().attach_model(result);
            });
        });
    }

    use_drop(move || {
        engine.borrow_mut().teardown();
        // Dropping the listeners removes them from `window`.
        let _ = listeners.borrow_mut().take();
    });

    let current = frame();
    let overlays = current.overlays;

    rsx! {
        style { {STYLES} }
        div { class: "background" }
        Header {}
        Phone { style: current.phone }
        Overlay { state: overlays.main_title, class: "main-title", persistent: true,
            h1 { "极创客工作室" }
            TextType { options: options.typewriter.clone(), class: "services".to_owned() }
        }
        Overlay { state: overlays.project_info, class: "project-info",
            h2 { "To-Do 项目" }
            p { "由 React 倾力打造" }
        }
        Overlay { state: overlays.coming_soon, class: "coming-soon",
            h2 { "敬请期待" }
            p { "更多精彩项目即将推出" }
        }
        div { class: "scroll-spacer" }
    }
}
