//! Page markup: header, overlays and the posed phone.

use dioxus::prelude::*;
use phone_showcase::engine::FrameOutput;
use phone_showcase::options::Options;
use phone_showcase::scene::Scene;
use phone_showcase::scroll::{OverlayState, Overlays};

/// CSS transform of the phone element for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhoneStyle {
    /// Vertical offset from the viewport center, screen-down positive.
    pub translate_y_px: f32,
    /// Rotation about X in radians, in CSS (y-down) orientation.
    pub rotate_x: f32,
    /// Rotation about Y in radians.
    pub rotate_y: f32,
    /// Element width.
    pub width_px: f32,
    /// Element height.
    pub height_px: f32,
    /// CSS perspective reproducing the scene camera.
    pub perspective_px: f32,
}

impl PhoneStyle {
    /// Project a frame's phone pose into CSS space. `None` when the phone is
    /// not drawn.
    pub fn from_frame(output: &FrameOutput, scene: &Scene) -> Option<Self> {
        if !output.phone_visible {
            return None;
        }
        let size = scene.phone.model()?.scaled_size();
        let ppu = scene.pixels_per_unit();
        // Scene space is y-up; CSS is y-down, which also flips the sense of
        // rotation about X.
        Some(Self {
            translate_y_px: -output.pose.position_y * ppu,
            rotate_x: -output.pose.rotation_x,
            rotate_y: output.pose.rotation_y,
            width_px: size.x * ppu,
            height_px: size.y * ppu,
            perspective_px: scene.camera.css_perspective(scene.viewport().1),
        })
    }
}

/// What the page shows for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageFrame {
    /// Overlay states.
    pub overlays: Overlays,
    /// Phone element transform, if the phone is drawn.
    pub phone: Option<PhoneStyle>,
}

impl PageFrame {
    /// Top of the page before the first frame.
    pub const INITIAL: Self = Self {
        overlays: Overlays::INITIAL,
        phone: None,
    };

    /// Build from an engine frame.
    pub fn new(output: &FrameOutput, scene: &Scene) -> Self {
        Self {
            overlays: output.overlays,
            phone: PhoneStyle::from_frame(output, scene),
        }
    }
}

/// Typewriter pause on the landing page's title slogans.
pub const TITLE_PAUSE_MS: u32 = 1500;

/// Options for the landing page: defaults, with the title typewriter
/// holding each slogan for [`TITLE_PAUSE_MS`].
pub fn page_options() -> Options {
    let mut options = Options::default();
    options.typewriter.pause_duration_ms = TITLE_PAUSE_MS;
    options
}

/// Fixed site header with the brand and outbound links.
#[component]
pub fn Header() -> Element {
    rsx! {
        header { class: "site-header",
            a {
                class: "brand",
                href: "https://jck.hgyjllk.top/",
                target: "_blank",
                rel: "noopener noreferrer",
                "极创客"
            }
            nav {
                a {
                    class: "star-button",
                    href: "https://github.com/HGYJLLK?tab=repositories",
                    target: "_blank",
                    rel: "noopener noreferrer",
                    "★ us on Github"
                }
                a {
                    href: "https://blog.hgyjllk.top/",
                    target: "_blank",
                    rel: "noopener noreferrer",
                    "Blog"
                }
                a {
                    href: "https://todo.hgyjllk.top/",
                    target: "_blank",
                    rel: "noopener noreferrer",
                    "Pricing"
                }
            }
        }
    }
}

/// Fixed overlay faded to the frame's opacity. While hidden it is absent,
/// or with `persistent` kept mounted under `display: none` so stateful
/// children keep running.
#[component]
pub fn Overlay(
    state: OverlayState,
    class: &'static str,
    #[props(default)] persistent: bool,
    children: Element,
) -> Element {
    if !state.visible && !persistent {
        return rsx! {};
    }
    let display = if state.visible { "block" } else { "none" };
    rsx! {
        div {
            class: "overlay {class}",
            style: "opacity: {state.opacity}; display: {display};",
            {children}
        }
    }
}

/// The phone, posed with a CSS 3D transform.
#[component]
pub fn Phone(style: Option<PhoneStyle>) -> Element {
    let Some(s) = style else {
        return rsx! {};
    };
    rsx! {
        div {
            class: "phone-stage",
            style: "perspective: {s.perspective_px}px;",
            div {
                class: "phone",
                style: "width: {s.width_px}px; height: {s.height_px}px; \
                        transform: translate(-50%, -50%) \
                        translate3d(0, {s.translate_y_px}px, 0) \
                        rotateX({s.rotate_x}rad) rotateY({s.rotate_y}rad);",
                div { class: "phone__screen" }
            }
        }
    }
}

/// Page stylesheet, injected once at the root.
pub const STYLES: &str = r"
body { margin: 0; font-family: system-ui, sans-serif; }
.background {
  position: fixed; inset: 0; z-index: 0; pointer-events: none;
  background: linear-gradient(135deg, #f5f7fa 0%, #c3cfe2 100%);
}
.site-header {
  position: fixed; top: 0; left: 0; right: 0; z-index: 20;
  padding: 16px 32px; display: flex; align-items: center;
  justify-content: space-between; background: rgba(255, 255, 255, 0.9);
  backdrop-filter: blur(10px); border-bottom: 1px solid rgba(0, 0, 0, 0.05);
}
.site-header a { text-decoration: none; color: #333; }
.site-header nav { display: flex; align-items: center; gap: 24px; }
.brand { font-weight: bold; font-size: 20px; }
.star-button { border: 1px solid #ccc; border-radius: 8px; padding: 8px 16px; font-size: 14px; }
.overlay {
  position: fixed; left: 50%; transform: translate(-50%, -50%);
  z-index: 10; text-align: center; color: #333; pointer-events: none;
}
.main-title { top: 50%; width: min(800px, 90vw); }
.main-title h1 { font-size: clamp(2.5rem, 6vw, 4rem); margin: 0 0 1.5rem; }
.project-info { top: 50%; }
.project-info h2 { font-size: clamp(2rem, 5vw, 3rem); margin: 0; }
.project-info p { font-size: 1.25rem; margin: 0.5rem 0 0; opacity: 0.8; }
.coming-soon { top: 50%; font-weight: bold; }
.coming-soon h2 { font-size: clamp(3rem, 10vw, 6rem); margin: 0; line-height: 1.1; }
.coming-soon p { font-size: clamp(1.5rem, 5vw, 3rem); margin: 1rem 0 0; font-weight: 400; opacity: 0.8; }
.phone-stage { position: fixed; inset: 0; z-index: 5; pointer-events: none; }
.phone {
  position: absolute; left: 50%; top: 50%;
  border-radius: 12% / 6%; background: #1c1c1e;
  box-shadow: 0 30px 60px rgba(0, 0, 0, 0.3);
}
.phone__screen {
  position: absolute; inset: 3%; border-radius: 10% / 5%;
  background: linear-gradient(160deg, #6a8dff 0%, #b06ab3 100%);
}
.text-type { display: inline-block; white-space: pre-wrap; font-size: 1.25rem; color: #6b7280; line-height: 1.7; }
.text-type__cursor { margin-left: 0.25rem; display: inline-block; }
.scroll-spacer { height: 500vh; }
";
