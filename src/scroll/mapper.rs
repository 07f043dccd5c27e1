//! Scroll-to-animation mapping.
//!
//! [`derive_visual_state`] is the single source of truth for everything the
//! page shows as a function of scroll position. It is pure: the same
//! progress always yields the same pose and overlays, whatever order frames
//! arrive in.

use std::f32::consts::FRAC_PI_2;

use super::phase::{AnimationPhase, ASCEND_END};
use super::ScrollProgress;
use crate::util::easing::EasingFunction;

/// Phone height below the frame at the top of the page.
const INTRO_START_Y: f32 = -5.0;
/// Height the phone rises to by the end of the ascend phase.
const ASCEND_RISE: f32 = 8.0;
/// Phone stays hidden until the page has scrolled past this.
const PHONE_REVEAL_PROGRESS: f32 = 0.005;
/// Intro-local progress where the main title starts to fade.
const TITLE_FADE_START: f32 = 0.05;
/// Intro-local span over which the main title fades out.
const TITLE_FADE_SPAN: f32 = 0.4;
/// Intro-local progress where project info appears.
const INFO_REVEAL_T: f32 = 0.005;
/// Project info peaks at a third of the intro and is gone by two thirds.
const INFO_SPEEDUP: f32 = 3.0;
/// Progress span over which "coming soon" fades in after the ascend.
const COMING_SOON_FADE_SPAN: f32 = 0.1;

/// Pose of the phone node in world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhonePose {
    /// Vertical position.
    pub position_y: f32,
    /// Rotation about the X axis in radians.
    pub rotation_x: f32,
    /// Rotation about the Y axis in radians.
    pub rotation_y: f32,
    /// Whether the phone should be drawn.
    pub visible: bool,
}

impl PhonePose {
    /// Lying face-up below the frame, hidden.
    pub const INITIAL: Self = Self {
        position_y: INTRO_START_Y,
        rotation_x: FRAC_PI_2,
        rotation_y: 0.0,
        visible: false,
    };
}

/// Visibility and opacity of one overlay text block.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlayState {
    /// Whether the overlay is present in the page.
    pub visible: bool,
    /// Opacity in `[0, 1]`.
    pub opacity: f32,
}

impl OverlayState {
    /// Not shown.
    pub const HIDDEN: Self = Self {
        visible: false,
        opacity: 0.0,
    };
    /// Fully shown.
    pub const SHOWN: Self = Self {
        visible: true,
        opacity: 1.0,
    };

    /// Whether anything of the overlay can be seen.
    #[must_use]
    pub fn is_perceptible(&self) -> bool {
        self.visible && self.opacity > 0.0
    }
}

/// The three overlay texts of the page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Overlays {
    /// Studio headline with the typewriter slogans.
    pub main_title: OverlayState,
    /// Project name and tagline, shown briefly during the intro.
    pub project_info: OverlayState,
    /// Closing "coming soon" message.
    pub coming_soon: OverlayState,
}

impl Overlays {
    /// Initial page: title shown, everything else hidden.
    pub const INITIAL: Self = Self {
        main_title: OverlayState::SHOWN,
        project_info: OverlayState::HIDDEN,
        coming_soon: OverlayState::HIDDEN,
    };

    const ALL_HIDDEN: Self = Self {
        main_title: OverlayState::HIDDEN,
        project_info: OverlayState::HIDDEN,
        coming_soon: OverlayState::HIDDEN,
    };
}

/// Everything derived from one scroll progress sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisualState {
    /// Phase the progress fell into.
    pub phase: AnimationPhase,
    /// Phone pose.
    pub pose: PhonePose,
    /// Overlay states.
    pub overlays: Overlays,
}

/// Derive phone pose and overlay states from scroll progress.
#[must_use]
pub fn derive_visual_state(progress: ScrollProgress) -> VisualState {
    let phase = AnimationPhase::of(progress);
    let t = phase.local_t(progress);
    let (pose, overlays) = match phase {
        AnimationPhase::Intro => intro(progress, t),
        AnimationPhase::Ascend => ascend(t),
        AnimationPhase::Done => done(progress),
    };
    VisualState {
        phase,
        pose,
        overlays,
    }
}

fn intro(progress: ScrollProgress, t: f32) -> (PhonePose, Overlays) {
    let e = EasingFunction::QuarticOut.evaluate(t);
    let pose = PhonePose {
        position_y: INTRO_START_Y * (1.0 - e),
        rotation_x: FRAC_PI_2 * (1.0 - e),
        rotation_y: 0.0,
        visible: progress.value() > PHONE_REVEAL_PROGRESS,
    };

    let main_title = if t >= TITLE_FADE_START {
        let fade = (t - TITLE_FADE_START) / TITLE_FADE_SPAN;
        OverlayState {
            visible: fade < 1.0,
            opacity: (1.0 - fade).max(0.0),
        }
    } else {
        OverlayState::SHOWN
    };

    let project_info = if t >= INFO_REVEAL_T {
        // 1 - (1 - 3t)^2, clamped: quadratic rise to 1 at t = 1/3, then
        // mirrored back down to 0 at t = 2/3.
        let mirrored = 1.0 - (1.0 - INFO_SPEEDUP * t).abs();
        OverlayState {
            visible: true,
            opacity: EasingFunction::QuadraticOut.evaluate(mirrored),
        }
    } else {
        OverlayState::HIDDEN
    };

    let overlays = Overlays {
        main_title,
        project_info,
        coming_soon: OverlayState::HIDDEN,
    };
    (pose, overlays)
}

fn ascend(t: f32) -> (PhonePose, Overlays) {
    let e = EasingFunction::CubicOut.evaluate(t);
    let pose = PhonePose {
        position_y: ASCEND_RISE * e,
        rotation_x: 0.0,
        rotation_y: 0.0,
        visible: true,
    };
    (pose, Overlays::ALL_HIDDEN)
}

fn done(progress: ScrollProgress) -> (PhonePose, Overlays) {
    let pose = PhonePose {
        position_y: ASCEND_RISE,
        rotation_x: 0.0,
        rotation_y: 0.0,
        visible: false,
    };
    let opacity = ((progress.value() - ASCEND_END) / COMING_SOON_FADE_SPAN)
        .clamp(0.0, 1.0);
    let overlays = Overlays {
        coming_soon: OverlayState {
            visible: true,
            opacity,
        },
        ..Overlays::ALL_HIDDEN
    };
    (pose, overlays)
}
