//! The showcase engine: one frame per display refresh.
//!
//! The engine owns the scene and the progress cell the scroll handler
//! writes. Each [`ShowcaseEngine::frame`] reads the latest progress,
//! derives the visual state from scratch and applies it to the phone node.
//! Hosts call [`ShowcaseEngine::teardown`] on unmount; loops holding a
//! [`CancelToken`] clone stop on their next tick.

mod lifecycle;

use glam::Mat4;
pub use lifecycle::CancelToken;
use web_time::{Duration, Instant};

use crate::error::ShowcaseError;
use crate::options::Options;
use crate::scene::{PhoneModel, Scene};
use crate::scroll::{
    derive_visual_state, AnimationPhase, Overlays, PhonePose, ScrollGeometry,
    ScrollProgress, SharedProgress, VisualState,
};
use crate::util::frame_timing::FrameTiming;

/// Frames between FPS log lines when frame logging is on.
const FPS_LOG_INTERVAL: u64 = 300;
/// Frames slower than this are logged when frame logging is on.
const LONG_FRAME: Duration = Duration::from_millis(100);

/// Whether the phone asset has been resolved yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelStatus {
    /// Load in flight.
    Pending,
    /// Model attached.
    Loaded,
    /// Load failed; the phone stays hidden.
    Failed,
}

/// Everything a host needs to present one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameOutput {
    /// Progress the frame was derived from.
    pub progress: ScrollProgress,
    /// Phase of that progress.
    pub phase: AnimationPhase,
    /// Pose applied to the phone node.
    pub pose: PhonePose,
    /// Whether the phone is drawn (pose visible and model loaded).
    pub phone_visible: bool,
    /// Phone model world transform.
    pub model_matrix: Mat4,
    /// Camera view-projection.
    pub view_proj: Mat4,
    /// Overlay states.
    pub overlays: Overlays,
}

/// Per-frame driver for the showcase.
#[derive(Debug)]
pub struct ShowcaseEngine {
    scene: Scene,
    progress: SharedProgress,
    cancel: CancelToken,
    timing: FrameTiming,
    model_status: ModelStatus,
    last_state: Option<VisualState>,
    log_frames: bool,
}

impl ShowcaseEngine {
    /// Engine for a `width` x `height` pixel viewport.
    #[must_use]
    pub fn new(options: &Options, width: f32, height: f32) -> Self {
        log::info!(
            "showcase engine started ({width}x{height}, model {})",
            options.model.asset
        );
        Self {
            scene: Scene::new(&options.camera, width, height),
            progress: SharedProgress::new(),
            cancel: CancelToken::new(),
            timing: FrameTiming::new(),
            model_status: ModelStatus::Pending,
            last_state: None,
            log_frames: options.debug.log_frames,
        }
    }

    /// Progress cell for the scroll handler to write into.
    #[must_use]
    pub fn progress_handle(&self) -> SharedProgress {
        self.progress.clone()
    }

    /// Teardown token for loops driven alongside the engine.
    #[must_use]
    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }

    /// Record a scroll or resize event's geometry.
    pub fn handle_scroll(&self, geometry: &ScrollGeometry) {
        self.progress.store(geometry.progress());
    }

    /// Track a viewport resize.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.scene.resize(width, height);
    }

    /// Install the result of the asynchronous model load.
    ///
    /// Failure is logged and leaves the phone hidden for the rest of the
    /// session; nothing is retried.
    pub fn attach_model(&mut self, result: Result<PhoneModel, ShowcaseError>) {
        match result {
            Ok(model) => {
                log::info!(
                    "phone model loaded (size {:?})",
                    model.scaled_size()
                );
                self.scene.phone.attach_model(model);
                self.model_status = ModelStatus::Loaded;
            }
            Err(e) => {
                log::error!("failed to load phone model: {e}");
                self.model_status = ModelStatus::Failed;
            }
        }
    }

    /// Current model status.
    #[must_use]
    pub fn model_status(&self) -> ModelStatus {
        self.model_status
    }

    /// Scene state.
    #[must_use]
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Smoothed frames per second.
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.timing.fps()
    }

    /// Whether [`teardown`](Self::teardown) has run.
    #[must_use]
    pub fn is_torn_down(&self) -> bool {
        self.cancel.is_cancelled()
    }

    /// Run one frame. Returns `None` once torn down, which tells the host
    /// loop to stop rescheduling itself.
    pub fn frame(&mut self) -> Option<FrameOutput> {
        self.frame_at(Instant::now())
    }

    /// Run one frame at an explicit time (for testing).
    pub fn frame_at(&mut self, now: Instant) -> Option<FrameOutput> {
        if self.cancel.is_cancelled() {
            return None;
        }

        let progress = self.progress.load();
        let state = derive_visual_state(progress);
        self.scene.phone.apply_pose(&state.pose);
        self.timing.end_frame(now);

        if self.log_frames {
            self.log_frame(&state);
        }
        self.last_state = Some(state);

        Some(FrameOutput {
            progress,
            phase: state.phase,
            pose: state.pose,
            phone_visible: self.scene.phone.is_visible(),
            model_matrix: self.scene.phone.model_matrix(),
            view_proj: self.scene.camera.build_matrix(),
            overlays: state.overlays,
        })
    }

    /// Stop all loops. Idempotent.
    pub fn teardown(&mut self) {
        if self.cancel.cancel() {
            log::info!(
                "showcase engine torn down after {} frames",
                self.timing.frame_count()
            );
        }
    }

    fn log_frame(&self, state: &VisualState) {
        let previous = self.last_state.map(|s| s.phase);
        if previous != Some(state.phase) {
            log::debug!("phase {:?} -> {:?}", previous, state.phase);
        }
        if self.timing.frame_count() % FPS_LOG_INTERVAL == 0 {
            log::debug!(
                "{:.1} fps (last frame {:?})",
                self.timing.fps(),
                self.timing.delta()
            );
        }
        if self.timing.delta() > LONG_FRAME {
            log::debug!("long frame: {:?}", self.timing.delta());
        }
    }
}
