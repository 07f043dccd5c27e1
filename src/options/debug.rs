use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Debug toggles.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default, JsonSchema,
)]
#[schemars(title = "Debug", inline)]
#[serde(default)]
pub struct DebugOptions {
    /// Log phase changes and a periodic FPS line from the frame loop.
    #[schemars(title = "Log Frames")]
    pub log_frames: bool,
}
