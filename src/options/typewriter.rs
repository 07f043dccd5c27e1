use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Blinking cursor drawn after the typed text.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
#[schemars(title = "Cursor", inline)]
#[serde(default)]
pub struct CursorOptions {
    /// Whether the cursor is rendered at all.
    #[schemars(title = "Show Cursor")]
    pub show: bool,
    /// Glyph used for the cursor.
    #[schemars(title = "Glyph")]
    pub glyph: String,
    /// Full on/off blink cycle in milliseconds.
    #[schemars(title = "Blink Period (ms)", range(min = 100, max = 3000))]
    pub blink_period_ms: u32,
}

impl Default for CursorOptions {
    fn default() -> Self {
        Self {
            show: true,
            glyph: "|".to_owned(),
            blink_period_ms: 700,
        }
    }
}

/// Typewriter text cycler configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
#[schemars(title = "Typewriter", inline)]
#[serde(default)]
pub struct TypewriterOptions {
    /// Texts typed in order.
    #[schemars(title = "Texts")]
    pub texts: Vec<String>,
    /// Delay before each typed character, in milliseconds.
    #[schemars(title = "Typing Speed (ms)", range(min = 5, max = 1000))]
    pub typing_speed_ms: u32,
    /// Delay before each deleted character, in milliseconds.
    #[schemars(title = "Deleting Speed (ms)", range(min = 5, max = 1000))]
    pub deleting_speed_ms: u32,
    /// Pause on a fully typed text before deleting, in milliseconds.
    #[schemars(title = "Pause (ms)", range(min = 0, max = 10000))]
    pub pause_duration_ms: u32,
    /// Wrap around after the last text instead of stopping on it.
    #[serde(rename = "loop")]
    #[schemars(title = "Loop")]
    pub looping: bool,
    /// Cursor appearance.
    pub cursor: CursorOptions,
}

impl Default for TypewriterOptions {
    fn default() -> Self {
        Self {
            texts: [
                "我们精通UI设计、小程序和网页前后端开发。",
                "我们擅长高效的Python脚本和自动化解决方案。",
                "我们提供前沿的嵌入式及IoT物联网技术。",
                "我们是「极创客」，您的全能技术伙伴。",
            ]
            .into_iter()
            .map(str::to_owned)
            .collect(),
            typing_speed_ms: 75,
            deleting_speed_ms: 40,
            pause_duration_ms: 2000,
            looping: true,
            cursor: CursorOptions::default(),
        }
    }
}
