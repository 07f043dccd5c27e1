//! Showcase options with TOML preset support.
//!
//! Typewriter texts and timing, camera projection, the phone model asset and
//! debug toggles are consolidated here. Options serialize to/from TOML; every
//! section uses `#[serde(default)]` so partial files work.

mod camera;
mod debug;
mod model;
mod typewriter;

use std::path::Path;

pub use camera::CameraOptions;
pub use debug::DebugOptions;
pub use model::ModelOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
pub use typewriter::{CursorOptions, TypewriterOptions};

use crate::error::ShowcaseError;

/// Top-level options container.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Typewriter text cycler.
    pub typewriter: TypewriterOptions,
    /// Camera projection parameters.
    pub camera: CameraOptions,
    /// Phone model asset.
    pub model: ModelOptions,
    /// Debug toggles.
    pub debug: DebugOptions,
}

impl Options {
    /// Generate JSON Schema describing the options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Parse options from TOML text. Missing fields use defaults.
    pub fn from_toml(content: &str) -> Result<Self, ShowcaseError> {
        toml::from_str(content)
            .map_err(|e| ShowcaseError::OptionsParse(e.to_string()))
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, ShowcaseError> {
        let content =
            std::fs::read_to_string(path).map_err(ShowcaseError::Io)?;
        Self::from_toml(&content)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), ShowcaseError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| ShowcaseError::Serialize(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(ShowcaseError::Io)?;
        }
        std::fs::write(path, content).map_err(ShowcaseError::Io)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed = Options::from_toml(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r#"
[typewriter]
texts = ["hello", "world"]
loop = false

[typewriter.cursor]
glyph = "_"
"#;
        let opts = Options::from_toml(toml_str).unwrap();
        assert_eq!(opts.typewriter.texts, ["hello", "world"]);
        assert!(!opts.typewriter.looping);
        assert_eq!(opts.typewriter.cursor.glyph, "_");
        // Everything else should be default
        assert_eq!(opts.typewriter.typing_speed_ms, 75);
        assert_eq!(opts.typewriter.deleting_speed_ms, 40);
        assert_eq!(opts.typewriter.pause_duration_ms, 2000);
        assert!(opts.typewriter.cursor.show);
        assert_eq!(opts.camera.fovy, 45.0);
        assert_eq!(opts.model.scale, 8.0);
    }

    #[test]
    fn malformed_toml_is_an_options_error() {
        let err = Options::from_toml("typewriter = 3").unwrap_err();
        assert!(matches!(err, ShowcaseError::OptionsParse(_)));
    }

    #[test]
    fn save_then_load() {
        let dir = std::env::temp_dir()
            .join(format!("showcase-options-{}", std::process::id()));
        let path = dir.join("preset.toml");
        let mut opts = Options::default();
        opts.model.asset = "phone.glb".to_owned();
        opts.save(&path).unwrap();
        assert_eq!(Options::load(&path).unwrap(), opts);
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(Options::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();
        assert!(props.contains_key("typewriter"));
        assert!(props.contains_key("camera"));
        assert!(props.contains_key("model"));
        assert!(props.contains_key("debug"));

        let camera = &props["camera"]["properties"];
        assert!(camera.get("fovy").is_some());
        assert!(camera.get("znear").is_none());

        let typewriter = &props["typewriter"]["properties"];
        assert!(typewriter.get("loop").is_some());
    }
}
