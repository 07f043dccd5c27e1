use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Phone model asset.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Model", inline)]
#[serde(default)]
pub struct ModelOptions {
    /// URL or path of the glTF binary.
    #[schemars(title = "Asset")]
    pub asset: String,
    /// Uniform scale applied after recentering.
    #[schemars(title = "Scale", range(min = 0.1, max = 50.0), extend("step" = 0.1))]
    pub scale: f32,
}

impl Default for ModelOptions {
    fn default() -> Self {
        Self {
            asset: "/todo_phone.glb".to_owned(),
            scale: 8.0,
        }
    }
}
