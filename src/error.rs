//! Crate-level error types.

use std::fmt;

/// Errors produced by the showcase crate.
#[derive(Debug)]
pub enum ShowcaseError {
    /// Failed to load or interpret the phone model asset.
    ModelLoad(String),
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing failure.
    OptionsParse(String),
    /// Failed to serialize options or exported data.
    Serialize(String),
    /// The typewriter was configured without any texts to cycle.
    EmptyTypewriterTexts,
}

impl fmt::Display for ShowcaseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ModelLoad(msg) => write!(f, "model load error: {msg}"),
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::Serialize(msg) => write!(f, "serialization error: {msg}"),
            Self::EmptyTypewriterTexts => {
                write!(f, "typewriter needs at least one text to cycle")
            }
        }
    }
}

impl std::error::Error for ShowcaseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ShowcaseError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for ShowcaseError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serialize(e.to_string())
    }
}

impl From<gltf::Error> for ShowcaseError {
    fn from(e: gltf::Error) -> Self {
        Self::ModelLoad(e.to_string())
    }
}
