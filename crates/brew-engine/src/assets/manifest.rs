//! Asset manifest shared with the host.
//!
//! The host decodes images and audio itself; Rust only needs to know which
//! atlas cell a sprite name refers to. Sections Rust does not read (sounds,
//! fonts) are ignored when parsing.

use std::collections::HashMap;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AssetManifest {
    pub atlases: Vec<Atlas>,
    #[serde(default)]
    pub sprites: HashMap<String, SpriteCell>,
}

/// A texture laid out as a grid of equal cells.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Atlas {
    pub name: String,
    pub cols: u32,
    pub rows: u32,
    /// Relative to the game's asset root.
    pub path: String,
}

/// Where a named sprite sits in its atlas.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpriteCell {
    /// Position in `atlases`.
    pub atlas: u32,
    pub col: u32,
    pub row: u32,
    #[serde(default = "one")]
    pub span: u32,
    #[serde(default)]
    pub blend: SpriteBlend,
}

/// Manifest spelling of a sprite's blend mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpriteBlend {
    #[default]
    Alpha,
    Additive,
}

fn one() -> u32 {
    1
}

impl AssetManifest {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// The names in `required` that this manifest does not define.
    pub fn missing_sprites<'a>(&self, required: impl IntoIterator<Item = &'a str>) -> Vec<&'a str> {
        required
            .into_iter()
            .filter(|name| !self.sprites.contains_key(*name))
            .collect()
    }
}
