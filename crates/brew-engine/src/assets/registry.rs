use std::collections::HashMap;
use crate::assets::manifest::{AssetManifest, SpriteBlend};
use crate::components::sprite::{SpriteComponent, AtlasId, BlendMode};

/// Name-based sprite lookup built from an [`AssetManifest`].
#[derive(Debug, Default)]
pub struct SpriteRegistry {
    sprites: HashMap<String, SpriteComponent>,
}

impl SpriteRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from a parsed manifest.
    pub fn from_manifest(manifest: &AssetManifest) -> Self {
        let sprites = manifest
            .sprites
            .iter()
            .map(|(name, desc)| {
                if desc.atlas as usize >= manifest.atlases.len() {
                    log::warn!("sprite `{name}` names missing atlas {}", desc.atlas);
                }
                let sprite = SpriteComponent {
                    cell_span: desc.span as f32,
                    blend: match desc.blend {
                        SpriteBlend::Alpha => BlendMode::Alpha,
                        SpriteBlend::Additive => BlendMode::Additive,
                    },
                    ..SpriteComponent::new(AtlasId(desc.atlas), desc.col as f32, desc.row as f32)
                };
                (name.clone(), sprite)
            })
            .collect();
        Self { sprites }
    }

    /// Look up a sprite by name.
    pub fn get(&self, name: &str) -> Option<&SpriteComponent> {
        self.sprites.get(name)
    }

    pub fn is_empty(&self) -> bool {
        self.sprites.is_empty()
    }
}
