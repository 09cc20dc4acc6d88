/// Index into the manifest's atlas list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct AtlasId(pub u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlendMode {
    #[default]
    Alpha,
    /// Glow sprites; the host draws these after every alpha-blended instance.
    Additive,
}

/// A manifest sprite resolved to atlas cell coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct SpriteComponent {
    pub atlas: AtlasId,
    pub col: f32,
    pub row: f32,
    /// Cells covered per side (1.0 = one cell, 2.0 = a 2x2 block).
    pub cell_span: f32,
    /// 0.0 (gone) to 1.0 (opaque).
    pub alpha: f32,
    pub blend: BlendMode,
}

impl SpriteComponent {
    pub fn new(atlas: AtlasId, col: f32, row: f32) -> Self {
        Self {
            atlas,
            col,
            row,
            cell_span: 1.0,
            alpha: 1.0,
            blend: BlendMode::Alpha,
        }
    }

    /// Same cell at a different opacity, clamped to [0, 1].
    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.alpha = alpha.clamp(0.0, 1.0);
        self
    }
}

impl Default for SpriteComponent {
    fn default() -> Self {
        Self::new(AtlasId(0), 0.0, 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alpha_is_clamped() {
        let s = SpriteComponent::default();
        assert_eq!(s.clone().with_alpha(1.7).alpha, 1.0);
        assert_eq!(s.with_alpha(-0.2).alpha, 0.0);
    }
}
