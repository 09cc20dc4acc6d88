//! Palette indices for guide lines.
//! The index is written into the vertex z slot; the host maps it to a color.

/// Line palette shared with the host renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum LineColor {
    /// Pale blue connector between spell nodes.
    Guide = 0,
    /// Green, for path segments that are already traced.
    Traced,
}

impl LineColor {
    pub const ALL: [LineColor; 2] = [Self::Guide, Self::Traced];

    /// Palette index as written into vertex data.
    pub fn index(self) -> f32 {
        self as u8 as f32
    }
}
