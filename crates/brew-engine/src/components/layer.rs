/// Draw layer. Layers are drawn back to front; scene order holds within a layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(u8)]
pub enum Layer {
    /// Page art, glyphs, the teacup.
    Backdrop = 0,
    #[default]
    Board = 1,
    /// Transient feedback drawn over everything else.
    Overlay = 2,
}

impl Layer {
    pub const COUNT: usize = 3;

    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Backdrop),
            1 => Some(Self::Board),
            2 => Some(Self::Overlay),
            _ => None,
        }
    }

    /// Value written into the instance wire format.
    pub fn as_f32(self) -> f32 {
        self as u8 as f32
    }
}
