/// RGB color for flat shape rendering, components in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeColor {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl ShapeColor {
    pub fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Build from 8-bit channels.
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::new(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0)
    }
}

impl Default for ShapeColor {
    fn default() -> Self {
        Self { r: 1.0, g: 1.0, b: 1.0 }
    }
}

/// Flat 2D shape primitive, rasterized by the host as a signed-distance circle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    /// Filled circle.
    Disc { radius: f32 },
    /// Unfilled circle outline of the given stroke thickness.
    Ring { radius: f32, thickness: f32 },
}

/// Component for entities drawn as flat shapes (nodes, highlight rings).
#[derive(Debug, Clone, Copy)]
pub struct ShapeComponent {
    pub shape: Shape,
    pub color: ShapeColor,
    /// Outline drawn on top of a disc; ignored for rings.
    pub border: Option<(ShapeColor, f32)>,
    pub alpha: f32,
}

impl Default for ShapeComponent {
    fn default() -> Self {
        Self {
            shape: Shape::Disc { radius: 10.0 },
            color: ShapeColor::default(),
            border: None,
            alpha: 1.0,
        }
    }
}

impl ShapeComponent {
    pub fn new(shape: Shape, color: ShapeColor) -> Self {
        Self {
            shape,
            color,
            ..Default::default()
        }
    }

    pub fn with_border(mut self, color: ShapeColor, width: f32) -> Self {
        self.border = Some((color, width));
        self
    }

    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.alpha = alpha;
        self
    }
}
