use glam::Vec2;
use crate::api::types::EntityId;
use crate::components::layer::Layer;
use crate::components::shape::ShapeComponent;
use crate::components::sprite::SpriteComponent;

/// Something drawn this frame: a sprite, a shape, or both at one position.
#[derive(Debug, Clone)]
pub struct Entity {
    pub id: EntityId,
    /// Games find and clear their entities by tag.
    pub tag: String,
    /// Hidden entities stay in the scene but produce no instances.
    pub visible: bool,
    pub pos: Vec2,
    /// Rendered sprite edge length in world units. Shapes carry their own radius.
    pub size: f32,
    pub layer: Layer,
    pub sprite: Option<SpriteComponent>,
    /// Each component lands in its own buffer.
    pub shape: Option<ShapeComponent>,
}

impl Entity {
    pub fn new(id: EntityId) -> Self {
        Self {
            id,
            tag: String::new(),
            visible: true,
            pos: Vec2::ZERO,
            size: 1.0,
            layer: Layer::default(),
            sprite: None,
            shape: None,
        }
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    pub fn at(mut self, pos: Vec2) -> Self {
        self.pos = pos;
        self
    }

    pub fn sized(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    pub fn on(mut self, layer: Layer) -> Self {
        self.layer = layer;
        self
    }

    pub fn with_sprite(mut self, sprite: SpriteComponent) -> Self {
        self.sprite = Some(sprite);
        self
    }

    pub fn with_shape(mut self, shape: ShapeComponent) -> Self {
        self.shape = Some(shape);
        self
    }
}
