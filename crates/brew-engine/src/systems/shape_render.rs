use crate::components::entity::Entity;
use crate::components::shape::Shape;
use crate::renderer::shape_instance::{ShapeBuffer, ShapeInstance};

/// Build the shape buffer from entities with shape components,
/// back to front by layer and in scene order within a layer.
pub fn build_shape_buffer<'a>(
    entities: impl Iterator<Item = &'a Entity>,
    buffer: &mut ShapeBuffer,
) {
    buffer.clear();
    let mut shaped: Vec<&Entity> = entities.filter(|e| e.visible && e.shape.is_some()).collect();
    shaped.sort_by_key(|e| e.layer);

    for entity in shaped {
        let Some(shape) = &entity.shape else {
            continue;
        };
        let (radius, thickness) = match shape.shape {
            Shape::Disc { radius } => (radius, 0.0),
            Shape::Ring { radius, thickness } => (radius, thickness),
        };
        let (border, border_width) = match (shape.shape, shape.border) {
            (Shape::Disc { .. }, Some((color, width))) => (color, width),
            _ => (shape.color, 0.0),
        };
        buffer.push(ShapeInstance {
            x: entity.pos.x,
            y: entity.pos.y,
            radius,
            thickness,
            r: shape.color.r,
            g: shape.color.g,
            b: shape.color.b,
            alpha: shape.alpha,
            border_r: border.r,
            border_g: border.g,
            border_b: border.b,
            border_width,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::EntityId;
    use crate::components::layer::Layer;
    use crate::components::shape::{ShapeColor, ShapeComponent};
    use glam::Vec2;

    #[test]
    fn disc_with_border() {
        let entity = Entity::new(EntityId(1))
            .at(Vec2::new(50.0, 75.0))
            .with_shape(
                ShapeComponent::new(Shape::Disc { radius: 20.0 }, ShapeColor::new(1.0, 0.0, 0.0))
                    .with_border(ShapeColor::new(0.0, 0.0, 1.0), 3.0),
            );

        let mut buffer = ShapeBuffer::new();
        build_shape_buffer(std::iter::once(&entity), &mut buffer);

        let inst = buffer.instances()[0];
        assert_eq!((inst.x, inst.y, inst.radius), (50.0, 75.0, 20.0));
        assert_eq!(inst.thickness, 0.0);
        assert_eq!(inst.r, 1.0);
        assert_eq!(inst.border_b, 1.0);
        assert_eq!(inst.border_width, 3.0);
    }

    #[test]
    fn ring_ignores_border() {
        let entity = Entity::new(EntityId(1)).with_shape(
            ShapeComponent::new(Shape::Ring { radius: 26.0, thickness: 3.0 }, ShapeColor::default())
                .with_border(ShapeColor::default(), 5.0),
        );
        let mut buffer = ShapeBuffer::new();
        build_shape_buffer(std::iter::once(&entity), &mut buffer);

        let inst = buffer.instances()[0];
        assert_eq!(inst.thickness, 3.0);
        assert_eq!(inst.border_width, 0.0);
    }

    #[test]
    fn skips_hidden_and_shapeless() {
        let plain = Entity::new(EntityId(1));
        let mut hidden = Entity::new(EntityId(2)).with_shape(ShapeComponent::default());
        hidden.visible = false;
        let shown = Entity::new(EntityId(3)).with_shape(ShapeComponent::default());

        let entities = vec![plain, hidden, shown];
        let mut buffer = ShapeBuffer::new();
        build_shape_buffer(entities.iter(), &mut buffer);
        assert_eq!(buffer.instance_count(), 1);
    }

    #[test]
    fn overlay_shapes_draw_last() {
        let front = Entity::new(EntityId(1))
            .at(Vec2::new(1.0, 0.0))
            .on(Layer::Overlay)
            .with_shape(ShapeComponent::default());
        let back = Entity::new(EntityId(2))
            .at(Vec2::new(2.0, 0.0))
            .with_shape(ShapeComponent::default());

        let entities = vec![front, back];
        let mut buffer = ShapeBuffer::new();
        build_shape_buffer(entities.iter(), &mut buffer);
        let xs: Vec<f32> = buffer.instances().iter().map(|i| i.x).collect();
        assert_eq!(xs, vec![2.0, 1.0]);
    }
}
