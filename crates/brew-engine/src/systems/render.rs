use crate::components::entity::Entity;
use crate::components::sprite::BlendMode;
use crate::renderer::instance::{RenderBuffer, RenderInstance};

/// Fill `buffer` with every visible sprite.
///
/// Alpha-blended sprites come first, then additive ones from `atlas_split`.
/// Each group is sorted back to front by layer; the sort is stable, so
/// scene order decides within a layer.
pub fn build_render_buffer<'a>(entities: impl Iterator<Item = &'a Entity>, buffer: &mut RenderBuffer) {
    buffer.clear();

    let mut drawn: Vec<(BlendMode, u8, RenderInstance)> = entities
        .filter(|e| e.visible)
        .filter_map(|e| {
            let sprite = e.sprite.as_ref().filter(|s| s.alpha > 0.0)?;
            let instance = RenderInstance {
                x: e.pos.x,
                y: e.pos.y,
                layer: e.layer.as_f32(),
                size: e.size,
                sprite_col: sprite.col,
                alpha: sprite.alpha,
                cell_span: sprite.cell_span,
                atlas_row: sprite.row,
            };
            Some((sprite.blend, e.layer as u8, instance))
        })
        .collect();

    drawn.sort_by_key(|(blend, layer, _)| (*blend == BlendMode::Additive, *layer));

    buffer.atlas_split = drawn
        .iter()
        .take_while(|(blend, _, _)| *blend == BlendMode::Alpha)
        .count() as u32;
    buffer.instances.extend(drawn.into_iter().map(|(_, _, inst)| inst));
}
