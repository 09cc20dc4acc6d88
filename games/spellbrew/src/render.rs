//! Stateless drawing: reads cast and book state, writes engine visuals.
//!
//! Everything drawn here is tagged and rebuilt from scratch each tick.

use brew_engine::{EngineContext, Entity, Layer, LineColor, Shape, ShapeColor, ShapeComponent};
use glam::{DVec2, Vec2};

use crate::cast::CastView;
use crate::config::CastConfig;
use crate::spellbook::Spell;

pub const TAG: &str = "spellbrew";

pub const TEACUP: &str = "teacup";
pub const GOLD_STAR: &str = "gold_star";
pub const RED_X: &str = "red_x";

const TEACUP_SIZE: f32 = 120.0;
const STAR_SIZE: f32 = 24.0;
const X_SIZE: f32 = 32.0;
const GLYPH_SIZE: f32 = 160.0;
/// Page illustration position relative to the world center.
const GLYPH_OFFSET: Vec2 = Vec2::new(-160.0, -40.0);

const GUIDE_WIDTH: f32 = 4.0;
const NODE_BORDER: f32 = 3.0;
const RING_THICKNESS: f32 = 3.0;

fn traced_fill() -> ShapeColor {
    ShapeColor::from_rgb8(90, 200, 120)
}

fn traced_border() -> ShapeColor {
    ShapeColor::from_rgb8(40, 120, 60)
}

fn untraced_fill() -> ShapeColor {
    ShapeColor::from_rgb8(255, 210, 100)
}

fn untraced_border() -> ShapeColor {
    ShapeColor::from_rgb8(160, 110, 40)
}

fn ring_color() -> ShapeColor {
    ShapeColor::from_rgb8(80, 200, 230)
}

/// Drop everything drawn last tick.
pub fn clear(ctx: &mut EngineContext) {
    ctx.scene.despawn_tagged(TAG);
    ctx.effects.clear();
}

fn spawn(ctx: &mut EngineContext, entity: impl FnOnce(Entity) -> Entity) {
    let id = ctx.next_id();
    let e = entity(Entity::new(id).with_tag(TAG));
    ctx.scene.spawn(e);
}

fn spawn_sprite(ctx: &mut EngineContext, name: &str, layer: Layer, pos: Vec2, size: f32, alpha: f32) {
    let Some(sprite) = ctx.sprites.get(name).cloned() else {
        return;
    };
    spawn(ctx, |e| e.at(pos).sized(size).on(layer).with_sprite(sprite.with_alpha(alpha)));
}

/// Draw one tick of a cast: the glyph while tracing, the burst afterwards.
pub fn draw_cast(ctx: &mut EngineContext, view: CastView<'_>, anchor: DVec2, config: &CastConfig) {
    clear(ctx);

    let Some(animator) = view.animator else {
        draw_pattern(ctx, view, config);
        return;
    };

    spawn_sprite(ctx, TEACUP, Layer::Backdrop, anchor.as_vec2(), TEACUP_SIZE, 1.0);
    for effect in animator.visible() {
        let pos = effect.position.as_vec2();
        if animator.success() {
            spawn_sprite(ctx, GOLD_STAR, Layer::Overlay, pos, STAR_SIZE, effect.alpha as f32 / 255.0);
        } else {
            spawn_sprite(ctx, RED_X, Layer::Overlay, pos, X_SIZE, 1.0);
        }
    }
}

fn draw_pattern(ctx: &mut EngineContext, view: CastView<'_>, config: &CastConfig) {
    let session = view.session;
    let pattern = session.pattern();

    let path: Vec<Vec2> = pattern.path().iter().map(|c| c.as_vec2()).collect();
    if path.len() > 1 {
        ctx.effects.add_line(path.clone(), GUIDE_WIDTH, LineColor::Guide);
    }
    let traced = session.next_required() as usize;
    if traced > 1 {
        ctx.effects.add_line(path[..traced].to_vec(), GUIDE_WIDTH, LineColor::Traced);
    }

    for region in pattern.regions() {
        let radius = region.radius as f32;
        let (fill, border) = if region.traced {
            (traced_fill(), traced_border())
        } else {
            (untraced_fill(), untraced_border())
        };
        let shape = ShapeComponent::new(Shape::Disc { radius }, fill).with_border(border, NODE_BORDER);
        spawn(ctx, |e| e.at(region.center.as_vec2()).with_shape(shape));
    }

    if session.is_terminal() {
        return;
    }
    if let Ok(next) = pattern.region_at(session.next_required()) {
        let ring = Shape::Ring {
            radius: (next.radius + config.ring_padding) as f32,
            thickness: RING_THICKNESS,
        };
        let shape = ShapeComponent::new(ring, ring_color());
        spawn(ctx, |e| e.at(next.center.as_vec2()).on(Layer::Overlay).with_shape(shape));
    }
}

/// Draw the open book page's illustration.
pub fn draw_book(ctx: &mut EngineContext, spell: &Spell, center: DVec2) {
    clear(ctx);
    spawn_sprite(ctx, &spell.glyph, Layer::Backdrop, center.as_vec2() + GLYPH_OFFSET, GLYPH_SIZE, 1.0);
}
