//! Headless, frame-stepped 2D engine core.
//!
//! A [`Game`] mutates an [`EngineContext`] once per fixed tick; the web
//! runner turns the context into flat buffers the host renderer reads.

pub mod api;
pub mod assets;
pub mod bridge;
pub mod components;
pub mod core;
pub mod input;
pub mod renderer;
pub mod systems;

pub use api::game::{EngineContext, Game, GameConfig};
pub use api::types::{EntityId, GameEvent, SoundEvent};
pub use assets::manifest::AssetManifest;
pub use assets::registry::SpriteRegistry;
pub use bridge::protocol::ProtocolLayout;
pub use components::entity::Entity;
pub use components::layer::Layer;
pub use components::shape::{Shape, ShapeColor, ShapeComponent};
pub use components::sprite::{AtlasId, BlendMode, SpriteComponent};
pub use core::scene::Scene;
pub use core::time::FixedTimestep;
pub use input::pointer::PointerState;
pub use input::queue::{keys, InputEvent, InputQueue};
pub use renderer::instance::{RenderBuffer, RenderInstance};
pub use renderer::shape_instance::{ShapeBuffer, ShapeInstance};
pub use systems::effects::{EffectsState, GuideLine, LineColor, Rng};
pub use systems::render::build_render_buffer;
pub use systems::shape_render::build_shape_buffer;
