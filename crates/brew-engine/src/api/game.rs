use glam::Vec2;

use crate::assets::registry::SpriteRegistry;
use crate::core::scene::Scene;
use crate::api::types::{EntityId, SoundEvent, GameEvent};
use crate::input::queue::InputQueue;
use crate::systems::effects::EffectsState;

/// World size, tick rate and the per-frame capacities of the shared buffer.
#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    /// Seconds per tick.
    pub fixed_dt: f32,
    pub world_width: f32,
    pub world_height: f32,
    pub max_instances: usize,
    pub max_shape_instances: usize,
    pub max_effects_vertices: usize,
    pub max_sounds: usize,
    pub max_events: usize,
}

impl GameConfig {
    pub fn world_center(&self) -> Vec2 {
        Vec2::new(self.world_width, self.world_height) * 0.5
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            fixed_dt: 1.0 / 60.0,
            world_width: 1280.0,
            world_height: 720.0,
            max_instances: 256,
            max_shape_instances: 64,
            max_effects_vertices: 4096,
            max_sounds: 32,
            max_events: 32,
        }
    }
}

/// A game driven by the runner, one fixed tick at a time.
pub trait Game {
    /// Read once, before `init`.
    fn config(&self) -> GameConfig {
        GameConfig::default()
    }

    /// Sprite names the game draws. Checked when the host loads a manifest;
    /// missing ones are reported, then skipped at draw time.
    fn required_sprites(&self) -> Vec<String> {
        Vec::new()
    }

    fn init(&mut self, ctx: &mut EngineContext);

    /// Advance one tick. The first tick of a frame gets every event since
    /// the last frame that ran a tick; later ticks of the same frame get an
    /// empty queue.
    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue);
}

/// Everything a game may touch during `init` and `update`.
pub struct EngineContext {
    pub scene: Scene,
    pub effects: EffectsState,
    /// Empty until the host loads a manifest.
    pub sprites: SpriteRegistry,
    /// Cleared by the runner at the start of every frame.
    pub sounds: Vec<SoundEvent>,
    /// Cleared by the runner at the start of every frame.
    pub events: Vec<GameEvent>,
    next_id: u32,
}

impl EngineContext {
    pub fn new() -> Self {
        Self::with_effects(EffectsState::new())
    }

    pub fn with_effects(effects: EffectsState) -> Self {
        Self {
            scene: Scene::new(),
            effects,
            sprites: SpriteRegistry::new(),
            sounds: Vec::new(),
            events: Vec::new(),
            next_id: 1,
        }
    }

    pub fn next_id(&mut self) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        id
    }

    pub fn emit_sound(&mut self, event: SoundEvent) {
        self.sounds.push(event);
    }

    pub fn emit_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    pub fn clear_frame_data(&mut self) {
        self.sounds.clear();
        self.events.clear();
    }
}

impl Default for EngineContext {
    fn default() -> Self {
        Self::new()
    }
}
