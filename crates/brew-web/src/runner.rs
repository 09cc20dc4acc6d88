use brew_engine::bridge::protocol::{
    HEADER_ATLAS_SPLIT, HEADER_EFFECTS_VERTEX_COUNT, HEADER_EVENT_COUNT, HEADER_FLOATS,
    HEADER_FRAME_COUNTER, HEADER_INSTANCE_COUNT, HEADER_SHAPE_COUNT, HEADER_SOUND_COUNT,
};
use brew_engine::{
    build_render_buffer, build_shape_buffer, AssetManifest, EffectsState, EngineContext, FixedTimestep, Game,
    GameConfig, InputEvent, InputQueue, ProtocolLayout, RenderBuffer, ShapeBuffer, SpriteRegistry,
};

/// Generic game runner that wires up the engine loop.
///
/// Each game crate keeps one runner in a `thread_local!` and exports free
/// functions through [`export_game!`](crate::export_game), because
/// wasm-bindgen cannot export generic structs.
pub struct GameRunner<G: Game> {
    game: G,
    ctx: EngineContext,
    input: InputQueue,
    /// Handed to every step after the first so discrete events apply once.
    idle: InputQueue,
    render_buffer: RenderBuffer,
    shape_buffer: ShapeBuffer,
    timestep: FixedTimestep,
    config: GameConfig,
    layout: ProtocolLayout,
    /// Frame header mirrored into the shared buffer by the host.
    header: [f32; HEADER_FLOATS],
    initialized: bool,
    /// Flat buffer of sound event IDs for host reads.
    sound_buffer: Vec<u8>,
}

impl<G: Game> GameRunner<G> {
    pub fn new(game: G) -> Self {
        let config = game.config();
        let layout = ProtocolLayout::from_config(&config);
        let ctx = EngineContext::with_effects(EffectsState::with_capacity(config.max_effects_vertices));

        Self {
            game,
            ctx,
            input: InputQueue::new(),
            idle: InputQueue::default(),
            render_buffer: RenderBuffer::with_capacity(config.max_instances),
            shape_buffer: ShapeBuffer::with_capacity(config.max_shape_instances),
            timestep: FixedTimestep::new(config.fixed_dt),
            header: layout.initial_header(&config),
            layout,
            sound_buffer: Vec::with_capacity(config.max_sounds),
            config,
            initialized: false,
        }
    }

    /// Initialize the game. Call once after construction.
    pub fn init(&mut self) {
        self.game.init(&mut self.ctx);
        self.initialized = true;
    }

    /// Push an input event into the queue.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Replace the sprite registry from a manifest JSON string.
    /// A malformed manifest is logged and the previous registry kept.
    pub fn load_manifest(&mut self, json: &str) {
        match AssetManifest::from_json(json) {
            Ok(manifest) => {
                let required = self.game.required_sprites();
                let missing = manifest.missing_sprites(required.iter().map(String::as_str));
                if !missing.is_empty() {
                    log::warn!("manifest lacks sprites: {}", missing.join(", "));
                }
                self.ctx.sprites = SpriteRegistry::from_manifest(&manifest);
                log::info!(
                    "manifest loaded: {} atlases, {} sprites",
                    manifest.atlases.len(),
                    manifest.sprites.len()
                );
            }
            Err(e) => log::warn!("manifest rejected: {e}"),
        }
    }

    /// Run one host frame: fixed-step updates, then rebuild every output buffer.
    pub fn tick(&mut self, dt: f32) {
        if !self.initialized {
            return;
        }

        self.ctx.clear_frame_data();

        let steps = self.timestep.accumulate(dt);
        for step in 0..steps {
            let input = if step == 0 { &self.input } else { &self.idle };
            self.game.update(&mut self.ctx, input);
        }

        // Input is consumed only by a frame that ran at least one step.
        if steps > 0 {
            self.input.clear();
        }

        build_render_buffer(self.ctx.scene.iter(), &mut self.render_buffer);
        build_shape_buffer(self.ctx.scene.iter(), &mut self.shape_buffer);
        self.ctx.effects.rebuild_effects_buffer();

        self.clamp_frame_output();

        self.sound_buffer.clear();
        for sound in &self.ctx.sounds {
            self.sound_buffer.push(sound.0 as u8);
        }

        self.write_header();
    }

    fn write_header(&mut self) {
        let h = &mut self.header;
        h[HEADER_FRAME_COUNTER] += 1.0;
        h[HEADER_INSTANCE_COUNT] = self.render_buffer.instance_count() as f32;
        h[HEADER_ATLAS_SPLIT] = self.render_buffer.atlas_split as f32;
        h[HEADER_SHAPE_COUNT] = self.shape_buffer.instance_count() as f32;
        h[HEADER_EFFECTS_VERTEX_COUNT] = self.ctx.effects.effects_vertex_count() as f32;
        h[HEADER_SOUND_COUNT] = self.sound_buffer.len() as f32;
        h[HEADER_EVENT_COUNT] = self.ctx.events.len() as f32;
    }

    fn clamp_frame_output(&mut self) {
        let dropped = self.render_buffer.truncate(self.config.max_instances);
        if dropped > 0 {
            log::warn!("sprite overflow: dropped {dropped} past {}", self.config.max_instances);
        }
        let dropped = self.shape_buffer.truncate(self.config.max_shape_instances);
        if dropped > 0 {
            log::warn!("shape overflow: dropped {dropped} past {}", self.config.max_shape_instances);
        }
        let dropped = self.ctx.effects.truncate_vertices(self.config.max_effects_vertices);
        if dropped > 0 {
            log::warn!("line overflow: dropped {dropped} vertices past {}", self.config.max_effects_vertices);
        }
        if self.ctx.sounds.len() > self.config.max_sounds {
            log::warn!("sound overflow: {} > {}", self.ctx.sounds.len(), self.config.max_sounds);
            self.ctx.sounds.truncate(self.config.max_sounds);
        }
        if self.ctx.events.len() > self.config.max_events {
            log::warn!("event overflow: {} > {}", self.ctx.events.len(), self.config.max_events);
            self.ctx.events.truncate(self.config.max_events);
        }
    }

    pub fn context(&self) -> &EngineContext {
        &self.ctx
    }

    pub fn game(&self) -> &G {
        &self.game
    }

    // ---- Pointer accessors for host reads ----

    pub fn header(&self) -> &[f32; HEADER_FLOATS] {
        &self.header
    }

    pub fn header_ptr(&self) -> *const f32 {
        self.header.as_ptr()
    }

    pub fn instances_ptr(&self) -> *const f32 {
        self.render_buffer.instances_ptr()
    }

    pub fn instance_count(&self) -> u32 {
        self.render_buffer.instance_count()
    }

    pub fn atlas_split(&self) -> u32 {
        self.render_buffer.atlas_split
    }

    pub fn shapes_ptr(&self) -> *const f32 {
        self.shape_buffer.instances_ptr()
    }

    pub fn shape_count(&self) -> u32 {
        self.shape_buffer.instance_count() as u32
    }

    pub fn effects_ptr(&self) -> *const f32 {
        self.ctx.effects.effects_buffer_ptr()
    }

    pub fn effects_vertex_count(&self) -> u32 {
        self.ctx.effects.effects_vertex_count() as u32
    }

    pub fn sound_events_ptr(&self) -> *const u8 {
        self.sound_buffer.as_ptr()
    }

    pub fn sound_events_len(&self) -> u32 {
        self.sound_buffer.len() as u32
    }

    pub fn game_events_ptr(&self) -> *const f32 {
        self.ctx.events.as_ptr() as *const f32
    }

    pub fn game_events_len(&self) -> u32 {
        self.ctx.events.len() as u32
    }

    pub fn world_width(&self) -> f32 {
        self.config.world_width
    }

    pub fn world_height(&self) -> f32 {
        self.config.world_height
    }

    pub fn buffer_total_floats(&self) -> u32 {
        self.layout.total_floats as u32
    }
}
