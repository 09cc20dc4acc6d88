//! Shared frame buffer layout between the engine and the host page.
//!
//! Everything is f32. Sections follow each other with no padding:
//! ```text
//! [Header:    16 floats]
//! [Sprites:   max_instances × 8]
//! [Shapes:    max_shape_instances × 12]
//! [Lines:     max_effects_vertices × 5]
//! [Sounds:    max_sounds × 1]
//! [Events:    max_events × 4]
//! ```
//! Capacities go into the header once at init so the host can compute
//! the same offsets.

use crate::api::game::GameConfig;

pub const HEADER_FLOATS: usize = 16;

pub const HEADER_LOCK: usize = 0;
pub const HEADER_FRAME_COUNTER: usize = 1;
pub const HEADER_PROTOCOL_VERSION: usize = 2;
pub const HEADER_WORLD_WIDTH: usize = 3;
pub const HEADER_WORLD_HEIGHT: usize = 4;
pub const HEADER_MAX_INSTANCES: usize = 5;
pub const HEADER_INSTANCE_COUNT: usize = 6;
pub const HEADER_ATLAS_SPLIT: usize = 7;
pub const HEADER_MAX_SHAPES: usize = 8;
pub const HEADER_SHAPE_COUNT: usize = 9;
pub const HEADER_MAX_EFFECTS_VERTICES: usize = 10;
pub const HEADER_EFFECTS_VERTEX_COUNT: usize = 11;
pub const HEADER_MAX_SOUNDS: usize = 12;
pub const HEADER_SOUND_COUNT: usize = 13;
pub const HEADER_MAX_EVENTS: usize = 14;
pub const HEADER_EVENT_COUNT: usize = 15;

pub const PROTOCOL_VERSION: f32 = 2.0;

pub const INSTANCE_FLOATS: usize = 8;
pub const SHAPE_FLOATS: usize = 12;
pub const EFFECTS_VERTEX_FLOATS: usize = 5;
pub const EVENT_FLOATS: usize = 4;

/// A contiguous run of floats inside the shared buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section {
    pub offset: usize,
    pub floats: usize,
}

impl Section {
    /// First float past the end of this section.
    pub fn end(&self) -> usize {
        self.offset + self.floats
    }
}

/// Buffer layout computed from a game's capacities.
#[derive(Debug, Clone, PartialEq)]
pub struct ProtocolLayout {
    pub instances: Section,
    pub shapes: Section,
    pub effects: Section,
    pub sounds: Section,
    pub events: Section,
    pub total_floats: usize,
}

impl ProtocolLayout {
    pub fn new(
        max_instances: usize,
        max_shapes: usize,
        max_effects_vertices: usize,
        max_sounds: usize,
        max_events: usize,
    ) -> Self {
        let mut cursor = HEADER_FLOATS;
        let mut next = |floats: usize| {
            let section = Section { offset: cursor, floats };
            cursor += floats;
            section
        };
        let instances = next(max_instances * INSTANCE_FLOATS);
        let shapes = next(max_shapes * SHAPE_FLOATS);
        let effects = next(max_effects_vertices * EFFECTS_VERTEX_FLOATS);
        let sounds = next(max_sounds);
        let events = next(max_events * EVENT_FLOATS);
        let total_floats = events.end();
        Self { instances, shapes, effects, sounds, events, total_floats }
    }

    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(
            config.max_instances,
            config.max_shape_instances,
            config.max_effects_vertices,
            config.max_sounds,
            config.max_events,
        )
    }

    pub fn total_bytes(&self) -> usize {
        self.total_floats * 4
    }

    /// Header with the capacity fields filled in. Counts start at zero.
    pub fn initial_header(&self, config: &GameConfig) -> [f32; HEADER_FLOATS] {
        let mut header = [0.0; HEADER_FLOATS];
        header[HEADER_PROTOCOL_VERSION] = PROTOCOL_VERSION;
        header[HEADER_WORLD_WIDTH] = config.world_width;
        header[HEADER_WORLD_HEIGHT] = config.world_height;
        header[HEADER_MAX_INSTANCES] = config.max_instances as f32;
        header[HEADER_MAX_SHAPES] = config.max_shape_instances as f32;
        header[HEADER_MAX_EFFECTS_VERTICES] = config.max_effects_vertices as f32;
        header[HEADER_MAX_SOUNDS] = config.max_sounds as f32;
        header[HEADER_MAX_EVENTS] = config.max_events as f32;
        header
    }
}
