use bytemuck::{Pod, Zeroable};

/// One sprite as the host reads it: 8 floats, 32-byte stride.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct RenderInstance {
    pub x: f32,
    pub y: f32,
    /// [`Layer`](crate::components::layer::Layer) as a float.
    pub layer: f32,
    /// Edge length in world units.
    pub size: f32,
    pub sprite_col: f32,
    pub alpha: f32,
    pub cell_span: f32,
    pub atlas_row: f32,
}

impl RenderInstance {
    pub const FLOATS: usize = 8;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;
}

/// Sprite instances for one frame.
///
/// `[0..atlas_split)` are alpha-blended and `[atlas_split..)` additive;
/// each group is ordered back to front by layer.
#[derive(Debug, Default)]
pub struct RenderBuffer {
    pub instances: Vec<RenderInstance>,
    pub atlas_split: u32,
}

impl RenderBuffer {
    pub fn new() -> Self {
        Self::with_capacity(256)
    }

    pub fn with_capacity(max: usize) -> Self {
        Self {
            instances: Vec::with_capacity(max),
            atlas_split: 0,
        }
    }

    pub fn clear(&mut self) {
        self.instances.clear();
        self.atlas_split = 0;
    }

    pub fn instance_count(&self) -> u32 {
        self.instances.len() as u32
    }

    /// Drop instances past `max`, keeping the split inside the buffer.
    /// Returns how many were dropped.
    pub fn truncate(&mut self, max: usize) -> usize {
        let dropped = self.instances.len().saturating_sub(max);
        self.instances.truncate(max);
        self.atlas_split = self.atlas_split.min(self.instance_count());
        dropped
    }

    pub fn as_floats(&self) -> &[f32] {
        bytemuck::cast_slice(&self.instances)
    }

    pub fn instances_ptr(&self) -> *const f32 {
        self.instances.as_ptr() as *const f32
    }
}
