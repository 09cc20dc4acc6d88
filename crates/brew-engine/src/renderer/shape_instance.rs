use bytemuck::{Pod, Zeroable};

/// Per-shape render data for the host's circle pipeline.
/// 12 floats = 48 bytes per instance.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct ShapeInstance {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    /// Stroke thickness for rings; 0.0 means a filled disc.
    pub thickness: f32,
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub alpha: f32,
    pub border_r: f32,
    pub border_g: f32,
    pub border_b: f32,
    /// Border stroke width; 0.0 means no border.
    pub border_width: f32,
}

impl ShapeInstance {
    pub const FLOATS: usize = 12;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;
}

/// Buffer of shape instances, in draw order.
pub struct ShapeBuffer {
    instances: Vec<ShapeInstance>,
}

impl ShapeBuffer {
    pub fn new() -> Self {
        Self::with_capacity(64)
    }

    pub fn with_capacity(max: usize) -> Self {
        Self {
            instances: Vec::with_capacity(max),
        }
    }

    pub fn clear(&mut self) {
        self.instances.clear();
    }

    pub fn push(&mut self, instance: ShapeInstance) {
        self.instances.push(instance);
    }

    pub fn instances(&self) -> &[ShapeInstance] {
        &self.instances
    }

    /// Drop instances past `max`. Returns how many were dropped.
    pub fn truncate(&mut self, max: usize) -> usize {
        let dropped = self.instances.len().saturating_sub(max);
        self.instances.truncate(max);
        dropped
    }

    pub fn instance_count(&self) -> usize {
        self.instances.len()
    }

    pub fn instances_ptr(&self) -> *const f32 {
        self.instances.as_ptr() as *const f32
    }
}

impl Default for ShapeBuffer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shape_instance_is_48_bytes() {
        assert_eq!(std::mem::size_of::<ShapeInstance>(), 48);
        assert_eq!(ShapeInstance::STRIDE_BYTES, 48);
    }

    #[test]
    fn shape_buffer_push_and_count() {
        let mut buf = ShapeBuffer::new();
        buf.push(ShapeInstance::default());
        buf.push(ShapeInstance::default());
        assert_eq!(buf.instance_count(), 2);
        assert_eq!(buf.instances().len(), 2);
    }

    #[test]
    fn truncate_reports_dropped() {
        let mut buf = ShapeBuffer::new();
        for _ in 0..4 {
            buf.push(ShapeInstance::default());
        }
        assert_eq!(buf.truncate(1), 3);
        assert_eq!(buf.instance_count(), 1);
    }
}
