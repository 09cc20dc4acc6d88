pub mod render;
pub mod shape_render;
pub mod effects;
