pub mod entity;
pub mod layer;
pub mod sprite;
pub mod shape;
