pub mod instance;
pub mod shape_instance;
