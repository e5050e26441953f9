pub mod engine;
pub mod frame;
pub mod plan;
pub mod render;
