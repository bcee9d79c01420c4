pub mod frame_model;
pub mod input;
pub mod user_event;

pub type V2 = nalgebra::Vector2<f32>;
