pub mod rainbow;
pub mod renderer;
