pub mod bounds;
pub mod controller_message;
pub mod governor;
pub mod interact;
pub mod link;
pub mod mesh;
pub mod point;
pub mod solver;
pub mod spark;
pub mod time_manager;
pub mod world;

pub use protocol::V2;
