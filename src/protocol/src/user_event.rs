use crate::frame_model::FrameModel;

#[derive(Debug)]
pub enum UserEvent {
	Update(FrameModel, UpdateInfo),
}

#[derive(Clone, Copy, Debug)]
pub struct UpdateInfo {
	pub avg_fps: f32,
	pub iterations: usize,
	pub point_len: usize,
	pub link_len: usize,
	pub spark_len: usize,
}
