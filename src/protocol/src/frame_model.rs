// frame_model: per-tick mesh snapshot handed to the renderer

use std::collections::HashMap;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum LinkKind {
	Structural,
	Shear,
	Bend,
}

#[derive(Clone, Copy, Debug)]
pub struct FramePoint {
	pub pos: [f32; 2],
	pub pinned: bool,
}

#[derive(Clone, Debug)]
pub struct FrameLink {
	pub id: i32,
	pub particles: [usize; 2],
	pub kind: LinkKind,
}

#[derive(Clone, Copy, Debug)]
pub struct FrameSpark {
	pub pos: [f32; 2],
	pub life: f32,
	pub max_life: f32,
	pub size: f32,
}

#[derive(Clone, Debug)]
pub struct FrameModel {
	pub width: f32,
	pub height: f32,
	pub points: HashMap<usize, FramePoint>,
	pub links: Vec<FrameLink>,
	pub sparks: Vec<FrameSpark>,
}
