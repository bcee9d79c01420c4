use protocol::frame_model::{FrameLink, LinkKind};

/// Lattice axis of a link. Vertical links are stiffer than the rest and
/// carry the asymmetric stress rule; see solver.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum LinkAxis {
	Horizontal,
	Vertical,
	Diagonal,
	Bend,
}

/// Spring constraint between two arena points. `active = false` is
/// terminal: a torn link never comes back.
#[derive(Clone, Debug)]
pub struct Link {
	pub p1: usize,
	pub p2: usize,
	pub rest_length: f32,
	pub active: bool,
	pub kind: LinkKind,
	pub axis: LinkAxis,
	pub strength: f32,
}

impl Link {
	pub fn new(
		p1: usize,
		p2: usize,
		rest_length: f32,
		kind: LinkKind,
		axis: LinkAxis,
		strength: f32,
	) -> Self {
		Self {
			p1,
			p2,
			rest_length,
			active: true,
			kind,
			axis,
			strength,
		}
	}

	pub fn render(&self, id: i32) -> FrameLink {
		FrameLink {
			id,
			particles: [self.p1, self.p2],
			kind: self.kind,
		}
	}
}
