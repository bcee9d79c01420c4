// One pointer event as reported by the host window system. Pressure is
// only present when the device reports it (pen/touch); everything else
// synthesizes it downstream.

#[derive(Clone, Copy, Debug)]
pub struct PointerSample {
	pub pos: [f32; 2],
	pub down: bool,
	pub pressure: Option<f32>,
	pub tilt: [f32; 2],
	pub pen: bool,
}

impl Default for PointerSample {
	fn default() -> Self {
		Self {
			pos: [0., 0.],
			down: false,
			pressure: None,
			tilt: [0., 0.],
			pen: false,
		}
	}
}

impl PointerSample {
	pub fn at(pos: [f32; 2], down: bool) -> Self {
		Self {
			pos,
			down,
			..Default::default()
		}
	}
}
