use rand::Rng;

use crate::bounds::Bounds;
use crate::V2;
use protocol::frame_model::FramePoint;

const AIR_RESISTANCE: f32 = 0.015;
const GRAVITY: f32 = 0.05;
const DAMPING: f32 = 0.99;
const MAX_SPEED: f32 = 2.0;

/// One mesh vertex. Links refer to points by arena index, never by
/// shared reference, so a point carries no backrefs of its own.
#[derive(Clone, Copy, Debug)]
pub struct Point {
	pub pos: V2,
	pub anchor: V2,
	pub vel: V2,
	pub pinned: bool,
	pub cut: bool,
	pub active: bool,
}

impl Point {
	pub fn new(pos: V2, pinned: bool) -> Self {
		Self {
			pos,
			anchor: pos,
			vel: V2::zeros(),
			pinned,
			cut: false,
			active: true,
		}
	}

	/// Advance one tick of free motion: quadratic air drag, gravity,
	/// damping, speed clamp, unit-step position update, then wall and
	/// floor handling. Callers gate on pinned/cut/active.
	pub fn step(&mut self, bounds: &Bounds, rng: &mut impl Rng) {
		let speed = self.vel.magnitude();
		if speed > 0. {
			self.vel -= self.vel / speed * (AIR_RESISTANCE * speed);
		}
		self.vel[1] += GRAVITY;
		self.vel *= DAMPING;

		let speed = self.vel.magnitude();
		if speed > MAX_SPEED {
			self.vel *= MAX_SPEED / speed;
		}
		self.pos += self.vel;

		bounds.apply(self, rng);
	}

	/// Snap back to the anchor with zero velocity.
	pub fn repin(&mut self) {
		self.pos = self.anchor;
		self.vel = V2::zeros();
	}

	pub fn render(&self) -> FramePoint {
		FramePoint {
			pos: [self.pos[0], self.pos[1]],
			pinned: self.pinned,
		}
	}
}
