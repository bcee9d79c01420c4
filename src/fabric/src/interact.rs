use crate::link::Link;
use crate::point::Point;
use crate::V2;
use protocol::input::PointerSample;

pub const CUT_RADIUS: f32 = 15.0;
pub const INTERACTION_RADIUS: f32 = 60.0;
/// Nominal stir cadence in ticks; the governor widens it under load.
pub const POINTER_THROTTLE: u64 = 2;

const PUSH_FORCE: f32 = 2.0;
const ATTRACT_FORCE: f32 = 0.3;

/// Pointer state owned by the interaction layer. Updated only by
/// discrete input samples, read only by the tick.
#[derive(Clone, Copy, Debug)]
pub struct PointerState {
	pub pos: V2,
	pub last_pos: V2,
	pub down: bool,
	pub pressure: f32,
	pub tilt: [f32; 2],
	pub pen: bool,
}

impl Default for PointerState {
	fn default() -> Self {
		Self {
			pos: V2::zeros(),
			last_pos: V2::zeros(),
			down: false,
			pressure: 0.5,
			tilt: [0., 0.],
			pen: false,
		}
	}
}

impl PointerState {
	pub fn apply(&mut self, s: &PointerSample) {
		self.last_pos = self.pos;
		self.pos = V2::new(s.pos[0], s.pos[1]);
		self.down = s.down;
		if s.pen {
			self.pen = true;
			self.pressure = s.pressure.unwrap_or(0.5);
			self.tilt = s.tilt;
		} else {
			// synthetic pressure for mice
			self.pressure =
				s.pressure.unwrap_or(if s.down { 1.0 } else { 0.5 });
		}
	}

	/// Nominal radius for mice, 60%-100% of it under pen pressure.
	pub fn cut_radius(&self) -> f32 {
		if self.pen {
			CUT_RADIUS * (0.6 + self.pressure * 0.4)
		} else {
			CUT_RADIUS
		}
	}

	pub fn speed(&self) -> f32 {
		(self.pos - self.last_pos).magnitude()
	}
}

/// While the button is held, tear out every live link whose midpoint
/// falls inside the cut radius. Pointer cuts spawn no sparks.
pub fn cut_links(
	points: &[Point],
	links: &mut [Link],
	live: &[usize],
	pointer: &PointerState,
) {
	if !pointer.down {
		return;
	}
	let radius = pointer.cut_radius();
	for &li in live {
		let link = &links[li];
		if !link.active {
			continue;
		}
		let mid = (points[link.p1].pos + points[link.p2].pos) * 0.5;
		if (mid - pointer.pos).magnitude() < radius {
			links[li].active = false;
		}
	}
}

/// Push points away while the button is held (quadratic falloff), or
/// pull them gently along a moving pointer while hovering.
pub fn stir_points(
	points: &mut [Point],
	visible: &[usize],
	pointer: &PointerState,
) {
	let speed_k = (pointer.speed() * 0.1).min(1.0);
	for &pi in visible {
		let p = &mut points[pi];
		if p.pinned {
			continue;
		}
		let dp = p.pos - pointer.pos;
		let dist = dp.magnitude();
		if dist >= INTERACTION_RADIUS || dist <= 0. {
			continue;
		}
		let falloff = (INTERACTION_RADIUS - dist) / INTERACTION_RADIUS;
		if pointer.down {
			p.vel += dp / dist * (falloff.powi(2) * PUSH_FORCE);
		} else {
			p.vel -= dp / dist * (falloff * ATTRACT_FORCE * speed_k);
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn mouse_pressure_is_synthesized_from_button() {
		let mut state = PointerState::default();
		state.apply(&PointerSample::at([10., 10.], true));
		assert_eq!(state.pressure, 1.0);
		assert!(!state.pen);
		state.apply(&PointerSample::at([10., 10.], false));
		assert_eq!(state.pressure, 0.5);
	}

	#[test]
	fn pen_pressure_scales_cut_radius() {
		let mut state = PointerState::default();
		let mut sample = PointerSample::at([0., 0.], true);
		sample.pen = true;
		sample.pressure = Some(0.0);
		state.apply(&sample);
		assert!((state.cut_radius() - CUT_RADIUS * 0.6).abs() < 1e-6);
		sample.pressure = Some(1.0);
		state.apply(&sample);
		assert!((state.cut_radius() - CUT_RADIUS).abs() < 1e-6);
	}

	#[test]
	fn pointer_speed_tracks_last_sample() {
		let mut state = PointerState::default();
		state.apply(&PointerSample::at([0., 0.], false));
		state.apply(&PointerSample::at([3., 4.], false));
		assert!((state.speed() - 5.0).abs() < 1e-6);
	}
}
