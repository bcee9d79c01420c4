use rand::Rng;

use crate::point::Point;

const FLOOR_CLEARANCE: f32 = 5.0;
const FLOOR_BOUNCE: f32 = 0.3;
const FLOOR_FRICTION: f32 = 0.85;
const SETTLING_THRESHOLD: f32 = 0.1;
const WALL_BOUNCE: f32 = 0.4;
const SPREAD: f32 = 0.02;

/// Viewport-sized collision box. Walls reflect with energy loss, the
/// floor damps and settles.
#[derive(Clone, Copy, Debug)]
pub struct Bounds {
	pub width: f32,
	pub height: f32,
}

impl Bounds {
	pub fn new(width: f32, height: f32) -> Self {
		Self { width, height }
	}

	pub fn floor_y(&self) -> f32 {
		self.height - FLOOR_CLEARANCE
	}

	pub fn apply(&self, p: &mut Point, rng: &mut impl Rng) -> bool {
		let mut flag = false;
		if p.pos[0] < 0. {
			p.pos[0] = 0.;
			p.vel[0] *= -WALL_BOUNCE;
			flag = true;
		} else if p.pos[0] > self.width {
			p.pos[0] = self.width;
			p.vel[0] *= -WALL_BOUNCE;
			flag = true;
		}
		let floor_y = self.floor_y();
		if p.pos[1] > floor_y {
			p.pos[1] = floor_y;
			if p.vel[1].abs() > SETTLING_THRESHOLD {
				p.vel[1] *= -FLOOR_BOUNCE;
			} else {
				p.vel[1] = 0.;
			}
			p.vel[0] *= FLOOR_FRICTION;
			// nudge sideways so grounded points do not stack
			p.vel[0] += (rng.gen::<f32>() - 0.5) * SPREAD;
			flag = true;
		}
		flag
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::V2;

	#[test]
	fn wall_reflects_with_energy_loss() {
		let bounds = Bounds::new(100., 100.);
		let mut p = Point::new(V2::new(50., 50.), false);
		p.pos[0] = -3.;
		p.vel[0] = -1.;
		bounds.apply(&mut p, &mut rand::thread_rng());
		assert_eq!(p.pos[0], 0.);
		assert!((p.vel[0] - 0.4).abs() < 1e-6);
	}

	#[test]
	fn floor_clamps_and_settles_slow_points() {
		let bounds = Bounds::new(100., 100.);
		let mut p = Point::new(V2::new(50., 50.), false);
		p.pos[1] = 99.;
		p.vel[1] = 0.05;
		bounds.apply(&mut p, &mut rand::thread_rng());
		assert_eq!(p.pos[1], bounds.floor_y());
		assert_eq!(p.vel[1], 0.);
	}

	#[test]
	fn floor_bounces_fast_points() {
		let bounds = Bounds::new(100., 100.);
		let mut p = Point::new(V2::new(50., 50.), false);
		p.pos[1] = 99.;
		p.vel[1] = 1.0;
		bounds.apply(&mut p, &mut rand::thread_rng());
		assert!((p.vel[1] + 0.3).abs() < 1e-6);
	}
}
