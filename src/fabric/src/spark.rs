use std::f32::consts::TAU;

use rand::Rng;

use crate::bounds::Bounds;
use crate::V2;
use protocol::frame_model::FrameSpark;

const SPARK_GRAVITY: f32 = 0.04;
const SPARK_DRAG: f32 = 0.04;
const FLOOR_MARGIN: f32 = 10.0;
const FADE: f32 = 0.025;

/// Short-lived tear debris. Purely cosmetic: sparks never push back on
/// the mesh.
#[derive(Clone, Copy, Debug)]
pub struct Spark {
	pub pos: V2,
	pub vel: V2,
	pub life: f32,
	pub max_life: f32,
	pub size: f32,
}

impl Spark {
	pub fn render(&self) -> FrameSpark {
		FrameSpark {
			pos: [self.pos[0], self.pos[1]],
			life: self.life,
			max_life: self.max_life,
			size: self.size,
		}
	}
}

/// Spawn a 2-3 spark burst at a tear site, fanned out with jitter and a
/// slight upward bias.
pub fn burst(sparks: &mut Vec<Spark>, pos: V2, rng: &mut impl Rng) {
	let count = 2 + rng.gen_range(0..2);
	for i in 0..count {
		let angle =
			TAU * i as f32 / count as f32 + (rng.gen::<f32>() - 0.5) * 0.8;
		let speed = 0.3 + rng.gen::<f32>() * 0.5;
		let lift = -0.1 + rng.gen::<f32>() * 0.1;
		let life = 0.4 + rng.gen::<f32>() * 0.2;
		sparks.push(Spark {
			pos,
			vel: V2::new(angle.cos() * speed, angle.sin() * speed + lift),
			life,
			max_life: life,
			size: 0.3 + rng.gen::<f32>() * 0.4,
		});
	}
}

/// Ballistic update with gravity, quadratic drag, wall/floor bounce and
/// settling; expired sparks are dropped in place.
pub fn update(sparks: &mut Vec<Spark>, bounds: &Bounds) {
	sparks.retain_mut(|s| {
		s.pos += s.vel;
		s.vel[1] += SPARK_GRAVITY;

		let speed = s.vel.magnitude();
		if speed > 0. {
			s.vel -= s.vel / speed * (SPARK_DRAG * speed);
		}

		let floor_y = bounds.height - FLOOR_MARGIN;
		if s.pos[1] > floor_y {
			s.pos[1] = floor_y;
			s.vel[1] *= -0.2;
			s.vel[0] *= 0.9;
		}
		if s.pos[0] < 0. {
			s.pos[0] = 0.;
			s.vel[0] *= -0.6;
		} else if s.pos[0] > bounds.width {
			s.pos[0] = bounds.width;
			s.vel[0] *= -0.6;
		}
		if s.pos[1] >= floor_y - 1.
			&& s.vel[1].abs() < 0.1
			&& s.vel[0].abs() < 0.1
		{
			s.vel[0] *= 0.95;
			s.vel[1] = 0.;
		}

		s.life -= FADE;
		s.life > 0.
	});
}
