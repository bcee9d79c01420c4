use log::warn;
use rand::Rng;

use crate::link::{Link, LinkAxis};
use crate::point::Point;
use crate::spark::{self, Spark};
use protocol::frame_model::LinkKind;

/// Relaxation parameters. These are tuned visual constants, not
/// physical ones; `upper_stress` in particular controls how much of a
/// downward-vertical correction reaches the hanging point above.
#[derive(Clone, Copy, Debug)]
pub struct SolverParams {
	pub structural_stiffness: f32,
	pub vertical_stiffness: f32,
	pub shear_scale: f32,
	pub bend_scale: f32,
	pub tear_threshold: f32,
	pub upper_stress: f32,
}

impl Default for SolverParams {
	fn default() -> Self {
		Self {
			structural_stiffness: 0.95,
			vertical_stiffness: 0.98,
			shear_scale: 0.7,
			bend_scale: 0.3,
			tear_threshold: 10.0,
			upper_stress: 0.3,
		}
	}
}

/// One relaxation pass over the live link view, in stable order.
/// Over-stretched links tear (terminally) and burst into sparks at
/// their midpoint; everything else gets a proportional positional
/// correction toward rest length, skipping pinned endpoints.
pub fn relax_links(
	points: &mut [Point],
	links: &mut [Link],
	live: &[usize],
	params: &SolverParams,
	sparks: &mut Vec<Spark>,
	rng: &mut impl Rng,
) {
	for &li in live {
		let link = &links[li];
		if !link.active {
			continue;
		}
		let (i1, i2) = (link.p1, link.p2);
		let dp = points[i2].pos - points[i1].pos;
		let dist = dp.magnitude();
		if dist == 0. {
			// degenerate, self-heals once the points separate
			warn!("zero-length link {}", li);
			continue;
		}

		if dist / link.rest_length > params.tear_threshold {
			let mid = points[i1].pos + dp * 0.5;
			spark::burst(sparks, mid, rng);
			links[li].active = false;
			continue;
		}

		let mut stiffness = match link.axis {
			LinkAxis::Vertical => params.vertical_stiffness,
			_ => params.structural_stiffness,
		} * link.strength;
		match link.kind {
			LinkKind::Shear => stiffness *= params.shear_scale,
			LinkKind::Bend => stiffness *= params.bend_scale,
			LinkKind::Structural => {}
		}

		let percent = (link.rest_length - dist) / dist / 2. * stiffness;
		let offset = dp * percent;
		// downward-vertical links only pass a fraction of the
		// correction up, which keeps hanging fabric from ringing
		let downward = link.axis == LinkAxis::Vertical
			&& points[i1].pos[1] < points[i2].pos[1];
		if !points[i1].pinned {
			let k = if downward { params.upper_stress } else { 1.0 };
			points[i1].pos -= offset * k;
		}
		if !points[i2].pinned {
			points[i2].pos += offset;
		}
	}
}

/// Force every pinned point back onto its anchor. Runs once per
/// relaxation pass since neighboring corrections perturb pinned
/// coordinates transiently.
pub fn repin(points: &mut [Point]) {
	for p in points.iter_mut() {
		if p.pinned {
			p.repin();
		}
	}
}
