use log::debug;

use crate::bounds::Bounds;
use crate::interact::POINTER_THROTTLE;
use crate::link::Link;
use crate::mesh::Mesh;

pub const CONSTRAINT_ITERATIONS: usize = 3;
pub const CLEANUP_INTERVAL: u64 = 60;
pub const COMPACT_INTERVAL: u64 = 120;
const VIEW_MARGIN: f32 = 30.0;

/// Frame-time bookkeeping plus the recomputed views the rest of the
/// tick works from. Views are rebuilt on a fixed cadence, never kept as
/// ambient caches.
#[derive(Clone, Debug)]
pub struct Governor {
	pub frame_count: u64,
	ms_accum: f32,
	pub avg_fps: f32,
	pub iterations: usize,
	pub live_links: Vec<usize>,
	pub visible_points: Vec<usize>,
}

impl Default for Governor {
	fn default() -> Self {
		Self {
			frame_count: 0,
			ms_accum: 0.,
			avg_fps: 60.,
			iterations: CONSTRAINT_ITERATIONS,
			live_links: Vec::new(),
			visible_points: Vec::new(),
		}
	}
}

impl Governor {
	/// Account one processed tick. Every 60 ticks the rolling average
	/// fps is recomputed and the solver iteration count adapts within
	/// [1, CONSTRAINT_ITERATIONS].
	pub fn record(&mut self, dt_ms: f32) {
		self.frame_count += 1;
		self.ms_accum += dt_ms;
		if self.frame_count % 60 == 0 {
			self.avg_fps = 60_000. / self.ms_accum;
			self.ms_accum = 0.;
			if self.avg_fps < 50. && self.iterations > 1 {
				self.iterations -= 1;
				debug!(
					"fps {:.1}, iterations down to {}",
					self.avg_fps, self.iterations
				);
			} else if self.avg_fps > 58.
				&& self.iterations < CONSTRAINT_ITERATIONS
			{
				self.iterations += 1;
				debug!(
					"fps {:.1}, iterations up to {}",
					self.avg_fps, self.iterations
				);
			}
		}
	}

	/// Stir cadence in ticks, widened as the frame rate degrades.
	pub fn pointer_throttle(&self) -> u64 {
		if self.avg_fps < 45. {
			POINTER_THROTTLE * 4
		} else if self.avg_fps < 55. {
			POINTER_THROTTLE * 2
		} else {
			POINTER_THROTTLE
		}
	}

	pub fn stir_due(&self) -> bool {
		self.frame_count % self.pointer_throttle() == 0
	}

	pub fn cleanup_due(&self) -> bool {
		self.frame_count % CLEANUP_INTERVAL == 0
	}

	pub fn compact_due(&self) -> bool {
		self.frame_count % COMPACT_INTERVAL == 0
	}

	/// Recompute point activity from the viewport expanded by a margin,
	/// then rebuild both views.
	pub fn cull(&mut self, mesh: &mut Mesh, bounds: &Bounds) {
		for p in mesh.points.iter_mut() {
			p.active = p.pos[0] >= -VIEW_MARGIN
				&& p.pos[0] <= bounds.width + VIEW_MARGIN
				&& p.pos[1] >= -VIEW_MARGIN
				&& p.pos[1] <= bounds.height + VIEW_MARGIN;
		}
		self.rebuild_views(mesh);
	}

	/// Live links have two active endpoints and were never torn;
	/// visible points are active and uncut.
	pub fn rebuild_views(&mut self, mesh: &Mesh) {
		self.live_links = mesh
			.links
			.iter()
			.enumerate()
			.filter(|(_, l)| {
				l.active
					&& mesh.points[l.p1].active
					&& mesh.points[l.p2].active
			})
			.map(|(i, _)| i)
			.collect();
		self.visible_points = mesh
			.points
			.iter()
			.enumerate()
			.filter(|(_, p)| p.active && !p.cut)
			.map(|(i, _)| i)
			.collect();
	}

	/// Cheap per-phase retain that keeps the live view free of links
	/// torn earlier in the same tick.
	pub fn drop_torn(&mut self, links: &[Link]) {
		self.live_links.retain(|&li| links[li].active);
	}
}
