use std::sync::mpsc::{Receiver, Sender};
use std::time::Duration;

use crate::bounds::Bounds;
use crate::controller_message::ControllerMessage;
use crate::governor::Governor;
use crate::interact::{self, PointerState};
use crate::mesh::Mesh;
use crate::solver::{self, SolverParams};
use crate::spark::{self, Spark};
use crate::time_manager::FramePacer;
use protocol::frame_model::FrameModel;
use protocol::user_event::{UpdateInfo, UserEvent};

/// Owns the whole fabric state and runs the tick machine:
/// cut -> integrate -> solve -> stir -> cleanup -> sparks.
/// A tick is atomic with respect to the mesh; controller messages are
/// drained between ticks only.
pub struct FabricWorld {
	bounds: Bounds,
	pub mesh: Mesh,
	pub governor: Governor,
	pub sparks: Vec<Spark>,
	pointer: PointerState,
	params: SolverParams,

	// -1: always play
	// 0: pause
	// n: play n frames
	forward_frames: i32,
}

impl FabricWorld {
	pub fn new(width: f32, height: f32) -> Self {
		let mesh = Mesh::netting(width, height);
		let mut governor = Governor::default();
		governor.rebuild_views(&mesh);
		Self {
			bounds: Bounds::new(width, height),
			mesh,
			governor,
			sparks: Vec::new(),
			pointer: PointerState::default(),
			params: SolverParams::default(),
			forward_frames: -1,
		}
	}

	pub fn with_paused(mut self) -> Self {
		self.forward_frames = 1; // provide first frame
		self
	}

	pub fn with_tear_threshold(mut self, threshold: f32) -> Self {
		self.params.tear_threshold = threshold;
		self
	}

	pub fn with_upper_stress(mut self, k: f32) -> Self {
		self.params.upper_stress = k;
		self
	}

	pub fn bounds(&self) -> &Bounds {
		&self.bounds
	}

	pub fn handle_message(&mut self, msg: ControllerMessage) {
		match msg {
			ControllerMessage::TogglePause => {
				self.forward_frames =
					if self.forward_frames == 0 { -1 } else { 0 };
			}
			ControllerMessage::FrameForward => {
				if self.forward_frames == 0 {
					self.forward_frames += 1;
				}
			}
			ControllerMessage::Reset => {
				self.rebuild(self.bounds.width, self.bounds.height);
			}
			ControllerMessage::Resize([w, h]) => self.rebuild(w, h),
			ControllerMessage::Pointer(sample) => {
				self.pointer.apply(&sample);
			}
		}
	}

	/// Full teardown and rebuild; every derived view is recomputed from
	/// the fresh mesh.
	fn rebuild(&mut self, width: f32, height: f32) {
		self.bounds = Bounds::new(width, height);
		self.mesh = Mesh::netting(width, height);
		self.sparks.clear();
		self.governor.rebuild_views(&self.mesh);
	}

	/// One tick with a measured frame time. Phase order is fixed; later
	/// phases read state written by earlier ones.
	pub fn tick(&mut self, dt_ms: f32) {
		self.governor.record(dt_ms);
		let rng = &mut rand::thread_rng();

		interact::cut_links(
			&self.mesh.points,
			&mut self.mesh.links,
			&self.governor.live_links,
			&self.pointer,
		);
		self.governor.drop_torn(&self.mesh.links);

		for &pi in &self.governor.visible_points {
			let p = &mut self.mesh.points[pi];
			if p.pinned || p.cut {
				continue;
			}
			p.step(&self.bounds, rng);
		}

		for _ in 0..self.governor.iterations {
			solver::relax_links(
				&mut self.mesh.points,
				&mut self.mesh.links,
				&self.governor.live_links,
				&self.params,
				&mut self.sparks,
				rng,
			);
			solver::repin(&mut self.mesh.points);
		}
		self.governor.drop_torn(&self.mesh.links);

		if self.governor.stir_due() {
			interact::stir_points(
				&mut self.mesh.points,
				&self.governor.visible_points,
				&self.pointer,
			);
		}

		if self.governor.cleanup_due() {
			self.governor.cull(&mut self.mesh, &self.bounds);
		}
		if self.governor.compact_due() && self.mesh.compact() {
			self.governor.rebuild_views(&self.mesh);
		}

		spark::update(&mut self.sparks, &self.bounds);
	}

	/// Snapshot for the renderer: visible points, live links, sparks.
	pub fn frame_model(&self) -> FrameModel {
		let points = self
			.governor
			.visible_points
			.iter()
			.map(|&pi| (pi, self.mesh.points[pi].render()))
			.collect();
		let links = self
			.governor
			.live_links
			.iter()
			.map(|&li| self.mesh.links[li].render(li as i32))
			.collect();
		let sparks = self.sparks.iter().map(|s| s.render()).collect();
		FrameModel {
			width: self.bounds.width,
			height: self.bounds.height,
			points,
			links,
			sparks,
		}
	}

	pub fn update_info(&self) -> UpdateInfo {
		UpdateInfo {
			avg_fps: self.governor.avg_fps,
			iterations: self.governor.iterations,
			point_len: self.governor.visible_points.len(),
			link_len: self.governor.live_links.len(),
			spark_len: self.sparks.len(),
		}
	}

	/// Frame-locked loop for a dedicated physics thread. Exits as soon
	/// as the frontend drops its receiver, which is the cancel path.
	pub fn run_thread(
		&mut self,
		tx: Sender<UserEvent>,
		rx: Receiver<ControllerMessage>,
	) {
		let mut pacer = FramePacer::default();
		loop {
			if self.forward_frames != 0 {
				if self.forward_frames > 0 {
					self.forward_frames -= 1;
				}
				let dt = pacer.take_time();
				self.tick(dt);
				let event =
					UserEvent::Update(self.frame_model(), self.update_info());
				if tx.send(event).is_err() {
					return;
				}
			} else {
				std::thread::sleep(Duration::from_millis(10));
				pacer.skip();
			}
			while let Ok(msg) = rx.try_recv() {
				self.handle_message(msg);
			}
		}
	}
}
