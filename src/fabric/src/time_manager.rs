use std::time::SystemTime;

/// Frame-rate ceiling: sleeps out whatever remains of the target frame
/// and reports the measured frame time, so the tick itself stays pure
/// in its delta input.
pub struct FramePacer {
	target_ms: f32,
	last: SystemTime,
}

impl Default for FramePacer {
	fn default() -> Self {
		Self {
			target_ms: 1000. / 60.,
			last: SystemTime::now(),
		}
	}
}

impl FramePacer {
	pub fn with_target_ms(mut self, target_ms: f32) -> Self {
		self.target_ms = target_ms;
		self
	}

	/// Sleep until the target frame interval has elapsed since the
	/// previous call, then return the measured frame time in ms.
	pub fn take_time(&mut self) -> f32 {
		let elapsed = SystemTime::now()
			.duration_since(self.last)
			.unwrap_or_default()
			.as_micros() as u64;
		let target = (self.target_ms * 1000.) as u64;
		if elapsed < target {
			std::thread::sleep(std::time::Duration::from_micros(
				target - elapsed,
			));
		}
		let now = SystemTime::now();
		let dt = now
			.duration_since(self.last)
			.unwrap_or_default()
			.as_micros() as f32 / 1000.;
		self.last = now;
		dt
	}

	/// Forget elapsed time, e.g. after a pause, so the next frame does
	/// not see the gap.
	pub fn skip(&mut self) {
		self.last = SystemTime::now();
	}
}
