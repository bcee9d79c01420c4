use std::time::SystemTime;

use fabric::world::FabricWorld;

fn main() {
	let start = SystemTime::now();
	let mut world = FabricWorld::new(800., 480.);
	let ticks = 600;
	let dt_ms = 1000. / 60.;
	for _ in 0..ticks {
		world.tick(dt_ms);
	}
	let simulated = ticks as f32 * dt_ms * 1000.;
	let duration = SystemTime::now().duration_since(start).unwrap().as_micros();
	eprintln!("{:.3}%", duration as f32 / simulated * 100.);
}
