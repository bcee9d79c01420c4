use std::time::Instant;

use fnv::FnvHashMap;

pub const COLOR_CACHE_SIZE: usize = 1000;

pub type Rgba = (u8, u8, u8, u8);

/// Position+time rainbow palette behind a quantized, bounded cache.
/// Quantization is 10 units per cell; past 1.5x the cap the cache is
/// cut back to its most recent 60%.
pub struct RainbowCache {
	map: FnvHashMap<(i32, i32), Rgba>,
	order: Vec<(i32, i32)>,
	epoch: Instant,
}

impl Default for RainbowCache {
	fn default() -> Self {
		Self {
			map: FnvHashMap::default(),
			order: Vec::new(),
			epoch: Instant::now(),
		}
	}
}

impl RainbowCache {
	pub fn clear(&mut self) {
		self.map.clear();
		self.order.clear();
	}

	pub fn len(&self) -> usize {
		self.map.len()
	}

	pub fn is_empty(&self) -> bool {
		self.map.is_empty()
	}

	pub fn color(&mut self, x: f32, y: f32, width: f32, height: f32) -> Rgba {
		let key = ((x / 10.).round() as i32, (y / 10.).round() as i32);
		if let Some(c) = self.map.get(&key) {
			return *c;
		}
		if self.map.len() > COLOR_CACHE_SIZE * 3 / 2 {
			self.evict();
		}
		let time = self.epoch.elapsed().as_secs_f32() * 0.1;
		let c = rainbow_color(x, y, width, height, time);
		self.map.insert(key, c);
		self.order.push(key);
		c
	}

	// keep the most recent 60% of entries
	fn evict(&mut self) {
		let keep = COLOR_CACHE_SIZE * 3 / 5;
		let start = self.order.len().saturating_sub(keep);
		let kept: Vec<_> = self.order.split_off(start);
		let mut map = FnvHashMap::default();
		for key in &kept {
			if let Some(c) = self.map.get(key) {
				map.insert(*key, *c);
			}
		}
		self.map = map;
		self.order = kept;
	}
}

/// Flowing hue field: position sets the base hue, slow sine waves bend
/// it over time, saturation/lightness ripple with position, and alpha
/// falls off toward the viewport edges.
fn rainbow_color(x: f32, y: f32, width: f32, height: f32, time: f32) -> Rgba {
	use std::f32::consts::PI;
	let nx = x / width;
	let ny = y / height;

	let wave1 = (nx * PI * 2. + time).sin() * 0.3;
	let wave2 = (ny * PI * 1.5 + time * 0.7).cos() * 0.3;
	let base_hue = (nx * 0.4 + ny * 0.4) * 360.;
	let hue = (base_hue + (wave1 + wave2) * 60.).rem_euclid(360.);

	let s = 0.7 + (nx * PI + time * 2.).sin() * 0.2;
	let l = 0.5 + (ny * PI + time * 1.5).cos() * 0.15;
	let (r, g, b) = hsl_to_rgb(hue / 360., s, l);

	let cx = width / 2.;
	let cy = height / 2.;
	let dist = ((x - cx).powi(2) + (y - cy).powi(2)).sqrt();
	let max_dist = (cx.powi(2) + cy.powi(2)).sqrt();
	let alpha = 0.6 + (1. - dist / max_dist) * 0.3;

	(r, g, b, (alpha * 255.) as u8)
}

fn hsl_to_rgb(h: f32, s: f32, l: f32) -> (u8, u8, u8) {
	if s == 0. {
		let v = (l * 255.) as u8;
		return (v, v, v);
	}
	let q = if l < 0.5 { l * (1. + s) } else { l + s - l * s };
	let p = 2. * l - q;
	let f = |mut t: f32| {
		if t < 0. {
			t += 1.;
		}
		if t > 1. {
			t -= 1.;
		}
		let v = if t < 1. / 6. {
			p + (q - p) * 6. * t
		} else if t < 1. / 2. {
			q
		} else if t < 2. / 3. {
			p + (q - p) * (2. / 3. - t) * 6.
		} else {
			p
		};
		(v * 255.).round().clamp(0., 255.) as u8
	};
	(f(h + 1. / 3.), f(h), f(h - 1. / 3.))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn cache_stays_bounded() {
		let mut cache = RainbowCache::default();
		for i in 0..4000 {
			cache.color(i as f32 * 10., 0., 100_000., 1000.);
			assert!(cache.len() <= COLOR_CACHE_SIZE * 3 / 2 + 1);
		}
	}

	#[test]
	fn quantized_lookups_hit_the_cache() {
		let mut cache = RainbowCache::default();
		let a = cache.color(101., 202., 800., 600.);
		let b = cache.color(104., 198., 800., 600.);
		assert_eq!(a, b);
		assert_eq!(cache.len(), 1);
	}

	#[test]
	fn clear_drops_viewport_dependent_entries() {
		let mut cache = RainbowCache::default();
		cache.color(100., 100., 800., 600.);
		assert_eq!(cache.len(), 1);
		// entries are keyed by position only, so a viewport change has
		// to go through clear() instead of a cache hit
		cache.clear();
		assert!(cache.is_empty());
		cache.color(100., 100., 1600., 1200.);
		assert_eq!(cache.len(), 1);
	}

	#[test]
	fn gray_at_zero_saturation() {
		let (r, g, b) = hsl_to_rgb(0.3, 0., 0.5);
		assert_eq!(r, g);
		assert_eq!(g, b);
	}
}
