use fnv::FnvHashMap;
use log::info;
use sdl2::gfx::primitives::DrawRenderer;
use sdl2::pixels::Color;
use sdl2::render::Canvas;
use sdl2::video::Window;

use crate::rainbow::{RainbowCache, Rgba};
use protocol::frame_model::{FrameModel, FrameSpark, LinkKind};

const WHITE: (u8, u8, u8) = (255, 255, 255);

pub struct Renderer {
	canvas: Canvas<Window>,
	rainbow_mode: bool,
	cache: RainbowCache,
}

impl Renderer {
	pub fn new(mut canvas: Canvas<Window>) -> Self {
		canvas.set_draw_color(Color::RGB(0, 0, 0));
		canvas.clear();
		canvas.present();
		Self {
			canvas,
			rainbow_mode: false,
			cache: RainbowCache::default(),
		}
	}

	pub fn toggle_render_mode(&mut self) {
		self.rainbow_mode = !self.rainbow_mode;
		self.cache.clear();
		info!("rainbow mode: {}", self.rainbow_mode);
	}

	/// Cached colors depend on the viewport, so reset and resize must
	/// drop them before the next frame is drawn.
	pub fn invalidate_cache(&mut self) {
		self.cache.clear();
	}

	pub fn output_size(&self) -> (u32, u32) {
		self.canvas.output_size().unwrap_or((0, 0))
	}

	pub fn set_title(&mut self, title: &str) {
		let _ = self.canvas.window_mut().set_title(title);
	}

	pub fn draw(&mut self, model: &FrameModel) {
		self.canvas.set_draw_color(Color::RGB(0, 0, 0));
		self.canvas.clear();
		if self.rainbow_mode {
			self.draw_rainbow(model);
		} else {
			self.draw_plain(model);
		}
		self.draw_sparks(model);
		self.canvas.present();
	}

	fn draw_plain(&mut self, model: &FrameModel) {
		for link in &model.links {
			let p1 = model.points.get(&link.particles[0]).unwrap();
			let p2 = model.points.get(&link.particles[1]).unwrap();
			let [x1, y1] = map_pos(p1.pos);
			let [x2, y2] = map_pos(p2.pos);
			match link.kind {
				LinkKind::Structural => self
					.canvas
					.thick_line(
						x1,
						y1,
						x2,
						y2,
						1,
						Color::RGBA(255, 255, 255, 204),
					)
					.unwrap(),
				LinkKind::Shear => self
					.canvas
					.aa_line(x1, y1, x2, y2, Color::RGBA(255, 255, 255, 102))
					.unwrap(),
				LinkKind::Bend => self
					.canvas
					.aa_line(x1, y1, x2, y2, Color::RGBA(255, 255, 255, 51))
					.unwrap(),
			}
		}
		for p in model.points.values() {
			let [x, y] = map_pos(p.pos);
			let (rad, alpha) = if p.pinned { (2, 204) } else { (1, 153) };
			self.canvas
				.filled_circle(x, y, rad, Color::RGBA(255, 255, 255, alpha))
				.unwrap();
		}
	}

	/// Batch draws by quantized color to bound render-state changes.
	fn draw_rainbow(&mut self, model: &FrameModel) {
		let Self { canvas, cache, .. } = self;
		let mut link_batches: FnvHashMap<Rgba, Vec<&_>> =
			FnvHashMap::default();
		for link in &model.links {
			let p1 = model.points.get(&link.particles[0]).unwrap();
			let p2 = model.points.get(&link.particles[1]).unwrap();
			let mid_x = (p1.pos[0] + p2.pos[0]) / 2.;
			let mid_y = (p1.pos[1] + p2.pos[1]) / 2.;
			let color = cache.color(mid_x, mid_y, model.width, model.height);
			link_batches.entry(color).or_default().push(link);
		}
		for (color, links) in &link_batches {
			let c = Color::RGBA(color.0, color.1, color.2, color.3);
			for link in links {
				let p1 = model.points.get(&link.particles[0]).unwrap();
				let p2 = model.points.get(&link.particles[1]).unwrap();
				let [x1, y1] = map_pos(p1.pos);
				let [x2, y2] = map_pos(p2.pos);
				match link.kind {
					LinkKind::Structural => {
						canvas.thick_line(x1, y1, x2, y2, 1, c).unwrap()
					}
					_ => canvas.aa_line(x1, y1, x2, y2, c).unwrap(),
				}
			}
		}

		let mut point_batches: FnvHashMap<Rgba, Vec<(i16, i16, i16)>> =
			FnvHashMap::default();
		for p in model.points.values() {
			let mut color =
				cache.color(p.pos[0], p.pos[1], model.width, model.height);
			if p.pinned {
				color.3 = 255;
			}
			let [x, y] = map_pos(p.pos);
			let rad = if p.pinned { 2 } else { 1 };
			point_batches.entry(color).or_default().push((x, y, rad));
		}
		for (color, points) in &point_batches {
			let c = Color::RGBA(color.0, color.1, color.2, color.3);
			for &(x, y, rad) in points {
				canvas.filled_circle(x, y, rad, c).unwrap();
			}
		}
	}

	fn draw_sparks(&mut self, model: &FrameModel) {
		let Self { canvas, cache, rainbow_mode } = self;
		for s in &model.sparks {
			let alpha = (s.life / s.max_life * 0.9 * 255.) as u8;
			let (r, g, b) = if *rainbow_mode {
				let c =
					cache.color(s.pos[0], s.pos[1], model.width, model.height);
				(c.0, c.1, c.2)
			} else {
				WHITE
			};
			let [x, y] = map_pos(s.pos);
			let rad = (spark_size(s) * 2.).ceil().max(1.) as i16;
			canvas
				.filled_circle(x, y, rad, Color::RGBA(r, g, b, alpha))
				.unwrap();
		}
	}
}

fn map_pos(pos: [f32; 2]) -> [i16; 2] {
	[pos[0] as i16, pos[1] as i16]
}

/// Sparks grow over the first 30% of their life and shrink afterwards.
fn spark_size(s: &FrameSpark) -> f32 {
	let progress = 1. - s.life / s.max_life;
	let k = if progress < 0.3 {
		0.5 + progress / 0.3 * 0.5
	} else {
		1.0 - (progress - 0.3) / 0.7 * 0.8
	};
	s.size * k
}
