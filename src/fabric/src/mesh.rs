use log::info;

use crate::link::{Link, LinkAxis};
use crate::point::Point;
use crate::V2;
use protocol::frame_model::LinkKind;

pub const GRID_SIZE: f32 = 8.0;

const STRUCTURAL_STRENGTH: f32 = 1.0;
const SHEAR_STRENGTH: f32 = 0.7;
const BEND_STRENGTH: f32 = 0.3;

/// Point arena plus link set. Links address points by index; a rebuild
/// replaces both wholesale.
#[derive(Clone, Debug, Default)]
pub struct Mesh {
	pub points: Vec<Point>,
	pub links: Vec<Link>,
	pub cols: usize,
	pub rows: usize,
}

impl Mesh {
	/// Build the hanging netting for a viewport: a regular lattice of
	/// `floor(w/GRID_SIZE) x floor(h/GRID_SIZE)` points with the top
	/// row pinned, connected by structural, shear, and bend links.
	pub fn netting(width: f32, height: f32) -> Self {
		let cols = (width / GRID_SIZE).floor() as usize;
		let rows = (height / GRID_SIZE).floor() as usize;
		let mut points = Vec::with_capacity(cols * rows);
		for row in 0..rows {
			for col in 0..cols {
				let pos =
					V2::new(col as f32 * GRID_SIZE, row as f32 * GRID_SIZE);
				points.push(Point::new(pos, row == 0));
			}
		}

		let at = |row: usize, col: usize| row * cols + col;
		let mut links = Vec::new();
		for row in 0..rows {
			for col in 0..cols {
				let p = at(row, col);
				if col + 1 < cols {
					links.push(Link::new(
						p,
						at(row, col + 1),
						GRID_SIZE,
						LinkKind::Structural,
						LinkAxis::Horizontal,
						STRUCTURAL_STRENGTH,
					));
				}
				if row + 1 < rows {
					links.push(Link::new(
						p,
						at(row + 1, col),
						GRID_SIZE,
						LinkKind::Structural,
						LinkAxis::Vertical,
						STRUCTURAL_STRENGTH,
					));
				}
				if row + 1 < rows && col + 1 < cols {
					links.push(Link::new(
						p,
						at(row + 1, col + 1),
						GRID_SIZE * 2f32.sqrt(),
						LinkKind::Shear,
						LinkAxis::Diagonal,
						SHEAR_STRENGTH,
					));
				}
				if row + 1 < rows && col > 0 {
					links.push(Link::new(
						p,
						at(row + 1, col - 1),
						GRID_SIZE * 2f32.sqrt(),
						LinkKind::Shear,
						LinkAxis::Diagonal,
						SHEAR_STRENGTH,
					));
				}
				if col + 2 < cols {
					links.push(Link::new(
						p,
						at(row, col + 2),
						GRID_SIZE * 2.,
						LinkKind::Bend,
						LinkAxis::Bend,
						BEND_STRENGTH,
					));
				}
				if row + 2 < rows {
					links.push(Link::new(
						p,
						at(row + 2, col),
						GRID_SIZE * 2.,
						LinkKind::Bend,
						LinkAxis::Bend,
						BEND_STRENGTH,
					));
				}
			}
		}

		info!(
			"netting built: {} points, {} links, {} pinned",
			points.len(),
			links.len(),
			points.iter().filter(|p| p.pinned).count(),
		);
		Self {
			points,
			links,
			cols,
			rows,
		}
	}

	/// Points still eligible for compaction survival: pinned-and-uncut
	/// plus unpinned-active-and-uncut.
	pub fn live_points(&self) -> usize {
		self.points
			.iter()
			.filter(|p| !p.cut && (p.pinned || p.active))
			.count()
	}

	/// Drop cut and culled points plus any link that is torn or refers
	/// to a dropped point, remapping link endpoints. Only fires once
	/// the live set has shrunk by 20% or more; returns whether it did.
	pub fn compact(&mut self) -> bool {
		let kept = self.live_points();
		if kept * 5 >= self.points.len() * 4 {
			return false;
		}
		let mut remap = vec![usize::MAX; self.points.len()];
		let mut points = Vec::with_capacity(kept);
		for (i, p) in self.points.iter().enumerate() {
			if !p.cut && (p.pinned || p.active) {
				remap[i] = points.len();
				points.push(*p);
			}
		}
		let links = self
			.links
			.iter()
			.filter(|l| {
				l.active
					&& remap[l.p1] != usize::MAX
					&& remap[l.p2] != usize::MAX
			})
			.map(|l| {
				let mut l = l.clone();
				l.p1 = remap[l.p1];
				l.p2 = remap[l.p2];
				l
			})
			.collect::<Vec<_>>();
		info!(
			"mesh compacted: {} -> {} points, {} -> {} links",
			self.points.len(),
			points.len(),
			self.links.len(),
			links.len(),
		);
		self.points = points;
		self.links = links;
		true
	}
}
