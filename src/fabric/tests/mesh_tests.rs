use fabric::link::LinkAxis;
use fabric::mesh::{Mesh, GRID_SIZE};
use protocol::frame_model::LinkKind;

#[test]
fn netting_matches_viewport() {
	let mesh = Mesh::netting(800., 480.);
	assert_eq!(mesh.cols, 100);
	assert_eq!(mesh.rows, 60);
	assert_eq!(mesh.points.len(), 6000);
	assert_eq!(mesh.points.iter().filter(|p| p.pinned).count(), 100);
	// only row 0 is pinned
	for (i, p) in mesh.points.iter().enumerate() {
		assert_eq!(p.pinned, i < mesh.cols);
		assert!(!p.cut);
		assert!(p.active);
	}
}

#[test]
fn netting_link_counts() {
	let mesh = Mesh::netting(800., 480.);
	let (c, r) = (mesh.cols, mesh.rows);
	let count = |kind: LinkKind, axis: LinkAxis| {
		mesh.links
			.iter()
			.filter(|l| l.kind == kind && l.axis == axis)
			.count()
	};
	assert_eq!(
		count(LinkKind::Structural, LinkAxis::Horizontal),
		r * (c - 1)
	);
	assert_eq!(count(LinkKind::Structural, LinkAxis::Vertical), (r - 1) * c);
	assert_eq!(
		count(LinkKind::Shear, LinkAxis::Diagonal),
		2 * (r - 1) * (c - 1)
	);
	assert_eq!(
		count(LinkKind::Bend, LinkAxis::Bend),
		r * (c - 2) + (r - 2) * c
	);
}

#[test]
fn netting_rest_lengths_and_anchors() {
	let mesh = Mesh::netting(160., 160.);
	for l in &mesh.links {
		let expect = match l.kind {
			LinkKind::Structural => GRID_SIZE,
			LinkKind::Shear => GRID_SIZE * 2f32.sqrt(),
			LinkKind::Bend => GRID_SIZE * 2.,
		};
		assert!((l.rest_length - expect).abs() < 1e-5);
		let d = (mesh.points[l.p2].anchor - mesh.points[l.p1].anchor)
			.magnitude();
		assert!((d - expect).abs() < 1e-5);
	}
	for row in 0..mesh.rows {
		for col in 0..mesh.cols {
			let p = &mesh.points[row * mesh.cols + col];
			assert_eq!(p.anchor[0], col as f32 * GRID_SIZE);
			assert_eq!(p.anchor[1], row as f32 * GRID_SIZE);
			assert_eq!(p.pos, p.anchor);
		}
	}
}

#[test]
fn compact_only_fires_past_the_threshold() {
	let mut mesh = Mesh::netting(160., 160.);
	let total = mesh.points.len();
	// cutting 10% is not enough
	for p in mesh.points.iter_mut().take(total / 10) {
		p.cut = true;
	}
	assert!(!mesh.compact());
	assert_eq!(mesh.points.len(), total);
	// cutting 30% is
	for p in mesh.points.iter_mut().take(total * 3 / 10) {
		p.cut = true;
	}
	assert!(mesh.compact());
	assert_eq!(mesh.points.len(), total - total * 3 / 10);
	for l in &mesh.links {
		assert!(l.active);
		assert!(!mesh.points[l.p1].cut);
		assert!(!mesh.points[l.p2].cut);
	}
}
