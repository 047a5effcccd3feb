use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::camera::PerspectiveCamera;
use super::scene::{LayoutObject, NODE_RADIUS, Scene, SceneObject, SpinningCube, to_world};

const CUBE_COLOR: &str = "#00ff00";
const EDGE_COLOR: &str = "rgba(100, 180, 255, 0.6)";

/// Screen-space drawing command.
#[derive(Clone, Debug, PartialEq)]
#[allow(missing_docs)]
pub enum Primitive {
	/// Fill the whole surface.
	Clear { color: String },
	/// Stroke a segment `width` pixels wide.
	Line {
		from: (f64, f64),
		to: (f64, f64),
		width: f64,
		color: String,
	},
	/// Fill a circle.
	Disc {
		center: (f64, f64),
		radius: f64,
		color: String,
	},
}

/// Flatten the scene into draw commands: background, then lines, then discs
/// from far to near.
pub fn compose(scene: &Scene, camera: &PerspectiveCamera) -> Vec<Primitive> {
	let mut lines = Vec::new();
	let mut discs = Vec::new();

	for object in &scene.objects {
		match object {
			SceneObject::Placeholder(cube) => compose_cube(cube, camera, &mut lines),
			SceneObject::Layout(layout) => compose_layout(layout, camera, &mut lines, &mut discs),
		}
	}

	far_to_near(&mut discs);

	let mut out = Vec::with_capacity(1 + lines.len() + discs.len());
	out.push(Primitive::Clear {
		color: scene.background.into(),
	});
	out.extend(lines);
	out.extend(discs.into_iter().map(|(_, disc)| disc));
	out
}

fn far_to_near(discs: &mut [(f32, Primitive)]) {
	discs.sort_by(|(a, _), (b, _)| b.total_cmp(a));
}

fn compose_cube(cube: &SpinningCube, camera: &PerspectiveCamera, lines: &mut Vec<Primitive>) {
	for (a, b) in cube.edges() {
		let (Some(pa), Some(pb)) = (camera.project(a), camera.project(b)) else {
			continue;
		};
		lines.push(Primitive::Line {
			from: (pa.x, pa.y),
			to: (pb.x, pb.y),
			width: 2.0,
			color: CUBE_COLOR.into(),
		});
	}
}

fn compose_layout(
	layout: &LayoutObject,
	camera: &PerspectiveCamera,
	lines: &mut Vec<Primitive>,
	discs: &mut Vec<(f32, Primitive)>,
) {
	layout.graph.visit_edges(|n1, n2, _| {
		let (Some(a), Some(b)) = (
			camera.project(to_world(n1.x(), n1.y())),
			camera.project(to_world(n2.x(), n2.y())),
		) else {
			return;
		};
		lines.push(Primitive::Line {
			from: (a.x, a.y),
			to: (b.x, b.y),
			width: 1.0,
			color: EDGE_COLOR.into(),
		});
	});

	layout.graph.visit_nodes(|node| {
		let Some(p) = camera.project(to_world(node.x(), node.y())) else {
			return;
		};
		discs.push((
			p.depth,
			Primitive::Disc {
				center: (p.x, p.y),
				radius: (NODE_RADIUS * p.scale).max(1.0),
				color: node.data.user_data.color.clone(),
			},
		));
	});
}

/// Replay draw commands on a 2D context.
pub fn paint(ctx: &CanvasRenderingContext2d, width: f64, height: f64, primitives: &[Primitive]) {
	for primitive in primitives {
		match primitive {
			Primitive::Clear { color } => {
				ctx.set_fill_style_str(color);
				ctx.fill_rect(0.0, 0.0, width, height);
			}
			Primitive::Line {
				from,
				to,
				width,
				color,
			} => {
				ctx.set_stroke_style_str(color);
				ctx.set_line_width(*width);
				ctx.begin_path();
				ctx.move_to(from.0, from.1);
				ctx.line_to(to.0, to.1);
				ctx.stroke();
			}
			Primitive::Disc {
				center,
				radius,
				color,
			} => {
				ctx.begin_path();
				let _ = ctx.arc(center.0, center.1, *radius, 0.0, 2.0 * PI);
				ctx.set_fill_style_str(color);
				ctx.fill();
			}
		}
	}
}
