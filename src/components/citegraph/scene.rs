use std::f64::consts::PI;

use force_graph::{EdgeData, ForceGraph, NodeData, SimulationParameters};
use glam::{EulerRot, Quat, Vec3};

use super::types::GraphData;
use super::viewport::RenderStrategy;

const COLORS: &[&str] = &[
	"#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b", "#e377c2", "#7f7f7f",
	"#bcbd22", "#17becf",
];

/// Layout units to world units.
pub const WORLD_SCALE: f32 = 0.008;
/// Node radius in world units.
pub const NODE_RADIUS: f64 = 0.04;
/// Radians added to each cube axis per tick.
pub const CUBE_SPIN: f32 = 0.01;

const SEED_RADIUS: f64 = 100.0;

/// Per-node payload carried through the simulation.
#[derive(Clone, Debug, Default)]
pub struct NodeInfo {
	/// CSS fill color.
	pub color: String,
}

/// Unit cube spinning about x and y, shown before real data is wired in.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SpinningCube {
	/// Radians about x.
	pub rotation_x: f32,
	/// Radians about y.
	pub rotation_y: f32,
}

impl SpinningCube {
	const CORNERS: [Vec3; 8] = [
		Vec3::new(-0.5, -0.5, -0.5),
		Vec3::new(0.5, -0.5, -0.5),
		Vec3::new(0.5, 0.5, -0.5),
		Vec3::new(-0.5, 0.5, -0.5),
		Vec3::new(-0.5, -0.5, 0.5),
		Vec3::new(0.5, -0.5, 0.5),
		Vec3::new(0.5, 0.5, 0.5),
		Vec3::new(-0.5, 0.5, 0.5),
	];
	const EDGES: [(usize, usize); 12] = [
		(0, 1),
		(1, 2),
		(2, 3),
		(3, 0),
		(4, 5),
		(5, 6),
		(6, 7),
		(7, 4),
		(0, 4),
		(1, 5),
		(2, 6),
		(3, 7),
	];

	/// Advance one frame's rotation.
	pub fn tick(&mut self) {
		self.rotation_x += CUBE_SPIN;
		self.rotation_y += CUBE_SPIN;
	}

	/// World-space edges at the current rotation.
	pub fn edges(&self) -> impl Iterator<Item = (Vec3, Vec3)> + '_ {
		let rotation = Quat::from_euler(EulerRot::XYZ, self.rotation_x, self.rotation_y, 0.0);
		let corners = Self::CORNERS.map(|c| rotation * c);
		Self::EDGES.iter().map(move |&(a, b)| (corners[a], corners[b]))
	}
}

/// Force-directed layout of a citation graph.
pub struct LayoutObject {
	/// Simulation state.
	pub graph: ForceGraph<NodeInfo, ()>,
	/// Steps taken so far.
	pub ticks: u64,
}

impl LayoutObject {
	/// Seed every node on a circle and link them as in `data`.
	pub fn new(data: &GraphData) -> Self {
		let mut graph = ForceGraph::new(SimulationParameters {
			force_charge: 150.0,
			force_spring: 0.05,
			force_max: 100.0,
			node_speed: 3000.0,
			damping_factor: 0.9,
		});
		let depths = data.depths();
		let mut idx = Vec::with_capacity(data.nodes.len());

		for (i, node) in data.nodes.iter().enumerate() {
			let depth = depths.get(node.id).copied().unwrap_or(0);
			let angle = (i as f64) * 2.0 * PI / data.nodes.len() as f64;
			idx.push(graph.add_node(NodeData {
				x: (SEED_RADIUS * angle.cos()) as f32,
				y: (SEED_RADIUS * angle.sin()) as f32,
				mass: 10.0,
				is_anchor: false,
				user_data: NodeInfo {
					color: COLORS[depth as usize % COLORS.len()].into(),
				},
			}));
		}

		for link in &data.links {
			if let (Some(&src), Some(&tgt)) = (idx.get(link.source), idx.get(link.target)) {
				graph.add_edge(src, tgt, EdgeData::default());
			}
		}

		Self { graph, ticks: 0 }
	}

	/// Advance the simulation by one step.
	pub fn tick(&mut self, dt: f32) {
		self.graph.update(dt);
		self.ticks += 1;
	}

	/// Nodes in the simulation.
	pub fn node_count(&self) -> usize {
		let mut count = 0;
		self.graph.visit_nodes(|_| count += 1);
		count
	}

	/// Edges in the simulation.
	pub fn edge_count(&self) -> usize {
		let mut count = 0;
		self.graph.visit_edges(|_, _, _| count += 1);
		count
	}
}

/// Map a layout position onto the world `z = 0` plane, y up.
pub fn to_world(x: f32, y: f32) -> Vec3 {
	Vec3::new(x * WORLD_SCALE, -y * WORLD_SCALE, 0.0)
}

/// Something drawn in the scene.
pub enum SceneObject {
	/// The spinning cube.
	Placeholder(SpinningCube),
	/// The force-directed citation graph.
	Layout(LayoutObject),
}

/// Root of everything the renderer draws.
pub struct Scene {
	/// CSS clear color.
	pub background: &'static str,
	/// Objects, drawn in order.
	pub objects: Vec<SceneObject>,
}

impl Scene {
	/// Scene holding the object `strategy` asks for.
	pub fn new(strategy: RenderStrategy, data: &GraphData) -> Self {
		let object = match strategy {
			RenderStrategy::Placeholder => SceneObject::Placeholder(SpinningCube::default()),
			RenderStrategy::ForceLayout => SceneObject::Layout(LayoutObject::new(data)),
		};
		Self {
			background: "#000000",
			objects: vec![object],
		}
	}

	/// Advance every object by one frame.
	pub fn tick(&mut self, dt: f32) {
		for object in &mut self.objects {
			match object {
				SceneObject::Placeholder(cube) => cube.tick(),
				SceneObject::Layout(layout) => layout.tick(dt),
			}
		}
	}
}
