/// A paper in the citation graph.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GraphNode {
	/// Position in `0..N`.
	pub id: usize,
}

/// A citation from `source` to an earlier paper `target`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GraphLink {
	/// Citing node.
	pub source: usize,
	/// Cited node, always lower than `source`.
	pub target: usize,
}

/// Node and link set handed to the viewport.
///
/// `seed` identifies the random draw the data came from, so two values built
/// from the same seed and size compare equal.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GraphData {
	/// Seed of the random draw, 0 when unseeded.
	pub seed: u64,
	/// Nodes ordered by id.
	pub nodes: Vec<GraphNode>,
	/// Links ordered by source.
	pub links: Vec<GraphLink>,
}

impl GraphData {
	/// Number of nodes.
	pub fn node_count(&self) -> usize {
		self.nodes.len()
	}

	/// Number of links.
	pub fn link_count(&self) -> usize {
		self.links.len()
	}

	/// Tree depth of every node, indexed by node id. Roots sit at depth 0.
	///
	/// Links always point at an earlier node, so one pass in id order sees
	/// every parent before its children.
	pub fn depths(&self) -> Vec<u32> {
		let mut parent = vec![None; self.nodes.len()];
		for link in &self.links {
			if link.source < parent.len() && link.target < link.source {
				parent[link.source] = Some(link.target);
			}
		}

		let mut depths = vec![0u32; self.nodes.len()];
		for id in 0..depths.len() {
			if let Some(p) = parent[id] {
				depths[id] = depths[p] + 1;
			}
		}
		depths
	}
}
