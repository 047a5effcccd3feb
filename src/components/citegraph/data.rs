use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::types::{GraphData, GraphLink, GraphNode};

/// Number of papers shown on the home page.
pub const CITATION_NODES: usize = 300;

/// Build a random recursive tree: every node `i > 0` cites one node drawn
/// uniformly from `0..i`.
pub fn citation_tree<R: Rng + ?Sized>(n: usize, rng: &mut R) -> GraphData {
	let nodes = (0..n).map(|id| GraphNode { id }).collect();
	let links = (1..n)
		.map(|source| GraphLink {
			source,
			target: rng.gen_range(0..source),
		})
		.collect();

	GraphData {
		seed: 0,
		nodes,
		links,
	}
}

/// Reproducible variant of [`citation_tree`].
pub fn seeded_citation_tree(n: usize, seed: u64) -> GraphData {
	let mut rng = StdRng::seed_from_u64(seed);
	GraphData {
		seed,
		..citation_tree(n, &mut rng)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn same_seed_same_graph() {
		assert_eq!(seeded_citation_tree(50, 7), seeded_citation_tree(50, 7));
	}

	#[test]
	fn different_seeds_differ() {
		assert_ne!(
			seeded_citation_tree(50, 1).links,
			seeded_citation_tree(50, 2).links
		);
	}

	#[test]
	fn node_one_always_cites_root() {
		for seed in 0..20 {
			let data = seeded_citation_tree(10, seed);
			assert_eq!(data.links[0], GraphLink { source: 1, target: 0 });
		}
	}

	#[test]
	fn empty_request_gives_empty_graph() {
		let data = seeded_citation_tree(0, 3);
		assert_eq!(data.node_count(), 0);
		assert_eq!(data.link_count(), 0);
	}
}
