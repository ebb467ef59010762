use crate::{Cost, Point};

/// The Type used to reference a [`SearchNode`] inside a [`NodeArena`]
pub type NodeId = usize;

/// A Cell reached during a search, together with how it was reached.
///
/// Nodes never change once created. Cost accumulation is done by whoever creates them.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SearchNode {
	pos: Point,
	cost: Cost,
	parent: Option<NodeId>,
}

impl SearchNode {
	/// Creates a new Node at `pos` that was reached from `parent` for a total of `cost`.
	pub fn new(pos: Point, cost: Cost, parent: Option<NodeId>) -> SearchNode {
		SearchNode { pos, cost, parent }
	}
	/// The Cell of this Node.
	pub fn pos(&self) -> Point {
		self.pos
	}
	/// The accumulated cost of the Path from the start to this Node.
	pub fn cost(&self) -> Cost {
		self.cost
	}
	/// The Node this one was reached from. None for the start.
	pub fn parent(&self) -> Option<NodeId> {
		self.parent
	}
}

/// Checks if two Nodes stand on the same Cell.
///
/// This is the only notion of sameness the search uses, regardless of cost or ancestry.
pub fn same_position(a: &SearchNode, b: &SearchNode) -> bool {
	a.pos == b.pos
}

/// Owns every Node created during a single search.
///
/// Nodes are only ever added, so the parent links always form a tree rooted at the start.
#[derive(Clone, Debug, Default)]
pub struct NodeArena {
	nodes: slab::Slab<SearchNode>,
}

impl NodeArena {
	/// Creates an empty arena.
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates an empty arena with room for `capacity` Nodes.
	pub fn with_capacity(capacity: usize) -> Self {
		Self {
			nodes: slab::Slab::with_capacity(capacity),
		}
	}

	/// The number of Nodes created so far.
	pub fn len(&self) -> usize {
		self.nodes.len()
	}

	/// Checks if no Node was created yet.
	pub fn is_empty(&self) -> bool {
		self.nodes.is_empty()
	}

	/// Stores a new Node and returns its id.
	///
	/// ## Panics
	/// if `parent` is not an id of this arena
	#[track_caller]
	pub fn add_node(&mut self, pos: Point, cost: Cost, parent: Option<NodeId>) -> NodeId {
		if let Some(parent) = parent {
			assert!(self.nodes.contains(parent), "unknown parent Node {}", parent);
		}
		self.nodes.insert(SearchNode::new(pos, cost, parent))
	}

	/// The Node with `id`, if it exists.
	pub fn get(&self, id: NodeId) -> Option<&SearchNode> {
		self.nodes.get(id)
	}

	/// Iterates over `id` and all its ancestors, ending with the start Node.
	pub fn ancestry(&self, id: NodeId) -> Ancestry<'_> {
		Ancestry {
			arena: self,
			next: Some(id),
		}
	}

	/// The positions from the start to the Node with `id`.
	pub fn path_to(&self, id: NodeId) -> Vec<Point> {
		let mut path: Vec<Point> = self.ancestry(id).map(SearchNode::pos).collect();
		path.reverse();
		path
	}

	/// Iterates over all Nodes in creation order.
	pub fn iter(&self) -> slab::Iter<'_, SearchNode> {
		self.nodes.iter()
	}
}

use std::ops::Index;
impl Index<NodeId> for NodeArena {
	type Output = SearchNode;
	#[track_caller]
	fn index(&self, index: NodeId) -> &SearchNode {
		&self.nodes[index]
	}
}

/// Iterator over the ancestry of a Node. See [`NodeArena::ancestry`].
#[derive(Clone, Debug)]
pub struct Ancestry<'a> {
	arena: &'a NodeArena,
	next: Option<NodeId>,
}

impl<'a> Iterator for Ancestry<'a> {
	type Item = &'a SearchNode;
	fn next(&mut self) -> Option<Self::Item> {
		let node = self.arena.get(self.next?)?;
		self.next = node.parent;
		Some(node)
	}
}

impl std::iter::FusedIterator for Ancestry<'_> {}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn path_to() {
		let mut nodes = NodeArena::new();
		let start = nodes.add_node((0, 0), 0.0, None);
		let a = nodes.add_node((1, 0), 1.0, Some(start));
		let b = nodes.add_node((1, 1), 1.5, Some(a));
		let c = nodes.add_node((0, 1), 2.0, Some(start));

		assert_eq!(nodes.len(), 4);
		assert_eq!(nodes.path_to(b), vec![(0, 0), (1, 0), (1, 1)]);
		assert_eq!(nodes.path_to(c), vec![(0, 0), (0, 1)]);
		assert_eq!(nodes.path_to(start), vec![(0, 0)]);
		assert_eq!(nodes[b].parent(), Some(a));
		assert_eq!(nodes[b].cost(), 1.5);
	}

	#[test]
	fn ancestry() {
		let mut nodes = NodeArena::new();
		let start = nodes.add_node((2, 2), 0.0, None);
		let a = nodes.add_node((2, 1), 3.0, Some(start));
		let costs: Vec<Cost> = nodes.ancestry(a).map(SearchNode::cost).collect();
		assert_eq!(costs, vec![3.0, 0.0]);
	}

	#[test]
	fn same_position_ignores_cost_and_parent() {
		let a = SearchNode::new((3, 4), 1.0, None);
		let b = SearchNode::new((3, 4), 7.5, Some(12));
		let c = SearchNode::new((4, 3), 1.0, None);
		assert!(same_position(&a, &b));
		assert!(!same_position(&a, &c));
		assert_ne!(a, b);
	}

	#[test]
	#[should_panic]
	fn unknown_parent() {
		let mut nodes = NodeArena::new();
		nodes.add_node((0, 0), 0.0, Some(3));
	}
}
