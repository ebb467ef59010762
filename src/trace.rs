//! Hooks for watching a search step by step.
//!
//! A [`SearchObserver`] is handed a [`SearchStep`] once per iteration of the search loop. Observers
//! only ever get shared access, so attaching one never changes the result of a search.
//!
//! ## Examples
//! ```
//! use maze_astar::{prelude::*, trace};
//!
//! let maze = Maze::new(&[
//!     [-1, 0],
//!     [ 1, 9],
//! ])?;
//!
//! let mut most_explored = 0;
//! let report = PathFinder::new(&maze).a_star_search_traced(&mut trace::from_fn(|step| {
//!     most_explored = most_explored.max(step.explored().count());
//! }));
//!
//! assert!(report.is_found());
//! assert_eq!(most_explored, report.iterations());
//! # Ok::<(), maze_astar::InvalidGrid>(())
//! ```

use crate::{
	node::{NodeArena, NodeId, SearchNode},
	Cost, Point,
};

/// A read-only view of the search state during one iteration.
///
/// The selected Node has already been moved from the frontier to the explored list when the
/// view is created.
#[derive(Clone, Copy, Debug)]
pub struct SearchStep<'a> {
	pub(crate) iteration: usize,
	pub(crate) current: NodeId,
	pub(crate) nodes: &'a NodeArena,
	pub(crate) frontier: &'a [NodeId],
	pub(crate) explored: &'a [NodeId],
}

impl<'a> SearchStep<'a> {
	/// The number of Nodes selected so far, including the current one.
	pub fn iteration(&self) -> usize {
		self.iteration
	}

	/// The Node selected in this iteration.
	pub fn current(&self) -> &'a SearchNode {
		&self.nodes[self.current]
	}

	/// The Nodes waiting to be explored, in insertion order.
	pub fn frontier(&self) -> impl Iterator<Item = &'a SearchNode> + 'a {
		let (nodes, frontier) = (self.nodes, self.frontier);
		frontier.iter().map(move |id| &nodes[*id])
	}

	/// The Nodes explored so far, in the order they were explored.
	pub fn explored(&self) -> impl Iterator<Item = &'a SearchNode> + 'a {
		let (nodes, explored) = (self.nodes, self.explored);
		explored.iter().map(move |id| &nodes[*id])
	}

	/// The positions from the start to the current Node.
	pub fn partial_path(&self) -> Vec<Point> {
		self.nodes.path_to(self.current)
	}
}

/// Receives every step of a search.
///
/// Closures can be used through [`from_fn`].
pub trait SearchObserver {
	/// Called once per iteration, before the current Node is checked against the goal.
	fn on_step(&mut self, step: &SearchStep<'_>);
}

/// Turns a closure into a [`SearchObserver`].
pub fn from_fn<F: FnMut(&SearchStep<'_>)>(f: F) -> FromFn<F> {
	FromFn(f)
}

/// An observer calling a closure. See [`from_fn`].
#[derive(Clone, Copy)]
pub struct FromFn<F>(F);

impl<F: FnMut(&SearchStep<'_>)> SearchObserver for FromFn<F> {
	fn on_step(&mut self, step: &SearchStep<'_>) {
		(self.0)(step)
	}
}

impl<F> std::fmt::Debug for FromFn<F> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("FromFn").finish_non_exhaustive()
	}
}

/// An observer that ignores every step.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NoTrace;

impl SearchObserver for NoTrace {
	fn on_step(&mut self, _: &SearchStep<'_>) {}
}

/// An owned copy of one [`SearchStep`].
#[derive(Clone, Debug, PartialEq)]
pub struct StepSnapshot {
	/// see [`SearchStep::iteration`]
	pub iteration: usize,
	/// position of the current Node
	pub current: Point,
	/// accumulated cost of the current Node
	pub cost: Cost,
	/// positions of the frontier, in insertion order
	pub frontier: Vec<Point>,
	/// positions of the explored Nodes, in exploration order
	pub explored: Vec<Point>,
	/// see [`SearchStep::partial_path`]
	pub partial_path: Vec<Point>,
}

impl From<&SearchStep<'_>> for StepSnapshot {
	fn from(step: &SearchStep<'_>) -> StepSnapshot {
		StepSnapshot {
			iteration: step.iteration(),
			current: step.current().pos(),
			cost: step.current().cost(),
			frontier: step.frontier().map(SearchNode::pos).collect(),
			explored: step.explored().map(SearchNode::pos).collect(),
			partial_path: step.partial_path(),
		}
	}
}

/// An observer that keeps a [`StepSnapshot`] of every step.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StepRecorder {
	steps: Vec<StepSnapshot>,
}

impl StepRecorder {
	/// Creates an empty recorder.
	pub fn new() -> StepRecorder {
		StepRecorder::default()
	}
	/// The recorded steps, oldest first.
	pub fn steps(&self) -> &[StepSnapshot] {
		&self.steps
	}
	/// Takes the recorded steps out of the recorder.
	pub fn into_steps(self) -> Vec<StepSnapshot> {
		self.steps
	}
}

impl SearchObserver for StepRecorder {
	fn on_step(&mut self, step: &SearchStep<'_>) {
		self.steps.push(step.into());
	}
}
