use crate::{
	config::SearchConfig,
	maze::{Maze, TOO_EXPENSIVE},
	node::{same_position, NodeArena, NodeId, SearchNode},
	path::Path,
	trace::{NoTrace, SearchObserver, SearchStep},
	Cost, Point, PointMap,
};
use log::{debug, trace, warn};

/// Searches a [`Maze`] for the cheapest Path from its Start to its Goal using
/// [A*](https://en.wikipedia.org/wiki/A*_search_algorithm).
///
/// Moving onto a Cell costs the heuristic value of that Cell, so the accumulated cost of a
/// Path is the sum of the heuristic values of every Cell after the Start. The frontier is
/// ordered by that accumulated cost alone.
///
/// A PathFinder only borrows the Maze. Every search gets a fresh [`SearchSession`], so the
/// same PathFinder can be used any number of times with identical results.
///
/// ## Examples
/// ```
/// use maze_astar::prelude::*;
///
/// let maze = Maze::new(&[
///     [-1, 0, 0],
///     [ 1, 1, 0],
///     [ 9, 0, 0],
/// ])?;
///
/// let report = PathFinder::new(&maze).a_star_search();
/// assert_eq!(report.outcome(), SearchOutcome::Found);
///
/// let path = report.path().unwrap();
/// assert_eq!(path.first(), Some(&maze.start()));
/// assert_eq!(path.last(), Some(&maze.goal()));
/// assert_eq!(path.len(), 7);
/// # Ok::<(), maze_astar::InvalidGrid>(())
/// ```
#[derive(Clone, Copy, Debug)]
pub struct PathFinder<'m> {
	maze: &'m Maze,
	config: SearchConfig,
}

impl<'m> PathFinder<'m> {
	/// Creates a PathFinder with the default [`SearchConfig`].
	pub fn new(maze: &'m Maze) -> PathFinder<'m> {
		PathFinder::with_config(maze, SearchConfig::default())
	}

	/// Creates a PathFinder with a custom [`SearchConfig`].
	pub fn with_config(maze: &'m Maze, config: SearchConfig) -> PathFinder<'m> {
		PathFinder { maze, config }
	}

	/// The Maze being searched.
	pub fn maze(&self) -> &'m Maze {
		self.maze
	}

	/// The options used for every search.
	pub fn config(&self) -> SearchConfig {
		self.config
	}

	/// Starts a new search that can be driven one step at a time.
	pub fn session(&self) -> SearchSession<'m> {
		SearchSession::new(self.maze, self.config)
	}

	/// Runs a search to completion.
	pub fn a_star_search(&self) -> SearchReport {
		self.a_star_search_traced(&mut NoTrace)
	}

	/// Runs a search to completion, handing every step to `observer`.
	pub fn a_star_search_traced<O: SearchObserver + ?Sized>(&self, observer: &mut O) -> SearchReport {
		self.session().run(observer)
	}
}

/// The states a [`SearchSession`] moves through.
///
/// ```text
/// Ready -> Running -> Succeeded
///                  -> Aborted
///                  -> Exhausted
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SearchState {
	/// created, nothing on the frontier yet
	Ready,
	/// at least one step was taken and the search is not over
	Running,
	/// the Goal was selected from the frontier
	Succeeded,
	/// the iteration limit was reached before the Goal was selected
	Aborted,
	/// the frontier ran empty: the Goal cannot be reached
	///
	/// Without [`recheck_explored`](SearchConfig::recheck_explored) this only happens if
	/// the Start has no walkable neighbor.
	Exhausted,
}

impl SearchState {
	/// Checks if no further steps will be taken.
	pub fn is_finished(self) -> bool {
		self.outcome().is_some()
	}

	/// The outcome of a finished search, or None while it is still going.
	pub fn outcome(self) -> Option<SearchOutcome> {
		match self {
			SearchState::Ready | SearchState::Running => None,
			SearchState::Succeeded => Some(SearchOutcome::Found),
			SearchState::Aborted => Some(SearchOutcome::Incomplete),
			SearchState::Exhausted => Some(SearchOutcome::NoPath),
		}
	}
}

/// How a finished search ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchOutcome {
	/// The Path leads to the Goal and is the cheapest one.
	Found,
	/// The iteration limit was reached. The Path leads to the last Node looked at, which is
	/// usually not the Goal.
	Incomplete,
	/// The Goal cannot be reached from the Start. There is no Path.
	NoPath,
}

/// The result of a search.
#[derive(Clone, Debug, PartialEq)]
pub struct SearchReport {
	outcome: SearchOutcome,
	path: Option<Path<Point>>,
	iterations: usize,
	explored: Vec<Point>,
	frontier: Vec<Point>,
}

impl SearchReport {
	/// How the search ended.
	pub fn outcome(&self) -> SearchOutcome {
		self.outcome
	}
	/// Checks if the Goal was reached.
	pub fn is_found(&self) -> bool {
		self.outcome == SearchOutcome::Found
	}
	/// Checks if the search ran out of iterations.
	pub fn is_incomplete(&self) -> bool {
		self.outcome == SearchOutcome::Incomplete
	}
	/// The Path from the Start to the final Node.
	///
	/// None only if the outcome is [`SearchOutcome::NoPath`].
	pub fn path(&self) -> Option<&Path<Point>> {
		self.path.as_ref()
	}
	/// Takes the Path out of the report.
	pub fn into_path(self) -> Option<Path<Point>> {
		self.path
	}
	/// The accumulated cost of the final Node, if there is a Path.
	pub fn cost(&self) -> Option<Cost> {
		self.path.as_ref().map(Path::cost)
	}
	/// The number of Nodes taken off the frontier.
	pub fn iterations(&self) -> usize {
		self.iterations
	}
	/// The positions of all explored Nodes, in the order they were explored.
	///
	/// A position can appear more than once if a cheaper way to it was found after it had
	/// been explored.
	pub fn explored(&self) -> &[Point] {
		&self.explored
	}
	/// The positions left on the frontier, in insertion order.
	pub fn frontier(&self) -> &[Point] {
		&self.frontier
	}
}

/// The mutable state of a single search.
///
/// Created by [`PathFinder::session`]. Owns every Node, the frontier and the explored list;
/// nothing is shared with other sessions.
#[derive(Clone, Debug)]
pub struct SearchSession<'m> {
	maze: &'m Maze,
	config: SearchConfig,
	state: SearchState,
	nodes: NodeArena,
	frontier: Vec<NodeId>,
	explored: Vec<NodeId>,
	/// frontier Nodes per position, to find duplicates without scanning the whole frontier
	frontier_at: PointMap<Vec<NodeId>>,
	/// cheapest explored cost per position
	explored_at: PointMap<Cost>,
	iterations: usize,
	current: Option<NodeId>,
}

impl<'m> SearchSession<'m> {
	/// Creates a session in the [`Ready`](SearchState::Ready) state.
	pub fn new(maze: &'m Maze, config: SearchConfig) -> SearchSession<'m> {
		SearchSession {
			maze,
			config,
			state: SearchState::Ready,
			nodes: NodeArena::with_capacity(maze.width() * maze.height()),
			frontier: Vec::new(),
			explored: Vec::new(),
			frontier_at: PointMap::default(),
			explored_at: PointMap::default(),
			iterations: 0,
			current: None,
		}
	}

	/// The current state.
	pub fn state(&self) -> SearchState {
		self.state
	}

	/// The number of Nodes taken off the frontier so far.
	pub fn iterations(&self) -> usize {
		self.iterations
	}

	/// All Nodes created so far.
	pub fn nodes(&self) -> &NodeArena {
		&self.nodes
	}

	/// The Node selected by the latest step.
	pub fn current(&self) -> Option<&SearchNode> {
		self.current.map(|id| &self.nodes[id])
	}

	/// Takes a single step of the search and returns the new state.
	///
	/// Does nothing once the search is finished.
	pub fn step<O: SearchObserver + ?Sized>(&mut self, observer: &mut O) -> SearchState {
		match self.state {
			SearchState::Ready => self.initialize(),
			SearchState::Running => {}
			finished => return finished,
		}

		let index = match self.select() {
			Some(index) => index,
			None => {
				debug!(
					"Frontier exhausted after {} iterations: {:?} is unreachable",
					self.iterations,
					self.maze.goal()
				);
				self.state = SearchState::Exhausted;
				return self.state;
			}
		};

		// `remove` keeps the insertion order of the remaining frontier, which decides ties
		let current = self.frontier.remove(index);
		let node = self.nodes[current];
		self.unlist_frontier(node.pos(), current);
		self.explored.push(current);
		let best = self.explored_at.entry(node.pos()).or_insert(node.cost());
		if node.cost() < *best {
			*best = node.cost();
		}
		self.current = Some(current);
		self.iterations += 1;
		trace!(
			"Iteration {}: selected {:?} at cost {}",
			self.iterations,
			node.pos(),
			node.cost()
		);

		observer.on_step(&SearchStep {
			iteration: self.iterations,
			current,
			nodes: &self.nodes,
			frontier: &self.frontier,
			explored: &self.explored,
		});

		if self.iterations >= self.config.max_iterations {
			warn!(
				"Too many iterations ({}), returning the partial Path to {:?}",
				self.iterations,
				node.pos()
			);
			self.state = SearchState::Aborted;
		} else if node.pos() == self.maze.goal() {
			debug!(
				"Completed after {} iterations, cost {}",
				self.iterations,
				node.cost()
			);
			self.state = SearchState::Succeeded;
		} else {
			self.expand(current);
		}
		self.state
	}

	/// Steps until the search is finished.
	pub fn run<O: SearchObserver + ?Sized>(mut self, observer: &mut O) -> SearchReport {
		while !self.step(observer).is_finished() {}
		self.report()
	}

	/// The result of the search, or None if it is not finished yet.
	pub fn into_report(self) -> Option<SearchReport> {
		self.state.is_finished().then(|| self.report())
	}

	fn report(&self) -> SearchReport {
		let outcome = self
			.state
			.outcome()
			.unwrap_or(SearchOutcome::NoPath);
		let path = match outcome {
			SearchOutcome::NoPath => None,
			SearchOutcome::Found | SearchOutcome::Incomplete => self
				.current
				.map(|id| Path::new(self.nodes.path_to(id), self.nodes[id].cost())),
		};
		SearchReport {
			outcome,
			path,
			iterations: self.iterations,
			explored: self.positions(&self.explored),
			frontier: self.positions(&self.frontier),
		}
	}

	fn positions(&self, ids: &[NodeId]) -> Vec<Point> {
		ids.iter().map(|id| self.nodes[*id].pos()).collect()
	}

	fn initialize(&mut self) {
		debug!(
			"Searching best Path from {:?} to {:?}",
			self.maze.start(),
			self.maze.goal()
		);
		let start = self.nodes.add_node(self.maze.start(), 0.0, None);
		self.list_frontier(self.maze.start(), start);
		self.state = SearchState::Running;
	}

	/// Index of the cheapest frontier Node. The earliest one wins ties.
	fn select(&self) -> Option<usize> {
		let mut best: Option<(usize, Cost)> = None;
		for (i, id) in self.frontier.iter().enumerate() {
			let cost = self.nodes[*id].cost();
			match best {
				Some((_, best_cost)) if best_cost <= cost => {}
				_ => best = Some((i, cost)),
			}
		}
		best.map(|(i, _)| i)
	}

	fn expand(&mut self, current: NodeId) {
		let node = self.nodes[current];
		for pos in self.maze.neighbors(node.pos()) {
			let step_cost = self.maze.cost_at(pos);
			if step_cost >= TOO_EXPENSIVE {
				continue;
			}
			let candidate = SearchNode::new(pos, step_cost + node.cost(), Some(current));

			if self.on_frontier_for_less(&candidate) {
				continue;
			}
			if self.config.recheck_explored && self.explored_for_less(&candidate) {
				continue;
			}

			let id = self.nodes.add_node(pos, candidate.cost(), Some(current));
			self.list_frontier(pos, id);
		}
	}

	fn on_frontier_for_less(&self, candidate: &SearchNode) -> bool {
		self.frontier_at
			.get(&candidate.pos())
			.into_iter()
			.flatten()
			.map(|id| &self.nodes[*id])
			.any(|other| same_position(other, candidate) && other.cost() <= candidate.cost())
	}

	fn explored_for_less(&self, candidate: &SearchNode) -> bool {
		self.explored_at
			.get(&candidate.pos())
			.map_or(false, |best| *best <= candidate.cost())
	}

	fn list_frontier(&mut self, pos: Point, id: NodeId) {
		self.frontier.push(id);
		self.frontier_at.entry(pos).or_default().push(id);
	}

	fn unlist_frontier(&mut self, pos: Point, id: NodeId) {
		if let Some(ids) = self.frontier_at.get_mut(&pos) {
			ids.retain(|other| *other != id);
			if ids.is_empty() {
				self.frontier_at.remove(&pos);
			}
		}
	}
}
