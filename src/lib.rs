#![warn(
	missing_docs,
	missing_debug_implementations,
	missing_copy_implementations,
	trivial_casts,
	trivial_numeric_casts,
	unsafe_code,
	unstable_features,
	unused_import_braces,
	unused_qualifications
)]

//! A crate to find the cheapest Path through a Maze on a Grid using A*.
//!
//! ## Introduction
//! A Maze is a rectangular Grid of Cells, each of them being empty, a Wall, the Start or the
//! Goal. Movement happens in four directions (up, down, left, right) and Walls can never be
//! entered.
//!
//! Every Cell is given a heuristic value: the straight-line distance from the Cell to the Goal,
//! or [`TOO_EXPENSIVE`] for Walls. Stepping onto a Cell costs its heuristic value, and the
//! search always continues with the frontier Node of lowest accumulated cost. The resulting
//! Paths prefer staying close to the Goal, which is not the same as the shortest Path in steps.
//!
//! ## Examples
//! Building a Maze from a map of cell codes:
//! ```
//! use maze_astar::{Maze, Cell};
//!
//! // 0 = empty, 1 = Wall, -1 = Start, 9 = Goal
//! let maze = Maze::new(&[
//!     [-1, 0, 0, 0],
//!     [ 1, 1, 1, 0],
//!     [ 9, 0, 0, 0],
//! ])?;
//!
//! assert_eq!(maze.size(), (4, 3));
//! assert_eq!(maze.start(), (0, 0));
//! assert_eq!(maze.goal(), (0, 2));
//! assert_eq!(maze.cell_at((1, 1)), Cell::Wall);
//! assert_eq!(maze.cost_at((0, 0)), 2.0);
//! # Ok::<(), maze_astar::InvalidGrid>(())
//! ```
//!
//! ### Pathfinding
//! ```
//! use maze_astar::prelude::*;
//! #
//! # let maze = Maze::new(&[
//! #     [-1, 0, 0, 0],
//! #     [ 1, 1, 1, 0],
//! #     [ 9, 0, 0, 0],
//! # ])?;
//!
//! let report = PathFinder::new(&maze).a_star_search();
//!
//! assert_eq!(report.outcome(), SearchOutcome::Found);
//! let path = report.path().unwrap();
//! assert_eq!(path.len(), 9);
//! assert_eq!(path.last(), Some(&maze.goal()));
//! # Ok::<(), maze_astar::InvalidGrid>(())
//! ```
//!
//! ### Configuration
//! A [`SearchConfig`] limits the number of iterations and decides whether explored Cells are
//! considered when new Nodes are discovered.
//! ```
//! use maze_astar::prelude::*;
//! #
//! # let maze = Maze::new(&[
//! #     [-1, 0, 0, 0],
//! #     [ 1, 1, 1, 0],
//! #     [ 9, 0, 0, 0],
//! # ])?;
//!
//! let config = SearchConfig {
//!     max_iterations: 3,
//!     ..SearchConfig::PRUNE_EXPLORED
//! };
//! let report = PathFinder::with_config(&maze, config).a_star_search();
//!
//! // out of iterations: the Path only leads part of the way
//! assert_eq!(report.outcome(), SearchOutcome::Incomplete);
//! assert_eq!(report.iterations(), 3);
//! # Ok::<(), maze_astar::InvalidGrid>(())
//! ```
//!
//! ### Watching a search
//! Every step of a search can be observed through the [`trace`] module, or driven by hand using
//! a [`SearchSession`]. [`render`] draws a Maze with the progress on top.

/// A shorthand for Points on the grid, as `(x, y)`
pub type Point = (usize, usize);

/// The type of heuristic values and accumulated costs
pub type Cost = f64;

pub(crate) type PointMap<V> = hashbrown::HashMap<Point, V>;

mod error;
pub use self::error::{InvalidGrid, Result};

mod cell;
pub use self::cell::Cell;

pub mod neighbors;

mod maze;
pub use self::maze::{Maze, TOO_EXPENSIVE};

pub mod node;
pub use self::node::{same_position, NodeArena, NodeId, SearchNode};

mod path;
pub use self::path::Path;

mod config;
pub use self::config::SearchConfig;

pub mod trace;

mod path_finder;
pub use self::path_finder::{PathFinder, SearchOutcome, SearchReport, SearchSession, SearchState};

pub mod render;

pub mod batch;

/// The types needed for most searches.
pub mod prelude {
	pub use crate::{
		Cell, InvalidGrid, Maze, Path, PathFinder, Point, SearchConfig, SearchOutcome,
		SearchReport,
	};
}
