//! Plain text pictures of a [`Maze`] and of a search in progress.
//!
//! | glyph | meaning                |
//! |-------|------------------------|
//! | `#`   | Wall                   |
//! | `.`   | empty                  |
//! | `S`   | Start                  |
//! | `G`   | Goal                   |
//! | `?`   | on the frontier        |
//! | `x`   | explored               |
//! | `o`   | on the Path            |
//! | `@`   | last position of Path  |

use crate::{
	node::SearchNode,
	trace::{SearchObserver, SearchStep},
	Maze, Point,
};
use std::fmt;

/// A Maze with search progress drawn on top.
///
/// Later layers cover earlier ones: frontier, then explored, then the Path.
///
/// ## Examples
/// ```
/// use maze_astar::{prelude::*, render::Render};
///
/// let maze = Maze::new(&[
///     [-1, 0],
///     [ 1, 9],
/// ])?;
/// let report = PathFinder::new(&maze).a_star_search();
///
/// let picture = Render::new(&maze)
///     .path(report.path().unwrap().as_slice())
///     .to_string();
/// assert_eq!(picture, "oo\n#@\n");
/// # Ok::<(), maze_astar::InvalidGrid>(())
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Render<'a> {
	maze: &'a Maze,
	path: &'a [Point],
	step: usize,
	frontier: &'a [Point],
	explored: &'a [Point],
}

impl<'a> Render<'a> {
	/// A picture of just the Maze.
	pub fn new(maze: &'a Maze) -> Render<'a> {
		Render {
			maze,
			path: &[],
			step: 0,
			frontier: &[],
			explored: &[],
		}
	}
	/// Draws `path` on top.
	pub fn path(mut self, path: &'a [Point]) -> Render<'a> {
		self.path = path;
		self
	}
	/// Only draws the first `step` positions of the Path, with the last of them marked as the
	/// end. `0` (the default) draws the whole Path.
	pub fn step(mut self, step: usize) -> Render<'a> {
		self.step = step;
		self
	}
	/// Marks the `frontier` positions.
	pub fn frontier(mut self, frontier: &'a [Point]) -> Render<'a> {
		self.frontier = frontier;
		self
	}
	/// Marks the `explored` positions.
	pub fn explored(mut self, explored: &'a [Point]) -> Render<'a> {
		self.explored = explored;
		self
	}

	fn glyphs(&self) -> Vec<char> {
		let (width, height) = self.maze.size();
		let mut glyphs = Vec::with_capacity(width * height);
		for y in 0..height {
			glyphs.extend(self.maze.row(y).iter().map(|cell| cell.glyph()));
		}
		let mut mark = |points: &[Point], glyph: char| {
			for &(x, y) in points.iter().filter(|p| self.maze.in_bounds(**p)) {
				glyphs[y * width + x] = glyph;
			}
		};
		mark(self.frontier, '?');
		mark(self.explored, 'x');
		let path = match self.step {
			0 => self.path,
			step => &self.path[..step.min(self.path.len())],
		};
		mark(path, 'o');
		if let Some(&last) = path.last() {
			mark(&[last], '@');
		}
		glyphs
	}
}

impl fmt::Display for Render<'_> {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		let width = self.maze.width();
		for row in self.glyphs().chunks(width) {
			let line: String = row.iter().collect();
			writeln!(f, "{}", line)?;
		}
		Ok(())
	}
}

impl fmt::Display for Maze {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		Render::new(self).fmt(f)
	}
}

/// An observer that logs a picture of every step at `trace` level.
#[derive(Clone, Copy, Debug)]
pub struct LogTrace<'a> {
	maze: &'a Maze,
}

impl<'a> LogTrace<'a> {
	/// Creates a LogTrace drawing on `maze`.
	pub fn new(maze: &'a Maze) -> LogTrace<'a> {
		LogTrace { maze }
	}
}

impl SearchObserver for LogTrace<'_> {
	fn on_step(&mut self, step: &SearchStep<'_>) {
		if !log::log_enabled!(log::Level::Trace) {
			return;
		}
		let path = step.partial_path();
		let frontier: Vec<Point> = step.frontier().map(SearchNode::pos).collect();
		let explored: Vec<Point> = step.explored().map(SearchNode::pos).collect();
		let picture = Render::new(self.maze)
			.frontier(&frontier)
			.explored(&explored)
			.path(&path);
		log::trace!("---\nIteration #{}\n{}", step.iteration(), picture);
	}
}
