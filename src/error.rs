//! Error types for building a [`Maze`](crate::Maze)

use thiserror::Error;

use crate::Point;

/// The reasons a map can be rejected when building a [`Maze`](crate::Maze).
///
/// Every variant is fatal: no partially built Maze is ever returned.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum InvalidGrid {
	/// The map is narrower or shorter than 2 cells.
	#[error("Maze must be at least 2x2, got {width}x{height}")]
	TooSmall {
		/// number of columns in the first row
		width: usize,
		/// number of rows
		height: usize,
	},

	/// A row does not have the same length as the first row.
	#[error("row {row} has {found} cells, expected {expected}")]
	Ragged {
		/// index of the offending row
		row: usize,
		/// length of the first row
		expected: usize,
		/// length of the offending row
		found: usize,
	},

	/// A cell holds a code other than 0, 1, -1 or 9.
	#[error("unknown cell code {code} at {pos:?}")]
	UnknownCell {
		/// the unrecognised code
		code: i32,
		/// where it was found
		pos: Point,
	},

	/// No cell is marked as the Start.
	#[error("Maze has no start cell")]
	MissingStart,

	/// No cell is marked as the Goal.
	#[error("Maze has no goal cell")]
	MissingGoal,

	/// More than one cell is marked as the Start.
	#[error("Maze has a second start cell at {second:?} (first at {first:?})")]
	DuplicateStart {
		/// the first Start found in row-major order
		first: Point,
		/// the next one
		second: Point,
	},

	/// More than one cell is marked as the Goal.
	#[error("Maze has a second goal cell at {second:?} (first at {first:?})")]
	DuplicateGoal {
		/// the first Goal found in row-major order
		first: Point,
		/// the next one
		second: Point,
	},
}

/// Shorthand for results of building a Maze.
pub type Result<T> = std::result::Result<T, InvalidGrid>;
