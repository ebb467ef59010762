//! The moves a search may take from one Cell to the next

use crate::Point;

/// One of the 4 axis-aligned steps.
///
/// The declaration order is the order in which a search expands the neighbors of a Node,
/// which decides between equally expensive Paths.
///
/// ```text
/// A: Agent, o: reachable in one step
///   o
///   |
/// o-A-o
///   |
///   o
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Dir {
	/// `(0, -1)`
	UP = 0,
	/// `(0, 1)`
	DOWN = 1,
	/// `(-1, 0)`
	LEFT = 2,
	/// `(1, 0)`
	RIGHT = 3,
}
pub use self::Dir::*;

const UNIT_STEPS: [(isize, isize); 4] = [(0, -1), (0, 1), (-1, 0), (1, 0)];

impl Dir {
	/// All Dirs in expansion order.
	pub fn all() -> std::iter::Copied<std::slice::Iter<'static, Dir>> {
		[UP, DOWN, LEFT, RIGHT].iter().copied()
	}
	/// The `(dx, dy)` offset of this Dir.
	pub fn delta(self) -> (isize, isize) {
		UNIT_STEPS[self as usize]
	}
	/// The Dir that undoes this one.
	pub fn opposite(self) -> Dir {
		match self {
			UP => DOWN,
			DOWN => UP,
			LEFT => RIGHT,
			RIGHT => LEFT,
		}
	}
	/// The Dir leading from `from` to `to`, if they are exactly one step apart.
	pub fn between(from: Point, to: Point) -> Option<Dir> {
		Dir::all().find(|dir| step(from, *dir, (usize::MAX, usize::MAX)) == Some(to))
	}
}

/// Moves `pos` one step in `dir`, returning None if that leaves a Grid of size `(w, h)`.
pub fn step(pos: Point, dir: Dir, (w, h): (usize, usize)) -> Option<Point> {
	let (dx, dy) = dir.delta();
	let x = pos.0.checked_add_signed(dx)?;
	let y = pos.1.checked_add_signed(dy)?;
	if x < w && y < h {
		Some((x, y))
	} else {
		None
	}
}

/// All in-bounds neighbors of `pos` on a Grid of size `(w, h)`, in expansion order.
pub fn neighbors(pos: Point, size: (usize, usize)) -> impl Iterator<Item = Point> {
	Dir::all().filter_map(move |dir| step(pos, dir, size))
}
