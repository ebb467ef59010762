//! The kinds of Cells a Maze is made of

/// A single Cell of the obstacle map.
///
/// Maps are handed in as integer codes:
///
/// | code | Cell            |
/// |------|-----------------|
/// | `0`  | [`Cell::Empty`] |
/// | `1`  | [`Cell::Wall`]  |
/// | `-1` | [`Cell::Start`] |
/// | `9`  | [`Cell::Goal`]  |
///
/// ```
/// # use maze_astar::Cell;
/// assert_eq!(Cell::try_from(9), Ok(Cell::Goal));
/// assert_eq!(i32::from(Cell::Start), -1);
/// assert_eq!(Cell::try_from(4), Err(4));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
	/// walkable space
	Empty,
	/// impassable
	Wall,
	/// where the search begins. Walkable.
	Start,
	/// where the search ends. Walkable.
	Goal,
}
pub use self::Cell::*;

impl Cell {
	/// The integer code of this Cell in the map format.
	pub fn code(self) -> i32 {
		match self {
			Empty => 0,
			Wall => 1,
			Start => -1,
			Goal => 9,
		}
	}

	/// Returns `false` only for [`Cell::Wall`].
	pub fn is_walkable(self) -> bool {
		self != Wall
	}

	/// The ASCII character used when printing a Maze.
	pub fn glyph(self) -> char {
		match self {
			Empty => '.',
			Wall => '#',
			Start => 'S',
			Goal => 'G',
		}
	}
}

macro_rules! impl_code_conversions {
	($($type:ty),+) => {$(
		impl TryFrom<$type> for Cell {
			/// the rejected code
			type Error = $type;
			fn try_from(code: $type) -> Result<Cell, $type> {
				match code {
					0 => Ok(Empty),
					1 => Ok(Wall),
					-1 => Ok(Start),
					9 => Ok(Goal),
					other => Err(other),
				}
			}
		}
		impl From<Cell> for $type {
			#[allow(trivial_numeric_casts)]
			fn from(cell: Cell) -> $type {
				cell.code() as $type
			}
		}
	)+}
}

impl_code_conversions!(i8, i16, i32, i64, isize);

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn codes_round_trip() {
		for cell in [Empty, Wall, Start, Goal] {
			assert_eq!(Cell::try_from(cell.code()), Ok(cell));
		}
	}

	#[test]
	fn unknown_codes() {
		assert_eq!(Cell::try_from(2i8), Err(2));
		assert_eq!(Cell::try_from(-9i64), Err(-9));
	}

	#[test]
	fn walls_block() {
		assert!(!Wall.is_walkable());
		assert!(Start.is_walkable());
		assert!(Goal.is_walkable());
		assert!(Empty.is_walkable());
	}
}
