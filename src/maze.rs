use crate::{
	cell::Cell,
	error::{InvalidGrid, Result},
	neighbors, Cost, Point,
};

/// The cost given to Walls.
///
/// Larger than the cost of any Path a supported Maze can produce, so any Cell at or above
/// this cost is never expanded.
pub const TOO_EXPENSIVE: Cost = 1000.0;

/// A static obstacle map together with the heuristic cost of every Cell.
///
/// The heuristic of a walkable Cell is its straight-line distance to the Goal, Walls cost
/// [`TOO_EXPENSIVE`]. Both maps are derived once in [`Maze::new`] and never change afterwards,
/// so a Maze can be shared freely between searches.
#[derive(Clone, Debug, PartialEq)]
pub struct Maze {
	width: usize,
	height: usize,
	cells: Vec<Cell>,
	heuristic: Vec<Cost>,
	start: Point,
	goal: Point,
}

impl Maze {
	/// Creates a new Maze from rows of cell codes (see [`Cell`]).
	///
	/// `map[y][x]` is the Cell at `(x, y)`.
	///
	/// ## Errors
	/// Fails with [`InvalidGrid`] if the map is smaller than 2x2, has rows of different lengths,
	/// contains unknown codes, or does not have exactly one Start and one Goal.
	///
	/// ## Examples
	/// ```
	/// use maze_astar::{Maze, InvalidGrid, TOO_EXPENSIVE};
	///
	/// let maze = Maze::new(&[
	///     [-1, 0],
	///     [ 1, 9],
	/// ])?;
	/// assert_eq!(maze.start(), (0, 0));
	/// assert_eq!(maze.goal(), (1, 1));
	/// assert_eq!(maze.cost_at((1, 0)), 1.0);
	/// assert_eq!(maze.cost_at((0, 1)), TOO_EXPENSIVE);
	///
	/// assert_eq!(
	///     Maze::new(&[[-1, 9]]),
	///     Err(InvalidGrid::TooSmall { width: 2, height: 1 })
	/// );
	/// # Ok::<(), InvalidGrid>(())
	/// ```
	pub fn new<R: AsRef<[i32]>>(map: &[R]) -> Result<Maze> {
		let height = map.len();
		let width = map.first().map_or(0, |row| row.as_ref().len());
		if width < 2 || height < 2 {
			return Err(InvalidGrid::TooSmall { width, height });
		}

		let mut cells = Vec::with_capacity(width * height);
		for (y, row) in map.iter().enumerate() {
			let row = row.as_ref();
			if row.len() != width {
				return Err(InvalidGrid::Ragged {
					row: y,
					expected: width,
					found: row.len(),
				});
			}
			for (x, &code) in row.iter().enumerate() {
				let cell =
					Cell::try_from(code).map_err(|code| InvalidGrid::UnknownCell { code, pos: (x, y) })?;
				cells.push(cell);
			}
		}

		Maze::from_cells((width, height), cells)
	}

	/// Creates a new Maze from Cells stored row by row.
	///
	/// ## Panics
	/// if `cells.len() != width * height`
	pub fn from_cells((width, height): (usize, usize), cells: Vec<Cell>) -> Result<Maze> {
		if width < 2 || height < 2 {
			return Err(InvalidGrid::TooSmall { width, height });
		}
		assert_eq!(cells.len(), width * height, "Cell count does not match the size");

		let mut maze = Maze {
			width,
			height,
			cells,
			heuristic: Vec::new(),
			start: (0, 0),
			goal: (0, 0),
		};
		maze.derive_heuristics()?;
		Ok(maze)
	}

	fn derive_heuristics(&mut self) -> Result<()> {
		let mut start = None;
		let mut goal = None;
		for (i, cell) in self.cells.iter().enumerate() {
			let pos = (i % self.width, i / self.width);
			match cell {
				Cell::Start => match start {
					Some(first) => return Err(InvalidGrid::DuplicateStart { first, second: pos }),
					None => start = Some(pos),
				},
				Cell::Goal => match goal {
					Some(first) => return Err(InvalidGrid::DuplicateGoal { first, second: pos }),
					None => goal = Some(pos),
				},
				_ => {}
			}
		}
		self.start = start.ok_or(InvalidGrid::MissingStart)?;
		self.goal = goal.ok_or(InvalidGrid::MissingGoal)?;

		// distances need the final goal, so they are computed only once both markers are known
		let (gx, gy) = (self.goal.0 as Cost, self.goal.1 as Cost);
		self.heuristic = self
			.cells
			.iter()
			.enumerate()
			.map(|(i, cell)| {
				if cell.is_walkable() {
					let (x, y) = ((i % self.width) as Cost, (i / self.width) as Cost);
					((gx - x).powi(2) + (gy - y).powi(2)).sqrt()
				} else {
					TOO_EXPENSIVE
				}
			})
			.collect();
		Ok(())
	}

	/// The number of columns.
	pub fn width(&self) -> usize {
		self.width
	}
	/// The number of rows.
	pub fn height(&self) -> usize {
		self.height
	}
	/// `(width, height)`
	pub fn size(&self) -> (usize, usize) {
		(self.width, self.height)
	}
	/// The position of the only Start Cell.
	pub fn start(&self) -> Point {
		self.start
	}
	/// The position of the only Goal Cell.
	pub fn goal(&self) -> Point {
		self.goal
	}

	/// Checks if `pos` lies on the Maze.
	pub fn in_bounds(&self, pos: Point) -> bool {
		pos.0 < self.width && pos.1 < self.height
	}

	fn ix(&self, (x, y): Point) -> usize {
		y * self.width + x
	}

	/// The Cell at `pos`.
	///
	/// ## Panics
	/// if `pos` is out of bounds
	#[track_caller]
	pub fn cell_at(&self, pos: Point) -> Cell {
		assert!(self.in_bounds(pos), "{:?} is outside of the Maze", pos);
		self.cells[self.ix(pos)]
	}

	/// The Cell at `pos`, or None if `pos` is out of bounds.
	pub fn get_cell(&self, pos: Point) -> Option<Cell> {
		self.in_bounds(pos).then(|| self.cells[self.ix(pos)])
	}

	/// The heuristic cost of `pos`.
	///
	/// This is a plain lookup: making sure `pos` lies on the Maze is up to the caller.
	/// Use [`get_cost`](Maze::get_cost) for a checked version.
	///
	/// ## Panics
	/// if `pos` is out of bounds
	#[track_caller]
	pub fn cost_at(&self, pos: Point) -> Cost {
		assert!(self.in_bounds(pos), "{:?} is outside of the Maze", pos);
		self.heuristic[self.ix(pos)]
	}

	/// The heuristic cost of `pos`, or None if `pos` is out of bounds.
	pub fn get_cost(&self, pos: Point) -> Option<Cost> {
		self.in_bounds(pos).then(|| self.heuristic[self.ix(pos)])
	}

	/// Checks if `pos` lies on the Maze and can be walked on.
	pub fn is_walkable(&self, pos: Point) -> bool {
		self.get_cost(pos).map_or(false, |cost| cost < TOO_EXPENSIVE)
	}

	/// All positions one step away from `pos` that lie on the Maze, in expansion order.
	///
	/// Walls are included; they are filtered by their cost.
	pub fn neighbors(&self, pos: Point) -> impl Iterator<Item = Point> {
		neighbors::neighbors(pos, self.size())
	}

	/// The Cells of row `y`.
	pub fn row(&self, y: usize) -> &[Cell] {
		&self.cells[y * self.width..(y + 1) * self.width]
	}

	/// The heuristic costs of row `y`.
	pub fn heuristic_row(&self, y: usize) -> &[Cost] {
		&self.heuristic[y * self.width..(y + 1) * self.width]
	}
}
