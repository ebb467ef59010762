//! Searching many independent Mazes at once.
//!
//! With the `parallel` feature (enabled by default) the searches are spread across threads
//! using [rayon](https://docs.rs/rayon). Each search owns its own
//! [`SearchSession`](crate::SearchSession), so the results are identical to searching the
//! Mazes one after the other.

use crate::{Maze, PathFinder, SearchConfig, SearchReport};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Searches every Maze in `mazes` with the same `config`.
///
/// The reports are in the same order as the Mazes.
///
/// ## Examples
/// ```
/// use maze_astar::{prelude::*, batch};
///
/// let mazes = [
///     Maze::new(&[[-1, 9], [0, 0]])?,
///     Maze::new(&[[-1, 1], [1, 9]])?,
/// ];
/// let reports = batch::search_all(&mazes, SearchConfig::default());
///
/// assert_eq!(reports[0].outcome(), SearchOutcome::Found);
/// assert_eq!(reports[1].outcome(), SearchOutcome::NoPath);
/// # Ok::<(), maze_astar::InvalidGrid>(())
/// ```
pub fn search_all(mazes: &[Maze], config: SearchConfig) -> Vec<SearchReport> {
	log::debug!("Searching {} Mazes", mazes.len());

	#[cfg(feature = "parallel")]
	let iter = mazes.par_iter();
	#[cfg(not(feature = "parallel"))]
	let iter = mazes.iter();

	iter.map(|maze| PathFinder::with_config(maze, config).a_star_search())
		.collect()
}

/// Runs the same search `count` times on one Maze and checks that every run agrees.
///
/// Returns the report of the first run, or None if `count` is 0 or any two runs differ.
pub fn search_repeated(maze: &Maze, config: SearchConfig, count: usize) -> Option<SearchReport> {
	let finder = PathFinder::with_config(maze, config);

	#[cfg(feature = "parallel")]
	let reports: Vec<SearchReport> = (0..count)
		.into_par_iter()
		.map(|_| finder.a_star_search())
		.collect();
	#[cfg(not(feature = "parallel"))]
	let reports: Vec<SearchReport> = (0..count).map(|_| finder.a_star_search()).collect();

	let (first, rest) = reports.split_first()?;
	if rest.iter().all(|report| report == first) {
		Some(first.clone())
	} else {
		log::warn!("Repeated searches on the same Maze disagree");
		None
	}
}
