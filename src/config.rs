/// Options for configuring a [`PathFinder`](crate::PathFinder)
///
/// Default options:
/// ```
/// # use maze_astar::SearchConfig;
/// assert_eq!(
/// 	SearchConfig {
/// 		max_iterations: 100_000,
/// 		recheck_explored: false,
/// 	},
/// 	Default::default()
/// );
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchConfig {
	/// The number of Nodes a search may select before giving up (defaults to `100_000`).
	///
	/// The search stops as soon as it selects Node number `max_iterations`, before checking
	/// whether that Node is the Goal. It returns the Path to that Node, marked as
	/// [`Incomplete`](crate::SearchOutcome::Incomplete). A limit of `0` behaves like `1`.
	pub max_iterations: usize,
	/// `false` (default): a newly discovered Node is only compared against the frontier. An
	/// explored Cell that is reached again while not on the frontier is put back on it and
	/// explored again. If the Goal cannot be reached, this usually means the search only ends
	/// once [`max_iterations`](SearchConfig::max_iterations) is reached.
	///
	/// `true`: a new Node is also dropped if an explored Node on the same Cell was at most
	/// as expensive.
	///
	/// Turning this on saves work but may change which of several equally expensive Paths
	/// is returned.
	pub recheck_explored: bool,
}

impl SearchConfig {
	/// Only the frontier is checked for duplicates. This is the default.
	///
	/// Values:
	/// ```
	/// # use maze_astar::SearchConfig;
	/// assert_eq!(SearchConfig::FRONTIER_ONLY, SearchConfig::default());
	/// ```
	pub const FRONTIER_ONLY: SearchConfig = SearchConfig {
		max_iterations: 100_000,
		recheck_explored: false,
	};
	/// an example SearchConfig that skips Cells that were already explored more cheaply
	///
	/// Values:
	/// ```
	/// # use maze_astar::SearchConfig;
	/// assert_eq!(
	/// 	SearchConfig {
	/// 		max_iterations: 100_000,
	/// 		recheck_explored: true,
	/// 	},
	/// 	SearchConfig::PRUNE_EXPLORED
	/// );
	/// ```
	pub const PRUNE_EXPLORED: SearchConfig = SearchConfig {
		max_iterations: 100_000,
		recheck_explored: true,
	};

	/// Returns a copy with a different iteration limit.
	///
	/// ```
	/// # use maze_astar::SearchConfig;
	/// let config = SearchConfig::default().with_max_iterations(20);
	/// assert_eq!(config.max_iterations, 20);
	/// assert!(!config.recheck_explored);
	/// ```
	pub fn with_max_iterations(mut self, max_iterations: usize) -> SearchConfig {
		self.max_iterations = max_iterations;
		self
	}

	/// Returns a copy with [`recheck_explored`](SearchConfig::recheck_explored) set.
	pub fn with_recheck_explored(mut self, recheck_explored: bool) -> SearchConfig {
		self.recheck_explored = recheck_explored;
		self
	}
}

impl Default for SearchConfig {
	fn default() -> SearchConfig {
		SearchConfig::FRONTIER_ONLY
	}
}

#[cfg(all(test, feature = "serde"))]
mod tests {
	use super::*;

	#[test]
	fn deserialize_partial() {
		let config: SearchConfig = serde_json::from_str(r#"{ "max_iterations": 50 }"#).unwrap();
		assert_eq!(config, SearchConfig::default().with_max_iterations(50));
	}
}
