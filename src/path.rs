use crate::Cost;

use std::sync::Arc;

/// A sequence of positions together with the accumulated cost of the last one.
///
/// Cloning a Path is cheap: the positions are shared.
#[derive(Debug, Clone, PartialEq)]
pub struct Path<P> {
	path: Arc<[P]>,
	cost: Cost,
}

impl<P> Path<P> {
	/// Creates a new Path.
	pub fn new(path: Vec<P>, cost: Cost) -> Path<P> {
		Path {
			path: path.into(),
			cost,
		}
	}

	/// The accumulated cost of the final position.
	pub fn cost(&self) -> Cost {
		self.cost
	}

	/// The number of positions, including the first one.
	pub fn len(&self) -> usize {
		self.path.len()
	}

	/// Checks if there are no positions.
	pub fn is_empty(&self) -> bool {
		self.path.is_empty()
	}

	/// The first position, if any.
	pub fn first(&self) -> Option<&P> {
		self.path.first()
	}

	/// The last position, if any.
	pub fn last(&self) -> Option<&P> {
		self.path.last()
	}

	/// The positions as a slice.
	pub fn as_slice(&self) -> &[P] {
		&self.path
	}

	/// Returns an Iterator over the Path
	pub fn iter(&self) -> std::slice::Iter<'_, P> {
		self.path.iter()
	}
}

use std::ops::Index;

impl<P> Index<usize> for Path<P> {
	type Output = P;
	fn index(&self, index: usize) -> &P {
		&self.path[index]
	}
}

impl<'a, P> IntoIterator for &'a Path<P> {
	type Item = &'a P;
	type IntoIter = std::slice::Iter<'a, P>;
	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}

impl<P: PartialEq> PartialEq<Vec<P>> for Path<P> {
	fn eq(&self, rhs: &Vec<P>) -> bool {
		*self.path == **rhs
	}
}

impl<'a, P: PartialEq> PartialEq<&'a [P]> for Path<P> {
	fn eq(&self, rhs: &&'a [P]) -> bool {
		*self.path == **rhs
	}
}

use std::cmp::Ordering;

impl<P: PartialEq> PartialOrd for Path<P> {
	fn partial_cmp(&self, other: &Path<P>) -> Option<Ordering> {
		self.cost.partial_cmp(&other.cost)
	}
}

use std::fmt;
impl<P: fmt::Debug> fmt::Display for Path<P> {
	fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
		write!(fmt, "Path[Cost = {}]: ", self.cost)?;
		if self.path.is_empty() {
			write!(fmt, "<empty>")
		} else {
			write!(fmt, "{:?}", self.path[0])?;
			for p in self.path.iter().skip(1) {
				write!(fmt, " -> {:?}", p)?;
			}
			Ok(())
		}
	}
}

#[cfg(test)]
mod tests {

	use super::Path;
	#[test]
	fn index() {
		let path = Path::new(vec![4, 2, 0], 4.5);

		assert_eq!(path[0], 4);
		assert_eq!(path[1], 2);
		assert_eq!(path[2], 0);
		assert_eq!(path.first(), Some(&4));
		assert_eq!(path.last(), Some(&0));
		assert_eq!(path, vec![4, 2, 0]);
	}

	#[test]
	fn display() {
		let path = Path::new(vec![(0, 0), (1, 0), (1, 1)], 1.5);

		assert_eq!(
			&format!("{}", path),
			"Path[Cost = 1.5]: (0, 0) -> (1, 0) -> (1, 1)"
		);
	}

	#[test]
	fn display_empty() {
		let path = Path::new(Vec::<i32>::new(), 0.0);

		assert_eq!(&format!("{}", path), "Path[Cost = 0]: <empty>");
	}

	#[test]
	fn ordered_by_cost() {
		let cheap = Path::new(vec![1, 2, 3], 1.0);
		let expensive = Path::new(vec![1], 2.0);
		assert!(cheap < expensive);
	}
}
