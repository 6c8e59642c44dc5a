//! The collection of completed shapes.
//!
//! Completing a path toggles it: a path matching an existing shape (in
//! either direction) erases that shape, any other path is appended. Undo
//! simply drops the most recently appended shape.

use crate::types::{same_shape, Path, Point, Shape};

/// Outcome of [`ShapeSet::complete`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    /// The path was new and has been appended
    Added,
    /// The path matched the shape at this index, which was removed
    Removed(usize),
    /// The path was empty and ignored
    Ignored,
}

/// Ordered set of shapes, no two of which are the same shape.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShapeSet {
    shapes: Vec<Shape>,
}

impl ShapeSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `path` as a new shape, or removes the existing shape it matches.
    pub fn complete(&mut self, path: Path) -> Toggle {
        if path.is_empty() {
            return Toggle::Ignored;
        }
        match self.position(&path) {
            Some(index) => {
                self.shapes.remove(index);
                log::debug!("erased shape {index} ({} points)", path.len());
                Toggle::Removed(index)
            }
            None => {
                log::debug!("added shape with {} points", path.len());
                self.shapes.push(path);
                Toggle::Added
            }
        }
    }

    /// Removes the most recently appended shape. No-op when empty.
    pub fn undo(&mut self) -> Option<Shape> {
        let removed = self.shapes.pop();
        if removed.is_some() {
            log::debug!("undo: {} shapes left", self.shapes.len());
        }
        removed
    }

    /// Discards every shape and installs `shapes` in their place.
    pub fn replace_all(&mut self, shapes: Vec<Shape>) {
        self.shapes = shapes;
    }

    /// Removes every shape.
    pub fn clear(&mut self) {
        self.shapes.clear();
    }

    /// True if a shape matching `path` in either direction is present.
    pub fn contains(&self, path: &[Point]) -> bool {
        self.position(path).is_some()
    }

    /// Number of shapes.
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// True when there are no shapes.
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Shapes in insertion order.
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// Iterates shapes in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Shape> {
        self.shapes.iter()
    }

    fn position(&self, path: &[Point]) -> Option<usize> {
        self.shapes.iter().position(|shape| same_shape(shape, path))
    }
}

impl<'a> IntoIterator for &'a ShapeSet {
    type Item = &'a Shape;
    type IntoIter = std::slice::Iter<'a, Shape>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const A: Point = Point::new(0.0, 0.0);
    const B: Point = Point::new(56.0, 0.0);
    const C: Point = Point::new(56.0, 56.0);
    const D: Point = Point::new(0.0, 56.0);

    #[test]
    fn completing_twice_restores_previous_set() {
        let mut set = ShapeSet::new();
        set.complete(vec![D, A]);
        let before = set.clone();

        assert_eq!(set.complete(vec![A, B, C]), Toggle::Added);
        assert_eq!(set.len(), 2);
        assert_eq!(set.complete(vec![A, B, C]), Toggle::Removed(1));
        assert_eq!(set, before);
    }

    #[test]
    fn reversed_path_erases_shape() {
        let mut set = ShapeSet::new();
        set.complete(vec![A, B, C]);
        assert!(set.contains(&[C, B, A]));
        assert_eq!(set.complete(vec![C, B, A]), Toggle::Removed(0));
        assert!(set.is_empty());
    }

    #[test]
    fn overlapping_but_different_paths_coexist() {
        let mut set = ShapeSet::new();
        set.complete(vec![A, B, C]);
        assert_eq!(set.complete(vec![A, B]), Toggle::Added);
        assert_eq!(set.complete(vec![B, C, A]), Toggle::Added);
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn undo_walks_back_to_empty() {
        let mut set = ShapeSet::new();
        set.complete(vec![A, B]);
        assert_eq!(set.len(), 1);
        set.complete(vec![C, D]);
        assert_eq!(set.len(), 2);

        assert_eq!(set.undo(), Some(vec![C, D]));
        assert_eq!(set.shapes(), &[vec![A, B]]);
        assert_eq!(set.undo(), Some(vec![A, B]));
        assert!(set.is_empty());
        assert_eq!(set.undo(), None);
        assert!(set.is_empty());
    }

    #[test]
    fn empty_path_never_enters_set() {
        let mut set = ShapeSet::new();
        assert_eq!(set.complete(Vec::new()), Toggle::Ignored);
        assert!(set.is_empty());
    }

    #[test]
    fn replace_all_discards_previous_shapes() {
        let mut set = ShapeSet::new();
        set.complete(vec![A, B]);
        set.replace_all(vec![vec![C], vec![D, A]]);
        assert_eq!(set.shapes(), &[vec![C], vec![D, A]]);
        set.clear();
        assert!(set.is_empty());
    }

    #[test]
    fn single_point_shape_toggles() {
        let mut set = ShapeSet::new();
        assert_eq!(set.complete(vec![A]), Toggle::Added);
        assert_eq!(set.complete(vec![A]), Toggle::Removed(0));
    }
}
