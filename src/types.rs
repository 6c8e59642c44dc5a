//! Core data types shared by the layout, capture and shape modules.

/// A position in viewport pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// Horizontal coordinate
    pub x: f32,
    /// Vertical coordinate
    pub y: f32,
}

impl Point {
    /// Creates a point from its coordinates.
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A circular anchor on the layout grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Node {
    /// Center of the node
    pub center: Point,
    /// Radius, identical for every node of a layout
    pub radius: f32,
}

/// An ordered sequence of node centers with no two consecutive entries equal.
pub type Path = Vec<Point>;

/// A completed path stored in the shape set, in drawing order.
pub type Shape = Vec<Point>;

/// Returns true if `a` and `b` describe the same undirected shape.
///
/// Shapes match when their point sequences are identical, either in the same
/// order or with one of them fully reversed. Comparison is exact: both sides
/// were snapped to the same grid so no tolerance is needed.
pub fn same_shape(a: &[Point], b: &[Point]) -> bool {
    a.len() == b.len() && (a == b || a.iter().eq(b.iter().rev()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const A: Point = Point::new(0.0, 0.0);
    const B: Point = Point::new(10.0, 0.0);
    const C: Point = Point::new(10.0, 10.0);

    #[test]
    fn identical_sequences_are_same_shape() {
        assert!(same_shape(&[A, B, C], &[A, B, C]));
    }

    #[test]
    fn reversed_sequences_are_same_shape() {
        assert!(same_shape(&[A, B, C], &[C, B, A]));
    }

    #[test]
    fn partial_reversal_is_not_same_shape() {
        assert!(!same_shape(&[A, B, C], &[B, A, C]));
        assert!(!same_shape(&[A, B], &[A, B, C]));
    }
}
