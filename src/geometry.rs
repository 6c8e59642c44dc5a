//! Small vector helpers used by node capture.

use crate::types::Point;

/// Component-wise `a - b`.
pub fn sub(a: Point, b: Point) -> Point {
    Point::new(a.x - b.x, a.y - b.y)
}

/// Length of the vector `v`.
pub fn magnitude(v: Point) -> f32 {
    (v.x * v.x + v.y * v.y).sqrt()
}

/// Euclidean distance between two points.
pub fn distance(a: Point, b: Point) -> f32 {
    magnitude(sub(a, b))
}
