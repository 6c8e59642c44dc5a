//! The live path being drawn by the current drag gesture.

use crate::types::{Path, Point};

/// Drawing state of a [`PathAccumulator`].
#[derive(Debug, Clone, PartialEq, Default)]
pub enum PathState {
    /// No gesture in progress
    #[default]
    Idle,
    /// A gesture captured at least one node
    Drawing(Path),
}

/// Accumulates snapped node centers between capture-start and capture-end.
///
/// Callers resolve pointer positions to node centers first (see
/// [`crate::resolver::resolve`]) and pass `None` when nothing was captured.
#[derive(Debug, Clone, Default)]
pub struct PathAccumulator {
    state: PathState,
}

impl PathAccumulator {
    /// Creates an idle accumulator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state.
    pub fn state(&self) -> &PathState {
        &self.state
    }

    /// True while a path is being drawn.
    pub fn is_drawing(&self) -> bool {
        matches!(self.state, PathState::Drawing(_))
    }

    /// The in-progress path, if any.
    pub fn current(&self) -> Option<&[Point]> {
        match &self.state {
            PathState::Idle => None,
            PathState::Drawing(path) => Some(path),
        }
    }

    /// Handles a capture-start. Returns true if drawing began.
    ///
    /// An unresolved start leaves the accumulator idle. A start received while
    /// already drawing is ignored.
    pub fn begin(&mut self, captured: Option<Point>) -> bool {
        if self.is_drawing() {
            return false;
        }
        let Some(center) = captured else {
            return false;
        };
        self.state = PathState::Drawing(vec![center]);
        true
    }

    /// Handles a capture-move. Returns true if a point was appended.
    pub fn extend(&mut self, captured: Option<Point>) -> bool {
        let (PathState::Drawing(path), Some(center)) = (&mut self.state, captured) else {
            return false;
        };
        if path.last() == Some(&center) {
            return false;
        }
        path.push(center);
        true
    }

    /// Handles a capture-end, returning the finished path if one was drawn.
    pub fn finish(&mut self) -> Option<Path> {
        match std::mem::take(&mut self.state) {
            PathState::Drawing(path) if !path.is_empty() => Some(path),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const A: Point = Point::new(0.0, 0.0);
    const B: Point = Point::new(56.0, 0.0);
    const C: Point = Point::new(112.0, 0.0);

    #[test]
    fn starts_idle() {
        let acc = PathAccumulator::new();
        assert_eq!(acc.state(), &PathState::Idle);
        assert!(acc.current().is_none());
    }

    #[test]
    fn unresolved_start_stays_idle() {
        let mut acc = PathAccumulator::new();
        assert!(!acc.begin(None));
        assert!(!acc.is_drawing());
        assert!(acc.finish().is_none());
    }

    #[test]
    fn moves_while_idle_are_ignored() {
        let mut acc = PathAccumulator::new();
        assert!(!acc.extend(Some(A)));
        assert!(!acc.is_drawing());
    }

    #[test]
    fn repeated_captures_are_suppressed() {
        let mut acc = PathAccumulator::new();
        assert!(acc.begin(Some(A)));
        for captured in [Some(A), Some(A), None, Some(B), Some(B), Some(B), Some(A), Some(C), Some(C)] {
            acc.extend(captured);
        }
        let path = acc.current().unwrap();
        assert_eq!(path, &[A, B, A, C]);
        assert!(path.windows(2).all(|w| w[0] != w[1]));
    }

    #[test]
    fn finish_returns_path_and_resets() {
        let mut acc = PathAccumulator::new();
        acc.begin(Some(A));
        acc.extend(Some(B));
        assert_eq!(acc.finish(), Some(vec![A, B]));
        assert!(!acc.is_drawing());
        assert!(acc.finish().is_none());
    }

    #[test]
    fn second_start_does_not_restart_path() {
        let mut acc = PathAccumulator::new();
        acc.begin(Some(A));
        acc.extend(Some(B));
        assert!(!acc.begin(Some(C)));
        assert_eq!(acc.current(), Some(&[A, B][..]));
    }
}
