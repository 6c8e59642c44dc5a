//! Grid layout generation.
//!
//! Fills a viewport with a rectangular lattice of equally sized nodes,
//! centered inside the padded area. Nodes are stored in row-major order so a
//! `(col, row)` pair maps to index `row * cols + col`.

use crate::types::{Node, Point};

/// Geometric parameters of a grid layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridSpec {
    /// Node diameter `D`
    pub diameter: f32,
    /// Gap `G` between neighbouring nodes
    pub gap: f32,
    /// Outer padding `P`
    pub padding: f32,
}

impl GridSpec {
    /// Distance between the centers of two neighbouring nodes.
    pub fn pitch(&self) -> f32 {
        self.diameter + self.gap
    }
}

impl From<&crate::SketchConfig> for GridSpec {
    fn from(config: &crate::SketchConfig) -> Self {
        Self {
            diameter: config.node_diameter,
            gap: config.node_gap,
            padding: config.padding,
        }
    }
}

/// A computed grid of nodes for one viewport size.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GridLayout {
    cols: usize,
    rows: usize,
    nodes: Vec<Node>,
}

impl GridLayout {
    /// Computes the layout for a `width` x `height` viewport.
    ///
    /// A viewport too small for a single row or column yields an empty grid,
    /// which is a valid state. The same inputs always produce bit-identical
    /// node positions.
    pub fn generate(width: f32, height: f32, spec: &GridSpec) -> Self {
        let pitch = spec.pitch();
        let cols = cell_count(width, pitch);
        let rows = cell_count(height, pitch);
        if cols == 0 || rows == 0 {
            return Self::default();
        }

        let d = spec.diameter;
        let g = spec.gap;
        let p = spec.padding;
        let content_w = cols as f32 * d + (cols - 1) as f32 * g;
        let content_h = rows as f32 * d + (rows - 1) as f32 * g;
        // Negative when the grid overflows the padded area; left unclamped.
        let offset_x = ((width - 2.0 * p) - content_w) / 2.0;
        let offset_y = ((height - 2.0 * p) - content_h) / 2.0;
        let radius = d / 2.0;

        let mut nodes = Vec::with_capacity(cols * rows);
        for row in 0..rows {
            for col in 0..cols {
                let center = Point::new(
                    p + offset_x + col as f32 * pitch + radius,
                    p + offset_y + row as f32 * pitch + radius,
                );
                nodes.push(Node { center, radius });
            }
        }

        Self { cols, rows, nodes }
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// All nodes in row-major order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// True when the viewport could not fit a single node.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The node at `(col, row)`, or `None` outside the grid.
    pub fn node_at(&self, col: usize, row: usize) -> Option<&Node> {
        if col >= self.cols || row >= self.rows {
            return None;
        }
        self.nodes.get(row * self.cols + col)
    }
}

fn cell_count(extent: f32, pitch: f32) -> usize {
    if !extent.is_finite() || extent <= 0.0 || pitch <= 0.0 {
        return 0;
    }
    (extent / pitch).floor() as usize
}
