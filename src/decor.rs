//! Decorative shapes laid over a freshly generated grid.
//!
//! A [`DecorCatalog`] describes glyph strokes as `(col, row)` offsets inside a
//! fixed footprint. [`layout`] centers that footprint on the live grid and
//! turns each stroke into a shape of node centers.

use crate::constants;
use crate::error::{Result, SketchError};
use crate::grid::GridLayout;
use crate::types::Shape;
use serde::{Deserialize, Serialize};

/// A `(col, row)` offset relative to the footprint's top-left cell.
pub type CellOffset = (usize, usize);

/// Glyph strokes plus the footprint they occupy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecorCatalog {
    /// Footprint width in cells
    pub width: usize,
    /// Footprint height in cells
    pub height: usize,
    /// One entry per stroke, each a run of cell offsets
    pub strokes: Vec<Vec<CellOffset>>,
}

impl Default for DecorCatalog {
    /// The word `HELLO` on a 25 x 5 footprint.
    fn default() -> Self {
        let strokes = vec![
            // H
            chain(&[(0, 0), (0, 4)]),
            chain(&[(3, 0), (3, 4)]),
            chain(&[(0, 2), (3, 2)]),
            // E
            chain(&[(8, 0), (5, 0), (5, 4), (8, 4)]),
            chain(&[(5, 2), (7, 2)]),
            // L
            chain(&[(10, 0), (10, 4), (13, 4)]),
            // L
            chain(&[(15, 0), (15, 4), (18, 4)]),
            // O
            chain(&[
                (21, 0),
                (23, 0),
                (24, 1),
                (24, 3),
                (23, 4),
                (21, 4),
                (20, 3),
                (20, 1),
                (21, 0),
            ]),
        ];
        Self {
            width: constants::DECOR_WIDTH,
            height: constants::DECOR_HEIGHT,
            strokes,
        }
    }
}

impl DecorCatalog {
    /// A catalog that draws nothing.
    pub fn empty() -> Self {
        Self {
            width: 0,
            height: 0,
            strokes: Vec::new(),
        }
    }

    /// Checks that every stroke stays inside the footprint.
    pub fn validate(&self) -> Result<()> {
        if self.strokes.is_empty() {
            return Ok(());
        }
        if self.width == 0 || self.height == 0 {
            return Err(SketchError::InvalidConfig {
                field: "decor",
                reason: "footprint must be at least 1x1".into(),
            });
        }
        let outside = self
            .strokes
            .iter()
            .flatten()
            .find(|(c, r)| *c >= self.width || *r >= self.height);
        match outside {
            Some((c, r)) => Err(SketchError::InvalidConfig {
                field: "decor",
                reason: format!(
                    "offset ({c}, {r}) lies outside the {}x{} footprint",
                    self.width, self.height
                ),
            }),
            None => Ok(()),
        }
    }
}

/// Maps the catalog onto `grid`.
///
/// Returns nothing at all when the grid is smaller than the footprint in
/// either dimension. Otherwise the footprint is centered, shifted one row
/// down, offsets falling off the grid are dropped, and strokes left empty are
/// skipped.
pub fn layout(catalog: &DecorCatalog, grid: &GridLayout) -> Vec<Shape> {
    let (cols, rows) = (grid.cols(), grid.rows());
    if cols < catalog.width || rows < catalog.height {
        log::debug!(
            "grid {cols}x{rows} smaller than {}x{} decoration, skipping",
            catalog.width,
            catalog.height
        );
        return Vec::new();
    }

    let start_col = (cols - catalog.width) / 2;
    let start_row = (rows - catalog.height) / 2 + 1;

    catalog
        .strokes
        .iter()
        .filter_map(|stroke| {
            let mut shape: Shape = Vec::with_capacity(stroke.len());
            for &(dc, dr) in stroke {
                let Some(node) = grid.node_at(start_col + dc, start_row + dr) else {
                    continue;
                };
                if shape.last() != Some(&node.center) {
                    shape.push(node.center);
                }
            }
            (!shape.is_empty()).then_some(shape)
        })
        .collect()
}

/// Expands a polyline through `corners` into every cell it passes.
///
/// Segments must be horizontal, vertical or 45-degree diagonal.
fn chain(corners: &[CellOffset]) -> Vec<CellOffset> {
    let mut cells = Vec::new();
    let Some(&first) = corners.first() else {
        return cells;
    };
    cells.push(first);
    for pair in corners.windows(2) {
        let (mut c, mut r) = (pair[0].0 as isize, pair[0].1 as isize);
        let (tc, tr) = (pair[1].0 as isize, pair[1].1 as isize);
        let (sc, sr) = ((tc - c).signum(), (tr - r).signum());
        while (c, r) != (tc, tr) {
            c += sc;
            r += sr;
            cells.push((c as usize, r as usize));
        }
    }
    cells
}
