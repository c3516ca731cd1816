//! Cell layout: where each node's rectangle sits in layout space.

use signal_core::Rect;

/// Uniform cell size and spacing used to lay out the grid.
///
/// Cell `(x, y)` occupies
/// `[padding + x * (cell_width + padding), +cell_width)` horizontally,
/// and likewise vertically.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellLayout {
    /// Cell width.
    pub cell_width: u32,
    /// Cell height.
    pub cell_height: u32,
    /// Gap before the first cell and between cells.
    pub padding: u32,
}

impl Default for CellLayout {
    fn default() -> Self {
        Self {
            cell_width: 38,
            cell_height: 38,
            padding: 2,
        }
    }
}

impl CellLayout {
    /// Horizontal distance between the left edges of adjacent cells.
    pub fn stride_x(&self) -> i64 {
        i64::from(self.cell_width) + i64::from(self.padding)
    }

    /// Vertical distance between the top edges of adjacent cells.
    pub fn stride_y(&self) -> i64 {
        i64::from(self.cell_height) + i64::from(self.padding)
    }

    /// Rectangle of cell `(x, y)`. Coordinates saturate at `i32::MAX`.
    pub fn rect(&self, x: u32, y: u32) -> Rect {
        let px = i64::from(self.padding) + i64::from(x) * self.stride_x();
        let py = i64::from(self.padding) + i64::from(y) * self.stride_y();
        Rect::new(
            px.min(i64::from(i32::MAX)) as i32,
            py.min(i64::from(i32::MAX)) as i32,
            self.cell_width,
            self.cell_height,
        )
    }

    /// The cell column/row whose stride band contains the point, before
    /// any bounds or padding check.
    pub(crate) fn cell_band(&self, px: i32, py: i32) -> (i64, i64) {
        let bx = (i64::from(px) - i64::from(self.padding)).div_euclid(self.stride_x().max(1));
        let by = (i64::from(py) - i64::from(self.padding)).div_euclid(self.stride_y().max(1));
        (bx, by)
    }
}
