//! Row/column addressing of the panel grid.
//!
//! Rows are clock settings and columns are channel types. A sweep with a
//! single clock or a single channel type collapses one grid axis; every
//! caller still addresses panels by `(row, col)` and [`GridShape`] folds the
//! collapsed axis away.

use serde::{Deserialize, Serialize};

use crate::error::{CrafterError, CrafterResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GridShape {
    /// One clock, one channel type.
    Single,
    /// One clock, several channel types.
    Row { cols: usize },
    /// Several clocks, one channel type.
    Column { rows: usize },
    Matrix { rows: usize, cols: usize },
}

impl GridShape {
    pub fn new(rows: usize, cols: usize) -> CrafterResult<Self> {
        match (rows, cols) {
            (0, _) | (_, 0) => Err(CrafterError::EmptyGrid { rows, cols }),
            (1, 1) => Ok(Self::Single),
            (1, cols) => Ok(Self::Row { cols }),
            (rows, 1) => Ok(Self::Column { rows }),
            (rows, cols) => Ok(Self::Matrix { rows, cols }),
        }
    }

    #[must_use]
    pub fn rows(self) -> usize {
        match self {
            Self::Single | Self::Row { .. } => 1,
            Self::Column { rows } | Self::Matrix { rows, .. } => rows,
        }
    }

    #[must_use]
    pub fn cols(self) -> usize {
        match self {
            Self::Single | Self::Column { .. } => 1,
            Self::Row { cols } | Self::Matrix { cols, .. } => cols,
        }
    }

    #[must_use]
    pub fn panel_count(self) -> usize {
        self.rows() * self.cols()
    }

    /// Storage slot of `(row, col)`, or `None` when the position is outside
    /// the grid.
    #[must_use]
    pub fn slot(self, row: usize, col: usize) -> Option<usize> {
        match self {
            Self::Single => (row == 0 && col == 0).then_some(0),
            Self::Row { cols } => (row == 0 && col < cols).then_some(col),
            Self::Column { rows } => (col == 0 && row < rows).then_some(row),
            Self::Matrix { rows, cols } => (row < rows && col < cols).then_some(row * cols + col),
        }
    }

    /// Row that carries both legends; for even row counts this is the row
    /// just past the center.
    #[must_use]
    pub fn legend_row(self) -> usize {
        self.rows() / 2
    }

    #[must_use]
    pub fn position(self, row: usize, col: usize) -> Option<PanelPosition> {
        self.slot(row, col).map(|_| PanelPosition {
            row,
            col,
            shape: self,
        })
    }
}

/// Decorations a panel carries because of where it sits in the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PanelDecorations {
    pub x_label: bool,
    pub primary_y_label: bool,
    pub secondary_y_label: bool,
    pub input_legend: bool,
    pub output_legend: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelPosition {
    pub row: usize,
    pub col: usize,
    pub shape: GridShape,
}

impl PanelPosition {
    #[must_use]
    pub fn is_bottom_row(self) -> bool {
        self.row == self.shape.rows() - 1
    }

    #[must_use]
    pub fn is_left_column(self) -> bool {
        self.col == 0
    }

    #[must_use]
    pub fn is_right_column(self) -> bool {
        self.col == self.shape.cols() - 1
    }

    #[must_use]
    pub fn is_legend_row(self) -> bool {
        self.row == self.shape.legend_row()
    }

    #[must_use]
    pub fn decorations(self) -> PanelDecorations {
        PanelDecorations {
            x_label: self.is_bottom_row(),
            primary_y_label: self.is_left_column(),
            secondary_y_label: self.is_right_column(),
            input_legend: self.is_left_column() && self.is_legend_row(),
            output_legend: self.is_right_column() && self.is_legend_row(),
        }
    }
}

/// Panels stored by grid position.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelGrid<T> {
    shape: GridShape,
    panels: Vec<T>,
}

impl<T> PanelGrid<T> {
    /// Builds every panel in row-major order.
    pub fn try_from_fn<F>(rows: usize, cols: usize, mut build: F) -> CrafterResult<Self>
    where
        F: FnMut(PanelPosition) -> CrafterResult<T>,
    {
        let shape = GridShape::new(rows, cols)?;
        let mut panels = Vec::with_capacity(shape.panel_count());
        for row in 0..shape.rows() {
            for col in 0..shape.cols() {
                panels.push(build(PanelPosition { row, col, shape })?);
            }
        }
        Ok(Self { shape, panels })
    }

    #[must_use]
    pub fn shape(&self) -> GridShape {
        self.shape
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.panels.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }

    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        self.shape.slot(row, col).map(|slot| &self.panels[slot])
    }

    /// Panels with their positions, row-major.
    pub fn iter(&self) -> impl Iterator<Item = (PanelPosition, &T)> {
        let shape = self.shape;
        let cols = shape.cols();
        self.panels.iter().enumerate().map(move |(slot, panel)| {
            (
                PanelPosition {
                    row: slot / cols,
                    col: slot % cols,
                    shape,
                },
                panel,
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{GridShape, PanelGrid};
    use crate::error::{CrafterError, CrafterResult};

    fn index_grid(rows: usize, cols: usize) -> PanelGrid<(usize, usize)> {
        PanelGrid::try_from_fn(rows, cols, |pos| -> CrafterResult<_> { Ok((pos.row, pos.col)) })
            .expect("grid")
    }

    #[test]
    fn shapes_collapse_single_axes() {
        assert_eq!(GridShape::new(1, 1).expect("shape"), GridShape::Single);
        assert_eq!(GridShape::new(1, 4).expect("shape"), GridShape::Row { cols: 4 });
        assert_eq!(GridShape::new(3, 1).expect("shape"), GridShape::Column { rows: 3 });
        assert_eq!(
            GridShape::new(3, 4).expect("shape"),
            GridShape::Matrix { rows: 3, cols: 4 }
        );
    }

    #[test]
    fn empty_axis_is_rejected() {
        let err = GridShape::new(0, 4).expect_err("empty");
        assert!(matches!(err, CrafterError::EmptyGrid { rows: 0, cols: 4 }));
    }

    #[test]
    fn every_shape_is_addressed_by_row_and_col() {
        for (rows, cols) in [(1, 1), (1, 4), (3, 1), (3, 4)] {
            let grid = index_grid(rows, cols);
            assert_eq!(grid.len(), rows * cols);
            for row in 0..rows {
                for col in 0..cols {
                    assert_eq!(grid.get(row, col), Some(&(row, col)));
                }
            }
            assert_eq!(grid.get(rows, 0), None);
            assert_eq!(grid.get(0, cols), None);
        }
    }

    #[test]
    fn iter_reports_positions_row_major() {
        let grid = index_grid(2, 3);
        let positions: Vec<(usize, usize)> =
            grid.iter().map(|(pos, _)| (pos.row, pos.col)).collect();
        assert_eq!(
            positions,
            vec![(0, 0), (0, 1), (0, 2), (1, 0), (1, 1), (1, 2)]
        );
        for (pos, value) in grid.iter() {
            assert_eq!((pos.row, pos.col), *value);
        }
    }

    #[test]
    fn legend_row_is_floor_half() {
        assert_eq!(GridShape::new(1, 2).expect("shape").legend_row(), 0);
        assert_eq!(GridShape::new(2, 2).expect("shape").legend_row(), 1);
        assert_eq!(GridShape::new(3, 2).expect("shape").legend_row(), 1);
        assert_eq!(GridShape::new(4, 2).expect("shape").legend_row(), 2);
    }

    #[test]
    fn decorations_follow_grid_edges() {
        let shape = GridShape::new(3, 4).expect("shape");
        let top_left = shape.position(0, 0).expect("pos").decorations();
        assert!(!top_left.x_label);
        assert!(top_left.primary_y_label);
        assert!(!top_left.secondary_y_label);
        assert!(!top_left.input_legend);

        let mid_left = shape.position(1, 0).expect("pos").decorations();
        assert!(mid_left.input_legend);
        assert!(!mid_left.output_legend);

        let mid_right = shape.position(1, 3).expect("pos").decorations();
        assert!(mid_right.output_legend);
        assert!(mid_right.secondary_y_label);

        let bottom_inner = shape.position(2, 1).expect("pos").decorations();
        assert!(bottom_inner.x_label);
        assert!(!bottom_inner.primary_y_label);
        assert!(!bottom_inner.secondary_y_label);
    }

    #[test]
    fn single_panel_carries_every_decoration() {
        let decorations = GridShape::Single.position(0, 0).expect("pos").decorations();
        assert!(decorations.x_label);
        assert!(decorations.primary_y_label);
        assert!(decorations.secondary_y_label);
        assert!(decorations.input_legend);
        assert!(decorations.output_legend);
    }
}
