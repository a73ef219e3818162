use crate::core::data::path_grid::{Cell, CellKind, GridCoord, PathGrid};
use serde::Serialize;

/// Visual category of a grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CellClass {
    Empty,
    Start,
    End,
    Wall,
    Open,
    Closed,
    Path,
}

/// Start and end positions win over whatever kind the cell currently holds.
#[must_use]
pub fn cell_class(cell: &Cell, start: GridCoord, end: GridCoord) -> CellClass {
    let coord = cell.coord();
    if coord == start {
        return CellClass::Start;
    }
    if coord == end {
        return CellClass::End;
    }

    match cell.kind {
        CellKind::Empty => CellClass::Empty,
        CellKind::Start => CellClass::Start,
        CellKind::End => CellClass::End,
        CellKind::Wall => CellClass::Wall,
        CellKind::Open => CellClass::Open,
        CellKind::Closed => CellClass::Closed,
        CellKind::Path => CellClass::Path,
    }
}

/// Render-only copy of a grid: one class per cell, row-major.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GridSnapshot {
    pub rows: usize,
    pub cols: usize,
    pub classes: Vec<CellClass>,
}

impl GridSnapshot {
    #[must_use]
    pub fn from_grid(grid: &PathGrid) -> Self {
        let (start, end) = (grid.start(), grid.end());

        Self {
            rows: grid.rows(),
            cols: grid.cols(),
            classes: grid
                .cells()
                .iter()
                .map(|cell| cell_class(cell, start, end))
                .collect(),
        }
    }

    #[must_use]
    pub fn class_at(&self, row: usize, col: usize) -> Option<CellClass> {
        if row < self.rows && col < self.cols {
            self.classes.get(row * self.cols + col).copied()
        } else {
            None
        }
    }

    #[must_use]
    pub fn count(&self, class: CellClass) -> usize {
        self.classes.iter().filter(|&&c| c == class).count()
    }
}
