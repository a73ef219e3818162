use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GridCoord {
    pub row: usize,
    pub col: usize,
}

impl GridCoord {
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    #[must_use]
    pub fn manhattan(self, other: Self) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }
}

impl std::fmt::Display for GridCoord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CellKind {
    #[default]
    Empty,
    Start,
    End,
    Wall,
    Open,
    Closed,
    Path,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
    pub kind: CellKind,
    pub cost_g: f64,
    pub cost_h: f64,
    pub cost_f: f64,
    /// Back-reference used only to walk the final path.
    pub parent: Option<GridCoord>,
}

impl Cell {
    #[must_use]
    pub fn new(row: usize, col: usize) -> Self {
        Self {
            row,
            col,
            kind: CellKind::Empty,
            cost_g: f64::INFINITY,
            cost_h: 0.0,
            cost_f: f64::INFINITY,
            parent: None,
        }
    }

    #[must_use]
    pub fn coord(&self) -> GridCoord {
        GridCoord::new(self.row, self.col)
    }

    fn reset_costs(&mut self) {
        self.cost_g = f64::INFINITY;
        self.cost_h = 0.0;
        self.cost_f = f64::INFINITY;
        self.parent = None;
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("grid must have at least one row and one column, got {rows}x{cols}")]
    InvalidDimensions { rows: usize, cols: usize },
    #[error("cell {coord} is outside the {rows}x{cols} grid")]
    OutOfBounds {
        coord: GridCoord,
        rows: usize,
        cols: usize,
    },
    #[error("cell {0} holds the start or end marker")]
    ProtectedCell(GridCoord),
    #[error("start and end cannot share cell {0}")]
    Overlap(GridCoord),
}

/// Row-major grid searched by the A* state machine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathGrid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
    start: GridCoord,
    end: GridCoord,
}

impl PathGrid {
    pub fn new(
        rows: usize,
        cols: usize,
        start: GridCoord,
        end: GridCoord,
    ) -> Result<Self, GridError> {
        if rows == 0 || cols == 0 {
            return Err(GridError::InvalidDimensions { rows, cols });
        }

        let cells = (0..rows)
            .flat_map(|row| (0..cols).map(move |col| Cell::new(row, col)))
            .collect();

        let mut grid = Self {
            rows,
            cols,
            cells,
            start,
            end,
        };

        grid.check_bounds(start)?;
        grid.check_bounds(end)?;
        if start == end {
            return Err(GridError::Overlap(start));
        }

        grid.mark_endpoints();
        Ok(grid)
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[must_use]
    pub fn start(&self) -> GridCoord {
        self.start
    }

    #[must_use]
    pub fn end(&self) -> GridCoord {
        self.end
    }

    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    #[must_use]
    pub fn contains(&self, coord: GridCoord) -> bool {
        coord.row < self.rows && coord.col < self.cols
    }

    #[must_use]
    pub fn cell(&self, coord: GridCoord) -> Option<&Cell> {
        self.contains(coord)
            .then(|| &self.cells[coord.row * self.cols + coord.col])
    }

    pub fn cell_mut(&mut self, coord: GridCoord) -> Option<&mut Cell> {
        if self.contains(coord) {
            Some(&mut self.cells[coord.row * self.cols + coord.col])
        } else {
            None
        }
    }

    /// In-bounds 4-directional neighbours in up, down, left, right order.
    pub fn neighbors(&self, coord: GridCoord) -> impl Iterator<Item = GridCoord> + '_ {
        const DIRECTIONS: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

        DIRECTIONS.iter().filter_map(move |&(dr, dc)| {
            let row = coord.row.checked_add_signed(dr)?;
            let col = coord.col.checked_add_signed(dc)?;
            let neighbor = GridCoord::new(row, col);
            self.contains(neighbor).then_some(neighbor)
        })
    }

    #[must_use]
    pub fn count_kind(&self, kind: CellKind) -> usize {
        self.cells.iter().filter(|cell| cell.kind == kind).count()
    }

    /// Flips a cell between wall and empty, returning its new kind.
    pub fn toggle_wall(&mut self, coord: GridCoord) -> Result<CellKind, GridError> {
        self.check_bounds(coord)?;
        if coord == self.start || coord == self.end {
            return Err(GridError::ProtectedCell(coord));
        }

        let index = self.index(coord);
        let cell = &mut self.cells[index];
        cell.kind = if cell.kind == CellKind::Wall {
            CellKind::Empty
        } else {
            CellKind::Wall
        };

        Ok(cell.kind)
    }

    pub fn set_start(&mut self, coord: GridCoord) -> Result<(), GridError> {
        self.check_bounds(coord)?;
        if coord == self.end {
            return Err(GridError::Overlap(coord));
        }

        let previous = self.start;
        self.kind_at(previous, CellKind::Empty);
        self.start = coord;
        self.kind_at(coord, CellKind::Start);
        Ok(())
    }

    pub fn set_end(&mut self, coord: GridCoord) -> Result<(), GridError> {
        self.check_bounds(coord)?;
        if coord == self.start {
            return Err(GridError::Overlap(coord));
        }

        let previous = self.end;
        self.kind_at(previous, CellKind::Empty);
        self.end = coord;
        self.kind_at(coord, CellKind::End);
        Ok(())
    }

    /// Removes walls and search marks, keeping the start and end positions.
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            cell.kind = CellKind::Empty;
            cell.reset_costs();
        }
        self.mark_endpoints();
    }

    /// Resets search marks and costs ahead of a run. Walls are kept.
    pub fn prepare_search(&mut self) {
        for cell in &mut self.cells {
            if cell.kind != CellKind::Wall {
                cell.kind = CellKind::Empty;
            }
            cell.reset_costs();
        }
        self.mark_endpoints();
    }

    /// Rebuilds the grid as random walls with the given probability per cell.
    pub fn generate_maze<R: Rng + ?Sized>(&mut self, wall_density: f64, rng: &mut R) {
        let density = if wall_density.is_nan() {
            0.0
        } else {
            wall_density.clamp(0.0, 1.0)
        };

        for cell in &mut self.cells {
            cell.reset_costs();
            cell.kind = if rng.gen_bool(density) {
                CellKind::Wall
            } else {
                CellKind::Empty
            };
        }
        self.mark_endpoints();
    }

    fn mark_endpoints(&mut self) {
        let (start, end) = (self.start, self.end);
        self.kind_at(start, CellKind::Start);
        self.kind_at(end, CellKind::End);
    }

    fn kind_at(&mut self, coord: GridCoord, kind: CellKind) {
        let index = self.index(coord);
        self.cells[index].kind = kind;
    }

    fn index(&self, coord: GridCoord) -> usize {
        coord.row * self.cols + coord.col
    }

    fn check_bounds(&self, coord: GridCoord) -> Result<(), GridError> {
        if self.contains(coord) {
            Ok(())
        } else {
            Err(GridError::OutOfBounds {
                coord,
                rows: self.rows,
                cols: self.cols,
            })
        }
    }
}
