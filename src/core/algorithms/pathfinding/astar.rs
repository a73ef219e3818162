use crate::core::actions::cancellation::Cancelled;
use crate::core::algorithms::pathfinding::{SearchOutcome, SearchStats};
use crate::core::data::path_grid::{CellKind, GridCoord, PathGrid};
use crate::core::engine::stepper::Stepper;
use std::collections::HashSet;

#[allow(clippy::cast_precision_loss)]
fn heuristic(from: GridCoord, to: GridCoord) -> f64 {
    from.manhattan(to) as f64
}

fn cost_f(grid: &PathGrid, coord: GridCoord) -> f64 {
    grid.cell(coord).map_or(f64::INFINITY, |cell| cell.cost_f)
}

pub(crate) fn astar_search(
    grid: &mut PathGrid,
    stepper: &Stepper<'_>,
) -> Result<SearchOutcome, Cancelled> {
    grid.prepare_search();
    let (start, end) = (grid.start(), grid.end());

    if let Some(cell) = grid.cell_mut(start) {
        cell.cost_g = 0.0;
        cell.cost_h = heuristic(start, end);
        cell.cost_f = cell.cost_h;
    }

    let mut open_set = vec![start];
    let mut closed_set = HashSet::new();
    let mut nodes_visited = 0;

    while !open_set.is_empty() {
        // Stable sort: among equal f the earliest entry wins.
        open_set.sort_by(|a, b| cost_f(grid, *a).total_cmp(&cost_f(grid, *b)));
        let current = open_set.remove(0);

        if current == end {
            let path = reconstruct_path(grid, end);
            for &coord in &path {
                if let Some(cell) = grid.cell_mut(coord) {
                    cell.kind = CellKind::Path;
                }
                stepper.publish_grid(grid);
                stepper.wait()?;
            }

            return Ok(SearchOutcome::PathFound(SearchStats {
                nodes_visited,
                path_length: path.len().saturating_sub(1),
            }));
        }

        closed_set.insert(current);
        let current_g = match grid.cell_mut(current) {
            Some(cell) => {
                if current != start {
                    cell.kind = CellKind::Closed;
                }
                cell.cost_g
            }
            None => continue,
        };
        nodes_visited += 1;

        let neighbors: Vec<GridCoord> = grid.neighbors(current).collect();
        for neighbor in neighbors {
            if closed_set.contains(&neighbor) {
                continue;
            }
            let Some(cell) = grid.cell_mut(neighbor) else {
                continue;
            };
            if cell.kind == CellKind::Wall {
                continue;
            }

            let tentative_g = current_g + 1.0;
            if tentative_g < cell.cost_g {
                cell.parent = Some(current);
                cell.cost_g = tentative_g;
                cell.cost_h = heuristic(neighbor, end);
                cell.cost_f = cell.cost_g + cell.cost_h;

                if !open_set.contains(&neighbor) {
                    open_set.push(neighbor);
                    if neighbor != end {
                        cell.kind = CellKind::Open;
                    }
                }
            }
        }

        stepper.publish_grid(grid);
        stepper.publish_visited(nodes_visited);
        stepper.wait()?;
    }

    Ok(SearchOutcome::Exhausted(SearchStats {
        nodes_visited,
        path_length: 0,
    }))
}

/// Walks parent links back from `end`, returning the path start-first.
fn reconstruct_path(grid: &PathGrid, end: GridCoord) -> Vec<GridCoord> {
    let mut path = Vec::new();
    let mut next = Some(end);

    while let Some(coord) = next {
        // A parent chain can never be longer than the grid itself.
        if path.len() > grid.cells().len() {
            break;
        }
        path.push(coord);
        next = grid.cell(coord).and_then(|cell| cell.parent);
    }

    path.reverse();
    path
}
