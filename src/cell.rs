// Static cell matrix for the position grid

use std::collections::HashSet;

use log::debug;

use crate::marker::HighlightMarker;
use crate::state::{GRID_COLS, GRID_ROWS, Position};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cell {
    pub position: Position,
    pub label: String,
    pub restricted: bool,
    pub selected: bool,
}

impl Cell {
    fn new(position: Position, restricted: bool) -> Self {
        Self {
            position,
            label: position.label(),
            restricted,
            selected: false,
        }
    }
}

/// The 7x3 grid. Built once; only the `selected` flags change afterwards.
#[derive(Clone, Debug)]
pub struct CellGrid {
    cells: Vec<Cell>,
}

impl CellGrid {
    /// Build from the host's restricted list, still in wrapped form.
    pub fn build<S: AsRef<str>>(entries: &[S], marker: &HighlightMarker) -> Self {
        let restricted = marker.restricted_set(entries);
        Self::from_restricted(&restricted)
    }

    pub fn from_restricted(restricted: &HashSet<Position>) -> Self {
        let cells: Vec<Cell> = Position::all()
            .map(|position| Cell::new(position, restricted.contains(&position)))
            .collect();
        debug!(
            "Built {} cells, {} restricted",
            cells.len(),
            cells.iter().filter(|c| c.restricted).count()
        );
        Self { cells }
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Cells of one row, left to right. `row` is 1-indexed.
    pub fn row(&self, row: usize) -> Option<&[Cell]> {
        self.cells.chunks(GRID_COLS).nth(row.checked_sub(1)?)
    }

    pub fn get(&self, position: Position) -> Option<&Cell> {
        Self::index(position).map(|i| &self.cells[i])
    }

    pub fn is_restricted(&self, position: Position) -> bool {
        self.get(position).is_some_and(|c| c.restricted)
    }

    pub(crate) fn set_selected(&mut self, position: Position, selected: bool) {
        if let Some(i) = Self::index(position) {
            self.cells[i].selected = selected;
        }
    }

    fn index(position: Position) -> Option<usize> {
        let in_grid = (1..=GRID_ROWS).contains(&position.row) && (1..=GRID_COLS).contains(&position.col);
        in_grid.then(|| (position.row - 1) * GRID_COLS + (position.col - 1))
    }
}
