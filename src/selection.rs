use log::debug;

use crate::cell::CellGrid;
use crate::error::SelectionError;
use crate::state::{Position, SelectionState};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Toggle {
    Added,
    Removed,
}

/// Ordered single-row selection. Click order is preserved.
#[derive(Clone, Debug, Default)]
pub struct SelectionController {
    selected: Vec<Position>,
}

impl SelectionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> &[Position] {
        &self.selected
    }

    pub fn labels(&self) -> Vec<String> {
        self.selected.iter().map(Position::label).collect()
    }

    pub fn state(&self) -> SelectionState {
        match self.selected.first() {
            Some(first) => SelectionState::RowLocked(first.row),
            None => SelectionState::Idle,
        }
    }

    /// Apply one click. On error nothing changes.
    pub fn toggle(&mut self, position: Position, grid: &CellGrid) -> Result<Toggle, SelectionError> {
        if grid.is_restricted(position) {
            return Err(SelectionError::Restricted(position));
        }

        if let SelectionState::RowLocked(locked_row) = self.state() {
            if locked_row != position.row {
                return Err(SelectionError::CrossRow { locked_row });
            }
        }

        if let Some(i) = self.selected.iter().position(|p| *p == position) {
            self.selected.remove(i);
            debug!("Deselected {position}");
            Ok(Toggle::Removed)
        } else {
            self.selected.push(position);
            debug!("Selected {position}");
            Ok(Toggle::Added)
        }
    }

    /// Human-readable summary shown under the grid
    pub fn summary(&self) -> String {
        format!("Selected Positions: {}", self.labels().join(" | "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    use proptest::prelude::*;

    use crate::marker::HighlightMarker;
    use crate::state::{GRID_COLS, GRID_ROWS};

    fn grid(entries: &[&str]) -> CellGrid {
        CellGrid::build(entries, &HighlightMarker::default())
    }

    #[test]
    fn test_initial_state_is_idle() {
        let selection = SelectionController::new();
        assert_eq!(selection.state(), SelectionState::Idle);
        assert!(selection.selected().is_empty());
        assert_eq!(selection.summary(), "Selected Positions: ");
    }

    #[test]
    fn test_restricted_cell_is_refused() {
        let grid = grid(&[":red[ROW2, COL1]"]);
        let mut selection = SelectionController::new();
        let err = selection.toggle(Position::new(2, 1), &grid).unwrap_err();
        assert_eq!(err, SelectionError::Restricted(Position::new(2, 1)));
        assert_eq!(err.to_string(), "The position ROW2, COL1 is occupied and cannot be selected.");
        assert!(selection.selected().is_empty());
    }

    #[test]
    fn test_cross_row_is_refused() {
        let grid = grid(&[]);
        let mut selection = SelectionController::new();
        selection.toggle(Position::new(1, 1), &grid).unwrap();
        let err = selection.toggle(Position::new(3, 1), &grid).unwrap_err();
        assert_eq!(err, SelectionError::CrossRow { locked_row: 1 });
        assert_eq!(err.to_string(), "You can only select cells from the same row!");
        assert_eq!(selection.selected(), [Position::new(1, 1)]);
    }

    #[test]
    fn test_row_lock_releases_when_emptied() {
        let grid = grid(&[]);
        let mut selection = SelectionController::new();
        assert_eq!(selection.toggle(Position::new(4, 2), &grid), Ok(Toggle::Added));
        assert_eq!(selection.state(), SelectionState::RowLocked(4));
        assert_eq!(selection.toggle(Position::new(4, 2), &grid), Ok(Toggle::Removed));
        assert_eq!(selection.state(), SelectionState::Idle);
        assert_eq!(selection.toggle(Position::new(6, 3), &grid), Ok(Toggle::Added));
        assert_eq!(selection.state(), SelectionState::RowLocked(6));
    }

    #[test]
    fn test_preserves_click_order() {
        let grid = grid(&[]);
        let mut selection = SelectionController::new();
        for col in [3, 1, 2] {
            selection.toggle(Position::new(5, col), &grid).unwrap();
        }
        assert_eq!(selection.labels(), ["ROW5, COL3", "ROW5, COL1", "ROW5, COL2"]);
        selection.toggle(Position::new(5, 1), &grid).unwrap();
        assert_eq!(selection.summary(), "Selected Positions: ROW5, COL3 | ROW5, COL2");
    }

    #[test]
    fn test_double_click_restores_state() {
        let grid = grid(&[":red[ROW1, COL3]"]);
        for position in Position::all().filter(|p| !grid.is_restricted(*p)) {
            let mut selection = SelectionController::new();
            selection.toggle(Position::new(position.row, 1 + position.col % GRID_COLS), &grid).ok();
            let before = selection.selected().to_vec();
            selection.toggle(position, &grid).unwrap();
            selection.toggle(position, &grid).unwrap();
            assert_eq!(selection.selected(), before.as_slice());
        }
    }

    fn clicks() -> impl Strategy<Value = Vec<Position>> {
        prop::collection::vec((1..=GRID_ROWS, 1..=GRID_COLS), 0..64)
            .prop_map(|pairs| pairs.into_iter().map(|(r, c)| Position::new(r, c)).collect())
    }

    fn restricted_set() -> impl Strategy<Value = HashSet<Position>> {
        // One flag per cell, so any subset of the grid can come up
        prop::collection::vec(any::<bool>(), GRID_ROWS * GRID_COLS).prop_map(|flags| {
            Position::all()
                .zip(flags)
                .filter_map(|(position, restricted)| restricted.then_some(position))
                .collect()
        })
    }

    proptest! {
        #[test]
        fn test_selection_invariants_hold_for_any_clicks(restricted in restricted_set(), clicks in clicks()) {
            let grid = CellGrid::from_restricted(&restricted);
            let mut selection = SelectionController::new();

            for position in clicks {
                let before = selection.selected().to_vec();
                if selection.toggle(position, &grid).is_err() {
                    prop_assert_eq!(selection.selected(), before.as_slice());
                }

                let selected = selection.selected();
                prop_assert!(selected.iter().all(|p| !restricted.contains(p)));
                if let Some(first) = selected.first() {
                    prop_assert!(selected.iter().all(|p| p.row == first.row));
                }
                for (i, p) in selected.iter().enumerate() {
                    prop_assert!(!selected[i + 1..].contains(p));
                }
            }
        }
    }
}
