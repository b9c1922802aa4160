use log::{debug, info};

use crate::bridge::{BridgeNotifier, RenderArgs};
use crate::cell::CellGrid;
use crate::error::SelectionError;
use crate::marker::HighlightMarker;
use crate::selection::{SelectionController, Toggle};
use crate::state::Position;

/// One widget instance. The grid is built from the first render's arguments
/// at construction and never rebuilt.
pub struct PositionComponent {
    grid: CellGrid,
    selection: SelectionController,
    notifier: BridgeNotifier,
    summary: String,
}

impl PositionComponent {
    pub fn new(args: &RenderArgs, marker: &HighlightMarker, mut notifier: BridgeNotifier) -> Self {
        let grid = CellGrid::build(&args.positions, marker);
        let selection = SelectionController::new();
        let summary = selection.summary();

        info!(
            "Grid built with {} restricted positions",
            grid.cells().iter().filter(|c| c.restricted).count()
        );
        notifier.announce_ready();

        Self {
            grid,
            selection,
            notifier,
            summary,
        }
    }

    pub fn grid(&self) -> &CellGrid {
        &self.grid
    }

    #[cfg(test)]
    pub fn cells(&self) -> &[crate::cell::Cell] {
        self.grid.cells()
    }

    #[cfg(test)]
    pub fn selected(&self) -> &[Position] {
        self.selection.selected()
    }

    #[cfg(test)]
    pub fn state(&self) -> crate::state::SelectionState {
        self.selection.state()
    }

    pub fn summary(&self) -> &str {
        &self.summary
    }

    /// Handle a click on `position`. A refused click changes nothing and
    /// publishes nothing; the caller shows the error to the user.
    pub fn click(&mut self, position: Position) -> Result<Toggle, SelectionError> {
        let toggle = match self.selection.toggle(position, &self.grid) {
            Ok(toggle) => toggle,
            Err(e) => {
                match &e {
                    SelectionError::Restricted(_) => debug!("Refused {position}: restricted"),
                    SelectionError::CrossRow { locked_row } => {
                        debug!("Refused {position}: row {locked_row} is locked")
                    }
                }
                return Err(e);
            }
        };

        self.grid.set_selected(position, toggle == Toggle::Added);
        self.summary = self.selection.summary();
        self.notifier.publish(self.selection.selected());
        Ok(toggle)
    }
}
