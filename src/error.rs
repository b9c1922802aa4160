use std::io;
use thiserror::Error;

use crate::state::Position;

/// Reasons a click is refused. Both leave the selection untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    #[error("The position {0} is occupied and cannot be selected.")]
    Restricted(Position),

    #[error("You can only select cells from the same row!")]
    CrossRow { locked_row: usize },
}

impl SelectionError {
    /// Dialog title for the blocking notification.
    pub fn title(&self) -> &'static str {
        match self {
            SelectionError::Restricted(_) => "Position occupied",
            SelectionError::CrossRow { .. } => "Single row only",
        }
    }
}

#[derive(Error, Debug)]
pub enum BridgeError {
    #[error("Failed to write to host channel")]
    Write {
        #[source]
        source: io::Error,
    },

    #[error("Failed to read from host channel")]
    Read {
        #[source]
        source: io::Error,
    },

    #[error("Failed to encode host message")]
    Encode {
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}

pub type Result<T, E = BridgeError> = std::result::Result<T, E>;
