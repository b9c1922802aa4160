use std::fmt;

pub const GRID_ROWS: usize = 7;
pub const GRID_COLS: usize = 3;

/// A grid coordinate, 1-indexed on both axes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// All grid positions in row-major order.
    pub fn all() -> impl Iterator<Item = Position> {
        (1..=GRID_ROWS).flat_map(|row| (1..=GRID_COLS).map(move |col| Position::new(row, col)))
    }

    /// Host-facing identifier, e.g. `ROW2, COL1`
    pub fn label(&self) -> String {
        self.to_string()
    }

    /// Parse a bare identifier. Only exact labels of cells inside the grid are accepted.
    pub fn from_label(label: &str) -> Option<Self> {
        let rest = label.strip_prefix("ROW")?;
        let (row, col) = rest.split_once(", COL")?;
        let row = parse_index(row, GRID_ROWS)?;
        let col = parse_index(col, GRID_COLS)?;
        Some(Self::new(row, col))
    }
}

fn parse_index(digits: &str, max: usize) -> Option<usize> {
    // Reject signs, whitespace and leading zeros so the label round-trips exactly
    if digits.is_empty() || digits.starts_with('0') || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let n: usize = digits.parse().ok()?;
    (1..=max).contains(&n).then_some(n)
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ROW{}, COL{}", self.row, self.col)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectionState {
    Idle,
    RowLocked(usize),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_format() {
        assert_eq!(Position::new(2, 1).label(), "ROW2, COL1");
        assert_eq!(Position::new(7, 3).to_string(), "ROW7, COL3");
    }

    #[test]
    fn test_all_is_row_major() {
        let all: Vec<_> = Position::all().collect();
        assert_eq!(all.len(), GRID_ROWS * GRID_COLS);
        assert_eq!(all[0], Position::new(1, 1));
        assert_eq!(all[1], Position::new(1, 2));
        assert_eq!(all[3], Position::new(2, 1));
        assert_eq!(all[20], Position::new(7, 3));
    }

    #[test]
    fn test_from_label() {
        assert_eq!(Position::from_label("ROW3, COL2"), Some(Position::new(3, 2)));
        for position in Position::all() {
            assert_eq!(Position::from_label(&position.label()), Some(position));
        }
    }

    #[test]
    fn test_from_label_rejects_out_of_grid() {
        assert_eq!(Position::from_label("ROW8, COL1"), None);
        assert_eq!(Position::from_label("ROW0, COL1"), None);
        assert_eq!(Position::from_label("ROW1, COL4"), None);
        assert_eq!(Position::from_label("ROW01, COL1"), None);
        assert_eq!(Position::from_label("row1, col1"), None);
        assert_eq!(Position::from_label("ROW1,COL1"), None);
        assert_eq!(Position::from_label(" ROW1, COL1"), None);
        assert_eq!(Position::from_label(""), None);
    }
}
