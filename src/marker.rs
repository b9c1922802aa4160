use std::collections::HashSet;

use log::debug;

use crate::state::Position;

pub const DEFAULT_MARKER_COLOR: &str = "red";

/// The host's text-highlight wrapper, `:<color>[...]`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HighlightMarker {
    prefix: String,
}

impl Default for HighlightMarker {
    fn default() -> Self {
        Self::new(DEFAULT_MARKER_COLOR)
    }
}

impl HighlightMarker {
    pub fn new(color: &str) -> Self {
        Self {
            prefix: format!(":{color}["),
        }
    }

    #[cfg(test)]
    pub fn wrap(&self, position: Position) -> String {
        format!("{}{}]", self.prefix, position.label())
    }

    /// Returns the position only when `entry` is exactly a wrapped grid label.
    pub fn unwrap(&self, entry: &str) -> Option<Position> {
        let inner = entry.strip_prefix(self.prefix.as_str())?.strip_suffix(']')?;
        Position::from_label(inner)
    }

    /// Normalize the host's list into bare positions. Entries that are not
    /// wrapped, or wrap anything but a grid label, restrict nothing.
    pub fn restricted_set<S: AsRef<str>>(&self, entries: &[S]) -> HashSet<Position> {
        let mut set = HashSet::with_capacity(entries.len());
        for entry in entries {
            let entry = entry.as_ref();
            match self.unwrap(entry) {
                Some(position) => {
                    set.insert(position);
                }
                None => debug!("Ignoring unrestricted entry {entry:?}"),
            }
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap() {
        let marker = HighlightMarker::default();
        assert_eq!(marker.wrap(Position::new(2, 1)), ":red[ROW2, COL1]");
    }

    #[test]
    fn test_unwrap_exact_only() {
        let marker = HighlightMarker::default();
        assert_eq!(marker.unwrap(":red[ROW2, COL1]"), Some(Position::new(2, 1)));
        assert_eq!(marker.unwrap("ROW2, COL1"), None);
        assert_eq!(marker.unwrap(":blue[ROW2, COL1]"), None);
        assert_eq!(marker.unwrap(":red[ROW2, COL1]]"), None);
        assert_eq!(marker.unwrap("x:red[ROW2, COL1]"), None);
        assert_eq!(marker.unwrap(":red[ROW2, COL1] "), None);
        assert_eq!(marker.unwrap(":red[ROW9, COL1]"), None);
    }

    #[test]
    fn test_restricted_set_mixed_list() {
        // The host sends available positions bare and occupied ones wrapped
        let marker = HighlightMarker::default();
        let entries = ["ROW1, COL1", ":red[ROW2, COL1]", ":red[ROW5, COL3]", "garbage", ""];
        let set = marker.restricted_set(&entries);
        assert_eq!(set.len(), 2);
        assert!(set.contains(&Position::new(2, 1)));
        assert!(set.contains(&Position::new(5, 3)));
        assert!(!set.contains(&Position::new(1, 1)));
    }

    #[test]
    fn test_custom_color() {
        let marker = HighlightMarker::new("orange");
        assert_eq!(marker.unwrap(":orange[ROW1, COL3]"), Some(Position::new(1, 3)));
        assert_eq!(marker.unwrap(":red[ROW1, COL3]"), None);
    }

    #[test]
    fn test_empty_list() {
        let entries: [&str; 0] = [];
        assert!(HighlightMarker::default().restricted_set(&entries).is_empty());
    }
}
