//! Error types for grid construction and bulk replacement.

use signal_core::NodeId;
use std::fmt;

/// Errors arising from grid construction or whole-grid replacement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Attempted to construct a grid with zero cells.
    EmptyGrid,
    /// A dimension exceeds the maximum supported size.
    DimensionTooLarge {
        /// Which dimension (`"width"`, `"height"` or `"cells"`).
        name: &'static str,
        /// The requested value.
        value: u64,
        /// The maximum allowed value.
        max: u64,
    },
    /// A replacement node set has the wrong number of nodes.
    NodeCountMismatch {
        /// Cells in this grid.
        expected: usize,
        /// Nodes supplied.
        found: usize,
    },
    /// A replacement node carries an id that does not match its slot.
    IdMismatch {
        /// Slot index.
        slot: usize,
        /// Id found in that slot.
        found: NodeId,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid => write!(f, "grid must have at least one cell"),
            Self::DimensionTooLarge { name, value, max } => {
                write!(f, "{name} {value} exceeds maximum of {max}")
            }
            Self::NodeCountMismatch { expected, found } => {
                write!(f, "expected {expected} nodes, found {found}")
            }
            Self::IdMismatch { slot, found } => {
                write!(f, "slot {slot} holds node id {found}")
            }
        }
    }
}

impl std::error::Error for GridError {}
