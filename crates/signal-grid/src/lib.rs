//! Grid storage and neighbour resolution for Signal.
//!
//! [`NodeGrid`] owns every [`Node`](signal_core::Node) of a fixed
//! `width x height` lattice and provides the deterministic id <-> (x, y)
//! mapping, bounds-checked lookup, and the fixed-order alive-neighbour
//! query (left, right, up, down) that the propagation engine iterates.
//!
//! Out-of-range coordinates, including `x - 1` / `y - 1` underflow at the
//! border, always resolve to "no node" and never alias into an adjacent
//! row.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod direction;
pub mod error;
pub mod grid;
pub mod layout;

pub use direction::Direction;
pub use error::GridError;
pub use grid::{Neighbours, NodeGrid};
pub use layout::CellLayout;
