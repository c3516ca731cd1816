//! Core types for the Signal grid simulator.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the per-cell [`Node`] record, the closed [`NodeKind`] taxonomy,
//! strongly-typed identifiers, and the per-tick budget constants shared
//! by the grid index, the propagation engine and the save format.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod color;
pub mod error;
pub mod id;
pub mod kind;
pub mod node;

pub use color::Color;
pub use error::KindError;
pub use id::{NodeId, TickId};
pub use kind::NodeKind;
pub use node::{Node, Rect};

/// Maximum number of outgoing deliveries a node may make per beat.
pub const MAX_WRITES: u16 = 4;

/// Maximum number of orthogonal neighbours of a grid cell.
pub const MAX_NEIGHBOURS: usize = 4;
