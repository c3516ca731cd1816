//! Signal: a grid of typed nodes that pass integer signals to their
//! neighbours, one beat at a time.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all Signal sub-crates. For most users, adding `signal` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use signal::prelude::*;
//!
//! // [clock] -> [increment] -> [print], one row.
//! let config = EngineConfig { width: 3, height: 1, ..EngineConfig::default() };
//! let mut world = SignalWorld::new(config).unwrap();
//! world.grid_mut()[NodeId(0)].init(NodeKind::Clock);
//! world.grid_mut()[NodeId(1)].init(NodeKind::Increment);
//! world.grid_mut()[NodeId(2)].init(NodeKind::Print);
//!
//! // 120 bpm: the fourth 1/8 s frame completes the first beat.
//! for _ in 0..4 {
//!     world.step(0.125);
//! }
//! assert_eq!(world.log().latest().unwrap().message, "incr: 1");
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `signal-core` | Node record, kinds, ids, colours |
//! | [`grid`] | `signal-grid` | Grid storage, neighbour lookup, hit testing |
//! | [`engine`] | `signal-engine` | Event table, propagation, beats, editor, session |
//! | [`save`] | `signal-save` | Versioned save format and state hashing |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types and ids (`signal-core`).
pub use signal_core as types;

/// Grid storage and neighbourhood (`signal-grid`).
///
/// [`grid::NodeGrid::alive_neighbours`] fixes the broadcast order: left,
/// right, up, down.
pub use signal_grid as grid;

/// Propagation, beat scheduling and the interactive session (`signal-engine`).
pub use signal_engine as engine;

/// Save format (`signal-save`).
///
/// Load rejects any file whose size does not match the receiving grid.
pub use signal_save as save;

/// Common imports for typical Signal usage.
pub mod prelude {
    // Core types
    pub use signal_core::{Color, Node, NodeId, NodeKind, TickId, MAX_WRITES};

    // Grid
    pub use signal_grid::{CellLayout, Direction, NodeGrid};

    // Engine
    pub use signal_engine::{
        Cycle, Editor, EngineConfig, FrameReport, InputFrame, Key, LogRing, MouseButton,
        Session, SignalLog, SignalWorld, StepMetrics,
    };

    // Errors
    pub use signal_core::KindError;
    pub use signal_engine::ConfigError;
    pub use signal_grid::GridError;
    pub use signal_save::SaveError;
}
