//! Event propagation, beat scheduling and the edit session for Signal grids.
//!
//! The [`event`] table says what each node kind does with an input; the
//! [`Propagator`] runs one firing and its ripple through the grid;
//! [`SignalWorld`] ties the grid to a [`BeatClock`], replenishing node
//! budgets and firing clocks on every beat. [`Session`] drives a world
//! from polled input frames.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod beat;
pub mod config;
pub mod editor;
pub mod event;
pub mod input;
pub mod log;
pub mod metrics;
pub mod propagate;
pub mod session;
pub mod world;

pub use beat::BeatClock;
pub use config::{ConfigError, EngineConfig};
pub use editor::{Cycle, Editor};
pub use event::{required_reads, BroadcastHook, EventRule};
pub use input::{InputFrame, Key, MouseButton};
pub use log::{LogEntry, LogRing, SignalLog, INFO_TAG, NODE_TAG};
pub use metrics::StepMetrics;
pub use propagate::{PropagationStats, Propagator};
pub use session::{FrameReport, Session};
pub use world::SignalWorld;
