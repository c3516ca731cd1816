//! The simulation world: grid, beat clock, propagation and persistence.
//!
//! [`SignalWorld`] owns every node and drives them one update at a time.
//! It knows nothing about input devices; the [`Session`](crate::Session)
//! translates frames of input into calls on it.
//!
//! # Ownership model
//!
//! All mutation goes through `&mut self`. A propagation chain started by
//! [`update()`](SignalWorld::update), [`fire()`](SignalWorld::fire) or
//! [`trigger()`](SignalWorld::trigger) runs to exhaustion before the call
//! returns, so two chains never interleave.

use std::path::Path;
use std::time::Instant;

use signal_core::{NodeId, NodeKind, TickId};
use signal_grid::NodeGrid;
use signal_save::{load_state, state_hash, store_state, SaveError, SavedState};
use tracing::{debug, error};

use crate::beat::BeatClock;
use crate::config::{ConfigError, EngineConfig};
use crate::log::{LogRing, SignalLog, INFO_TAG};
use crate::metrics::StepMetrics;
use crate::propagate::{PropagationStats, Propagator};

/// A grid of nodes plus everything needed to run it.
///
/// Generic over the log sink so tests can capture output; the default is
/// a [`LogRing`].
#[derive(Debug)]
pub struct SignalWorld<L = LogRing> {
    grid: NodeGrid,
    clock: BeatClock,
    tick: TickId,
    paused: bool,
    propagator: Propagator,
    log: L,
    config: EngineConfig,
    last_metrics: StepMetrics,
}

impl SignalWorld<LogRing> {
    /// Build a world with a [`LogRing`] of `config.log_capacity` entries.
    ///
    /// # Examples
    ///
    /// ```
    /// use signal_core::{NodeId, NodeKind};
    /// use signal_engine::{EngineConfig, SignalWorld};
    ///
    /// let config = EngineConfig { width: 3, height: 1, ..EngineConfig::default() };
    /// let mut world = SignalWorld::new(config).unwrap();
    /// world.grid_mut()[NodeId(0)].init(NodeKind::Clock);
    /// world.grid_mut()[NodeId(1)].init(NodeKind::Increment);
    /// world.grid_mut()[NodeId(2)].init(NodeKind::Print);
    ///
    /// world.beat();
    /// assert_eq!(world.log().latest().unwrap().message, "incr: 1");
    /// ```
    pub fn new(config: EngineConfig) -> Result<Self, ConfigError> {
        let log = LogRing::new(config.log_capacity);
        Self::with_log(config, log)
    }
}

impl<L: SignalLog> SignalWorld<L> {
    /// Build a world that logs into `log`.
    pub fn with_log(config: EngineConfig, log: L) -> Result<Self, ConfigError> {
        config.validate()?;
        let grid = NodeGrid::new(config.width, config.height, config.layout)?;
        Ok(Self {
            grid,
            clock: BeatClock::new(config.bpm),
            tick: TickId::default(),
            paused: false,
            propagator: Propagator::new(),
            log,
            config,
            last_metrics: StepMetrics::default(),
        })
    }

    // ── Accessors ──────────────────────────────────────────────

    /// The node grid.
    pub fn grid(&self) -> &NodeGrid {
        &self.grid
    }

    /// Mutable access to the node grid, for building and editing.
    pub fn grid_mut(&mut self) -> &mut NodeGrid {
        &mut self.grid
    }

    /// The log sink.
    pub fn log(&self) -> &L {
        &self.log
    }

    /// Mutable access to the log sink.
    pub fn log_mut(&mut self) -> &mut L {
        &mut self.log
    }

    /// The configuration this world was built from.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// The beat clock.
    pub fn clock(&self) -> &BeatClock {
        &self.clock
    }

    /// Frames completed so far.
    pub fn tick(&self) -> TickId {
        self.tick
    }

    /// Current tempo.
    pub fn bpm(&self) -> f32 {
        self.clock.bpm()
    }

    /// Set the tempo. Non-finite or non-positive values are ignored.
    pub fn set_bpm(&mut self, bpm: f32) {
        if bpm.is_finite() && bpm > 0.0 {
            self.clock.set_bpm(bpm);
        }
    }

    /// Whether time accumulation is suspended.
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Suspend or resume time accumulation.
    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    /// Metrics of the most recent update.
    pub fn last_metrics(&self) -> &StepMetrics {
        &self.last_metrics
    }

    // ── Time ───────────────────────────────────────────────────

    /// Clamp `dt` to `[0, max_dt]` and, unless paused, accumulate it.
    ///
    /// Returns the clamped delta. Non-finite deltas count as zero.
    pub fn advance_time(&mut self, dt: f32) -> f32 {
        let dt = if dt.is_finite() {
            dt.clamp(0.0, self.config.max_dt)
        } else {
            0.0
        };
        if !self.paused {
            self.clock.accumulate(dt);
        }
        dt
    }

    /// Count one completed frame.
    pub fn advance_tick(&mut self) {
        self.tick = TickId(self.tick.0.wrapping_add(1));
    }

    /// Run one node update.
    ///
    /// Consumes a beat if one is due. A beat replenishes every node's
    /// budget, then fires every alive clock. With `reset_all`, every
    /// alive node is reset instead of firing clocks.
    pub fn update(&mut self, reset_all: bool) -> StepMetrics {
        let beat = self.clock.take_beat();
        self.run_update(beat, reset_all)
    }

    /// Force a beat regardless of the timer.
    pub fn beat(&mut self) -> StepMetrics {
        self.run_update(true, false)
    }

    /// Headless frame: [`advance_time`](Self::advance_time),
    /// [`update`](Self::update), [`advance_tick`](Self::advance_tick).
    pub fn step(&mut self, dt: f32) -> StepMetrics {
        self.advance_time(dt);
        let metrics = self.update(false);
        self.advance_tick();
        metrics
    }

    fn run_update(&mut self, beat: bool, reset_all: bool) -> StepMetrics {
        let start = Instant::now();
        let mut metrics = StepMetrics {
            beat,
            ..StepMetrics::default()
        };

        if beat {
            for node in self.grid.nodes_mut() {
                node.replenish();
            }
        }
        if reset_all {
            for node in self.grid.nodes_mut().iter_mut().filter(|n| n.alive) {
                node.reset();
            }
        } else if beat {
            let mut stats = PropagationStats::default();
            for slot in 0..self.grid.len() {
                let node = &self.grid.nodes()[slot];
                if !node.alive || node.kind != NodeKind::Clock {
                    continue;
                }
                let id = node.id();
                // A clock fires on every beat even if a ripple already
                // reached it after the reset pass.
                self.grid[id].ready = true;
                metrics.clocks_fired += 1;
                stats.absorb(self.propagator.event_callback(
                    &mut self.grid,
                    id,
                    None,
                    &mut self.log,
                ));
            }
            metrics.firings = stats.firings;
            metrics.deliveries = stats.deliveries;
        }

        metrics.total_us = start.elapsed().as_micros() as u64;
        if beat {
            debug!(
                tick = self.tick.0,
                clocks = metrics.clocks_fired,
                firings = metrics.firings,
                deliveries = metrics.deliveries,
                "beat"
            );
        }
        self.last_metrics = metrics.clone();
        metrics
    }

    // ── Firing ─────────────────────────────────────────────────

    /// Deliver `input` (or nothing) to `node` and run the ripple.
    pub fn event_callback(&mut self, node: NodeId, input: Option<NodeId>) -> PropagationStats {
        self.propagator
            .event_callback(&mut self.grid, node, input, &mut self.log)
    }

    /// Fire `node` with no input, within its current budget.
    pub fn fire(&mut self, node: NodeId) -> PropagationStats {
        self.event_callback(node, None)
    }

    /// Manual trigger: set an alive node's value to 1, then fire it.
    ///
    /// Dead or out-of-range nodes are left untouched.
    pub fn trigger(&mut self, node: NodeId) -> PropagationStats {
        match self.grid.get_mut(node) {
            Some(n) if n.alive => n.value = 1,
            _ => return PropagationStats::default(),
        }
        self.fire(node)
    }

    /// Return to the initial state: every node dead, tempo from the
    /// config, timer zero, unpaused, log cleared. The tick count is kept.
    pub fn reinit(&mut self) {
        self.grid.clear_all();
        self.clock = BeatClock::new(self.config.bpm);
        self.paused = false;
        self.log.clear();
    }

    // ── Persistence ────────────────────────────────────────────

    /// Copy of everything the save format stores.
    pub fn to_saved_state(&self) -> SavedState {
        SavedState {
            width: self.grid.width(),
            height: self.grid.height(),
            timer: self.clock.timer(),
            bpm: self.clock.bpm(),
            tick: self.tick.0,
            paused: self.paused,
            nodes: self.grid.nodes().to_vec(),
        }
    }

    /// FNV-1a hash of the current state.
    pub fn state_hash(&self) -> u64 {
        state_hash(&self.to_saved_state())
    }

    /// Replace the world state with `state`.
    ///
    /// On error nothing is changed.
    pub fn restore(&mut self, state: SavedState) -> Result<(), SaveError> {
        let expected = (self.grid.width(), self.grid.height());
        if (state.width, state.height) != expected {
            return Err(SaveError::DimensionMismatch {
                expected,
                found: (state.width, state.height),
            });
        }
        if !state.bpm.is_finite() || state.bpm <= 0.0 || !state.timer.is_finite() {
            return Err(SaveError::MalformedRecord {
                detail: format!("invalid scheduler state: timer={}, bpm={}", state.timer, state.bpm),
            });
        }
        self.grid
            .replace_nodes(state.nodes)
            .map_err(|e| SaveError::MalformedRecord {
                detail: e.to_string(),
            })?;
        self.clock.restore(state.timer, state.bpm);
        self.tick = TickId(state.tick);
        self.paused = state.paused;
        Ok(())
    }

    /// Write the state to `path`.
    pub fn store(&mut self, path: &Path) -> Result<(), SaveError> {
        store_state(path, &self.to_saved_state())?;
        self.log
            .log(INFO_TAG, &format!("stored state file {}", path.display()));
        Ok(())
    }

    /// Replace the state with the one stored at `path`.
    ///
    /// The file must have been written for a grid of this world's
    /// dimensions. On any failure the error is logged, returned, and the
    /// current state is kept.
    pub fn load(&mut self, path: &Path) -> Result<(), SaveError> {
        let state = load_state(path, self.grid.width(), self.grid.height())?;
        self.restore(state)
            .inspect_err(|e| error!(path = %path.display(), error = %e, "rejected state file"))?;
        self.log
            .log(INFO_TAG, &format!("loaded state file {}", path.display()));
        Ok(())
    }
}
