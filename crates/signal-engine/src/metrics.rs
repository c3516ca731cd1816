//! Per-update metrics.
//!
//! [`StepMetrics`] captures what one world update did, for the info
//! panel, tests and benchmarks.

/// Counters and timing for a single world update.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StepMetrics {
    /// Whether a beat happened.
    pub beat: bool,
    /// Alive clocks fired by the beat.
    pub clocks_fired: u32,
    /// Fire rules executed.
    pub firings: u64,
    /// Node-to-node notifications made.
    pub deliveries: u64,
    /// Wall-clock time for the update, in microseconds.
    pub total_us: u64,
}
