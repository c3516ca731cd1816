//! Log sink for node side effects and session events.
//!
//! The print kind and the edit session report through [`SignalLog`].
//! [`LogRing`] keeps the most recent entries for display and mirrors
//! each one to `tracing`.

use std::collections::VecDeque;

/// Tag used by the print kind.
pub const NODE_TAG: &str = "node";

/// Tag used for session events (copy, paste, store, load).
pub const INFO_TAG: &str = "info";

/// Destination for `(tag, message)` log lines.
///
/// Implementations must not fail or block: logging happens in the
/// middle of propagation.
pub trait SignalLog {
    /// Record one entry.
    fn log(&mut self, tag: &str, message: &str);

    /// Drop all retained entries. Sinks that keep nothing ignore this.
    fn clear(&mut self) {}
}

/// One retained log line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LogEntry {
    /// Category, e.g. [`NODE_TAG`].
    pub tag: String,
    /// Formatted message.
    pub message: String,
}

/// Bounded ring of the most recent log entries.
///
/// Once full, each new entry evicts the oldest.
#[derive(Clone, Debug)]
pub struct LogRing {
    entries: VecDeque<LogEntry>,
    capacity: usize,
}

impl LogRing {
    /// An empty ring holding at most `capacity` entries (at least one).
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Maximum number of retained entries.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of retained entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing is retained.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Retained entries, oldest first.
    pub fn entries(&self) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter()
    }

    /// The most recent entry.
    pub fn latest(&self) -> Option<&LogEntry> {
        self.entries.back()
    }
}

impl SignalLog for LogRing {
    fn log(&mut self, tag: &str, message: &str) {
        tracing::info!(tag, "{message}");
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(LogEntry {
            tag: tag.to_owned(),
            message: message.to_owned(),
        });
    }

    fn clear(&mut self) {
        self.entries.clear();
    }
}
