//! Test fixtures and recording sinks for Signal development.
//!
//! Provides a [`RecordingLog`] that keeps every log line, and ASCII grid
//! fixtures (see [`fixtures`]) for laying out wiring scenarios.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{glyph_kind, grid_from_ascii, world_from_ascii};

use signal_engine::SignalLog;

/// Log sink that keeps every entry, unbounded.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RecordingLog {
    pub entries: Vec<(String, String)>,
}

impl RecordingLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages logged under `tag`, oldest first.
    pub fn messages(&self, tag: &str) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|(t, _)| t == tag)
            .map(|(_, m)| m.as_str())
            .collect()
    }
}

impl SignalLog for RecordingLog {
    fn log(&mut self, tag: &str, message: &str) {
        self.entries.push((tag.to_owned(), message.to_owned()));
    }

    fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_in_order_and_filters_by_tag() {
        let mut log = RecordingLog::new();
        log.log("node", "clock: 1");
        log.log("info", "copied node 3");
        log.log("node", "clock: 2");
        assert_eq!(log.messages("node"), ["clock: 1", "clock: 2"]);
        assert_eq!(log.entries.len(), 3);
        log.clear();
        assert!(log.entries.is_empty());
    }
}
