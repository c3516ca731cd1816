//! FNV-1a state hash for determinism and round-trip checks. Not a
//! cryptographic digest.

use crate::types::SavedState;

/// 64-bit FNV-1a accumulator.
struct Fnv(u64);

impl Fnv {
    const OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
    const PRIME: u64 = 0x0000_0100_0000_01b3;

    fn new() -> Self {
        Fnv(Self::OFFSET)
    }

    fn feed(&mut self, bytes: &[u8]) {
        for &b in bytes {
            self.0 = (self.0 ^ u64::from(b)).wrapping_mul(Self::PRIME);
        }
    }

    fn flag(&mut self, on: bool) {
        self.feed(&[u8::from(on)]);
    }
}

/// Hash the simulation-relevant part of a state.
///
/// Covers the grid dimensions, scheduler scalars (floats by bit pattern)
/// and, per node, its id, kind, value, liveness and budget counters.
/// Colours and layout are excluded: states that differ only in what a
/// renderer would draw hash equal.
pub fn state_hash(state: &SavedState) -> u64 {
    let mut h = Fnv::new();
    h.feed(&state.width.to_le_bytes());
    h.feed(&state.height.to_le_bytes());
    h.feed(&state.timer.to_bits().to_le_bytes());
    h.feed(&state.bpm.to_bits().to_le_bytes());
    h.feed(&state.tick.to_le_bytes());
    h.flag(state.paused);

    for node in &state.nodes {
        h.feed(&node.id().0.to_le_bytes());
        h.feed(&[node.kind.tag()]);
        h.feed(&node.value.to_le_bytes());
        h.flag(node.alive);
        h.feed(&node.reads.to_le_bytes());
        h.feed(&node.writes.to_le_bytes());
        h.flag(node.ready);
    }
    h.0
}
