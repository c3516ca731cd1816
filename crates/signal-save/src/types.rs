//! Data types for saved simulation state.

use signal_core::Node;

/// Everything needed to restore a simulation exactly.
///
/// # Examples
///
/// ```
/// use signal_save::{decode_state, encode_state, SavedState};
///
/// let state = SavedState {
///     width: 0,
///     height: 0,
///     timer: 0.25,
///     bpm: 120.0,
///     tick: 9,
///     paused: true,
///     nodes: vec![],
/// };
/// let mut buf = Vec::new();
/// encode_state(&mut buf, &state).unwrap();
/// assert_eq!(decode_state(&buf, 0, 0).unwrap(), state);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct SavedState {
    /// Grid columns.
    pub width: u32,
    /// Grid rows.
    pub height: u32,
    /// Beat accumulator, in seconds.
    pub timer: f32,
    /// Beats per minute.
    pub bpm: f32,
    /// Frame counter.
    pub tick: u64,
    /// Whether the beat timer is paused.
    pub paused: bool,
    /// Every node, in id order.
    pub nodes: Vec<Node>,
}
