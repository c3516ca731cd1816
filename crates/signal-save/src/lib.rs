//! Binary save format for Signal grid state.
//!
//! The whole simulation state (scheduler scalars plus every node record)
//! is stored as one fixed-size little-endian blob. Loading validates the
//! blob length against the size expected for the receiving grid before
//! decoding anything, so any layout change invalidates old files by size
//! alone; the magic and version tag catch the rest.
//!
//! # Format
//!
//! ```text
//! [MAGIC "SGNL"] [VERSION u8] [width u32] [height u32]
//! [timer f32] [bpm f32] [tick u64] [paused u8]
//! [NodeRecord 0] [NodeRecord 1] ... [NodeRecord width*height-1]
//! ```
//!
//! All I/O uses a custom binary codec (no serde dependency).

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod codec;
pub mod error;
pub mod file;
pub mod hash;
pub mod types;

pub use codec::{decode_state, encode_state, encoded_len};
pub use error::SaveError;
pub use file::{load_state, store_state};
pub use hash::state_hash;
pub use types::SavedState;

/// Magic bytes at the start of every save file.
pub const MAGIC: [u8; 4] = *b"SGNL";

/// Current binary format version.
///
/// History:
/// - v1: initial layout (30-byte header, 39-byte node records)
pub const FORMAT_VERSION: u8 = 1;

/// Encoded size of the header in bytes.
pub const HEADER_LEN: usize = 4 + 1 + 4 + 4 + 4 + 4 + 8 + 1;

/// Encoded size of one node record in bytes.
pub const NODE_RECORD_LEN: usize = 4 + 1 + 4 + 1 + 2 + 2 + 1 + 4 * 4 + 4 + 4;
