//! Whole-file store and load.

use std::fs;
use std::path::Path;

use tracing::{debug, error};

use crate::codec::{decode_state, encode_state};
use crate::error::SaveError;
use crate::types::SavedState;
use crate::{HEADER_LEN, NODE_RECORD_LEN};

/// Encode `state` and write it to `path`, replacing any existing file.
///
/// A state whose node count disagrees with its dimensions is rejected
/// with [`SaveError::MalformedRecord`] and nothing is written.
pub fn store_state(path: impl AsRef<Path>, state: &SavedState) -> Result<(), SaveError> {
    let path = path.as_ref();
    // Sized from the nodes actually held, never from the declared dimensions.
    let mut buf = Vec::with_capacity(HEADER_LEN + state.nodes.len() * NODE_RECORD_LEN);
    encode_state(&mut buf, state)?;
    fs::write(path, &buf).map_err(|e| {
        error!(path = %path.display(), error = %e, "failed to write state file");
        SaveError::Io(e)
    })?;
    debug!(path = %path.display(), bytes = buf.len(), "stored state file");
    Ok(())
}

/// Read `path` and decode it for a `width x height` grid.
///
/// A file of the wrong size (an older layout, another grid size, or a
/// truncated write) is rejected with [`SaveError::SizeMismatch`].
pub fn load_state(
    path: impl AsRef<Path>,
    width: u32,
    height: u32,
) -> Result<SavedState, SaveError> {
    let path = path.as_ref();
    let bytes = fs::read(path)?;
    decode_state(&bytes, width, height).inspect_err(|e| {
        error!(
            path = %path.display(),
            error = %e,
            "tried loading a corrupt or incompatible state file"
        );
    })
}
