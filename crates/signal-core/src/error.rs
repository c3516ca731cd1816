//! Error types for core node data.

use std::error::Error;
use std::fmt;

/// Errors converting raw data into a [`NodeKind`](crate::NodeKind).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KindError {
    /// The tag does not name any known node kind.
    UnknownTag {
        /// The unrecognized tag.
        tag: u8,
    },
}

impl fmt::Display for KindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownTag { tag } => write!(f, "unknown node kind tag {tag}"),
        }
    }
}

impl Error for KindError {}
