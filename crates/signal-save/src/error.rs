//! Error types for the save system.

use std::fmt;
use std::io;

use signal_core::KindError;

/// Errors that can occur while storing or loading saved state.
#[derive(Debug)]
pub enum SaveError {
    /// An I/O error occurred during read or write.
    Io(io::Error),
    /// The blob length differs from the size expected for this grid.
    SizeMismatch {
        /// Bytes expected.
        expected: usize,
        /// Bytes found.
        found: usize,
    },
    /// The blob does not start with the expected `b"SGNL"` magic bytes.
    InvalidMagic,
    /// The format version is not supported by this build.
    UnsupportedVersion {
        /// The version found in the blob.
        found: u8,
    },
    /// The header describes a grid of different dimensions.
    DimensionMismatch {
        /// `(width, height)` of the receiving grid.
        expected: (u32, u32),
        /// `(width, height)` recorded in the blob.
        found: (u32, u32),
    },
    /// A node record carries an unknown kind tag.
    UnknownKind {
        /// Index of the offending record.
        slot: usize,
        /// The underlying tag error.
        source: KindError,
    },
    /// A record could not be decoded.
    MalformedRecord {
        /// Human-readable description of what went wrong.
        detail: String,
    },
}

impl fmt::Display for SaveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::SizeMismatch { expected, found } => {
                write!(
                    f,
                    "state size mismatch: expected {expected} bytes, found {found}"
                )
            }
            Self::InvalidMagic => write!(f, "invalid magic bytes (expected b\"SGNL\")"),
            Self::UnsupportedVersion { found } => {
                write!(f, "unsupported format version {found}")
            }
            Self::DimensionMismatch { expected, found } => {
                write!(
                    f,
                    "grid dimension mismatch: expected {}x{}, found {}x{}",
                    expected.0, expected.1, found.0, found.1
                )
            }
            Self::UnknownKind { slot, source } => {
                write!(f, "node record {slot}: {source}")
            }
            Self::MalformedRecord { detail } => write!(f, "malformed record: {detail}"),
        }
    }
}

impl std::error::Error for SaveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::UnknownKind { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<io::Error> for SaveError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}
