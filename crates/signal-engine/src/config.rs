//! Engine configuration, validation, and error types.
//!
//! [`EngineConfig`] is the input for constructing a
//! [`SignalWorld`](crate::SignalWorld) or [`Session`](crate::Session).
//! [`validate()`](EngineConfig::validate) checks structural invariants
//! before anything is allocated.

use std::error::Error;
use std::fmt;
use std::path::PathBuf;

use signal_grid::{CellLayout, GridError};

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected by [`EngineConfig::validate()`] or world construction.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Grid construction failed.
    Grid(GridError),
    /// Width or height is zero.
    EmptyGrid,
    /// `width * height` does not fit a `u32` node id.
    CellCountOverflow {
        /// The overflowing cell count.
        value: u64,
    },
    /// A tempo or time field is NaN, infinite, zero, or negative.
    InvalidRate {
        /// Field name.
        name: &'static str,
        /// The invalid value.
        value: f32,
    },
    /// `log_capacity` is zero.
    LogCapacityZero,
    /// A cell dimension of the layout is zero.
    EmptyCell,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Grid(e) => write!(f, "grid: {e}"),
            Self::EmptyGrid => write!(f, "grid has zero cells"),
            Self::CellCountOverflow { value } => {
                write!(f, "cell count {value} exceeds u32::MAX")
            }
            Self::InvalidRate { name, value } => {
                write!(f, "{name} must be finite and positive, got {value}")
            }
            Self::LogCapacityZero => write!(f, "log_capacity must be at least 1"),
            Self::EmptyCell => write!(f, "cell width and height must be non-zero"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GridError> for ConfigError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

// ── EngineConfig ───────────────────────────────────────────────────

/// Complete configuration for a simulation world and its edit session.
#[derive(Clone, Debug, PartialEq)]
pub struct EngineConfig {
    /// Grid columns. Default: 64.
    pub width: u32,
    /// Grid rows. Default: 64.
    pub height: u32,
    /// Initial and reinitialised tempo. Default: 120.
    pub bpm: f32,
    /// Tempo change per key press, and the lowest allowed tempo. Default: 10.
    pub bpm_step: f32,
    /// Largest frame delta accepted, in seconds. Default: 0.5.
    pub max_dt: f32,
    /// Cell rectangles and hit testing.
    pub layout: CellLayout,
    /// Entries kept by the default log ring. Default: 16.
    pub log_capacity: usize,
    /// File used by the store and load keys. Default: `save.state`.
    pub state_path: PathBuf,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            width: 64,
            height: 64,
            bpm: 120.0,
            bpm_step: 10.0,
            max_dt: 0.5,
            layout: CellLayout::default(),
            log_capacity: 16,
            state_path: PathBuf::from("save.state"),
        }
    }
}

impl EngineConfig {
    /// Validate all structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        // 1. Grid must have at least one cell, and every id must fit u32.
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::EmptyGrid);
        }
        let cells = u64::from(self.width) * u64::from(self.height);
        if cells > u64::from(u32::MAX) {
            return Err(ConfigError::CellCountOverflow { value: cells });
        }
        // 2. Tempo and frame clamp must be usable as divisors and bounds.
        for (name, value) in [
            ("bpm", self.bpm),
            ("bpm_step", self.bpm_step),
            ("max_dt", self.max_dt),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::InvalidRate { name, value });
            }
        }
        // 3. Log ring and layout.
        if self.log_capacity == 0 {
            return Err(ConfigError::LogCapacityZero);
        }
        if self.layout.cell_width == 0 || self.layout.cell_height == 0 {
            return Err(ConfigError::EmptyCell);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        let c = EngineConfig::default();
        c.validate().unwrap();
        assert_eq!((c.width, c.height), (64, 64));
        assert_eq!(c.bpm, 120.0);
        assert_eq!(c.state_path, PathBuf::from("save.state"));
    }

    #[test]
    fn zero_dims_rejected() {
        let c = EngineConfig {
            width: 0,
            ..EngineConfig::default()
        };
        assert_eq!(c.validate(), Err(ConfigError::EmptyGrid));
    }

    #[test]
    fn cell_overflow_rejected() {
        let c = EngineConfig {
            width: u32::MAX,
            height: 2,
            ..EngineConfig::default()
        };
        assert!(matches!(
            c.validate(),
            Err(ConfigError::CellCountOverflow { .. })
        ));
    }

    #[test]
    fn bad_rates_rejected() {
        for bad in [0.0, -1.0, f32::NAN, f32::INFINITY] {
            let c = EngineConfig {
                bpm: bad,
                ..EngineConfig::default()
            };
            assert!(matches!(
                c.validate(),
                Err(ConfigError::InvalidRate { name: "bpm", .. })
            ));
        }
        let c = EngineConfig {
            max_dt: 0.0,
            ..EngineConfig::default()
        };
        assert!(matches!(
            c.validate(),
            Err(ConfigError::InvalidRate { name: "max_dt", .. })
        ));
    }

    #[test]
    fn zero_log_capacity_rejected() {
        let c = EngineConfig {
            log_capacity: 0,
            ..EngineConfig::default()
        };
        assert_eq!(c.validate(), Err(ConfigError::LogCapacityZero));
    }

    #[test]
    fn grid_error_chains_as_source() {
        let e = ConfigError::from(GridError::EmptyGrid);
        assert!(Error::source(&e).is_some());
    }
}
