//! Benchmark profiles for the Signal grid simulator.
//!
//! Provides pre-built worlds for benchmarking:
//!
//! - [`reference_profile`]: 64x64 grid of seeded random wiring
//! - [`stress_profile`]: 256x256 grid of seeded random wiring
//! - [`bus_field`]: every cell an alive bus, the densest ripple possible

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use rand_chacha::rand_core::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use signal_core::NodeKind;
use signal_engine::{EngineConfig, SignalWorld};

/// Build a `width x height` world with seeded random wiring.
///
/// Each cell is alive with probability `density_percent / 100` and gets a
/// uniformly random kind and a value below 4. The same seed always yields
/// the same world.
///
/// # Panics
///
/// Panics if the dimensions do not form a valid world.
pub fn random_world(width: u32, height: u32, density_percent: u32, seed: u64) -> SignalWorld {
    let config = EngineConfig {
        width,
        height,
        ..EngineConfig::default()
    };
    let mut world = SignalWorld::new(config).expect("benchmark dimensions are valid");
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    for node in world.grid_mut().nodes_mut() {
        if rng.next_u32() % 100 >= density_percent {
            continue;
        }
        let kind = NodeKind::ALL[rng.next_u32() as usize % NodeKind::COUNT];
        node.init(kind);
        node.value = rng.next_u32() % 4;
    }
    world
}

/// 64x64 grid (4K cells), 70% alive.
pub fn reference_profile(seed: u64) -> SignalWorld {
    random_world(64, 64, 70, seed)
}

/// 256x256 grid (~65K cells), 70% alive.
pub fn stress_profile(seed: u64) -> SignalWorld {
    random_world(256, 256, 70, seed)
}

/// A `side x side` grid where every cell is an alive bus.
pub fn bus_field(side: u32) -> SignalWorld {
    let mut world = random_world(side, side, 0, 0);
    for node in world.grid_mut().nodes_mut() {
        node.init(NodeKind::Bus);
    }
    world
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_world() {
        assert_eq!(
            reference_profile(42).state_hash(),
            reference_profile(42).state_hash()
        );
    }

    #[test]
    fn different_seeds_differ() {
        assert_ne!(
            reference_profile(1).state_hash(),
            reference_profile(2).state_hash()
        );
    }

    #[test]
    fn density_is_roughly_respected() {
        let world = reference_profile(7);
        let alive = world.grid().nodes().iter().filter(|n| n.alive).count();
        let total = world.grid().len();
        assert!(alive * 100 > total * 60, "{alive}/{total}");
        assert!(alive * 100 < total * 80, "{alive}/{total}");
    }

    #[test]
    fn bus_field_is_fully_alive() {
        let world = bus_field(8);
        assert!(world
            .grid()
            .nodes()
            .iter()
            .all(|n| n.alive && n.kind == NodeKind::Bus));
    }
}
