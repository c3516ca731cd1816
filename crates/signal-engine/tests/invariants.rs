//! Property tests: budget ceilings, beat replenishment and determinism
//! over arbitrary wiring.

use proptest::prelude::*;
use signal_core::{NodeId, NodeKind, MAX_WRITES};
use signal_engine::{required_reads, EngineConfig, SignalWorld};
use signal_test_utils::RecordingLog;

const MAX_SIDE: u32 = 7;
const MAX_CELLS: usize = (MAX_SIDE * MAX_SIDE) as usize;

fn build(
    width: u32,
    height: u32,
    cells: &[Option<u8>],
    values: &[u32],
) -> SignalWorld<RecordingLog> {
    let config = EngineConfig {
        width,
        height,
        ..EngineConfig::default()
    };
    let mut world = SignalWorld::with_log(config, RecordingLog::new()).unwrap();
    for (i, node) in world.grid_mut().nodes_mut().iter_mut().enumerate() {
        if let Some(tag) = cells[i] {
            node.init(NodeKind::try_from(tag).unwrap());
            node.value = values[i];
        }
    }
    world
}

fn assert_budgets(world: &SignalWorld<RecordingLog>) -> Result<(), TestCaseError> {
    for node in world.grid().nodes() {
        prop_assert!(
            node.reads <= required_reads(node.kind),
            "{} at {} read {} times",
            node.kind,
            node.id(),
            node.reads
        );
        prop_assert!(node.writes <= MAX_WRITES);
    }
    Ok(())
}

fn wiring() -> impl Strategy<Value = (u32, u32, Vec<Option<u8>>, Vec<u32>, Vec<u32>)> {
    (
        1..=MAX_SIDE,
        1..=MAX_SIDE,
        prop::collection::vec(prop::option::weighted(0.8, 0u8..14), MAX_CELLS),
        prop::collection::vec(0u32..4, MAX_CELLS),
        prop::collection::vec(0u32..MAX_CELLS as u32, 0..6),
    )
}

proptest! {
    #[test]
    fn budgets_hold_through_beats_and_triggers(
        (width, height, cells, values, triggers) in wiring()
    ) {
        let mut world = build(width, height, &cells, &values);
        let len = world.grid().len() as u32;
        for _ in 0..3 {
            world.beat();
            assert_budgets(&world)?;
            for &t in &triggers {
                world.trigger(NodeId(t % len));
                assert_budgets(&world)?;
            }
        }
    }

    #[test]
    fn beat_replenishes_all_non_clock_nodes(
        (width, height, cells, values, triggers) in wiring()
    ) {
        let mut world = build(width, height, &cells, &values);
        // No clocks: nothing fires after the reset pass.
        for node in world.grid_mut().nodes_mut() {
            if node.kind == NodeKind::Clock {
                node.kind = NodeKind::Bus;
            }
        }
        let len = world.grid().len() as u32;
        for &t in &triggers {
            world.trigger(NodeId(t % len));
        }
        world.beat();
        for node in world.grid().nodes() {
            prop_assert_eq!((node.reads, node.writes, node.ready), (0, 0, true));
        }
    }

    #[test]
    fn identical_worlds_evolve_identically(
        (width, height, cells, values, triggers) in wiring()
    ) {
        let mut a = build(width, height, &cells, &values);
        let mut b = build(width, height, &cells, &values);
        let len = a.grid().len() as u32;
        for round in 0..3 {
            a.beat();
            b.beat();
            if let Some(&t) = triggers.get(round) {
                a.trigger(NodeId(t % len));
                b.trigger(NodeId(t % len));
            }
            prop_assert_eq!(a.state_hash(), b.state_hash());
        }
        prop_assert_eq!(&a.log().entries, &b.log().entries);
    }

    #[test]
    fn dead_nodes_never_change(
        (width, height, cells, values, triggers) in wiring()
    ) {
        let mut world = build(width, height, &cells, &values);
        let dead_before: Vec<_> = world
            .grid()
            .nodes()
            .iter()
            .filter(|n| !n.alive)
            .map(|n| (n.id(), n.value, n.kind))
            .collect();
        let len = world.grid().len() as u32;
        world.beat();
        for &t in &triggers {
            world.trigger(NodeId(t % len));
        }
        for (id, value, kind) in dead_before {
            let n = &world.grid()[id];
            prop_assert!(!n.alive);
            prop_assert_eq!((n.value, n.kind, n.reads, n.writes), (value, kind, 0, 0));
        }
    }
}
