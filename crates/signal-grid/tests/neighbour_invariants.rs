//! Property tests for the grid index: id mapping, neighbour symmetry,
//! and border handling across arbitrary grid shapes and liveness masks.

use proptest::prelude::*;
use signal_core::{NodeId, NodeKind};
use signal_grid::{CellLayout, Direction, NodeGrid};

fn grid_with_mask(width: u32, height: u32, mask: &[bool]) -> NodeGrid {
    let mut g = NodeGrid::new(width, height, CellLayout::default()).unwrap();
    for (node, &alive) in g.nodes_mut().iter_mut().zip(mask.iter().cycle()) {
        if alive {
            node.init(NodeKind::Bus);
        }
    }
    g
}

proptest! {
    #[test]
    fn id_position_roundtrip(width in 1u32..20, height in 1u32..20) {
        let g = NodeGrid::new(width, height, CellLayout::default()).unwrap();
        for node in g.nodes() {
            let (x, y) = g.position_of(node.id());
            prop_assert!(x < width && y < height);
            prop_assert_eq!(g.id_at(i64::from(x), i64::from(y)), Some(node.id()));
        }
    }

    #[test]
    fn neighbours_are_alive_adjacent_and_ordered(
        width in 1u32..12,
        height in 1u32..12,
        mask in prop::collection::vec(any::<bool>(), 1..32),
    ) {
        let g = grid_with_mask(width, height, &mask);
        for node in g.nodes() {
            let id = node.id();
            let expected: Vec<NodeId> = Direction::ALL
                .iter()
                .filter_map(|&d| g.neighbour(id, d))
                .collect();
            let got = g.alive_neighbours(id);
            prop_assert_eq!(got.as_slice(), expected.as_slice());
            prop_assert!(got.len() <= 4);

            let (x, y) = g.position_of(id);
            for n in got {
                prop_assert!(g[n].alive);
                let (nx, ny) = g.position_of(n);
                let manhattan = (i64::from(nx) - i64::from(x)).abs()
                    + (i64::from(ny) - i64::from(y)).abs();
                prop_assert_eq!(manhattan, 1);
            }
        }
    }

    #[test]
    fn neighbourhood_is_symmetric_between_alive_nodes(
        width in 1u32..12,
        height in 1u32..12,
        mask in prop::collection::vec(any::<bool>(), 1..32),
    ) {
        let g = grid_with_mask(width, height, &mask);
        for node in g.nodes().iter().filter(|n| n.alive) {
            for n in g.alive_neighbours(node.id()) {
                prop_assert!(g.alive_neighbours(n).contains(&node.id()));
            }
        }
    }

    #[test]
    fn hit_test_inverts_layout(width in 1u32..10, height in 1u32..10, x in 0u32..10, y in 0u32..10) {
        let x = x % width;
        let y = y % height;
        let g = NodeGrid::new(width, height, CellLayout::default()).unwrap();
        let id = g.id_at(i64::from(x), i64::from(y)).unwrap();
        let rect = g[id].rect;
        prop_assert_eq!(g.hit_test(rect.x, rect.y), Some(id));
        prop_assert_eq!(
            g.hit_test(rect.x + rect.w as i32 - 1, rect.y + rect.h as i32 - 1),
            Some(id)
        );
    }
}
