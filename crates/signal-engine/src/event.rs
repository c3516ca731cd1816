//! The event table: input arity, broadcast hook and fire rule per kind.
//!
//! Everything kind-specific about propagation lives here, in exhaustive
//! matches over [`NodeKind`]. Adding a kind is a compile error until it
//! has an arity and a fire rule.

use signal_core::{NodeId, NodeKind, MAX_WRITES};
use signal_grid::{Direction, NodeGrid};

use crate::log::{SignalLog, NODE_TAG};

/// Per-edge hook run by a broadcasting node before it notifies a neighbour.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BroadcastHook {
    /// Write the broadcaster's value into the neighbour.
    StageValue,
}

/// Static propagation properties of one node kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EventRule {
    /// Counted input deliveries needed before the kind stops reacting
    /// for the beat. Zero for sources.
    pub required_reads: u16,
    /// Hook applied on every outgoing broadcast edge.
    pub hook: Option<BroadcastHook>,
}

impl EventRule {
    /// The rule for `kind`.
    pub const fn of(kind: NodeKind) -> Self {
        let required_reads = match kind {
            NodeKind::None | NodeKind::Clock => 0,
            NodeKind::Add | NodeKind::And | NodeKind::Equals => 2,
            NodeKind::Bus
            | NodeKind::Print
            | NodeKind::Increment
            | NodeKind::Not
            | NodeKind::Copy
            | NodeKind::CopyLeftRight
            | NodeKind::CopyRightLeft
            | NodeKind::CopyUpDown
            | NodeKind::CopyDownUp => 1,
        };
        let hook = match kind {
            NodeKind::Copy => Some(BroadcastHook::StageValue),
            _ => None,
        };
        Self {
            required_reads,
            hook,
        }
    }
}

/// Shorthand for `EventRule::of(kind).required_reads`.
pub const fn required_reads(kind: NodeKind) -> u16 {
    EventRule::of(kind).required_reads
}

/// What the propagator should do after a fire rule ran.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Outcome {
    /// Nothing further.
    Quiet,
    /// Notify every alive neighbour except the input.
    Broadcast,
    /// The value was already staged into this node; notify only it.
    Deliver(NodeId),
}

#[derive(Clone, Copy)]
struct Source {
    id: NodeId,
    kind: NodeKind,
    value: u32,
}

/// Run the fire rule of node `id` for one delivery from `input`.
///
/// The caller has already checked that the node is alive, ready and
/// within budget.
pub(crate) fn fire(
    grid: &mut NodeGrid,
    id: NodeId,
    input: Option<NodeId>,
    log: &mut dyn SignalLog,
) -> Outcome {
    let source = input.and_then(|i| grid.get(i)).map(|n| Source {
        id: n.id(),
        kind: n.kind,
        value: n.value,
    });
    let kind = grid[id].kind;
    let arity = required_reads(kind);

    match kind {
        NodeKind::None => Outcome::Quiet,
        NodeKind::Clock => {
            let node = &mut grid[id];
            node.value = node.value.wrapping_add(1);
            Outcome::Broadcast
        }
        NodeKind::Bus => {
            if source.is_some() {
                grid[id].count_read();
            }
            Outcome::Broadcast
        }
        NodeKind::Add => {
            let Some(src) = source else {
                return Outcome::Quiet;
            };
            let node = &mut grid[id];
            let reads = node.count_read();
            debug_assert!(reads <= arity, "add observed read {reads} of {arity}");
            node.value = node.value.wrapping_add(src.value);
            if reads == arity {
                Outcome::Broadcast
            } else {
                Outcome::Quiet
            }
        }
        NodeKind::And | NodeKind::Equals => {
            let Some(src) = source else {
                return Outcome::Quiet;
            };
            let node = &mut grid[id];
            let reads = node.count_read();
            debug_assert!(reads <= arity, "{kind} observed read {reads} of {arity}");
            if reads < arity {
                node.value = src.value;
                return Outcome::Quiet;
            }
            let holds = if kind == NodeKind::And {
                node.value != 0 && src.value != 0
            } else {
                node.value == src.value
            };
            node.value = u32::from(holds);
            if holds {
                Outcome::Broadcast
            } else {
                Outcome::Quiet
            }
        }
        NodeKind::Print => {
            let Some(src) = source else {
                return Outcome::Quiet;
            };
            let node = &mut grid[id];
            node.count_read();
            node.value = src.value;
            log.log(NODE_TAG, &format!("{}: {}", src.kind, src.value));
            Outcome::Quiet
        }
        NodeKind::Increment => {
            if source.is_none() {
                return Outcome::Quiet;
            }
            let node = &mut grid[id];
            node.count_read();
            node.value = node.value.wrapping_add(1);
            Outcome::Broadcast
        }
        NodeKind::Not => {
            let Some(src) = source else {
                return Outcome::Quiet;
            };
            let node = &mut grid[id];
            node.count_read();
            node.value = u32::from(src.value == 0);
            Outcome::Broadcast
        }
        NodeKind::Copy => {
            let Some(src) = source else {
                return Outcome::Quiet;
            };
            let node = &mut grid[id];
            node.count_read();
            node.value = src.value;
            Outcome::Broadcast
        }
        NodeKind::CopyLeftRight => relay(grid, id, source, Direction::Right),
        NodeKind::CopyRightLeft => relay(grid, id, source, Direction::Left),
        NodeKind::CopyUpDown => relay(grid, id, source, Direction::Down),
        NodeKind::CopyDownUp => relay(grid, id, source, Direction::Up),
    }
}

/// Directional copy: accept only from the neighbour opposite `downstream`,
/// then hand the value to the `downstream` neighbour alone.
fn relay(
    grid: &mut NodeGrid,
    id: NodeId,
    source: Option<Source>,
    downstream: Direction,
) -> Outcome {
    let Some(src) = source else {
        return Outcome::Quiet;
    };
    if grid.neighbour(id, downstream.opposite()) != Some(src.id) {
        return Outcome::Quiet;
    }
    let out = grid.neighbour(id, downstream);

    let node = &mut grid[id];
    node.count_read();
    node.value = src.value;
    let Some(out) = out else {
        return Outcome::Quiet;
    };
    if node.writes >= MAX_WRITES {
        return Outcome::Quiet;
    }
    node.count_write();
    let value = node.value;
    grid[out].value = value;
    Outcome::Deliver(out)
}

/// Apply `hook` for the edge `from -> to`.
pub(crate) fn apply_hook(grid: &mut NodeGrid, hook: BroadcastHook, from: NodeId, to: NodeId) {
    match hook {
        BroadcastHook::StageValue => {
            let value = grid[from].value;
            grid[to].value = value;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::log::LogRing;
    use signal_core::Color;
    use signal_grid::CellLayout;

    fn row(kinds: &[NodeKind]) -> NodeGrid {
        let mut g = NodeGrid::new(kinds.len() as u32, 1, CellLayout::default()).unwrap();
        for (node, &kind) in g.nodes_mut().iter_mut().zip(kinds) {
            node.init(kind);
        }
        g
    }

    // ── Table ───────────────────────────────────────────────────

    #[test]
    fn arity_by_kind() {
        assert_eq!(required_reads(NodeKind::None), 0);
        assert_eq!(required_reads(NodeKind::Clock), 0);
        assert_eq!(required_reads(NodeKind::Add), 2);
        assert_eq!(required_reads(NodeKind::And), 2);
        assert_eq!(required_reads(NodeKind::Equals), 2);
        for kind in NodeKind::ALL {
            assert!(required_reads(kind) <= 2);
        }
    }

    #[test]
    fn only_copy_has_hook() {
        for kind in NodeKind::ALL {
            let expected = (kind == NodeKind::Copy).then_some(BroadcastHook::StageValue);
            assert_eq!(EventRule::of(kind).hook, expected, "{kind}");
        }
    }

    // ── Fire rules ──────────────────────────────────────────────

    #[test]
    fn clock_counts_up_and_broadcasts() {
        let mut g = row(&[NodeKind::Clock]);
        let mut log = LogRing::new(4);
        assert_eq!(fire(&mut g, NodeId(0), None, &mut log), Outcome::Broadcast);
        assert_eq!(g[NodeId(0)].value, 1);
        assert_eq!(g[NodeId(0)].reads, 0);
    }

    #[test]
    fn clock_value_wraps() {
        let mut g = row(&[NodeKind::Clock]);
        g[NodeId(0)].value = u32::MAX;
        fire(&mut g, NodeId(0), None, &mut LogRing::new(1));
        assert_eq!(g[NodeId(0)].value, 0);
    }

    #[test]
    fn add_broadcasts_on_second_read_only() {
        let mut g = row(&[NodeKind::Bus, NodeKind::Add, NodeKind::Bus]);
        g[NodeId(0)].value = 3;
        g[NodeId(2)].value = 4;
        let mut log = LogRing::new(4);
        assert_eq!(fire(&mut g, NodeId(1), Some(NodeId(0)), &mut log), Outcome::Quiet);
        assert_eq!(g[NodeId(1)].value, 3);
        assert_eq!(
            fire(&mut g, NodeId(1), Some(NodeId(2)), &mut log),
            Outcome::Broadcast
        );
        assert_eq!(g[NodeId(1)].value, 7);
        assert_eq!(g[NodeId(1)].reads, 2);
        assert_eq!(g[NodeId(1)].color, Color::GREEN);
    }

    #[test]
    fn equals_compares_staged_value() {
        let mut g = row(&[NodeKind::Bus, NodeKind::Equals, NodeKind::Bus]);
        g[NodeId(0)].value = 5;
        g[NodeId(2)].value = 5;
        let mut log = LogRing::new(4);
        fire(&mut g, NodeId(1), Some(NodeId(0)), &mut log);
        assert_eq!(
            fire(&mut g, NodeId(1), Some(NodeId(2)), &mut log),
            Outcome::Broadcast
        );
        assert_eq!(g[NodeId(1)].value, 1);
    }

    #[test]
    fn not_inverts_truthiness() {
        let mut g = row(&[NodeKind::Bus, NodeKind::Not]);
        g[NodeId(0)].value = 9;
        fire(&mut g, NodeId(1), Some(NodeId(0)), &mut LogRing::new(1));
        assert_eq!(g[NodeId(1)].value, 0);
    }

    #[test]
    fn print_logs_source_kind_and_value() {
        let mut g = row(&[NodeKind::Increment, NodeKind::Print]);
        g[NodeId(0)].value = 12;
        let mut log = LogRing::new(4);
        assert_eq!(fire(&mut g, NodeId(1), Some(NodeId(0)), &mut log), Outcome::Quiet);
        let entry = log.latest().unwrap();
        assert_eq!(entry.tag, NODE_TAG);
        assert_eq!(entry.message, "incr: 12");
        assert_eq!(g[NodeId(1)].value, 12);
    }

    #[test]
    fn unary_kinds_ignore_manual_fire() {
        for kind in [NodeKind::Increment, NodeKind::Not, NodeKind::Copy, NodeKind::Print] {
            let mut g = row(&[kind]);
            assert_eq!(fire(&mut g, NodeId(0), None, &mut LogRing::new(1)), Outcome::Quiet);
            assert_eq!(g[NodeId(0)].reads, 0, "{kind}");
            assert_eq!(g[NodeId(0)].value, 0, "{kind}");
        }
    }

    #[test]
    fn bus_relays_without_changing_value() {
        let mut g = row(&[NodeKind::Clock, NodeKind::Bus]);
        g[NodeId(0)].value = 8;
        assert_eq!(
            fire(&mut g, NodeId(1), Some(NodeId(0)), &mut LogRing::new(1)),
            Outcome::Broadcast
        );
        assert_eq!(g[NodeId(1)].value, 0);
        assert_eq!(g[NodeId(1)].reads, 1);
    }

    // ── Directional copy ────────────────────────────────────────

    #[test]
    fn relay_delivers_downstream() {
        let mut g = row(&[NodeKind::Bus, NodeKind::CopyLeftRight, NodeKind::Print]);
        g[NodeId(0)].value = 6;
        let out = fire(&mut g, NodeId(1), Some(NodeId(0)), &mut LogRing::new(1));
        assert_eq!(out, Outcome::Deliver(NodeId(2)));
        assert_eq!(g[NodeId(1)].value, 6);
        assert_eq!(g[NodeId(2)].value, 6);
        assert_eq!(g[NodeId(1)].writes, 1);
    }

    #[test]
    fn relay_ignores_wrong_side() {
        let mut g = row(&[NodeKind::Bus, NodeKind::CopyRightLeft, NodeKind::Bus]);
        g[NodeId(0)].value = 6;
        let out = fire(&mut g, NodeId(1), Some(NodeId(0)), &mut LogRing::new(1));
        assert_eq!(out, Outcome::Quiet);
        assert_eq!(g[NodeId(1)].reads, 0);
        assert_eq!(g[NodeId(1)].value, 0);
    }

    #[test]
    fn relay_at_border_copies_but_delivers_nothing() {
        let mut g = row(&[NodeKind::Bus, NodeKind::CopyLeftRight]);
        g[NodeId(0)].value = 2;
        let out = fire(&mut g, NodeId(1), Some(NodeId(0)), &mut LogRing::new(1));
        assert_eq!(out, Outcome::Quiet);
        assert_eq!(g[NodeId(1)].value, 2);
        assert_eq!(g[NodeId(1)].writes, 0);
    }

    #[test]
    fn stage_value_hook_copies_into_neighbour() {
        let mut g = row(&[NodeKind::Copy, NodeKind::Bus]);
        g[NodeId(0)].value = 31;
        apply_hook(&mut g, BroadcastHook::StageValue, NodeId(0), NodeId(1));
        assert_eq!(g[NodeId(1)].value, 31);
    }
}
