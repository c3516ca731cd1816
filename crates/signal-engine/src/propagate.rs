//! Propagation engine: one firing and its ripple through the grid.
//!
//! Propagation is depth first. A node that broadcasts notifies its
//! alive neighbours left, right, up, down, and each notified neighbour's
//! own ripple runs to completion before the next neighbour is notified.
//! The walk runs on an explicit task stack rather than the call stack,
//! so dense grids cannot exhaust it. Termination comes from the per-node
//! budget (`reads`, `writes`, `ready`) and from never notifying the node
//! that supplied the current input.

use signal_core::{NodeId, MAX_WRITES};
use signal_grid::{Neighbours, NodeGrid};

use crate::event::{self, EventRule, Outcome};
use crate::log::SignalLog;

/// Counters for one propagation run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PropagationStats {
    /// Fire rules executed.
    pub firings: u64,
    /// Node-to-node notifications made (broadcast edges plus directed
    /// deliveries).
    pub deliveries: u64,
    /// Notifications made by the root node's first firing (or by the
    /// initial broadcast). Later re-entries of the root within its own
    /// ripple count as deliveries only.
    pub notified: u32,
}

impl PropagationStats {
    /// Add another run's counters to these.
    pub fn absorb(&mut self, other: PropagationStats) {
        self.firings += other.firings;
        self.deliveries += other.deliveries;
        self.notified += other.notified;
    }
}

#[derive(Debug)]
enum Task {
    /// Deliver `input` (or nothing) to `node`.
    Callback {
        node: NodeId,
        input: Option<NodeId>,
    },
    /// Resume `node`'s broadcast at `targets[next]`. `origin` marks the
    /// root's first broadcast.
    Broadcast {
        node: NodeId,
        input: Option<NodeId>,
        targets: Neighbours,
        next: usize,
        origin: bool,
    },
    /// Close `node`'s firing: drop `ready` once the budget is spent.
    Finalize { node: NodeId },
}

/// Reusable propagation driver.
///
/// Holds only the task stack, so one instance can serve every firing in
/// a world without reallocating.
#[derive(Debug, Default)]
pub struct Propagator {
    stack: Vec<Task>,
}

impl Propagator {
    /// A driver with an empty stack.
    pub fn new() -> Self {
        Self::default()
    }

    /// Deliver `input` (or no input) to `node` and run the resulting
    /// ripple to completion.
    ///
    /// A no-op when `node` is out of range, dead, not ready or saturated.
    pub fn event_callback(
        &mut self,
        grid: &mut NodeGrid,
        node: NodeId,
        input: Option<NodeId>,
        log: &mut dyn SignalLog,
    ) -> PropagationStats {
        self.run(grid, Task::Callback { node, input }, log)
    }

    /// Broadcast from `node` as if it had just fired on `input`.
    ///
    /// Returns without effect when `node` is dead or not ready. The
    /// returned [`PropagationStats::notified`] counts the neighbours this
    /// node notified directly.
    pub fn broadcast(
        &mut self,
        grid: &mut NodeGrid,
        node: NodeId,
        input: Option<NodeId>,
        log: &mut dyn SignalLog,
    ) -> PropagationStats {
        match grid.get(node) {
            Some(n) if n.alive && n.ready => {}
            _ => return PropagationStats::default(),
        }
        let task = Task::Broadcast {
            node,
            input,
            targets: grid.alive_neighbours(node),
            next: 0,
            origin: true,
        };
        self.run(grid, task, log)
    }

    fn run(
        &mut self,
        grid: &mut NodeGrid,
        first: Task,
        log: &mut dyn SignalLog,
    ) -> PropagationStats {
        let mut stats = PropagationStats::default();
        self.stack.clear();
        self.stack.push(first);

        while let Some(task) = self.stack.pop() {
            match task {
                Task::Callback { node, input } => {
                    self.callback(grid, node, input, log, &mut stats)
                }
                Task::Broadcast {
                    node,
                    input,
                    targets,
                    next,
                    origin,
                } => self.broadcast_step(grid, node, input, targets, next, origin, &mut stats),
                Task::Finalize { node } => finalize(grid, node),
            }
        }
        stats
    }

    fn callback(
        &mut self,
        grid: &mut NodeGrid,
        node: NodeId,
        input: Option<NodeId>,
        log: &mut dyn SignalLog,
        stats: &mut PropagationStats,
    ) {
        let Some(n) = grid.get(node) else {
            return;
        };
        if !n.alive || !n.ready {
            return;
        }
        let rule = EventRule::of(n.kind);
        let delivered = if n.reads < rule.required_reads && n.writes < MAX_WRITES {
            input
        } else if rule.required_reads == 0 && n.writes < MAX_WRITES {
            None
        } else {
            return;
        };

        // Only the root's own callback is popped from an empty stack.
        let origin = self.stack.is_empty();
        stats.firings += 1;
        let outcome = event::fire(grid, node, delivered, log);

        // Pushed first so it runs after everything this firing triggers.
        self.stack.push(Task::Finalize { node });
        match outcome {
            Outcome::Quiet => {}
            Outcome::Broadcast => {
                if grid[node].ready {
                    self.stack.push(Task::Broadcast {
                        node,
                        input: delivered,
                        targets: grid.alive_neighbours(node),
                        next: 0,
                        origin,
                    });
                }
            }
            Outcome::Deliver(out) => {
                stats.deliveries += 1;
                if origin {
                    stats.notified += 1;
                }
                self.stack.push(Task::Callback {
                    node: out,
                    input: Some(node),
                });
            }
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn broadcast_step(
        &mut self,
        grid: &mut NodeGrid,
        node: NodeId,
        input: Option<NodeId>,
        targets: Neighbours,
        mut next: usize,
        origin: bool,
        stats: &mut PropagationStats,
    ) {
        while let Some(&target) = targets.get(next) {
            next += 1;
            if Some(target) == input {
                continue;
            }
            if grid[node].writes >= MAX_WRITES {
                return;
            }
            grid[node].count_write();
            if let Some(hook) = EventRule::of(grid[node].kind).hook {
                event::apply_hook(grid, hook, node, target);
            }
            stats.deliveries += 1;
            if origin {
                stats.notified += 1;
            }
            self.stack.push(Task::Broadcast {
                node,
                input,
                targets,
                next,
                origin,
            });
            self.stack.push(Task::Callback {
                node: target,
                input: Some(node),
            });
            return;
        }
    }
}

fn finalize(grid: &mut NodeGrid, id: NodeId) {
    let node = &mut grid[id];
    if node.reads >= EventRule::of(node.kind).required_reads || node.writes >= MAX_WRITES {
        node.ready = false;
    }
}
