//! User edit operations and the clipboard.

use signal_core::{Node, NodeId};

use crate::log::{SignalLog, INFO_TAG};
use crate::world::SignalWorld;

/// Direction of a kind change.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cycle {
    /// The next kind, wrapping after the last.
    Forward,
    /// The previous kind, wrapping before the first.
    Backward,
}

/// Edit context for one session.
///
/// The clipboard holds a full node record, but pasting only transfers
/// its kind and value; the target keeps its own id and rectangle.
#[derive(Clone, Debug, Default)]
pub struct Editor {
    clipboard: Option<Node>,
}

impl Editor {
    /// An editor with an empty clipboard.
    pub fn new() -> Self {
        Self::default()
    }

    /// The copied node, if any.
    pub fn clipboard(&self) -> Option<&Node> {
        self.clipboard.as_ref()
    }

    /// Copy `id` into the clipboard. Returns `false` if `id` is out of range.
    pub fn copy<L: SignalLog>(&mut self, world: &mut SignalWorld<L>, id: NodeId) -> bool {
        let Some(node) = world.grid().get(id) else {
            return false;
        };
        self.clipboard = Some(node.clone());
        world.log_mut().log(INFO_TAG, &format!("copied node {id}"));
        true
    }

    /// Copy `id`, then clear it and mark it dead.
    pub fn cut<L: SignalLog>(&mut self, world: &mut SignalWorld<L>, id: NodeId) -> bool {
        let Some(node) = world.grid_mut().get_mut(id) else {
            return false;
        };
        self.clipboard = Some(node.clone());
        node.clear();
        node.alive = false;
        world.log_mut().log(INFO_TAG, &format!("cut node {id}"));
        true
    }

    /// Paste the clipboard's kind and value onto `id`, reviving it.
    ///
    /// Does nothing if the clipboard is empty.
    pub fn paste<L: SignalLog>(&mut self, world: &mut SignalWorld<L>, id: NodeId) -> bool {
        let Some(src) = &self.clipboard else {
            return false;
        };
        let Some(node) = world.grid_mut().get_mut(id) else {
            return false;
        };
        node.copy_from(src);
        world
            .log_mut()
            .log(INFO_TAG, &format!("pasted node {}", src.id()));
        true
    }

    /// Reset `id` and switch it to the neighbouring kind. Revives it.
    pub fn cycle_kind<L: SignalLog>(
        &mut self,
        world: &mut SignalWorld<L>,
        id: NodeId,
        dir: Cycle,
    ) -> bool {
        let Some(node) = world.grid_mut().get_mut(id) else {
            return false;
        };
        node.reset();
        node.kind = match dir {
            Cycle::Forward => node.kind.next(),
            Cycle::Backward => node.kind.prev(),
        };
        true
    }

    /// Add `delta` to the value of `id`, wrapping.
    pub fn nudge_value<L: SignalLog>(
        &mut self,
        world: &mut SignalWorld<L>,
        id: NodeId,
        delta: i32,
    ) -> bool {
        let Some(node) = world.grid_mut().get_mut(id) else {
            return false;
        };
        node.value = node.value.wrapping_add_signed(delta);
        true
    }

    /// Re-initialise `id` in place, keeping its kind. Revives it.
    pub fn reset_node<L: SignalLog>(&mut self, world: &mut SignalWorld<L>, id: NodeId) -> bool {
        let Some(node) = world.grid_mut().get_mut(id) else {
            return false;
        };
        node.reset();
        true
    }
}
