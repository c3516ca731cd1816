//! Fixed-size node grid with 4-connected neighbourhood.

use std::ops::{Index, IndexMut};

use signal_core::{Node, NodeId, MAX_NEIGHBOURS};
use smallvec::SmallVec;

use crate::direction::Direction;
use crate::error::GridError;
use crate::layout::CellLayout;

/// Alive neighbours of a node, in broadcast order.
pub type Neighbours = SmallVec<[NodeId; MAX_NEIGHBOURS]>;

/// A `width x height` lattice of nodes, stored row-major by id.
///
/// Node `id` sits at `(id % width, id / width)`. Edges absorb: cells on
/// the border simply have fewer neighbours, and nothing wraps.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NodeGrid {
    width: u32,
    height: u32,
    layout: CellLayout,
    nodes: Vec<Node>,
}

impl NodeGrid {
    /// Maximum size of either dimension: layout coordinates use `i32`.
    pub const MAX_DIM: u32 = i32::MAX as u32;

    /// Create a grid of dead, kind-none nodes.
    ///
    /// Returns `Err(GridError::EmptyGrid)` if either dimension is 0, or
    /// `Err(GridError::DimensionTooLarge)` if a dimension exceeds
    /// [`MAX_DIM`](Self::MAX_DIM) or the cell count does not fit a `u32` id.
    ///
    /// # Examples
    ///
    /// ```
    /// use signal_grid::{CellLayout, NodeGrid};
    ///
    /// let grid = NodeGrid::new(4, 3, CellLayout::default()).unwrap();
    /// assert_eq!(grid.len(), 12);
    /// assert!(grid.nodes().iter().all(|n| !n.alive));
    /// ```
    pub fn new(width: u32, height: u32, layout: CellLayout) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::EmptyGrid);
        }
        for (name, value) in [("width", width), ("height", height)] {
            if value > Self::MAX_DIM {
                return Err(GridError::DimensionTooLarge {
                    name,
                    value: u64::from(value),
                    max: u64::from(Self::MAX_DIM),
                });
            }
        }
        let cells = u64::from(width) * u64::from(height);
        if cells > u64::from(u32::MAX) {
            return Err(GridError::DimensionTooLarge {
                name: "cells",
                value: cells,
                max: u64::from(u32::MAX),
            });
        }

        let mut nodes = Vec::with_capacity(cells as usize);
        for y in 0..height {
            for x in 0..width {
                nodes.push(Node::new(NodeId(y * width + x), layout.rect(x, y)));
            }
        }
        Ok(Self {
            width,
            height,
            layout,
            nodes,
        })
    }

    /// Number of columns.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Cell layout used for node rectangles and hit testing.
    pub fn layout(&self) -> CellLayout {
        self.layout
    }

    /// Total number of cells.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always returns `false`: construction rejects empty grids.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// All nodes in id order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Mutable access to all nodes in id order.
    pub fn nodes_mut(&mut self) -> &mut [Node] {
        &mut self.nodes
    }

    /// The node with `id`, if it exists.
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    /// Mutable access to the node with `id`, if it exists.
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.index())
    }

    /// `(x, y)` of a node id. The id is not range-checked.
    pub fn position_of(&self, id: NodeId) -> (u32, u32) {
        (id.0 % self.width, id.0 / self.width)
    }

    /// Id of the cell at `(x, y)`, or `None` if out of range.
    ///
    /// Takes signed coordinates so that `x - 1` at the left border is a
    /// plain miss rather than a wrap into the previous row.
    pub fn id_at(&self, x: i64, y: i64) -> Option<NodeId> {
        if x < 0 || y < 0 || x >= i64::from(self.width) || y >= i64::from(self.height) {
            return None;
        }
        Some(NodeId(y as u32 * self.width + x as u32))
    }

    /// The node at `(x, y)`, alive or not, or `None` if out of range.
    pub fn node_at(&self, x: i64, y: i64) -> Option<&Node> {
        self.id_at(x, y).and_then(|id| self.get(id))
    }

    /// The alive neighbour of `id` one step in `dir`, if any.
    pub fn neighbour(&self, id: NodeId, dir: Direction) -> Option<NodeId> {
        let (x, y) = self.position_of(id);
        let (dx, dy) = dir.offset();
        let n = self.id_at(i64::from(x) + dx, i64::from(y) + dy)?;
        self.nodes[n.index()].alive.then_some(n)
    }

    /// Alive neighbours of `id` in broadcast order: left, right, up, down.
    pub fn alive_neighbours(&self, id: NodeId) -> Neighbours {
        Direction::ALL
            .iter()
            .filter_map(|&dir| self.neighbour(id, dir))
            .collect()
    }

    /// The node whose rectangle contains the layout-space point, if any.
    pub fn hit_test(&self, px: i32, py: i32) -> Option<NodeId> {
        let (bx, by) = self.layout.cell_band(px, py);
        let id = self.id_at(bx, by)?;
        self.nodes[id.index()].rect.contains(px, py).then_some(id)
    }

    /// Return every node to the dead, kind-none state, keeping ids and layout.
    pub fn clear_all(&mut self) {
        for node in &mut self.nodes {
            node.clear();
            node.alive = false;
        }
    }

    /// Replace every node at once, e.g. from a loaded save.
    ///
    /// The replacement must have exactly one node per cell, each carrying
    /// the id of its slot. On error the grid is left untouched.
    pub fn replace_nodes(&mut self, nodes: Vec<Node>) -> Result<(), GridError> {
        if nodes.len() != self.nodes.len() {
            return Err(GridError::NodeCountMismatch {
                expected: self.nodes.len(),
                found: nodes.len(),
            });
        }
        if let Some((slot, node)) = nodes
            .iter()
            .enumerate()
            .find(|(slot, node)| node.id().index() != *slot)
        {
            return Err(GridError::IdMismatch {
                slot,
                found: node.id(),
            });
        }
        self.nodes = nodes;
        Ok(())
    }
}

impl Index<NodeId> for NodeGrid {
    type Output = Node;

    fn index(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }
}

impl IndexMut<NodeId> for NodeGrid {
    fn index_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.index()]
    }
}
