//! The per-cell node record.

use crate::color::Color;
use crate::id::NodeId;
use crate::kind::NodeKind;

/// A fixed layout rectangle in grid-layout space.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rect {
    /// Left edge.
    pub x: i32,
    /// Top edge.
    pub y: i32,
    /// Width.
    pub w: u32,
    /// Height.
    pub h: u32,
}

impl Rect {
    /// Construct a rectangle.
    pub const fn new(x: i32, y: i32, w: u32, h: u32) -> Self {
        Self { x, y, w, h }
    }

    /// Whether the point lies inside the rectangle (right/bottom edges exclusive).
    pub fn contains(&self, px: i32, py: i32) -> bool {
        let dx = i64::from(px) - i64::from(self.x);
        let dy = i64::from(py) - i64::from(self.y);
        dx >= 0 && dy >= 0 && dx < i64::from(self.w) && dy < i64::from(self.h)
    }
}

/// One cell of the grid.
///
/// Created in bulk at grid construction (kind [`NodeKind::None`], dead)
/// and never destroyed; edits mutate it in place. `reads`, `writes` and
/// `ready` bound one beat of propagation and are replenished only by
/// the beat reset.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node {
    id: NodeId,
    /// Layout rectangle, fixed at grid construction.
    pub rect: Rect,
    /// The node's kind.
    pub kind: NodeKind,
    /// Integer payload. Arithmetic on it wraps.
    pub value: u32,
    /// Whether the cell takes part in simulation.
    pub alive: bool,
    /// Counted input deliveries this beat.
    pub reads: u16,
    /// Counted output deliveries this beat.
    pub writes: u16,
    /// Whether the node may still react this beat.
    pub ready: bool,
    /// Current presentation colour.
    pub color: Color,
    /// Colour the renderer eases towards.
    pub target_color: Color,
}

impl Node {
    /// A dead, kind-none node occupying `rect`.
    pub fn new(id: NodeId, rect: Rect) -> Self {
        Self {
            id,
            rect,
            kind: NodeKind::None,
            value: 0,
            alive: false,
            reads: 0,
            writes: 0,
            ready: true,
            color: Color::BLACK,
            target_color: Color::BLACK,
        }
    }

    /// The node's fixed identifier.
    #[inline]
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Re-initialise as a live node of `kind`: zero value and counters,
    /// ready, idle colours.
    pub fn init(&mut self, kind: NodeKind) {
        self.kind = kind;
        self.value = 0;
        self.alive = true;
        self.reads = 0;
        self.writes = 0;
        self.ready = true;
        self.color = Color::BLACK;
        self.target_color = Color::BLACK;
    }

    /// Re-initialise in place, keeping the kind. Revives a dead node.
    pub fn reset(&mut self) {
        self.init(self.kind);
    }

    /// Re-initialise as kind none.
    pub fn clear(&mut self) {
        self.init(NodeKind::None);
    }

    /// Reset, then take `src`'s kind and value. Identity and layout are kept.
    pub fn copy_from(&mut self, src: &Node) {
        self.reset();
        self.kind = src.kind;
        self.value = src.value;
    }

    /// Replenish the per-beat budget.
    pub fn replenish(&mut self) {
        self.ready = true;
        self.reads = 0;
        self.writes = 0;
    }

    /// Count one input delivery. Returns the new read count.
    pub fn count_read(&mut self) -> u16 {
        self.reads += 1;
        self.color = Color::GREEN;
        self.reads
    }

    /// Count one output delivery. Returns the new write count.
    pub fn count_write(&mut self) -> u16 {
        self.writes += 1;
        self.color = Color::RED;
        self.writes
    }
}
