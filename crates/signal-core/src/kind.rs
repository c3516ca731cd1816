//! The closed node-kind taxonomy.

use std::fmt;

use crate::error::KindError;

/// The type of a grid node.
///
/// The discriminant doubles as the stable `u8` tag used by the save
/// format and as the position in the editor's kind-cycling order, so
/// variants must only ever be appended.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum NodeKind {
    /// Empty cell behaviour: absorbs one delivery per beat.
    #[default]
    None = 0,
    /// Source node, fired by the beat clock.
    Clock = 1,
    /// Binary accumulator.
    Add = 2,
    /// Relay: forwards a delivery without changing its own value.
    Bus = 3,
    /// Binary logical AND gate.
    And = 4,
    /// Sink that logs the delivered value.
    Print = 5,
    /// Unary counter: adds one per delivery.
    Increment = 6,
    /// Unary logical negation.
    Not = 7,
    /// Unary copy that also stages its value into every neighbour.
    Copy = 8,
    /// Binary equality gate.
    Equals = 9,
    /// Directional copy, left to right.
    CopyLeftRight = 10,
    /// Directional copy, right to left.
    CopyRightLeft = 11,
    /// Directional copy, top to bottom.
    CopyUpDown = 12,
    /// Directional copy, bottom to top.
    CopyDownUp = 13,
}

impl NodeKind {
    /// Every kind, in tag order.
    pub const ALL: [NodeKind; 14] = [
        NodeKind::None,
        NodeKind::Clock,
        NodeKind::Add,
        NodeKind::Bus,
        NodeKind::And,
        NodeKind::Print,
        NodeKind::Increment,
        NodeKind::Not,
        NodeKind::Copy,
        NodeKind::Equals,
        NodeKind::CopyLeftRight,
        NodeKind::CopyRightLeft,
        NodeKind::CopyUpDown,
        NodeKind::CopyDownUp,
    ];

    /// Number of distinct kinds.
    pub const COUNT: usize = Self::ALL.len();

    /// Short display name, as shown in the info panel and print log.
    pub fn name(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Clock => "clock",
            Self::Add => "add",
            Self::Bus => "bus",
            Self::And => "and",
            Self::Print => "print",
            Self::Increment => "incr",
            Self::Not => "not",
            Self::Copy => "copy",
            Self::Equals => "equals",
            Self::CopyLeftRight => "copy_lr",
            Self::CopyRightLeft => "copy_rl",
            Self::CopyUpDown => "copy_ud",
            Self::CopyDownUp => "copy_du",
        }
    }

    /// Stable save-format tag.
    #[inline]
    pub fn tag(self) -> u8 {
        self as u8
    }

    /// The following kind in cycling order, wrapping to [`NodeKind::None`].
    pub fn next(self) -> Self {
        Self::ALL[(self.tag() as usize + 1) % Self::COUNT]
    }

    /// The preceding kind in cycling order, wrapping to the last kind.
    pub fn prev(self) -> Self {
        Self::ALL[(self.tag() as usize + Self::COUNT - 1) % Self::COUNT]
    }
}

impl TryFrom<u8> for NodeKind {
    type Error = KindError;

    fn try_from(tag: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .get(tag as usize)
            .copied()
            .ok_or(KindError::UnknownTag { tag })
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn all_is_in_tag_order() {
        for (i, kind) in NodeKind::ALL.iter().enumerate() {
            assert_eq!(kind.tag() as usize, i);
        }
    }

    #[test]
    fn cycling_wraps_both_ways() {
        assert_eq!(NodeKind::None.prev(), NodeKind::CopyDownUp);
        assert_eq!(NodeKind::CopyDownUp.next(), NodeKind::None);
        assert_eq!(NodeKind::Clock.next(), NodeKind::Add);
        assert_eq!(NodeKind::Add.prev(), NodeKind::Clock);
    }

    #[test]
    fn unknown_tag_is_rejected() {
        assert_eq!(
            NodeKind::try_from(14),
            Err(KindError::UnknownTag { tag: 14 })
        );
        assert_eq!(NodeKind::try_from(255).unwrap_err().to_string(), "unknown node kind tag 255");
    }

    #[test]
    fn names_are_unique() {
        let mut names: Vec<_> = NodeKind::ALL.iter().map(|k| k.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), NodeKind::COUNT);
    }

    proptest! {
        #[test]
        fn tag_roundtrips(tag in 0u8..14) {
            let kind = NodeKind::try_from(tag).unwrap();
            prop_assert_eq!(kind.tag(), tag);
        }

        #[test]
        fn next_then_prev_is_identity(tag in 0u8..14) {
            let kind = NodeKind::try_from(tag).unwrap();
            prop_assert_eq!(kind.next().prev(), kind);
            prop_assert_eq!(kind.prev().next(), kind);
        }
    }
}
