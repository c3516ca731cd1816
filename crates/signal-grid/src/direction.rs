//! Orthogonal directions and their fixed iteration order.

/// One of the four orthogonal grid directions.
///
/// [`Direction::ALL`] is the broadcast order: left, right, up, down.
/// That order is observable (it decides which neighbour is notified
/// first), so it must never change.
///
/// # Examples
///
/// ```
/// use signal_grid::Direction;
///
/// assert_eq!(Direction::ALL[0], Direction::Left);
/// assert_eq!(Direction::Up.offset(), (0, -1));
/// assert_eq!(Direction::Right.opposite(), Direction::Left);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// `x - 1`.
    Left,
    /// `x + 1`.
    Right,
    /// `y - 1`.
    Up,
    /// `y + 1`.
    Down,
}

impl Direction {
    /// Broadcast order.
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    /// `(dx, dy)` step for this direction.
    pub fn offset(self) -> (i64, i64) {
        match self {
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
            Self::Up => (0, -1),
            Self::Down => (0, 1),
        }
    }

    /// The reverse direction.
    pub fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
            Self::Up => Self::Down,
            Self::Down => Self::Up,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets_cancel_with_opposite() {
        for d in Direction::ALL {
            let (dx, dy) = d.offset();
            let (ox, oy) = d.opposite().offset();
            assert_eq!((dx + ox, dy + oy), (0, 0));
            assert_eq!(d.opposite().opposite(), d);
        }
    }
}
