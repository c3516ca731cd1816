//! ASCII grid fixtures.
//!
//! One character per cell, one line per row. Blank lines and leading or
//! trailing whitespace are ignored, so fixtures can be indented inside
//! raw string literals.
//!
//! | glyph | kind | glyph | kind |
//! |-------|------|-------|------|
//! | `.` or space | dead | `I` | increment |
//! | `N` | none | `!` | not |
//! | `C` | clock | `K` | copy |
//! | `+` | add | `=` | equals |
//! | `B` | bus | `>` | copy left to right |
//! | `&` | and | `<` | copy right to left |
//! | `P` | print | `v` | copy up to down |
//! |  |  | `^` | copy down to up |

use signal_core::{NodeId, NodeKind};
use signal_engine::{EngineConfig, SignalWorld};
use signal_grid::{CellLayout, NodeGrid};

use crate::RecordingLog;

/// The kind for a fixture glyph. `Some(None)` is a dead cell; `None`
/// means the glyph is unknown.
pub fn glyph_kind(glyph: char) -> Option<Option<NodeKind>> {
    let kind = match glyph {
        '.' | ' ' => return Some(None),
        'N' => NodeKind::None,
        'C' => NodeKind::Clock,
        '+' => NodeKind::Add,
        'B' => NodeKind::Bus,
        '&' => NodeKind::And,
        'P' => NodeKind::Print,
        'I' => NodeKind::Increment,
        '!' => NodeKind::Not,
        'K' => NodeKind::Copy,
        '=' => NodeKind::Equals,
        '>' => NodeKind::CopyLeftRight,
        '<' => NodeKind::CopyRightLeft,
        'v' => NodeKind::CopyUpDown,
        '^' => NodeKind::CopyDownUp,
        _ => return None,
    };
    Some(Some(kind))
}

fn rows(art: &str) -> Vec<Vec<char>> {
    art.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(|l| l.chars().collect())
        .collect()
}

/// Parse a fixture into a grid with the default layout.
///
/// # Panics
///
/// Panics on an empty fixture, ragged rows or an unknown glyph.
pub fn grid_from_ascii(art: &str) -> NodeGrid {
    let rows = rows(art);
    let height = rows.len() as u32;
    let width = rows.first().map_or(0, Vec::len) as u32;
    assert!(
        rows.iter().all(|r| r.len() as u32 == width),
        "ragged fixture rows"
    );
    let mut grid = NodeGrid::new(width, height, CellLayout::default()).expect("fixture grid");
    for (y, row) in rows.iter().enumerate() {
        for (x, &glyph) in row.iter().enumerate() {
            let kind = glyph_kind(glyph).unwrap_or_else(|| panic!("unknown glyph {glyph:?}"));
            if let Some(kind) = kind {
                grid[NodeId(y as u32 * width + x as u32)].init(kind);
            }
        }
    }
    grid
}

/// Parse a fixture into a world that records its log.
pub fn world_from_ascii(art: &str) -> SignalWorld<RecordingLog> {
    let grid = grid_from_ascii(art);
    let config = EngineConfig {
        width: grid.width(),
        height: grid.height(),
        ..EngineConfig::default()
    };
    let mut world = SignalWorld::with_log(config, RecordingLog::new()).expect("fixture world");
    *world.grid_mut() = grid;
    world
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_indented_fixture() {
        let g = grid_from_ascii(
            r"
            C I
            . P
            ",
        );
        assert_eq!((g.width(), g.height()), (3, 2));
        assert_eq!(g[NodeId(0)].kind, NodeKind::Clock);
        assert!(!g[NodeId(1)].alive);
        assert_eq!(g[NodeId(5)].kind, NodeKind::Print);
        assert!(!g[NodeId(3)].alive);
    }

    #[test]
    #[should_panic(expected = "ragged")]
    fn ragged_rows_panic() {
        grid_from_ascii("CC\nC");
    }

    #[test]
    fn every_kind_has_a_glyph() {
        let glyphs = "NC+B&PI!K=><v^";
        let kinds: Vec<NodeKind> = glyphs
            .chars()
            .map(|c| glyph_kind(c).unwrap().unwrap())
            .collect();
        assert_eq!(kinds, NodeKind::ALL);
    }
}
