//! Built-in sand and wall demo catalog
//!
//! The engine itself is catalog-agnostic; this module supplies the sample
//! ten-tile beach set consumed by the binary and the test suite: open sand,
//! solid wall, four wall edges, and four wall corners.

use crate::spatial::tiles::{Direction, SocketTile};

/// Edge descriptor for the demo tiles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DemoSocket {
    /// Open sand edge
    Sand,
    /// Solid wall edge
    Wall,
}

/// One tile of the demo beach set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DemoTile {
    /// Short display name
    pub name: &'static str,
    /// Single-character glyph for terminal output
    pub glyph: char,
    /// RGBA fill colour for image export
    pub color: [u8; 4],
    /// Sockets in Top, Left, Bottom, Right order
    pub sockets: [DemoSocket; 4],
}

impl SocketTile for DemoTile {
    type Socket = DemoSocket;

    fn socket(&self, direction: Direction) -> DemoSocket {
        let [top, left, bottom, right] = self.sockets;
        match direction {
            Direction::Top => top,
            Direction::Left => left,
            Direction::Bottom => bottom,
            Direction::Right => right,
        }
    }
}

const S: DemoSocket = DemoSocket::Sand;
const W: DemoSocket = DemoSocket::Wall;

const SAND: DemoTile = DemoTile {
    name: "sand",
    glyph: '.',
    color: [237, 201, 175, 255],
    sockets: [S, S, S, S],
};

/// The ten-tile sand and wall catalog, in stable id order
pub fn demo_tiles() -> Vec<DemoTile> {
    vec![
        SAND,
        DemoTile {
            name: "wall",
            glyph: '#',
            color: [90, 77, 65, 255],
            sockets: [W, W, W, W],
        },
        DemoTile {
            name: "wall_top",
            glyph: '^',
            color: [140, 120, 100, 255],
            sockets: [W, S, S, S],
        },
        DemoTile {
            name: "wall_left",
            glyph: '<',
            color: [140, 120, 100, 255],
            sockets: [S, W, S, S],
        },
        DemoTile {
            name: "wall_bottom",
            glyph: 'v',
            color: [140, 120, 100, 255],
            sockets: [S, S, W, S],
        },
        DemoTile {
            name: "wall_right",
            glyph: '>',
            color: [140, 120, 100, 255],
            sockets: [S, S, S, W],
        },
        DemoTile {
            name: "corner_tl",
            glyph: 'F',
            color: [115, 98, 82, 255],
            sockets: [W, W, S, S],
        },
        DemoTile {
            name: "corner_tr",
            glyph: '7',
            color: [115, 98, 82, 255],
            sockets: [W, S, S, W],
        },
        DemoTile {
            name: "corner_bl",
            glyph: 'L',
            color: [115, 98, 82, 255],
            sockets: [S, W, W, S],
        },
        DemoTile {
            name: "corner_br",
            glyph: 'J',
            color: [115, 98, 82, 255],
            sockets: [S, S, W, W],
        },
    ]
}

/// Fallback tile for unresolved cells and out-of-range lookups
pub const fn default_tile() -> DemoTile {
    SAND
}
