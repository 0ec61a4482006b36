//! Level image palette. Colours are packed as `r<<24 | g<<16 | b<<8 | a`.

/// Pack RGBA channels into one integer for O(1) comparison.
pub const fn pack_rgba(r: u8, g: u8, b: u8, a: u8) -> u32 {
    (r as u32) << 24 | (g as u32) << 16 | (b as u32) << 8 | a as u32
}

/// Split a packed colour back into `[r, g, b, a]`.
pub const fn unpack_rgba(color: u32) -> [u8; 4] {
    [
        (color >> 24) as u8,
        (color >> 16) as u8,
        (color >> 8) as u8,
        color as u8,
    ]
}

const EMPTY: u32 = pack_rgba(0, 0, 0, 0xff);
const GROUND: u32 = pack_rgba(0, 255, 0, 0xff);
const PLAYER_SPAWN: u32 = pack_rgba(255, 255, 255, 0xff);
const FIRE: u32 = pack_rgba(255, 0, 255, 0xff);
const ICE: u32 = pack_rgba(255, 255, 0, 0xff);

/// What a level pixel stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockType {
    /// Black.
    Empty,
    /// Green.
    Ground,
    /// White.
    PlayerSpawn,
    /// Magenta.
    Fire,
    /// Yellow.
    Ice,
}

impl BlockType {
    pub const ALL: [BlockType; 5] = [
        BlockType::Empty,
        BlockType::Ground,
        BlockType::PlayerSpawn,
        BlockType::Fire,
        BlockType::Ice,
    ];

    /// Packed colour of this block in the level image.
    pub const fn color(self) -> u32 {
        match self {
            BlockType::Empty => EMPTY,
            BlockType::Ground => GROUND,
            BlockType::PlayerSpawn => PLAYER_SPAWN,
            BlockType::Fire => FIRE,
            BlockType::Ice => ICE,
        }
    }

    /// Exact-match lookup. `None` is an unknown colour.
    pub const fn from_packed(color: u32) -> Option<Self> {
        match color {
            EMPTY => Some(BlockType::Empty),
            GROUND => Some(BlockType::Ground),
            PLAYER_SPAWN => Some(BlockType::PlayerSpawn),
            FIRE => Some(BlockType::Fire),
            ICE => Some(BlockType::Ice),
            _ => None,
        }
    }

    /// Blocks that merge into terrain strips.
    pub fn is_terrain(self) -> bool {
        matches!(self, BlockType::Ground)
    }
}
