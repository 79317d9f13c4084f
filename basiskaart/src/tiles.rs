use serde::{Deserialize, Serialize};

/// Tile index.
#[derive(Debug, PartialEq, Eq, Copy, Clone, Hash, Serialize, Deserialize)]
pub struct TileIndex {
    /// X index.
    pub x: i32,
    /// Y index.
    pub y: i32,
    /// Z index.
    pub z: u32,
}

impl TileIndex {
    /// Create a new index instance.
    pub fn new(x: i32, y: i32, z: u32) -> Self {
        Self { x, y, z }
    }

    /// Y index counted from the bottom of the z-level instead of the top.
    ///
    /// TMS-style services address tile rows this way; URL templates select it
    /// with the `{-y}` placeholder.
    pub fn flipped_y(&self) -> i32 {
        (1 << self.z) - 1 - self.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flipped_y_counts_from_bottom() {
        assert_eq!(TileIndex::new(0, 0, 0).flipped_y(), 0);
        assert_eq!(TileIndex::new(3, 0, 2).flipped_y(), 3);
        assert_eq!(TileIndex::new(3, 3, 2).flipped_y(), 0);
        assert_eq!(TileIndex::new(531, 320, 13).flipped_y(), 8191 - 320);
    }
}
