//! World positions: precise locations and integer block points.

/// A precise position inside a named world.
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    pub world: String,
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Location {
    pub fn new(world: impl Into<String>, x: f64, y: f64, z: f64) -> Self {
        Self {
            world: world.into(),
            x,
            y,
            z,
        }
    }

    /// The block this location falls in.
    #[must_use]
    pub fn block(&self) -> BlockVector {
        BlockVector::new(
            self.x.floor() as i32,
            self.y.floor() as i32,
            self.z.floor() as i32,
        )
    }
}

/// Integer block coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BlockVector {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl BlockVector {
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Component-wise minimum.
    #[must_use]
    pub fn min(self, other: Self) -> Self {
        Self::new(self.x.min(other.x), self.y.min(other.y), self.z.min(other.z))
    }

    /// Component-wise maximum.
    #[must_use]
    pub fn max(self, other: Self) -> Self {
        Self::new(self.x.max(other.x), self.y.max(other.y), self.z.max(other.z))
    }

    #[must_use]
    pub const fn to_2d(self) -> BlockVector2 {
        BlockVector2::new(self.x, self.z)
    }
}

/// A block column (x, z) used by polygon outlines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BlockVector2 {
    pub x: i32,
    pub z: i32,
}

impl BlockVector2 {
    pub const fn new(x: i32, z: i32) -> Self {
        Self { x, z }
    }
}
