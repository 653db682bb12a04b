//! Region shapes: cuboids, extruded polygons and the shapeless global region.
//!
//! Decoupled from region metadata so containment and extrema can be tested on their own.

use crate::location::{BlockVector, BlockVector2};

/// Which end of an axis an extremum query asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    Min,
    Max,
}

/// One of the three block axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

/// The shape a region occupies.
#[derive(Debug, Clone, PartialEq)]
pub enum Selection {
    /// Axis-aligned box, inclusive on both corners.
    Cuboid { min: BlockVector, max: BlockVector },
    /// Polygon outline on the x/z plane, extruded from `min_y` to `max_y`.
    Polygonal {
        points: Vec<BlockVector2>,
        min_y: i32,
        max_y: i32,
    },
    /// The world-wide region. It has no geometry.
    Global,
}

impl Selection {
    /// Builds a cuboid from two arbitrary corners, sorting min/max per axis.
    #[must_use]
    pub fn cuboid(pos1: BlockVector, pos2: BlockVector) -> Self {
        Self::Cuboid {
            min: pos1.min(pos2),
            max: pos1.max(pos2),
        }
    }

    #[must_use]
    pub fn polygonal(points: Vec<BlockVector2>, y1: i32, y2: i32) -> Self {
        Self::Polygonal {
            points,
            min_y: y1.min(y2),
            max_y: y1.max(y2),
        }
    }

    /// Returns true if the block is inside this shape (boundary included).
    #[must_use]
    pub fn contains(&self, pos: BlockVector) -> bool {
        match self {
            Self::Cuboid { min, max } => {
                pos.x >= min.x
                    && pos.x <= max.x
                    && pos.y >= min.y
                    && pos.y <= max.y
                    && pos.z >= min.z
                    && pos.z <= max.z
            }
            Self::Polygonal {
                points,
                min_y,
                max_y,
            } => pos.y >= *min_y && pos.y <= *max_y && polygon_contains(points, pos.to_2d()),
            Self::Global => false,
        }
    }

    /// Geometric center of the shape, or `None` for shapes without geometry.
    #[must_use]
    pub fn center(&self) -> Option<(f64, f64, f64)> {
        match self {
            Self::Cuboid { min, max } => Some((
                (f64::from(min.x) + f64::from(max.x)) / 2.0,
                (f64::from(min.y) + f64::from(max.y)) / 2.0,
                (f64::from(min.z) + f64::from(max.z)) / 2.0,
            )),
            Self::Polygonal {
                points,
                min_y,
                max_y,
            } => {
                let (x, z) = polygon_centroid(points)?;
                Some((x, (f64::from(*min_y) + f64::from(*max_y)) / 2.0, z))
            }
            Self::Global => None,
        }
    }

    /// Extremum of the shape along one axis.
    ///
    /// Polygons report x/z from their first vertex for both bounds. Only y is a
    /// real extent there. Placeholders built on top of this rely on that.
    #[must_use]
    pub fn extremum(&self, bound: Bound, axis: Axis) -> Option<i32> {
        match self {
            Self::Cuboid { min, max } => {
                let corner = match bound {
                    Bound::Min => min,
                    Bound::Max => max,
                };
                Some(match axis {
                    Axis::X => corner.x,
                    Axis::Y => corner.y,
                    Axis::Z => corner.z,
                })
            }
            Self::Polygonal {
                points,
                min_y,
                max_y,
            } => match axis {
                Axis::X => points.first().map(|p| p.x),
                Axis::Z => points.first().map(|p| p.z),
                Axis::Y => Some(match bound {
                    Bound::Min => *min_y,
                    Bound::Max => *max_y,
                }),
            },
            Self::Global => None,
        }
    }
}

/// Crossing test with vertices and edges counted as inside.
fn polygon_contains(points: &[BlockVector2], target: BlockVector2) -> bool {
    if points.len() < 3 {
        return false;
    }
    let (tx, tz) = (i64::from(target.x), i64::from(target.z));
    let mut inside = false;
    let mut prev = points[points.len() - 1];
    for &cur in points {
        if cur == target {
            return true;
        }
        let (a, b) = if cur.x > prev.x { (prev, cur) } else { (cur, prev) };
        let (x1, z1, x2, z2) = (
            i64::from(a.x),
            i64::from(a.z),
            i64::from(b.x),
            i64::from(b.z),
        );
        if x1 <= tx && tx <= x2 {
            let cross = (tz - z1) * (x2 - x1) - (z2 - z1) * (tx - x1);
            if cross == 0 {
                if (z1 <= tz) == (tz <= z2) {
                    return true;
                }
            } else if cross < 0 && x1 != tx {
                inside = !inside;
            }
        }
        prev = cur;
    }
    inside
}

/// Area-weighted centroid of the outline, or the vertex mean if it has no area.
fn polygon_centroid(points: &[BlockVector2]) -> Option<(f64, f64)> {
    if points.is_empty() {
        return None;
    }
    let mut area = 0.0;
    let mut cx = 0.0;
    let mut cz = 0.0;
    for (i, p) in points.iter().enumerate() {
        let q = points[(i + 1) % points.len()];
        let (x1, z1) = (f64::from(p.x), f64::from(p.z));
        let (x2, z2) = (f64::from(q.x), f64::from(q.z));
        let cross = x1 * z2 - x2 * z1;
        area += cross;
        cx += (x1 + x2) * cross;
        cz += (z1 + z2) * cross;
    }
    if area == 0.0 {
        let n = points.len() as f64;
        let sx: f64 = points.iter().map(|p| f64::from(p.x)).sum();
        let sz: f64 = points.iter().map(|p| f64::from(p.z)).sum();
        return Some((sx / n, sz / n));
    }
    // cx / (6 * (area / 2))
    Some((cx / (3.0 * area), cz / (3.0 * area)))
}
