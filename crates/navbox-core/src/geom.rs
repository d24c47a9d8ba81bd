//! Geometry primitives: [`Point`], [`Region`] and [`Segment`].
//!
//! Coordinates are `f64`. Regions are closed axis-aligned rectangles whose
//! identity is their coordinate tuple, so they can be used directly as map
//! keys by the search and refinement code.

use std::fmt;
use std::hash::{Hash, Hasher};

// ---------------------------------------------------------------------------
// Point
// ---------------------------------------------------------------------------

/// A 2D point with real coordinates.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Create a new point.
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    #[inline]
    pub fn distance(self, other: Point) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Clamp `value` into `[low, high]`.
///
/// Applies the lower bound first, then the upper bound, so an inverted
/// interval yields `high` instead of panicking like [`f64::clamp`].
#[inline]
pub fn clamp(value: f64, low: f64, high: f64) -> f64 {
    value.max(low).min(high)
}

// ---------------------------------------------------------------------------
// Region
// ---------------------------------------------------------------------------

/// A closed axis-aligned rectangle `[x_min, x_max] × [y_min, y_max]`.
///
/// Equality and hashing are by coordinate value. `-0.0` and `0.0` are
/// treated as the same coordinate.
#[derive(Copy, Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Region {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

#[inline]
fn coord_bits(v: f64) -> u64 {
    if v == 0.0 { 0 } else { v.to_bits() }
}

impl Region {
    /// Create a region from its bounds, in `(x_min, x_max, y_min, y_max)`
    /// order.
    #[inline]
    pub const fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Self {
        Self {
            x_min,
            x_max,
            y_min,
            y_max,
        }
    }

    #[inline]
    pub fn width(self) -> f64 {
        self.x_max - self.x_min
    }

    #[inline]
    pub fn height(self) -> f64 {
        self.y_max - self.y_min
    }

    /// Whether all bounds are finite and neither axis is inverted.
    ///
    /// Degenerate (zero-width or zero-height) regions are valid; they are
    /// what [`border`](Self::border) returns for edge-sharing neighbours.
    #[inline]
    pub fn is_valid(self) -> bool {
        self.x_min.is_finite()
            && self.x_max.is_finite()
            && self.y_min.is_finite()
            && self.y_max.is_finite()
            && self.x_min <= self.x_max
            && self.y_min <= self.y_max
    }

    /// Whether the region has a strictly positive area.
    #[inline]
    pub fn has_area(self) -> bool {
        self.x_min < self.x_max && self.y_min < self.y_max
    }

    /// Closed-bounds containment: points on the boundary are inside.
    #[inline]
    pub fn contains(self, p: Point) -> bool {
        self.x_min <= p.x && p.x <= self.x_max && self.y_min <= p.y && p.y <= self.y_max
    }

    /// The overlap rectangle of two regions.
    ///
    /// For regions sharing an edge this is the shared segment (a
    /// zero-width or zero-height region). For disjoint regions the result
    /// has inverted bounds and [`is_valid`](Self::is_valid) is false.
    #[inline]
    pub fn border(self, other: Region) -> Region {
        Region {
            x_min: self.x_min.max(other.x_min),
            x_max: self.x_max.min(other.x_max),
            y_min: self.y_min.max(other.y_min),
            y_max: self.y_max.min(other.y_max),
        }
    }

    /// Whether the two regions touch or overlap.
    #[inline]
    pub fn touches(self, other: Region) -> bool {
        self.border(other).is_valid()
    }

    /// Whether the two regions share interior area.
    #[inline]
    pub fn overlaps(self, other: Region) -> bool {
        self.border(other).has_area()
    }

    /// Clamp `p` into the region independently per axis.
    #[inline]
    pub fn clamp_point(self, p: Point) -> Point {
        Point::new(
            clamp(p.x, self.x_min, self.x_max),
            clamp(p.y, self.y_min, self.y_max),
        )
    }

    #[inline]
    fn key(self) -> [u64; 4] {
        [
            coord_bits(self.x_min),
            coord_bits(self.x_max),
            coord_bits(self.y_min),
            coord_bits(self.y_max),
        ]
    }
}

impl PartialEq for Region {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Region {}

impl Hash for Region {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}, {}]x[{}, {}]",
            self.x_min, self.x_max, self.y_min, self.y_max
        )
    }
}

// ---------------------------------------------------------------------------
// Segment
// ---------------------------------------------------------------------------

/// A straight line segment of a path.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Segment {
    pub start: Point,
    pub end: Point,
}

impl Segment {
    #[inline]
    pub const fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    #[inline]
    pub fn length(self) -> f64 {
        self.start.distance(self.end)
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.start, self.end)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn region_round_trip() {
        let r = Region::new(0.5, 1.5, -2.0, 4.0);
        let json = serde_json::to_string(&r).unwrap();
        let back: Region = serde_json::from_str(&json).unwrap();
        assert_eq!(r, back);
    }
}
