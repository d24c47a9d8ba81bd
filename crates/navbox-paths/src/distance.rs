use navbox_core::{Point, Region};

/// Euclidean (L2) distance between two points.
#[inline]
pub fn euclidean(a: Point, b: Point) -> f64 {
    a.distance(b)
}

/// Search distance between two regions.
///
/// Treats the leading `(x_min, x_max)` pair of each region's bound tuple as
/// a pseudo-point and measures the Euclidean distance between them. This is
/// not the geometric gap between the rectangles; it is the edge cost and
/// heuristic the search has always used, and routes depend on it.
#[inline]
pub fn region_distance(a: Region, b: Region) -> f64 {
    euclidean(Point::new(a.x_min, a.x_max), Point::new(b.x_min, b.x_max))
}
