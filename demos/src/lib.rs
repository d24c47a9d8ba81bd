//! Shared fixtures for the navbox demos.
//!
//! Stands in for the external mesh loader: a small hand-drawn floor plan
//! plus a helper that derives adjacency from touching edges.

use std::fmt::{self, Write};

use navbox_core::{Mesh, MeshError, Point, Region};
use navbox_paths::PathResult;
use rand::Rng;

/// Two rooms joined by a narrow corridor, a hall leading north out of the
/// second room, and an island that nothing connects to.
pub const FLOOR_PLAN: [Region; 6] = [
    Region::new(0.0, 10.0, 0.0, 10.0),   // west room
    Region::new(10.0, 30.0, 4.0, 6.0),   // corridor
    Region::new(30.0, 40.0, 0.0, 10.0),  // east room
    Region::new(30.0, 40.0, 10.0, 14.0), // annex
    Region::new(34.0, 36.0, 14.0, 30.0), // north hall
    Region::new(50.0, 60.0, 0.0, 10.0),  // island
];

/// Build a mesh linking every pair of regions that share an edge of
/// positive length. Corner contact does not count.
pub fn link_touching(regions: &[Region]) -> Result<Mesh, MeshError> {
    let mut builder = Mesh::builder();
    for &r in regions {
        builder.add_region(r);
    }
    for (i, &a) in regions.iter().enumerate() {
        for &b in &regions[i + 1..] {
            let border = a.border(b);
            if border.is_valid() && (border.width() > 0.0 || border.height() > 0.0) {
                builder.connect(a, b);
            }
        }
    }
    builder.build()
}

pub fn floor_plan() -> Result<Mesh, MeshError> {
    link_touching(&FLOOR_PLAN)
}

/// A uniformly random point inside a uniformly random region.
pub fn random_point(rng: &mut impl Rng, mesh: &Mesh) -> Option<Point> {
    let regions = mesh.regions();
    if regions.is_empty() {
        return None;
    }
    let r = regions[rng.random_range(0..regions.len())];
    Some(Point::new(
        r.x_min + rng.random::<f64>() * r.width(),
        r.y_min + rng.random::<f64>() * r.height(),
    ))
}

/// Write a human-readable summary of one query to `out`.
pub fn describe(
    out: &mut impl Write,
    source: Point,
    dest: Point,
    result: &PathResult,
) -> fmt::Result {
    writeln!(out, "{source} -> {dest}")?;
    match result.route() {
        Ok(route) => {
            writeln!(
                out,
                "  {} regions, {} segments, length {:.3}",
                route.regions().len(),
                route.segments().len(),
                route.length()
            )?;
            for s in route.segments() {
                writeln!(out, "    {s}")?;
            }
        }
        Err(e) => writeln!(out, "  no path: {e}")?,
    }
    writeln!(out, "  explored {} regions", result.explored().len())
}
