//! Mesh fixtures and route checks shared by the unit tests.

use navbox_core::{Mesh, Point, Region};
use rand::Rng;

use crate::chain::ParentChain;
use crate::pathfinder::Route;

/// `n` unit squares in a row, each linked to the next.
pub(crate) fn corridor(n: usize) -> (Mesh, Vec<Region>) {
    let cells: Vec<Region> = (0..n)
        .map(|i| Region::new(i as f64, i as f64 + 1.0, 0.0, 1.0))
        .collect();
    let mut builder = Mesh::builder();
    for &c in &cells {
        builder.add_region(c);
    }
    for pair in cells.windows(2) {
        builder.connect(pair[0], pair[1]);
    }
    (builder.build().expect("corridor mesh"), cells)
}

/// `cols × rows` square cells of side `size`, 4-connected, row-major.
pub(crate) fn grid_mesh(cols: usize, rows: usize, size: f64) -> Mesh {
    let cell = |c: usize, r: usize| {
        Region::new(
            c as f64 * size,
            (c + 1) as f64 * size,
            r as f64 * size,
            (r + 1) as f64 * size,
        )
    };
    let mut builder = Mesh::builder();
    for r in 0..rows {
        for c in 0..cols {
            builder.add_region(cell(c, r));
        }
    }
    for r in 0..rows {
        for c in 0..cols {
            if c + 1 < cols {
                builder.connect(cell(c, r), cell(c + 1, r));
            }
            if r + 1 < rows {
                builder.connect(cell(c, r), cell(c, r + 1));
            }
        }
    }
    builder.build().expect("grid mesh")
}

/// Rows of unit height split into runs of 1..=3 cells with random holes.
///
/// Runs in adjacent rows that share an edge of positive length are linked,
/// so borders are often shorter than either region's side.
pub(crate) fn holey_grid(rng: &mut impl Rng, cols: usize, rows: usize) -> Mesh {
    let mut regions = Vec::new();
    for r in 0..rows {
        let mut c = 0;
        while c < cols {
            if rng.random_bool(0.2) {
                c += 1;
                continue;
            }
            let run = rng.random_range(1..=3).min(cols - c);
            regions.push(Region::new(
                c as f64,
                (c + run) as f64,
                r as f64,
                (r + 1) as f64,
            ));
            c += run;
        }
    }

    let mut builder = Mesh::builder();
    for &region in &regions {
        builder.add_region(region);
    }
    for (i, &a) in regions.iter().enumerate() {
        for &b in &regions[i + 1..] {
            let border = a.border(b);
            if border.is_valid() && (border.width() > 0.0 || border.height() > 0.0) {
                builder.connect(a, b);
            }
        }
    }
    builder.build().expect("holey mesh")
}

/// Follow `chain` from `from` to `to` and return the regions in
/// `to -> from` order.
pub(crate) fn walk_chain(chain: &ParentChain, from: Region, to: Region) -> Option<Vec<Region>> {
    let mut walk = vec![from];
    let mut current = from;
    while current != to {
        if walk.len() > chain.len() {
            return None;
        }
        current = chain.parent(&current)?;
        walk.push(current);
    }
    walk.reverse();
    Some(walk)
}

/// Check every geometric guarantee a route makes.
pub(crate) fn assert_route_valid(mesh: &Mesh, route: &Route, src: Point, dst: Point) {
    let regions = route.regions();
    let polyline = route.polyline();
    assert!(!regions.is_empty());
    assert_eq!(polyline.len(), regions.len() + 1);
    assert_eq!(polyline.first(), Some(&src));
    assert_eq!(polyline.last(), Some(&dst));
    assert_eq!(route.segments().len(), regions.len());

    for pair in regions.windows(2) {
        assert!(
            mesh.are_adjacent(&pair[0], &pair[1]),
            "{} and {} are not neighbours",
            pair[0],
            pair[1]
        );
    }

    for (i, (region, segment)) in regions.iter().zip(route.segments()).enumerate() {
        assert!(region.contains(segment.start), "segment {i} starts outside {region}");
        assert!(region.contains(segment.end), "segment {i} ends outside {region}");
        assert_eq!(route.detail_points().get(region), Some(polyline[i]));
    }
}
