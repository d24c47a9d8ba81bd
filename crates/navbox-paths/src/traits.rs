use navbox_core::{Mesh, Region};

use crate::distance::region_distance;

/// Minimal pathfinding interface — provides neighbor enumeration.
pub trait Pather {
    /// Append neighbors of `r` into `buf`. The caller clears `buf` before calling.
    fn neighbors(&self, r: Region, buf: &mut Vec<Region>);
}

/// Pather with weighted (non-negative) edges.
pub trait WeightedPather: Pather {
    /// Cost of moving from `from` to adjacent `to`. Must be >= 0.
    fn cost(&self, from: Region, to: Region) -> f64;
}

/// Full best-first pather with a distance heuristic.
pub trait AstarPather: WeightedPather {
    /// Heuristic estimate of the remaining cost from `from` to `to`.
    fn estimate(&self, from: Region, to: Region) -> f64;
}

impl Pather for Mesh {
    fn neighbors(&self, r: Region, buf: &mut Vec<Region>) {
        buf.extend_from_slice(self.adjacent(&r));
    }
}

impl WeightedPather for Mesh {
    fn cost(&self, from: Region, to: Region) -> f64 {
        region_distance(from, to)
    }
}

impl AstarPather for Mesh {
    fn estimate(&self, from: Region, to: Region) -> f64 {
        region_distance(from, to)
    }
}
