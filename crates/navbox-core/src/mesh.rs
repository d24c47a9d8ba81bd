//! The navigation mesh: a set of [`Region`]s and their adjacency relation.
//!
//! A [`Mesh`] is validated once on construction and is read-only afterwards,
//! so it can be shared by reference between any number of path queries.

use std::collections::{HashMap, HashSet};

use crate::geom::{Point, Region};

/// Reasons a mesh can be rejected.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum MeshError {
    /// Bounds are inverted or not finite.
    #[error("region {0} has inverted or non-finite bounds")]
    InvalidRegion(Region),

    /// The same rectangle was listed twice.
    #[error("region {0} appears more than once")]
    DuplicateRegion(Region),

    /// The adjacency relation names a region outside the region set.
    #[error("adjacency refers to unknown region {0}")]
    UnknownRegion(Region),

    /// A region lists itself as a neighbour.
    #[error("region {0} is adjacent to itself")]
    SelfAdjacent(Region),

    /// `to` is a neighbour of `from` but not the other way round.
    #[error("adjacency is not symmetric: {from} -> {to} has no reverse link")]
    AsymmetricAdjacency { from: Region, to: Region },

    /// Linked regions share no border.
    #[error("regions {from} and {to} are linked but do not touch")]
    DisjointNeighbors { from: Region, to: Region },

    /// Two regions share interior area.
    #[error("regions {0} and {1} overlap")]
    OverlappingRegions(Region, Region),
}

// ---------------------------------------------------------------------------
// Mesh
// ---------------------------------------------------------------------------

/// Immutable navigation mesh.
#[derive(Debug, Clone, Default)]
pub struct Mesh {
    regions: Vec<Region>,
    adjacency: HashMap<Region, Vec<Region>>,
}

impl Mesh {
    /// Build a mesh from regions and a pre-computed adjacency map.
    ///
    /// Regions keep their order, which is the scan order of
    /// [`locate`](Self::locate). Regions absent from `adjacency` have no
    /// neighbours.
    pub fn new(
        regions: Vec<Region>,
        adjacency: HashMap<Region, Vec<Region>>,
    ) -> Result<Self, MeshError> {
        let mut members = HashSet::with_capacity(regions.len());
        for &r in &regions {
            if !r.is_valid() {
                return Err(MeshError::InvalidRegion(r));
            }
            if !members.insert(r) {
                return Err(MeshError::DuplicateRegion(r));
            }
        }

        for (&from, neighbors) in &adjacency {
            if !members.contains(&from) {
                return Err(MeshError::UnknownRegion(from));
            }
            for &to in neighbors {
                if to == from {
                    return Err(MeshError::SelfAdjacent(from));
                }
                if !members.contains(&to) {
                    return Err(MeshError::UnknownRegion(to));
                }
                let linked_back = adjacency
                    .get(&to)
                    .is_some_and(|back| back.contains(&from));
                if !linked_back {
                    return Err(MeshError::AsymmetricAdjacency { from, to });
                }
                if !from.touches(to) {
                    return Err(MeshError::DisjointNeighbors { from, to });
                }
            }
        }

        check_overlaps(&regions)?;

        Ok(Self { regions, adjacency })
    }

    /// Start an empty [`MeshBuilder`].
    pub fn builder() -> MeshBuilder {
        MeshBuilder::new()
    }

    /// All regions in insertion order.
    #[inline]
    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.regions.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    /// Neighbours of `r`. Empty for isolated or unknown regions.
    #[inline]
    pub fn adjacent(&self, r: &Region) -> &[Region] {
        self.adjacency.get(r).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Whether `a` and `b` share an adjacency link.
    pub fn are_adjacent(&self, a: &Region, b: &Region) -> bool {
        self.adjacent(a).contains(b)
    }

    /// Find the region enclosing `p`.
    ///
    /// Bounds are closed, so a point on a shared border matches whichever
    /// neighbour comes first in insertion order.
    pub fn locate(&self, p: Point) -> Option<Region> {
        self.regions.iter().copied().find(|r| r.contains(p))
    }
}

/// Reject any pair of regions sharing interior area.
///
/// Sweeps along x so only regions whose x-intervals intersect are compared.
fn check_overlaps(regions: &[Region]) -> Result<(), MeshError> {
    let mut order: Vec<&Region> = regions.iter().collect();
    order.sort_by(|a, b| a.x_min.total_cmp(&b.x_min));

    for (i, a) in order.iter().enumerate() {
        for b in &order[i + 1..] {
            if b.x_min >= a.x_max {
                break;
            }
            if a.overlaps(**b) {
                return Err(MeshError::OverlappingRegions(**a, **b));
            }
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// MeshBuilder
// ---------------------------------------------------------------------------

/// Incremental mesh construction with symmetric links.
#[derive(Debug, Clone, Default)]
pub struct MeshBuilder {
    regions: Vec<Region>,
    adjacency: HashMap<Region, Vec<Region>>,
}

impl MeshBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a region. Duplicates are reported by [`build`](Self::build).
    pub fn add_region(&mut self, r: Region) -> &mut Self {
        self.regions.push(r);
        self
    }

    /// Link `a` and `b` in both directions. Repeated links are ignored.
    pub fn connect(&mut self, a: Region, b: Region) -> &mut Self {
        let forward = self.adjacency.entry(a).or_default();
        if !forward.contains(&b) {
            forward.push(b);
        }
        let backward = self.adjacency.entry(b).or_default();
        if !backward.contains(&a) {
            backward.push(a);
        }
        self
    }

    /// Validate and produce the mesh.
    pub fn build(self) -> Result<Mesh, MeshError> {
        Mesh::new(self.regions, self.adjacency)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
