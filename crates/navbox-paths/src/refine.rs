//! Turning a region chain into a polyline.
//!
//! Each transition between two regions is pinned to their shared border:
//! the point carried back from the destination is clamped, axis by axis,
//! into the border rectangle. Every crossing therefore lies on a legal edge
//! and consecutive points always share a region, so the polyline never
//! leaves the mesh.

use std::collections::HashMap;

use navbox_core::{Point, Region};

use crate::chain::ParentChain;

/// Where the route enters each region it uses.
///
/// The source region maps to the source point; every later region maps to
/// the clamped crossing on its border with the previous region.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DetailPoints {
    points: HashMap<Region, Point>,
}

impl DetailPoints {
    #[inline]
    pub fn get(&self, r: &Region) -> Option<Point> {
        self.points.get(r).copied()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Region, Point)> + '_ {
        self.points.iter().map(|(&r, &p)| (r, p))
    }

    fn insert(&mut self, r: Region, p: Point) {
        self.points.insert(r, p);
    }
}

/// Output of [`refine`].
#[derive(Debug, Clone, PartialEq)]
pub struct Refinement {
    /// Regions from source to destination.
    pub regions: Vec<Region>,
    pub detail_points: DetailPoints,
    /// `source, crossing_1, ..., crossing_n, destination`.
    pub polyline: Vec<Point>,
}

/// Walk `chain` from `dest` back to `start`, fixing the crossing point of
/// every transition.
///
/// Returns `None` when `dest` (or any region on the way) has no parent
/// before `start` is reached, or when the chain loops.
pub fn refine(
    chain: &ParentChain,
    start: Region,
    dest: Region,
    source_point: Point,
    dest_point: Point,
) -> Option<Refinement> {
    let mut regions = vec![dest];
    let mut crossings = Vec::new();
    let mut detail_points = DetailPoints::default();

    let mut carried = dest_point;
    let mut current = dest;
    while current != start {
        // A simple chain visits at most len() + 1 regions.
        if regions.len() > chain.len() {
            log::debug!("parent chain loops before reaching {}", start);
            return None;
        }
        let Some(parent) = chain.parent(&current) else {
            log::debug!("{} has no parent; destination unreachable", current);
            return None;
        };

        let border = current.border(parent);
        carried = border.clamp_point(carried);
        log::trace!("{} <- {}: border {} crossing {}", current, parent, border, carried);

        detail_points.insert(current, carried);
        crossings.push(carried);
        regions.push(parent);
        current = parent;
    }
    detail_points.insert(start, source_point);

    regions.reverse();
    crossings.reverse();

    let mut polyline = Vec::with_capacity(crossings.len() + 2);
    polyline.push(source_point);
    polyline.extend(crossings);
    polyline.push(dest_point);

    Some(Refinement {
        regions,
        detail_points,
        polyline,
    })
}
