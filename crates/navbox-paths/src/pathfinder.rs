use std::collections::HashSet;

use navbox_core::{Mesh, Point, Region, Segment};

use crate::chain::SearchOutcome;
use crate::config::{SearchConfig, Strategy};
use crate::error::{Endpoint, PathError};
use crate::refine::{DetailPoints, refine};
use crate::traits::AstarPather;

// ---------------------------------------------------------------------------
// Route / PathResult
// ---------------------------------------------------------------------------

/// A successful query: the regions used and the polyline through them.
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    regions: Vec<Region>,
    detail_points: DetailPoints,
    polyline: Vec<Point>,
    segments: Vec<Segment>,
}

impl Route {
    /// Regions from source to destination.
    #[inline]
    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    #[inline]
    pub fn detail_points(&self) -> &DetailPoints {
        &self.detail_points
    }

    /// Source point, border crossings, destination point.
    #[inline]
    pub fn polyline(&self) -> &[Point] {
        &self.polyline
    }

    #[inline]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Total length of the polyline.
    pub fn length(&self) -> f64 {
        self.segments.iter().map(|s| s.length()).sum()
    }
}

/// Everything a query reports, found or not.
///
/// Failure is never a partial route: either [`route`](Self::route) is `Ok`
/// with a complete polyline, or [`segments`](Self::segments) is empty.
#[derive(Debug, Clone)]
pub struct PathResult {
    route: Result<Route, PathError>,
    explored: HashSet<Region>,
}

impl PathResult {
    fn failed(error: PathError, explored: HashSet<Region>) -> Self {
        log::debug!("no path: {}", error);
        Self {
            route: Err(error),
            explored,
        }
    }

    #[inline]
    pub fn is_found(&self) -> bool {
        self.route.is_ok()
    }

    pub fn route(&self) -> Result<&Route, &PathError> {
        self.route.as_ref()
    }

    pub fn error(&self) -> Option<&PathError> {
        self.route.as_ref().err()
    }

    /// Path segments, empty on failure.
    pub fn segments(&self) -> &[Segment] {
        self.route.as_ref().map(Route::segments).unwrap_or(&[])
    }

    /// Regions the search touched, for diagnostics.
    #[inline]
    pub fn explored(&self) -> &HashSet<Region> {
        &self.explored
    }

    /// `(segments, explored)`; segments are empty on failure.
    pub fn into_parts(self) -> (Vec<Segment>, HashSet<Region>) {
        let segments = self.route.map(|r| r.segments).unwrap_or_default();
        (segments, self.explored)
    }

    pub fn into_result(self) -> Result<Route, PathError> {
        self.route
    }
}

// ---------------------------------------------------------------------------
// Pathfinder
// ---------------------------------------------------------------------------

/// Entry point for path queries over a [`Mesh`].
///
/// Holds only configuration. Every query builds its own queues and tables
/// and drops them on return, so one `Pathfinder` and one `&Mesh` can serve
/// any number of queries, including from several threads.
#[derive(Debug, Clone, Default)]
pub struct Pathfinder {
    pub(crate) config: SearchConfig,
}

impl Pathfinder {
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    #[inline]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Run the configured region-level search.
    pub fn search<P: AstarPather>(&self, pather: &P, start: Region, goal: Region) -> SearchOutcome {
        match self.config.strategy {
            Strategy::Bidirectional => self.bidirectional_search(pather, start, goal),
            Strategy::AStar => self.astar_search(pather, start, goal),
            Strategy::BreadthFirst => self.bfs_search(pather, start, goal),
        }
    }

    /// Find a polyline from `source` to `dest` that stays inside `mesh`.
    pub fn find_path(&self, source: Point, dest: Point, mesh: &Mesh) -> PathResult {
        log::debug!("path query {} -> {}", source, dest);

        let Some(source_region) = mesh.locate(source) else {
            return PathResult::failed(
                PathError::PointOutsideMesh {
                    endpoint: Endpoint::Source,
                    point: source,
                },
                HashSet::new(),
            );
        };
        let Some(dest_region) = mesh.locate(dest) else {
            return PathResult::failed(
                PathError::PointOutsideMesh {
                    endpoint: Endpoint::Destination,
                    point: dest,
                },
                HashSet::new(),
            );
        };

        let outcome = self.search(mesh, source_region, dest_region);
        let explored = outcome.explored;
        let Some(chain) = outcome.chain else {
            let error = match (outcome.limit_reached, self.config.max_expansions) {
                (true, Some(limit)) => PathError::ExpansionLimit { limit },
                _ => PathError::NoPathExists,
            };
            return PathResult::failed(error, explored);
        };

        let Some(refined) = refine(&chain, source_region, dest_region, source, dest) else {
            return PathResult::failed(PathError::UnreachableDestination, explored);
        };

        let segments: Vec<Segment> = refined
            .polyline
            .windows(2)
            .map(|w| Segment::new(w[0], w[1]))
            .collect();

        log::debug!("regions visited: {:?}", refined.regions);
        log::debug!("detail points: {:?}", refined.detail_points);

        PathResult {
            route: Ok(Route {
                regions: refined.regions,
                detail_points: refined.detail_points,
                polyline: refined.polyline,
                segments,
            }),
            explored,
        }
    }
}

/// [`Pathfinder::find_path`] with the default configuration.
pub fn find_path(source: Point, dest: Point, mesh: &Mesh) -> PathResult {
    Pathfinder::default().find_path(source, dest, mesh)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
