use std::fmt;

use navbox_core::Point;

/// Which end of a query a [`PathError::PointOutsideMesh`] refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Source,
    Destination,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endpoint::Source => f.write_str("source"),
            Endpoint::Destination => f.write_str("destination"),
        }
    }
}

/// Why a query produced no path.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum PathError {
    /// The point is not inside any region of the mesh.
    #[error("{endpoint} point {point} lies outside the mesh")]
    PointOutsideMesh { endpoint: Endpoint, point: Point },

    /// Source and destination regions are not connected.
    #[error("no path exists between the source and destination regions")]
    NoPathExists,

    /// The destination region is missing from the search's parent chain.
    #[error("destination region is not reachable through the parent chain")]
    UnreachableDestination,

    /// The configured expansion limit stopped the search.
    #[error("search gave up after {limit} expansions")]
    ExpansionLimit { limit: usize },
}
