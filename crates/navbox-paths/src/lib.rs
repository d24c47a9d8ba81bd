//! Pathfinding over axis-aligned navigation meshes.
//!
//! A query runs in three stages:
//!
//! 1. **Locate** both endpoints in the mesh ([`Mesh::locate`](navbox_core::Mesh::locate)).
//! 2. **Search** for a chain of adjacent regions. The default is a
//!    bidirectional best-first search ([`Pathfinder::bidirectional_search`]);
//!    unidirectional A\* and BFS are available through [`Strategy`].
//! 3. **Refine** the chain into a polyline whose border crossings are
//!    clamped onto the shared edge of each pair of regions ([`refine`]).
//!
//! [`find_path`] runs all three with the default [`SearchConfig`].
//!
//! # Trait hierarchy
//!
//! | Trait | Required for |
//! |---|---|
//! | [`Pather`] | BFS |
//! | [`WeightedPather`] : [`Pather`] | — |
//! | [`AstarPather`] : [`WeightedPather`] | A\*, bidirectional search |

mod astar;
mod bfs;
mod bidirectional;
mod chain;
mod config;
mod distance;
mod error;
mod frontier;
mod pathfinder;
mod refine;
mod traits;

#[cfg(test)]
mod testing;

pub use chain::{ParentChain, SearchOutcome};
pub use config::{SearchConfig, Strategy};
pub use distance::{euclidean, region_distance};
pub use error::{Endpoint, PathError};
pub use frontier::Direction;
pub use pathfinder::{PathResult, Pathfinder, Route, find_path};
pub use refine::{DetailPoints, Refinement, refine};
pub use traits::{AstarPather, Pather, WeightedPather};
