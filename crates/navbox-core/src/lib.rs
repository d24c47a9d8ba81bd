//! **navbox-core** — core types for axis-aligned navigation meshes.
//!
//! This crate provides the geometry primitives ([`Point`], [`Region`],
//! [`Segment`]) and the read-only [`Mesh`] adjacency structure consumed by
//! the `navbox-paths` pathfinder, including point location.

pub mod geom;
pub mod mesh;

pub use geom::{Point, Region, Segment, clamp};
pub use mesh::{Mesh, MeshBuilder, MeshError};
