//! Mesh representation.
//!
//! Provides the unstructured triangular mesh that decoded datasets live on:
//! - Nodes and three-node elements in file order
//! - Extent, vertex adjacency and point location helpers

mod tri_mesh;

pub use tri_mesh::{
    BoundingBox, Element, ElementType, MeshError, Node, PointLocation, TriMesh,
};
