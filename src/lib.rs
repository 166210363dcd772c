//! # sww-rs
//!
//! A reader for SWW shallow water result files.
//!
//! This crate provides:
//! - Schema validation of the NetCDF container
//! - Triangular mesh reconstruction with origin offset
//! - Bed elevation, depth and momentum datasets
//! - Wet/dry element flags derived from a depth threshold
//! - Point location and interpolation on the decoded mesh

pub mod dataset;
pub mod io;
pub mod mesh;
pub mod sww;

// Re-export main types for convenience
pub use dataset::{DataSet, DataSetType, Output, ValueRange, Vector2};
pub use io::{ContainerReader, LoadErrorKind, MemoryContainer, SwwError};
pub use mesh::{BoundingBox, Element, ElementType, MeshError, Node, PointLocation, TriMesh};
pub use sww::{LoadStage, SwwLoadConfig, SwwLoader, load_sww_from, load_sww_from_with_config};

#[cfg(feature = "netcdf")]
pub use io::NetCdfContainer;
#[cfg(feature = "netcdf")]
pub use sww::{load_sww, load_sww_with_config};
