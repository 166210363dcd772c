//! Container access for SWW files.
//!
//! This module provides:
//! - **`ContainerReader`**: the read primitives the decoders rely on
//!   (dimension lookup, whole-variable reads, single-row strided reads,
//!   numeric global attributes)
//! - **`MemoryContainer`**: an in-memory implementation
//! - **`NetCdfContainer`**: NetCDF file access (requires `netcdf` feature)
//! - **`SwwError`**: the error type shared by every load step
//!
//! # Example
//!
//! ```rust,ignore
//! use sww_rs::io::{ContainerReader, NetCdfContainer};
//!
//! let file = NetCdfContainer::open("run.sww")?;
//! let n_points = file.dimension_len("number_of_points");
//! let stage_t0 = file.read_f32_row("stage", 0)?;
//! ```

mod container;
mod error;
#[cfg(feature = "netcdf")]
mod netcdf_container;

pub use container::{ContainerReader, MemoryContainer};
pub use error::{LoadErrorKind, SwwError};
#[cfg(feature = "netcdf")]
pub use netcdf_container::NetCdfContainer;
