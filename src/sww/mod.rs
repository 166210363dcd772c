//! SWW result decoding.
//!
//! An SWW file is a NetCDF container written by the ANUGA shallow water
//! model. It holds a triangular mesh, a bed elevation per node, and per
//! timestep stage (and optionally x/y momentum) per node. Decoding runs in
//! order:
//!
//! 1. **Schema** - required dimensions/variables, triangles only
//! 2. **Geometry** - nodes (with `xllcorner`/`yllcorner` offset) and triangles
//! 3. **Bed** - static "Bed Elevation" dataset from `z`
//! 4. **Depth** - "Depth" = stage - bed per timestep, plus wet/dry flags
//! 5. **Momentum** - "Momentum" vectors, reusing the depth wet/dry flags
//!
//! # Example
//!
//! ```rust,ignore
//! use sww_rs::sww::load_sww;
//!
//! let mesh = load_sww("run.sww")?;
//! let depth = mesh.dataset("Depth").unwrap();
//! for output in depth.outputs() {
//!     println!("t = {:.2} h, wet elements: {}", output.time, output.n_active());
//! }
//! ```

mod bed;
mod config;
mod depth;
mod geometry;
mod loader;
mod momentum;
mod schema;

pub use bed::{BED_DATASET_NAME, extract_bed};
pub use config::{DEPTH_THRESHOLD, SECONDS_PER_HOUR, SwwLoadConfig};
#[cfg(feature = "parallel")]
pub use depth::classify_wet_parallel;
pub use depth::{
    DEPTH_DATASET_NAME, DepthSeries, classify_wet, decode_depth, read_output_times,
    stage_to_depth,
};
pub use geometry::{Geometry, OriginOffset, load_geometry};
#[cfg(feature = "netcdf")]
pub use loader::{load_sww, load_sww_with_config};
pub use loader::{LoadStage, SwwLoader, load_sww_from, load_sww_from_with_config};
pub use momentum::{MOMENTUM_DATASET_NAME, decode_momentum};
pub use schema::{
    ATTR_XLLCORNER, ATTR_YLLCORNER, DIM_POINTS, DIM_TIMESTEPS, DIM_VERTICES, DIM_VOLUMES,
    SwwSchema, VAR_STAGE, VAR_TIME, VAR_VOLUMES, VAR_X, VAR_XMOMENTUM, VAR_Y, VAR_YMOMENTUM,
    VAR_Z, validate_schema,
};
