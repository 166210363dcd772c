//! Schema validation: required dimensions and variables, triangular topology.

use crate::io::{ContainerReader, SwwError};

pub const DIM_VOLUMES: &str = "number_of_volumes";
pub const DIM_VERTICES: &str = "number_of_vertices";
pub const DIM_POINTS: &str = "number_of_points";
pub const DIM_TIMESTEPS: &str = "number_of_timesteps";

pub const VAR_X: &str = "x";
pub const VAR_Y: &str = "y";
pub const VAR_Z: &str = "z";
pub const VAR_VOLUMES: &str = "volumes";
pub const VAR_TIME: &str = "time";
pub const VAR_STAGE: &str = "stage";
pub const VAR_XMOMENTUM: &str = "xmomentum";
pub const VAR_YMOMENTUM: &str = "ymomentum";

pub const ATTR_XLLCORNER: &str = "xllcorner";
pub const ATTR_YLLCORNER: &str = "yllcorner";

/// Sizes and optional content of a validated SWW container.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SwwSchema {
    /// Number of elements
    pub n_volumes: usize,
    /// Vertices per element (always 3 once validated)
    pub n_vertices: usize,
    /// Number of nodes
    pub n_points: usize,
    pub n_timesteps: usize,
    /// Both momentum components are present
    pub has_momentum: bool,
}

/// Check that the container looks like an SWW file.
///
/// Only performs lookups, no bulk reads.
pub fn validate_schema<C: ContainerReader + ?Sized>(container: &C) -> Result<SwwSchema, SwwError> {
    let dim = |name: &str| {
        container
            .dimension_len(name)
            .ok_or_else(|| SwwError::MissingDimension(name.to_string()))
    };

    let n_volumes = dim(DIM_VOLUMES)?;
    let n_vertices = dim(DIM_VERTICES)?;
    let n_points = dim(DIM_POINTS)?;
    let n_timesteps = dim(DIM_TIMESTEPS)?;

    if n_vertices != 3 {
        return Err(SwwError::NonTriangular(n_vertices));
    }

    for var in [VAR_X, VAR_Y, VAR_Z, VAR_VOLUMES, VAR_TIME, VAR_STAGE] {
        if !container.has_variable(var) {
            return Err(SwwError::MissingVariable(var.to_string()));
        }
    }

    let has_momentum =
        container.has_variable(VAR_XMOMENTUM) && container.has_variable(VAR_YMOMENTUM);

    Ok(SwwSchema {
        n_volumes,
        n_vertices,
        n_points,
        n_timesteps,
        has_momentum,
    })
}
