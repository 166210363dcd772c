//! Load pipeline: validate, build geometry, then decode bed, depth and
//! (optionally) momentum datasets onto the mesh.
//!
//! Any failure aborts the whole load; no partially populated mesh is ever
//! returned.

use std::fmt;

use log::{debug, error, info};

use super::bed::extract_bed;
use super::config::SwwLoadConfig;
use super::depth::{decode_depth, read_output_times};
use super::geometry::load_geometry;
use super::momentum::decode_momentum;
use super::schema::validate_schema;
use crate::io::{ContainerReader, SwwError};
use crate::mesh::TriMesh;

/// Progress of a load. `Done` and `Failed` are terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadStage {
    NotStarted,
    Validating,
    Reading,
    Done,
    Failed,
}

impl fmt::Display for LoadStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LoadStage::NotStarted => "not started",
            LoadStage::Validating => "validating",
            LoadStage::Reading => "reading",
            LoadStage::Done => "done",
            LoadStage::Failed => "failed",
        };
        f.write_str(s)
    }
}

/// Single-use SWW loader.
///
/// # Example
///
/// ```
/// use sww_rs::io::MemoryContainer;
/// use sww_rs::sww::{LoadStage, SwwLoadConfig, SwwLoader};
///
/// let mut loader = SwwLoader::new(SwwLoadConfig::default());
/// let result = loader.load(&MemoryContainer::new("empty"));
/// assert!(result.is_err());
/// assert_eq!(loader.stage(), LoadStage::Failed);
/// ```
#[derive(Debug)]
pub struct SwwLoader {
    config: SwwLoadConfig,
    stage: LoadStage,
}

impl SwwLoader {
    pub fn new(config: SwwLoadConfig) -> Self {
        Self {
            config,
            stage: LoadStage::NotStarted,
        }
    }

    pub fn config(&self) -> &SwwLoadConfig {
        &self.config
    }

    pub fn stage(&self) -> LoadStage {
        self.stage
    }

    fn enter(&mut self, stage: LoadStage) {
        debug!("SWW load: {} -> {}", self.stage, stage);
        self.stage = stage;
    }

    /// Run the load. A loader can run once; later calls fail without reading.
    pub fn load<C: ContainerReader + ?Sized>(
        &mut self,
        container: &C,
    ) -> Result<TriMesh, SwwError> {
        if self.stage != LoadStage::NotStarted {
            return Err(SwwError::InvalidData(format!(
                "loader already used (stage: {})",
                self.stage
            )));
        }

        match self.run(container) {
            Ok(mesh) => {
                self.enter(LoadStage::Done);
                info!("Loaded {}: {}", container.source_name(), mesh.summary());
                Ok(mesh)
            }
            Err(err) => {
                error!(
                    "Failed to load {} while {}: {}",
                    container.source_name(),
                    self.stage,
                    err
                );
                self.enter(LoadStage::Failed);
                Err(err)
            }
        }
    }

    fn run<C: ContainerReader + ?Sized>(&mut self, container: &C) -> Result<TriMesh, SwwError> {
        self.enter(LoadStage::Validating);
        let schema = validate_schema(container)?;
        info!(
            "SWW {}: {} points, {} triangles, {} timesteps{}",
            container.source_name(),
            schema.n_points,
            schema.n_volumes,
            schema.n_timesteps,
            if schema.has_momentum { ", momentum" } else { "" }
        );

        self.enter(LoadStage::Reading);
        let geometry = load_geometry(container, &schema, &self.config)?;
        let mut mesh = geometry.mesh;

        let bed = extract_bed(
            container.source_name(),
            &geometry.elevation,
            mesh.n_elements(),
        );

        let times = read_output_times(container, &schema, &self.config)?;
        let depth = decode_depth(
            container,
            &schema,
            &mesh,
            &geometry.elevation,
            &times,
            &self.config,
        )?;

        let momentum = if schema.has_momentum && self.config.load_momentum {
            Some(decode_momentum(container, &schema, &times, &depth.active)?)
        } else {
            debug!("Momentum not decoded (present: {})", schema.has_momentum);
            None
        };

        mesh.add_dataset(bed);
        mesh.add_dataset(depth.dataset);
        if let Some(ds) = momentum {
            mesh.add_dataset(ds);
        }

        Ok(mesh)
    }
}

/// Load an SWW mesh and datasets from any container with default settings.
pub fn load_sww_from<C: ContainerReader + ?Sized>(container: &C) -> Result<TriMesh, SwwError> {
    load_sww_from_with_config(container, SwwLoadConfig::default())
}

/// Load an SWW mesh and datasets from any container.
pub fn load_sww_from_with_config<C: ContainerReader + ?Sized>(
    container: &C,
    config: SwwLoadConfig,
) -> Result<TriMesh, SwwError> {
    SwwLoader::new(config).load(container)
}

/// Load an SWW file with default settings.
#[cfg(feature = "netcdf")]
pub fn load_sww(path: impl AsRef<std::path::Path>) -> Result<TriMesh, SwwError> {
    load_sww_with_config(path, SwwLoadConfig::default())
}

/// Load an SWW file. The file is closed before returning, on success and
/// on failure.
#[cfg(feature = "netcdf")]
pub fn load_sww_with_config(
    path: impl AsRef<std::path::Path>,
    config: SwwLoadConfig,
) -> Result<TriMesh, SwwError> {
    let container = crate::io::NetCdfContainer::open(path)?;
    load_sww_from_with_config(&container, config)
}
