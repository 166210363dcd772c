//! Mesh geometry: node coordinates, origin offset and triangle connectivity.

use log::debug;

use super::config::SwwLoadConfig;
use super::schema::{
    ATTR_XLLCORNER, ATTR_YLLCORNER, SwwSchema, VAR_VOLUMES, VAR_X, VAR_Y, VAR_Z,
};
use crate::io::{ContainerReader, SwwError};
use crate::mesh::{Element, Node, TriMesh};

/// Translation from file coordinates to world coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct OriginOffset {
    pub x: f64,
    pub y: f64,
}

impl OriginOffset {
    /// Resolve optional attribute values; an absent value means no shift.
    pub fn from_attributes(x: Option<f64>, y: Option<f64>) -> Self {
        Self {
            x: x.unwrap_or(0.0),
            y: y.unwrap_or(0.0),
        }
    }

    /// Read `xllcorner`/`yllcorner` from the container.
    pub fn read<C: ContainerReader + ?Sized>(container: &C) -> Self {
        Self::from_attributes(
            container.global_attribute_f64(ATTR_XLLCORNER),
            container.global_attribute_f64(ATTR_YLLCORNER),
        )
    }
}

/// Loaded geometry.
#[derive(Clone, Debug)]
pub struct Geometry {
    pub mesh: TriMesh,
    /// Raw per-node bed elevation (`z`), shared by the bed and depth decoders
    pub elevation: Vec<f32>,
    /// Offset that was applied to the node coordinates
    pub offset: OriginOffset,
}

/// Read a per-node variable and check its length.
pub(crate) fn read_node_array<C: ContainerReader + ?Sized>(
    container: &C,
    name: &str,
    n_points: usize,
) -> Result<Vec<f32>, SwwError> {
    let values = container.read_f32(name)?;
    if values.len() != n_points {
        return Err(SwwError::InvalidData(format!(
            "{} has {} values, expected {}",
            name,
            values.len(),
            n_points
        )));
    }
    Ok(values)
}

/// Split flat `volumes` data into triangles.
fn build_elements(volumes: &[i32], n_volumes: usize) -> Result<Vec<Element>, SwwError> {
    if volumes.len() != 3 * n_volumes {
        return Err(SwwError::InvalidData(format!(
            "{} has {} values, expected {}",
            VAR_VOLUMES,
            volumes.len(),
            3 * n_volumes
        )));
    }

    volumes
        .chunks_exact(3)
        .enumerate()
        .map(|(k, tri)| {
            let mut nodes = [0usize; 3];
            for (slot, &idx) in nodes.iter_mut().zip(tri) {
                *slot = usize::try_from(idx).map_err(|_| {
                    SwwError::InvalidData(format!("element {} has negative node index {}", k, idx))
                })?;
            }
            Ok(Element::triangle(k, nodes))
        })
        .collect()
}

/// Reconstruct the mesh from `x`, `y`, `z` and `volumes`.
///
/// Node indices are taken from the file unchanged but must lie in
/// `[0, n_points)`.
pub fn load_geometry<C: ContainerReader + ?Sized>(
    container: &C,
    schema: &SwwSchema,
    config: &SwwLoadConfig,
) -> Result<Geometry, SwwError> {
    let px = read_node_array(container, VAR_X, schema.n_points)?;
    let py = read_node_array(container, VAR_Y, schema.n_points)?;
    let pz = read_node_array(container, VAR_Z, schema.n_points)?;
    let volumes = container.read_i32(VAR_VOLUMES)?;

    let offset = if config.apply_origin_offset {
        OriginOffset::read(container)
    } else {
        OriginOffset::default()
    };
    debug!("Origin offset: ({}, {})", offset.x, offset.y);

    let nodes = px
        .iter()
        .zip(&py)
        .enumerate()
        .map(|(i, (&x, &y))| Node::new(i, x as f64 + offset.x, y as f64 + offset.y))
        .collect();

    let elements = build_elements(&volumes, schema.n_volumes)?;
    let mesh = TriMesh::new(nodes, elements)?;

    Ok(Geometry {
        mesh,
        elevation: pz,
        offset,
    })
}
