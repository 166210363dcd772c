//! Depth time series and wet/dry classification.
//!
//! For each timestep the stage row is read, bed elevation subtracted, and an
//! element is flagged active when any of its nodes is deeper than the
//! threshold.

use log::debug;

use super::config::SwwLoadConfig;
use super::schema::{SwwSchema, VAR_STAGE, VAR_TIME};
use crate::dataset::{DataSet, DataSetType, Output};
use crate::io::{ContainerReader, SwwError};
use crate::mesh::{Element, TriMesh};

pub const DEPTH_DATASET_NAME: &str = "Depth";

/// Decoded depth dataset plus the per-timestep active flags, handed on to
/// the momentum decoder.
#[derive(Clone, Debug)]
pub struct DepthSeries {
    pub dataset: DataSet,
    /// `active[t][e]`: element `e` is wet at timestep `t`
    pub active: Vec<Vec<bool>>,
}

/// Read the time axis and convert to output units (hours by default).
pub fn read_output_times<C: ContainerReader + ?Sized>(
    container: &C,
    schema: &SwwSchema,
    config: &SwwLoadConfig,
) -> Result<Vec<f64>, SwwError> {
    let raw = container.read_f32(VAR_TIME)?;
    if raw.len() != schema.n_timesteps {
        return Err(SwwError::InvalidData(format!(
            "{} has {} values, expected {}",
            VAR_TIME,
            raw.len(),
            schema.n_timesteps
        )));
    }
    if let Some(t) = raw.iter().position(|v| !v.is_finite()) {
        return Err(SwwError::InvalidData(format!(
            "{} timestep {} is not finite",
            VAR_TIME, t
        )));
    }
    if let Some(t) = raw.windows(2).position(|w| w[1] < w[0]) {
        return Err(SwwError::InvalidData(format!(
            "{} decreases at timestep {} ({} -> {})",
            VAR_TIME,
            t + 1,
            raw[t],
            raw[t + 1]
        )));
    }
    Ok(raw.iter().map(|&t| t as f64 / config.time_scale).collect())
}

/// Read row `t` of a `[timesteps, points]` variable and check its length.
pub(crate) fn read_timestep_row<C: ContainerReader + ?Sized>(
    container: &C,
    name: &str,
    t: usize,
    n_points: usize,
) -> Result<Vec<f32>, SwwError> {
    let row = container.read_f32_row(name, t)?;
    if row.len() != n_points {
        return Err(SwwError::InvalidData(format!(
            "{} timestep {} has {} values, expected {}",
            name,
            t,
            row.len(),
            n_points
        )));
    }
    Ok(row)
}

/// Turn stage into depth in place: `stage[n] - elevation[n]`.
pub fn stage_to_depth(stage: &mut [f32], elevation: &[f32]) {
    for (s, &z) in stage.iter_mut().zip(elevation) {
        *s -= z;
    }
}

#[inline]
fn is_wet(elem: &Element, depth: &[f32], threshold: f64) -> bool {
    elem.nodes.iter().any(|&n| depth[n] as f64 > threshold)
}

/// Flag each element wet if any of its nodes has depth above `threshold`.
pub fn classify_wet(elements: &[Element], depth: &[f32], threshold: f64) -> Vec<bool> {
    elements
        .iter()
        .map(|elem| is_wet(elem, depth, threshold))
        .collect()
}

/// Parallel version of [`classify_wet`] using Rayon.
#[cfg(feature = "parallel")]
pub fn classify_wet_parallel(elements: &[Element], depth: &[f32], threshold: f64) -> Vec<bool> {
    use rayon::prelude::*;

    elements
        .par_iter()
        .map(|elem| is_wet(elem, depth, threshold))
        .collect()
}

fn classify(elements: &[Element], depth: &[f32], threshold: f64) -> Vec<bool> {
    #[cfg(feature = "parallel")]
    {
        classify_wet_parallel(elements, depth, threshold)
    }
    #[cfg(not(feature = "parallel"))]
    {
        classify_wet(elements, depth, threshold)
    }
}

/// Decode the depth dataset, one output per timestep in file order.
pub fn decode_depth<C: ContainerReader + ?Sized>(
    container: &C,
    schema: &SwwSchema,
    mesh: &TriMesh,
    elevation: &[f32],
    times: &[f64],
    config: &SwwLoadConfig,
) -> Result<DepthSeries, SwwError> {
    let mut dataset = DataSet::new(
        container.source_name(),
        DEPTH_DATASET_NAME,
        DataSetType::Scalar,
        true,
    );
    let mut active_by_step = Vec::with_capacity(schema.n_timesteps);

    for (t, &time) in times.iter().enumerate().take(schema.n_timesteps) {
        let mut depth = read_timestep_row(container, VAR_STAGE, t, schema.n_points)?;
        stage_to_depth(&mut depth, elevation);

        let active = classify(mesh.elements(), &depth, config.depth_threshold);
        debug!(
            "Depth t={} ({:.3} h): {}/{} elements wet",
            t,
            time,
            active.iter().filter(|&&a| a).count(),
            active.len()
        );

        active_by_step.push(active.clone());
        dataset.add_output(Output::scalar(time, depth, active));
    }

    dataset.update_value_range();

    Ok(DepthSeries {
        dataset,
        active: active_by_step,
    })
}
