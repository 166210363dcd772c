//! Momentum vector time series.
//!
//! Wetness is a property of the depth field, so each output reuses the
//! active flags computed for the same timestep by the depth decoder.

use log::debug;

use super::depth::read_timestep_row;
use super::schema::{SwwSchema, VAR_XMOMENTUM, VAR_YMOMENTUM};
use crate::dataset::{DataSet, DataSetType, Output, Vector2};
use crate::io::{ContainerReader, SwwError};

pub const MOMENTUM_DATASET_NAME: &str = "Momentum";

/// Decode the momentum dataset.
///
/// `active[t]` must be the active flags of timestep `t`; one output is
/// produced per entry of `times`.
pub fn decode_momentum<C: ContainerReader + ?Sized>(
    container: &C,
    schema: &SwwSchema,
    times: &[f64],
    active: &[Vec<bool>],
) -> Result<DataSet, SwwError> {
    if active.len() != times.len() {
        return Err(SwwError::InvalidData(format!(
            "{} active arrays for {} timesteps",
            active.len(),
            times.len()
        )));
    }

    let mut dataset = DataSet::new(
        container.source_name(),
        MOMENTUM_DATASET_NAME,
        DataSetType::Vector,
        true,
    );

    for (t, (&time, active_t)) in times.iter().zip(active).enumerate() {
        let xs = read_timestep_row(container, VAR_XMOMENTUM, t, schema.n_points)?;
        let ys = read_timestep_row(container, VAR_YMOMENTUM, t, schema.n_points)?;

        let vectors = xs
            .iter()
            .zip(&ys)
            .map(|(&x, &y)| Vector2::new(x, y))
            .collect();

        dataset.add_output(Output::vector(time, vectors, active_t.clone()));
    }

    dataset.update_value_range();
    if let Some(range) = dataset.value_range() {
        debug!("Momentum magnitude range: [{}, {}]", range.min, range.max);
    }

    Ok(dataset)
}
