//! Static bed elevation dataset.

use crate::dataset::{DataSet, DataSetType, Output};

pub const BED_DATASET_NAME: &str = "Bed Elevation";

/// Static bed elevation dataset: one output holding `z` unchanged, with
/// every element active.
pub fn extract_bed(file_name: &str, elevation: &[f32], n_elements: usize) -> DataSet {
    let mut ds = DataSet::new(file_name, BED_DATASET_NAME, DataSetType::Bed, false);
    ds.add_output(Output::scalar(
        0.0,
        elevation.to_vec(),
        vec![true; n_elements],
    ));
    ds.update_value_range();
    ds
}
