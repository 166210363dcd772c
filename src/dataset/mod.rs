//! Result datasets.
//!
//! A [`DataSet`] is a named, typed sequence of [`Output`] snapshots defined
//! on one mesh. Datasets own their outputs; the mesh owns its datasets.

mod data_set;
mod output;

pub use data_set::{DataSet, DataSetType};
pub use output::{Output, ValueRange, Vector2};
