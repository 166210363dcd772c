//! Named series of outputs sharing one mesh.

use super::output::{Output, ValueRange};

/// Kind of quantity a dataset holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DataSetType {
    /// Static bed elevation
    Bed,
    /// Time-varying scalar field
    Scalar,
    /// Time-varying vector field
    Vector,
}

/// A named dataset: one output per timestep (or a single static output).
#[derive(Clone, Debug)]
pub struct DataSet {
    file_name: String,
    name: String,
    data_type: DataSetType,
    time_varying: bool,
    outputs: Vec<Output>,
    value_range: Option<ValueRange>,
}

impl DataSet {
    /// Create an empty dataset read from `file_name`.
    pub fn new(
        file_name: impl Into<String>,
        name: impl Into<String>,
        data_type: DataSetType,
        time_varying: bool,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            name: name.into(),
            data_type,
            time_varying,
            outputs: Vec::new(),
            value_range: None,
        }
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn data_type(&self) -> DataSetType {
        self.data_type
    }

    pub fn is_time_varying(&self) -> bool {
        self.time_varying
    }

    /// Append an output. The dataset takes ownership.
    ///
    /// Outputs of a time-varying dataset are expected in time order;
    /// [`DataSet::output_at_time`] assumes it.
    pub fn add_output(&mut self, output: Output) {
        debug_assert!(
            self.time_varying || self.outputs.is_empty(),
            "static dataset holds a single output"
        );
        self.outputs.push(output);
    }

    pub fn outputs(&self) -> &[Output] {
        &self.outputs
    }

    pub fn output(&self, index: usize) -> Option<&Output> {
        self.outputs.get(index)
    }

    pub fn n_outputs(&self) -> usize {
        self.outputs.len()
    }

    /// Output times in hours.
    pub fn times(&self) -> Vec<f64> {
        self.outputs.iter().map(|o| o.time).collect()
    }

    /// Output to display at `time` (hours): the last output not later than
    /// `time`. A static dataset always returns its single output.
    pub fn output_at_time(&self, time: f64) -> Option<&Output> {
        if !self.time_varying {
            return self.outputs.first();
        }
        let n_before = self.outputs.partition_point(|o| o.time <= time);
        n_before.checked_sub(1).map(|i| &self.outputs[i])
    }

    /// Recompute the value range over all outputs. Call once after the last
    /// output has been added.
    pub fn update_value_range(&mut self) {
        self.value_range = self
            .outputs
            .iter()
            .filter_map(Output::value_range)
            .reduce(ValueRange::merge);
    }

    /// Value range computed by [`DataSet::update_value_range`].
    pub fn value_range(&self) -> Option<ValueRange> {
        self.value_range
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn depth_series() -> DataSet {
        let mut ds = DataSet::new("run.sww", "Depth", DataSetType::Scalar, true);
        ds.add_output(Output::scalar(0.0, vec![0.5, 1.0], vec![true]));
        ds.add_output(Output::scalar(1.0, vec![-0.5, 3.0], vec![true]));
        ds.add_output(Output::scalar(2.0, vec![0.0, 2.0], vec![false]));
        ds
    }

    #[test]
    fn test_metadata() {
        let ds = depth_series();
        assert_eq!(ds.file_name(), "run.sww");
        assert_eq!(ds.name(), "Depth");
        assert_eq!(ds.data_type(), DataSetType::Scalar);
        assert!(ds.is_time_varying());
        assert_eq!(ds.n_outputs(), 3);
        assert_eq!(ds.times(), vec![0.0, 1.0, 2.0]);
        assert!(ds.output(3).is_none());
    }

    #[test]
    fn test_value_range_after_update() {
        let mut ds = depth_series();
        assert!(ds.value_range().is_none());
        ds.update_value_range();
        assert_eq!(ds.value_range(), Some(ValueRange { min: -0.5, max: 3.0 }));
    }

    #[test]
    fn test_output_at_time() {
        let ds = depth_series();
        assert!(ds.output_at_time(-1.0).is_none());
        assert_eq!(ds.output_at_time(0.0).unwrap().time, 0.0);
        assert_eq!(ds.output_at_time(1.5).unwrap().time, 1.0);
        assert_eq!(ds.output_at_time(10.0).unwrap().time, 2.0);

        let mut bed = DataSet::new("run.sww", "Bed Elevation", DataSetType::Bed, false);
        bed.add_output(Output::scalar(0.0, vec![1.0], vec![true]));
        assert_eq!(bed.output_at_time(-5.0).unwrap().values, vec![1.0]);
    }
}
