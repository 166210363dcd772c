//! Read access to a structured container of named dimensions, variables and
//! global attributes.
//!
//! [`ContainerReader`] is the seam between the SWW decoders and the storage
//! library. [`MemoryContainer`] holds everything in memory and is used for
//! tests, benchmarks and callers that already have decoded arrays.

use std::collections::HashMap;

use super::error::SwwError;

/// Read primitives the SWW decoders need from a container.
///
/// All reads are synchronous. Variables are stored row-major.
pub trait ContainerReader {
    /// Name used to label datasets (usually the file path).
    fn source_name(&self) -> &str;

    /// Length of a dimension, `None` if absent.
    fn dimension_len(&self, name: &str) -> Option<usize>;

    /// Check if a variable exists.
    fn has_variable(&self, name: &str) -> bool;

    /// Read a whole variable as `f32`.
    fn read_f32(&self, name: &str) -> Result<Vec<f32>, SwwError>;

    /// Read a whole variable as `i32`.
    fn read_i32(&self, name: &str) -> Result<Vec<i32>, SwwError>;

    /// Read one row of a 2D variable `[rows, cols]`, i.e. `cols` values
    /// starting at `[row, 0]` with unit stride.
    fn read_f32_row(&self, name: &str, row: usize) -> Result<Vec<f32>, SwwError>;

    /// Numeric global attribute, `None` if absent or not numeric.
    fn global_attribute_f64(&self, name: &str) -> Option<f64>;
}

#[derive(Clone, Debug)]
enum VariableData {
    Float(Vec<f32>),
    Int(Vec<i32>),
}

impl VariableData {
    fn len(&self) -> usize {
        match self {
            VariableData::Float(v) => v.len(),
            VariableData::Int(v) => v.len(),
        }
    }
}

#[derive(Clone, Debug)]
struct MemoryVariable {
    dimensions: Vec<String>,
    data: VariableData,
}

/// In-memory container.
///
/// # Example
///
/// ```
/// use sww_rs::io::{ContainerReader, MemoryContainer};
///
/// let container = MemoryContainer::new("mem.sww")
///     .with_dimension("number_of_points", 3)
///     .with_f32_variable("z", &["number_of_points"], vec![1.0, 2.0, 3.0])
///     .with_global_attribute("xllcorner", 500.0);
///
/// assert_eq!(container.dimension_len("number_of_points"), Some(3));
/// assert_eq!(container.read_f32("z").unwrap(), vec![1.0, 2.0, 3.0]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct MemoryContainer {
    name: String,
    dimensions: HashMap<String, usize>,
    variables: HashMap<String, MemoryVariable>,
    attributes: HashMap<String, f64>,
}

impl MemoryContainer {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Add or replace a dimension.
    pub fn with_dimension(mut self, name: impl Into<String>, len: usize) -> Self {
        self.dimensions.insert(name.into(), len);
        self
    }

    /// Add or replace a float variable over the named dimensions.
    pub fn with_f32_variable(
        mut self,
        name: impl Into<String>,
        dimensions: &[&str],
        data: Vec<f32>,
    ) -> Self {
        self.variables.insert(
            name.into(),
            MemoryVariable {
                dimensions: dimensions.iter().map(|d| d.to_string()).collect(),
                data: VariableData::Float(data),
            },
        );
        self
    }

    /// Add or replace an integer variable over the named dimensions.
    pub fn with_i32_variable(
        mut self,
        name: impl Into<String>,
        dimensions: &[&str],
        data: Vec<i32>,
    ) -> Self {
        self.variables.insert(
            name.into(),
            MemoryVariable {
                dimensions: dimensions.iter().map(|d| d.to_string()).collect(),
                data: VariableData::Int(data),
            },
        );
        self
    }

    /// Add or replace a numeric global attribute.
    pub fn with_global_attribute(mut self, name: impl Into<String>, value: f64) -> Self {
        self.attributes.insert(name.into(), value);
        self
    }

    /// Remove a variable (handy for building damaged inputs).
    pub fn without_variable(mut self, name: &str) -> Self {
        self.variables.remove(name);
        self
    }

    /// Remove a dimension.
    pub fn without_dimension(mut self, name: &str) -> Self {
        self.dimensions.remove(name);
        self
    }

    /// Look up a variable and check its data against its declared shape.
    fn variable(&self, name: &str) -> Result<(&MemoryVariable, Vec<usize>), SwwError> {
        let var = self
            .variables
            .get(name)
            .ok_or_else(|| SwwError::MissingVariable(name.to_string()))?;

        let shape = var
            .dimensions
            .iter()
            .map(|d| {
                self.dimensions
                    .get(d)
                    .copied()
                    .ok_or_else(|| SwwError::read(name, format!("unknown dimension {}", d)))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let expected: usize = shape.iter().product();
        if var.data.len() != expected {
            return Err(SwwError::read(
                name,
                format!("holds {} values, shape {:?} needs {}", var.data.len(), shape, expected),
            ));
        }

        Ok((var, shape))
    }
}

impl ContainerReader for MemoryContainer {
    fn source_name(&self) -> &str {
        &self.name
    }

    fn dimension_len(&self, name: &str) -> Option<usize> {
        self.dimensions.get(name).copied()
    }

    fn has_variable(&self, name: &str) -> bool {
        self.variables.contains_key(name)
    }

    fn read_f32(&self, name: &str) -> Result<Vec<f32>, SwwError> {
        let (var, _) = self.variable(name)?;
        Ok(match &var.data {
            VariableData::Float(v) => v.clone(),
            VariableData::Int(v) => v.iter().map(|&i| i as f32).collect(),
        })
    }

    fn read_i32(&self, name: &str) -> Result<Vec<i32>, SwwError> {
        let (var, _) = self.variable(name)?;
        match &var.data {
            VariableData::Int(v) => Ok(v.clone()),
            VariableData::Float(v) => v
                .iter()
                .map(|&f| {
                    // 2^31 is the first float past i32::MAX
                    if f.fract() == 0.0 && f >= i32::MIN as f32 && f < 2_147_483_648.0 {
                        Ok(f as i32)
                    } else {
                        Err(SwwError::read(name, format!("{} is not an integer", f)))
                    }
                })
                .collect(),
        }
    }

    fn read_f32_row(&self, name: &str, row: usize) -> Result<Vec<f32>, SwwError> {
        let (var, shape) = self.variable(name)?;
        let &[n_rows, n_cols] = shape.as_slice() else {
            return Err(SwwError::read(
                name,
                format!("expected 2 dimensions, found {}", shape.len()),
            ));
        };
        if row >= n_rows {
            return Err(SwwError::read(
                name,
                format!("row {} out of range ({} rows)", row, n_rows),
            ));
        }

        let range = row * n_cols..(row + 1) * n_cols;
        Ok(match &var.data {
            VariableData::Float(v) => v[range].to_vec(),
            VariableData::Int(v) => v[range].iter().map(|&i| i as f32).collect(),
        })
    }

    fn global_attribute_f64(&self, name: &str) -> Option<f64> {
        self.attributes.get(name).copied()
    }
}
