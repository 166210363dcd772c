//! NetCDF-backed container (classic and NetCDF-4 files).
//!
//! The file handle is released when the container is dropped, so every exit
//! path of a load closes it exactly once.

use std::path::Path;

use super::container::ContainerReader;
use super::error::SwwError;

/// Read-only NetCDF file.
pub struct NetCdfContainer {
    file: netcdf::File,
    name: String,
}

impl NetCdfContainer {
    /// Open a NetCDF file for reading.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, SwwError> {
        let path = path.as_ref();
        let name = path.display().to_string();
        let file = netcdf::open(path).map_err(|e| SwwError::Open {
            path: name.clone(),
            reason: e.to_string(),
        })?;
        Ok(Self { file, name })
    }

    fn variable(&self, name: &str) -> Result<netcdf::Variable<'_>, SwwError> {
        self.file
            .variable(name)
            .ok_or_else(|| SwwError::MissingVariable(name.to_string()))
    }
}

impl ContainerReader for NetCdfContainer {
    fn source_name(&self) -> &str {
        &self.name
    }

    fn dimension_len(&self, name: &str) -> Option<usize> {
        self.file.dimension(name).map(|d| d.len())
    }

    fn has_variable(&self, name: &str) -> bool {
        self.file.variable(name).is_some()
    }

    fn read_f32(&self, name: &str) -> Result<Vec<f32>, SwwError> {
        self.variable(name)?
            .get_values::<f32, _>(..)
            .map_err(|e| SwwError::read(name, e))
    }

    fn read_i32(&self, name: &str) -> Result<Vec<i32>, SwwError> {
        self.variable(name)?
            .get_values::<i32, _>(..)
            .map_err(|e| SwwError::read(name, e))
    }

    fn read_f32_row(&self, name: &str, row: usize) -> Result<Vec<f32>, SwwError> {
        let var = self.variable(name)?;
        let n_dims = var.dimensions().len();
        if n_dims != 2 {
            return Err(SwwError::read(
                name,
                format!("expected 2 dimensions, found {}", n_dims),
            ));
        }
        var.get_values::<f32, _>((row, ..))
            .map_err(|e| SwwError::read(name, e))
    }

    fn global_attribute_f64(&self, name: &str) -> Option<f64> {
        let value = self.file.attribute(name)?.value().ok()?;
        attribute_as_f64(value)
    }
}

/// Any numeric attribute as `f64`; arrays give their first element.
fn attribute_as_f64(value: netcdf::AttributeValue) -> Option<f64> {
    use netcdf::AttributeValue as A;

    match value {
        A::Double(d) => Some(d),
        A::Float(f) => Some(f as f64),
        A::Longlong(i) => Some(i as f64),
        A::Ulonglong(u) => Some(u as f64),
        A::Int(i) => Some(i as f64),
        A::Uint(u) => Some(u as f64),
        A::Short(s) => Some(s as f64),
        A::Ushort(u) => Some(u as f64),
        A::Schar(c) => Some(c as f64),
        A::Uchar(c) => Some(c as f64),
        A::Doubles(v) => v.first().copied(),
        A::Floats(v) => v.first().map(|&f| f as f64),
        A::Longlongs(v) => v.first().map(|&i| i as f64),
        A::Ulonglongs(v) => v.first().map(|&u| u as f64),
        A::Ints(v) => v.first().map(|&i| i as f64),
        A::Uints(v) => v.first().map(|&u| u as f64),
        A::Shorts(v) => v.first().map(|&s| s as f64),
        A::Ushorts(v) => v.first().map(|&u| u as f64),
        A::Schars(v) => v.first().map(|&c| c as f64),
        A::Uchars(v) => v.first().map(|&c| c as f64),
        _ => None,
    }
}
