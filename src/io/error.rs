use thiserror::Error;

use crate::mesh::MeshError;

/// Status kind reported to callers of a load.
///
/// Every failure of the SWW reader is an unrecognised or damaged file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadErrorKind {
    UnknownFormat,
}

/// Error type for SWW loading.
#[derive(Debug, Error)]
pub enum SwwError {
    /// Container could not be opened
    #[error("Cannot open {path}: {reason}")]
    Open { path: String, reason: String },

    /// Required dimension is absent
    #[error("Missing dimension: {0}")]
    MissingDimension(String),

    /// Required variable is absent
    #[error("Missing variable: {0}")]
    MissingVariable(String),

    /// Elements are not triangles
    #[error("Expected triangular elements, found {0} vertices per element")]
    NonTriangular(usize),

    /// Bulk read failed
    #[error("Failed to read {variable}: {reason}")]
    Read { variable: String, reason: String },

    /// Data read successfully but inconsistent with the schema
    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// Connectivity references nodes outside the mesh
    #[error("Invalid connectivity: {0}")]
    InvalidConnectivity(#[from] MeshError),
}

impl SwwError {
    pub(crate) fn read(variable: &str, reason: impl ToString) -> Self {
        SwwError::Read {
            variable: variable.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Status kind for this error.
    pub fn kind(&self) -> LoadErrorKind {
        LoadErrorKind::UnknownFormat
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_errors_are_unknown_format() {
        let errors = [
            SwwError::MissingDimension("number_of_points".into()),
            SwwError::MissingVariable("stage".into()),
            SwwError::NonTriangular(4),
            SwwError::read("x", "short read"),
            SwwError::InvalidData("bad".into()),
            SwwError::from(MeshError::NodeOutOfRange {
                element: 0,
                node: 9,
                n_nodes: 3,
            }),
        ];
        for err in &errors {
            assert_eq!(err.kind(), LoadErrorKind::UnknownFormat);
        }
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            SwwError::NonTriangular(4).to_string(),
            "Expected triangular elements, found 4 vertices per element"
        );
        assert_eq!(
            SwwError::read("stage", "timestep 3 out of range").to_string(),
            "Failed to read stage: timestep 3 out of range"
        );
    }
}
