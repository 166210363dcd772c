//! Per-timestep snapshot of a dataset.

use crate::mesh::TriMesh;

/// Two-component per-node vector (e.g. momentum).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vector2 {
    pub x: f32,
    pub y: f32,
}

impl Vector2 {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean norm.
    #[inline]
    pub fn length(&self) -> f32 {
        (self.x * self.x + self.y * self.y).sqrt()
    }
}

/// Minimum and maximum of a set of values.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ValueRange {
    pub min: f32,
    pub max: f32,
}

impl ValueRange {
    /// Range over the finite entries of `values`, `None` if there are none.
    pub fn of(values: &[f32]) -> Option<Self> {
        values
            .iter()
            .copied()
            .filter(|v| v.is_finite())
            .fold(None, |acc, v| match acc {
                None => Some(Self { min: v, max: v }),
                Some(r) => Some(r.merge(Self { min: v, max: v })),
            })
    }

    /// Smallest range covering both.
    pub fn merge(self, other: Self) -> Self {
        Self {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }
}

/// One timestep of a dataset.
///
/// `values` and `vectors` have one entry per mesh node, `active` one per
/// element. For vector outputs `values[n]` is the length of `vectors[n]`.
#[derive(Clone, Debug, PartialEq)]
pub struct Output {
    /// Time in hours
    pub time: f64,
    /// Per-node scalar values (magnitude for vector outputs)
    pub values: Vec<f32>,
    /// Per-node vectors, only for vector outputs
    pub vectors: Option<Vec<Vector2>>,
    /// Per-element wet flag
    pub active: Vec<bool>,
}

impl Output {
    /// Scalar output.
    pub fn scalar(time: f64, values: Vec<f32>, active: Vec<bool>) -> Self {
        Self {
            time,
            values,
            vectors: None,
            active,
        }
    }

    /// Vector output. Scalar values are the vector lengths.
    pub fn vector(time: f64, vectors: Vec<Vector2>, active: Vec<bool>) -> Self {
        let values = vectors.iter().map(Vector2::length).collect();
        Self {
            time,
            values,
            vectors: Some(vectors),
            active,
        }
    }

    pub fn is_vector(&self) -> bool {
        self.vectors.is_some()
    }

    /// Number of active elements.
    pub fn n_active(&self) -> usize {
        self.active.iter().filter(|&&a| a).count()
    }

    /// Range of the scalar values.
    pub fn value_range(&self) -> Option<ValueRange> {
        ValueRange::of(&self.values)
    }

    /// Linearly interpolate the scalar value at `(x, y)`.
    ///
    /// Returns `None` outside the mesh and on inactive (dry) elements.
    pub fn value_at(&self, mesh: &TriMesh, x: f64, y: f64) -> Option<f64> {
        let loc = mesh.locate(x, y)?;
        if !self.active.get(loc.element).copied().unwrap_or(false) {
            return None;
        }

        let nodes = mesh.elements()[loc.element].nodes;
        let mut value = 0.0;
        for (w, n) in loc.weights.iter().zip(nodes) {
            value += w * *self.values.get(n)? as f64;
        }
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::{Element, Node};

    #[test]
    fn test_vector_length() {
        assert_eq!(Vector2::new(3.0, 4.0).length(), 5.0);
        assert_eq!(Vector2::default().length(), 0.0);
    }

    #[test]
    fn test_vector_output_magnitude() {
        let out = Output::vector(
            1.5,
            vec![Vector2::new(3.0, 4.0), Vector2::new(-6.0, 8.0)],
            vec![true],
        );
        assert!(out.is_vector());
        assert_eq!(out.values, vec![5.0, 10.0]);
    }

    #[test]
    fn test_value_range_skips_non_finite() {
        let range = ValueRange::of(&[2.0, f32::NAN, -1.0, 7.5]).unwrap();
        assert_eq!(range, ValueRange { min: -1.0, max: 7.5 });
        assert!(ValueRange::of(&[f32::NAN]).is_none());
        assert!(ValueRange::of(&[]).is_none());
    }

    #[test]
    fn test_value_at() {
        let nodes = vec![
            Node::new(0, 0.0, 0.0),
            Node::new(1, 2.0, 0.0),
            Node::new(2, 0.0, 2.0),
        ];
        let mesh = TriMesh::new(nodes, vec![Element::triangle(0, [0, 1, 2])]).unwrap();

        let wet = Output::scalar(0.0, vec![0.0, 2.0, 4.0], vec![true]);
        let v = wet.value_at(&mesh, 1.0, 0.0).unwrap();
        assert!((v - 1.0).abs() < 1e-12);
        let v = wet.value_at(&mesh, 0.5, 0.5).unwrap();
        assert!((v - 1.5).abs() < 1e-12);
        assert!(wet.value_at(&mesh, 5.0, 5.0).is_none());

        let dry = Output::scalar(0.0, vec![0.0, 2.0, 4.0], vec![false]);
        assert!(dry.value_at(&mesh, 0.5, 0.5).is_none());
        assert_eq!(dry.n_active(), 0);
    }
}
