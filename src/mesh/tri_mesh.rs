//! Unstructured triangular mesh with attached result datasets.
//!
//! The mesh stores:
//! - Node coordinates (world units, origin offset already applied)
//! - Element-node connectivity, three nodes per element in file order
//! - The datasets decoded from the same file, in load order
//!
//! Node ids are their position in file order, element ids likewise.

use thiserror::Error;

use crate::dataset::DataSet;

/// Error type for mesh construction.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MeshError {
    /// An element references a node that does not exist.
    #[error("Element {element} references node {node}, but mesh has {n_nodes} nodes")]
    NodeOutOfRange {
        element: usize,
        node: usize,
        n_nodes: usize,
    },
}

/// Element topology.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum ElementType {
    /// Three-node triangle
    Triangle,
}

/// A mesh node.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Node {
    /// Position in file order (0-based)
    pub id: usize,
    pub x: f64,
    pub y: f64,
}

impl Node {
    pub fn new(id: usize, x: f64, y: f64) -> Self {
        Self { id, x, y }
    }
}

/// A triangular mesh element.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Element {
    /// Position in file order (0-based)
    pub id: usize,
    pub element_type: ElementType,
    /// Node indices, not reordered from the file
    pub nodes: [usize; 3],
}

impl Element {
    pub fn triangle(id: usize, nodes: [usize; 3]) -> Self {
        Self {
            id,
            element_type: ElementType::Triangle,
            nodes,
        }
    }
}

/// Axis-aligned bounding box of the mesh nodes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundingBox {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl BoundingBox {
    /// Width in x.
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    /// Height in y.
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// Check if a point lies inside (inclusive).
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.min_x && x <= self.max_x && y >= self.min_y && y <= self.max_y
    }
}

/// Result of locating a point in the mesh.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointLocation {
    /// Index of the containing element
    pub element: usize,
    /// Barycentric weights for the element's three nodes (sum to 1)
    pub weights: [f64; 3],
}

/// Triangular mesh plus the datasets defined on it.
#[derive(Clone, Debug)]
pub struct TriMesh {
    nodes: Vec<Node>,
    elements: Vec<Element>,
    datasets: Vec<DataSet>,
}

impl TriMesh {
    /// Create a mesh, checking that every element references existing nodes.
    pub fn new(nodes: Vec<Node>, elements: Vec<Element>) -> Result<Self, MeshError> {
        let n_nodes = nodes.len();
        for elem in &elements {
            if let Some(&node) = elem.nodes.iter().find(|&&n| n >= n_nodes) {
                return Err(MeshError::NodeOutOfRange {
                    element: elem.id,
                    node,
                    n_nodes,
                });
            }
        }

        Ok(Self {
            nodes,
            elements,
            datasets: Vec::new(),
        })
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn n_nodes(&self) -> usize {
        self.nodes.len()
    }

    pub fn n_elements(&self) -> usize {
        self.elements.len()
    }

    /// Append a dataset. The mesh takes ownership.
    pub fn add_dataset(&mut self, dataset: DataSet) {
        self.datasets.push(dataset);
    }

    /// Datasets in the order they were added.
    pub fn datasets(&self) -> &[DataSet] {
        &self.datasets
    }

    /// Find a dataset by name.
    pub fn dataset(&self, name: &str) -> Option<&DataSet> {
        self.datasets.iter().find(|ds| ds.name() == name)
    }

    /// Vertex coordinates of element `k`.
    pub fn element_vertices(&self, k: usize) -> [(f64, f64); 3] {
        let nodes = self.elements[k].nodes;
        nodes.map(|n| (self.nodes[n].x, self.nodes[n].y))
    }

    /// Bounding box of all nodes, or `None` for an empty mesh.
    pub fn extent(&self) -> Option<BoundingBox> {
        let first = self.nodes.first()?;
        let init = BoundingBox {
            min_x: first.x,
            min_y: first.y,
            max_x: first.x,
            max_y: first.y,
        };
        Some(self.nodes.iter().fold(init, |b, n| BoundingBox {
            min_x: b.min_x.min(n.x),
            min_y: b.min_y.min(n.y),
            max_x: b.max_x.max(n.x),
            max_y: b.max_y.max(n.y),
        }))
    }

    /// Build vertex-to-element connectivity: `result[v]` lists the elements
    /// containing node `v`, in increasing element order.
    pub fn vertex_to_elements(&self) -> Vec<Vec<usize>> {
        let mut result = vec![Vec::new(); self.nodes.len()];
        for (k, elem) in self.elements.iter().enumerate() {
            for &v in &elem.nodes {
                result[v].push(k);
            }
        }
        result
    }

    /// Locate the element containing `(x, y)` by a linear scan.
    ///
    /// Points on a shared edge resolve to the lowest-numbered element.
    /// Degenerate (zero-area) elements are skipped.
    pub fn locate(&self, x: f64, y: f64) -> Option<PointLocation> {
        const EPS: f64 = 1e-12;

        for k in 0..self.elements.len() {
            let [(x0, y0), (x1, y1), (x2, y2)] = self.element_vertices(k);

            let min_x = x0.min(x1).min(x2);
            let max_x = x0.max(x1).max(x2);
            let min_y = y0.min(y1).min(y2);
            let max_y = y0.max(y1).max(y2);
            if x < min_x || x > max_x || y < min_y || y > max_y {
                continue;
            }

            let det = (y1 - y2) * (x0 - x2) + (x2 - x1) * (y0 - y2);
            if det.abs() < EPS {
                continue;
            }

            let l0 = ((y1 - y2) * (x - x2) + (x2 - x1) * (y - y2)) / det;
            let l1 = ((y2 - y0) * (x - x2) + (x0 - x2) * (y - y2)) / det;
            let l2 = 1.0 - l0 - l1;

            if l0 >= -EPS && l1 >= -EPS && l2 >= -EPS {
                return Some(PointLocation {
                    element: k,
                    weights: [l0, l1, l2],
                });
            }
        }

        None
    }

    /// One-line description of the mesh and its datasets.
    pub fn summary(&self) -> String {
        let names: Vec<&str> = self.datasets.iter().map(|ds| ds.name()).collect();
        format!(
            "Mesh: {} nodes, {} triangles, datasets: [{}]",
            self.nodes.len(),
            self.elements.len(),
            names.join(", ")
        )
    }
}
