//! Round-trip tests against real NetCDF files.
//!
//! Writes small SWW files into a temporary directory and loads them back.
//! Requires the `netcdf` feature.

#![cfg(feature = "netcdf")]

use std::path::Path;

use sww_rs::io::{ContainerReader, NetCdfContainer};
use sww_rs::{LoadErrorKind, SwwError, load_sww};
use tempfile::TempDir;

struct SwwFile {
    n_vertices: usize,
    with_stage: bool,
    with_momentum: bool,
    with_offset: bool,
    integer_offset: bool,
}

impl Default for SwwFile {
    fn default() -> Self {
        Self {
            n_vertices: 3,
            with_stage: true,
            with_momentum: false,
            with_offset: false,
            integer_offset: false,
        }
    }
}

impl SwwFile {
    /// 4 nodes, 2 triangles, 2 timesteps.
    fn write(&self, path: &Path) {
        let mut file = netcdf::create(path).unwrap();

        file.add_dimension("number_of_volumes", 2).unwrap();
        file.add_dimension("number_of_vertices", self.n_vertices).unwrap();
        file.add_dimension("number_of_points", 4).unwrap();
        file.add_dimension("number_of_timesteps", 2).unwrap();

        {
            let mut x = file.add_variable::<f32>("x", &["number_of_points"]).unwrap();
            x.put_values(&[0.0f32, 1.0, 1.0, 0.0], ..).unwrap();
        }
        {
            let mut y = file.add_variable::<f32>("y", &["number_of_points"]).unwrap();
            y.put_values(&[0.0f32, 0.0, 1.0, 1.0], ..).unwrap();
        }
        {
            let mut z = file.add_variable::<f32>("z", &["number_of_points"]).unwrap();
            z.put_values(&[0.0f32, 0.0, 0.0, 0.0], ..).unwrap();
        }
        {
            let volumes: Vec<i32> = if self.n_vertices == 3 {
                vec![0, 1, 2, 0, 2, 3]
            } else {
                vec![0; 2 * self.n_vertices]
            };
            let mut v = file
                .add_variable::<i32>("volumes", &["number_of_volumes", "number_of_vertices"])
                .unwrap();
            v.put_values(&volumes, ..).unwrap();
        }
        {
            let mut t = file.add_variable::<f32>("time", &["number_of_timesteps"]).unwrap();
            t.put_values(&[0.0f32, 1800.0], ..).unwrap();
        }
        if self.with_stage {
            let mut s = file
                .add_variable::<f32>("stage", &["number_of_timesteps", "number_of_points"])
                .unwrap();
            s.put_values(&[0.001f32, 0.001, 0.00005, 0.00005], (0, ..))
                .unwrap();
            s.put_values(&[0.0f32, 0.0, 0.0, 0.5], (1, ..)).unwrap();
        }
        if self.with_momentum {
            for (name, first) in [("xmomentum", 3.0f32), ("ymomentum", 4.0)] {
                let mut m = file
                    .add_variable::<f32>(name, &["number_of_timesteps", "number_of_points"])
                    .unwrap();
                m.put_values(&[first, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0], ..)
                    .unwrap();
            }
        }
        if self.with_offset {
            file.add_attribute("xllcorner", 1000.0f32).unwrap();
            file.add_attribute("yllcorner", 2000.0f32).unwrap();
        }
        if self.integer_offset {
            file.add_attribute("xllcorner", 500i32).unwrap();
            file.add_attribute("yllcorner", vec![300i64, 0]).unwrap();
        }
    }

    fn write_temp(&self) -> (TempDir, std::path::PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("run.sww");
        self.write(&path);
        (dir, path)
    }
}

#[test]
fn test_load_netcdf_file() {
    let (_dir, path) = SwwFile::default().write_temp();
    let mesh = load_sww(&path).unwrap();

    assert_eq!(mesh.n_nodes(), 4);
    assert_eq!(mesh.n_elements(), 2);
    assert_eq!(mesh.datasets().len(), 2);

    let depth = mesh.dataset("Depth").unwrap();
    assert_eq!(depth.n_outputs(), 2);
    assert_eq!(depth.file_name(), path.display().to_string());

    let o0 = depth.output(0).unwrap();
    assert_eq!(o0.values, vec![0.001, 0.001, 0.00005, 0.00005]);
    assert_eq!(o0.active, vec![true, true]);

    // Second step: only node 3 is wet, so only the element using it is active
    let o1 = depth.output(1).unwrap();
    assert_eq!(o1.time, 0.5);
    assert_eq!(o1.values, vec![0.0, 0.0, 0.0, 0.5]);
    assert_eq!(o1.active, vec![false, true]);
}

#[test]
fn test_load_with_momentum_and_offset() {
    let file = SwwFile {
        with_momentum: true,
        with_offset: true,
        ..Default::default()
    };
    let (_dir, path) = file.write_temp();
    let mesh = load_sww(&path).unwrap();

    assert_eq!(mesh.nodes()[2].x, 1001.0);
    assert_eq!(mesh.nodes()[2].y, 2001.0);

    let momentum = mesh.dataset("Momentum").unwrap();
    let o0 = momentum.output(0).unwrap();
    assert_eq!(o0.values[0], 5.0);
    assert_eq!(o0.values[3], 2.0f32.sqrt());
    assert_eq!(
        o0.active,
        mesh.dataset("Depth").unwrap().output(0).unwrap().active
    );
}

#[test]
fn test_container_primitives() {
    let file = SwwFile {
        with_offset: true,
        ..Default::default()
    };
    let (_dir, path) = file.write_temp();
    let container = NetCdfContainer::open(&path).unwrap();

    assert_eq!(container.dimension_len("number_of_points"), Some(4));
    assert_eq!(container.dimension_len("number_of_timesteps"), Some(2));
    assert_eq!(container.dimension_len("nope"), None);
    assert!(container.has_variable("stage"));
    assert!(!container.has_variable("xmomentum"));
    assert_eq!(
        container.read_f32_row("stage", 1).unwrap(),
        vec![0.0, 0.0, 0.0, 0.5]
    );
    assert_eq!(container.read_i32("volumes").unwrap(), vec![0, 1, 2, 0, 2, 3]);
    assert_eq!(container.global_attribute_f64("xllcorner"), Some(1000.0));
    assert_eq!(container.global_attribute_f64("missing"), None);
    assert!(container.read_f32_row("x", 0).is_err());
}

#[test]
fn test_integer_offset_attributes() {
    let file = SwwFile {
        integer_offset: true,
        ..Default::default()
    };
    let (_dir, path) = file.write_temp();
    let mesh = load_sww(&path).unwrap();

    assert_eq!(mesh.nodes()[2].x, 501.0);
    assert_eq!(mesh.nodes()[2].y, 301.0);
}

#[test]
fn test_non_triangular_file() {
    let file = SwwFile {
        n_vertices: 4,
        ..Default::default()
    };
    let (_dir, path) = file.write_temp();
    let err = load_sww(&path).unwrap_err();
    assert!(matches!(err, SwwError::NonTriangular(4)));
    assert_eq!(err.kind(), LoadErrorKind::UnknownFormat);
}

#[test]
fn test_missing_stage_file() {
    let file = SwwFile {
        with_stage: false,
        ..Default::default()
    };
    let (_dir, path) = file.write_temp();
    let err = load_sww(&path).unwrap_err();
    assert!(matches!(err, SwwError::MissingVariable(ref v) if v == "stage"));
}

#[test]
fn test_unreadable_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("not_netcdf.sww");
    std::fs::write(&path, b"plain text, not a container").unwrap();

    let err = load_sww(&path).unwrap_err();
    assert!(matches!(err, SwwError::Open { .. }));
    assert_eq!(err.kind(), LoadErrorKind::UnknownFormat);

    let err = load_sww(dir.path().join("absent.sww")).unwrap_err();
    assert!(matches!(err, SwwError::Open { .. }));
}
