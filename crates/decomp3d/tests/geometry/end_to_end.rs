use decomp3d::config::{ApproximationMode, DecompositionConfig, MaxConvexHulls, PreprocessMode};
use decomp3d::decomposition::{ConvexDecomposition, ConvexHullDecomposer, VhacdDecomposer};
use decomp3d::math::{Point, Real};
use decomp3d::mesh::approx_eq;
use decomp3d::reconstruct::{self, ConvexShape};
use parry3d::shape::{Cuboid, TriMesh};

fn tetrahedron_corners() -> [Point<Real>; 4] {
    [
        Point::new(0.0, 0.0, 0.0),
        Point::new(1.0, 0.0, 0.0),
        Point::new(0.0, 1.0, 0.0),
        Point::new(0.0, 0.0, 1.0),
    ]
}

fn tetrahedron_soup() -> Vec<Point<Real>> {
    let [a, b, c, d] = tetrahedron_corners();
    vec![a, c, b, a, b, d, a, d, c, b, c, d]
}

// Two unit cubes side by side with a third one on top of the first: an L shape.
fn l_shape_soup() -> Vec<Point<Real>> {
    let (vertices, indices) = Cuboid::new(na::Vector3::repeat(0.5)).to_trimesh();
    let offsets = [
        na::Vector3::new(0.0, 0.0, 0.0),
        na::Vector3::new(1.0, 0.0, 0.0),
        na::Vector3::new(0.0, 1.0, 0.0),
    ];

    offsets
        .iter()
        .flat_map(|offset| {
            let vertices = &vertices;
            indices
                .iter()
                .flat_map(|idx| idx.iter())
                .map(move |i| vertices[*i as usize] + offset)
        })
        .collect()
}

fn assert_single_tetrahedron(shapes: &[ConvexShape]) {
    assert_eq!(shapes.len(), 1);
    let points = shapes[0].points();
    assert_eq!(points.len() % 3, 0);

    for corner in tetrahedron_corners() {
        assert!(points.iter().any(|pt| approx_eq(pt, &corner)));
    }
    for pt in points {
        assert!(tetrahedron_corners()
            .iter()
            .any(|corner| approx_eq(pt, corner)));
    }

    let polyhedron = shapes[0].to_polyhedron().unwrap();
    assert_eq!(polyhedron.points().len(), 4);
}

#[test]
fn tetrahedron_gives_a_single_hull() {
    let decomposition = ConvexDecomposition::new(ConvexHullDecomposer);
    let shapes = decomposition
        .convex_decomposition(&tetrahedron_soup(), &DecompositionConfig::default())
        .unwrap();

    assert_single_tetrahedron(&shapes);
    assert_eq!(shapes[0].triangles().count(), 4);
}

#[test]
fn box_approximation() {
    let decomposition = ConvexDecomposition::new(ConvexHullDecomposer);
    let config = DecompositionConfig {
        approximation_mode: ApproximationMode::Box,
        ..DecompositionConfig::default()
    };
    let shapes = decomposition
        .convex_decomposition(&tetrahedron_soup(), &config)
        .unwrap();

    assert_eq!(shapes.len(), 1);
    assert_eq!(shapes[0].points().len(), 12 * 3);
    assert_eq!(shapes[0].to_polyhedron().unwrap().points().len(), 8);
}

#[test]
fn default_pipeline_on_tetrahedron() {
    let decomposition = ConvexDecomposition::default();
    let shapes = decomposition
        .convex_decomposition(&tetrahedron_soup(), &DecompositionConfig::default())
        .unwrap();

    assert_single_tetrahedron(&shapes);
}

#[test]
fn vhacd_with_preprocessing() {
    let decomposition = ConvexDecomposition::new(VhacdDecomposer::default());
    let config = DecompositionConfig {
        preprocess_mode: PreprocessMode::On,
        ..DecompositionConfig::default()
    };
    let shapes = decomposition
        .convex_decomposition(&tetrahedron_soup(), &config)
        .unwrap();

    assert!(!shapes.is_empty());
    for shape in &shapes {
        assert_eq!(shape.points().len() % 3, 0);
        for pt in shape.points() {
            assert!(pt.iter().all(|x| *x >= -1.0e-3 && *x <= 1.0 + 1.0e-3));
        }
    }
}

#[test]
fn vhacd_on_l_shape() {
    let decomposition = ConvexDecomposition::new(VhacdDecomposer::default());
    let config = DecompositionConfig {
        max_convex_hulls: MaxConvexHulls::Limited(4),
        ..DecompositionConfig::default()
    };
    let shapes = decomposition
        .convex_decomposition(&l_shape_soup(), &config)
        .unwrap();

    assert!(!shapes.is_empty());
    assert!(shapes.len() <= 4);
    assert!(reconstruct::compound(&shapes).is_some());
}

#[test]
fn trimesh_input() {
    let (vertices, indices) = Cuboid::new(na::Vector3::new(1.0, 2.0, 3.0)).to_trimesh();
    let trimesh = TriMesh::new(vertices, indices).unwrap();
    let decomposition = ConvexDecomposition::new(ConvexHullDecomposer);
    let shapes = decomposition
        .convex_decomposition_of_trimesh(&trimesh, &DecompositionConfig::default())
        .unwrap();

    assert_eq!(shapes.len(), 1);
    assert_eq!(shapes[0].to_polyhedron().unwrap().points().len(), 8);
}
