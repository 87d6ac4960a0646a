use approx::assert_relative_eq;
use decomp3d::math::{Point, Real};
use decomp3d::mesh::{correct_orientation, signed_volume, weld_vertices, Orientation};
use parry3d::shape::Cuboid;

// Unit cube soup with every triangle wound inward.
fn inward_unit_cube_soup() -> Vec<Point<Real>> {
    let (vertices, indices) = Cuboid::new(na::Vector3::repeat(0.5)).to_trimesh();
    indices
        .iter()
        .flat_map(|idx| [idx[1], idx[0], idx[2]])
        .map(|i| vertices[i as usize])
        .collect()
}

#[test]
fn inward_cube_is_corrected() {
    let mut mesh = weld_vertices(&inward_unit_cube_soup()).unwrap();
    assert_eq!(mesh.vertices().len(), 8);

    let original_volume = signed_volume(&mesh);
    assert_relative_eq!(original_volume, -1.0, epsilon = 1.0e-5);

    assert_eq!(correct_orientation(&mut mesh), Orientation::Flipped);
    assert_relative_eq!(signed_volume(&mesh), original_volume.abs(), epsilon = 1.0e-5);

    // Correcting twice is a no-op.
    let corrected = mesh.clone();
    assert_eq!(correct_orientation(&mut mesh), Orientation::Kept);
    assert_eq!(mesh, corrected);
}

#[test]
fn volume_does_not_depend_on_position() {
    let offset = na::Vector3::new(10.0, -3.0, 7.5);
    let soup: Vec<_> = inward_unit_cube_soup()
        .into_iter()
        .map(|pt| pt + offset)
        .collect();
    let mesh = weld_vertices(&soup).unwrap();
    assert_relative_eq!(mesh.signed_volume(), -1.0, epsilon = 1.0e-3);
}
