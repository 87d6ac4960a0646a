use decomp3d::math::{Point, Real, Vector};
use decomp3d::mesh::{weld_vertices, WELD_EPSILON};
use oorandom::Rand32;

fn random_soup(rng: &mut Rand32, num_vertices: u32, num_triangles: usize) -> Vec<Point<Real>> {
    let pool: Vec<_> = (0..num_vertices)
        .map(|_| Point::new(rng.rand_float(), rng.rand_float(), rng.rand_float()) * 10.0)
        .collect();

    (0..num_triangles * 3)
        .map(|_| pool[rng.rand_range(0..num_vertices) as usize])
        .collect()
}

#[test]
fn welding_is_idempotent() {
    let mut rng = Rand32::new(42);

    for _ in 0..10 {
        let soup = random_soup(&mut rng, 30, 100);
        let welded = weld_vertices(&soup).unwrap();
        let rewelded = weld_vertices(&welded.flatten()).unwrap();

        assert!(welded.vertices().len() <= 30);
        assert_eq!(welded.vertices().len(), rewelded.vertices().len());
        assert_eq!(welded.indices(), rewelded.indices());
    }
}

#[test]
fn triangle_count_is_preserved() {
    let mut rng = Rand32::new(7);

    for num_triangles in [0, 1, 17, 250] {
        let soup = random_soup(&mut rng, 12, num_triangles);
        let welded = weld_vertices(&soup).unwrap();
        assert_eq!(welded.num_triangles(), soup.len() / 3);
        assert!(welded.vertices().len() <= soup.len());
    }
}

#[test]
fn welded_mesh_reproduces_the_soup() {
    let mut rng = Rand32::new(1234);
    let soup = random_soup(&mut rng, 20, 40);
    let welded = weld_vertices(&soup).unwrap();
    assert_eq!(welded.flatten(), soup);
}

#[test]
fn jittered_duplicates_are_merged() {
    let corners = [
        Point::new(0.0, 0.0, 0.0),
        Point::new(1.0, 0.0, 0.0),
        Point::new(0.0, 1.0, 0.0),
    ];
    let jitter = Vector::new(WELD_EPSILON * 0.4, -WELD_EPSILON * 0.4, WELD_EPSILON * 0.4);
    let soup: Vec<_> = corners
        .iter()
        .copied()
        .chain(corners.iter().map(|pt| pt + jitter))
        .collect();

    let welded = weld_vertices(&soup).unwrap();
    assert_eq!(welded.vertices(), &corners[..]);
    assert_eq!(welded.indices(), &[[0, 1, 2], [0, 1, 2]]);
}

#[test]
fn distant_vertices_stay_distinct() {
    let offset = Vector::new(0.0, 0.0, WELD_EPSILON * 5.0);
    let a = Point::new(0.25, 0.5, 0.75);
    let b = Point::new(0.5, 0.5, 0.75);
    let c = Point::new(0.5, 0.25, 0.75);

    let welded = weld_vertices(&[a, b, c, a + offset, b + offset, c + offset]).unwrap();
    assert_eq!(welded.vertices().len(), 6);
    assert_eq!(welded.indices(), &[[0, 1, 2], [3, 4, 5]]);
}
