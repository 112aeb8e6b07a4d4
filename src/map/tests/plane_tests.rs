use crate::map::Plane;
use approx::assert_relative_eq;
use nalgebra::Vector3;
use test_case::test_case;

#[test_case(0.0)]
#[test_case(64.0)]
#[test_case(-24.5)]
fn test_flat_plane_height(height: f64) {
    let plane = Plane::flat(height);

    assert!(plane.is_flat());
    assert_relative_eq!(plane.height_at(0.0, 0.0), height);
    assert_relative_eq!(plane.height_at(-512.0, 1024.0), height);
}

#[test]
fn test_triangle_passes_through_points() {
    let p1 = Vector3::new(0.0, 0.0, 0.0);
    let p2 = Vector3::new(128.0, 0.0, 64.0);
    let p3 = Vector3::new(0.0, 128.0, 32.0);
    let plane = Plane::from_triangle(p1, p2, p3);

    for p in [p1, p2, p3] {
        assert_relative_eq!(plane.height_at(p.x, p.y), p.z, epsilon = 1e-9);
    }
    assert_relative_eq!(plane.height_at(64.0, 64.0), 48.0, epsilon = 1e-9);
    assert!(!plane.is_flat());
}

#[test]
fn test_winding_does_not_change_heights() {
    let p1 = Vector3::new(0.0, 0.0, 8.0);
    let p2 = Vector3::new(64.0, 0.0, 16.0);
    let p3 = Vector3::new(0.0, 64.0, 0.0);

    let a = Plane::from_triangle(p1, p2, p3);
    let b = Plane::from_triangle(p1, p3, p2);

    assert_relative_eq!(a.height_at(20.0, 30.0), b.height_at(20.0, 30.0), epsilon = 1e-9);
}

#[test]
fn test_point_and_vectors() {
    let point = Vector3::new(10.0, 10.0, 5.0);
    let plane = Plane::from_point_and_vectors(
        point,
        Vector3::new(0.0, 1.0, 0.0),
        Vector3::new(1.0, 0.0, 0.5),
    );

    assert_relative_eq!(plane.height_at(10.0, 10.0), 5.0, epsilon = 1e-9);
    assert_relative_eq!(plane.height_at(20.0, -40.0), 10.0, epsilon = 1e-9);
}

#[test]
fn test_horizontal_triangle_is_flat() {
    let plane = Plane::from_triangle(
        Vector3::new(0.0, 0.0, 40.0),
        Vector3::new(0.0, 64.0, 40.0),
        Vector3::new(64.0, 0.0, 40.0),
    );

    assert!(plane.is_flat());
    assert_relative_eq!(plane.height_at(1000.0, 1000.0), 40.0, epsilon = 1e-9);
}
