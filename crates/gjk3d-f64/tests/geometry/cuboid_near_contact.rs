use gjk3d_f64::math::{Isometry, Vector};
use gjk3d_f64::query;
use gjk3d_f64::shape::Cuboid;

#[test]
fn nearly_touching_cubes_stay_separated() {
    let cube = Cuboid::new(Vector::new(0.5, 0.5, 0.5));
    let pos1 = Isometry::identity();

    for gap in [1.0e-4, 1.0e-7] {
        let pos2 = Isometry::translation(1.0 + gap, 0.0, 0.0);
        let result = query::closest_points(&pos1, &cube, &pos2, &cube);

        assert!(!result.hit, "gap: {gap}");
        assert_relative_eq!(result.dist_sq, gap * gap, max_relative = 1.0e-6);
        assert!(!query::intersection_test(&pos1, &cube, &pos2, &cube));
    }
}

#[test]
fn symmetric_overlap_is_a_contact() {
    let cube = Cuboid::new(Vector::new(0.5, 0.5, 0.5));
    let pos1 = Isometry::identity();
    let pos2 = Isometry::translation(0.5, 0.0, 0.0);

    let result = query::closest_points(&pos1, &cube, &pos2, &cube);

    assert!(result.hit);
    assert_eq!(result.dist_sq, 0.0);
    assert_eq!(result.point1, result.point2);
}

#[test]
fn random_nearly_touching_cuboids() {
    let mut rng = oorandom::Rand64::new(17);
    let mut rand_range = |min: f64, max: f64| min + (max - min) * rng.rand_float();

    for _ in 0..2000 {
        let half1 = Vector::new(
            rand_range(0.1, 2.0),
            rand_range(0.1, 2.0),
            rand_range(0.1, 2.0),
        );
        let half2 = Vector::new(
            rand_range(0.1, 2.0),
            rand_range(0.1, 2.0),
            rand_range(0.1, 2.0),
        );
        let center1 = Vector::new(
            rand_range(-4.0, 4.0),
            rand_range(-4.0, 4.0),
            rand_range(-4.0, 4.0),
        );
        let gap = 10.0f64.powf(rand_range(-7.0, -3.0));
        // Separated along x only, overlapping along y and z.
        let center2 = Vector::new(
            center1.x + half1.x + half2.x + gap,
            center1.y + rand_range(-0.9, 0.9) * (half1.y + half2.y),
            center1.z + rand_range(-0.9, 0.9) * (half1.z + half2.z),
        );
        let expected = center2.x - center1.x - half1.x - half2.x;

        let pos1 = Isometry::translation(center1.x, center1.y, center1.z);
        let pos2 = Isometry::translation(center2.x, center2.y, center2.z);
        let result = query::closest_points(
            &pos1,
            &Cuboid::new(half1),
            &pos2,
            &Cuboid::new(half2),
        );

        assert!(!result.hit, "gap: {gap}");
        assert_relative_eq!(
            result.dist_sq,
            expected * expected,
            max_relative = 1.0e-4
        );
    }
}
