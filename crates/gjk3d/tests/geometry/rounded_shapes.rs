use gjk3d::math::{Isometry, Point, Vector};
use gjk3d::query::{self, gjk::GjkResult};
use gjk3d::shape::{Ball, Cuboid, RoundCuboid, RoundShape};

#[test]
fn touching_balls_become_a_contact() {
    let ball = Ball::new(0.5);
    let pos1 = Isometry::identity();
    let pos2 = Isometry::translation(1.0, 0.0, 0.0);

    let result = query::closest_points(&pos1, &ball, &pos2, &ball);

    assert!(result.hit);
    assert_eq!(result.dist_sq, 0.0);
    assert_eq!(result.point1, Point::new(0.5, 0.0, 0.0));
    assert_eq!(result.point2, result.point1);
}

#[test]
fn separated_balls() {
    let ball1 = Ball::new(0.5);
    let ball2 = Ball::new(1.0);
    let pos1 = Isometry::identity();
    let pos2 = Isometry::translation(0.0, 4.0, 0.0);

    let result = query::closest_points(&pos1, &ball1, &pos2, &ball2);

    assert!(!result.hit);
    // 16 - (0.5 + 1.0)^2
    assert_relative_eq!(result.dist_sq, 13.75, epsilon = 1.0e-5);
    assert_relative_eq!(result.point1, Point::new(0.0, 0.5, 0.0), epsilon = 1.0e-2);
    assert_relative_eq!(result.point2, Point::new(0.0, 3.0, 0.0), epsilon = 1.0e-2);
    assert!(!query::intersection_test(&pos1, &ball1, &pos2, &ball2));
}

#[test]
fn overlapping_balls_intersect() {
    let ball = Ball::new(1.0);
    let pos1 = Isometry::translation(1.0, 1.0, 1.0);
    let pos2 = Isometry::translation(1.5, 1.0, 1.0);

    let result = query::closest_points(&pos1, &ball, &pos2, &ball);

    assert!(result.hit);
    assert_eq!(result.dist_sq, 0.0);
    assert_relative_eq!(result.point1, Point::new(1.25, 1.0, 1.0));
    assert_eq!(query::distance(&pos1, &ball, &pos2, &ball), 0.0);
}

#[test]
fn zero_border_radius_changes_nothing() {
    let cube = Cuboid::new(Vector::new(0.5, 0.5, 0.5));
    let rounded: RoundCuboid = RoundShape::new(cube, 0.0);
    let pos1 = Isometry::identity();
    let pos2 = Isometry::translation(3.0, 2.0, 1.0);

    let plain = query::closest_points(&pos1, &cube, &pos2, &cube);
    let round = query::closest_points(&pos1, &rounded, &pos2, &rounded);

    assert_eq!(plain, round);

    let mut corrected = plain;
    corrected.apply_radii(0.0, 0.0);
    assert_eq!(corrected, plain);
}

#[test]
fn rounded_cuboids_shrink_the_gap() {
    let rounded = RoundShape::new(Cuboid::new(Vector::new(0.5, 0.5, 0.5)), 0.25);
    let pos1 = Isometry::identity();
    let pos2 = Isometry::translation(3.0, 0.0, 0.0);

    let result: GjkResult = query::closest_points(&pos1, &rounded, &pos2, &rounded);

    assert!(!result.hit);
    // The cores are 2 apart and the combined radius is 0.5.
    assert_relative_eq!(result.dist_sq, 3.75, epsilon = 1.0e-5);
    assert_relative_eq!(result.point1.x, 0.75, epsilon = 1.0e-2);
    assert_relative_eq!(result.point2.x, 2.25, epsilon = 1.0e-2);
    assert_relative_eq!(
        query::distance(&pos1, &rounded, &pos2, &rounded),
        1.5,
        epsilon = 1.0e-2
    );
}

#[test]
fn rounded_cuboids_in_contact() {
    let rounded = RoundShape::new(Cuboid::new(Vector::new(0.5, 0.5, 0.5)), 0.6);
    let pos1 = Isometry::identity();
    let pos2 = Isometry::translation(2.0, 0.0, 0.0);

    assert!(query::intersection_test(&pos1, &rounded, &pos2, &rounded));
    assert_eq!(query::distance(&pos1, &rounded, &pos2, &rounded), 0.0);
}
