use gjk3d::math::{Isometry, Point, Real, Vector};
use gjk3d::query::gjk::{self, GjkOptions, GjkStatus, GjkStep, VoronoiSimplex};
use gjk3d::query::{self, gjk::CSOPoint};
use gjk3d::shape::Cuboid;

fn unit_cube() -> Cuboid {
    Cuboid::new(Vector::new(0.5, 0.5, 0.5))
}

#[test]
fn separated_unit_cubes() {
    let cube = unit_cube();
    let pos1 = Isometry::identity();
    let pos2 = Isometry::translation(3.0, 0.0, 0.0);

    let result = query::closest_points(&pos1, &cube, &pos2, &cube);

    assert!(!result.hit);
    assert_eq!(result.dist_sq, 4.0);
    assert_eq!(result.point1.x, 0.5);
    assert_eq!(result.point2.x, 2.5);
    assert!(result.niter <= GjkOptions::default().max_iter);
    assert_relative_eq!(query::distance(&pos1, &cube, &pos2, &cube), 2.0);
    assert!(!query::intersection_test(&pos1, &cube, &pos2, &cube));
}

#[test]
fn overlapping_unit_cubes() {
    let cube = unit_cube();
    let pos1 = Isometry::identity();
    let pos2 = Isometry::translation(0.5, 0.0, 0.0);

    let result = query::closest_points(&pos1, &cube, &pos2, &cube);

    assert!(result.hit);
    assert_eq!(result.dist_sq, 0.0);
    assert_eq!(result.point1, result.point2);
    assert_eq!(query::distance(&pos1, &cube, &pos2, &cube), 0.0);
    assert!(query::intersection_test(&pos1, &cube, &pos2, &cube));
}

#[test]
fn nearly_touching_cubes_stay_separated() {
    let cube = unit_cube();
    let pos1 = Isometry::identity();

    for gap in [1.0e-3, 3.0e-4, 1.0e-4] {
        let pos2 = Isometry::translation(1.0 + gap, 0.0, 0.0);
        let result = query::closest_points(&pos1, &cube, &pos2, &cube);

        assert!(!result.hit, "gap: {gap}");
        assert_relative_eq!(result.dist_sq, gap * gap, max_relative = 1.0e-2);
        assert!(!query::intersection_test(&pos1, &cube, &pos2, &cube));
        assert_relative_eq!(
            query::distance(&pos1, &cube, &pos2, &cube),
            gap,
            max_relative = 1.0e-2
        );
    }
}

#[test]
fn symmetric_overlap_stops_on_the_origin() {
    let cube = unit_cube();
    let pos1 = Isometry::identity();
    let pos2 = Isometry::translation(0.5, 0.0, 0.0);
    let mut simplex = VoronoiSimplex::new();

    let result = gjk::closest_points_with_simplex(&pos1, &cube, &pos2, &cube, &mut simplex);

    // The simplex never encloses the origin: it ends on a segment passing through it.
    assert!(!simplex.hit());
    assert_eq!(simplex.len(), 2);
    assert_eq!(simplex.analyze().dist_sq, 0.0);
    assert!(result.hit);
    assert_eq!(result.dist_sq, 0.0);
}

#[test]
fn overlapping_cubes_enclose_the_origin() {
    let cube = unit_cube();
    let pos1 = Isometry::identity();
    let pos2 = Isometry::translation(0.5, 0.2, 0.1);
    let mut simplex = VoronoiSimplex::new();

    let result = gjk::closest_points_with_simplex(&pos1, &cube, &pos2, &cube, &mut simplex);

    assert!(simplex.hit());
    assert_eq!(simplex.len(), 4);
    assert!(result.hit);
    assert_eq!(result.dist_sq, 0.0);
    assert_eq!(result.point1, result.point2);
}

#[test]
fn swapping_the_shapes_swaps_the_closest_points() {
    let cube1 = Cuboid::new(Vector::new(0.5, 1.0, 0.25));
    let cube2 = Cuboid::new(Vector::new(1.5, 0.2, 0.5));
    let pos1 = Isometry::translation(0.1, -0.3, 0.2);
    let pos2 = Isometry::translation(3.0, 2.0, 1.0);

    let res12 = query::closest_points(&pos1, &cube1, &pos2, &cube2);
    let res21 = query::closest_points(&pos2, &cube2, &pos1, &cube1);

    assert!(!res12.hit);
    assert_relative_eq!(res12.dist_sq, res21.dist_sq, epsilon = 1.0e-4);
    assert_relative_eq!(res12.point1, res21.point2, epsilon = 1.0e-4);
    assert_relative_eq!(res12.point2, res21.point1, epsilon = 1.0e-4);
}

#[test]
fn iteration_limit_is_honored() {
    let cube = unit_cube();
    let pos1 = Isometry::identity();
    let pos2 = Isometry::translation(3.0, 2.0, 1.0);
    let mut simplex = VoronoiSimplex::with_options(&GjkOptions::with_max_iter(1));

    let result = gjk::closest_points_with_simplex(&pos1, &cube, &pos2, &cube, &mut simplex);

    assert_eq!(simplex.niter(), 1);
    assert_eq!(result.niter, 1);
    assert!(!result.hit);
    // A single support point over-estimates the distance.
    assert!(result.dist_sq >= 5.0);
}

#[test]
fn best_distance_strictly_decreases() {
    let cube1 = Cuboid::new(Vector::new(1.0, 0.5, 0.25));
    let cube2 = Cuboid::new(Vector::new(0.3, 0.3, 2.0));
    let pos1 = Isometry::identity();
    let pos2 = Isometry::translation(-2.0, 3.0, 0.7);

    let mut simplex = VoronoiSimplex::new();
    let mut dir = Vector::x();
    let mut support = CSOPoint::from_shapes(&pos1, &cube1, &pos2, &cube2, &dir);
    let mut dists = vec![];

    let status = loop {
        match simplex.add_point_and_reduce(support, &mut dir) {
            GjkStep::Continue => {
                dists.push(simplex.closest_dist_sq());
                support = CSOPoint::from_shapes(&pos1, &cube1, &pos2, &cube2, &dir);
            }
            GjkStep::Stop(status) => break status,
        }
    };

    assert_ne!(status, GjkStatus::Enclosed);
    assert_ne!(status, GjkStatus::IterationLimitReached);
    assert!(!simplex.hit());
    assert!(dists.windows(2).all(|w| w[1] < w[0]), "{dists:?}");

    let result = simplex.analyze();
    assert_eq!(result, simplex.analyze());
    // Gaps of 0.7 along x and 2.2 along y; the boxes overlap along z.
    assert_relative_eq!(result.dist_sq, 0.49 + 4.84, epsilon = 1.0e-4);
}

/// The exact squared distance between two axis-aligned boxes, and whether they overlap.
fn aabb_aabb_dist_sq(
    center1: &Point<Real>,
    half1: &Vector<Real>,
    center2: &Point<Real>,
    half2: &Vector<Real>,
) -> (Real, Real) {
    let mut dist_sq = 0.0;
    let mut min_overlap = Real::MAX;

    for i in 0..3 {
        let gap = (center1[i] - center2[i]).abs() - half1[i] - half2[i];
        if gap > 0.0 {
            dist_sq += gap * gap;
        }
        min_overlap = min_overlap.min(-gap);
    }

    (dist_sq, min_overlap)
}

#[test]
fn random_cuboid_pairs_match_the_exact_distance() {
    let mut rng = oorandom::Rand32::new(42);
    let mut rand_range = |min: Real, max: Real| min + (max - min) * rng.rand_float() as Real;

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
        let center1 = Point::new(
            rand_range(-4.0, 4.0),
            rand_range(-4.0, 4.0),
            rand_range(-4.0, 4.0),
        );
        let center2 = Point::new(
            rand_range(-4.0, 4.0),
            rand_range(-4.0, 4.0),
            rand_range(-4.0, 4.0),
        );

        let (expected, min_overlap) = aabb_aabb_dist_sq(&center1, &half1, &center2, &half2);
        let pos1 = Isometry::translation(center1.x, center1.y, center1.z);
        let pos2 = Isometry::translation(center2.x, center2.y, center2.z);
        let result = query::closest_points(
            &pos1,
            &Cuboid::new(half1),
            &pos2,
            &Cuboid::new(half2),
        );

        assert!(result.niter <= GjkOptions::default().max_iter);

        if min_overlap > 1.0e-3 {
            assert!(result.hit, "{center1} {half1} {center2} {half2}");
            assert_eq!(result.dist_sq, 0.0);
            assert_eq!(result.point1, result.point2);
        } else if expected > 1.0e-3 {
            assert!(!result.hit, "{center1} {half1} {center2} {half2}");
            assert!(
                (result.dist_sq - expected).abs() <= 1.0e-3 * (1.0 + expected),
                "{} != {}",
                result.dist_sq,
                expected
            );
            assert_relative_eq!(
                (result.point2 - result.point1).norm_squared(),
                result.dist_sq,
                epsilon = 1.0e-3
            );
        }
    }
}
