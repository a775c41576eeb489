mod common;

use std::cell::{Cell, RefCell};

use common::{frontal_wall, open_field, surrounding_wall, test_config, trace_angle};
use fovscan::{ScanConfig, SightError, SightHit, VisibilityScanner};
use macroquad::math::{vec3, Vec3};

#[test]
fn zero_iterations_never_inserts_points() {
    // The frontal wall produces two discontinuities, but with no
    // refinement iterations the boundary stays at one point per ray.
    let scanner =
        VisibilityScanner::new(test_config(5, 120.0, 0), frontal_wall(15.0, 50.0)).unwrap();
    let boundary = scanner.scan(Vec3::ZERO, 0.0).unwrap();
    assert_eq!(boundary.len(), 6);
}

#[test]
fn first_point_is_observer_position() {
    let scanner = VisibilityScanner::new(test_config(8, 90.0, 3), open_field()).unwrap();
    let position = vec3(12.5, -3.0, 0.0);
    let boundary = scanner.scan(position, 42.0).unwrap();
    assert_eq!(boundary[0], position);
}

#[test]
fn location_offset_shifts_scan_origin() {
    let config = ScanConfig {
        offset_x: 10.0,
        offset_y: -5.0,
        offset_z: 2.0,
        ..test_config(4, 90.0, 0)
    };
    let scanner = VisibilityScanner::new(config, open_field()).unwrap();
    let boundary = scanner.scan(vec3(100.0, 100.0, 0.0), 0.0).unwrap();
    assert_eq!(boundary[0], vec3(110.0, 95.0, 2.0));
}

#[test]
fn repeated_scans_are_identical() {
    let scanner =
        VisibilityScanner::new(test_config(16, 120.0, 5), frontal_wall(20.0, 40.0)).unwrap();
    let first = scanner.scan(Vec3::ZERO, 5.0).unwrap();
    let second = scanner.scan(Vec3::ZERO, 5.0).unwrap();
    assert_eq!(first, second);
}

#[test]
fn raw_sample_angles_cover_the_fan_exactly() {
    let angles = RefCell::new(Vec::new());
    let recording = |start: Vec3, end: Vec3| -> Result<SightHit, SightError> {
        angles.borrow_mut().push(trace_angle(start, end));
        Ok(SightHit {
            blocked: false,
            distance: end.distance(start),
            point: end,
        })
    };

    let heading = 10.0;
    let scanner = VisibilityScanner::new(test_config(4, 90.0, 0), recording).unwrap();
    scanner.scan(Vec3::ZERO, heading).unwrap();
    drop(scanner);

    let recorded = angles.into_inner();
    let expected = [55.0, 25.0, -5.0, -35.0];
    assert_eq!(recorded.len(), expected.len());
    for (got, want) in recorded.iter().zip(expected) {
        assert!(
            (got - want).abs() < 1e-3,
            "sampled angle {} does not match expected {}",
            got,
            want
        );
    }
}

#[test]
fn blocked_pair_within_threshold_triggers_nothing() {
    // Every ray blocked at the same distance: no blocked-state change and
    // no distance jump, so exactly N queries and N+1 points.
    let count = Cell::new(0u32);
    let wall = surrounding_wall(50.0);
    let counting = |start: Vec3, end: Vec3| {
        count.set(count.get() + 1);
        wall(start, end)
    };

    let scanner = VisibilityScanner::new(test_config(9, 180.0, 5), counting).unwrap();
    let boundary = scanner.scan(Vec3::ZERO, 0.0).unwrap();
    assert_eq!(boundary.len(), 10);
    assert_eq!(count.get(), 9);
}

#[test]
fn frontal_wall_scenario_produces_two_discontinuities() {
    // Five rays at 60/30/0/-30/-60 degrees; only the middle one hits the
    // wall, so the scan crosses an occlusion boundary twice.
    let count = Cell::new(0u32);
    let wall = frontal_wall(15.0, 50.0);
    let counting = |start: Vec3, end: Vec3| {
        count.set(count.get() + 1);
        wall(start, end)
    };

    let iterations = 5;
    let scanner = VisibilityScanner::new(test_config(5, 120.0, iterations), counting).unwrap();
    let boundary = scanner.scan(Vec3::ZERO, 0.0).unwrap();

    // 5 raw rays plus one refinement search per discontinuity.
    assert_eq!(count.get(), 5 + 2 * iterations);
    assert!(boundary.len() >= 6 && boundary.len() <= 10);

    // The middle ray's own point sits on the wall.
    let on_wall = boundary
        .iter()
        .filter(|p| (p.length() - 50.0).abs() < 0.5)
        .count();
    assert!(on_wall >= 1);
}

#[test]
fn zero_view_distance_collapses_to_observer() {
    let config = ScanConfig {
        view_distance: 0.0,
        ..test_config(6, 120.0, 4)
    };
    let scanner = VisibilityScanner::new(config, open_field()).unwrap();
    let position = vec3(3.0, 4.0, 0.0);
    let boundary = scanner.scan(position, 0.0).unwrap();
    assert_eq!(boundary.len(), 7);
    for point in &boundary {
        assert_eq!(*point, position);
    }
}

#[test]
fn invalid_config_is_rejected_before_scanning() {
    let config = ScanConfig {
        trace_count: 1,
        ..ScanConfig::default()
    };
    assert!(VisibilityScanner::new(config, open_field()).is_err());
}

#[test]
fn failing_query_aborts_the_scan() {
    let failing =
        |_: Vec3, _: Vec3| -> Result<SightHit, SightError> { Err("scene unavailable".into()) };
    let scanner = VisibilityScanner::new(test_config(4, 90.0, 2), failing).unwrap();
    assert!(scanner.scan(Vec3::ZERO, 0.0).is_err());
}

#[test]
fn every_point_stays_within_view_distance() {
    let scanner =
        VisibilityScanner::new(test_config(24, 360.0, 5), frontal_wall(25.0, 30.0)).unwrap();
    let boundary = scanner.scan(Vec3::ZERO, 0.0).unwrap();
    let limit = scanner.config().view_distance + 1e-3;
    for point in boundary.iter().skip(1) {
        assert!(point.length() <= limit);
    }
}
