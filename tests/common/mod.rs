use fovscan::{ScanConfig, SightError, SightHit};
use macroquad::math::Vec3;

/// Angle (degrees) of a trace direction in the ground plane.
pub fn trace_angle(start: Vec3, end: Vec3) -> f32 {
    let dir = end - start;
    dir.y.atan2(dir.x).to_degrees()
}

/// Query that never hits anything.
pub fn open_field() -> impl Fn(Vec3, Vec3) -> Result<SightHit, SightError> {
    |start: Vec3, end: Vec3| {
        Ok(SightHit {
            blocked: false,
            distance: end.distance(start),
            point: end,
        })
    }
}

/// Query blocked for every direction, always at `hit_dist`.
pub fn surrounding_wall(hit_dist: f32) -> impl Fn(Vec3, Vec3) -> Result<SightHit, SightError> {
    move |start: Vec3, end: Vec3| {
        let dir = (end - start).normalize_or_zero();
        Ok(SightHit {
            blocked: true,
            distance: hit_dist,
            point: start + dir * hit_dist,
        })
    }
}

/// Query blocked only for directions within `half_width_deg` of 0 degrees,
/// hitting at `hit_dist`.
pub fn frontal_wall(
    half_width_deg: f32,
    hit_dist: f32,
) -> impl Fn(Vec3, Vec3) -> Result<SightHit, SightError> {
    move |start: Vec3, end: Vec3| {
        let angle = trace_angle(start, end);
        if angle.abs() < half_width_deg {
            let dir = (end - start).normalize_or_zero();
            Ok(SightHit {
                blocked: true,
                distance: hit_dist,
                point: start + dir * hit_dist,
            })
        } else {
            Ok(SightHit {
                blocked: false,
                distance: end.distance(start),
                point: end,
            })
        }
    }
}

/// Config with small, test-friendly values.
pub fn test_config(trace_count: u32, view_angle: f32, iterations: u32) -> ScanConfig {
    ScanConfig {
        view_angle,
        trace_count,
        view_distance: 100.0,
        edge_resolve_iterations: iterations,
        edge_dist_threshold: 5.0,
        ..ScanConfig::default()
    }
}
