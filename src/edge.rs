use macroquad::math::Vec3;

use crate::error::ScanError;
use crate::sample::{cast, LineOfSight, ViewCast};

/// Binary-search the angular interval between two disagreeing rays to
/// localize the occlusion boundary.
///
/// `min_ray` and `max_ray` are adjacent fan samples whose blocked state
/// differs, or which are both blocked with a distance jump above
/// `threshold`. The search runs for a fixed `iterations` count rather
/// than until convergence, so the per-scan ray budget stays bounded at
/// `trace_count + discontinuities * iterations`.
///
/// Returns the last sample point found on `min_ray`'s side of the
/// boundary and the last on the other side. Either is `None` when that
/// branch of the search was never taken; with `iterations == 0` both are.
pub fn find_edge<Q: LineOfSight>(
    sight: &Q,
    origin: Vec3,
    max_len: f32,
    threshold: f32,
    iterations: u32,
    min_ray: &ViewCast,
    max_ray: &ViewCast,
) -> Result<(Option<Vec3>, Option<Vec3>), ScanError> {
    let mut min_angle = min_ray.angle;
    let mut max_angle = max_ray.angle;
    let mut min_point = None;
    let mut max_point = None;

    for _ in 0..iterations {
        let mid = (min_angle + max_angle) / 2.0;
        let sample = cast(sight, origin, mid, max_len)?;

        // Distance jump is always measured against the original near ray,
        // not the moving bound.
        let discontinuous = (min_ray.distance - sample.distance).abs() > threshold;
        if sample.blocked == min_ray.blocked && !discontinuous {
            min_angle = mid;
            min_point = Some(sample.point);
        } else {
            max_angle = mid;
            max_point = Some(sample.point);
        }
    }

    Ok((min_point, max_point))
}
