use macroquad::math::{vec3, Vec3};

use crate::error::{ScanError, SightError};

/// Result of one line-of-sight trace between two points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SightHit {
    /// Whether an obstacle was hit before reaching the trace end.
    pub blocked: bool,
    /// Euclidean distance from the trace start to `point`.
    pub distance: f32,
    /// Impact point, or the trace end itself when nothing blocked.
    pub point: Vec3,
}

/// Line-of-sight query collaborator.
///
/// Implementations must ignore the observer's own geometry and be free of
/// side effects: tracing the same pair of points twice within one scan
/// must give the same answer.
pub trait LineOfSight {
    /// Trace from `start` to `end`.
    ///
    /// When nothing blocks the trace, `point` must equal `end` and
    /// `distance` the full trace length. A failure here is fatal for the
    /// scan in progress; it is never treated as "nothing blocked".
    fn trace(&self, start: Vec3, end: Vec3) -> Result<SightHit, SightError>;
}

impl<F> LineOfSight for F
where
    F: Fn(Vec3, Vec3) -> Result<SightHit, SightError>,
{
    fn trace(&self, start: Vec3, end: Vec3) -> Result<SightHit, SightError> {
        self(start, end)
    }
}

/// One sampled ray of the scan fan.
///
/// Created fresh per ray and immutable afterwards; the scan loop keeps at
/// most one of these around as the previous sample for edge comparison.
#[derive(Debug, Clone, Copy)]
pub struct ViewCast {
    pub blocked: bool,
    pub distance: f32,
    pub point: Vec3,
    /// Absolute angle (degrees) the ray was cast at.
    pub angle: f32,
}

/// Unit direction in the ground plane for an angle in degrees.
pub fn dir_from_angle(angle_deg: f32) -> Vec3 {
    let rad = angle_deg.to_radians();
    vec3(rad.cos(), rad.sin(), 0.0)
}

/// Cast a single ray of length `max_len` at `angle_deg` from `origin`.
pub fn cast<Q: LineOfSight>(
    sight: &Q,
    origin: Vec3,
    angle_deg: f32,
    max_len: f32,
) -> Result<ViewCast, ScanError> {
    let end = origin + dir_from_angle(angle_deg) * max_len;
    let hit = sight.trace(origin, end).map_err(ScanError::Sight)?;
    Ok(ViewCast {
        blocked: hit.blocked,
        distance: hit.distance,
        point: hit.point,
        angle: angle_deg,
    })
}
