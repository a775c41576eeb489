use macroquad::math::Vec3;

use crate::config::ScanConfig;
use crate::edge::find_edge;
use crate::error::{ConfigError, ScanError};
use crate::sample::{cast, dir_from_angle, LineOfSight, ViewCast};

/// Scans a fan of line-of-sight rays around an observer and assembles the
/// visible-region boundary.
///
/// One `scan` call runs to completion: `trace_count` raw rays plus up to
/// `(trace_count - 1) * edge_resolve_iterations` refinement rays. All
/// per-pass state lives in the call frame, so successive scans cannot
/// observe each other.
pub struct VisibilityScanner<Q: LineOfSight> {
    config: ScanConfig,
    sight: Q,
}

impl<Q: LineOfSight> VisibilityScanner<Q> {
    pub fn new(config: ScanConfig, sight: Q) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config, sight })
    }

    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    /// Replace the configuration; takes effect on the next scan.
    pub fn set_config(&mut self, config: ScanConfig) -> Result<(), ConfigError> {
        config.validate()?;
        self.config = config;
        Ok(())
    }

    /// Run one scan pass from `position` looking toward `heading_deg`.
    ///
    /// Returns the boundary sequence: the observer position first, then
    /// one point per ray in decreasing angular order, with up to two
    /// refined edge points inserted ahead of a ray whose sample disagrees
    /// with its predecessor. The decreasing sweep keeps the fan winding
    /// consistent for downstream triangulation.
    pub fn scan(&self, position: Vec3, heading_deg: f32) -> Result<Vec<Vec3>, ScanError> {
        let config = &self.config;
        let origin = position + config.location_offset();

        if !origin.is_finite() || config.view_angle == 0.0 || config.view_distance == 0.0 {
            log::warn!(
                "degenerate scan geometry (origin {:?}, view angle {}, view distance {}); \
                 boundary will be collapsed",
                origin,
                config.view_angle,
                config.view_distance
            );
        }

        let step = config.angle_between_traces();
        let mut vertices = Vec::with_capacity(1 + config.trace_count as usize);
        vertices.push(origin);

        let mut previous: Option<ViewCast> = None;
        for i in 0..config.trace_count {
            let angle = config.view_angle / 2.0 + heading_deg + config.rotation_offset
                - step * i as f32;
            let sample = cast(&self.sight, origin, angle, config.view_distance)?;

            if let Some(prev) = previous {
                let distance_jump =
                    (prev.distance - sample.distance).abs() > config.edge_dist_threshold;
                if prev.blocked != sample.blocked
                    || (prev.blocked && sample.blocked && distance_jump)
                {
                    let (near, far) = find_edge(
                        &self.sight,
                        origin,
                        config.view_distance,
                        config.edge_dist_threshold,
                        config.edge_resolve_iterations,
                        &prev,
                        &sample,
                    )?;
                    if let Some(point) = near {
                        vertices.push(point);
                    }
                    if let Some(point) = far {
                        vertices.push(point);
                    }
                }
            }

            if sample.blocked {
                vertices.push(sample.point);
            } else {
                vertices.push(origin + dir_from_angle(angle) * config.view_distance);
            }
            previous = Some(sample);
        }

        Ok(vertices)
    }
}
