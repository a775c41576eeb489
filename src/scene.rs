use macroquad::math::{vec3, Vec3};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::SightError;
use crate::sample::{LineOfSight, SightHit};

/// An opaque wall segment in the ground plane.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Wall {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
}

impl Wall {
    pub fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Wall { x1, y1, x2, y2 }
    }
}

/// A set of opaque wall segments, usable as the scanner's line-of-sight
/// collaborator. A trace hits the nearest intersected wall.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Scene {
    pub walls: Vec<Wall>,
}

impl Scene {
    pub fn new(walls: Vec<Wall>) -> Self {
        Scene { walls }
    }

    /// Load a scene from a JSON file
    pub fn load(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let contents = fs::read_to_string(path)?;
        let scene: Scene = serde_json::from_str(&contents)?;
        Ok(scene)
    }
}

/// Intersection parameter `t` along `(ox, oy) + t * (dx, dy)` where the
/// trace crosses `wall`, if it does. `t` is in units of the trace vector,
/// so hits within the trace satisfy `t <= 1`.
fn trace_wall_t(ox: f32, oy: f32, dx: f32, dy: f32, wall: &Wall) -> Option<f32> {
    let ex = wall.x2 - wall.x1;
    let ey = wall.y2 - wall.y1;
    let denom = dx * ey - dy * ex;
    if denom.abs() < 1e-12 {
        return None; // Parallel or degenerate
    }
    let qx = wall.x1 - ox;
    let qy = wall.y1 - oy;
    let t = (qx * ey - qy * ex) / denom;
    let u = (qx * dy - qy * dx) / denom;
    if t >= 0.0 && (0.0..=1.0).contains(&u) {
        Some(t)
    } else {
        None
    }
}

impl LineOfSight for Scene {
    fn trace(&self, start: Vec3, end: Vec3) -> Result<SightHit, SightError> {
        let dx = end.x - start.x;
        let dy = end.y - start.y;

        let mut nearest: Option<f32> = None;
        for wall in &self.walls {
            if let Some(t) = trace_wall_t(start.x, start.y, dx, dy, wall) {
                if t <= 1.0 && nearest.map_or(true, |n| t < n) {
                    nearest = Some(t);
                }
            }
        }

        Ok(match nearest {
            Some(t) => {
                let point = vec3(start.x + dx * t, start.y + dy * t, start.z);
                SightHit {
                    blocked: true,
                    distance: point.distance(start),
                    point,
                }
            }
            None => SightHit {
                blocked: false,
                distance: end.distance(start),
                point: end,
            },
        })
    }
}
