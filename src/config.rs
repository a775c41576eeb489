use macroquad::math::{vec3, Vec3};
use serde::Deserialize;
use std::fs;

use crate::error::ConfigError;

#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub scan: ScanConfig,
    #[serde(default)]
    pub scene: SceneFileConfig,
    #[serde(default)]
    pub visual: VisualConfig,
}

/// Parameters of one scan pass. Immutable while a scan runs; edits take
/// effect on the next pass.
#[derive(Debug, Clone, Deserialize)]
pub struct ScanConfig {
    /// Field-of-view angle in degrees, 0..=360.
    #[serde(default = "default_view_angle")]
    pub view_angle: f32,
    /// Number of rays in the fan, at least 2.
    #[serde(default = "default_trace_count")]
    pub trace_count: u32,
    /// Maximum ray length.
    #[serde(default = "default_view_distance")]
    pub view_distance: f32,
    /// Binary-search iterations per detected discontinuity.
    #[serde(default = "default_edge_resolve_iterations")]
    pub edge_resolve_iterations: u32,
    /// Distance jump between adjacent blocked rays that counts as an edge.
    #[serde(default = "default_edge_dist_threshold")]
    pub edge_dist_threshold: f32,
    #[serde(default)]
    pub offset_x: f32,
    #[serde(default)]
    pub offset_y: f32,
    #[serde(default)]
    pub offset_z: f32,
    /// Added to the observer heading, degrees.
    #[serde(default)]
    pub rotation_offset: f32,
}

#[derive(Debug, Deserialize)]
pub struct SceneFileConfig {
    #[serde(default = "default_scene_path")]
    pub path: String,
}

#[derive(Debug, Deserialize)]
pub struct VisualConfig {
    #[serde(default = "default_bg_r")]
    pub background_r: u8,
    #[serde(default = "default_bg_g")]
    pub background_g: u8,
    #[serde(default = "default_bg_b")]
    pub background_b: u8,
    /// Draw a line from the observer to every boundary point.
    #[serde(default)]
    pub show_rays: bool,
    /// Mark each boundary point with a dot.
    #[serde(default = "default_show_points")]
    pub show_points: bool,
}

// Default values match the reference field-of-view component.
fn default_view_angle() -> f32 { 120.0 }
fn default_trace_count() -> u32 { 120 }
fn default_view_distance() -> f32 { 1000.0 }
fn default_edge_resolve_iterations() -> u32 { 5 }
fn default_edge_dist_threshold() -> f32 { 100.0 }
fn default_scene_path() -> String { "scenes/default_scene.json".to_string() }
fn default_bg_r() -> u8 { 30 }
fn default_bg_g() -> u8 { 30 }
fn default_bg_b() -> u8 { 30 }
fn default_show_points() -> bool { true }

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            view_angle: default_view_angle(),
            trace_count: default_trace_count(),
            view_distance: default_view_distance(),
            edge_resolve_iterations: default_edge_resolve_iterations(),
            edge_dist_threshold: default_edge_dist_threshold(),
            offset_x: 0.0,
            offset_y: 0.0,
            offset_z: 0.0,
            rotation_offset: 0.0,
        }
    }
}

impl Default for SceneFileConfig {
    fn default() -> Self {
        Self {
            path: default_scene_path(),
        }
    }
}

impl Default for VisualConfig {
    fn default() -> Self {
        Self {
            background_r: default_bg_r(),
            background_g: default_bg_g(),
            background_b: default_bg_b(),
            show_rays: false,
            show_points: default_show_points(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scan: ScanConfig::default(),
            scene: SceneFileConfig::default(),
            visual: VisualConfig::default(),
        }
    }
}

impl ScanConfig {
    /// Angular step between adjacent rays of the fan.
    pub fn angle_between_traces(&self) -> f32 {
        self.view_angle / (self.trace_count - 1) as f32
    }

    /// Offset added to the observer position before scanning.
    pub fn location_offset(&self) -> Vec3 {
        vec3(self.offset_x, self.offset_y, self.offset_z)
    }

    /// Reject out-of-range values before any scan runs. Values are never
    /// clamped mid-scan.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.trace_count < 2 {
            return Err(ConfigError::TraceCount(self.trace_count));
        }
        if !self.view_angle.is_finite() || !(0.0..=360.0).contains(&self.view_angle) {
            return Err(ConfigError::ViewAngle(self.view_angle));
        }
        if !self.view_distance.is_finite() || self.view_distance < 0.0 {
            return Err(ConfigError::ViewDistance(self.view_distance));
        }
        if !self.edge_dist_threshold.is_finite() || self.edge_dist_threshold < 0.0 {
            return Err(ConfigError::EdgeThreshold(self.edge_dist_threshold));
        }
        Ok(())
    }
}

impl Config {
    /// Load configuration from file, or use defaults if file doesn't exist
    pub fn load() -> Self {
        match fs::read_to_string("config.toml") {
            Ok(contents) => match toml::from_str(&contents) {
                Ok(config) => {
                    println!("Loaded configuration from config.toml");
                    config
                }
                Err(e) => {
                    eprintln!("Warning: Failed to parse config.toml: {}", e);
                    eprintln!("Using default configuration");
                    Config::default()
                }
            },
            Err(_) => {
                println!("No config.toml found, using default configuration");
                Config::default()
            }
        }
    }
}
