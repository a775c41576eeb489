use thiserror::Error;

/// Rejected [`ScanConfig`](crate::config::ScanConfig) values.
///
/// Reported when a scanner is constructed or a config is re-applied,
/// never mid-scan.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("trace count must be at least 2, got {0}")]
    TraceCount(u32),
    #[error("view angle must be a finite value in 0..=360 degrees, got {0}")]
    ViewAngle(f32),
    #[error("view distance must be finite and non-negative, got {0}")]
    ViewDistance(f32),
    #[error("edge distance threshold must be finite and non-negative, got {0}")]
    EdgeThreshold(f32),
}

/// Error type produced by [`LineOfSight`](crate::sample::LineOfSight)
/// implementations.
pub type SightError = Box<dyn std::error::Error + Send + Sync>;

/// Errors that abort a scan pass. No partial boundary is returned.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("invalid scan configuration")]
    Config(#[from] ConfigError),
    #[error("line-of-sight query failed")]
    Sight(#[source] SightError),
}
