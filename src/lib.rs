pub mod config;
pub mod edge;
pub mod error;
pub mod mesh;
pub mod sample;
pub mod scanner;
pub mod scene;

pub use config::ScanConfig;
pub use error::{ConfigError, ScanError, SightError};
pub use sample::{LineOfSight, SightHit, ViewCast};
pub use scanner::VisibilityScanner;
pub use scene::{Scene, Wall};
