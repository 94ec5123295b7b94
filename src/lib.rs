// Library interface for fitcalc modules
// This allows integration tests and the CLI to access the core functionality

pub mod config;
pub mod dispatch;
pub mod error;
pub mod import;
pub mod logging;
pub mod message;
pub mod models;
pub mod training;

// Re-export commonly used types for convenience
pub use config::{CoefficientConfig, RunningCoefficients, SwimmingCoefficients, WalkingCoefficients};
pub use dispatch::{read_package, read_package_with};
pub use error::{ErrorSeverity, Result, TrainingError};
pub use logging::{LogConfig, LogFormat, LogLevel};
pub use message::{OutputFormat, Report};
pub use models::{Package, WorkoutCode, WorkoutRecord};
pub use training::{Running, SportsWalking, Swimming, Training, WorkoutCalculator};
