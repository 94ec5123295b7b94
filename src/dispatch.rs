//! Sensor package dispatch
//!
//! Binds a workout code and its positional values to the matching
//! calculator. Values are bound in declaration order: action count,
//! duration, weight, then the kind-specific extras.

use tracing::{debug, warn};

use crate::config::CoefficientConfig;
use crate::error::{Result, TrainingError};
use crate::models::{Package, WorkoutCode, WorkoutRecord};
use crate::training::{Running, SportsWalking, Swimming, Training};

/// Build a calculator with the built-in coefficients
pub fn read_package(code: &str, data: &[f64]) -> Result<Training> {
    read_package_with(&CoefficientConfig::default(), code, data)
}

/// Build a calculator with the given coefficient tables
pub fn read_package_with(config: &CoefficientConfig, code: &str, data: &[f64]) -> Result<Training> {
    let workout_code = code.parse::<WorkoutCode>().map_err(|e| {
        warn!(code, "Unrecognized workout code");
        e
    })?;

    let training = match (workout_code, data) {
        (WorkoutCode::Run, &[action, duration, weight]) => Training::Running(
            Running::with_coefficients(record(action, duration, weight), config.running),
        ),
        (WorkoutCode::Wlk, &[action, duration, weight, height]) => {
            Training::SportsWalking(SportsWalking::with_coefficients(
                record(action, duration, weight),
                height,
                config.sports_walking,
            ))
        }
        (WorkoutCode::Swm, &[action, duration, weight, pool_length, pool_laps]) => {
            Training::Swimming(Swimming::with_coefficients(
                record(action, duration, weight),
                pool_length,
                to_count(pool_laps),
                config.swimming,
            ))
        }
        (workout_code, data) => {
            warn!(
                code = workout_code.as_str(),
                expected = workout_code.arity(),
                actual = data.len(),
                "Sensor package has the wrong number of values"
            );
            return Err(TrainingError::ArityMismatch {
                code: workout_code.as_str().to_string(),
                expected: workout_code.arity(),
                actual: data.len(),
            });
        }
    };

    debug!(code = workout_code.as_str(), values = data.len(), "Dispatched sensor package");
    Ok(training)
}

impl Package {
    /// Dispatch this package with the given coefficient tables
    pub fn read(&self, config: &CoefficientConfig) -> Result<Training> {
        read_package_with(config, &self.code, &self.data)
    }
}

fn record(action: f64, duration: f64, weight: f64) -> WorkoutRecord {
    WorkoutRecord::new(to_count(action), duration, weight)
}

// Truncates toward zero; `as` saturates out-of-range values and maps NaN to 0.
fn to_count(value: f64) -> u32 {
    value as u32
}
