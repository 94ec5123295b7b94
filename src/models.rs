use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::TrainingError;

/// Workout kinds understood by the sensor packages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WorkoutCode {
    /// Running, `RUN`
    #[serde(rename = "RUN")]
    Run,
    /// Race-walking, `WLK`
    #[serde(rename = "WLK")]
    Wlk,
    /// Pool swimming, `SWM`
    #[serde(rename = "SWM")]
    Swm,
}

impl WorkoutCode {
    pub const ALL: [WorkoutCode; 3] = [WorkoutCode::Run, WorkoutCode::Wlk, WorkoutCode::Swm];

    /// Short code as it appears in sensor packages
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkoutCode::Run => "RUN",
            WorkoutCode::Wlk => "WLK",
            WorkoutCode::Swm => "SWM",
        }
    }

    /// Number of positional values a package of this kind carries
    pub fn arity(&self) -> usize {
        match self {
            WorkoutCode::Run => 3,
            WorkoutCode::Wlk => 4,
            WorkoutCode::Swm => 5,
        }
    }

    /// Display name used in reports
    pub fn training_type(&self) -> &'static str {
        match self {
            WorkoutCode::Run => "Running",
            WorkoutCode::Wlk => "SportsWalking",
            WorkoutCode::Swm => "Swimming",
        }
    }
}

impl fmt::Display for WorkoutCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WorkoutCode {
    type Err = TrainingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "RUN" => Ok(WorkoutCode::Run),
            "WLK" => Ok(WorkoutCode::Wlk),
            "SWM" => Ok(WorkoutCode::Swm),
            other => Err(TrainingError::UnrecognizedKind {
                code: other.to_string(),
            }),
        }
    }
}

/// Raw inputs shared by every workout kind
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WorkoutRecord {
    /// Steps for running/walking, strokes for swimming
    pub action_count: u32,

    /// Session duration in hours
    pub duration_hours: f64,

    /// Athlete mass in kilograms
    pub weight_kg: f64,
}

impl WorkoutRecord {
    pub fn new(action_count: u32, duration_hours: f64, weight_kg: f64) -> Self {
        Self {
            action_count,
            duration_hours,
            weight_kg,
        }
    }
}

/// One sensor package: a workout code and its positional values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Package {
    /// Workout code, kept as received so unknown codes can be reported
    pub code: String,

    /// Values in declaration order: action, duration, weight, then kind extras
    pub data: Vec<f64>,
}

impl Package {
    pub fn new(code: impl Into<String>, data: Vec<f64>) -> Self {
        Self {
            code: code.into(),
            data,
        }
    }

    /// Reference packages replayed by the `demo` command
    pub fn demo_packages() -> Vec<Package> {
        vec![
            Package::new("SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0]),
            Package::new("RUN", vec![15000.0, 1.0, 75.0]),
            Package::new("WLK", vec![9000.0, 1.0, 75.0, 180.0]),
        ]
    }
}
