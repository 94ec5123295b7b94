//! Human-readable workout reports
//!
//! Field order and the 3-decimal precision of the text line are fixed.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{Result, TrainingError};

/// Computed summary of one workout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// Display name of the workout kind
    pub training_type: String,

    /// Duration in hours
    pub duration: f64,

    /// Distance in kilometers
    pub distance: f64,

    /// Mean speed in km/h
    pub speed: f64,

    /// Calories burned in kcal
    pub calories: f64,
}

impl Report {
    /// Render the fixed-template message line
    pub fn get_message(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Kind: {}; Duration: {:.3} h.; Distance: {:.3} km; Avg speed: {:.3} km/h; Calories: {:.3}.",
            self.training_type, self.duration, self.distance, self.speed, self.calories
        )
    }
}

/// Output format for a batch of reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// One template line per report
    #[default]
    Text,
    /// Pretty-printed JSON array
    Json,
}

/// Render reports in the requested format
pub fn render_reports(reports: &[Report], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(reports
            .iter()
            .map(Report::get_message)
            .collect::<Vec<_>>()
            .join("\n")),
        OutputFormat::Json => serde_json::to_string_pretty(reports)
            .map_err(|e| TrainingError::Serialization(e.to_string())),
    }
}
