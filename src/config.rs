//! Coefficient configuration
//!
//! Per-kind constant tables, loadable from a TOML file so the formulas can be
//! tuned without rebuilding.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::TrainingError;

/// Per-kind constant tables used by the calculators
///
/// Every section is optional in the TOML file; missing fields fall back to
/// the built-in constants.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CoefficientConfig {
    /// Running constants
    pub running: RunningCoefficients,

    /// Race-walking constants
    pub sports_walking: WalkingCoefficients,

    /// Swimming constants
    pub swimming: SwimmingCoefficients,
}

/// Running: `(speed_multiplier * speed + speed_shift) * weight / 1000 * minutes`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunningCoefficients {
    /// Meters per step
    pub step_length_m: f64,
    pub speed_multiplier: f64,
    pub speed_shift: f64,
}

impl Default for RunningCoefficients {
    fn default() -> Self {
        Self {
            step_length_m: 0.65,
            speed_multiplier: 18.0,
            speed_shift: 1.79,
        }
    }
}

/// Race-walking calorie constants
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WalkingCoefficients {
    /// Meters per step
    pub step_length_m: f64,
    pub weight_multiplier: f64,
    pub speed_height_multiplier: f64,
    /// km/h to m/s
    pub kmh_to_ms: f64,
    pub cm_in_m: f64,
}

impl Default for WalkingCoefficients {
    fn default() -> Self {
        Self {
            step_length_m: 0.65,
            weight_multiplier: 0.035,
            speed_height_multiplier: 0.029,
            kmh_to_ms: 0.278,
            cm_in_m: 100.0,
        }
    }
}

/// Swimming: `(speed + speed_shift) * weight_multiplier * weight * hours`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SwimmingCoefficients {
    /// Meters per stroke
    pub step_length_m: f64,
    pub speed_shift: f64,
    pub weight_multiplier: f64,
}

impl Default for SwimmingCoefficients {
    fn default() -> Self {
        Self {
            step_length_m: 1.38,
            speed_shift: 1.1,
            weight_multiplier: 2.0,
        }
    }
}

impl CoefficientConfig {
    /// Load configuration from TOML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config = Self::load_from_string(&content)
            .with_context(|| format!("Invalid config file: {}", path.as_ref().display()))?;

        Ok(config)
    }

    /// Load configuration from a TOML string
    pub fn load_from_string(content: &str) -> crate::Result<Self> {
        let config: CoefficientConfig = toml::from_str(content)
            .map_err(|e| TrainingError::Configuration(format!("Invalid TOML syntax: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Export configuration to a TOML string
    pub fn export_to_string(&self) -> crate::Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| TrainingError::Configuration(format!("Failed to serialize config: {}", e)))
    }

    /// Save configuration to TOML file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        if let Some(parent) = path.as_ref().parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }

        let toml_content = self.export_to_string()?;
        fs::write(&path, toml_content)
            .with_context(|| format!("Failed to write config file: {}", path.as_ref().display()))?;

        Ok(())
    }

    /// Get default configuration file path
    pub fn default_config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".fitcalc")
            .join("config.toml")
    }

    /// Load the default config file, or the built-in constants if it is absent
    pub fn load_or_default() -> Result<Self> {
        Self::load_or_default_from(Self::default_config_path())
    }

    /// Load `path` if it exists; a file that exists but does not parse is an error
    pub fn load_or_default_from<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            tracing::debug!(
                path = %path.display(),
                "No coefficient config file, using defaults"
            );
            return Ok(Self::default());
        }

        Self::load_from_file(path)
    }

    /// Reject constants the formulas cannot work with
    pub fn validate(&self) -> crate::Result<()> {
        let step_lengths = [
            ("running.step_length_m", self.running.step_length_m),
            ("sports_walking.step_length_m", self.sports_walking.step_length_m),
            ("swimming.step_length_m", self.swimming.step_length_m),
        ];
        for (name, value) in step_lengths {
            if !(value.is_finite() && value > 0.0) {
                return Err(TrainingError::Configuration(format!(
                    "{} must be a positive number, got {}",
                    name, value
                )));
            }
        }

        if !(self.sports_walking.cm_in_m.is_finite() && self.sports_walking.cm_in_m > 0.0) {
            return Err(TrainingError::Configuration(format!(
                "sports_walking.cm_in_m must be a positive number, got {}",
                self.sports_walking.cm_in_m
            )));
        }

        let all_finite = [
            self.running.speed_multiplier,
            self.running.speed_shift,
            self.sports_walking.weight_multiplier,
            self.sports_walking.speed_height_multiplier,
            self.sports_walking.kmh_to_ms,
            self.swimming.speed_shift,
            self.swimming.weight_multiplier,
        ]
        .iter()
        .all(|value| value.is_finite());

        if !all_finite {
            return Err(TrainingError::Configuration(
                "calorie coefficients must be finite".to_string(),
            ));
        }

        Ok(())
    }
}
