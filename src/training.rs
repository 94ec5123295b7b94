//! Workout calculators
//!
//! Each workout kind supplies its own distance, speed and calorie formulas on
//! top of the shared defaults in [`WorkoutCalculator`]. The closed set of
//! kinds produced by the dispatcher is the [`Training`] enum.
//!
//! All arithmetic is `f64` and unrounded; rounding is left to the report
//! formatting. Callers guarantee a strictly positive duration.

use crate::config::{RunningCoefficients, SwimmingCoefficients, WalkingCoefficients};
use crate::error::{Result, TrainingError};
use crate::message::Report;
use crate::models::{WorkoutCode, WorkoutRecord};

/// Meters in a kilometer
pub const M_IN_KM: f64 = 1000.0;

/// Minutes in an hour
pub const MIN_IN_H: f64 = 60.0;

/// Capability shared by every workout calculator
pub trait WorkoutCalculator {
    /// Display name used in the report
    fn training_type(&self) -> &str;

    /// Raw inputs of the session
    fn record(&self) -> &WorkoutRecord;

    /// Meters covered by one step or stroke
    fn step_length_m(&self) -> f64;

    /// Distance in kilometers
    fn distance_km(&self) -> f64 {
        f64::from(self.record().action_count) * self.step_length_m() / M_IN_KM
    }

    /// Mean speed in km/h
    fn mean_speed_kmh(&self) -> f64 {
        self.distance_km() / self.record().duration_hours
    }

    /// Calories burned in kcal
    ///
    /// There is no generic formula; a calculator that does not provide one
    /// fails with [`TrainingError::UnimplementedCalories`].
    fn spent_calories(&self) -> Result<f64> {
        Err(TrainingError::UnimplementedCalories {
            training_type: self.training_type().to_string(),
        })
    }

    /// Compute distance, speed and calories, in that order, into a report
    fn build_report(&self) -> Result<Report> {
        let distance = self.distance_km();
        let speed = self.mean_speed_kmh();
        let calories = self.spent_calories()?;

        tracing::debug!(
            training_type = self.training_type(),
            distance,
            speed,
            calories,
            "Built workout report"
        );

        Ok(Report {
            training_type: self.training_type().to_string(),
            duration: self.record().duration_hours,
            distance,
            speed,
            calories,
        })
    }
}

/// Running
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Running {
    record: WorkoutRecord,
    coefficients: RunningCoefficients,
}

impl Running {
    pub fn new(record: WorkoutRecord) -> Self {
        Self::with_coefficients(record, RunningCoefficients::default())
    }

    pub fn with_coefficients(record: WorkoutRecord, coefficients: RunningCoefficients) -> Self {
        Self {
            record,
            coefficients,
        }
    }
}

impl WorkoutCalculator for Running {
    fn training_type(&self) -> &str {
        WorkoutCode::Run.training_type()
    }

    fn record(&self) -> &WorkoutRecord {
        &self.record
    }

    fn step_length_m(&self) -> f64 {
        self.coefficients.step_length_m
    }

    fn spent_calories(&self) -> Result<f64> {
        let c = &self.coefficients;
        Ok((c.speed_multiplier * self.mean_speed_kmh() + c.speed_shift)
            * self.record.weight_kg
            / M_IN_KM
            * self.record.duration_hours
            * MIN_IN_H)
    }
}

/// Race-walking
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SportsWalking {
    record: WorkoutRecord,
    height_cm: f64,
    coefficients: WalkingCoefficients,
}

impl SportsWalking {
    pub fn new(record: WorkoutRecord, height_cm: f64) -> Self {
        Self::with_coefficients(record, height_cm, WalkingCoefficients::default())
    }

    pub fn with_coefficients(
        record: WorkoutRecord,
        height_cm: f64,
        coefficients: WalkingCoefficients,
    ) -> Self {
        Self {
            record,
            height_cm,
            coefficients,
        }
    }

    pub fn height_cm(&self) -> f64 {
        self.height_cm
    }
}

impl WorkoutCalculator for SportsWalking {
    fn training_type(&self) -> &str {
        WorkoutCode::Wlk.training_type()
    }

    fn record(&self) -> &WorkoutRecord {
        &self.record
    }

    fn step_length_m(&self) -> f64 {
        self.coefficients.step_length_m
    }

    fn spent_calories(&self) -> Result<f64> {
        let c = &self.coefficients;
        let weight = self.record.weight_kg;
        let speed_ms = self.mean_speed_kmh() * c.kmh_to_ms;
        let height_m = self.height_cm / c.cm_in_m;

        Ok((c.weight_multiplier * weight
            + (speed_ms.powi(2) / height_m) * c.speed_height_multiplier * weight)
            * (self.record.duration_hours * MIN_IN_H))
    }
}

/// Pool swimming
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Swimming {
    record: WorkoutRecord,
    pool_length_m: f64,
    pool_laps_count: u32,
    coefficients: SwimmingCoefficients,
}

impl Swimming {
    pub fn new(record: WorkoutRecord, pool_length_m: f64, pool_laps_count: u32) -> Self {
        Self::with_coefficients(
            record,
            pool_length_m,
            pool_laps_count,
            SwimmingCoefficients::default(),
        )
    }

    pub fn with_coefficients(
        record: WorkoutRecord,
        pool_length_m: f64,
        pool_laps_count: u32,
        coefficients: SwimmingCoefficients,
    ) -> Self {
        Self {
            record,
            pool_length_m,
            pool_laps_count,
            coefficients,
        }
    }

    pub fn pool_length_m(&self) -> f64 {
        self.pool_length_m
    }

    pub fn pool_laps_count(&self) -> u32 {
        self.pool_laps_count
    }
}

impl WorkoutCalculator for Swimming {
    fn training_type(&self) -> &str {
        WorkoutCode::Swm.training_type()
    }

    fn record(&self) -> &WorkoutRecord {
        &self.record
    }

    fn step_length_m(&self) -> f64 {
        self.coefficients.step_length_m
    }

    // A stroke is not a fixed-length unit, so speed comes from pool geometry.
    fn mean_speed_kmh(&self) -> f64 {
        self.pool_length_m * f64::from(self.pool_laps_count) / M_IN_KM / self.record.duration_hours
    }

    fn spent_calories(&self) -> Result<f64> {
        let c = &self.coefficients;
        Ok((self.mean_speed_kmh() + c.speed_shift)
            * c.weight_multiplier
            * self.record.weight_kg
            * self.record.duration_hours)
    }
}

/// Closed set of workout kinds returned by the dispatcher
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Training {
    Running(Running),
    SportsWalking(SportsWalking),
    Swimming(Swimming),
}

impl Training {
    /// Workout code this calculator was built for
    pub fn code(&self) -> WorkoutCode {
        match self {
            Training::Running(_) => WorkoutCode::Run,
            Training::SportsWalking(_) => WorkoutCode::Wlk,
            Training::Swimming(_) => WorkoutCode::Swm,
        }
    }

    fn calculator(&self) -> &dyn WorkoutCalculator {
        match self {
            Training::Running(t) => t,
            Training::SportsWalking(t) => t,
            Training::Swimming(t) => t,
        }
    }
}

impl WorkoutCalculator for Training {
    fn training_type(&self) -> &str {
        self.calculator().training_type()
    }

    fn record(&self) -> &WorkoutRecord {
        self.calculator().record()
    }

    fn step_length_m(&self) -> f64 {
        self.calculator().step_length_m()
    }

    fn distance_km(&self) -> f64 {
        self.calculator().distance_km()
    }

    fn mean_speed_kmh(&self) -> f64 {
        self.calculator().mean_speed_kmh()
    }

    fn spent_calories(&self) -> Result<f64> {
        self.calculator().spent_calories()
    }

    fn build_report(&self) -> Result<Report> {
        self.calculator().build_report()
    }
}

impl From<Running> for Training {
    fn from(value: Running) -> Self {
        Training::Running(value)
    }
}

impl From<SportsWalking> for Training {
    fn from(value: SportsWalking) -> Self {
        Training::SportsWalking(value)
    }
}

impl From<Swimming> for Training {
    fn from(value: Swimming) -> Self {
        Training::Swimming(value)
    }
}
