use crate::domain::errors::ValidationError;
use derive_more::{Constructor, Deref, DerefMut, Display, From, Into};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Value Object - projected magnitude of a single period
#[derive(Debug, Clone, Copy, PartialEq, From, Into, Deref, DerefMut, Constructor, Serialize, Deserialize)]
pub struct ProjectionValue(f64);

impl ProjectionValue {
    pub fn value(&self) -> f64 {
        self.0
    }
}

impl PartialOrd for ProjectionValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.0.partial_cmp(&other.0)
    }
}

/// Value Object - signed fractional effect of one adjustment (e.g. +0.05)
#[derive(Debug, Clone, Copy, PartialEq, From, Into, Deref, DerefMut, Constructor, Serialize, Deserialize)]
pub struct Effect(f64);

impl Effect {
    pub fn value(&self) -> f64 {
        self.0
    }

    pub fn is_positive(&self) -> bool {
        self.0 > 0.0
    }
}

/// Value Object - 1-based position on the x-axis ("year" in the UI)
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, From, Into, Deref, DerefMut, Constructor, Serialize, Deserialize,
)]
pub struct PeriodIndex(u32);

impl PeriodIndex {
    pub fn value(&self) -> u32 {
        self.0
    }
}

/// Value Object - adjustment identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deref, DerefMut, Display, Serialize, Deserialize)]
#[display(fmt = "{}", _0)]
pub struct AdjustmentId(String);

impl AdjustmentId {
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl From<&str> for AdjustmentId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for AdjustmentId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Value Object - number of plotted periods.
///
/// Always at least 1. Raw input is validated with [`PeriodCount::new`] at the
/// boundary; UI mutations go through [`PeriodCount::clamped`] so an
/// out-of-range count never reaches the calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PeriodCount(u32);

impl PeriodCount {
    pub fn new(count: u32) -> Result<Self, ValidationError> {
        if count == 0 {
            return Err(ValidationError::InvalidPeriodCount(
                "period count must be at least 1".to_string(),
            ));
        }
        Ok(Self(count))
    }

    /// Clamp a candidate count into `[min, max]`, never below 1.
    pub fn clamped(candidate: i64, min: u32, max: u32) -> Self {
        let floor = i64::from(min.max(1));
        let ceil = i64::from(max).max(floor);
        Self(candidate.clamp(floor, ceil) as u32)
    }

    pub fn get(&self) -> u32 {
        self.0
    }
}

/// Value Object - starting magnitude of the series before growth.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct BaseScale(f64);

impl BaseScale {
    pub fn new(scale: f64) -> Result<Self, ValidationError> {
        if !scale.is_finite() {
            return Err(ValidationError::InvalidBaseScale(
                "base scale must be finite".to_string(),
            ));
        }
        if scale < 0.0 {
            return Err(ValidationError::InvalidBaseScale(format!(
                "base scale must be non-negative, got {scale}"
            )));
        }
        Ok(Self(scale))
    }

    /// Clamp a candidate scale into `[min, max]`; non-finite input lands on `min`.
    pub fn clamped(candidate: f64, min: f64, max: f64) -> Self {
        if !candidate.is_finite() {
            return Self(min.max(0.0));
        }
        let ceil = max.max(min);
        Self(candidate.clamp(min.max(0.0), ceil))
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

/// Value Object - the bounded inputs of one projection run.
///
/// Invalid combinations are unrepresentable: both fields validate or clamp at
/// construction, so the calculator itself never checks its input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesParameters {
    period_count: PeriodCount,
    base_scale: BaseScale,
}

impl SeriesParameters {
    pub fn new(period_count: PeriodCount, base_scale: BaseScale) -> Self {
        Self { period_count, base_scale }
    }

    /// Validate raw, untrusted input (the WASM boundary).
    pub fn from_raw(period_count: u32, base_scale: f64) -> Result<Self, ValidationError> {
        Ok(Self { period_count: PeriodCount::new(period_count)?, base_scale: BaseScale::new(base_scale)? })
    }

    pub fn period_count(&self) -> PeriodCount {
        self.period_count
    }

    pub fn base_scale(&self) -> BaseScale {
        self.base_scale
    }
}
