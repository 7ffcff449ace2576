use super::entities::{ActiveSelection, AdjustmentCatalog, ProjectionPoint, ProjectionSeries};
use super::value_objects::{PeriodCount, PeriodIndex, ProjectionValue, SeriesParameters};
use serde::{Deserialize, Serialize};

/// Value Object - the linear growth law of a projection.
///
/// The per-period step is `base_step + period_count * per_period`: the step
/// itself depends on how many periods are plotted, so zooming reshapes every
/// point, not just the domain. Observed behavior, deliberately preserved.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GrowthModel {
    pub base_step: f64,
    pub per_period: f64,
}

impl GrowthModel {
    pub fn new(base_step: f64, per_period: f64) -> Self {
        Self { base_step, per_period }
    }

    /// Growth step for a series of `period_count` periods.
    pub fn step_for(&self, period_count: PeriodCount) -> f64 {
        self.base_step + f64::from(period_count.get()) * self.per_period
    }
}

/// Domain service - the projection calculator.
///
/// Pure and deterministic: identical inputs always produce the identical
/// ordered sequence of points. No logging, no side effects.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectionCalculator {
    growth: GrowthModel,
}

impl ProjectionCalculator {
    pub fn new(growth: GrowthModel) -> Self {
        Self { growth }
    }

    pub fn growth(&self) -> GrowthModel {
        self.growth
    }

    /// Compute the projected series for the given parameters and selection.
    ///
    /// Emits exactly `period_count` points with period indices
    /// `1..=period_count` in ascending order. Each unadjusted value
    /// `base_scale + (i - 1) * step` is multiplied by `1 + total_adjustment`.
    pub fn compute(
        &self,
        params: &SeriesParameters,
        selection: &ActiveSelection,
        catalog: &AdjustmentCatalog,
    ) -> ProjectionSeries {
        let multiplier = 1.0 + catalog.total_effect(selection);
        let step = self.growth.step_for(params.period_count());
        let base = params.base_scale().value();

        let points = (1..=params.period_count().get())
            .map(|period| {
                let unadjusted = base + f64::from(period - 1) * step;
                ProjectionPoint::new(
                    PeriodIndex::from(period),
                    ProjectionValue::from(unadjusted * multiplier),
                )
            })
            .collect();

        ProjectionSeries::from_points(points)
    }
}
