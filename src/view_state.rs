use crate::domain::projection::{BaseScale, PeriodCount, SeriesParameters};

/// View parameters controlling the zoom level (period count) and the
/// vertical base scale.
///
/// This is the mutation boundary: every increment/decrement clamps here, so
/// an out-of-range value never reaches the calculator.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewState {
    period_count: PeriodCount,
    base_scale: BaseScale,
    period_bounds: (u32, u32),
    scale_bounds: (f64, f64),
    scale_step: f64,
}

impl ViewState {
    pub fn new(
        default_period_count: u32,
        base_scale: f64,
        period_bounds: (u32, u32),
        scale_bounds: (f64, f64),
        scale_step: f64,
    ) -> Self {
        Self {
            period_count: PeriodCount::clamped(i64::from(default_period_count), period_bounds.0, period_bounds.1),
            base_scale: BaseScale::clamped(base_scale, scale_bounds.0, scale_bounds.1),
            period_bounds,
            scale_bounds,
            scale_step,
        }
    }

    /// One more plotted period, clamped to the upper bound.
    pub fn zoom_in(&mut self) {
        self.period_count = PeriodCount::clamped(
            i64::from(self.period_count.get()) + 1,
            self.period_bounds.0,
            self.period_bounds.1,
        );
    }

    /// One fewer plotted period, clamped to the lower bound.
    pub fn zoom_out(&mut self) {
        self.period_count = PeriodCount::clamped(
            i64::from(self.period_count.get()) - 1,
            self.period_bounds.0,
            self.period_bounds.1,
        );
    }

    /// Raise the base scale by one step, clamped.
    pub fn scale_up(&mut self) {
        self.base_scale = BaseScale::clamped(
            self.base_scale.value() + self.scale_step,
            self.scale_bounds.0,
            self.scale_bounds.1,
        );
    }

    /// Lower the base scale by one step, clamped.
    pub fn scale_down(&mut self) {
        self.base_scale = BaseScale::clamped(
            self.base_scale.value() - self.scale_step,
            self.scale_bounds.0,
            self.scale_bounds.1,
        );
    }

    /// Replace the base scale (dataset switch), still clamped.
    pub fn set_base_scale(&mut self, scale: f64) {
        self.base_scale = BaseScale::clamped(scale, self.scale_bounds.0, self.scale_bounds.1);
    }

    pub fn period_count(&self) -> PeriodCount {
        self.period_count
    }

    pub fn base_scale(&self) -> BaseScale {
        self.base_scale
    }

    pub fn period_bounds(&self) -> (u32, u32) {
        self.period_bounds
    }

    pub fn scale_bounds(&self) -> (f64, f64) {
        self.scale_bounds
    }

    /// Calculator input derived from the current view.
    pub fn params(&self) -> SeriesParameters {
        SeriesParameters::new(self.period_count, self.base_scale)
    }
}
