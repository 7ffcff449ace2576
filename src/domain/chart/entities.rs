use super::value_objects::{ChartKind, Color, Viewport};
use crate::domain::projection::ProjectionSeries;

/// One plotted line: a projection series plus its presentation identity.
#[derive(Debug, Clone, PartialEq)]
pub struct PlottedSeries {
    pub label: String,
    pub color: Color,
    pub series: ProjectionSeries,
}

impl PlottedSeries {
    pub fn new(label: String, color: Color, series: ProjectionSeries) -> Self {
        Self { label, color, series }
    }
}

/// Domain entity - the chart aggregate.
///
/// Holds the currently plotted series (one for most variants, one per
/// included category in the sampler variant) and keeps the viewport in sync
/// with the data. Series are replaced wholesale on every recomputation.
#[derive(Debug, Clone)]
pub struct Chart {
    pub id: String,
    pub kind: ChartKind,
    pub series: Vec<PlottedSeries>,
    pub viewport: Viewport,
}

impl Chart {
    pub fn new(id: String, kind: ChartKind) -> Self {
        Self { id, kind, series: Vec::new(), viewport: Viewport::default() }
    }

    /// Replace all plotted series and refit the viewport.
    pub fn set_series(&mut self, series: Vec<PlottedSeries>) {
        self.series = series;
        self.update_viewport_for_data();
    }

    pub fn has_data(&self) -> bool {
        self.series.iter().any(|plotted| !plotted.series.is_empty())
    }

    pub fn series_count(&self) -> usize {
        self.series.len()
    }

    /// Length of the longest plotted series.
    pub fn point_count(&self) -> usize {
        self.series.iter().map(|plotted| plotted.series.count()).max().unwrap_or(0)
    }

    /// Refit the viewport to the plotted data.
    ///
    /// The value axis is floored at 0 (the original chart pins its y domain
    /// there) and gets 5% headroom above the data maximum. The period axis
    /// spans the union of all series.
    pub fn update_viewport_for_data(&mut self) {
        let mut max_value = f64::NEG_INFINITY;
        let mut start_period = u32::MAX;
        let mut end_period = 0u32;

        for plotted in &self.series {
            if let Some((_, series_max)) = plotted.series.value_range() {
                max_value = max_value.max(series_max);
            }
            if let Some((first, last)) = plotted.series.period_range() {
                start_period = start_period.min(first);
                end_period = end_period.max(last);
            }
        }

        if end_period == 0 {
            return; // no data, keep the previous viewport
        }

        self.viewport.min_value = 0.0;
        self.viewport.max_value = if max_value > 0.0 { max_value * 1.05 } else { 1.0 };
        self.viewport.start_period = f64::from(start_period);
        self.viewport.end_period = f64::from(end_period);
    }
}
