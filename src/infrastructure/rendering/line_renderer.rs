use gloo::utils::document;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::config::Theme;
use crate::domain::{
    chart::{Chart, PlottedSeries},
    errors::RenderingError,
    logging::{LogComponent, get_logger},
};

/// Precomputed render data for a single plotted point
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointRenderData {
    pub x: f64,
    pub y: f64,
    pub period: u32,
    pub value: f64,
}

/// Scale parameters shared by the whole render pass
#[derive(Debug, Clone, PartialEq)]
pub struct ScaleParams {
    pub padding: f64,
    pub text_space: f64,
    pub plot_width: f64,
    pub plot_height: f64,
    pub min_value: f64,
    pub max_value: f64,
    pub value_range: f64,
    pub start_period: f64,
    pub period_range: f64,
}

/// A tooltip hit: the nearest plotted point to the cursor.
#[derive(Debug, Clone, PartialEq)]
pub struct HitPoint {
    pub series_label: String,
    pub period: u32,
    pub value: f64,
    pub x: f64,
    pub y: f64,
}

/// Pixel radius within which a point is considered hovered.
const HIT_RADIUS: f64 = 14.0;

/// Canvas 2D line-chart renderer - Infrastructure implementation.
///
/// Coordinate math is precomputed into [`ScaleParams`] and
/// [`PointRenderData`]; drawing is a sequence of passes over that data.
pub struct LineChartRenderer {
    canvas_id: String,
    width: u32,
    height: u32,
    theme: Theme,
    x_label: String,
    y_label: String,
}

impl LineChartRenderer {
    pub fn new(canvas_id: String, width: u32, height: u32, theme: Theme) -> Self {
        Self { canvas_id, width, height, theme, x_label: String::new(), y_label: String::new() }
    }

    /// Axis captions drawn along the bottom and upper-left edges.
    pub fn with_axis_labels(mut self, x_label: &str, y_label: &str) -> Self {
        self.x_label = x_label.to_string();
        self.y_label = y_label.to_string();
        self
    }

    /// Get canvas element and 2d context
    fn canvas_context(&self) -> Result<(HtmlCanvasElement, CanvasRenderingContext2d), RenderingError> {
        let canvas = document()
            .get_element_by_id(&self.canvas_id)
            .ok_or_else(|| RenderingError::CanvasNotFound(self.canvas_id.clone()))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| RenderingError::CanvasNotFound(format!("{} is not a canvas", self.canvas_id)))?;

        canvas.set_width(self.width);
        canvas.set_height(self.height);

        let context = canvas
            .get_context("2d")
            .map_err(|err| RenderingError::ContextUnavailable(format!("{err:?}")))?
            .ok_or_else(|| RenderingError::ContextUnavailable("context is null".to_string()))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| RenderingError::ContextUnavailable("not a 2d context".to_string()))?;

        Ok((canvas, context))
    }

    /// Render the chart: background, grid, axes, then one polyline with dots
    /// per plotted series.
    pub fn render(&self, chart: &Chart) -> Result<(), RenderingError> {
        let start_time = now_ms();
        let (_canvas, context) = self.canvas_context()?;

        context.clear_rect(0.0, 0.0, self.width as f64, self.height as f64);
        context.set_fill_style(&JsValue::from(self.theme.chart_background.to_css_hex()));
        context.fill_rect(0.0, 0.0, self.width as f64, self.height as f64);

        if !chart.has_data() {
            self.render_no_data_message(&context)?;
            return Ok(());
        }

        let params = self.scale_params(chart);

        self.render_grid(&context, chart, &params)?;
        self.render_value_scale(&context, &params)?;
        self.render_period_labels(&context, chart, &params)?;
        self.render_axis_labels(&context, &params)?;

        for plotted in &chart.series {
            let points = self.series_render_data(plotted, &params);
            self.render_series_line(&context, plotted, &points);
            self.render_series_dots(&context, &points);
        }

        let elapsed = now_ms() - start_time;
        get_logger().debug(
            LogComponent::Infrastructure("LineRenderer"),
            &format!("rendered {} series ({} points) in {:.1}ms", chart.series_count(), chart.point_count(), elapsed),
        );

        Ok(())
    }

    /// Compute the scale parameters once per render pass.
    pub fn scale_params(&self, chart: &Chart) -> ScaleParams {
        let padding = 50.0;
        let text_space = 60.0;
        let plot_width = self.width as f64 - padding * 2.0 - text_space;
        let plot_height = self.height as f64 - padding * 2.0;

        let viewport = &chart.viewport;
        ScaleParams {
            padding,
            text_space,
            plot_width,
            plot_height,
            min_value: viewport.min_value,
            max_value: viewport.max_value,
            value_range: viewport.value_span(),
            start_period: viewport.start_period,
            period_range: viewport.period_span(),
        }
    }

    /// Project one (period, value) pair onto the canvas.
    pub fn project_point(&self, period: u32, value: f64, params: &ScaleParams) -> (f64, f64) {
        let x = if params.period_range > 0.0 {
            params.padding
                + params.text_space
                + (f64::from(period) - params.start_period) / params.period_range * params.plot_width
        } else {
            params.padding + params.text_space + params.plot_width / 2.0
        };

        // Invert Y: canvas origin is the top-left corner
        let y = if params.value_range > 0.0 {
            params.padding + (params.max_value - value) / params.value_range * params.plot_height
        } else {
            params.padding + params.plot_height / 2.0
        };

        (x, y)
    }

    /// Precompute render data for every point of a series.
    pub fn series_render_data(&self, plotted: &PlottedSeries, params: &ScaleParams) -> Vec<PointRenderData> {
        plotted
            .series
            .points()
            .iter()
            .map(|point| {
                let period = point.period.value();
                let value = point.value.value();
                let (x, y) = self.project_point(period, value, params);
                PointRenderData { x, y, period, value }
            })
            .collect()
    }

    /// Nearest plotted point within [`HIT_RADIUS`] of the cursor, if any.
    pub fn hit_test(&self, chart: &Chart, mouse_x: f64, mouse_y: f64) -> Option<HitPoint> {
        let params = self.scale_params(chart);
        let mut best: Option<(f64, HitPoint)> = None;

        for plotted in &chart.series {
            for data in self.series_render_data(plotted, &params) {
                let distance_sq = (data.x - mouse_x).powi(2) + (data.y - mouse_y).powi(2);
                if distance_sq > HIT_RADIUS * HIT_RADIUS {
                    continue;
                }
                let closer = best.as_ref().map(|(d, _)| distance_sq < *d).unwrap_or(true);
                if closer {
                    best = Some((
                        distance_sq,
                        HitPoint {
                            series_label: plotted.label.clone(),
                            period: data.period,
                            value: data.value,
                            x: data.x,
                            y: data.y,
                        },
                    ));
                }
            }
        }

        best.map(|(_, hit)| hit)
    }

    fn render_grid(
        &self,
        context: &CanvasRenderingContext2d,
        chart: &Chart,
        params: &ScaleParams,
    ) -> Result<(), RenderingError> {
        context.set_stroke_style(&JsValue::from(self.theme.grid.with_alpha(0.5).to_css_rgba()));
        context.set_line_width(1.0);
        let dash = js_sys::Array::of2(&JsValue::from_f64(3.0), &JsValue::from_f64(3.0));
        context.set_line_dash(&dash).map_err(draw_err)?;

        // Vertical line per period
        let start = chart.viewport.start_period as u32;
        let end = chart.viewport.end_period as u32;
        for period in start..=end {
            let (x, _) = self.project_point(period, params.min_value, params);
            context.begin_path();
            context.move_to(x, params.padding);
            context.line_to(x, params.padding + params.plot_height);
            context.stroke();
        }

        // A handful of horizontal divisions
        let divisions = 5;
        for step in 0..=divisions {
            let y = params.padding + params.plot_height * f64::from(step) / f64::from(divisions);
            context.begin_path();
            context.move_to(params.padding + params.text_space, y);
            context.line_to(params.padding + params.text_space + params.plot_width, y);
            context.stroke();
        }

        context.set_line_dash(&js_sys::Array::new()).map_err(draw_err)?;
        Ok(())
    }

    fn render_value_scale(
        &self,
        context: &CanvasRenderingContext2d,
        params: &ScaleParams,
    ) -> Result<(), RenderingError> {
        context.set_fill_style(&JsValue::from(self.theme.axis_text.to_css_hex()));
        context.set_font("12px Arial");

        let max_text = format!("{:.0}", params.max_value);
        context.fill_text(&max_text, 10.0, params.padding + 5.0).map_err(draw_err)?;

        let mid_text = format!("{:.0}", params.min_value + params.value_range / 2.0);
        context
            .fill_text(&mid_text, 10.0, params.padding + params.plot_height / 2.0)
            .map_err(draw_err)?;

        let min_text = format!("{:.0}", params.min_value);
        context.fill_text(&min_text, 10.0, params.padding + params.plot_height).map_err(draw_err)?;

        Ok(())
    }

    fn render_period_labels(
        &self,
        context: &CanvasRenderingContext2d,
        chart: &Chart,
        params: &ScaleParams,
    ) -> Result<(), RenderingError> {
        context.set_fill_style(&JsValue::from(self.theme.axis_text.to_css_hex()));
        context.set_font("12px Arial");

        let start = chart.viewport.start_period as u32;
        let end = chart.viewport.end_period as u32;
        for period in start..=end {
            let (x, _) = self.project_point(period, params.min_value, params);
            context
                .fill_text(&period.to_string(), x - 4.0, params.padding + params.plot_height + 18.0)
                .map_err(draw_err)?;
        }

        Ok(())
    }

    fn render_axis_labels(
        &self,
        context: &CanvasRenderingContext2d,
        params: &ScaleParams,
    ) -> Result<(), RenderingError> {
        context.set_fill_style(&JsValue::from(self.theme.axis_text.to_css_hex()));
        context.set_font("14px Arial");

        if !self.x_label.is_empty() {
            let x = params.padding + params.text_space + params.plot_width / 2.0 - 20.0;
            context
                .fill_text(&self.x_label, x, self.height as f64 - 12.0)
                .map_err(draw_err)?;
        }

        if !self.y_label.is_empty() {
            context.fill_text(&self.y_label, 10.0, 24.0).map_err(draw_err)?;
        }

        Ok(())
    }

    fn render_series_line(
        &self,
        context: &CanvasRenderingContext2d,
        plotted: &PlottedSeries,
        points: &[PointRenderData],
    ) {
        if points.len() < 2 {
            return;
        }

        context.set_stroke_style(&JsValue::from(plotted.color.to_css_hex()));
        context.set_line_width(3.0);
        context.begin_path();
        context.move_to(points[0].x, points[0].y);
        for data in &points[1..] {
            context.line_to(data.x, data.y);
        }
        context.stroke();
    }

    fn render_series_dots(&self, context: &CanvasRenderingContext2d, points: &[PointRenderData]) {
        context.set_fill_style(&JsValue::from(self.theme.dot.to_css_hex()));
        for data in points {
            context.begin_path();
            let _ = context.arc(data.x, data.y, 4.0, 0.0, std::f64::consts::TAU);
            context.fill();
        }
    }

    fn render_no_data_message(&self, context: &CanvasRenderingContext2d) -> Result<(), RenderingError> {
        context.set_fill_style(&JsValue::from(self.theme.axis_text.to_css_hex()));
        context.set_font("16px Arial");
        context
            .fill_text("No data to plot", 50.0, self.height as f64 / 2.0)
            .map_err(draw_err)?;

        get_logger().warn(LogComponent::Infrastructure("LineRenderer"), "no series data to render");
        Ok(())
    }

    /// Update canvas dimensions
    pub fn set_dimensions(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }
}

fn draw_err(err: JsValue) -> RenderingError {
    RenderingError::DrawFailed(format!("{err:?}"))
}

fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|window| window.performance())
        .map(|performance| performance.now())
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::VariantConfig;
    use crate::domain::chart::{Chart, ChartKind, PlottedSeries};
    use crate::domain::projection::{PeriodIndex, ProjectionPoint, ProjectionSeries, ProjectionValue};

    fn chart_with_values(values: &[f64]) -> Chart {
        let points = values
            .iter()
            .enumerate()
            .map(|(i, value)| ProjectionPoint::new(PeriodIndex::from(i as u32 + 1), ProjectionValue::from(*value)))
            .collect();
        let mut chart = Chart::new("test".to_string(), ChartKind::Line);
        chart.set_series(vec![PlottedSeries::new(
            "Projection".to_string(),
            VariantConfig::boardroom().theme.line,
            ProjectionSeries::from_points(points),
        )]);
        chart
    }

    fn renderer() -> LineChartRenderer {
        LineChartRenderer::new("test".to_string(), 800, 500, VariantConfig::boardroom().theme)
    }

    #[test]
    fn projected_points_ascend_in_x() {
        let chart = chart_with_values(&[100.0, 200.0, 300.0, 400.0]);
        let renderer = renderer();
        let params = renderer.scale_params(&chart);
        let data = renderer.series_render_data(&chart.series[0], &params);

        assert_eq!(data.len(), 4);
        for pair in data.windows(2) {
            assert!(pair[0].x < pair[1].x);
            assert!(pair[0].y > pair[1].y, "larger values must sit higher on canvas");
        }
    }

    #[test]
    fn single_point_is_centered() {
        let chart = chart_with_values(&[100.0]);
        let renderer = renderer();
        let params = renderer.scale_params(&chart);
        let (x, _) = renderer.project_point(1, 100.0, &params);
        assert!((x - (params.padding + params.text_space + params.plot_width / 2.0)).abs() < 1e-9);
    }

    #[test]
    fn hit_test_finds_nearest_point() {
        let chart = chart_with_values(&[100.0, 200.0, 300.0]);
        let renderer = renderer();
        let params = renderer.scale_params(&chart);
        let data = renderer.series_render_data(&chart.series[0], &params);

        let hit = renderer.hit_test(&chart, data[1].x + 3.0, data[1].y - 3.0);
        let hit = hit.expect("cursor next to a dot must hit");
        assert_eq!(hit.period, 2);
        assert!((hit.value - 200.0).abs() < 1e-9);
    }

    #[test]
    fn hit_test_misses_far_from_any_point() {
        let chart = chart_with_values(&[100.0, 200.0, 300.0]);
        let renderer = renderer();
        assert!(renderer.hit_test(&chart, 0.0, 0.0).is_none());
    }
}
