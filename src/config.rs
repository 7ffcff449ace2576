//! The five page variants collapsed into one configuration table.
//!
//! Every variant runs the same components and the same calculator; only this
//! table differs: theme, bounds, catalog, datasets, categories, and how the
//! description panel renders percentages.

use once_cell::sync::OnceCell;

use crate::domain::chart::Color;
use crate::domain::errors::ConfigurationError;
use crate::domain::projection::{Adjustment, AdjustmentCatalog, AdjustmentId, Effect, GrowthModel};
use crate::domain::state::SimulationState;
use crate::view_state::ViewState;

/// Color theme of one variant. CSS custom properties are generated from
/// these, so components and renderer share a single source of truth.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub page_background: Color,
    pub panel_background: Color,
    pub chart_background: Color,
    pub grid: Color,
    pub axis_text: Color,
    pub line: Color,
    pub dot: Color,
    pub accent: Color,
    pub accent_active: Color,
    pub text: Color,
    pub positive: Color,
    pub negative: Color,
    /// Per-series line colors for multi-series variants, cycled by index.
    pub series: Vec<Color>,
}

impl Theme {
    /// CSS custom properties consumed by the static app stylesheet.
    pub fn css_variables(&self) -> String {
        format!(
            ":root {{\n  --page-bg: {};\n  --panel-bg: {};\n  --chart-bg: {};\n  --grid: {};\n  --axis-text: {};\n  --line: {};\n  --dot: {};\n  --accent: {};\n  --accent-active: {};\n  --text: {};\n  --positive: {};\n  --negative: {};\n}}",
            self.page_background.to_css_hex(),
            self.panel_background.to_css_hex(),
            self.chart_background.to_css_hex(),
            self.grid.to_css_hex(),
            self.axis_text.to_css_hex(),
            self.line.to_css_hex(),
            self.dot.to_css_hex(),
            self.accent.to_css_hex(),
            self.accent_active.to_css_hex(),
            self.text.to_css_hex(),
            self.positive.to_css_hex(),
            self.negative.to_css_hex(),
        )
    }

    /// Line color for the series at `index`, cycling through the palette.
    pub fn series_color(&self, index: usize) -> Color {
        if self.series.is_empty() {
            return self.line;
        }
        self.series[index % self.series.len()]
    }
}

/// How the description panel renders an entry's signed percentage token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DescriptionStyle {
    Plain,
    HighlightedPercent,
}

/// Catalog entry template, static per variant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdjustmentSpec {
    pub id: &'static str,
    pub label: &'static str,
    pub description: &'static str,
    pub effect: f64,
}

impl AdjustmentSpec {
    pub fn to_adjustment(&self) -> Adjustment {
        Adjustment::new(
            AdjustmentId::from(self.id),
            self.label.to_string(),
            self.description.to_string(),
            Effect::from(self.effect),
        )
    }
}

/// A selectable dataset (the `lab` dropdown): its own base scale and growth.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DatasetSpec {
    pub id: &'static str,
    pub label: &'static str,
    pub base_scale: f64,
    pub growth: GrowthModel,
}

/// A sample-data category (the `sampler` checkboxes): plotted as its own
/// line when included.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CategorySpec {
    pub id: &'static str,
    pub label: &'static str,
    pub base_scale: f64,
    pub growth: GrowthModel,
}

/// One page variant, fully described.
#[derive(Debug, Clone, PartialEq)]
pub struct VariantConfig {
    pub name: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub x_label: &'static str,
    pub y_label: &'static str,
    pub theme: Theme,
    pub period_bounds: (u32, u32),
    pub default_period_count: u32,
    pub base_scale: f64,
    /// `Some` makes the base scale user-adjustable within these bounds.
    pub scale_bounds: Option<(f64, f64)>,
    pub scale_step: f64,
    pub growth: GrowthModel,
    pub adjustments: Vec<AdjustmentSpec>,
    pub description_style: DescriptionStyle,
    pub datasets: Vec<DatasetSpec>,
    pub categories: Vec<CategorySpec>,
}

/// The observed three-entry catalog, shared by every variant.
const STANDARD_ADJUSTMENTS: [AdjustmentSpec; 3] = [
    AdjustmentSpec { id: "fix-1", label: "Fire CEO", description: "Description 1: +5% effect", effect: 0.05 },
    AdjustmentSpec { id: "fix-2", label: "Downsizing", description: "Description 2: -3% effect", effect: -0.03 },
    AdjustmentSpec { id: "fix-3", label: "Training", description: "Description 3: +10% effect", effect: 0.10 },
];

const STANDARD_GROWTH: GrowthModel = GrowthModel { base_step: 80.0, per_period: 5.0 };

impl VariantConfig {
    /// The original page: ivory/green palette, 1-10 years, fixed scale 100.
    pub fn boardroom() -> Self {
        Self {
            name: "boardroom",
            title: "Projection Simulator",
            subtitle: "What-if adjustments over a multi-year projection",
            x_label: "Years",
            y_label: "Projection (%)",
            theme: Theme {
                page_background: Color::from_hex(0xEFF2EB), // soft ivory
                panel_background: Color::from_hex(0xEFF2EB),
                chart_background: Color::from_hex(0x052608), // deep green
                grid: Color::from_hex(0xBDF26D),             // lime glow
                axis_text: Color::from_hex(0xEFF2EB),
                line: Color::from_hex(0xBDF26D),
                dot: Color::from_hex(0x76A646), // moss green
                accent: Color::from_hex(0x0554F2),
                accent_active: Color::from_hex(0xBDF26D),
                text: Color::from_hex(0x052608),
                positive: Color::from_hex(0x16A34A),
                negative: Color::from_hex(0xDC2626),
                series: vec![Color::from_hex(0xBDF26D)],
            },
            period_bounds: (1, 10),
            default_period_count: 4,
            base_scale: 100.0,
            scale_bounds: None,
            scale_step: 10.0,
            growth: STANDARD_GROWTH,
            adjustments: STANDARD_ADJUSTMENTS.to_vec(),
            description_style: DescriptionStyle::HighlightedPercent,
            datasets: Vec::new(),
            categories: Vec::new(),
        }
    }

    /// Long-horizon variant: up to 15 years, plain descriptions, navy theme.
    pub fn horizon() -> Self {
        Self {
            name: "horizon",
            title: "Horizon Projection",
            subtitle: "Fifteen-year outlook",
            x_label: "Years",
            y_label: "Projection (%)",
            theme: Theme {
                page_background: Color::from_hex(0x05090F),
                panel_background: Color::from_hex(0x0B111A),
                chart_background: Color::from_hex(0x0D1520),
                grid: Color::from_hex(0x5CB0FF),
                axis_text: Color::from_hex(0xE6EDF7),
                line: Color::from_hex(0x7AC6FF),
                dot: Color::from_hex(0x2563EB),
                accent: Color::from_hex(0x2563EB),
                accent_active: Color::from_hex(0x7AC6FF),
                text: Color::from_hex(0xE6EDF7),
                positive: Color::from_hex(0x3FB68B),
                negative: Color::from_hex(0xF0635C),
                series: vec![Color::from_hex(0x7AC6FF)],
            },
            period_bounds: (1, 15),
            default_period_count: 6,
            base_scale: 100.0,
            scale_bounds: None,
            scale_step: 10.0,
            growth: STANDARD_GROWTH,
            adjustments: STANDARD_ADJUSTMENTS.to_vec(),
            description_style: DescriptionStyle::Plain,
            datasets: Vec::new(),
            categories: Vec::new(),
        }
    }

    /// Short-range variant with a higher fixed base scale.
    pub fn quarterly() -> Self {
        Self {
            name: "quarterly",
            title: "Quarterly Projection",
            subtitle: "Eight quarters ahead",
            x_label: "Quarters",
            y_label: "Projection (%)",
            theme: Theme {
                page_background: Color::from_hex(0xFAF5EC),
                panel_background: Color::from_hex(0xFAF5EC),
                chart_background: Color::from_hex(0x2B1D0E),
                grid: Color::from_hex(0xF7C843),
                axis_text: Color::from_hex(0xFAF5EC),
                line: Color::from_hex(0xF7C843),
                dot: Color::from_hex(0xD97706),
                accent: Color::from_hex(0xD97706),
                accent_active: Color::from_hex(0xF7C843),
                text: Color::from_hex(0x2B1D0E),
                positive: Color::from_hex(0x16A34A),
                negative: Color::from_hex(0xDC2626),
                series: vec![Color::from_hex(0xF7C843)],
            },
            period_bounds: (1, 8),
            default_period_count: 4,
            base_scale: 250.0,
            scale_bounds: None,
            scale_step: 25.0,
            growth: STANDARD_GROWTH,
            adjustments: STANDARD_ADJUSTMENTS.to_vec(),
            description_style: DescriptionStyle::Plain,
            datasets: Vec::new(),
            categories: Vec::new(),
        }
    }

    /// Fully adjustable variant: user-controlled base scale and a dataset
    /// dropdown whose entries carry their own base scale and growth law.
    pub fn lab() -> Self {
        Self {
            name: "lab",
            title: "Projection Lab",
            subtitle: "Adjustable scale and dataset",
            x_label: "Years",
            y_label: "Projection (%)",
            theme: Theme {
                page_background: Color::from_hex(0xF6F2FB),
                panel_background: Color::from_hex(0xF6F2FB),
                chart_background: Color::from_hex(0x140A1E),
                grid: Color::from_hex(0xC084FC),
                axis_text: Color::from_hex(0xF6F2FB),
                line: Color::from_hex(0xC084FC),
                dot: Color::from_hex(0x7C3AED),
                accent: Color::from_hex(0x7C3AED),
                accent_active: Color::from_hex(0xC084FC),
                text: Color::from_hex(0x140A1E),
                positive: Color::from_hex(0x16A34A),
                negative: Color::from_hex(0xDC2626),
                series: vec![Color::from_hex(0xC084FC)],
            },
            period_bounds: (1, 15),
            default_period_count: 5,
            base_scale: 100.0,
            scale_bounds: Some((10.0, 1000.0)),
            scale_step: 10.0,
            growth: STANDARD_GROWTH,
            adjustments: STANDARD_ADJUSTMENTS.to_vec(),
            description_style: DescriptionStyle::HighlightedPercent,
            datasets: vec![
                DatasetSpec {
                    id: "revenue",
                    label: "Revenue",
                    base_scale: 100.0,
                    growth: STANDARD_GROWTH,
                },
                DatasetSpec {
                    id: "costs",
                    label: "Operating Costs",
                    base_scale: 250.0,
                    growth: GrowthModel { base_step: 40.0, per_period: 2.5 },
                },
                DatasetSpec {
                    id: "cash",
                    label: "Cash Reserve",
                    base_scale: 500.0,
                    growth: GrowthModel { base_step: 120.0, per_period: 10.0 },
                },
            ],
            categories: Vec::new(),
        }
    }

    /// Sample-dataset variant: three named categories, each plotted as its
    /// own line and included/excluded via checkboxes.
    pub fn sampler() -> Self {
        Self {
            name: "sampler",
            title: "Category Sampler",
            subtitle: "Include or exclude sample categories",
            x_label: "Years",
            y_label: "Projection (%)",
            theme: Theme {
                page_background: Color::from_hex(0xECFDF5),
                panel_background: Color::from_hex(0xECFDF5),
                chart_background: Color::from_hex(0x06241F),
                grid: Color::from_hex(0x34D399),
                axis_text: Color::from_hex(0xECFDF5),
                line: Color::from_hex(0x34D399),
                dot: Color::from_hex(0x0EA66C),
                accent: Color::from_hex(0x0EA66C),
                accent_active: Color::from_hex(0x34D399),
                text: Color::from_hex(0x06241F),
                positive: Color::from_hex(0x16A34A),
                negative: Color::from_hex(0xDC2626),
                series: vec![
                    Color::from_hex(0x34D399),
                    Color::from_hex(0x5CB0FF),
                    Color::from_hex(0xF0635C),
                ],
            },
            period_bounds: (1, 10),
            default_period_count: 4,
            base_scale: 100.0,
            scale_bounds: None,
            scale_step: 10.0,
            growth: STANDARD_GROWTH,
            adjustments: STANDARD_ADJUSTMENTS.to_vec(),
            description_style: DescriptionStyle::Plain,
            datasets: Vec::new(),
            categories: vec![
                CategorySpec {
                    id: "payroll",
                    label: "Payroll",
                    base_scale: 120.0,
                    growth: GrowthModel { base_step: 60.0, per_period: 5.0 },
                },
                CategorySpec {
                    id: "infrastructure",
                    label: "Infrastructure",
                    base_scale: 80.0,
                    growth: GrowthModel { base_step: 40.0, per_period: 2.5 },
                },
                CategorySpec {
                    id: "marketing",
                    label: "Marketing",
                    base_scale: 60.0,
                    growth: GrowthModel { base_step: 90.0, per_period: 7.5 },
                },
            ],
        }
    }

    pub fn all() -> Vec<VariantConfig> {
        vec![Self::boardroom(), Self::horizon(), Self::quarterly(), Self::lab(), Self::sampler()]
    }

    pub fn by_name(name: &str) -> Result<VariantConfig, ConfigurationError> {
        Self::all()
            .into_iter()
            .find(|variant| variant.name == name)
            .ok_or_else(|| ConfigurationError::UnknownVariant(name.to_string()))
    }

    /// Build the immutable adjustment catalog for this variant.
    pub fn catalog(&self) -> AdjustmentCatalog {
        AdjustmentCatalog::from_entries(self.adjustments.iter().map(AdjustmentSpec::to_adjustment).collect())
    }

    pub fn scale_adjustable(&self) -> bool {
        self.scale_bounds.is_some()
    }

    pub fn dataset(&self, id: &str) -> Option<&DatasetSpec> {
        self.datasets.iter().find(|dataset| dataset.id == id)
    }

    pub fn category(&self, id: &str) -> Option<&CategorySpec> {
        self.categories.iter().find(|category| category.id == id)
    }

    /// The mutation-boundary view for this variant. A fixed base scale is a
    /// degenerate `[scale, scale]` bound, so the clamp pins it in place.
    pub fn initial_view(&self) -> ViewState {
        let scale_bounds = self.scale_bounds.unwrap_or((self.base_scale, self.base_scale));
        ViewState::new(
            self.default_period_count,
            self.base_scale,
            self.period_bounds,
            scale_bounds,
            self.scale_step,
        )
    }

    /// Fresh snapshot for this variant, with the first dataset preselected.
    pub fn initial_state(&self) -> SimulationState {
        let state = SimulationState::new(self.initial_view());
        match self.datasets.first() {
            Some(dataset) => state.with_dataset(dataset.id.to_string(), dataset.base_scale),
            None => state,
        }
    }
}

static ACTIVE_VARIANT: OnceCell<VariantConfig> = OnceCell::new();

/// Register the variant to mount. First call wins; later calls are ignored.
pub fn init_variant(config: VariantConfig) {
    let _ = ACTIVE_VARIANT.set(config);
}

/// The variant the app is running; defaults to `boardroom`.
pub fn active_variant() -> &'static VariantConfig {
    ACTIVE_VARIANT.get_or_init(VariantConfig::boardroom)
}
