use derive_more::Display;
use strum::{AsRefStr, EnumIter, EnumString};

/// Value Object - chart kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter, EnumString, AsRefStr)]
pub enum ChartKind {
    #[display(fmt = "Line")]
    #[strum(serialize = "line")]
    Line,
    #[display(fmt = "Area")]
    #[strum(serialize = "area")]
    Area,
    #[display(fmt = "Scatter")]
    #[strum(serialize = "scatter")]
    Scatter,
}

/// Value Object - Viewport
///
/// Maps the plotted domain (period index on x, projected value on y) onto a
/// pixel surface. Canvas Y grows downward, so value mappings are inverted.
#[derive(Debug, Clone, PartialEq)]
pub struct Viewport {
    pub start_period: f64,
    pub end_period: f64,
    pub min_value: f64,
    pub max_value: f64,
    pub width: u32,
    pub height: u32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            start_period: 1.0,
            end_period: 1.0,
            min_value: 0.0,
            max_value: 100.0,
            width: 800,
            height: 500,
        }
    }
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height, ..Default::default() }
    }

    pub fn period_span(&self) -> f64 {
        self.end_period - self.start_period
    }

    pub fn value_span(&self) -> f64 {
        self.max_value - self.min_value
    }

    /// Convert a period index to a screen X coordinate.
    pub fn period_to_x(&self, period: f64) -> f64 {
        if self.period_span() == 0.0 {
            return self.width as f64 / 2.0;
        }
        let normalized = (period - self.start_period) / self.period_span();
        normalized * self.width as f64
    }

    /// Convert a projected value to a screen Y coordinate.
    pub fn value_to_y(&self, value: f64) -> f64 {
        if self.value_span() == 0.0 {
            return self.height as f64 / 2.0;
        }
        let normalized = (value - self.min_value) / self.value_span();
        self.height as f64 * (1.0 - normalized) // Invert Y
    }

    /// Convert a screen X coordinate back to a period index.
    pub fn x_to_period(&self, x: f64) -> f64 {
        let normalized = x / self.width as f64;
        self.start_period + self.period_span() * normalized
    }

    /// Convert a screen Y coordinate back to a value.
    pub fn y_to_value(&self, y: f64) -> f64 {
        let normalized = 1.0 - y / self.height as f64; // invert Y
        self.min_value + self.value_span() * normalized
    }
}

/// Value Object - Color
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::new(r, g, b, 1.0)
    }

    pub fn from_hex(hex: u32) -> Self {
        let r = ((hex >> 16) & 0xFF) as f32 / 255.0;
        let g = ((hex >> 8) & 0xFF) as f32 / 255.0;
        let b = (hex & 0xFF) as f32 / 255.0;
        Self::rgb(r, g, b)
    }

    pub fn to_hex(&self) -> u32 {
        let r = (self.r * 255.0).round() as u32;
        let g = (self.g * 255.0).round() as u32;
        let b = (self.b * 255.0).round() as u32;
        (r << 16) | (g << 8) | b
    }

    pub fn with_alpha(&self, alpha: f32) -> Self {
        Self { a: alpha, ..*self }
    }

    /// CSS hex form, `#rrggbb`. Canvas fill/stroke styles take this directly.
    pub fn to_css_hex(&self) -> String {
        format!("#{:06x}", self.to_hex())
    }

    /// CSS rgba() form, for styles that need the alpha channel.
    pub fn to_css_rgba(&self) -> String {
        format!(
            "rgba({}, {}, {}, {})",
            (self.r * 255.0).round() as u32,
            (self.g * 255.0).round() as u32,
            (self.b * 255.0).round() as u32,
            self.a
        )
    }
}

impl From<(f32, f32, f32)> for Color {
    fn from((r, g, b): (f32, f32, f32)) -> Self {
        Self::rgb(r, g, b)
    }
}

impl From<u32> for Color {
    fn from(hex: u32) -> Self {
        Self::from_hex(hex)
    }
}
