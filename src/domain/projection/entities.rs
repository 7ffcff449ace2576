pub use super::value_objects::{AdjustmentId, Effect, PeriodIndex, ProjectionValue};
use serde::{Deserialize, Serialize};

/// Domain entity - a named, fixed percentage adjustment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Adjustment {
    pub id: AdjustmentId,
    pub label: String,
    pub description: String,
    pub effect: Effect,
}

impl Adjustment {
    pub fn new(id: AdjustmentId, label: String, description: String, effect: Effect) -> Self {
        Self { id, label, description, effect }
    }
}

/// Domain entity - the fixed mapping from adjustment id to effect.
///
/// Defined once at startup and never mutated. Declaration order is preserved
/// because the UI renders the buttons in catalog order.
#[derive(Debug, Clone, PartialEq)]
pub struct AdjustmentCatalog {
    entries: Vec<Adjustment>,
}

impl AdjustmentCatalog {
    pub fn from_entries(entries: Vec<Adjustment>) -> Self {
        Self { entries }
    }

    pub fn get(&self, id: &AdjustmentId) -> Option<&Adjustment> {
        self.entries.iter().find(|entry| &entry.id == id)
    }

    /// Effect of one id; absent ids have no effect.
    pub fn effect_of(&self, id: &AdjustmentId) -> Option<Effect> {
        self.get(id).map(|entry| entry.effect)
    }

    pub fn contains(&self, id: &AdjustmentId) -> bool {
        self.get(id).is_some()
    }

    /// Sum of effects over the active selection. Identifiers absent from the
    /// catalog contribute zero, matching the observed UI behavior.
    pub fn total_effect(&self, selection: &ActiveSelection) -> f64 {
        selection
            .iter()
            .map(|id| self.effect_of(id).map(|effect| effect.value()).unwrap_or(0.0))
            .sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Adjustment> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Domain entity - the set of adjustment ids currently toggled on.
///
/// Membership only; toggling twice restores the previous state. Toggle order
/// is kept so the description panel lists entries in activation order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ActiveSelection {
    ids: Vec<AdjustmentId>,
}

impl ActiveSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Symmetric difference with a single element.
    pub fn toggle(&mut self, id: AdjustmentId) {
        if let Some(position) = self.ids.iter().position(|existing| existing == &id) {
            self.ids.remove(position);
        } else {
            self.ids.push(id);
        }
    }

    pub fn contains(&self, id: &AdjustmentId) -> bool {
        self.ids.iter().any(|existing| existing == id)
    }

    /// Drop every active id.
    pub fn reset(&mut self) {
        self.ids.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &AdjustmentId> {
        self.ids.iter()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

/// Domain entity - one plotted point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionPoint {
    pub period: PeriodIndex,
    pub value: ProjectionValue,
}

impl ProjectionPoint {
    pub fn new(period: PeriodIndex, value: ProjectionValue) -> Self {
        Self { period, value }
    }
}

/// Domain entity - an ordered projection series.
///
/// Purely derived data: recomputed from scratch on every parameter change,
/// never stored or patched incrementally.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProjectionSeries {
    points: Vec<ProjectionPoint>,
}

impl ProjectionSeries {
    pub fn from_points(points: Vec<ProjectionPoint>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[ProjectionPoint] {
        &self.points
    }

    pub fn count(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn first(&self) -> Option<&ProjectionPoint> {
        self.points.first()
    }

    pub fn last(&self) -> Option<&ProjectionPoint> {
        self.points.last()
    }

    /// Minimum and maximum plotted value.
    pub fn value_range(&self) -> Option<(f64, f64)> {
        if self.points.is_empty() {
            return None;
        }

        let mut min_value = self.points[0].value.value();
        let mut max_value = min_value;
        for point in &self.points {
            min_value = min_value.min(point.value.value());
            max_value = max_value.max(point.value.value());
        }
        Some((min_value, max_value))
    }

    /// First and last period index.
    pub fn period_range(&self) -> Option<(u32, u32)> {
        match (self.points.first(), self.points.last()) {
            (Some(first), Some(last)) => Some((first.period.value(), last.period.value())),
            _ => None,
        }
    }
}
