use std::collections::BTreeSet;

use crate::domain::projection::{ActiveSelection, AdjustmentId, SeriesParameters};
use crate::view_state::ViewState;

/// Immutable snapshot of everything the user can change.
///
/// Interactions never mutate in place: each one derives a fresh snapshot via
/// a `with_*` method and replaces the previous one wholesale, so a click is
/// atomic and the calculator stays pure.
#[derive(Clone, Debug, PartialEq)]
pub struct SimulationState {
    pub view: ViewState,
    pub selection: ActiveSelection,
    pub dataset: Option<String>,
    pub excluded_categories: BTreeSet<String>,
}

impl SimulationState {
    pub fn new(view: ViewState) -> Self {
        Self {
            view,
            selection: ActiveSelection::new(),
            dataset: None,
            excluded_categories: BTreeSet::new(),
        }
    }

    pub fn with_toggled(&self, id: AdjustmentId) -> Self {
        let mut next = self.clone();
        next.selection.toggle(id);
        next
    }

    pub fn with_selection_reset(&self) -> Self {
        let mut next = self.clone();
        next.selection.reset();
        next
    }

    pub fn with_zoom_in(&self) -> Self {
        let mut next = self.clone();
        next.view.zoom_in();
        next
    }

    pub fn with_zoom_out(&self) -> Self {
        let mut next = self.clone();
        next.view.zoom_out();
        next
    }

    pub fn with_scale_up(&self) -> Self {
        let mut next = self.clone();
        next.view.scale_up();
        next
    }

    pub fn with_scale_down(&self) -> Self {
        let mut next = self.clone();
        next.view.scale_down();
        next
    }

    /// Select a dataset and adopt its base scale.
    pub fn with_dataset(&self, id: String, base_scale: f64) -> Self {
        let mut next = self.clone();
        next.view.set_base_scale(base_scale);
        next.dataset = Some(id);
        next
    }

    pub fn with_category_included(&self, id: String, included: bool) -> Self {
        let mut next = self.clone();
        if included {
            next.excluded_categories.remove(&id);
        } else {
            next.excluded_categories.insert(id);
        }
        next
    }

    pub fn is_category_included(&self, id: &str) -> bool {
        !self.excluded_categories.contains(id)
    }

    pub fn params(&self) -> SeriesParameters {
        self.view.params()
    }
}
