use crate::config::VariantConfig;
use crate::log_warn;
use crate::domain::{
    chart::PlottedSeries,
    events::{ChartEvent, EventDispatcher, InMemoryEventDispatcher, SimulationEvent},
    logging::{LogComponent, get_logger},
    projection::{AdjustmentCatalog, AdjustmentId, BaseScale, ProjectionCalculator, SeriesParameters},
    state::SimulationState,
};

/// One user interaction, expressed as a command.
#[derive(Debug, Clone, PartialEq)]
pub enum SimulationCommand {
    ToggleAdjustment(AdjustmentId),
    ResetSelection,
    ZoomIn,
    ZoomOut,
    ScaleUp,
    ScaleDown,
    SelectDataset(String),
    SetCategoryIncluded { id: String, included: bool },
}

/// Application service coordinating the simulation for one variant.
///
/// Each click maps to exactly one [`SimulationService::apply`] (an atomic
/// snapshot replacement, clamping included) followed by one
/// [`SimulationService::recompute`] and a redraw. The service owns the
/// variant's catalog and event dispatcher; the calculator stays pure.
pub struct SimulationService {
    variant: VariantConfig,
    catalog: AdjustmentCatalog,
    dispatcher: InMemoryEventDispatcher,
}

impl SimulationService {
    pub fn new(variant: VariantConfig) -> Self {
        let catalog = variant.catalog();

        let mut dispatcher = InMemoryEventDispatcher::new();
        dispatcher.subscribe_to_simulation_events(|event| {
            get_logger().debug(LogComponent::Application("Events"), &format!("{:?}", event));
        });
        dispatcher.subscribe_to_chart_events(|event| {
            get_logger().debug(LogComponent::Application("Events"), &format!("{:?}", event));
        });

        Self { variant, catalog, dispatcher }
    }

    pub fn variant(&self) -> &VariantConfig {
        &self.variant
    }

    pub fn catalog(&self) -> &AdjustmentCatalog {
        &self.catalog
    }

    pub fn initial_state(&self) -> SimulationState {
        self.variant.initial_state()
    }

    /// Sum of active effects under this variant's catalog.
    pub fn total_adjustment(&self, state: &SimulationState) -> f64 {
        self.catalog.total_effect(&state.selection)
    }

    /// Apply one command to a snapshot, returning the next snapshot.
    ///
    /// Never mutates the input. Bounds are enforced here (via the snapshot's
    /// view), never in the calculator. Unknown ids are tolerated: toggling
    /// one is kept in the selection with zero effect, matching the observed
    /// behavior; unknown datasets and categories leave the state unchanged.
    pub fn apply(&self, state: &SimulationState, command: SimulationCommand) -> SimulationState {
        match command {
            SimulationCommand::ToggleAdjustment(id) => {
                if !self.catalog.contains(&id) {
                    log_warn!(
                        LogComponent::Application("Simulation"),
                        "toggled id '{}' is not in the catalog; it contributes zero effect",
                        id
                    );
                }
                let next = state.with_toggled(id.clone());
                let now_active = next.selection.contains(&id);
                self.dispatcher
                    .publish_simulation_event(SimulationEvent::AdjustmentToggled { id, now_active });
                next
            }
            SimulationCommand::ResetSelection => {
                self.dispatcher.publish_simulation_event(SimulationEvent::SelectionReset);
                state.with_selection_reset()
            }
            SimulationCommand::ZoomIn => self.change_period_count(state, state.with_zoom_in()),
            SimulationCommand::ZoomOut => self.change_period_count(state, state.with_zoom_out()),
            SimulationCommand::ScaleUp => self.change_base_scale(state, state.with_scale_up()),
            SimulationCommand::ScaleDown => self.change_base_scale(state, state.with_scale_down()),
            SimulationCommand::SelectDataset(id) => match self.variant.dataset(&id) {
                Some(dataset) => {
                    self.dispatcher
                        .publish_simulation_event(SimulationEvent::DatasetSelected { id: id.clone() });
                    state.with_dataset(id, dataset.base_scale)
                }
                None => {
                    log_warn!(
                        LogComponent::Application("Simulation"),
                        "dataset '{}' is not configured for variant '{}'",
                        id,
                        self.variant.name
                    );
                    state.clone()
                }
            },
            SimulationCommand::SetCategoryIncluded { id, included } => {
                if self.variant.category(&id).is_none() {
                    log_warn!(
                        LogComponent::Application("Simulation"),
                        "category '{}' is not configured for variant '{}'",
                        id,
                        self.variant.name
                    );
                    return state.clone();
                }
                self.dispatcher
                    .publish_simulation_event(SimulationEvent::CategoryToggled { id: id.clone(), included });
                state.with_category_included(id, included)
            }
        }
    }

    /// Derive the plotted series for a snapshot.
    ///
    /// Most variants plot one series from the view parameters; the sampler
    /// variant plots one series per included category, all through the same
    /// calculator and the same active selection.
    pub fn recompute(&self, state: &SimulationState) -> Vec<PlottedSeries> {
        let plotted = if self.variant.categories.is_empty() {
            vec![self.single_series(state)]
        } else {
            self.category_series(state)
        };

        let point_count = plotted.iter().map(|series| series.series.count()).max().unwrap_or(0);
        self.dispatcher.publish_chart_event(ChartEvent::SeriesRecomputed {
            series_count: plotted.len(),
            point_count,
            total_adjustment: self.total_adjustment(state),
        });

        plotted
    }

    fn single_series(&self, state: &SimulationState) -> PlottedSeries {
        let (growth, label) = match state.dataset.as_deref().and_then(|id| self.variant.dataset(id)) {
            Some(dataset) => (dataset.growth, dataset.label),
            None => (self.variant.growth, "Projection"),
        };

        let calculator = ProjectionCalculator::new(growth);
        let series = calculator.compute(&state.params(), &state.selection, &self.catalog);
        PlottedSeries::new(label.to_string(), self.variant.theme.line, series)
    }

    fn category_series(&self, state: &SimulationState) -> Vec<PlottedSeries> {
        self.variant
            .categories
            .iter()
            .enumerate()
            .filter(|(_, category)| state.is_category_included(category.id))
            .map(|(index, category)| {
                let calculator = ProjectionCalculator::new(category.growth);
                let params = SeriesParameters::new(
                    state.view.period_count(),
                    BaseScale::clamped(category.base_scale, 0.0, f64::INFINITY),
                );
                let series = calculator.compute(&params, &state.selection, &self.catalog);
                PlottedSeries::new(
                    category.label.to_string(),
                    self.variant.theme.series_color(index),
                    series,
                )
            })
            .collect()
    }

    fn change_period_count(&self, old: &SimulationState, next: SimulationState) -> SimulationState {
        let old_count = old.view.period_count().get();
        let new_count = next.view.period_count().get();
        if old_count != new_count {
            self.dispatcher.publish_simulation_event(SimulationEvent::PeriodCountChanged {
                old: old_count,
                new: new_count,
            });
        }
        next
    }

    fn change_base_scale(&self, old: &SimulationState, next: SimulationState) -> SimulationState {
        let old_scale = old.view.base_scale().value();
        let new_scale = next.view.base_scale().value();
        if old_scale != new_scale {
            self.dispatcher.publish_simulation_event(SimulationEvent::BaseScaleChanged {
                old: old_scale,
                new: new_scale,
            });
        }
        next
    }
}
