use crate::app::TooltipData;
use leptos::*;
use once_cell::sync::OnceCell;

/// Global UI signals shared across components.
pub struct Globals {
    pub tooltip_data: RwSignal<Option<TooltipData>>,
    pub tooltip_visible: RwSignal<bool>,
    pub plotted_point_count: RwSignal<usize>,
    pub active_total_adjustment: RwSignal<f64>,
    pub ui_logs: RwSignal<Vec<String>>,
    pub ui_logs_paused: RwSignal<bool>,
}

static GLOBALS: OnceCell<Globals> = OnceCell::new();

pub fn globals() -> &'static Globals {
    GLOBALS.get_or_init(|| Globals {
        tooltip_data: create_rw_signal(None),
        tooltip_visible: create_rw_signal(false),
        plotted_point_count: create_rw_signal(0),
        active_total_adjustment: create_rw_signal(0.0),
        ui_logs: create_rw_signal(Vec::new()),
        ui_logs_paused: create_rw_signal(false),
    })
}

pub fn tooltip_data() -> RwSignal<Option<TooltipData>> {
    globals().tooltip_data
}

pub fn tooltip_visible() -> RwSignal<bool> {
    globals().tooltip_visible
}

pub fn plotted_point_count() -> RwSignal<usize> {
    globals().plotted_point_count
}

pub fn active_total_adjustment() -> RwSignal<f64> {
    globals().active_total_adjustment
}

pub fn ui_logs() -> RwSignal<Vec<String>> {
    globals().ui_logs
}

pub fn ui_logs_paused() -> RwSignal<bool> {
    globals().ui_logs_paused
}
