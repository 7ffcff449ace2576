use leptos::html::Canvas;
use leptos::*;
use std::rc::Rc;

use crate::application::{SimulationCommand, SimulationService};
use crate::config::{DescriptionStyle, active_variant};
use crate::domain::{
    chart::{Chart, ChartKind},
    logging::{LogComponent, LogEntry, Logger, get_logger, get_time_provider, init_logger},
    projection::AdjustmentId,
    state::SimulationState,
};
use crate::global_state::{
    active_total_adjustment, plotted_point_count, tooltip_data, tooltip_visible, ui_logs, ui_logs_paused,
};
use crate::infrastructure::{rendering::LineChartRenderer, services::ConsoleLogger};
use crate::presentation::description::split_percent_token;

const CANVAS_WIDTH: u32 = 800;
const CANVAS_HEIGHT: u32 = 500;

/// Data shown in the hover tooltip.
#[derive(Clone, Debug, PartialEq)]
pub struct TooltipData {
    pub period: u32,
    pub value: f64,
    pub x: f64,
    pub y: f64,
    pub formatted_text: String,
}

impl TooltipData {
    pub fn new(series_label: &str, period: u32, value: f64, x: f64, y: f64) -> Self {
        let formatted_text = format!("{}\nx: {}\ny: {:.0}", series_label, period, value);
        Self { period, value, x, y, formatted_text }
    }
}

/// Bridge logger: mirrors every entry to the browser console and into the
/// debug-console signal.
pub struct LeptosLogger {
    console: ConsoleLogger,
}

impl Logger for LeptosLogger {
    fn log(&self, entry: LogEntry) {
        let timestamp_str = get_time_provider().format_timestamp(entry.timestamp);
        let formatted =
            format!("[{}] {} {}: {}", timestamp_str, entry.level, entry.component, entry.message);

        self.console.log(entry);

        if !ui_logs_paused().get_untracked() {
            ui_logs().update(|log_vec| {
                log_vec.push(formatted);
                // Keep at most 100 lines
                while log_vec.len() > 100 {
                    log_vec.remove(0);
                }
            });
        }
    }
}

/// Install the UI-bridged logger. First installation wins.
pub fn install_ui_logger() {
    init_logger(Box::new(LeptosLogger { console: ConsoleLogger::new_development() }));
}

/// Root component: one parameterized page driven by the active variant.
#[component]
pub fn App() -> impl IntoView {
    let variant = active_variant();
    let service = Rc::new(SimulationService::new(variant.clone()));
    let state = create_rw_signal(service.initial_state());

    get_logger().info(
        LogComponent::Presentation("App"),
        &format!("mounting variant '{}'", variant.name),
    );

    let theme_css = variant.theme.css_variables();

    view! {
        <style>{theme_css}{APP_CSS}</style>
        <main class="projection-app">
            <div class="card">
                <Header/>
                <AdjustmentPanel service=Rc::clone(&service) state=state/>
                <ChartContainer service=Rc::clone(&service) state=state/>
                <DescriptionsPanel service=service state=state/>
                <DebugConsole/>
            </div>
        </main>
    }
}

/// Title block with live stats.
#[component]
fn Header() -> impl IntoView {
    let variant = active_variant();

    view! {
        <div class="header">
            <h1>{variant.title}</h1>
            <p>{variant.subtitle}</p>
            <div class="stats">
                <div class="stat-item">
                    <div class="stat-value">{move || plotted_point_count().get().to_string()}</div>
                    <div class="stat-label">"Points"</div>
                </div>
                <div class="stat-item">
                    <div class="stat-value">
                        {move || format!("{:+.0}%", active_total_adjustment().get() * 100.0)}
                    </div>
                    <div class="stat-label">"Total adjustment"</div>
                </div>
            </div>
        </div>
    }
}

/// One toggle button per catalog entry, plus the reset button.
#[component]
fn AdjustmentPanel(service: Rc<SimulationService>, state: RwSignal<SimulationState>) -> impl IntoView {
    let variant = active_variant();
    let toggle_service = Rc::clone(&service);
    let reset_service = service;

    let buttons = variant
        .adjustments
        .iter()
        .map(|spec| {
            let service = Rc::clone(&toggle_service);
            let id = spec.id;
            view! {
                <button
                    class=move || {
                        let active = state.with(|s| s.selection.contains(&AdjustmentId::from(id)));
                        if active { "fix-btn active" } else { "fix-btn" }
                    }
                    on:click=move |_| {
                        let next = service
                            .apply(&state.get_untracked(), SimulationCommand::ToggleAdjustment(AdjustmentId::from(id)));
                        state.set(next);
                    }
                >
                    {spec.label}
                </button>
            }
        })
        .collect_view();

    view! {
        <div class="fix-buttons">
            {buttons}
            <button
                class="reset-btn"
                on:click=move |_| {
                    let next = reset_service.apply(&state.get_untracked(), SimulationCommand::ResetSelection);
                    state.set(next);
                }
            >
                "Reset"
            </button>
        </div>
    }
}

/// Canvas, renderer lifecycle, zoom arrows and the variant-specific controls.
#[component]
fn ChartContainer(service: Rc<SimulationService>, state: RwSignal<SimulationState>) -> impl IntoView {
    let variant = active_variant();
    let (chart, set_chart) = create_signal(Chart::new("projection-chart".to_string(), ChartKind::Line));
    let (renderer, set_renderer) = create_signal::<Option<Rc<LineChartRenderer>>>(None);
    let (status, set_status) = create_signal("Initializing...".to_string());

    let canvas_ref = create_node_ref::<Canvas>();

    // Build the renderer once the canvas is mounted
    create_effect(move |_| {
        if canvas_ref.get().is_some() && renderer.get_untracked().is_none() {
            let variant = active_variant();
            let line_renderer = LineChartRenderer::new(
                "projection-canvas".to_string(),
                CANVAS_WIDTH,
                CANVAS_HEIGHT,
                variant.theme.clone(),
            )
            .with_axis_labels(variant.x_label, variant.y_label);
            set_renderer.set(Some(Rc::new(line_renderer)));
            set_status.set("Renderer ready".to_string());
        }
    });

    // Recompute and redraw on every snapshot change
    let recompute_service = Rc::clone(&service);
    create_effect(move |_| {
        let snapshot = state.get();
        let plotted = recompute_service.recompute(&snapshot);

        set_chart.update(|chart| chart.set_series(plotted));
        plotted_point_count().set(chart.with_untracked(|chart| chart.point_count()));
        active_total_adjustment().set(recompute_service.total_adjustment(&snapshot));

        renderer.with(|maybe_renderer| {
            if let Some(line_renderer) = maybe_renderer {
                chart.with_untracked(|chart| match line_renderer.render(chart) {
                    Ok(()) => set_status.set(format!("Rendered {} points", chart.point_count())),
                    Err(err) => set_status.set(format!("Render error: {}", err)),
                });
            }
        });
    });

    // Tooltip: hit-test the plotted dots under the cursor
    let handle_mouse_move = move |event: web_sys::MouseEvent| {
        let mouse_x = f64::from(event.offset_x());
        let mouse_y = f64::from(event.offset_y());

        renderer.with_untracked(|maybe_renderer| {
            if let Some(line_renderer) = maybe_renderer {
                chart.with_untracked(|chart| match line_renderer.hit_test(chart, mouse_x, mouse_y) {
                    Some(hit) => {
                        tooltip_data().set(Some(TooltipData::new(
                            &hit.series_label,
                            hit.period,
                            hit.value,
                            hit.x,
                            hit.y,
                        )));
                        tooltip_visible().set(true);
                    }
                    None => tooltip_visible().set(false),
                });
            }
        });
    };

    let handle_mouse_leave = move |_event: web_sys::MouseEvent| {
        tooltip_visible().set(false);
    };

    let zoom_out_service = Rc::clone(&service);
    let zoom_in_service = Rc::clone(&service);

    let scale_controls = variant.scale_adjustable().then(|| {
        let service = Rc::clone(&service);
        view! { <ScaleControls service=service state=state/> }
    });
    let dataset_picker = (!variant.datasets.is_empty()).then(|| {
        let service = Rc::clone(&service);
        view! { <DatasetPicker service=service state=state/> }
    });
    let category_panel = (!variant.categories.is_empty()).then(|| {
        let service = Rc::clone(&service);
        view! { <CategoryPanel service=service state=state/> }
    });

    view! {
        <div class="chart-container">
            <button
                class="arrow-btn left"
                on:click=move |_| {
                    let next = zoom_out_service.apply(&state.get_untracked(), SimulationCommand::ZoomOut);
                    state.set(next);
                }
            >
                "▼"
            </button>
            <button
                class="arrow-btn right"
                on:click=move |_| {
                    let next = zoom_in_service.apply(&state.get_untracked(), SimulationCommand::ZoomIn);
                    state.set(next);
                }
            >
                "▲"
            </button>

            <div class="chart-wrapper">
                <canvas
                    id="projection-canvas"
                    node_ref=canvas_ref
                    width=CANVAS_WIDTH
                    height=CANVAS_HEIGHT
                    on:mousemove=handle_mouse_move
                    on:mouseleave=handle_mouse_leave
                />
                <ChartTooltip/>
            </div>

            {scale_controls}
            {dataset_picker}
            {category_panel}

            <div class="status">{move || status.get()}</div>
        </div>
    }
}

/// Clamped base-scale stepper (only rendered when the variant allows it).
#[component]
fn ScaleControls(service: Rc<SimulationService>, state: RwSignal<SimulationState>) -> impl IntoView {
    let down_service = Rc::clone(&service);
    let up_service = service;

    view! {
        <div class="scale-controls">
            <span class="scale-label">"Base scale:"</span>
            <button
                class="scale-btn"
                on:click=move |_| {
                    let next = down_service.apply(&state.get_untracked(), SimulationCommand::ScaleDown);
                    state.set(next);
                }
            >
                "−"
            </button>
            <span class="scale-value">
                {move || format!("{:.0}", state.with(|s| s.view.base_scale().value()))}
            </span>
            <button
                class="scale-btn"
                on:click=move |_| {
                    let next = up_service.apply(&state.get_untracked(), SimulationCommand::ScaleUp);
                    state.set(next);
                }
            >
                "+"
            </button>
        </div>
    }
}

/// Dataset dropdown (only rendered when the variant configures datasets).
#[component]
fn DatasetPicker(service: Rc<SimulationService>, state: RwSignal<SimulationState>) -> impl IntoView {
    let variant = active_variant();

    let options = variant
        .datasets
        .iter()
        .map(|dataset| {
            let id = dataset.id;
            view! {
                <option
                    value=id
                    selected=move || state.with(|s| s.dataset.as_deref() == Some(id))
                >
                    {dataset.label}
                </option>
            }
        })
        .collect_view();

    view! {
        <div class="dataset-picker">
            <label>
                "Dataset: "
                <select on:change=move |ev| {
                    let id = event_target_value(&ev);
                    let next = service.apply(&state.get_untracked(), SimulationCommand::SelectDataset(id));
                    state.set(next);
                }>
                    {options}
                </select>
            </label>
        </div>
    }
}

/// Category checkboxes (only rendered for the sampler variant).
#[component]
fn CategoryPanel(service: Rc<SimulationService>, state: RwSignal<SimulationState>) -> impl IntoView {
    let variant = active_variant();
    let panel_service = service;

    let checkboxes = variant
        .categories
        .iter()
        .map(|category| {
            let service = Rc::clone(&panel_service);
            let id = category.id;
            view! {
                <label class="category-item">
                    <input
                        type="checkbox"
                        prop:checked=move || state.with(|s| s.is_category_included(id))
                        on:change=move |ev| {
                            let included = event_target_checked(&ev);
                            let next = service.apply(
                                &state.get_untracked(),
                                SimulationCommand::SetCategoryIncluded { id: id.to_string(), included },
                            );
                            state.set(next);
                        }
                    />
                    {category.label}
                </label>
            }
        })
        .collect_view();

    view! { <div class="category-panel">{checkboxes}</div> }
}

/// The list of active adjustments, rendered per the variant's style.
#[component]
fn DescriptionsPanel(service: Rc<SimulationService>, state: RwSignal<SimulationState>) -> impl IntoView {
    let variant = active_variant();
    let style = variant.description_style;

    let entries = move || {
        state.with(|s| {
            service
                .catalog()
                .iter()
                .filter(|adjustment| s.selection.contains(&adjustment.id))
                .map(|adjustment| adjustment.description.clone())
                .collect::<Vec<_>>()
        })
    };

    view! {
        <div class="descriptions">
            <h3>"Fixes Applied:"</h3>
            <Show
                when=move || state.with(|s| !s.selection.is_empty())
                fallback=|| view! { <p class="empty">"No fixes selected."</p> }
            >
                <ul>
                    <For
                        each=entries.clone()
                        key=|description| description.clone()
                        children=move |description: String| {
                            match style {
                                DescriptionStyle::Plain => view! { <li>{description}</li> }.into_view(),
                                DescriptionStyle::HighlightedPercent => match split_percent_token(&description) {
                                    Some(highlight) => view! {
                                        <li>
                                            {highlight.prefix}
                                            <span class=if highlight.positive { "pct positive" } else { "pct negative" }>
                                                {highlight.token}
                                            </span>
                                            {highlight.suffix}
                                        </li>
                                    }
                                    .into_view(),
                                    None => view! { <li>{description}</li> }.into_view(),
                                },
                            }
                        }
                    />
                </ul>
            </Show>
        </div>
    }
}

/// Floating tooltip anchored to the hovered dot.
#[component]
fn ChartTooltip() -> impl IntoView {
    view! {
        <div
            class="tooltip"
            style:display=move || if tooltip_visible().get() { "block" } else { "none" }
            style:left=move || {
                tooltip_data().with(|data| {
                    data.as_ref().map(|tooltip| format!("{}px", tooltip.x)).unwrap_or_else(|| "0px".to_string())
                })
            }
            style:top=move || {
                tooltip_data().with(|data| {
                    data.as_ref().map(|tooltip| format!("{}px", tooltip.y)).unwrap_or_else(|| "0px".to_string())
                })
            }
        >
            {move || {
                tooltip_data().with(|data| {
                    data.as_ref().map(|tooltip| tooltip.formatted_text.clone()).unwrap_or_default()
                })
            }}
        </div>
    }
}

/// Debug console fed by the bridge logger.
#[component]
fn DebugConsole() -> impl IntoView {
    let logs = ui_logs();
    let is_paused = ui_logs_paused();

    view! {
        <div class="debug-console">
            <div class="debug-header">
                <span>"Console"</span>
                <button
                    class="debug-btn"
                    on:click=move |_| {
                        is_paused.update(|paused| *paused = !*paused);
                    }
                >
                    {move || if is_paused.get() { "Resume" } else { "Pause" }}
                </button>
                <button class="debug-btn" on:click=move |_| logs.set(Vec::new())>
                    "Clear"
                </button>
            </div>
            <div class="debug-log">
                <For
                    each=move || logs.get()
                    key=|log| log.clone()
                    children=move |log| {
                        view! { <div class="log-line">{log}</div> }
                    }
                />
            </div>
        </div>
    }
}

const APP_CSS: &str = r#"
.projection-app {
    font-family: 'SF Pro Display', -apple-system, BlinkMacSystemFont, sans-serif;
    background: var(--page-bg);
    color: var(--text);
    min-height: 100vh;
    display: flex;
    align-items: center;
    justify-content: center;
    padding: 24px;
}

.card {
    width: 100%;
    max-width: 1100px;
    background: var(--panel-bg);
    border-radius: 16px;
    box-shadow: 0 14px 42px rgba(0, 0, 0, 0.18);
    padding: 20px 24px;
}

.header {
    text-align: center;
    margin-bottom: 16px;
}

.header h1 {
    margin: 0;
    font-size: 24px;
}

.header p {
    margin: 4px 0 0;
    font-size: 13px;
    opacity: 0.7;
}

.stats {
    display: flex;
    justify-content: center;
    gap: 40px;
    margin-top: 12px;
}

.stat-item {
    text-align: center;
}

.stat-value {
    font-family: 'Courier New', monospace;
    font-size: 20px;
    font-weight: 700;
}

.stat-label {
    font-size: 11px;
    opacity: 0.6;
    margin-top: 3px;
}

.fix-buttons {
    display: flex;
    flex-wrap: wrap;
    justify-content: center;
    align-items: center;
    gap: 8px;
    margin-bottom: 16px;
}

.fix-btn {
    font-size: 12px;
    font-weight: 600;
    letter-spacing: 0.02em;
    padding: 5px 14px;
    border: none;
    border-radius: 999px;
    background: var(--accent);
    color: var(--axis-text);
    cursor: pointer;
    box-shadow: 0 2px 6px rgba(0, 0, 0, 0.2);
    transition: all 140ms ease-out;
}

.fix-btn:hover {
    filter: brightness(1.15);
}

.fix-btn.active {
    background: var(--accent-active);
    color: var(--chart-bg);
    outline: 2px solid var(--dot);
}

.reset-btn {
    font-size: 13px;
    font-weight: 600;
    padding: 5px 16px;
    border: none;
    border-radius: 8px;
    background: var(--dot);
    color: var(--axis-text);
    cursor: pointer;
    transition: all 140ms ease-out;
}

.reset-btn:hover {
    background: var(--accent-active);
    color: var(--chart-bg);
}

.chart-container {
    position: relative;
    display: flex;
    flex-direction: column;
    align-items: center;
    gap: 10px;
    margin-bottom: 16px;
}

.chart-wrapper {
    position: relative;
    display: inline-block;
}

#projection-canvas {
    border-radius: 14px;
    background: var(--chart-bg);
    cursor: crosshair;
}

.arrow-btn {
    position: absolute;
    top: 50%;
    transform: translateY(-50%);
    z-index: 10;
    border: none;
    border-radius: 999px;
    background: var(--accent);
    color: var(--axis-text);
    width: 38px;
    height: 38px;
    font-size: 15px;
    cursor: pointer;
    box-shadow: 0 2px 8px rgba(0, 0, 0, 0.3);
    transition: all 140ms ease-out;
}

.arrow-btn:hover {
    background: var(--dot);
}

.arrow-btn.left {
    left: 4px;
}

.arrow-btn.right {
    right: 4px;
}

.tooltip {
    position: absolute;
    background: rgba(0, 0, 0, 0.9);
    color: #ffffff;
    padding: 8px 12px;
    border-radius: 6px;
    font-size: 12px;
    font-family: 'Courier New', monospace;
    white-space: pre-line;
    pointer-events: none;
    z-index: 1000;
    border: 1px solid var(--grid);
    transform: translate(12px, -100%);
    line-height: 1.4;
}

.scale-controls,
.dataset-picker,
.category-panel {
    display: flex;
    align-items: center;
    justify-content: center;
    gap: 8px;
    font-size: 13px;
}

.scale-btn {
    border: none;
    border-radius: 6px;
    background: var(--accent);
    color: var(--axis-text);
    width: 26px;
    height: 26px;
    cursor: pointer;
}

.scale-value {
    font-family: 'Courier New', monospace;
    min-width: 48px;
    text-align: center;
}

.category-item {
    display: flex;
    align-items: center;
    gap: 4px;
    cursor: pointer;
}

.descriptions {
    background: var(--panel-bg);
    border: 1px solid rgba(0, 0, 0, 0.08);
    border-radius: 12px;
    padding: 14px 16px;
    margin-bottom: 16px;
}

.descriptions h3 {
    margin: 0 0 8px;
    font-size: 14px;
}

.descriptions ul {
    margin: 0;
    padding-left: 20px;
    font-size: 13px;
}

.descriptions .empty {
    font-size: 13px;
    font-style: italic;
    margin: 0;
}

.pct {
    font-weight: 700;
}

.pct.positive {
    color: var(--positive);
}

.pct.negative {
    color: var(--negative);
}

.status {
    font-size: 12px;
    opacity: 0.7;
    text-align: center;
}

.debug-console {
    background: rgba(0, 0, 0, 0.85);
    color: #e0e0e0;
    border-radius: 10px;
    padding: 12px;
    max-height: 220px;
    overflow-y: auto;
}

.debug-header {
    display: flex;
    justify-content: space-between;
    align-items: center;
    margin-bottom: 8px;
    font-weight: bold;
    font-size: 12px;
}

.debug-btn {
    background: #4a5d73;
    color: white;
    border: none;
    padding: 4px 10px;
    border-radius: 5px;
    cursor: pointer;
    font-size: 11px;
    margin-left: 5px;
}

.debug-btn:hover {
    background: #5a6d83;
}

.debug-log {
    font-family: 'Courier New', monospace;
    font-size: 11px;
    line-height: 1.3;
}

.log-line {
    margin: 2px 0;
    padding: 1px 5px;
    border-radius: 3px;
}

.log-line:hover {
    background: rgba(255, 255, 255, 0.1);
}
"#;
