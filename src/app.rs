use leptos::*;
use std::cell::RefCell;
use std::rc::Rc;
use strum::IntoEnumIterator;

use crate::application::{DashboardController, DashboardInput, RunOutcome};
use crate::domain::logging::{
    LogComponent, LogEntry, Logger, init_logger, init_time_provider,
};
use crate::domain::market_data::Indicator;
use crate::infrastructure::http::YahooChartClient;
use crate::infrastructure::rendering::ChartCanvasRenderer;
use crate::infrastructure::services::{BrowserTimeProvider, ConsoleLogger};
use crate::{log_error, log_info};

pub const CHART_WIDTH: u32 = 560;
pub const CHART_HEIGHT: u32 = 420;
const LEFT_CANVAS_ID: &str = "chart-canvas-left";
const RIGHT_CANVAS_ID: &str = "chart-canvas-right";

type SharedController = Rc<RefCell<Option<DashboardController<YahooChartClient>>>>;

// Global signals bridging domain logging into the in-page console
thread_local! {
    static GLOBAL_LOGS: RwSignal<Vec<String>> = create_rw_signal(Vec::new());
}

/// Bridge logger: every entry goes to the browser console and to the
/// in-page log panel.
pub struct UiLogger {
    console: ConsoleLogger,
}

impl UiLogger {
    pub fn new() -> Self {
        Self { console: ConsoleLogger::new_development() }
    }
}

impl Logger for UiLogger {
    fn log(&self, entry: LogEntry) {
        let formatted = entry.format_line();

        GLOBAL_LOGS.with(|logs| {
            logs.update(|lines| {
                lines.push(formatted);
                while lines.len() > 100 {
                    lines.remove(0);
                }
            });
        });

        self.console.log(entry);
    }
}

/// Draw whatever the controller currently publishes onto both canvases.
fn redraw(controller: &DashboardController<YahooChartClient>) {
    let Some(pair) = controller.display().charts() else {
        return;
    };

    let left = ChartCanvasRenderer::new(LEFT_CANVAS_ID, CHART_WIDTH, CHART_HEIGHT);
    let right = ChartCanvasRenderer::new(RIGHT_CANVAS_ID, CHART_WIDTH, CHART_HEIGHT);

    if let Err(e) = left.render(&pair.left) {
        log_error!(LogComponent::Ui, "Left chart render failed: {e:?}");
    }
    if let Err(e) = right.render(&pair.right) {
        log_error!(LogComponent::Ui, "Right chart render failed: {e:?}");
    }
}

/// Root component: input surface on top, the linked chart pair below it.
#[component]
pub fn App() -> impl IntoView {
    init_time_provider(Box::new(BrowserTimeProvider::new()));
    init_logger(Box::new(UiLogger::new()));

    log_info!(LogComponent::Ui, "🚀 Ticker dashboard ready");

    let controller: SharedController =
        Rc::new(RefCell::new(Some(DashboardController::new(YahooChartClient::new()))));

    // Input surface defaults match the classic demo pair
    let (symbol1, set_symbol1) = create_signal("AAPL".to_string());
    let (symbol2, set_symbol2) = create_signal("MSFT".to_string());
    let (start_date, set_start_date) = create_signal("2020-01-01".to_string());
    let (end_date, set_end_date) = create_signal("2020-02-01".to_string());
    let selection = create_rw_signal::<Vec<Indicator>>(Vec::new());

    let (busy, set_busy) = create_signal(false);
    let (status, set_status) = create_signal("Enter two tickers and press Load Data".to_string());
    let (generation, set_generation) = create_signal(0u64);

    // Drag-pan state shared by both canvases (one axis moves both)
    let (dragging, set_dragging) = create_signal(false);
    let (last_x, set_last_x) = create_signal(0.0f64);

    {
        let controller = Rc::clone(&controller);
        create_effect(move |_| {
            if generation.get() == 0 {
                return;
            }
            if let Some(ctrl) = controller.borrow().as_ref() {
                redraw(ctrl);
            }
        });
    }

    let on_load = {
        let controller = Rc::clone(&controller);
        move |_| {
            if busy.get_untracked() {
                return;
            }
            set_busy.set(true);
            set_status.set("⏳ Loading...".to_string());

            let input = DashboardInput {
                symbol1: symbol1.get_untracked(),
                symbol2: symbol2.get_untracked(),
                start: start_date.get_untracked(),
                end: end_date.get_untracked(),
                indicators: selection.get_untracked(),
            };

            let controller = Rc::clone(&controller);
            spawn_local(async move {
                // Taken out for the duration of the run, so event handlers
                // never observe a half-finished pipeline.
                let Some(mut ctrl) = controller.borrow_mut().take() else {
                    set_busy.set(false);
                    return;
                };

                let outcome = ctrl.handle_load(&input).await;
                let message = match outcome {
                    RunOutcome::Published => {
                        format!("✅ Loaded {} and {}", input.symbol1.trim(), input.symbol2.trim())
                    }
                    RunOutcome::RejectedInput => {
                        "⚠️ Input rejected - check tickers and dates".to_string()
                    }
                    RunOutcome::FetchFailed => {
                        "❌ Data could not be loaded. Check ticker symbols and date range."
                            .to_string()
                    }
                    RunOutcome::Busy => "A load is already running".to_string(),
                };

                let current_generation = ctrl.display().generation();
                *controller.borrow_mut() = Some(ctrl);

                set_status.set(message);
                set_generation.set(current_generation);
                set_busy.set(false);
            });
        }
    };

    let on_wheel = {
        let controller = Rc::clone(&controller);
        move |ev: web_sys::WheelEvent| {
            ev.prevent_default();
            if let Some(ctrl) = controller.borrow().as_ref() {
                if let Some(pair) = ctrl.display().charts() {
                    let factor = if ev.delta_y() < 0.0 { 1.1 } else { 1.0 / 1.1 };
                    let anchor = ev.offset_x() as f64 / CHART_WIDTH as f64;
                    pair.left.x_axis.zoom_about(factor, anchor);
                    redraw(ctrl);
                }
            }
        }
    };

    let on_mouse_down = move |ev: web_sys::MouseEvent| {
        set_dragging.set(true);
        set_last_x.set(ev.client_x() as f64);
    };

    let on_mouse_move = {
        let controller = Rc::clone(&controller);
        move |ev: web_sys::MouseEvent| {
            if !dragging.get_untracked() {
                return;
            }
            let x = ev.client_x() as f64;
            let delta_px = x - last_x.get_untracked();
            set_last_x.set(x);

            if let Some(ctrl) = controller.borrow().as_ref() {
                if let Some(pair) = ctrl.display().charts() {
                    let span = pair.left.x_axis.range().span();
                    pair.left.x_axis.pan_by(-delta_px / CHART_WIDTH as f64 * span);
                    redraw(ctrl);
                }
            }
        }
    };

    let on_mouse_up = move |_ev: web_sys::MouseEvent| set_dragging.set(false);

    view! {
        <style>
            {r#"
            .ticker-dashboard {
                font-family: 'SF Pro Display', -apple-system, BlinkMacSystemFont, sans-serif;
                background: #f4f6f9;
                min-height: 100vh;
                padding: 20px;
                color: #22303f;
            }

            .input-panel {
                display: flex;
                flex-wrap: wrap;
                align-items: flex-end;
                gap: 14px;
                background: white;
                border: 1px solid #d7dee6;
                border-radius: 10px;
                padding: 16px;
                margin-bottom: 16px;
            }

            .field {
                display: flex;
                flex-direction: column;
                font-size: 12px;
                gap: 4px;
            }

            .field input[type="text"], .field input[type="date"] {
                border: 1px solid #b8c4d0;
                border-radius: 6px;
                padding: 6px 8px;
                font-size: 14px;
            }

            .indicator-list {
                display: flex;
                flex-direction: column;
                gap: 2px;
                font-size: 13px;
            }

            .load-button {
                background: #2e8b57;
                color: white;
                border: none;
                border-radius: 6px;
                padding: 9px 18px;
                font-size: 14px;
                cursor: pointer;
            }

            .load-button:disabled {
                background: #9fb5a9;
                cursor: wait;
            }

            .status-line {
                margin: 8px 2px;
                font-size: 13px;
            }

            .chart-row {
                display: flex;
                gap: 12px;
            }

            .chart-row canvas {
                border: 1px solid #d7dee6;
                border-radius: 8px;
                background: white;
                cursor: grab;
            }

            .log-console {
                background: #1c242d;
                color: #d5dde5;
                border-radius: 8px;
                margin-top: 16px;
                padding: 10px 12px;
                max-height: 180px;
                overflow-y: auto;
                font-family: 'Courier New', monospace;
                font-size: 11px;
                line-height: 1.4;
            }
            "#}
        </style>
        <div class="ticker-dashboard">
            <div class="input-panel">
                <div class="field">
                    "Stock 1"
                    <input
                        type="text"
                        prop:value=symbol1
                        on:input=move |ev| set_symbol1.set(event_target_value(&ev))
                    />
                </div>
                <div class="field">
                    "Stock 2"
                    <input
                        type="text"
                        prop:value=symbol2
                        on:input=move |ev| set_symbol2.set(event_target_value(&ev))
                    />
                </div>
                <div class="field">
                    "Start Date"
                    <input
                        type="date"
                        prop:value=start_date
                        on:input=move |ev| set_start_date.set(event_target_value(&ev))
                    />
                </div>
                <div class="field">
                    "End Date"
                    <input
                        type="date"
                        prop:value=end_date
                        on:input=move |ev| set_end_date.set(event_target_value(&ev))
                    />
                </div>
                <div class="indicator-list">
                    <For
                        each=move || Indicator::iter()
                        key=|indicator| indicator.label()
                        children=move |indicator| {
                            view! {
                                <label>
                                    <input
                                        type="checkbox"
                                        on:change=move |ev| {
                                            let checked = event_target_checked(&ev);
                                            selection.update(|selected| {
                                                if checked {
                                                    if !selected.contains(&indicator) {
                                                        selected.push(indicator);
                                                    }
                                                } else {
                                                    selected.retain(|i| *i != indicator);
                                                }
                                            });
                                        }
                                    />
                                    {indicator.label()}
                                </label>
                            }
                        }
                    />
                </div>
                <button class="load-button" prop:disabled=busy on:click=on_load>
                    {move || if busy.get() { "Loading..." } else { "Load Data" }}
                </button>
            </div>

            <div class="status-line">{status}</div>

            <div class="chart-row">
                <canvas
                    id=LEFT_CANVAS_ID
                    width=CHART_WIDTH
                    height=CHART_HEIGHT
                    on:wheel=on_wheel.clone()
                    on:mousedown=on_mouse_down
                    on:mousemove=on_mouse_move.clone()
                    on:mouseup=on_mouse_up
                    on:mouseleave=on_mouse_up
                />
                <canvas
                    id=RIGHT_CANVAS_ID
                    width=CHART_WIDTH
                    height=CHART_HEIGHT
                    on:wheel=on_wheel
                    on:mousedown=on_mouse_down
                    on:mousemove=on_mouse_move
                    on:mouseup=on_mouse_up
                    on:mouseleave=on_mouse_up
                />
            </div>

            <LogConsole />
        </div>
    }
}

/// In-page mirror of the structured log, newest entries at the bottom.
#[component]
fn LogConsole() -> impl IntoView {
    let logs = GLOBAL_LOGS.with(|logs| *logs);

    view! {
        <div class="log-console">
            <For
                each=move || logs.get()
                key=|line| line.clone()
                children=move |line| {
                    view! { <div>{line}</div> }
                }
            />
        </div>
    }
}
