use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::domain::chart::{AxisRange, BodyBar, ChartModel};
use crate::domain::logging::LogComponent;
use crate::log_debug;
use crate::time_utils;

const MARGIN_LEFT: f64 = 56.0;
const MARGIN_RIGHT: f64 = 12.0;
const MARGIN_TOP: f64 = 28.0;
const MARGIN_BOTTOM: f64 = 44.0;
const X_TICKS: usize = 6;
const Y_TICKS: usize = 5;

/// Pixel mapping for one frame, precomputed once per render.
#[derive(Debug, Clone)]
struct ScaleParams {
    axis: AxisRange,
    price_floor: f64,
    price_ceil: f64,
    plot_width: f64,
    plot_height: f64,
}

impl ScaleParams {
    fn x(&self, timestamp_ms: f64) -> f64 {
        MARGIN_LEFT + (timestamp_ms - self.axis.start) / self.axis.span() * self.plot_width
    }

    fn y(&self, price: f64) -> f64 {
        let range = self.price_ceil - self.price_floor;
        MARGIN_TOP + (self.price_ceil - price) / range * self.plot_height
    }

    /// Body width in pixels; never collapses below one device pixel.
    fn body_px(&self, body_width_ms: f64) -> f64 {
        (body_width_ms / self.axis.span() * self.plot_width).max(1.0)
    }
}

/// Canvas 2D renderer for a prepared chart model - Infrastructure
/// implementation. Reads the (possibly shared) axis range at draw time,
/// so linked charts pick up each other's pan/zoom on redraw.
pub struct ChartCanvasRenderer {
    canvas_id: String,
    width: u32,
    height: u32,
}

impl ChartCanvasRenderer {
    pub fn new(canvas_id: &str, width: u32, height: u32) -> Self {
        Self { canvas_id: canvas_id.to_string(), width, height }
    }

    fn context(&self) -> Result<CanvasRenderingContext2d, JsValue> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| JsValue::from_str("No document"))?;
        let canvas = document
            .get_element_by_id(&self.canvas_id)
            .ok_or_else(|| JsValue::from_str("Canvas element not found"))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| JsValue::from_str("Element is not a canvas"))?;

        canvas.set_width(self.width);
        canvas.set_height(self.height);

        canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("No 2D context"))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| JsValue::from_str("Failed to cast to 2D context"))
    }

    fn scale_params(&self, chart: &ChartModel) -> ScaleParams {
        let mut price_floor = chart.price_floor;
        let mut price_ceil = chart.price_ceil;
        if price_ceil <= price_floor {
            price_floor -= 0.5;
            price_ceil += 0.5;
        }

        ScaleParams {
            axis: chart.x_axis.range(),
            price_floor,
            price_ceil,
            plot_width: self.width as f64 - MARGIN_LEFT - MARGIN_RIGHT,
            plot_height: self.height as f64 - MARGIN_TOP - MARGIN_BOTTOM,
        }
    }

    pub fn render(&self, chart: &ChartModel) -> Result<(), JsValue> {
        let context = self.context()?;

        context.clear_rect(0.0, 0.0, self.width as f64, self.height as f64);
        context.set_fill_style(&JsValue::from("#ffffff"));
        context.fill_rect(0.0, 0.0, self.width as f64, self.height as f64);

        let params = self.scale_params(chart);
        if params.axis.span() <= 0.0 {
            return Ok(());
        }

        self.render_grid(&context, chart, &params)?;
        self.render_wicks(&context, chart, &params);
        self.render_bodies(&context, &chart.gain_bodies, chart.style.gain_color, chart, &params);
        self.render_bodies(&context, &chart.loss_bodies, chart.style.loss_color, chart, &params);
        self.render_overlays(&context, chart, &params)?;
        self.render_title(&context, chart)?;

        log_debug!(
            LogComponent::Renderer,
            "Rendered {} with {} candles",
            chart.symbol.value(),
            chart.candle_count()
        );

        Ok(())
    }

    /// Grid at reduced opacity, plus tick labels: prices on the left,
    /// rotated dates along the bottom.
    fn render_grid(
        &self,
        context: &CanvasRenderingContext2d,
        chart: &ChartModel,
        params: &ScaleParams,
    ) -> Result<(), JsValue> {
        context.set_stroke_style(&JsValue::from("#666666"));
        context.set_fill_style(&JsValue::from("#333333"));
        context.set_font("11px Arial");
        context.set_line_width(1.0);

        for i in 0..X_TICKS {
            let fraction = i as f64 / (X_TICKS - 1) as f64;
            let timestamp = params.axis.start + params.axis.span() * fraction;
            let x = params.x(timestamp);

            context.set_global_alpha(chart.style.grid_line_alpha);
            context.begin_path();
            context.move_to(x, MARGIN_TOP);
            context.line_to(x, MARGIN_TOP + params.plot_height);
            context.stroke();
            context.set_global_alpha(1.0);

            let label = time_utils::format_tick_label(timestamp, params.axis.span());
            context.save();
            context.translate(x, MARGIN_TOP + params.plot_height + 14.0)?;
            context.rotate(chart.style.tick_label_rotation)?;
            context.fill_text(&label, 0.0, 0.0)?;
            context.restore();
        }

        for i in 0..Y_TICKS {
            let fraction = i as f64 / (Y_TICKS - 1) as f64;
            let price = params.price_floor + (params.price_ceil - params.price_floor) * fraction;
            let y = params.y(price);

            context.set_global_alpha(chart.style.grid_line_alpha);
            context.begin_path();
            context.move_to(MARGIN_LEFT, y);
            context.line_to(MARGIN_LEFT + params.plot_width, y);
            context.stroke();
            context.set_global_alpha(1.0);

            context.fill_text(&format!("{:.2}", price), 4.0, y + 4.0)?;
        }

        Ok(())
    }

    fn render_wicks(
        &self,
        context: &CanvasRenderingContext2d,
        chart: &ChartModel,
        params: &ScaleParams,
    ) {
        context.set_stroke_style(&JsValue::from(chart.style.wick_color));
        context.set_line_width(1.0);

        for wick in &chart.wicks {
            if wick.timestamp_ms < params.axis.start || wick.timestamp_ms > params.axis.end {
                continue;
            }
            let x = params.x(wick.timestamp_ms);
            context.begin_path();
            context.move_to(x, params.y(wick.high));
            context.line_to(x, params.y(wick.low));
            context.stroke();
        }
    }

    fn render_bodies(
        &self,
        context: &CanvasRenderingContext2d,
        bodies: &[BodyBar],
        color: &str,
        chart: &ChartModel,
        params: &ScaleParams,
    ) {
        context.set_fill_style(&JsValue::from(color));
        let body_px = params.body_px(chart.style.body_width_ms);

        for body in bodies {
            if body.timestamp_ms < params.axis.start || body.timestamp_ms > params.axis.end {
                continue;
            }
            let x = params.x(body.timestamp_ms);
            let top = params.y(body.open.max(body.close));
            let bottom = params.y(body.open.min(body.close));
            context.fill_rect(x - body_px / 2.0, top, body_px, (bottom - top).max(1.0));
        }
    }

    /// Indicator polylines plus a small legend in the top-left corner.
    fn render_overlays(
        &self,
        context: &CanvasRenderingContext2d,
        chart: &ChartModel,
        params: &ScaleParams,
    ) -> Result<(), JsValue> {
        for (slot, overlay) in chart.overlays.iter().enumerate() {
            context.set_stroke_style(&JsValue::from(overlay.color()));
            context.set_line_width(1.5);
            context.begin_path();

            let mut pen_down = false;
            for &(timestamp_ms, value) in &overlay.points {
                if timestamp_ms < params.axis.start || timestamp_ms > params.axis.end {
                    continue;
                }
                let x = params.x(timestamp_ms);
                let y = params.y(value);
                if pen_down {
                    context.line_to(x, y);
                } else {
                    context.move_to(x, y);
                    pen_down = true;
                }
            }
            context.stroke();

            let legend_y = MARGIN_TOP + 14.0 + slot as f64 * 16.0;
            context.begin_path();
            context.move_to(MARGIN_LEFT + 8.0, legend_y - 4.0);
            context.line_to(MARGIN_LEFT + 28.0, legend_y - 4.0);
            context.stroke();
            context.set_fill_style(&JsValue::from(overlay.color()));
            context.set_font("11px Arial");
            context.fill_text(overlay.label(), MARGIN_LEFT + 34.0, legend_y)?;
        }

        Ok(())
    }

    fn render_title(
        &self,
        context: &CanvasRenderingContext2d,
        chart: &ChartModel,
    ) -> Result<(), JsValue> {
        context.set_fill_style(&JsValue::from("#333333"));
        context.set_font("bold 14px Arial");
        context.fill_text(chart.symbol.value(), MARGIN_LEFT, 18.0)?;
        Ok(())
    }
}
