use std::cell::RefCell;
use std::rc::Rc;

/// Value Object - the visible window of the horizontal (time) axis, in
/// epoch milliseconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisRange {
    pub start: f64,
    pub end: f64,
}

impl AxisRange {
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    pub fn span(&self) -> f64 {
        self.end - self.start
    }

    pub fn pan_by(&mut self, delta_ms: f64) {
        self.start += delta_ms;
        self.end += delta_ms;
    }

    /// Zoom keeping the point at `anchor` (0..1 across the window) stable.
    /// `factor > 1` narrows the window.
    pub fn zoom_about(&mut self, factor: f64, anchor: f64) {
        if factor <= 0.0 {
            return;
        }
        let anchor = anchor.clamp(0.0, 1.0);
        let pivot = self.start + self.span() * anchor;
        self.start = pivot - (pivot - self.start) / factor;
        self.end = pivot + (self.end - pivot) / factor;
    }
}

/// Shared handle to one chart's horizontal-axis range.
///
/// The first chart built creates the range and owns it; a second chart
/// holding a clone of the handle is axis-linked - panning or zooming
/// through either handle moves both charts, because both read the same
/// cell on redraw.
#[derive(Debug, Clone)]
pub struct AxisHandle(Rc<RefCell<AxisRange>>);

impl AxisHandle {
    pub fn new(range: AxisRange) -> Self {
        Self(Rc::new(RefCell::new(range)))
    }

    /// Copy of the current window.
    pub fn range(&self) -> AxisRange {
        *self.0.borrow()
    }

    pub fn pan_by(&self, delta_ms: f64) {
        self.0.borrow_mut().pan_by(delta_ms);
    }

    pub fn zoom_about(&self, factor: f64, anchor: f64) {
        self.0.borrow_mut().zoom_about(factor, anchor);
    }

    /// True when both handles point at the same underlying range object.
    pub fn shares_range_with(&self, other: &AxisHandle) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

/// Fixed drawing parameters carried on every chart model.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartStyle {
    pub gain_color: &'static str,
    pub loss_color: &'static str,
    pub wick_color: &'static str,
    /// Body width in time-axis units: half a day, regardless of the
    /// sampling interval of the series.
    pub body_width_ms: f64,
    /// Rotation of the horizontal tick labels, in radians.
    pub tick_label_rotation: f64,
    pub grid_line_alpha: f64,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            gain_color: "#00ff00",
            loss_color: "#ff0000",
            wick_color: "black",
            body_width_ms: 12.0 * 60.0 * 60.0 * 1000.0,
            tick_label_rotation: std::f64::consts::FRAC_PI_4,
            grid_line_alpha: 0.25,
        }
    }
}
