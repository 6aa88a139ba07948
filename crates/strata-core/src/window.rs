// File: crates/strata-core/src/window.rs
// Summary: One stacked sub-plot: own value scale, shared time scale, own draw surface.

use crate::error::{ChartError, Result};
use crate::scale::{TimeScale, ValueScale};
use crate::scene::{Group, Node};
use crate::types::{TimeTick, Timestamp, ValueTick};

/// Fraction of the value span added above/below when padding is requested.
pub const VALUE_PAD_FRACTION: f64 = 0.1;
/// The time span is divided by this to get the left/right padding (1%).
pub const TIME_PAD_DIVISOR: i32 = 100;

/// Edge space: which bounds are pushed outwards so data does not touch the frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EdgeSpace {
    pub left: bool,
    pub top: bool,
    pub right: bool,
    pub bottom: bool,
}

impl EdgeSpace {
    pub const NONE: EdgeSpace = EdgeSpace { left: false, top: false, right: false, bottom: false };
    pub const ALL: EdgeSpace = EdgeSpace { left: true, top: true, right: true, bottom: true };

    pub fn left(mut self) -> Self { self.left = true; self }
    pub fn top(mut self) -> Self { self.top = true; self }
    pub fn right(mut self) -> Self { self.right = true; self }
    pub fn bottom(mut self) -> Self { self.bottom = true; self }

    /// Widen `[bottom, top]` by 10% of its span on the flagged sides.
    pub fn pad_values(&self, bottom: f64, top: f64) -> (f64, f64) {
        let pad = (top - bottom) * VALUE_PAD_FRACTION;
        (
            if self.bottom { bottom - pad } else { bottom },
            if self.top { top + pad } else { top },
        )
    }

    /// Widen `[left, right]` by 1% of its span on the flagged sides.
    pub fn pad_times(&self, left: Timestamp, right: Timestamp) -> (Timestamp, Timestamp) {
        let pad = (right - left) / TIME_PAD_DIVISOR;
        (
            if self.left { left - pad } else { left },
            if self.right { right + pad } else { right },
        )
    }
}

#[derive(Clone, Debug)]
pub struct Window {
    name: String,
    percent_height: f64,
    /// Range this window asked for; the shared range is derived from these.
    requested: (Timestamp, Timestamp),
    values: ValueScale,
    time: TimeScale,
    offset_top: f64,
    value_tick_spacing: f64,
    time_tick_spacing: f64,
    surface: Group,
}

impl Window {
    /// Create a window with zero pixel height; the container lays it out.
    pub fn new(
        name: impl Into<String>,
        bottom: f64,
        top: f64,
        width_px: f64,
        percent_height: f64,
        left: Timestamp,
        right: Timestamp,
    ) -> Result<Self> {
        if !percent_height.is_finite() || percent_height <= 0.0 {
            return Err(ChartError::InvalidHeightPercent(percent_height));
        }
        let values = ValueScale::new(bottom, top, 0.0)?;
        let time = TimeScale::new(left, right, width_px)?;
        Ok(Self {
            name: name.into(),
            percent_height,
            requested: (left, right),
            values,
            time,
            offset_top: 0.0,
            value_tick_spacing: 40.0,
            time_tick_spacing: 100.0,
            surface: Group::new(),
        })
    }

    pub(crate) fn with_tick_spacing(mut self, value_px: f64, time_px: f64) -> Self {
        self.value_tick_spacing = value_px;
        self.time_tick_spacing = time_px;
        self
    }

    pub fn name(&self) -> &str { &self.name }
    pub fn percent_height(&self) -> f64 { self.percent_height }
    pub fn pixel_height(&self) -> f64 { self.values.height_px() }
    pub fn pixel_width(&self) -> f64 { self.time.width_px() }
    pub fn offset_top(&self) -> f64 { self.offset_top }
    pub fn value_range(&self) -> (f64, f64) { (self.values.bottom(), self.values.top()) }
    pub fn time_range(&self) -> (Timestamp, Timestamp) { (self.time.left(), self.time.right()) }
    pub fn requested_time_range(&self) -> (Timestamp, Timestamp) { self.requested }
    pub fn value_scale(&self) -> &ValueScale { &self.values }
    pub fn time_scale(&self) -> &TimeScale { &self.time }

    /// Overwrite the time range with the container-wide one.
    pub(crate) fn set_global_time_range(&mut self, left: Timestamp, right: Timestamp) -> Result<()> {
        self.time.set_range(left, right)
    }

    pub(crate) fn set_pixel_height(&mut self, h: f64) {
        self.values.set_height_px(h);
    }

    pub(crate) fn set_offset_top(&mut self, y: f64) {
        self.offset_top = y;
    }

    /// Window-local y of a real value (0 at the top of the value range).
    pub fn map_value_to_pixel(&self, v: f64) -> f64 {
        self.values.to_px(v)
    }

    /// Window-local x of a timestamp (0 at the left of the shared range).
    pub fn map_time_to_pixel(&self, t: Timestamp) -> f64 {
        self.time.to_px(t)
    }

    pub fn value_at_pixel(&self, py: f64) -> f64 {
        self.values.from_px(py)
    }

    pub fn gridlines_y(&self) -> Vec<ValueTick> {
        self.values.ticks(approx_count(self.pixel_height(), self.value_tick_spacing))
    }

    pub fn gridlines_x(&self) -> Vec<TimeTick> {
        self.time.ticks(approx_count(self.pixel_width(), self.time_tick_spacing))
    }

    pub fn surface(&self) -> &Group { &self.surface }

    /// Append a primitive in window-local coordinates.
    pub fn push(&mut self, node: impl Into<Node>) {
        self.surface.append(node);
    }
}

fn approx_count(extent_px: f64, spacing_px: f64) -> usize {
    if spacing_px <= 0.0 {
        return 2;
    }
    ((extent_px / spacing_px).round() as usize).max(2)
}
