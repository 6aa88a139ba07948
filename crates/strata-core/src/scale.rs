// File: crates/strata-core/src/scale.rs
// Summary: Time (X) and value (Y) transforms from real units to draw-surface pixels.

use chrono::Duration;

use crate::error::{ChartError, Result};
use crate::grid;
use crate::types::{TimeTick, Timestamp, ValueTick};

/// Map a real value into `[0, pixel_height]`, top of the range at pixel 0.
pub fn map_value(real: f64, bottom: f64, top: f64, pixel_height: f64) -> Result<f64> {
    if !(bottom.is_finite() && top.is_finite()) || top == bottom {
        return Err(ChartError::InvalidValueRange { bottom, top });
    }
    Ok(pixel_height * (top - real) / (top - bottom))
}

/// Map a timestamp into `[0, pixel_width]`, left of the range at pixel 0.
pub fn map_time(t: Timestamp, left: Timestamp, right: Timestamp, pixel_width: f64) -> Result<f64> {
    if left == right {
        return Err(ChartError::InvalidTimeRange { left, right });
    }
    Ok(pixel_width * seconds(t - left) / seconds(right - left))
}

/// Duration as fractional seconds, microsecond precision where it fits.
pub fn seconds(d: Duration) -> f64 {
    match d.num_microseconds() {
        Some(us) => us as f64 / 1e6,
        None => d.num_milliseconds() as f64 / 1e3,
    }
}

/// Vertical value scale of one window. Construction validates the range, so
/// mapping never fails afterwards.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ValueScale {
    bottom: f64,
    top: f64,
    height_px: f64,
}

impl ValueScale {
    pub fn new(bottom: f64, top: f64, height_px: f64) -> Result<Self> {
        if !(bottom.is_finite() && top.is_finite()) || top <= bottom {
            return Err(ChartError::InvalidValueRange { bottom, top });
        }
        Ok(Self { bottom, top, height_px: height_px.max(0.0) })
    }

    pub fn bottom(&self) -> f64 { self.bottom }
    pub fn top(&self) -> f64 { self.top }
    pub fn height_px(&self) -> f64 { self.height_px }

    pub(crate) fn set_height_px(&mut self, h: f64) {
        self.height_px = h.max(0.0);
    }

    #[inline]
    pub fn to_px(&self, y: f64) -> f64 {
        self.height_px * (self.top - y) / (self.top - self.bottom)
    }

    #[inline]
    pub fn from_px(&self, py: f64) -> f64 {
        if self.height_px <= 0.0 {
            return self.top;
        }
        self.top - py / self.height_px * (self.top - self.bottom)
    }

    /// Clamp a value into `[bottom, top]`.
    pub fn clamp(&self, y: f64) -> f64 {
        y.clamp(self.bottom, self.top)
    }

    pub fn ticks(&self, approx: usize) -> Vec<ValueTick> {
        grid::gridlines_y(self.bottom, self.top, self.height_px, approx)
    }
}

/// Horizontal time scale shared by every window of a container.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimeScale {
    left: Timestamp,
    right: Timestamp,
    width_px: f64,
}

impl TimeScale {
    pub fn new(left: Timestamp, right: Timestamp, width_px: f64) -> Result<Self> {
        if right <= left {
            return Err(ChartError::InvalidTimeRange { left, right });
        }
        Ok(Self { left, right, width_px: width_px.max(0.0) })
    }

    pub fn left(&self) -> Timestamp { self.left }
    pub fn right(&self) -> Timestamp { self.right }
    pub fn width_px(&self) -> f64 { self.width_px }

    /// Replace the range. Ranges that are not strictly increasing are rejected.
    pub(crate) fn set_range(&mut self, left: Timestamp, right: Timestamp) -> Result<()> {
        *self = Self::new(left, right, self.width_px)?;
        Ok(())
    }

    #[inline]
    pub fn to_px(&self, t: Timestamp) -> f64 {
        self.width_px * seconds(t - self.left) / seconds(self.right - self.left)
    }

    pub fn ticks(&self, approx: usize) -> Vec<TimeTick> {
        grid::gridlines_x(self.left, self.right, self.width_px, approx)
    }
}
