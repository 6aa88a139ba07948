// File: crates/strata-core/src/types.rs
// Summary: Shared types and constants (margins, time points, axis ticks).

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Timestamps on the shared horizontal axis.
pub type Timestamp = DateTime<Utc>;

/// Fixed label fields around the plot area, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct Insets {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl Insets {
    pub const fn new(left: f64, right: f64, top: f64, bottom: f64) -> Self {
        Self { left, right, top, bottom }
    }
    /// Total horizontal inset (left + right).
    pub fn hsum(&self) -> f64 { self.left + self.right }
    /// Total vertical inset (top + bottom).
    pub fn vsum(&self) -> f64 { self.top + self.bottom }
}

impl Default for Insets {
    fn default() -> Self {
        Self::new(50.0, 50.0, 5.0, 20.0)
    }
}

/// A (timestamp, value) sample of a time-indexed series.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimePoint {
    pub t: Timestamp,
    pub value: f64,
}

impl TimePoint {
    pub const fn new(t: Timestamp, value: f64) -> Self {
        Self { t, value }
    }
}

/// A gridline position: the real value (or time) it marks, where it lands on
/// the draw surface along its axis, and its display label.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisTick<T> {
    pub value: T,
    pub pos: f64,
    pub label: String,
}

pub type ValueTick = AxisTick<f64>;
pub type TimeTick = AxisTick<Timestamp>;
