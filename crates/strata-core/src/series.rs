// File: crates/strata-core/src/series.rs
// Summary: Series data points (candles, volume bars, histogram bars) and their draw styles.

use skia_safe::Color;

use crate::error::{ChartError, Result};
use crate::scene::Style;
use crate::theme::Theme;
use crate::types::Timestamp;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Candle {
    pub t: Timestamp,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
}

impl Candle {
    /// Construct a candle enforcing OHLC invariants:
    /// low <= min(open,close) and high >= max(open,close).
    pub fn try_new(t: Timestamp, open: f64, high: f64, low: f64, close: f64) -> Result<Self> {
        if ![open, high, low, close].iter().all(|v| v.is_finite()) {
            return Err(ChartError::InvalidCandle("non-finite price"));
        }
        if low > open.min(close) { return Err(ChartError::InvalidCandle("low above min(open,close)")); }
        if high < open.max(close) { return Err(ChartError::InvalidCandle("high below max(open,close)")); }
        Ok(Self { t, open, high, low, close })
    }

    pub fn is_up(&self) -> bool { self.close >= self.open }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VolumeBar {
    pub t: Timestamp,
    pub volume: f64,
}

/// Histogram bar drawn from the zero baseline towards `value`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HistBar {
    pub t: Timestamp,
    pub value: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CandleStyle {
    /// Body width in pixels.
    pub width: f64,
    pub up: Style,
    pub down: Style,
    pub wick: Style,
}

impl CandleStyle {
    pub fn from_theme(theme: &Theme) -> Self {
        let outline = Style::new().stroke(theme.candle_outline).stroke_width(0.5);
        Self {
            width: 6.0,
            up: outline.fill(theme.candle_up),
            down: outline.fill(theme.candle_down),
            wick: Style::new().stroke(theme.candle_outline).stroke_width(1.0),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BarStyle {
    pub width: f64,
    pub up: Style,
    /// Used for bars below the baseline.
    pub down: Style,
}

impl BarStyle {
    pub fn volume(theme: &Theme) -> Self {
        let s = Style::new().fill(theme.volume).stroke_width(0.0);
        Self { width: 6.0, up: s, down: s }
    }

    pub fn histogram(theme: &Theme) -> Self {
        Self {
            width: 6.0,
            up: Style::new().fill(theme.hist_up).stroke_width(0.0),
            down: Style::new().fill(theme.hist_down).stroke_width(0.0),
        }
    }
}

/// Stroke-only style for line series and reference lines.
pub fn line_style(color: Color, width: f32) -> Style {
    Style::new().no_fill().stroke(color).stroke_width(width)
}
