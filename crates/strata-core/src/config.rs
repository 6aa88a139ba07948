// File: crates/strata-core/src/config.rs
// Summary: Container configuration (margins, gap, label and tick settings), loadable from TOML.

use serde::Deserialize;

use crate::error::{ChartError, Result};
use crate::theme::{self, Theme};
use crate::types::Insets;

/// How bottom time labels are emitted when several windows share the axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TimeLabels {
    /// One row of labels for the whole canvas.
    #[default]
    Once,
    /// One row per window, all at the canvas bottom (labels overdraw each other).
    PerWindow,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ContainerOptions {
    pub margins: Insets,
    /// Vertical gap between stacked windows, in pixels.
    pub gap: f64,
    /// Theme preset name, see [`theme::presets`].
    pub theme: String,
    pub label_font_size: f32,
    /// Target pixels between value gridlines.
    pub value_tick_spacing: f64,
    /// Target pixels between time gridlines.
    pub time_tick_spacing: f64,
    pub time_labels: TimeLabels,
}

impl Default for ContainerOptions {
    fn default() -> Self {
        Self {
            margins: Insets::default(),
            gap: 5.0,
            theme: "light".to_string(),
            label_font_size: 10.0,
            value_tick_spacing: 40.0,
            time_tick_spacing: 100.0,
            time_labels: TimeLabels::Once,
        }
    }
}

impl ContainerOptions {
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let opts: Self = toml::from_str(s).map_err(|e| ChartError::Config(e.to_string()))?;
        opts.validate()?;
        Ok(opts)
    }

    pub fn validate(&self) -> Result<()> {
        let m = &self.margins;
        if [m.left, m.right, m.top, m.bottom, self.gap].iter().any(|v| !v.is_finite() || *v < 0.0) {
            return Err(ChartError::Config("margins and gap must be finite and non-negative".into()));
        }
        if !(self.value_tick_spacing > 0.0 && self.time_tick_spacing > 0.0) {
            return Err(ChartError::Config("tick spacing must be positive".into()));
        }
        if !(self.label_font_size > 0.0) {
            return Err(ChartError::Config("label_font_size must be positive".into()));
        }
        Ok(())
    }

    pub fn resolved_theme(&self) -> Theme {
        theme::find(&self.theme)
    }
}
