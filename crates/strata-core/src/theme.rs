// File: crates/strata-core/src/theme.rs
// Summary: Light/Dark palettes for chart decorations and series.

use skia_safe as skia;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    /// Default fill of the container group (shows through as the plot background).
    pub background: skia::Color,
    pub border: skia::Color,
    pub axis_label: skia::Color,
    pub candle_up: skia::Color,
    pub candle_down: skia::Color,
    pub candle_outline: skia::Color,
    pub volume: skia::Color,
    pub hist_up: skia::Color,
    pub hist_down: skia::Color,
    pub line_stroke: skia::Color,
    pub ref_line: skia::Color,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 0xee, 0xee, 0xee),
            border: skia::Color::BLACK,
            axis_label: skia::Color::BLACK,
            candle_up: skia::Color::from_argb(255, 0x80, 0x80, 0x80),
            candle_down: skia::Color::from_argb(255, 0xd3, 0xd3, 0xd3),
            candle_outline: skia::Color::BLACK,
            volume: skia::Color::from_argb(255, 0xa9, 0xa9, 0xa9),
            hist_up: skia::Color::from_argb(255, 20, 160, 90),
            hist_down: skia::Color::from_argb(255, 200, 60, 60),
            line_stroke: skia::Color::from_argb(255, 32, 120, 200),
            ref_line: skia::Color::from_argb(255, 100, 100, 110),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            border: skia::Color::from_argb(255, 180, 180, 190),
            axis_label: skia::Color::from_argb(255, 235, 235, 245),
            candle_up: skia::Color::from_argb(255, 40, 200, 120),
            candle_down: skia::Color::from_argb(255, 220, 80, 80),
            candle_outline: skia::Color::from_argb(255, 150, 150, 160),
            volume: skia::Color::from_argb(255, 96, 156, 255),
            hist_up: skia::Color::from_argb(255, 40, 200, 120),
            hist_down: skia::Color::from_argb(255, 220, 80, 80),
            line_stroke: skia::Color::from_argb(255, 64, 160, 255),
            ref_line: skia::Color::from_argb(255, 255, 230, 70),
        }
    }
}

impl Default for Theme {
    fn default() -> Self { Theme::light() }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    for t in presets() { if t.name.eq_ignore_ascii_case(name) { return t; } }
    Theme::light()
}
