// File: crates/strata-core/src/draw.rs
// Summary: Chart-type renderers appending primitives to a window surface in window-local pixels.

use tracing::trace;

use crate::geometry::{Point, Rect};
use crate::scene::{Node, PathCmd, Style};
use crate::series::{BarStyle, Candle, CandleStyle, HistBar, VolumeBar};
use crate::types::{TimePoint, Timestamp};
use crate::window::Window;

/// Wick from high to low plus an open/close body (at least 1px tall).
pub fn candle(w: &mut Window, c: &Candle, st: &CandleStyle) {
    let x = w.map_time_to_pixel(c.t);
    let y_h = w.map_value_to_pixel(c.high);
    let y_l = w.map_value_to_pixel(c.low);
    let y_o = w.map_value_to_pixel(c.open);
    let y_c = w.map_value_to_pixel(c.close);
    trace!(window = w.name(), x, y_o, y_c, "candle");

    w.push(Node::line((x, y_h), (x, y_l), st.wick));
    let body = Rect::column(x, st.width * 0.5, y_o, y_c).with_min_height(1.0);
    w.push(Node::rect(body, if c.is_up() { st.up } else { st.down }));
}

/// Bar rising from the bottom of the value range.
pub fn volume(w: &mut Window, v: &VolumeBar, st: &BarStyle) {
    let x = w.map_time_to_pixel(v.t);
    let scale = *w.value_scale();
    let y0 = scale.to_px(scale.bottom());
    let y1 = scale.to_px(scale.clamp(v.volume));
    trace!(window = w.name(), x, volume = v.volume, "volume");
    w.push(Node::rect(Rect::column(x, st.width * 0.5, y0, y1), st.up));
}

/// Bar from the zero baseline (clamped into the value range) to the bar value.
pub fn hist(w: &mut Window, h: &HistBar, st: &BarStyle) {
    let x = w.map_time_to_pixel(h.t);
    let scale = *w.value_scale();
    let base = scale.clamp(0.0);
    let y0 = scale.to_px(base);
    let y1 = scale.to_px(scale.clamp(h.value));
    let style = if h.value >= base { st.up } else { st.down };
    trace!(window = w.name(), x, value = h.value, "hist");
    w.push(Node::rect(Rect::column(x, st.width * 0.5, y0, y1), style));
}

/// Catmull-Rom smoothed curve through the points. Fewer than two points draw nothing.
pub fn smooth_by_time(w: &mut Window, points: &[TimePoint], style: Style) {
    if points.len() < 2 {
        return;
    }
    let pts: Vec<Point> = points
        .iter()
        .map(|p| Point::new(w.map_time_to_pixel(p.t), w.map_value_to_pixel(p.value)))
        .collect();
    trace!(window = w.name(), points = pts.len(), "smooth line");
    w.push(Node::Path { cmds: catmull_rom(&pts), style });
}

/// Vertical line across the full window height at `t`.
pub fn ver_by_time(w: &mut Window, t: Timestamp, style: Style) {
    let x = w.map_time_to_pixel(t);
    let h = w.pixel_height();
    w.push(Node::line((x, 0.0), (x, h), style));
}

/// Horizontal line across the full window width at value `y`.
pub fn hor(w: &mut Window, y: f64, style: Style) {
    let py = w.map_value_to_pixel(y);
    let width = w.pixel_width();
    w.push(Node::line((0.0, py), (width, py), style));
}

/// Convert a polyline to cubic segments passing through every point.
pub fn catmull_rom(pts: &[Point]) -> Vec<PathCmd> {
    let mut cmds = Vec::with_capacity(pts.len());
    let Some(&first) = pts.first() else { return cmds };
    cmds.push(PathCmd::MoveTo(first));
    if pts.len() == 2 {
        cmds.push(PathCmd::LineTo(pts[1]));
        return cmds;
    }
    let last = pts.len() - 1;
    for i in 0..last {
        let p0 = pts[i.saturating_sub(1)];
        let p1 = pts[i];
        let p2 = pts[i + 1];
        let p3 = pts[(i + 2).min(last)];
        let c1 = Point::new(p1.x + (p2.x - p0.x) / 6.0, p1.y + (p2.y - p0.y) / 6.0);
        let c2 = Point::new(p2.x - (p3.x - p1.x) / 6.0, p2.y - (p3.y - p1.y) / 6.0);
        cmds.push(PathCmd::CubicTo(c1, c2, p2));
    }
    cmds
}
