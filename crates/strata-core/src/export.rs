// File: crates/strata-core/src/export.rs
// Summary: Replays a scene onto Skia canvases: SVG document (vector) and PNG (CPU raster).

use std::path::Path;

use anyhow::Result;
use skia_safe as skia;
use tracing::debug;

use crate::geometry::Point;
use crate::scene::{Group, Node, PathCmd, Style};
use crate::text::TextShaper;

/// Serialize `scene` to an SVG document of the given size.
pub fn to_svg_bytes(scene: &Group, width: f64, height: f64) -> Result<Vec<u8>> {
    let bounds = skia::Rect::from_wh(width as f32, height as f32);
    let canvas = skia::svg::Canvas::new(bounds, None);
    let shaper = TextShaper::new();
    replay(&canvas, scene, &Style::default(), &shaper);
    let data = canvas.end();
    debug!(bytes = data.as_bytes().len(), "svg export");
    Ok(data.as_bytes().to_vec())
}

/// Rasterize `scene` on a white background and encode as PNG.
pub fn to_png_bytes(scene: &Group, width: i32, height: i32) -> Result<Vec<u8>> {
    let mut surface = skia::surfaces::raster_n32_premul((width, height))
        .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))?;
    let shaper = TextShaper::new();
    {
        let canvas = surface.canvas();
        canvas.clear(skia::Color::WHITE);
        replay(canvas, scene, &Style::default(), &shaper);
    }
    let image = surface.image_snapshot();
    #[allow(deprecated)]
    let data = image
        .encode_to_data(skia::EncodedImageFormat::PNG)
        .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
    debug!(bytes = data.as_bytes().len(), "png export");
    Ok(data.as_bytes().to_vec())
}

pub fn write_svg(scene: &Group, width: f64, height: f64, path: impl AsRef<Path>) -> Result<()> {
    let bytes = to_svg_bytes(scene, width, height)?;
    write_bytes(path.as_ref(), &bytes)
}

pub fn write_png(scene: &Group, width: i32, height: i32, path: impl AsRef<Path>) -> Result<()> {
    let bytes = to_png_bytes(scene, width, height)?;
    write_bytes(path.as_ref(), &bytes)
}

fn write_bytes(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, bytes)?;
    Ok(())
}

// ---- helpers ----------------------------------------------------------------

fn replay(canvas: &skia::Canvas, group: &Group, parent: &Style, shaper: &TextShaper) {
    let inherited = group.style().inherit(parent);
    let (dx, dy) = group.translate();
    canvas.save();
    canvas.translate((dx as f32, dy as f32));
    for node in group.children() {
        match node {
            Node::Group(g) => replay(canvas, g, &inherited, shaper),
            Node::Rect { rect, style } => {
                let st = style.inherit(&inherited);
                let r = skia::Rect::from_ltrb(rect.left as f32, rect.top as f32, rect.right as f32, rect.bottom as f32);
                if let Some(p) = fill_paint(&st) {
                    canvas.draw_rect(r, &p);
                }
                if let Some(p) = stroke_paint(&st) {
                    canvas.draw_rect(r, &p);
                }
            }
            Node::Line { from, to, style } => {
                if let Some(p) = stroke_paint(&style.inherit(&inherited)) {
                    canvas.draw_line(pt(*from), pt(*to), &p);
                }
            }
            Node::Path { cmds, style } => {
                let st = style.inherit(&inherited);
                let path = build_path(cmds);
                if let Some(p) = fill_paint(&st) {
                    canvas.draw_path(&path, &p);
                }
                if let Some(p) = stroke_paint(&st) {
                    canvas.draw_path(&path, &p);
                }
            }
            Node::Text(t) => {
                let st = t.style.inherit(&inherited);
                let color = st.fill.unwrap_or(skia::Color::BLACK);
                shaper.draw(canvas, &t.content, t.at.x as f32, t.at.y as f32, t.size, color, t.anchor, t.baseline);
            }
        }
    }
    canvas.restore();
}

fn pt(p: Point) -> skia::Point {
    skia::Point::new(p.x as f32, p.y as f32)
}

fn build_path(cmds: &[PathCmd]) -> skia::Path {
    let mut path = skia::PathBuilder::new();
    for cmd in cmds {
        match *cmd {
            PathCmd::MoveTo(p) => { path.move_to(pt(p)); }
            PathCmd::LineTo(p) => { path.line_to(pt(p)); }
            PathCmd::CubicTo(c1, c2, p) => { path.cubic_to(pt(c1), pt(c2), pt(p)); }
        }
    }
    path.detach()
}

fn fill_paint(st: &Style) -> Option<skia::Paint> {
    let color = st.fill?;
    if color.a() == 0 {
        return None;
    }
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Fill);
    paint.set_color(color);
    Some(paint)
}

fn stroke_paint(st: &Style) -> Option<skia::Paint> {
    let color = st.stroke?;
    let width = st.stroke_width.unwrap_or(1.0);
    if width <= 0.0 || color.a() == 0 {
        return None;
    }
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(width);
    paint.set_color(color);
    Some(paint)
}
