// File: crates/strata-core/src/container.rs
// Summary: Container composing named windows on one canvas: shared time axis, stacked layout,
// decorations and the public chart-building API.

use std::collections::HashMap;

use tracing::debug;

use crate::config::{ContainerOptions, TimeLabels};
use crate::draw;
use crate::error::{ChartError, Result};
use crate::geometry::Rect;
use crate::scale::{TimeScale, ValueScale};
use crate::scene::{Baseline, Group, Node, Style, Text, TextAnchor};
use crate::series::{line_style, BarStyle, Candle, CandleStyle, HistBar, VolumeBar};
use crate::theme::Theme;
use crate::types::{TimePoint, Timestamp};
use crate::window::{EdgeSpace, Window};

pub struct Container {
    width: f64,
    height: f64,
    opts: ContainerOptions,
    theme: Theme,
    candle_style: CandleStyle,
    volume_style: BarStyle,
    hist_style: BarStyle,
    global_time: Option<(Timestamp, Timestamp)>,
    windows: HashMap<String, Window>,
    /// Insertion order: stacking order top to bottom.
    order: Vec<String>,
    decorations: Group,
    root: Group,
}

impl Container {
    /// Container with default margins and the given inter-window gap.
    /// Negative or NaN sizes and gaps are clamped to zero; use
    /// [`Container::with_options`] to have the gap rejected instead.
    pub fn new(width: f64, height: f64, gap: f64) -> Self {
        let opts = ContainerOptions { gap: gap.max(0.0), ..ContainerOptions::default() };
        Self::build(width, height, opts)
    }

    pub fn with_options(width: f64, height: f64, opts: ContainerOptions) -> Result<Self> {
        opts.validate()?;
        Ok(Self::build(width, height, opts))
    }

    fn build(width: f64, height: f64, opts: ContainerOptions) -> Self {
        let theme = opts.resolved_theme();
        let mut c = Self {
            width: width.max(0.0),
            height: height.max(0.0),
            candle_style: CandleStyle::from_theme(&theme),
            volume_style: BarStyle::volume(&theme),
            hist_style: BarStyle::histogram(&theme),
            theme,
            opts,
            global_time: None,
            windows: HashMap::new(),
            order: Vec::new(),
            decorations: Group::new(),
            root: Group::with_style(Style::new().fill(theme.background)),
        };
        c.draw_decorations();
        c
    }

    pub fn width(&self) -> f64 { self.width }
    pub fn height(&self) -> f64 { self.height }
    pub fn gap(&self) -> f64 { self.opts.gap }
    pub fn options(&self) -> &ContainerOptions { &self.opts }
    pub fn theme(&self) -> &Theme { &self.theme }

    /// Union of every window's requested time range, once a window exists.
    pub fn global_time_range(&self) -> Option<(Timestamp, Timestamp)> { self.global_time }

    pub fn window(&self, name: &str) -> Option<&Window> { self.windows.get(name) }

    /// Window names in stacking order.
    pub fn window_names(&self) -> &[String] { &self.order }

    pub fn windows(&self) -> impl Iterator<Item = &Window> + '_ {
        self.order.iter().filter_map(move |n| self.windows.get(n))
    }

    /// Pixel width of every window (canvas width minus the side margins).
    pub fn plot_width(&self) -> f64 {
        (self.width - self.opts.margins.hsum()).max(0.0)
    }

    /// Pixels shared between windows by percentage after margins and gaps.
    pub fn available_height(&self) -> f64 {
        let gaps = self.order.len().saturating_sub(1) as f64 * self.opts.gap;
        self.height - self.opts.margins.vsum() - gaps
    }

    pub fn set_candle_style(&mut self, st: CandleStyle) { self.candle_style = st; }
    pub fn set_volume_style(&mut self, st: BarStyle) { self.volume_style = st; }
    pub fn set_hist_style(&mut self, st: BarStyle) { self.hist_style = st; }

    /// Declare a window below the existing ones and relayout every window.
    #[allow(clippy::too_many_arguments)]
    pub fn add_window(
        &mut self,
        name: &str,
        space: EdgeSpace,
        bottom: f64,
        top: f64,
        percent_height: f64,
        left: Timestamp,
        right: Timestamp,
    ) -> Result<()> {
        if self.windows.contains_key(name) {
            return Err(ChartError::DuplicateWindow(name.to_string()));
        }
        ValueScale::new(bottom, top, 0.0)?;
        TimeScale::new(left, right, 0.0)?;

        // The incoming window adds one more gap to the stack.
        let gaps = self.order.len() as f64 * self.opts.gap;
        if self.height - self.opts.margins.vsum() - gaps <= 0.0 {
            return Err(ChartError::Config("windows and gaps exceed the plot height".into()));
        }

        let (bottom, top) = space.pad_values(bottom, top);
        let (left, right) = space.pad_times(left, right);
        let w = Window::new(name, bottom, top, self.plot_width(), percent_height, left, right)?
            .with_tick_spacing(self.opts.value_tick_spacing, self.opts.time_tick_spacing);

        debug!(window = name, bottom, top, percent_height, "add window");
        self.windows.insert(name.to_string(), w);
        self.order.push(name.to_string());
        self.relayout()
    }

    /// Recompute the shared time range and every window's height and offset.
    fn relayout(&mut self) -> Result<()> {
        let mut range: Option<(Timestamp, Timestamp)> = None;
        for w in self.order.iter().filter_map(|n| self.windows.get(n)) {
            let (l, r) = w.requested_time_range();
            range = Some(match range {
                None => (l, r),
                Some((gl, gr)) => (gl.min(l), gr.max(r)),
            });
        }
        self.global_time = range;
        let Some((left, right)) = range else { return Ok(()) };

        let avail = self.available_height();
        let mut offset = self.opts.margins.top;
        for name in &self.order {
            let Some(w) = self.windows.get_mut(name) else { continue };
            let h = w.percent_height() * avail / 100.0;
            w.set_global_time_range(left, right)?;
            w.set_pixel_height(h);
            w.set_offset_top(offset);
            debug!(window = name.as_str(), height = h, offset, "layout");
            offset += w.pixel_height() + self.opts.gap;
        }
        debug!(%left, %right, windows = self.order.len(), "global time range");
        Ok(())
    }

    /// Recompute the layout and rebuild the border and axis labels. Safe to repeat.
    pub fn init(&mut self) -> Result<()> {
        self.relayout()?;
        self.draw_decorations();
        Ok(())
    }

    fn draw_decorations(&mut self) {
        self.decorations.clear();
        self.draw_border();
        self.draw_scale_labels();
    }

    /// Position the whole chart inside a larger canvas.
    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.root.set_translate(dx, dy);
    }

    /// Merge window surfaces into the root, then decorations on top.
    pub fn complete(&mut self) {
        self.root.clear();
        self.root.append(Node::rect(Rect::from_ltwh(1.0, 1.0, self.width, self.height), Style::new()));
        let left = self.opts.margins.left;
        for w in self.order.iter().filter_map(|n| self.windows.get(n)) {
            let mut g = w.surface().clone();
            g.set_translate(left, w.offset_top());
            self.root.append(g);
        }
        self.root.append(self.decorations.clone());
        debug!(nodes = self.root.node_count(), "complete");
    }

    /// Root scene group, ready to embed in an outer canvas after [`Container::complete`].
    pub fn root(&self) -> &Group { &self.root }

    pub fn into_root(self) -> Group { self.root }

    fn draw_border(&mut self) {
        let st = Style::new().no_fill().stroke(self.theme.border).stroke_width(2.0);
        self.decorations.append(Node::rect(Rect::from_ltwh(1.0, 1.0, self.width, self.height), st));
    }

    fn draw_scale_labels(&mut self) {
        let size = self.opts.label_font_size;
        let text_st = Style::new().fill(self.theme.axis_label).stroke_width(1.0);
        let m = self.opts.margins;
        let time_y = self.height - m.bottom + 3.0;

        let mut labels = Vec::new();
        for (i, w) in self.order.iter().filter_map(|n| self.windows.get(n)).enumerate() {
            for v in w.gridlines_y() {
                let y = v.pos + w.offset_top();
                labels.push(
                    Text::new(self.width - m.right + 10.0, y, v.label.clone(), size)
                        .baseline(Baseline::Middle)
                        .style(text_st),
                );
                labels.push(Text::new(m.left - 30.0, y, v.label, size).baseline(Baseline::Middle).style(text_st));
            }
            if i > 0 && self.opts.time_labels == TimeLabels::Once {
                continue;
            }
            for v in w.gridlines_x() {
                labels.push(
                    Text::new(m.left + v.pos, time_y, v.label, size)
                        .anchor(TextAnchor::Middle)
                        .baseline(Baseline::Hanging)
                        .style(text_st),
                );
            }
        }
        for t in labels {
            self.decorations.append(t);
        }
    }

    fn window_mut(&mut self, name: &str) -> Result<&mut Window> {
        self.windows.get_mut(name).ok_or_else(|| ChartError::WindowNotFound(name.to_string()))
    }

    pub fn stock_candle(&mut self, name: &str, c: &Candle) -> Result<()> {
        let st = self.candle_style;
        draw::candle(self.window_mut(name)?, c, &st);
        Ok(())
    }

    pub fn stock_candles(&mut self, name: &str, candles: &[Candle]) -> Result<()> {
        let st = self.candle_style;
        let w = self.window_mut(name)?;
        for c in candles {
            draw::candle(w, c, &st);
        }
        Ok(())
    }

    pub fn volume(&mut self, name: &str, v: &VolumeBar) -> Result<()> {
        let st = self.volume_style;
        draw::volume(self.window_mut(name)?, v, &st);
        Ok(())
    }

    pub fn base_hist(&mut self, name: &str, h: &HistBar) -> Result<()> {
        let st = self.hist_style;
        draw::hist(self.window_mut(name)?, h, &st);
        Ok(())
    }

    pub fn smooth_by_time(&mut self, name: &str, points: &[TimePoint], style: Option<Style>) -> Result<()> {
        let st = style.unwrap_or_else(|| line_style(self.theme.line_stroke, 1.5));
        draw::smooth_by_time(self.window_mut(name)?, points, st);
        Ok(())
    }

    pub fn ver_by_time(&mut self, name: &str, t: Timestamp, style: Option<Style>) -> Result<()> {
        let st = style.unwrap_or_else(|| line_style(self.theme.ref_line, 1.0));
        draw::ver_by_time(self.window_mut(name)?, t, st);
        Ok(())
    }

    pub fn hor(&mut self, name: &str, y: f64, style: Option<Style>) -> Result<()> {
        let st = style.unwrap_or_else(|| line_style(self.theme.ref_line, 1.0));
        draw::hor(self.window_mut(name)?, y, st);
        Ok(())
    }
}
