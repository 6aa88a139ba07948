// File: crates/strata-core/src/scene.rs
// Summary: Retained vector scene (groups, rects, lines, paths, text) that renderers append into.
// Notes:
// - Style fields left as `None` inherit from the enclosing group at export time.
// - A fully transparent fill disables filling even when the group sets one.

use skia_safe::Color;

use crate::geometry::{Point, Rect};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Style {
    pub fill: Option<Color>,
    pub stroke: Option<Color>,
    pub stroke_width: Option<f32>,
}

impl Style {
    pub fn new() -> Self { Self::default() }

    pub fn fill(mut self, c: Color) -> Self {
        self.fill = Some(c);
        self
    }

    pub fn no_fill(mut self) -> Self {
        self.fill = Some(Color::TRANSPARENT);
        self
    }

    pub fn stroke(mut self, c: Color) -> Self {
        self.stroke = Some(c);
        self
    }

    pub fn stroke_width(mut self, w: f32) -> Self {
        self.stroke_width = Some(w);
        self
    }

    /// Fill in unset fields from `parent`.
    pub fn inherit(&self, parent: &Style) -> Style {
        Style {
            fill: self.fill.or(parent.fill),
            stroke: self.stroke.or(parent.stroke),
            stroke_width: self.stroke_width.or(parent.stroke_width),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextAnchor {
    #[default]
    Start,
    Middle,
    End,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Baseline {
    #[default]
    Alphabetic,
    Middle,
    /// Text hangs below `y` (top edge at `y`).
    Hanging,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Text {
    pub at: Point,
    pub content: String,
    pub size: f32,
    pub anchor: TextAnchor,
    pub baseline: Baseline,
    pub style: Style,
}

impl Text {
    pub fn new(x: f64, y: f64, content: impl Into<String>, size: f32) -> Self {
        Self {
            at: Point::new(x, y),
            content: content.into(),
            size,
            anchor: TextAnchor::Start,
            baseline: Baseline::Alphabetic,
            style: Style::default(),
        }
    }
    pub fn anchor(mut self, a: TextAnchor) -> Self {
        self.anchor = a;
        self
    }
    pub fn baseline(mut self, b: Baseline) -> Self {
        self.baseline = b;
        self
    }
    pub fn style(mut self, s: Style) -> Self {
        self.style = s;
        self
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathCmd {
    MoveTo(Point),
    LineTo(Point),
    CubicTo(Point, Point, Point),
}

#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    Group(Group),
    Rect { rect: Rect, style: Style },
    Line { from: Point, to: Point, style: Style },
    Path { cmds: Vec<PathCmd>, style: Style },
    Text(Text),
}

impl Node {
    pub fn rect(rect: Rect, style: Style) -> Self {
        Node::Rect { rect, style }
    }
    pub fn line(from: impl Into<Point>, to: impl Into<Point>, style: Style) -> Self {
        Node::Line { from: from.into(), to: to.into(), style }
    }
}

/// Group node: children drawn in order, offset by `translate`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Group {
    translate: (f64, f64),
    style: Style,
    children: Vec<Node>,
}

impl Group {
    pub fn new() -> Self { Self::default() }

    pub fn with_style(style: Style) -> Self {
        Self { style, ..Self::default() }
    }

    pub fn append(&mut self, node: impl Into<Node>) {
        self.children.push(node.into());
    }

    pub fn children(&self) -> &[Node] { &self.children }
    pub fn is_empty(&self) -> bool { self.children.is_empty() }
    pub fn clear(&mut self) { self.children.clear(); }

    pub fn translate(&self) -> (f64, f64) { self.translate }
    pub fn set_translate(&mut self, dx: f64, dy: f64) {
        self.translate = (dx, dy);
    }

    pub fn style(&self) -> &Style { &self.style }

    /// Total node count including nested groups' children.
    pub fn node_count(&self) -> usize {
        self.children
            .iter()
            .map(|n| match n {
                Node::Group(g) => 1 + g.node_count(),
                _ => 1,
            })
            .sum()
    }
}

impl From<Group> for Node {
    fn from(g: Group) -> Self { Node::Group(g) }
}

impl From<Text> for Node {
    fn from(t: Text) -> Self { Node::Text(t) }
}
