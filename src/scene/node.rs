//! Drawable node variants and their markup.
//!
//! A scene is a tree of [`Node`]s. Leaf variants (line, rect, circle, polygon, text) carry only
//! geometry plus the shared [`Attrs`]; [`Group`] and [`Generic`] additionally own an ordered list
//! of [`Child`]ren, which determines paint order. Markup is produced through [`fmt::Display`].

use std::fmt;

use crate::foundation::core::Point;

/// Extra attributes appended after a node's own geometry.
///
/// A mapping is written as `key="value"` pairs in insertion order; a raw string is written
/// verbatim.
#[derive(Clone, Debug, PartialEq)]
pub enum CustomAttrs {
    /// Pre-formatted attribute text.
    Raw(String),
    /// Ordered key/value pairs.
    Map(Vec<(String, String)>),
}

impl Default for CustomAttrs {
    fn default() -> Self {
        Self::Map(Vec::new())
    }
}

/// Style, transform and custom attributes shared by every variant.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Attrs {
    pub style: String,
    pub transform: String,
    pub custom: CustomAttrs,
}

impl Attrs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn style(mut self, style: impl Into<String>) -> Self {
        self.style = style.into();
        self
    }

    pub fn transform(mut self, transform: impl Into<String>) -> Self {
        self.transform = transform.into();
        self
    }

    /// Append (or overwrite) a mapped custom attribute.
    pub fn attr(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.set(key, value);
        self
    }

    /// Replace the custom attributes with a pre-formatted string.
    pub fn raw(mut self, raw: impl Into<String>) -> Self {
        self.custom = CustomAttrs::Raw(raw.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        match &self.custom {
            CustomAttrs::Map(pairs) => pairs
                .iter()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v.as_str()),
            CustomAttrs::Raw(raw) => raw_value_span(raw, key).map(|r| &raw[r]),
        }
    }

    /// Set a custom attribute in place, keeping its position if it already exists.
    pub fn set(&mut self, key: impl Into<String>, value: impl ToString) {
        let key = key.into();
        let value = value.to_string();
        match &mut self.custom {
            CustomAttrs::Map(pairs) => match pairs.iter_mut().find(|(k, _)| *k == key) {
                Some(slot) => slot.1 = value,
                None => pairs.push((key, value)),
            },
            CustomAttrs::Raw(raw) => match raw_value_span(raw, &key) {
                Some(span) => raw.replace_range(span, &value),
                None => {
                    if !raw.trim().is_empty() && !raw.ends_with(' ') {
                        raw.push(' ');
                    }
                    raw.push_str(&format!("{key}=\"{value}\""));
                }
            },
        }
    }

    pub fn id(&self) -> Option<&str> {
        self.get("id")
    }
}

impl fmt::Display for Attrs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.style.is_empty() {
            write!(f, " style=\"{}\"", Escaped(&self.style))?;
        }
        if !self.transform.is_empty() {
            write!(f, " transform=\"{}\"", Escaped(&self.transform))?;
        }
        match &self.custom {
            CustomAttrs::Raw(raw) if !raw.trim().is_empty() => write!(f, " {}", raw.trim()),
            CustomAttrs::Raw(_) => Ok(()),
            CustomAttrs::Map(pairs) => {
                for (k, v) in pairs {
                    write!(f, " {k}=\"{}\"", Escaped(v))?;
                }
                Ok(())
            }
        }
    }
}

/// Either a drawable node or literal markup/text placed between tags.
#[derive(Clone, Debug, PartialEq)]
pub enum Child {
    Node(Node),
    Raw(String),
}

impl From<Node> for Child {
    fn from(node: Node) -> Self {
        Self::Node(node)
    }
}

impl From<&str> for Child {
    fn from(raw: &str) -> Self {
        Self::Raw(raw.to_string())
    }
}

impl From<String> for Child {
    fn from(raw: String) -> Self {
        Self::Raw(raw)
    }
}

impl fmt::Display for Child {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Child::Node(n) => fmt::Display::fmt(n, f),
            Child::Raw(s) => f.write_str(s),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Line {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub attrs: Attrs,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub rx: f64,
    pub ry: f64,
    pub attrs: Attrs,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Circle {
    pub cx: f64,
    pub cy: f64,
    pub r: f64,
    pub attrs: Attrs,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Polygon {
    pub points: Vec<Point>,
    pub attrs: Attrs,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Text {
    pub x: f64,
    pub y: f64,
    pub content: String,
    pub attrs: Attrs,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Group {
    pub children: Vec<Child>,
    pub attrs: Attrs,
}

/// Any element without a dedicated variant (`defs`, `filter`, `clipPath`, `image`, ...).
#[derive(Clone, Debug, PartialEq)]
pub struct Generic {
    pub tag: String,
    pub children: Vec<Child>,
    pub attrs: Attrs,
}

/// Closed set of drawable scene nodes.
#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    Line(Line),
    Rect(Rect),
    Circle(Circle),
    Polygon(Polygon),
    Text(Text),
    Group(Group),
    Generic(Generic),
}

impl Node {
    pub fn line(x1: f64, y1: f64, x2: f64, y2: f64, attrs: Attrs) -> Self {
        Self::Line(Line {
            x1,
            y1,
            x2,
            y2,
            attrs,
        })
    }

    pub fn rect(x: f64, y: f64, width: f64, height: f64, attrs: Attrs) -> Self {
        Self::rounded_rect(x, y, width, height, 0.0, 0.0, attrs)
    }

    pub fn rounded_rect(
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        rx: f64,
        ry: f64,
        attrs: Attrs,
    ) -> Self {
        Self::Rect(Rect {
            x,
            y,
            width,
            height,
            rx,
            ry,
            attrs,
        })
    }

    pub fn circle(cx: f64, cy: f64, r: f64, attrs: Attrs) -> Self {
        Self::Circle(Circle { cx, cy, r, attrs })
    }

    pub fn polygon(points: Vec<Point>, attrs: Attrs) -> Self {
        Self::Polygon(Polygon { points, attrs })
    }

    pub fn text(x: f64, y: f64, content: impl Into<String>, attrs: Attrs) -> Self {
        Self::Text(Text {
            x,
            y,
            content: content.into(),
            attrs,
        })
    }

    pub fn group(children: Vec<Child>, attrs: Attrs) -> Self {
        Self::Group(Group { children, attrs })
    }

    pub fn generic(tag: impl Into<String>, children: Vec<Child>, attrs: Attrs) -> Self {
        Self::Generic(Generic {
            tag: tag.into(),
            children,
            attrs,
        })
    }

    pub fn attrs(&self) -> &Attrs {
        match self {
            Node::Line(n) => &n.attrs,
            Node::Rect(n) => &n.attrs,
            Node::Circle(n) => &n.attrs,
            Node::Polygon(n) => &n.attrs,
            Node::Text(n) => &n.attrs,
            Node::Group(n) => &n.attrs,
            Node::Generic(n) => &n.attrs,
        }
    }

    pub fn attrs_mut(&mut self) -> &mut Attrs {
        match self {
            Node::Line(n) => &mut n.attrs,
            Node::Rect(n) => &mut n.attrs,
            Node::Circle(n) => &mut n.attrs,
            Node::Polygon(n) => &mut n.attrs,
            Node::Text(n) => &mut n.attrs,
            Node::Group(n) => &mut n.attrs,
            Node::Generic(n) => &mut n.attrs,
        }
    }

    pub fn id(&self) -> Option<&str> {
        self.attrs().id()
    }

    /// Child list of container variants; `None` for leaves.
    pub fn children(&self) -> Option<&[Child]> {
        match self {
            Node::Group(g) => Some(&g.children),
            Node::Generic(g) => Some(&g.children),
            _ => None,
        }
    }

    pub fn children_mut(&mut self) -> Option<&mut Vec<Child>> {
        match self {
            Node::Group(g) => Some(&mut g.children),
            Node::Generic(g) => Some(&mut g.children),
            _ => None,
        }
    }

    /// Child nodes only, skipping raw strings.
    pub fn child_nodes(&self) -> impl Iterator<Item = &Node> {
        self.children().unwrap_or(&[]).iter().filter_map(|c| match c {
            Child::Node(n) => Some(n),
            Child::Raw(_) => None,
        })
    }

    /// Depth-first search of this node and its descendants by `id` attribute.
    pub fn find(&self, id: &str) -> Option<&Node> {
        if self.id() == Some(id) {
            return Some(self);
        }
        self.child_nodes().find_map(|n| n.find(id))
    }

    pub fn find_mut(&mut self, id: &str) -> Option<&mut Node> {
        if self.id() == Some(id) {
            return Some(self);
        }
        self.children_mut()?.iter_mut().find_map(|c| match c {
            Child::Node(n) => n.find_mut(id),
            Child::Raw(_) => None,
        })
    }

    /// Text content of a [`Text`] node.
    pub fn text_content(&self) -> Option<&str> {
        match self {
            Node::Text(t) => Some(&t.content),
            _ => None,
        }
    }

    /// Replace the content of a [`Text`] node; returns `false` for other variants.
    pub fn set_text(&mut self, content: impl Into<String>) -> bool {
        match self {
            Node::Text(t) => {
                t.content = content.into();
                true
            }
            _ => false,
        }
    }

    pub fn markup(&self) -> String {
        self.to_string()
    }
}

fn write_children(f: &mut fmt::Formatter<'_>, children: &[Child]) -> fmt::Result {
    for c in children {
        fmt::Display::fmt(c, f)?;
    }
    Ok(())
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Line(n) => write!(
                f,
                "<line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\"{}/>",
                n.x1, n.y1, n.x2, n.y2, n.attrs
            ),
            Node::Rect(n) => write!(
                f,
                "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" rx=\"{}\" ry=\"{}\"{}></rect>",
                n.x, n.y, n.width, n.height, n.rx, n.ry, n.attrs
            ),
            Node::Circle(n) => write!(
                f,
                "<circle cx=\"{}\" cy=\"{}\" r=\"{}\"{}></circle>",
                n.cx, n.cy, n.r, n.attrs
            ),
            Node::Polygon(n) => {
                f.write_str("<polygon points=\"")?;
                for (i, p) in n.points.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    write!(f, "{},{}", p.x, p.y)?;
                }
                write!(f, "\"{}></polygon>", n.attrs)
            }
            Node::Text(n) => write!(
                f,
                "<text x=\"{}\" y=\"{}\"{}>{}</text>",
                n.x,
                n.y,
                n.attrs,
                Escaped(&n.content)
            ),
            Node::Group(n) => {
                write!(f, "<g{}>", n.attrs)?;
                write_children(f, &n.children)?;
                f.write_str("</g>")
            }
            Node::Generic(n) => {
                write!(f, "<{}{}>", n.tag, n.attrs)?;
                write_children(f, &n.children)?;
                write!(f, "</{}>", n.tag)
            }
        }
    }
}

/// Byte range of `key`'s quoted value inside a pre-formatted attribute string.
fn raw_value_span(raw: &str, key: &str) -> Option<std::ops::Range<usize>> {
    let needle = format!("{key}=\"");
    let mut from = 0;
    while let Some(rel) = raw[from..].find(&needle) {
        let at = from + rel;
        let boundary = at == 0 || raw.as_bytes()[at - 1].is_ascii_whitespace();
        let start = at + needle.len();
        if boundary {
            let end = start + raw[start..].find('"')?;
            return Some(start..end);
        }
        from = start;
    }
    None
}

/// XML-escapes attribute values and text content.
pub(crate) struct Escaped<'a>(pub &'a str);

impl fmt::Display for Escaped<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut rest = self.0;
        while let Some(pos) = rest.find(['&', '<', '>', '"']) {
            f.write_str(&rest[..pos])?;
            f.write_str(match rest.as_bytes()[pos] {
                b'&' => "&amp;",
                b'<' => "&lt;",
                b'>' => "&gt;",
                _ => "&quot;",
            })?;
            rest = &rest[pos + 1..];
        }
        f.write_str(rest)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/node.rs"]
mod tests;
