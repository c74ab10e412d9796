use tracing::trace;

use crate::{
    config::theme::Theme,
    foundation::core::{Canvas, Point},
    foundation::error::{ClockError, ClockResult},
    scene::node::{Child, Node},
    sink::display::Display,
};

/// In-place mutation of an already rendered element, addressed by its `id`.
#[derive(Clone, Debug, PartialEq)]
pub enum Patch {
    /// Set one attribute (`transform`, `style`, `x`, `class`, ...).
    Attribute {
        id: String,
        name: String,
        value: String,
    },
    /// Replace the text content of an element.
    Text { id: String, text: String },
    /// Swap every theme property at once.
    Theme(&'static Theme),
}

/// Owner of the root child list of one drawing surface.
///
/// Full rebuilds go through [`Scene::clear`], [`Scene::append_child`] and [`Scene::render`].
/// Per-tick updates mutate nodes found by id and queue a [`Patch`] per mutation, which
/// [`Scene::flush`] hands to the display without repainting.
#[derive(Clone, Debug)]
pub struct Scene {
    canvas: Canvas,
    children: Vec<Child>,
    pending: Vec<Patch>,
}

impl Scene {
    pub fn new(canvas: Canvas) -> Self {
        Self {
            canvas,
            children: Vec::new(),
            pending: Vec::new(),
        }
    }

    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    pub fn width(&self) -> f64 {
        self.canvas.w()
    }

    pub fn height(&self) -> f64 {
        self.canvas.h()
    }

    pub fn children(&self) -> &[Child] {
        &self.children
    }

    pub fn append_child(&mut self, child: impl Into<Child>) {
        self.children.push(child.into());
    }

    pub fn append_children(&mut self, children: impl IntoIterator<Item = Child>) {
        self.children.extend(children);
    }

    /// Drop every child and wipe what the display shows.
    pub fn clear(&mut self, display: &mut dyn Display) -> ClockResult<()> {
        self.children.clear();
        self.pending.clear();
        display.replace("")
    }

    /// Concatenated markup of all root children, in order.
    pub fn markup(&self) -> String {
        let mut out = String::new();
        for c in &self.children {
            out.push_str(&c.to_string());
        }
        out
    }

    /// Full repaint: replace the display content with the current markup.
    pub fn render(&mut self, display: &mut dyn Display) -> ClockResult<()> {
        // Queued patches are already reflected in the tree.
        self.pending.clear();
        let markup = self.markup();
        trace!(bytes = markup.len(), "render scene");
        display.replace(&markup)
    }

    pub fn find(&self, id: &str) -> Option<&Node> {
        self.root_nodes().find_map(|n| n.find(id))
    }

    pub fn find_mut(&mut self, id: &str) -> Option<&mut Node> {
        self.children.iter_mut().find_map(|c| match c {
            Child::Node(n) => n.find_mut(id),
            Child::Raw(_) => None,
        })
    }

    fn root_nodes(&self) -> impl Iterator<Item = &Node> {
        self.children.iter().filter_map(|c| match c {
            Child::Node(n) => Some(n),
            Child::Raw(_) => None,
        })
    }

    fn expect_mut(&mut self, id: &str) -> ClockResult<&mut Node> {
        self.find_mut(id)
            .ok_or_else(|| ClockError::scene(format!("no element with id '{id}'")))
    }

    pub fn set_transform(&mut self, id: &str, transform: String) -> ClockResult<()> {
        let node = self.expect_mut(id)?;
        if node.attrs().transform == transform {
            return Ok(());
        }
        node.attrs_mut().transform = transform.clone();
        self.queue_attr(id, "transform", transform);
        Ok(())
    }

    pub fn set_style(&mut self, id: &str, style: String) -> ClockResult<()> {
        let node = self.expect_mut(id)?;
        if node.attrs().style == style {
            return Ok(());
        }
        node.attrs_mut().style = style.clone();
        self.queue_attr(id, "style", style);
        Ok(())
    }

    pub fn set_text(&mut self, id: &str, text: String) -> ClockResult<()> {
        let node = self.expect_mut(id)?;
        if node.text_content() == Some(text.as_str()) {
            return Ok(());
        }
        if !node.set_text(text.clone()) {
            return Err(ClockError::scene(format!("element '{id}' holds no text")));
        }
        self.pending.push(Patch::Text {
            id: id.to_string(),
            text,
        });
        Ok(())
    }

    /// Move a text node; other variants have no single anchor point.
    pub fn set_position(&mut self, id: &str, at: Point) -> ClockResult<()> {
        let node = self.expect_mut(id)?;
        let Node::Text(t) = node else {
            return Err(ClockError::scene(format!("element '{id}' is not positionable")));
        };
        if t.x == at.x && t.y == at.y {
            return Ok(());
        }
        t.x = at.x;
        t.y = at.y;
        self.queue_attr(id, "x", at.x.to_string());
        self.queue_attr(id, "y", at.y.to_string());
        Ok(())
    }

    /// Set a custom attribute such as `class` or `href`.
    pub fn set_attr(&mut self, id: &str, name: &str, value: String) -> ClockResult<()> {
        let node = self.expect_mut(id)?;
        if node.attrs().get(name) == Some(value.as_str()) {
            return Ok(());
        }
        node.attrs_mut().set(name, &value);
        self.queue_attr(id, name, value);
        Ok(())
    }

    /// Queue a theme swap; it reaches the display together with the other pending patches.
    pub fn queue_theme(&mut self, theme: &'static Theme) {
        self.pending.push(Patch::Theme(theme));
    }

    pub fn pending(&self) -> &[Patch] {
        &self.pending
    }

    /// Hand queued patches to the display in mutation order.
    pub fn flush(&mut self, display: &mut dyn Display) -> ClockResult<()> {
        for patch in self.pending.drain(..) {
            display.apply(&patch)?;
        }
        Ok(())
    }

    fn queue_attr(&mut self, id: &str, name: &str, value: String) {
        self.pending.push(Patch::Attribute {
            id: id.to_string(),
            name: name.to_string(),
            value,
        });
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/container.rs"]
mod tests;
