use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
};

use tracing::{debug, trace, warn};

use crate::{
    config::theme::Theme,
    foundation::error::ClockResult,
    render::document::document,
    scene::container::{Patch, Scene},
};

/// Surface that shows a clock face.
///
/// Ordering contract: within one handler, `replace`/`apply` calls arrive in mutation order and
/// `commit` is called once after the handler has finished mutating the scene.
pub trait Display {
    /// Replace the whole displayed content with `markup`.
    fn replace(&mut self, markup: &str) -> ClockResult<()>;
    /// Apply one in-place mutation.
    fn apply(&mut self, patch: &Patch) -> ClockResult<()>;
    /// Open the alarm dialog for the given wall-clock minute; it stays open until dismissed.
    fn show_alarm_dialog(&mut self, hour: u32, minute: u32) -> ClockResult<()>;
    /// Called at the end of each handler with the settled scene.
    fn commit(&mut self, _scene: &Scene, _theme: &'static Theme) -> ClockResult<()> {
        Ok(())
    }
}

/// In-memory display for tests and debugging.
///
/// Mirrors what a document surface would hold: the last full markup, the latest value of every
/// patched attribute and text, the applied theme and the alarm dialogs shown.
#[derive(Debug, Default)]
pub struct Surface {
    markup: String,
    attributes: BTreeMap<(String, String), String>,
    texts: BTreeMap<String, String>,
    theme: Option<&'static Theme>,
    patches: Vec<Patch>,
    dialogs: Vec<(u32, u32)>,
    replaces: usize,
    commits: usize,
}

impl Surface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Markup from the last full repaint.
    pub fn markup(&self) -> &str {
        &self.markup
    }

    /// Latest patched value of `name` on element `id`.
    pub fn attribute(&self, id: &str, name: &str) -> Option<&str> {
        self.attributes
            .get(&(id.to_string(), name.to_string()))
            .map(String::as_str)
    }

    /// Latest patched text content of element `id`.
    pub fn text(&self, id: &str) -> Option<&str> {
        self.texts.get(id).map(String::as_str)
    }

    pub fn theme(&self) -> Option<&'static Theme> {
        self.theme
    }

    /// Every patch applied since construction.
    pub fn patches(&self) -> &[Patch] {
        &self.patches
    }

    pub fn dialogs(&self) -> &[(u32, u32)] {
        &self.dialogs
    }

    /// Number of full repaints (including clears).
    pub fn replace_count(&self) -> usize {
        self.replaces
    }

    pub fn commit_count(&self) -> usize {
        self.commits
    }
}

impl Display for Surface {
    fn replace(&mut self, markup: &str) -> ClockResult<()> {
        self.markup = markup.to_string();
        self.attributes.clear();
        self.texts.clear();
        self.replaces += 1;
        Ok(())
    }

    fn apply(&mut self, patch: &Patch) -> ClockResult<()> {
        match patch {
            Patch::Attribute { id, name, value } => {
                self.attributes
                    .insert((id.clone(), name.clone()), value.clone());
            }
            Patch::Text { id, text } => {
                self.texts.insert(id.clone(), text.clone());
            }
            Patch::Theme(theme) => self.theme = Some(theme),
        }
        self.patches.push(patch.clone());
        Ok(())
    }

    fn show_alarm_dialog(&mut self, hour: u32, minute: u32) -> ClockResult<()> {
        self.dialogs.push((hour, minute));
        Ok(())
    }

    fn commit(&mut self, _scene: &Scene, _theme: &'static Theme) -> ClockResult<()> {
        self.commits += 1;
        Ok(())
    }
}

/// Display that keeps a standalone SVG document on disk in sync with the scene.
///
/// The file is rewritten on every commit through a sibling temporary file and a rename, so
/// readers never observe a half-written face.
#[derive(Debug)]
pub struct SvgFile {
    path: PathBuf,
    dirty: bool,
}

impl SvgFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            dirty: true,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Display for SvgFile {
    fn replace(&mut self, markup: &str) -> ClockResult<()> {
        trace!(bytes = markup.len(), "svg file repaint queued");
        self.dirty = true;
        Ok(())
    }

    fn apply(&mut self, patch: &Patch) -> ClockResult<()> {
        trace!(?patch, "svg file patch queued");
        self.dirty = true;
        Ok(())
    }

    fn show_alarm_dialog(&mut self, hour: u32, minute: u32) -> ClockResult<()> {
        warn!(hour, minute, "alarm ringing");
        Ok(())
    }

    fn commit(&mut self, scene: &Scene, theme: &'static Theme) -> ClockResult<()> {
        if !self.dirty {
            return Ok(());
        }
        write_atomic(&self.path, document(scene, theme).as_bytes())?;
        debug!(path = %self.path.display(), "wrote face");
        self.dirty = false;
        Ok(())
    }
}

fn write_atomic(path: &Path, bytes: &[u8]) -> ClockResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    let tmp = PathBuf::from(tmp);
    std::fs::write(&tmp, bytes)?;
    std::fs::rename(&tmp, path)?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/sink/display.rs"]
mod tests;
