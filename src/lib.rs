//! clockface draws analog and seven-segment digital clock faces as SVG scene graphs.
//!
//! A [`ClockApp`] owns the whole state: the [`FormState`] a configuration panel edits, the
//! [`Scene`] tree mirrored on a [`Display`], the active [`Theme`], the face loop timers and the
//! [`AlarmRegistry`]. Building a face rebuilds the tree and repaints it; each 1 Hz
//! [`ClockApp::tick`] patches hands, segments and date texts in place and then checks alarms.
//!
//! - [`Surface`] and [`RecordingAudio`] keep everything in memory (tests, embedding)
//! - [`SvgFile`] keeps a standalone document on disk
//! - [`render::raster`] turns documents into pixels
#![forbid(unsafe_code)]

/// Alarm entries and the registry that fires them.
pub mod alarm;
/// Form state, snapshots and themes.
pub mod config;
/// Face builders.
pub mod face;
mod foundation;
/// Standalone documents and rasterization.
pub mod render;
/// Application context and scheduling.
pub mod runtime;
/// Scene graph.
pub mod scene;
/// Display and audio sinks.
pub mod sink;

pub use crate::foundation::core::{Affine, Canvas, Point};
pub use crate::foundation::error::{ClockError, ClockResult};
pub use crate::foundation::geometry::{rotate_around, rotate_attr};

pub use crate::alarm::registry::{ActiveAlarm, Alarm, AlarmRegistry, AlarmRow};
pub use crate::config::form::{
    AlarmSpec, ClockType, FormState, LabelStyle, LabelToggles, Snapshot, Toggle,
};
pub use crate::config::theme::{Theme, ThemeName};
pub use crate::render::raster::FrameRGBA;
pub use crate::runtime::app::ClockApp;
pub use crate::runtime::timers::{TICK, Ticker, TimerId, Timers};
pub use crate::scene::container::{Patch, Scene};
pub use crate::scene::node::{Attrs, Child, Node};
pub use crate::sink::audio::{AudioEvent, AudioSink, LogAudio, RecordingAudio, SoundHandle};
pub use crate::sink::display::{Display, Surface, SvgFile};
