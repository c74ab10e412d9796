use tracing::{info, warn};

use crate::foundation::error::{ClockError, ClockResult};

/// Opaque handle to one playback started by an [`AudioSink`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SoundHandle(pub u64);

/// Playback of alarm sounds, keyed by file path.
pub trait AudioSink {
    /// Start playing `path` from the beginning.
    fn play(&mut self, path: &str) -> ClockResult<SoundHandle>;
    fn pause(&mut self, handle: SoundHandle);
    /// Reset the playback position to the start.
    fn rewind(&mut self, handle: SoundHandle);
}

/// Sink that only logs what would be played. Used by the binary, which has no audio device.
#[derive(Debug, Default)]
pub struct LogAudio {
    next: u64,
}

impl LogAudio {
    pub fn new() -> Self {
        Self::default()
    }
}

impl AudioSink for LogAudio {
    fn play(&mut self, path: &str) -> ClockResult<SoundHandle> {
        if !std::path::Path::new(path).exists() {
            warn!(path, "alarm sound not found; playing nothing");
        }
        self.next += 1;
        let handle = SoundHandle(self.next);
        info!(path, handle = handle.0, "play alarm sound");
        Ok(handle)
    }

    fn pause(&mut self, handle: SoundHandle) {
        info!(handle = handle.0, "pause alarm sound");
    }

    fn rewind(&mut self, handle: SoundHandle) {
        info!(handle = handle.0, "rewind alarm sound");
    }
}

/// One call received by [`RecordingAudio`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AudioEvent {
    Play { path: String, handle: SoundHandle },
    Pause(SoundHandle),
    Rewind(SoundHandle),
}

/// In-memory sink for tests and debugging.
#[derive(Debug, Default)]
pub struct RecordingAudio {
    next: u64,
    events: Vec<AudioEvent>,
    playing: Vec<(SoundHandle, String)>,
    /// Paths whose playback fails, to exercise error paths.
    pub failing: Vec<String>,
}

impl RecordingAudio {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[AudioEvent] {
        &self.events
    }

    /// Paths currently playing (started and not paused).
    pub fn playing(&self) -> Vec<&str> {
        self.playing.iter().map(|(_, p)| p.as_str()).collect()
    }
}

impl AudioSink for RecordingAudio {
    fn play(&mut self, path: &str) -> ClockResult<SoundHandle> {
        if self.failing.iter().any(|p| p == path) {
            return Err(ClockError::Other(anyhow::anyhow!("cannot decode '{path}'")));
        }
        self.next += 1;
        let handle = SoundHandle(self.next);
        self.events.push(AudioEvent::Play {
            path: path.to_string(),
            handle,
        });
        self.playing.push((handle, path.to_string()));
        Ok(handle)
    }

    fn pause(&mut self, handle: SoundHandle) {
        self.events.push(AudioEvent::Pause(handle));
        self.playing.retain(|(h, _)| *h != handle);
    }

    fn rewind(&mut self, handle: SoundHandle) {
        self.events.push(AudioEvent::Rewind(handle));
    }
}
