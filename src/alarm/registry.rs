use tracing::{info, warn};

use crate::{
    foundation::error::{ClockError, ClockResult},
    sink::audio::{AudioSink, SoundHandle},
};

/// One configured alarm. The whole tuple is its identity.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Alarm {
    pub hour: u32,
    pub minute: u32,
    pub sound: String,
}

impl Alarm {
    pub fn new(hour: u32, minute: u32, sound: impl Into<String>) -> ClockResult<Self> {
        if hour > 23 {
            return Err(ClockError::range(format!("alarm hour is out of bounds ({hour})")));
        }
        if minute > 59 {
            return Err(ClockError::range(format!(
                "alarm minute is out of bounds ({minute})"
            )));
        }
        Ok(Self {
            hour,
            minute,
            sound: sound.into(),
        })
    }

    /// Identity key, `hour-minute-path`.
    pub fn key(&self) -> String {
        format!("{}-{}-{}", self.hour, self.minute, self.sound)
    }

    pub fn matches(&self, hour: u32, minute: u32) -> bool {
        self.hour == hour && self.minute == minute
    }
}

/// Removable list entry shown for one added alarm.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AlarmRow {
    pub alarm: Alarm,
    pub label: String,
}

/// A fired alarm and the playback started for it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActiveAlarm {
    pub alarm: Alarm,
    /// `None` when playback failed to start.
    pub sound: Option<SoundHandle>,
}

/// Pending alarms, firing alarms and the rows listing them.
#[derive(Debug, Default)]
pub struct AlarmRegistry {
    pending: Vec<Alarm>,
    active: Vec<ActiveAlarm>,
    rows: Vec<AlarmRow>,
}

impl AlarmRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pending(&self) -> &[Alarm] {
        &self.pending
    }

    pub fn active(&self) -> &[ActiveAlarm] {
        &self.active
    }

    pub fn rows(&self) -> &[AlarmRow] {
        &self.rows
    }

    /// Append an alarm. Identical entries are kept side by side.
    pub fn add(&mut self, alarm: Alarm) {
        info!(alarm = %alarm.key(), "alarm added");
        self.rows.push(AlarmRow {
            label: format!("{}:{} ({})", alarm.hour, alarm.minute, alarm.sound),
            alarm: alarm.clone(),
        });
        self.pending.push(alarm);
    }

    /// Remove every pending entry and row with this identity; returns how many entries went.
    pub fn remove(&mut self, alarm: &Alarm) -> usize {
        let before = self.pending.len();
        self.pending.retain(|a| a != alarm);
        self.rows.retain(|r| r.alarm != *alarm);
        let removed = before - self.pending.len();
        info!(alarm = %alarm.key(), removed, "alarm removed");
        removed
    }

    /// Fire every pending alarm set for `hour:minute`.
    ///
    /// Each match starts its sound and becomes active; all pending entries sharing its identity
    /// leave the pool, so a later scan in the same minute fires nothing. Returns the alarms that
    /// fired.
    pub fn scan(&mut self, hour: u32, minute: u32, audio: &mut dyn AudioSink) -> Vec<Alarm> {
        let (due, rest): (Vec<Alarm>, Vec<Alarm>) = std::mem::take(&mut self.pending)
            .into_iter()
            .partition(|a| a.matches(hour, minute));
        self.pending = rest;

        for alarm in &due {
            let sound = match audio.play(&alarm.sound) {
                Ok(h) => Some(h),
                Err(err) => {
                    warn!(alarm = %alarm.key(), %err, "alarm sound failed to start");
                    None
                }
            };
            info!(alarm = %alarm.key(), "alarm fired");
            self.active.push(ActiveAlarm {
                alarm: alarm.clone(),
                sound,
            });
        }
        due
    }

    /// Stop every firing alarm and drop it, its rows and any pending twin.
    pub fn dismiss(&mut self, audio: &mut dyn AudioSink) -> Vec<Alarm> {
        let active = std::mem::take(&mut self.active);
        let mut dismissed = Vec::with_capacity(active.len());
        for ActiveAlarm { alarm, sound } in active {
            if let Some(h) = sound {
                audio.pause(h);
                audio.rewind(h);
            }
            self.pending.retain(|a| *a != alarm);
            self.rows.retain(|r| r.alarm != alarm);
            info!(alarm = %alarm.key(), "alarm dismissed");
            dismissed.push(alarm);
        }
        dismissed
    }
}

#[cfg(test)]
#[path = "../../tests/unit/alarm/registry.rs"]
mod tests;
