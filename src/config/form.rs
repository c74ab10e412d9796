//! Form state and the validated snapshot sampled from it.
//!
//! [`FormState`] mirrors the configuration panel field by field, selectors included as the raw
//! integers the panel submits. Nothing is validated when a field changes; every build or
//! mutation samples a [`Snapshot`], which is where out-of-range selectors surface as
//! [`ClockError::Range`].

use crate::{
    config::theme::ThemeName,
    foundation::core::Canvas,
    foundation::error::{ClockError, ClockResult},
};

/// One alarm as entered in the "add alarm" fields.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AlarmSpec {
    pub hour: u32,
    pub minute: u32,
    pub sound: String,
}

/// Raw configuration panel state.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct FormState {
    /// 0 analog, 1 digital.
    pub clock_type: u8,
    /// 0 arabic, 1 roman, 2 none.
    pub label_style: u8,
    pub hours: bool,
    pub minutes: bool,
    pub minutes_every_5: bool,
    pub seconds: bool,
    /// Hour labels on the inner ring.
    pub inner: bool,
    pub logo: bool,
    /// Index into [`ThemeName::ALL`].
    pub theme: u8,
    pub canvas: Canvas,
    /// Locale used for the digital weekday and date, e.g. `pl_PL`.
    pub locale: String,
    /// Alarms added at startup.
    pub alarms: Vec<AlarmSpec>,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            clock_type: 0,
            label_style: 0,
            hours: true,
            minutes: true,
            minutes_every_5: true,
            seconds: false,
            inner: false,
            logo: true,
            theme: 2,
            canvas: Canvas::default(),
            locale: "pl_PL".to_string(),
            alarms: Vec::new(),
        }
    }
}

/// Boolean panel toggles, addressable by handlers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Toggle {
    Hours,
    Minutes,
    MinutesEvery5,
    Seconds,
    Inner,
    Logo,
}

impl FormState {
    pub fn toggle(&self, t: Toggle) -> bool {
        match t {
            Toggle::Hours => self.hours,
            Toggle::Minutes => self.minutes,
            Toggle::MinutesEvery5 => self.minutes_every_5,
            Toggle::Seconds => self.seconds,
            Toggle::Inner => self.inner,
            Toggle::Logo => self.logo,
        }
    }

    pub fn set_toggle(&mut self, t: Toggle, on: bool) {
        let slot = match t {
            Toggle::Hours => &mut self.hours,
            Toggle::Minutes => &mut self.minutes,
            Toggle::MinutesEvery5 => &mut self.minutes_every_5,
            Toggle::Seconds => &mut self.seconds,
            Toggle::Inner => &mut self.inner,
            Toggle::Logo => &mut self.logo,
        };
        *slot = on;
    }

    pub fn labels(&self) -> LabelToggles {
        LabelToggles {
            hours: self.hours,
            minutes: self.minutes,
            minutes_every_5: self.minutes_every_5,
            seconds: self.seconds,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ClockType {
    Analog,
    Digital,
}

impl ClockType {
    pub fn from_index(v: u8) -> ClockResult<Self> {
        match v {
            0 => Ok(Self::Analog),
            1 => Ok(Self::Digital),
            _ => Err(ClockError::range(format!(
                "clock type value is out of bounds ({v})"
            ))),
        }
    }

    /// Selector value submitted by the form.
    pub fn index(self) -> u8 {
        match self {
            Self::Analog => 0,
            Self::Digital => 1,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LabelStyle {
    Arabic,
    Roman,
    None,
}

impl LabelStyle {
    pub fn from_index(v: u8) -> ClockResult<Self> {
        match v {
            0 => Ok(Self::Arabic),
            1 => Ok(Self::Roman),
            2 => Ok(Self::None),
            _ => Err(ClockError::range(format!(
                "label style value is out of bounds ({v})"
            ))),
        }
    }
}

/// Which label classes are switched on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LabelToggles {
    pub hours: bool,
    pub minutes: bool,
    pub minutes_every_5: bool,
    pub seconds: bool,
}

/// Validated, read-only view of the form at one instant.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Snapshot {
    pub clock_type: ClockType,
    pub label_style: LabelStyle,
    pub labels: LabelToggles,
    pub inner: bool,
    pub logo: bool,
    pub theme: ThemeName,
    pub locale: chrono::Locale,
}

impl Snapshot {
    pub fn sample(form: &FormState) -> ClockResult<Self> {
        Ok(Self {
            clock_type: ClockType::from_index(form.clock_type)?,
            label_style: LabelStyle::from_index(form.label_style)?,
            labels: form.labels(),
            inner: form.inner,
            logo: form.logo,
            theme: ThemeName::from_index(form.theme)?,
            locale: parse_locale(&form.locale)?,
        })
    }
}

pub fn parse_locale(s: &str) -> ClockResult<chrono::Locale> {
    chrono::Locale::try_from(s.replace('-', "_").as_str())
        .map_err(|_| ClockError::config(format!("unknown locale '{s}'")))
}

#[cfg(test)]
#[path = "../../tests/unit/config/form.rs"]
mod tests;
