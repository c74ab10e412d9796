//! Application context: one face, one loop, the alarms and the sinks.

use chrono::{NaiveDateTime, Timelike};
use tracing::{debug, info, warn};

use crate::{
    alarm::registry::{Alarm, AlarmRegistry},
    config::form::{ClockType, FormState, LabelStyle, Snapshot, Toggle, parse_locale},
    config::theme::{Theme, ThemeName},
    face::analog::{HandAngles, LOGO_ID, build_analog, logo_class},
    face::digital::{build_digital, date_texts, digit_masks, segment_styles},
    face::labels::LabelRing,
    foundation::core::Canvas,
    foundation::error::ClockResult,
    render::document::document,
    runtime::timers::{TimerId, Timers},
    scene::container::Scene,
    sink::audio::AudioSink,
    sink::display::Display,
};

/// Everything the clock mutates, owned in one place and driven by named handlers.
///
/// Handlers run to completion one at a time. Each ends by flushing queued patches and
/// committing the display, so a display never observes a half-finished handler.
pub struct ClockApp<D: Display, A: AudioSink> {
    form: FormState,
    scene: Scene,
    theme: &'static Theme,
    locale: chrono::Locale,
    timers: Timers,
    analog_timer: Option<TimerId>,
    digital_timer: Option<TimerId>,
    alarms: AlarmRegistry,
    /// Wall-clock time of the last build or tick.
    last: Option<NaiveDateTime>,
    display: D,
    audio: A,
}

impl<D: Display, A: AudioSink> ClockApp<D, A> {
    /// Create the context. Nothing is drawn until [`ClockApp::start`].
    pub fn new(form: FormState, display: D, audio: A) -> ClockResult<Self> {
        let canvas = Canvas::new(form.canvas.width, form.canvas.height)?;
        let theme = ThemeName::from_index(form.theme)?.theme();
        let locale = parse_locale(&form.locale)?;
        Ok(Self {
            form,
            scene: Scene::new(canvas),
            theme,
            locale,
            timers: Timers::new(),
            analog_timer: None,
            digital_timer: None,
            alarms: AlarmRegistry::new(),
            last: None,
            display,
            audio,
        })
    }

    /// Add the configured alarms and build the configured face.
    pub fn start(&mut self, now: &NaiveDateTime) -> ClockResult<()> {
        for spec in self.form.alarms.clone() {
            self.add_alarm(spec.hour, spec.minute, &spec.sound)?;
        }
        self.show_face(now)
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn theme(&self) -> &'static Theme {
        self.theme
    }

    pub fn timers(&self) -> &Timers {
        &self.timers
    }

    pub fn alarms(&self) -> &AlarmRegistry {
        &self.alarms
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn audio(&self) -> &A {
        &self.audio
    }

    /// Face currently driven by a loop, if any.
    pub fn mode(&self) -> Option<ClockType> {
        match (self.analog_timer, self.digital_timer) {
            (Some(_), _) => Some(ClockType::Analog),
            (None, Some(_)) => Some(ClockType::Digital),
            (None, None) => None,
        }
    }

    /// Standalone SVG document of the current scene and theme.
    pub fn document(&self) -> String {
        document(&self.scene, self.theme)
    }

    fn show_face(&mut self, now: &NaiveDateTime) -> ClockResult<()> {
        match Snapshot::sample(&self.form)?.clock_type {
            ClockType::Analog => self.show_analog(now),
            ClockType::Digital => self.show_digital(now),
        }
    }

    /// Rebuild the analog face and make the analog loop the only one running.
    ///
    /// The form follows: later handlers treat the analog face as the configured one.
    pub fn show_analog(&mut self, now: &NaiveDateTime) -> ClockResult<()> {
        let snap = Snapshot::sample(&self.form)?;
        self.form.clock_type = ClockType::Analog.index();
        if let Some(id) = self.digital_timer.take() {
            self.timers.cancel(id);
        }
        self.locale = snap.locale;
        let theme = snap.theme.theme();

        self.scene.clear(&mut self.display)?;
        let canvas = self.scene.canvas();
        self.scene
            .append_children(build_analog(canvas, &snap, theme, now));
        self.scene.render(&mut self.display)?;
        self.apply_theme(theme)?;
        self.last = Some(*now);

        if self.analog_timer.is_none() {
            self.analog_timer = Some(self.timers.start(ClockType::Analog));
            debug!("analog loop started");
        }
        self.finish()
    }

    /// Rebuild the digital face and make the digital loop the only one running.
    ///
    /// The form follows: later handlers treat the digital face as the configured one.
    pub fn show_digital(&mut self, now: &NaiveDateTime) -> ClockResult<()> {
        let snap = Snapshot::sample(&self.form)?;
        self.form.clock_type = ClockType::Digital.index();
        if let Some(id) = self.analog_timer.take() {
            self.timers.cancel(id);
        }
        self.locale = snap.locale;
        let theme = snap.theme.theme();

        self.scene.clear(&mut self.display)?;
        let canvas = self.scene.canvas();
        self.scene
            .append_children(build_digital(canvas, &snap, theme, now));
        self.scene.render(&mut self.display)?;
        self.apply_theme(theme)?;
        self.last = Some(*now);

        if self.digital_timer.is_none() {
            self.digital_timer = Some(self.timers.start(ClockType::Digital));
            debug!("digital loop started");
        }
        self.finish()
    }

    /// One 1 Hz tick of whichever loop is running: mutate the face, then scan alarms.
    pub fn tick(&mut self, now: &NaiveDateTime) -> ClockResult<()> {
        self.last = Some(*now);
        debug!(%now, "tick");
        let timers = self.timers.active().to_vec();
        for (_, face) in timers {
            match face {
                ClockType::Analog => self.update_analog(now)?,
                ClockType::Digital => self.update_digital(now)?,
            }
            self.scan_alarms(now)?;
        }
        self.finish()
    }

    fn update_analog(&mut self, now: &NaiveDateTime) -> ClockResult<()> {
        let canvas = self.scene.canvas();
        for (id, transform) in HandAngles::at(now).transforms(canvas) {
            self.scene.set_transform(id, transform)?;
        }
        Ok(())
    }

    fn update_digital(&mut self, now: &NaiveDateTime) -> ClockResult<()> {
        for (id, style) in segment_styles(digit_masks(now, self.form.labels())) {
            self.scene.set_style(&id, style.to_string())?;
        }
        for (id, text) in date_texts(now, self.locale) {
            self.scene.set_text(id, text)?;
        }
        Ok(())
    }

    fn scan_alarms(&mut self, now: &NaiveDateTime) -> ClockResult<()> {
        let (hour, minute) = (now.hour(), now.minute());
        let fired = self.alarms.scan(hour, minute, &mut self.audio);
        if !fired.is_empty() {
            self.display.show_alarm_dialog(hour, minute)?;
        }
        Ok(())
    }

    /// Publish all nine theme properties in one patch and point the logo at the theme's image.
    fn apply_theme(&mut self, theme: &'static Theme) -> ClockResult<()> {
        self.theme = theme;
        self.scene.queue_theme(theme);
        if self.scene.find(LOGO_ID).is_some() {
            self.scene.set_attr(LOGO_ID, "href", theme.logo.to_string())?;
        } else {
            warn!("no logo element to re-theme");
        }
        debug!(theme = theme.name.as_str(), "theme applied");
        Ok(())
    }

    fn finish(&mut self) -> ClockResult<()> {
        self.scene.flush(&mut self.display)?;
        self.display.commit(&self.scene, self.theme)
    }

    /// Switch between the analog (0) and digital (1) face.
    pub fn set_clock_type(&mut self, value: u8, now: &NaiveDateTime) -> ClockResult<()> {
        ClockType::from_index(value)?;
        self.form.clock_type = value;
        self.show_face(now)
    }

    /// Change the label style and relabel every analog ring.
    pub fn set_label_style(&mut self, value: u8) -> ClockResult<()> {
        LabelStyle::from_index(value)?;
        self.form.label_style = value;
        let snap = Snapshot::sample(&self.form)?;
        if snap.clock_type == ClockType::Analog {
            for ring in LabelRing::ALL {
                self.relabel(ring, &snap)?;
            }
        }
        self.finish()
    }

    /// Flip one panel toggle and update the affected part of the current face.
    pub fn set_toggle(&mut self, toggle: Toggle, on: bool) -> ClockResult<()> {
        self.form.set_toggle(toggle, on);
        let snap = Snapshot::sample(&self.form)?;
        match (snap.clock_type, toggle) {
            (ClockType::Analog, Toggle::Hours) => self.relabel(LabelRing::Hours, &snap)?,
            (ClockType::Analog, Toggle::Minutes | Toggle::MinutesEvery5) => {
                self.relabel(LabelRing::Minutes, &snap)?
            }
            (ClockType::Analog, Toggle::Seconds) => self.relabel(LabelRing::Seconds, &snap)?,
            (ClockType::Digital, Toggle::Hours | Toggle::Minutes) => {
                if let Some(now) = self.last {
                    for (id, style) in segment_styles(digit_masks(&now, snap.labels)) {
                        self.scene.set_style(&id, style.to_string())?;
                    }
                }
            }
            (ClockType::Analog, Toggle::Inner) => {
                let canvas = self.scene.canvas();
                for i in 0..LabelRing::Hours.count() {
                    let at = LabelRing::Hours.position(canvas, snap.inner, i);
                    self.scene.set_position(&LabelRing::Hours.label_id(i), at)?;
                }
            }
            (_, Toggle::Logo) => {
                if self.scene.find(LOGO_ID).is_some() {
                    self.scene
                        .set_attr(LOGO_ID, "class", logo_class(snap.logo).to_string())?;
                }
            }
            _ => {}
        }
        self.finish()
    }

    /// Select theme `value` (index into [`ThemeName::ALL`]).
    pub fn set_theme(&mut self, value: u8) -> ClockResult<()> {
        let theme = ThemeName::from_index(value)?.theme();
        self.form.theme = value;
        self.apply_theme(theme)?;
        self.finish()
    }

    pub fn add_alarm(&mut self, hour: u32, minute: u32, sound: &str) -> ClockResult<()> {
        self.alarms.add(Alarm::new(hour, minute, sound)?);
        Ok(())
    }

    pub fn remove_alarm(&mut self, alarm: &Alarm) -> usize {
        self.alarms.remove(alarm)
    }

    /// Close the alarm dialog: silence and forget every firing alarm.
    pub fn dismiss_alarms(&mut self) -> Vec<Alarm> {
        let dismissed = self.alarms.dismiss(&mut self.audio);
        if !dismissed.is_empty() {
            info!(count = dismissed.len(), "alarms dismissed");
        }
        dismissed
    }

    fn relabel(&mut self, ring: LabelRing, snap: &Snapshot) -> ClockResult<()> {
        for i in 0..ring.count() {
            let text = ring.text(snap.label_style, snap.labels, i);
            self.scene.set_text(&ring.label_id(i), text)?;
        }
        Ok(())
    }
}
