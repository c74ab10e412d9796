use super::*;

#[test]
fn defaults_match_the_panel() {
    let f = FormState::default();
    let s = Snapshot::sample(&f).unwrap();
    assert_eq!(s.clock_type, ClockType::Analog);
    assert_eq!(s.label_style, LabelStyle::Arabic);
    assert_eq!(s.theme, ThemeName::Cytrusowy);
    assert!(s.labels.hours && s.labels.minutes && s.labels.minutes_every_5);
    assert!(!s.labels.seconds);
    assert!(s.logo && !s.inner);
}

#[test]
fn out_of_range_selectors_are_range_errors() {
    for (clock_type, label_style, theme) in [(2, 0, 0), (0, 3, 0), (0, 0, 9)] {
        let f = FormState {
            clock_type,
            label_style,
            theme,
            ..FormState::default()
        };
        let err = Snapshot::sample(&f).unwrap_err();
        assert!(matches!(err, ClockError::Range(_)), "{err}");
    }
}

#[test]
fn clock_type_index_round_trips() {
    for t in [ClockType::Analog, ClockType::Digital] {
        assert_eq!(ClockType::from_index(t.index()).unwrap(), t);
    }
}

#[test]
fn unknown_locale_is_a_config_error() {
    assert!(matches!(parse_locale("xx_YY"), Err(ClockError::Config(_))));
    assert_eq!(parse_locale("en-US").unwrap(), chrono::Locale::en_US);
}

#[test]
fn toggles_are_addressable() {
    let mut f = FormState::default();
    f.set_toggle(Toggle::Seconds, true);
    f.set_toggle(Toggle::Logo, false);
    assert!(f.toggle(Toggle::Seconds));
    assert!(!f.toggle(Toggle::Logo));
    assert!(f.labels().seconds);
}

#[test]
fn partial_json_fills_defaults() {
    let f: FormState = serde_json::from_str(
        r#"{ "clock_type": 1, "alarms": [{ "hour": 7, "minute": 5, "sound": "a.mp3" }] }"#,
    )
    .unwrap();
    assert_eq!(f.clock_type, 1);
    assert_eq!(f.theme, 2);
    assert_eq!(f.canvas, Canvas::default());
    assert_eq!(
        f.alarms,
        vec![AlarmSpec {
            hour: 7,
            minute: 5,
            sound: "a.mp3".into()
        }]
    );
}
