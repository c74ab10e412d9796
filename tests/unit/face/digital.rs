use chrono::NaiveDate;

use super::*;
use crate::{config::form::FormState, config::theme::ThemeName, scene::container::Scene};

fn at(h: u32, m: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 10, 19)
        .unwrap()
        .and_hms_opt(h, m, 0)
        .unwrap()
}

fn digital_form() -> FormState {
    FormState {
        clock_type: 1,
        ..FormState::default()
    }
}

fn scene_for(form: &FormState, now: &NaiveDateTime) -> Scene {
    let snap = Snapshot::sample(form).unwrap();
    let mut scene = Scene::new(form.canvas);
    scene.append_children(build_digital(form.canvas, &snap, ThemeName::Morski.theme(), now));
    scene
}

fn lit(scene: &Scene, digit: usize) -> Vec<usize> {
    (0..SEGMENT_COUNT)
        .filter(|&s| {
            scene.find(&segment_id(digit, s)).unwrap().attrs().style == segment_style(true)
        })
        .collect()
}

#[test]
fn masks_split_hours_and_minutes() {
    let all = digital_form().labels();
    let m = digit_masks(&at(10, 28), all);
    assert_eq!(m[0], SegmentMask::for_digit(1).unwrap());
    assert_eq!(m[1], SegmentMask::for_digit(0).unwrap());
    assert_eq!(m[2], SegmentMask::for_digit(2).unwrap());
    assert_eq!(m[3], SegmentMask::for_digit(8).unwrap());
}

#[test]
fn disabled_pairs_are_dark() {
    let toggles = LabelToggles {
        hours: false,
        ..digital_form().labels()
    };
    let m = digit_masks(&at(18, 18), toggles);
    assert!(m[0].is_empty() && m[1].is_empty());
    assert_eq!(m[3], SegmentMask::for_digit(8).unwrap());
}

#[test]
fn built_segments_show_the_time() {
    let scene = scene_for(&digital_form(), &at(21, 8));
    assert_eq!(lit(&scene, 0), vec![0, 2, 3, 5, 6]);
    assert_eq!(lit(&scene, 1), vec![3, 4]);
    assert_eq!(lit(&scene, 2), vec![1, 2, 3, 4, 5, 6]);
    assert_eq!(lit(&scene, 3), vec![0, 1, 2, 3, 4, 5, 6]);
}

#[test]
fn segment_styles_cover_every_segment() {
    let styles: Vec<_> = segment_styles([SegmentMask::NONE; 4]).collect();
    assert_eq!(styles.len(), 4 * SEGMENT_COUNT);
    assert_eq!(styles[0], ("digit-0-seg-0".to_string(), "display: none;"));
}

#[test]
fn build_has_frame_logo_separator_and_texts() {
    let scene = scene_for(&digital_form(), &at(9, 5));
    for id in [
        "screen-clip",
        "face-bg",
        "digi-padding",
        "digi-border",
        "digi-screen",
        LOGO_ID,
        "hour-separator",
        "display-digits",
        WEEKDAY_TEXT_ID,
        MONTH_TEXT_ID,
    ] {
        assert!(scene.find(id).is_some(), "missing {id}");
    }
    assert_eq!(scene.find("hour-separator").unwrap().child_nodes().count(), 2);
    assert_eq!(
        scene.find(LOGO_ID).unwrap().attrs().get("clip-path"),
        Some("url(#screen-clip)")
    );
    assert_eq!(
        scene.find(WEEKDAY_TEXT_ID).and_then(Node::text_content),
        Some("poniedzialek")
    );
}

#[test]
fn date_texts_target_both_ids() {
    let [(w, _), (m, text)] = date_texts(&at(9, 5), Locale::en_US);
    assert_eq!((w, m), (WEEKDAY_TEXT_ID, MONTH_TEXT_ID));
    assert_eq!(text, "19 Oct");
}
