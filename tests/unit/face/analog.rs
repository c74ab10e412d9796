use chrono::NaiveDate;

use super::*;
use crate::{config::form::FormState, config::theme::ThemeName, scene::container::Scene};

fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 10, 19)
        .unwrap()
        .and_hms_opt(h, m, s)
        .unwrap()
}

fn scene_for(form: &FormState, now: &NaiveDateTime) -> Scene {
    let snap = Snapshot::sample(form).unwrap();
    let mut scene = Scene::new(form.canvas);
    scene.append_children(build_analog(form.canvas, &snap, ThemeName::Cytrusowy.theme(), now));
    scene
}

#[test]
fn hand_angles_follow_the_calibrated_formulas() {
    let a = HandAngles::at(&at(3, 15, 30));
    assert_eq!(a.second, -87.0 + 180.0);
    assert_eq!(a.minute, -86.0 + 3.0 + 90.0);
    assert_eq!(a.hour, -86.0 + 7.5 + 90.0);
}

#[test]
fn hand_transforms_rotate_about_the_face_center() {
    let t = HandAngles::at(&at(0, 0, 0)).transforms(Canvas::default());
    assert_eq!(t[0], (SECOND_HAND_ID, "rotate(-87 440,440)".to_string()));
    assert_eq!(t[2].0, HOUR_HAND_ID);
}

#[test]
fn build_emits_parts_in_paint_order() {
    let scene = scene_for(&FormState::default(), &at(9, 30, 0));
    let ids: Vec<Option<&str>> = scene
        .children()
        .iter()
        .map(|c| match c {
            Child::Node(n) => n.id(),
            Child::Raw(_) => None,
        })
        .collect();
    assert_eq!(
        ids,
        vec![
            None,
            Some("face-bg"),
            Some("face-circle"),
            Some("minute-markers"),
            Some("hour-markers"),
            Some(LOGO_ID),
            Some("hour-labels"),
            Some("minute-labels"),
            Some("second-labels"),
            Some("hands-of-time"),
        ]
    );
}

#[test]
fn tick_counts() {
    let scene = scene_for(&FormState::default(), &at(9, 30, 0));
    assert_eq!(scene.find("minute-markers").unwrap().child_nodes().count(), 60);
    assert_eq!(scene.find("hour-markers").unwrap().child_nodes().count(), 12);
    assert_eq!(scene.find("second-labels").unwrap().child_nodes().count(), 60);
}

#[test]
fn labels_follow_style_and_toggles() {
    let form = FormState {
        label_style: 1,
        seconds: false,
        ..FormState::default()
    };
    let scene = scene_for(&form, &at(9, 30, 0));
    let text = |id: &str| scene.find(id).and_then(Node::text_content).map(str::to_string);
    assert_eq!(text("hour-label-11").as_deref(), Some("XII"));
    assert_eq!(text("minute-label-4").as_deref(), Some("V"));
    assert_eq!(text("minute-label-5").as_deref(), Some(""));
    assert_eq!(text("second-label-0").as_deref(), Some(""));
}

#[test]
fn none_style_leaves_every_label_empty() {
    let form = FormState {
        label_style: 2,
        seconds: true,
        minutes_every_5: false,
        ..FormState::default()
    };
    let scene = scene_for(&form, &at(9, 30, 0));
    for ring in LabelRing::ALL {
        for i in 0..ring.count() {
            let n = scene.find(&ring.label_id(i)).unwrap();
            assert_eq!(n.text_content(), Some(""));
        }
    }
}

#[test]
fn logo_class_and_href_follow_form_and_theme() {
    let form = FormState {
        logo: false,
        ..FormState::default()
    };
    let scene = scene_for(&form, &at(9, 30, 0));
    let logo = scene.find(LOGO_ID).unwrap();
    assert_eq!(logo.attrs().get("class"), Some("hide"));
    assert_eq!(logo.attrs().get("href"), Some("assets/logo.png"));
}
