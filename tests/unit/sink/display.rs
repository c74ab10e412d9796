use super::*;
use crate::{
    config::theme::ThemeName,
    foundation::core::Canvas,
    scene::node::{Attrs, Node},
};

fn temp_dir(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!(
        "clockface_{name}_{}_{}",
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ))
}

#[test]
fn surface_tracks_latest_patch_values() {
    let mut d = Surface::new();
    d.apply(&Patch::Attribute {
        id: "seconds".into(),
        name: "transform".into(),
        value: "rotate(1 0,0)".into(),
    })
    .unwrap();
    d.apply(&Patch::Attribute {
        id: "seconds".into(),
        name: "transform".into(),
        value: "rotate(2 0,0)".into(),
    })
    .unwrap();
    d.apply(&Patch::Text {
        id: "weekday-text".into(),
        text: "sroda".into(),
    })
    .unwrap();

    assert_eq!(d.attribute("seconds", "transform"), Some("rotate(2 0,0)"));
    assert_eq!(d.text("weekday-text"), Some("sroda"));
    assert_eq!(d.patches().len(), 3);
}

#[test]
fn surface_replace_resets_patched_state() {
    let mut d = Surface::new();
    d.apply(&Patch::Text {
        id: "a".into(),
        text: "x".into(),
    })
    .unwrap();
    d.replace("<g></g>").unwrap();
    assert_eq!(d.markup(), "<g></g>");
    assert_eq!(d.text("a"), None);
    assert_eq!(d.replace_count(), 1);
}

#[test]
fn surface_records_dialogs_and_theme() {
    let mut d = Surface::new();
    d.show_alarm_dialog(9, 30).unwrap();
    d.apply(&Patch::Theme(ThemeName::Ametyst.theme())).unwrap();
    assert_eq!(d.dialogs(), &[(9, 30)]);
    assert_eq!(d.theme(), Some(ThemeName::Ametyst.theme()));
}

#[test]
fn svg_file_writes_a_document_on_commit_only_when_dirty() {
    let dir = temp_dir("svg_file_commit");
    let path = dir.join("face.svg");
    let mut d = SvgFile::new(&path);

    let mut scene = Scene::new(Canvas::new(20, 20).unwrap());
    scene.append_child(Node::circle(10.0, 10.0, 5.0, Attrs::new().attr("id", "c")));
    scene.render(&mut d).unwrap();
    d.commit(&scene, ThemeName::Bezowy.theme()).unwrap();

    let doc = std::fs::read_to_string(&path).unwrap();
    assert!(doc.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\""));
    assert!(doc.contains("<circle cx=\"10\" cy=\"10\" r=\"5\" id=\"c\"></circle>"));

    std::fs::remove_file(&path).unwrap();
    d.commit(&scene, ThemeName::Bezowy.theme()).unwrap();
    assert!(!path.exists());

    std::fs::remove_dir_all(&dir).unwrap();
}
