use super::*;

#[test]
fn canvas_rejects_zero_dimensions() {
    assert!(Canvas::new(0, 10).is_err());
    assert!(Canvas::new(10, 0).is_err());
    let c = Canvas::new(440, 220).unwrap();
    assert_eq!(c.center(), Point::new(220.0, 110.0));
}

#[test]
fn default_canvas_matches_form_panel() {
    let c = Canvas::default();
    assert_eq!((c.width, c.height), (880, 880));
    assert_eq!(c.w(), 880.0);
}
