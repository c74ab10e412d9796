use super::*;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn quarter_turn_moves_top_to_right() {
    let c = Point::new(100.0, 100.0);
    let p = rotate_around(Point::new(100.0, 0.0), c, 90.0);
    assert!(close(p.x, 200.0), "{p:?}");
    assert!(close(p.y, 100.0), "{p:?}");
}

#[test]
fn full_turn_is_identity() {
    let c = Point::new(3.0, -7.0);
    let p0 = Point::new(11.5, 4.25);
    let p = rotate_around(p0, c, 360.0);
    assert!(close(p.x, p0.x) && close(p.y, p0.y), "{p:?}");
}

#[test]
fn rotation_preserves_distance_to_center() {
    let centers = [Point::new(0.0, 0.0), Point::new(440.0, 448.0), Point::new(-3.5, 12.0)];
    let points = [Point::new(440.0, 60.0), Point::new(1.0, 1.0), Point::new(-100.0, 250.0)];
    for c in centers {
        for p in points {
            let before = p.distance(c);
            let mut deg = -720.0;
            while deg <= 720.0 {
                let r = rotate_around(p, c, deg);
                assert!((r.distance(c) - before).abs() < 1e-6, "deg={deg} p={p:?} c={c:?}");
                deg += 7.5;
            }
        }
    }
}

#[test]
fn rotate_attr_formats_like_svg() {
    assert_eq!(rotate_attr(-87.0, Point::new(440.0, 440.0)), "rotate(-87 440,440)");
    assert_eq!(rotate_attr(12.5, Point::new(1.5, 2.0)), "rotate(12.5 1.5,2)");
}
