use super::*;

#[test]
fn ids_are_unique_and_cancel_removes_them() {
    let mut t = Timers::new();
    let a = t.start(ClockType::Analog);
    let b = t.start(ClockType::Digital);
    assert_ne!(a, b);
    assert_eq!(t.active().len(), 2);

    assert!(t.cancel(a));
    assert!(!t.cancel(a));
    assert!(!t.is_active(a));
    assert!(t.is_active(b));
    assert_eq!(t.active(), &[(b, ClockType::Digital)]);
}

#[test]
fn restarting_hands_out_a_fresh_id() {
    let mut t = Timers::new();
    let a = t.start(ClockType::Analog);
    t.cancel(a);
    let b = t.start(ClockType::Analog);
    assert_ne!(a, b);
}

#[test]
fn ticker_waits_about_one_period() {
    let period = Duration::from_millis(20);
    let mut ticker = Ticker::new(period);
    let start = Instant::now();
    ticker.wait();
    ticker.wait();
    assert!(start.elapsed() >= Duration::from_millis(30));
}

#[test]
fn tick_is_one_second() {
    assert_eq!(TICK, Duration::from_secs(1));
}
