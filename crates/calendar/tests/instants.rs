use chrono::{DateTime, FixedOffset, TimeZone, Utc};
use dateonly_calendar::{Date, TimeDelta, since, today, until};

#[test]
fn add_then_sub_returns_the_duration() {
    let date = Date::new(2000, 1, 1);
    for duration in [
        TimeDelta::zero(),
        TimeDelta::hours(8) + TimeDelta::minutes(7) + TimeDelta::seconds(6),
        TimeDelta::days(400),
        -TimeDelta::milliseconds(1),
    ] {
        let instant = date.add(duration);
        assert_eq!(date.sub(&instant), -duration);
    }
}

#[test]
fn comparisons_against_instants_use_utc_midnight() {
    let date = Date::new(2000, 1, 2);
    let plus_one = FixedOffset::east_opt(3600).unwrap();
    // 2000-01-02T00:30:00+01:00 is 2000-01-01T23:30:00Z.
    let instant = plus_one.with_ymd_and_hms(2000, 1, 2, 0, 30, 0).unwrap();
    assert!(date.after_instant(&instant));
    assert!(!date.before_instant(&instant));
    assert_eq!(date.sub(&instant), TimeDelta::minutes(30));
}

#[test]
fn today_round_trips_through_text() {
    let today = today();
    assert_eq!(today.to_string().parse::<Date>(), Ok(today));
    assert!(!today.is_zero());
}

#[test]
fn since_and_until_are_mirror_images() {
    let anchor: DateTime<Utc> = Utc.with_ymd_and_hms(2001, 9, 9, 1, 46, 40).unwrap();
    let s = since(&anchor);
    let u = until(&anchor);
    // The clock may cross midnight between the two calls.
    assert!((s + u).num_days().abs() <= 1, "since {s} until {u}");
    assert!(s > TimeDelta::zero());
}
