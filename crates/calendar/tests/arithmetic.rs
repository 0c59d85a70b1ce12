use dateonly_calendar::{Date, Weekday};

#[test]
fn add_months_carries_past_short_february() {
    // 2000 is a leap year: January 31 + 1 month = "February 31" = March 2.
    assert_eq!(Date::new(2000, 1, 31).add_months(1), Date::new(2000, 3, 2));
    // 1900 is not: "February 31" = March 3.
    assert_eq!(Date::new(1900, 1, 31).add_months(1), Date::new(1900, 3, 3));
    assert_eq!(Date::new(2000, 1, 1).add_months(1), Date::new(2000, 2, 1));
}

#[test]
fn add_date_matches_new_with_summed_fields() {
    let start = Date::new(2023, 11, 30);
    for (years, months, days) in [(0, 0, 0), (1, 2, 3), (-3, 14, -40), (0, -23, 400)] {
        let want = Date::new(
            start.year() + years as i32,
            i32::from(start.month()) + months as i32,
            i32::from(start.day()) + days as i32,
        );
        assert_eq!(
            start.add_date(years, months, days),
            want,
            "add_date({years}, {months}, {days})"
        );
    }
}

#[test]
fn single_field_helpers_agree_with_add_date() {
    let d = Date::new(2024, 2, 29);
    assert_eq!(d.add_years(1), d.add_date(1, 0, 0));
    assert_eq!(d.add_months(-13), d.add_date(0, -13, 0));
    assert_eq!(d.add_days(10_000), d.add_date(0, 0, 10_000));
}

#[test]
fn consecutive_days_over_a_leap_year() {
    let mut date = Date::new(2024, 1, 1);
    let mut weekday = date.weekday();
    for expected_yday in 1..=366u16 {
        assert_eq!(date.year_day(), expected_yday, "{date}");
        assert_eq!(date.weekday(), weekday, "{date}");
        let next = date.add_days(1);
        assert!(next.after(date));
        assert_eq!(next.compare(date), 1);
        date = next;
        weekday = weekday.succ();
    }
    assert_eq!(date, Date::new(2025, 1, 1));
    assert_eq!(date.weekday(), Weekday::Wed);
}

#[test]
fn normalization_is_idempotent() {
    for (y, m, d) in [(2000, 14, 35), (1999, -1, 0), (1, 1, 1), (2024, 2, 29), (-1, 0, -400)] {
        let date = Date::new(y, m, d);
        let (year, month, day) = date.deconstruct();
        assert_eq!(Date::new(year, i32::from(month), i32::from(day)), date);
    }
}

#[test]
fn sorting_follows_calendar_order() {
    let mut dates = vec![
        Date::new(2000, 1, 2),
        Date::new(1999, 12, 31),
        Date::new(2000, 1, 1),
        Date::ZERO,
    ];
    dates.sort();
    assert_eq!(
        dates,
        [
            Date::ZERO,
            Date::new(1999, 12, 31),
            Date::new(2000, 1, 1),
            Date::new(2000, 1, 2),
        ]
    );
}
