use store_scraper::hours::{parse_weekly_text, DayAliases, OpeningHours, TimeOfDay, Weekday};

fn t(text: &str) -> TimeOfDay {
    TimeOfDay::parse(text).unwrap()
}

#[test]
fn add_range_then_serialize_covers_exactly_that_day() {
    for day in Weekday::ALL {
        let mut hours = OpeningHours::new();
        hours.add_range(day, t("9am"), t("9pm"));
        assert_eq!(
            hours.as_opening_hours(),
            format!("{} 09:00-21:00", day.abbrev())
        );
    }
}

#[test]
fn add_range_is_idempotent() {
    let mut hours = OpeningHours::new();
    hours.add_range(Weekday::Tuesday, t("10am"), t("6pm"));
    let once = hours.as_opening_hours();
    hours.add_range(Weekday::Tuesday, t("10am"), t("6pm"));
    assert_eq!(hours.as_opening_hours(), once);
}

#[test]
fn touching_intervals_merge_into_one() {
    let mut hours = OpeningHours::new();
    hours.add_range(Weekday::Monday, t("09:00"), t("12:00"));
    hours.add_range(Weekday::Monday, t("12:00"), t("18:00"));
    assert_eq!(hours.as_opening_hours(), "Mo 09:00-18:00");
}

#[test]
fn the_representative_dialect_string_round_trips() {
    let hours = parse_weekly_text(
        "Mon-Thu: 9am - 9pm, Black Friday: 8am - 10pm, Sat: 9am - 9pm, Sun: 10am - 8pm",
        &DayAliases::default(),
    );
    assert_eq!(
        hours.as_opening_hours(),
        "Mo-Th 09:00-21:00; Fr 08:00-22:00; Sa 09:00-21:00; Su 10:00-20:00"
    );
}

#[test]
fn noon_and_midnight_follow_the_twelve_hour_clock() {
    assert_eq!(TimeOfDay::parse("12am").unwrap().minutes(), 0);
    assert_eq!(TimeOfDay::parse("12pm").unwrap().minutes(), 720);

    // "12am - 12pm" covers the first half of the day
    let mut hours = OpeningHours::new();
    hours.add_range(Weekday::Sunday, t("12am"), t("12pm"));
    assert_eq!(hours.as_opening_hours(), "Su 00:00-12:00");
}

#[test]
fn a_malformed_clause_only_loses_itself() {
    let hours = parse_weekly_text(
        "Mon-Thu: 9am - 9pm, Fri 8am 10pm, Sat: 9am - 9pm",
        &DayAliases::default(),
    );
    assert_eq!(hours.as_opening_hours(), "Mo-Th 09:00-21:00; Sa 09:00-21:00");
}

#[test]
fn closed_days_contribute_nothing_and_are_not_rendered() {
    let hours = parse_weekly_text(
        "Mon-Fri: 9am - 5pm, Sat: Closed, Sun: Closed",
        &DayAliases::default(),
    );
    let rendered = hours.as_opening_hours();
    assert_eq!(rendered, "Mo-Fr 09:00-17:00");
    assert!(!rendered.contains("Closed"));
}

#[test]
fn serialization_is_deterministic() {
    let build = || {
        let mut hours = OpeningHours::new();
        hours.add_range(Weekday::Saturday, t("2pm"), t("8pm"));
        hours.add_range(Weekday::Saturday, t("8am"), t("12pm"));
        hours.add_range(Weekday::Monday, t("9am"), t("5pm"));
        hours
    };
    assert_eq!(build().as_opening_hours(), build().as_opening_hours());
    assert_eq!(
        build().as_opening_hours(),
        "Mo 09:00-17:00; Sa 08:00-12:00,14:00-20:00"
    );
}
