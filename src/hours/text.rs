use tracing::debug;

use super::day::{expand_day_range, DayAliases};
use super::time::TimeOfDay;
use super::OpeningHours;

/// Parse a whole-week hours string in the comma-separated clause dialect,
/// e.g. `"Mon-Thu: 9am - 9pm, Black Friday: 8am - 10pm, Sat: 9am - 9pm,
/// Sun: 10am - 8pm"`.
///
/// Each comma-separated clause splits on its first colon into a day spec
/// and a time spec. Clauses are independent: one that fails to parse is
/// logged at debug level and skipped, and the remainder still applies. A
/// string where every clause fails yields an empty schedule rather than an
/// error, so the caller can just omit the hours field.
pub fn parse_weekly_text(text: &str, aliases: &DayAliases) -> OpeningHours {
    let text = aliases.apply(text);
    let mut hours = OpeningHours::new();

    for clause in text.split(',') {
        let Some((day_spec, time_spec)) = clause.split_once(':') else {
            debug!(clause = clause.trim(), "hours clause has no day/time separator");
            continue;
        };

        let days = match expand_day_range(day_spec) {
            Ok(days) => days,
            Err(err) => {
                debug!(%err, "skipping hours clause");
                continue;
            }
        };

        let time_spec = time_spec.trim();
        if time_spec.eq_ignore_ascii_case("closed") {
            for day in days {
                hours.set_closed(day);
            }
            continue;
        }

        let Some((open_text, close_text)) = time_spec.split_once('-') else {
            debug!(clause = clause.trim(), "hours clause has no open-close separator");
            continue;
        };
        let (open, close) = match (TimeOfDay::parse(open_text), TimeOfDay::parse(close_text)) {
            (Ok(open), Ok(close)) => (open, close),
            (Err(err), _) | (_, Err(err)) => {
                debug!(%err, "skipping hours clause");
                continue;
            }
        };

        for day in days {
            hours.add_range(day, open, close);
        }
    }

    hours
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_the_full_dialect_with_aliases() {
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
    fn malformed_clauses_do_not_poison_the_rest() {
        let hours = parse_weekly_text(
            "Mon: 9am - 9pm, Tue 10am, Wed: whenever - 9pm, Thu: 9am - 9pm",
            &DayAliases::default(),
        );
        assert_eq!(
            hours.as_opening_hours(),
            "Mo 09:00-21:00; Th 09:00-21:00"
        );
    }

    #[test]
    fn closed_clause_records_no_intervals() {
        let hours = parse_weekly_text(
            "Mon-Sat: 9am - 5pm, Sun: Closed",
            &DayAliases::default(),
        );
        assert_eq!(hours.as_opening_hours(), "Mo-Sa 09:00-17:00");
    }

    #[test]
    fn minutes_in_times_survive_the_first_colon_split() {
        let hours = parse_weekly_text("Mon: 9:30am - 9:15pm", &DayAliases::default());
        assert_eq!(hours.as_opening_hours(), "Mo 09:30-21:15");
    }

    #[test]
    fn all_clauses_failing_yields_an_empty_schedule() {
        let hours = parse_weekly_text("call for hours", &DayAliases::default());
        assert!(hours.is_empty());
        let hours = parse_weekly_text("", &DayAliases::default());
        assert!(hours.is_empty());
    }

    #[test]
    fn custom_aliases_apply_before_day_resolution() {
        let aliases = DayAliases::default().with_alias("Boxing Day", "Sat");
        let hours = parse_weekly_text("Boxing Day: 10am - 4pm", &aliases);
        assert_eq!(hours.as_opening_hours(), "Sa 10:00-16:00");
    }
}
