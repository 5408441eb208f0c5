//! Opening-hours normalization shared by every spider.
//!
//! Locator APIs encode weekly hours in loosely structured text; this module
//! parses those inputs into a canonical per-weekday interval model and
//! renders it in the compact `Mo-Fr 09:00-21:00; Sa 10:00-18:00` notation.
//! Parsing failures here are always recoverable: a bad clause is dropped
//! with a debug log and the rest of the record survives.

mod day;
mod text;
mod time;

pub use day::{expand_day_range, DayAliases, Weekday};
pub use text::parse_weekly_text;
pub use time::TimeOfDay;

use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HoursError {
    #[error("unrecognized day token: {0:?}")]
    UnrecognizedDayToken(String),

    #[error("unparseable time: {0:?}")]
    UnparseableTime(String),
}

/// A half-open [open, close) span within one day, in minutes since
/// midnight. `close` may be 1440 to mean "until midnight".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Interval {
    open: u16,
    close: u16,
}

/// A week of opening hours: per weekday, an ordered list of
/// non-overlapping intervals. Built up with [`add_range`] while a record
/// is parsed, rendered once with [`as_opening_hours`], then discarded.
///
/// [`add_range`]: OpeningHours::add_range
/// [`as_opening_hours`]: OpeningHours::as_opening_hours
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OpeningHours {
    days: [Vec<Interval>; 7],
}

impl OpeningHours {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an open interval for one weekday, merging with anything it
    /// overlaps or touches. A close of 00:00 means midnight at the end of
    /// the day. Inverted or zero-length ranges are dropped, never raised:
    /// malformed feeds must not take down the rest of the record.
    pub fn add_range(&mut self, day: Weekday, open: TimeOfDay, close: TimeOfDay) {
        let open = open.minutes();
        let close = match close.minutes() {
            0 => TimeOfDay::MINUTES_PER_DAY,
            m => m,
        };
        if close <= open {
            debug!(day = day.name(), open, close, "dropping inverted hours range");
            return;
        }

        let mut merged = Interval { open, close };
        let list = &mut self.days[day.index()];
        list.retain(|existing| {
            if existing.open <= merged.close && merged.open <= existing.close {
                merged.open = merged.open.min(existing.open);
                merged.close = merged.close.max(existing.close);
                false
            } else {
                true
            }
        });
        let at = list.partition_point(|existing| existing.open < merged.open);
        list.insert(at, merged);
    }

    /// Mark a day as explicitly closed. The explicit closure wins over any
    /// interval recorded earlier for the same day.
    pub fn set_closed(&mut self, day: Weekday) {
        let list = &mut self.days[day.index()];
        if !list.is_empty() {
            debug!(day = day.name(), "explicit Closed overrides earlier hours");
        }
        list.clear();
    }

    /// True when no day carries any interval. Callers use this to omit the
    /// `opening_hours` field entirely rather than emit a wrong value.
    pub fn is_empty(&self) -> bool {
        self.days.iter().all(|day| day.is_empty())
    }

    /// Render the canonical compact notation: consecutive weekdays with
    /// identical hours are grouped into one `Mo-Th` clause, clauses run
    /// Monday-first joined by `"; "`, and closed days are simply omitted.
    /// Identical schedules always render to identical strings, which is
    /// what downstream dedup keys on.
    pub fn as_opening_hours(&self) -> String {
        let mut clauses = Vec::new();
        let mut start = 0;
        while start < 7 {
            let intervals = &self.days[start];
            if intervals.is_empty() {
                start += 1;
                continue;
            }
            let mut end = start;
            while end + 1 < 7 && self.days[end + 1] == *intervals {
                end += 1;
            }

            let days = if start == end {
                Weekday::ALL[start].abbrev().to_string()
            } else {
                format!(
                    "{}-{}",
                    Weekday::ALL[start].abbrev(),
                    Weekday::ALL[end].abbrev()
                )
            };
            let times = intervals
                .iter()
                .map(|iv| format!("{}-{}", fmt_minutes(iv.open), fmt_minutes(iv.close)))
                .collect::<Vec<_>>()
                .join(",");
            clauses.push(format!("{days} {times}"));
            start = end + 1;
        }
        clauses.join("; ")
    }
}

fn fmt_minutes(minutes: u16) -> String {
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}
