use std::fmt;

use chrono::{NaiveTime, Timelike};

use super::HoursError;

/// A time of day as minutes since midnight, always in [0, 1440).
///
/// "Until midnight" closes are handled one level up: the accumulator maps a
/// close of 00:00 to minute 1440 so the interval keeps a positive length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay(u16);

impl TimeOfDay {
    pub const MINUTES_PER_DAY: u16 = 1440;

    pub fn from_minutes(minutes: u16) -> Option<TimeOfDay> {
        if minutes < Self::MINUTES_PER_DAY {
            Some(TimeOfDay(minutes))
        } else {
            None
        }
    }

    pub fn minutes(self) -> u16 {
        self.0
    }

    /// Parse either of the two dialects seen in locator feeds: 12-hour
    /// ("9am", "9:30pm") or 24-hour ("21:00"). Surrounding whitespace is
    /// ignored. "12am" is 00:00 and "12pm" is 12:00, per the standard
    /// 12-hour clock.
    pub fn parse(text: &str) -> Result<TimeOfDay, HoursError> {
        let trimmed = text.trim();
        let upper = trimmed.to_uppercase();

        let parsed = if upper.ends_with("AM") || upper.ends_with("PM") {
            let normalized = if upper.contains(':') {
                upper.clone()
            } else {
                // "9am" carries no minutes; give it some so one format fits
                let (hour, meridiem) = upper.split_at(upper.len() - 2);
                format!("{}:00{}", hour.trim_end(), meridiem)
            };
            NaiveTime::parse_from_str(&normalized, "%I:%M%p")
        } else {
            NaiveTime::parse_from_str(trimmed, "%H:%M")
        };

        let time = parsed.map_err(|_| HoursError::UnparseableTime(trimmed.to_string()))?;
        Ok(TimeOfDay((time.hour() * 60 + time.minute()) as u16))
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.0 / 60, self.0 % 60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minutes(text: &str) -> u16 {
        TimeOfDay::parse(text).unwrap().minutes()
    }

    #[test]
    fn parses_twelve_hour_times() {
        assert_eq!(minutes("9am"), 9 * 60);
        assert_eq!(minutes("9:30pm"), 21 * 60 + 30);
        assert_eq!(minutes(" 10am "), 10 * 60);
        assert_eq!(minutes("9 PM"), 21 * 60);
    }

    #[test]
    fn parses_twenty_four_hour_times() {
        assert_eq!(minutes("21:00"), 21 * 60);
        assert_eq!(minutes("09:00"), 9 * 60);
        assert_eq!(minutes("00:00"), 0);
    }

    #[test]
    fn noon_and_midnight_follow_the_twelve_hour_convention() {
        assert_eq!(minutes("12am"), 0);
        assert_eq!(minutes("12pm"), 12 * 60);
        assert_eq!(minutes("12:30am"), 30);
        assert_eq!(minutes("12:30pm"), 12 * 60 + 30);
    }

    #[test]
    fn rejects_garbage() {
        assert!(TimeOfDay::parse("").is_err());
        assert!(TimeOfDay::parse("soon").is_err());
        assert!(TimeOfDay::parse("25:00").is_err());
        assert!(TimeOfDay::parse("13pm").is_err());
    }

    #[test]
    fn formats_zero_padded() {
        assert_eq!(TimeOfDay::parse("9am").unwrap().to_string(), "09:00");
        assert_eq!(TimeOfDay::parse("9:05pm").unwrap().to_string(), "21:05");
    }
}
