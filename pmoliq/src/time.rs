//! Time predicates for scheduled playback
//!
//! Schedules arrive as HHMM time-of-day codes plus an optional weekday
//! subset and are rendered into the engine's predicate language:
//! `09h00-17h00`, `(1w or 5w) and 09h00-17h00`, and so on. Validation is
//! strict: a bad code fails the write instead of degenerating into a
//! predicate that is always or never true.

use std::fmt;

use crate::error::{Error, Result};

/// Upper bound of the "today" segment when a window wraps past midnight.
const DAY_END: &str = "23h59m59s";

/// A validated HHMM time-of-day code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TimeCode(u16);

impl TimeCode {
    pub fn new(code: u16) -> Result<Self> {
        let (hours, minutes) = (code / 100, code % 100);
        if hours > 23 || minutes > 59 {
            return Err(Error::InvalidTimeCode(code));
        }
        Ok(Self(code))
    }

    pub fn hours(&self) -> u16 {
        self.0 / 100
    }

    pub fn minutes(&self) -> u16 {
        self.0 % 100
    }
}

impl fmt::Display for TimeCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}h{:02}", self.hours(), self.minutes())
    }
}

/// A weekday, 1 = Monday through 7 = Sunday.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Weekday(u8);

impl Weekday {
    pub fn new(day: u8) -> Result<Self> {
        if (1..=7).contains(&day) {
            Ok(Self(day))
        } else {
            Err(Error::InvalidWeekday(day))
        }
    }

    /// The predicate atom for this day.
    ///
    /// The engine's weekday syntax requires `0w` for Sunday, so index 7 is
    /// remapped while 1 through 6 pass through. Do not "fix" this mixed
    /// convention.
    pub fn atom(&self) -> String {
        if self.0 == 7 {
            "0w".to_string()
        } else {
            format!("{}w", self.0)
        }
    }

    /// The next calendar day, wrapping Sunday (7) back to Monday (1).
    pub fn successor(&self) -> Weekday {
        if self.0 == 7 {
            Weekday(1)
        } else {
            Weekday(self.0 + 1)
        }
    }
}

/// Predicate for a playlist that plays at a fixed minute of every hour.
pub fn hourly_predicate(minute: u8) -> Result<String> {
    if minute > 59 {
        return Err(Error::InvalidMinute(minute));
    }
    Ok(format!("{}m", minute))
}

/// Predicate for a scheduled window.
///
/// `days` restricts playback to a weekday subset (empty or all seven days
/// means no restriction). When the window wraps past midnight the
/// restriction applies to the pre-midnight segment directly and to the
/// post-midnight segment shifted to each day's successor.
pub fn schedule_predicate(start: u16, end: u16, days: &[u8]) -> Result<String> {
    let start = TimeCode::new(start)?;
    let end = TimeCode::new(end)?;
    let days = days
        .iter()
        .map(|d| Weekday::new(*d))
        .collect::<Result<Vec<_>>>()?;
    let restricted = !days.is_empty() && days.len() < 7;

    if start > end {
        // Wraps past midnight: today's tail plus tomorrow's head.
        let today = format!("{}-{}", start, DAY_END);
        let tomorrow = format!("00h00-{}", end);
        if restricted {
            let successors: Vec<Weekday> = days.iter().map(Weekday::successor).collect();
            return Ok(format!(
                "(({}) and ({})) or (({}) and ({}))",
                day_disjunction(&days),
                today,
                day_disjunction(&successors),
                tomorrow
            ));
        }
        return Ok(format!("({}) or ({})", today, tomorrow));
    }

    let window = if start == end {
        start.to_string()
    } else {
        format!("{}-{}", start, end)
    };

    if restricted {
        Ok(format!("({}) and {}", day_disjunction(&days), window))
    } else {
        Ok(window)
    }
}

fn day_disjunction(days: &[Weekday]) -> String {
    days.iter()
        .map(Weekday::atom)
        .collect::<Vec<_>>()
        .join(" or ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_day_range_with_weekdays() {
        let predicate = schedule_predicate(900, 1700, &[1, 2, 3, 4, 5]).unwrap();
        assert_eq!(predicate, "(1w or 2w or 3w or 4w or 5w) and 09h00-17h00");
    }

    #[test]
    fn test_single_instant() {
        assert_eq!(schedule_predicate(1230, 1230, &[]).unwrap(), "12h30");
    }

    #[test]
    fn test_midnight_wraparound() {
        let predicate = schedule_predicate(2300, 100, &[]).unwrap();
        assert_eq!(predicate, "(23h00-23h59m59s) or (00h00-01h00)");
    }

    #[test]
    fn test_wraparound_shifts_weekdays() {
        // Friday and Sunday nights; the post-midnight halves land on
        // Saturday and Monday.
        let predicate = schedule_predicate(2300, 100, &[5, 7]).unwrap();
        assert_eq!(
            predicate,
            "((5w or 0w) and (23h00-23h59m59s)) or ((6w or 1w) and (00h00-01h00))"
        );
    }

    #[test]
    fn test_full_week_emits_no_day_clause() {
        let predicate = schedule_predicate(900, 1700, &[1, 2, 3, 4, 5, 6, 7]).unwrap();
        assert_eq!(predicate, "09h00-17h00");
    }

    #[test]
    fn test_sunday_renders_as_zero() {
        let predicate = schedule_predicate(900, 1700, &[7]).unwrap();
        assert_eq!(predicate, "(0w) and 09h00-17h00");
    }

    #[test]
    fn test_invalid_inputs_fail_closed() {
        assert!(matches!(
            schedule_predicate(2460, 100, &[]),
            Err(Error::InvalidTimeCode(2460))
        ));
        assert!(matches!(
            schedule_predicate(900, 1799, &[]),
            Err(Error::InvalidTimeCode(1799))
        ));
        assert!(matches!(
            schedule_predicate(900, 1700, &[8]),
            Err(Error::InvalidWeekday(8))
        ));
        assert!(matches!(hourly_predicate(60), Err(Error::InvalidMinute(60))));
    }

    #[test]
    fn test_hourly() {
        assert_eq!(hourly_predicate(30).unwrap(), "30m");
        assert_eq!(hourly_predicate(0).unwrap(), "0m");
    }
}
