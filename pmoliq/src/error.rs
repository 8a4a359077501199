//! Error types for the liquidsoap program model

/// Result type alias for program-model operations
pub type Result<T> = std::result::Result<T, Error>;

/// Scheduling inputs are validated strictly: a malformed time code or
/// weekday must fail the whole write rather than silently produce a
/// predicate that is always (or never) true.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Time-of-day code outside the HHMM domain
    #[error("Invalid time code {0}: expected HHMM with hours < 24 and minutes < 60")]
    InvalidTimeCode(u16),

    /// Weekday index outside 1..=7
    #[error("Invalid weekday {0}: expected 1 (Monday) through 7 (Sunday)")]
    InvalidWeekday(u8),

    /// Minute-of-hour outside 0..=59
    #[error("Invalid minute of hour {0}")]
    InvalidMinute(u8),
}
