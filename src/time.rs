//! Calendar-aware time shifting

use chrono::{DateTime, Duration, Months, TimeZone, Utc};

/// Returns the current time.
#[must_use]
pub fn now() -> DateTime<Utc> {
    Utc::now()
}

/// A shift to apply to a point in time.
///
/// Years and months follow calendar arithmetic (a month added to January 31
/// clamps to the end of February); the remaining fields are exact durations.
/// All fields may be negative. `Default` is the zero shift, so callers can
/// use struct update syntax:
///
/// ```
/// use tarray::TimeShift;
///
/// let shift = TimeShift { days: 3, hours: -12, ..TimeShift::default() };
/// assert_eq!(shift.years, 0);
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct TimeShift {
    /// Calendar years to shift by
    pub years: i32,
    /// Calendar months to shift by
    pub months: i32,
    /// Weeks to shift by
    pub weeks: i64,
    /// Days to shift by
    pub days: i64,
    /// Hours to shift by
    pub hours: i64,
    /// Minutes to shift by
    pub minutes: i64,
    /// Seconds to shift by
    pub seconds: i64,
}

/// Shifts `time` by the given amounts, returning `None` if the result would
/// fall outside the representable range.
pub fn shift_time<Tz: TimeZone>(time: DateTime<Tz>, shift: TimeShift) -> Option<DateTime<Tz>> {
    let months = i64::from(shift.years) * 12 + i64::from(shift.months);
    let time = if months >= 0 {
        time.checked_add_months(Months::new(u32::try_from(months).ok()?))?
    } else {
        time.checked_sub_months(Months::new(u32::try_from(-months).ok()?))?
    };
    let span = Duration::try_weeks(shift.weeks)?
        .checked_add(&Duration::try_days(shift.days)?)?
        .checked_add(&Duration::try_hours(shift.hours)?)?
        .checked_add(&Duration::try_minutes(shift.minutes)?)?
        .checked_add(&Duration::try_seconds(shift.seconds)?)?;
    time.checked_add_signed(span)
}
