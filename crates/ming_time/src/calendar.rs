//! Proleptic-Gregorian calendar arithmetic.
//!
//! Day numbers count civil days from the epoch 1970-01-01 (day 0),
//! negative before it. This replaces Julian Date handling for a domain
//! that only ever deals in wall-clock calendar dates.

/// Cumulative days before each month in a common year.
const CUM_DAYS: [u32; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

/// Whether a year is a Gregorian leap year.
pub const fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Number of days in a month (1-12) of a given year.
pub const fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 0,
    }
}

/// 1-indexed day-of-year for a civil date.
pub fn day_of_year(year: i32, month: u32, day: u32) -> u32 {
    let leap_shift = if month > 2 && is_leap_year(year) { 1 } else { 0 };
    CUM_DAYS[(month - 1) as usize] + day + leap_shift
}

/// Days from the civil epoch 1970-01-01 to the given date.
///
/// Standard era-based construction; exact for all i32 years.
pub fn days_from_civil(year: i32, month: u32, day: u32) -> i64 {
    let y = year as i64 - if month <= 2 { 1 } else { 0 };
    let era = if y >= 0 { y } else { y - 399 } / 400;
    let yoe = y - era * 400; // [0, 399]
    let mp = (month as i64 + 9) % 12; // March = 0
    let doy = (153 * mp + 2) / 5 + day as i64 - 1; // [0, 365]
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy; // [0, 146096]
    era * 146_097 + doe - 719_468
}

/// Civil date for a day number relative to 1970-01-01.
pub fn civil_from_days(days: i64) -> (i32, u32, u32) {
    let z = days + 719_468;
    let era = if z >= 0 { z } else { z - 146_096 } / 146_097;
    let doe = z - era * 146_097; // [0, 146096]
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365; // [0, 399]
    let y = yoe + era * 400;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100); // [0, 365]
    let mp = (5 * doy + 2) / 153; // [0, 11]
    let day = (doy - (153 * mp + 2) / 5 + 1) as u32; // [1, 31]
    let month = if mp < 10 { mp + 3 } else { mp - 9 } as u32;
    let year = (y + if month <= 2 { 1 } else { 0 }) as i32;
    (year, month, day)
}

/// Milliseconds since the epoch at UTC midnight of the given date.
///
/// Matches the timestamp of a date-only string parsed by the original
/// front end, which the palace star-placement hash is seeded with.
pub fn epoch_millis_at_midnight(year: i32, month: u32, day: u32) -> i64 {
    days_from_civil(year, month, day) * 86_400_000
}
