//! Fail-fast parsing of birth input strings.
//!
//! Dates are `YYYY-MM-DD`, times `HH:MM`, both range-checked before any
//! computation runs. Longitude is the one lenient input: anything that
//! does not parse as a finite number falls back to the 120°E reference
//! meridian, which yields a zero longitude offset downstream.

use crate::calendar::days_in_month;
use crate::error::TimeError;

/// Parse a `YYYY-MM-DD` date string with range validation.
pub fn parse_date(s: &str) -> Result<(i32, u32, u32), TimeError> {
    let mut parts = s.split('-');
    let year = parts
        .next()
        .and_then(|p| p.parse::<i32>().ok())
        .ok_or(TimeError::InvalidDate("expected YYYY-MM-DD"))?;
    let month = parts
        .next()
        .and_then(|p| p.parse::<u32>().ok())
        .ok_or(TimeError::InvalidDate("expected YYYY-MM-DD"))?;
    let day = parts
        .next()
        .and_then(|p| p.parse::<u32>().ok())
        .ok_or(TimeError::InvalidDate("expected YYYY-MM-DD"))?;
    if parts.next().is_some() {
        return Err(TimeError::InvalidDate("trailing input after day"));
    }
    if !(1..=12).contains(&month) {
        return Err(TimeError::InvalidDate("month out of range"));
    }
    if day < 1 || day > days_in_month(year, month) {
        return Err(TimeError::InvalidDate("day out of range"));
    }
    Ok((year, month, day))
}

/// Parse an `HH:MM` time string with range validation.
pub fn parse_time(s: &str) -> Result<(u32, u32), TimeError> {
    let mut parts = s.split(':');
    let hour = parts
        .next()
        .and_then(|p| p.parse::<u32>().ok())
        .ok_or(TimeError::InvalidTime("expected HH:MM"))?;
    let minute = parts
        .next()
        .and_then(|p| p.parse::<u32>().ok())
        .ok_or(TimeError::InvalidTime("expected HH:MM"))?;
    if parts.next().is_some() {
        return Err(TimeError::InvalidTime("trailing input after minute"));
    }
    if hour > 23 {
        return Err(TimeError::InvalidTime("hour out of range"));
    }
    if minute > 59 {
        return Err(TimeError::InvalidTime("minute out of range"));
    }
    Ok((hour, minute))
}

/// Parse a longitude string, defaulting to 120.0 on anything unusable.
///
/// This recovery is silent and local; a defaulted longitude simply means
/// no longitude correction is applied.
pub fn parse_longitude(s: &str) -> f64 {
    match s.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => v,
        _ => 120.0,
    }
}
