//! Civil time arithmetic and the true-solar-time correction.
//!
//! This crate provides:
//! - `LocalMoment`, the minute-resolution local date-time used throughout
//!   the engine
//! - Proleptic-Gregorian day-number conversions (epoch 1970-01-01)
//! - The equation-of-time approximation and longitude offset that
//!   together turn local clock time into true solar time
//! - Fail-fast parsing of date/time strings at the input boundary
//!
//! Everything here is pure arithmetic; no time zones, no system clock.

pub mod calendar;
pub mod error;
pub mod moment;
pub mod parse;
pub mod solar;

pub use calendar::{
    civil_from_days, day_of_year, days_from_civil, days_in_month, epoch_millis_at_midnight,
    is_leap_year,
};
pub use error::TimeError;
pub use moment::LocalMoment;
pub use parse::{parse_date, parse_longitude, parse_time};
pub use solar::{SolarConfig, equation_of_time_minutes, longitude_offset_minutes, true_solar_time};
