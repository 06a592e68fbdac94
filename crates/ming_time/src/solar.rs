//! True-solar-time correction.
//!
//! Clock time is corrected for the observer's longitude (4 minutes per
//! degree from the reference meridian) and for the equation of time,
//! approximated by the standard three-term sinusoid. This is a
//! wall-clock approximation, not an ephemeris: accuracy is on the order
//! of a minute, which is what a two-hour branch window calls for.

use crate::calendar::day_of_year;
use crate::moment::LocalMoment;

/// Configuration for the solar-time correction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarConfig {
    /// Reference meridian the civil clock is anchored to, in degrees of
    /// longitude (east positive).
    pub reference_meridian_deg: f64,
}

impl Default for SolarConfig {
    /// 東經 120°, the standard meridian of China Standard Time.
    fn default() -> Self {
        Self {
            reference_meridian_deg: 120.0,
        }
    }
}

/// Equation of time in minutes for a 1-indexed day-of-year.
///
/// `9.87 sin 2B − 7.53 cos B − 1.5 sin B` with `B = 2π(doy − 81)/365`.
/// Positive when the sundial runs ahead of the clock.
pub fn equation_of_time_minutes(doy: u32) -> f64 {
    let b = std::f64::consts::TAU * (doy as f64 - 81.0) / 365.0;
    9.87 * (2.0 * b).sin() - 7.53 * b.cos() - 1.5 * b.sin()
}

/// Longitude correction in minutes: 4 minutes per degree east of the
/// reference meridian.
pub fn longitude_offset_minutes(longitude_deg: f64, config: &SolarConfig) -> f64 {
    (longitude_deg - config.reference_meridian_deg) * 4.0
}

/// Convert a local clock moment to true solar time.
pub fn true_solar_time(local: &LocalMoment, longitude_deg: f64, config: &SolarConfig) -> LocalMoment {
    let doy = day_of_year(local.year, local.month, local.day);
    let offset = longitude_offset_minutes(longitude_deg, config) + equation_of_time_minutes(doy);
    local.add_minutes(offset)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_meridian_has_no_longitude_offset() {
        let config = SolarConfig::default();
        assert!(longitude_offset_minutes(120.0, &config).abs() < 1e-12);
    }

    #[test]
    fn east_of_meridian_runs_ahead() {
        let config = SolarConfig::default();
        assert!((longitude_offset_minutes(121.5, &config) - 6.0).abs() < 1e-12);
        assert!((longitude_offset_minutes(116.4, &config) + 14.4).abs() < 1e-9);
    }

    #[test]
    fn eot_bounded() {
        // The equation of time never exceeds ~17 minutes either way.
        for doy in 1..=366 {
            let eot = equation_of_time_minutes(doy);
            assert!(eot.abs() < 17.0, "doy {doy}: {eot}");
        }
    }

    #[test]
    fn eot_at_day_81_reduces_to_cos_term() {
        // B = 0 at doy 81: the sin terms vanish, leaving −7.53.
        let eot = equation_of_time_minutes(81);
        assert!((eot + 7.53).abs() < 1e-12);
    }

    #[test]
    fn at_reference_meridian_only_eot_applies() {
        let config = SolarConfig::default();
        let local = LocalMoment::new(1990, 6, 15, 14, 30);
        let solar = true_solar_time(&local, 120.0, &config);
        let eot = equation_of_time_minutes(166);
        let expected = local.add_minutes(eot);
        assert_eq!(solar, expected);
    }

    #[test]
    fn spec_example_june_15() {
        // 1990-06-15 14:30 @120°E: EoT ≈ −0.19 min → 14:29
        let config = SolarConfig::default();
        let local = LocalMoment::new(1990, 6, 15, 14, 30);
        let solar = true_solar_time(&local, 120.0, &config);
        assert_eq!(solar, LocalMoment::new(1990, 6, 15, 14, 29));
    }

    #[test]
    fn longitude_shifts_solar_clock() {
        // 90°E is 120 minutes behind the reference meridian.
        let config = SolarConfig::default();
        let local = LocalMoment::new(1990, 6, 15, 14, 30);
        let west = true_solar_time(&local, 90.0, &config);
        let at_ref = true_solar_time(&local, 120.0, &config);
        assert_eq!(
            west.epoch_minutes(),
            at_ref.epoch_minutes() - 120
        );
    }

    #[test]
    fn deterministic() {
        let config = SolarConfig::default();
        let local = LocalMoment::new(1984, 2, 2, 2, 2);
        assert_eq!(
            true_solar_time(&local, 113.25, &config),
            true_solar_time(&local, 113.25, &config)
        );
    }
}
