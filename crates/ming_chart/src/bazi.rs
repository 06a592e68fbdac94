//! Four-pillar (BaZi) derivation from true solar time.
//!
//! Each pillar is a fixed modular-arithmetic rule over the solar-corrected
//! local date-time:
//! - year: (year − 4) cycle, no 立春 boundary; the calendar year is used
//!   directly (documented simplification)
//! - month: branch from the calendar month, stem from the year stem via
//!   the Five Tigers (五虎遁) start table
//! - day: civil-day count from the 2000-01-01 reference (戊午), with the
//!   子時 day shift: a true solar hour of 23:00 or later belongs to the
//!   next day's pillar
//! - hour: branch from the double-hour window, stem from the day stem via
//!   the Five Rats (五鼠遁) start table
//!
//! All cycle indices are normalized non-negative before lookup.

use ming_base::{EarthlyBranch, HeavenlyStem, hour_branch_index, year_stem_index};
use ming_time::{LocalMoment, SolarConfig, days_from_civil, true_solar_time};

use crate::chart_types::{FourPillarChart, Pillar};

/// Compute the four pillars for a local birth moment.
///
/// The moment is first corrected to true solar time at the given
/// longitude; all four pillars derive from the corrected value.
pub fn four_pillars(local: &LocalMoment, longitude_deg: f64, config: &SolarConfig) -> FourPillarChart {
    let solar = true_solar_time(local, longitude_deg, config);

    // 子時 day shift: 23:00+ counts toward the next day's pillar.
    let mut day_number = days_from_civil(solar.year, solar.month, solar.day);
    if solar.hour >= 23 {
        day_number += 1;
    }

    let (day, day_stem_idx) = day_pillar(day_number);

    FourPillarChart {
        year: year_pillar(solar.year),
        month: month_pillar(solar.year, solar.month, solar.day),
        day,
        hour: hour_pillar(day_stem_idx, solar.hour),
        solar_time: solar,
    }
}

/// Year pillar from the calendar year: (year − 4) mod 10 / mod 12.
pub fn year_pillar(year: i32) -> Pillar {
    Pillar {
        stem: HeavenlyStem::from_index(year as i64 - 4),
        branch: EarthlyBranch::from_index(year as i64 - 4),
    }
}

/// Month pillar from year stem and calendar month.
///
/// Branch: (month + 1) mod 12, with the early-month correction: when
/// that index lands on 0 and the day-of-month is below 4, the branch is
/// forced to index 1. Stem: Five Tigers start
/// `((yearStem mod 5) × 2 + 2) mod 10`, advanced by the branch offset
/// from 寅.
pub fn month_pillar(year: i32, month: u32, day: u32) -> Pillar {
    let year_stem = year_stem_index(year);
    let start_stem = ((year_stem % 5) * 2 + 2) % 10;

    let mut branch_idx = (month + 1) % 12;
    if branch_idx == 0 && day < 4 {
        branch_idx = 1;
    }

    let stem_idx = (start_stem as u32 + (branch_idx + 12 - 2) % 12) % 10;
    Pillar {
        stem: HeavenlyStem::from_index(stem_idx as i64),
        branch: EarthlyBranch::from_index(branch_idx as i64),
    }
}

/// Day number of the reference date 2000-01-01, a 戊午 day.
fn reference_day() -> i64 {
    days_from_civil(2000, 1, 1)
}

const REFERENCE_STEM: i64 = 4; // 戊
const REFERENCE_BRANCH: i64 = 6; // 午

/// Day pillar from the (possibly shifted) civil day number.
///
/// Also returns the day stem index, which seeds the hour stem.
pub fn day_pillar(day_number: i64) -> (Pillar, u8) {
    let diff = day_number - reference_day();
    let stem_idx = (REFERENCE_STEM + diff).rem_euclid(10) as u8;
    let branch_idx = (REFERENCE_BRANCH + diff).rem_euclid(12);
    (
        Pillar {
            stem: HeavenlyStem::from_index(stem_idx as i64),
            branch: EarthlyBranch::from_index(branch_idx),
        },
        stem_idx,
    )
}

/// Hour pillar from the day stem and the true solar hour.
///
/// Five Rats start: `(dayStem mod 5) × 2`, advanced by the hour branch.
pub fn hour_pillar(day_stem_idx: u8, hour: u32) -> Pillar {
    let start_stem = (day_stem_idx % 5) * 2 % 10;
    let branch_idx = hour_branch_index(hour);
    let stem_idx = (start_stem + branch_idx) % 10;
    Pillar {
        stem: HeavenlyStem::from_index(stem_idx as i64),
        branch: EarthlyBranch::from_index(branch_idx as i64),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ming_base::{ALL_BRANCHES, ALL_STEMS};

    #[test]
    fn year_pillar_1990() {
        let p = year_pillar(1990);
        assert_eq!(p.stem, ALL_STEMS[6]); // 庚
        assert_eq!(p.branch, ALL_BRANCHES[10]); // 戌
        assert_eq!(p.name(), "庚戌");
    }

    #[test]
    fn year_pillar_1984_jia_zi() {
        assert_eq!(year_pillar(1984).name(), "甲子");
    }

    #[test]
    fn year_pillar_negative_normalized() {
        // Year 1: (1 - 4) → stem 7, branch 9, never out of range
        let p = year_pillar(1);
        assert_eq!(p.stem.index(), 7);
        assert_eq!(p.branch.index(), 9);
    }

    #[test]
    fn month_pillar_june_1990() {
        // yearStem 庚(6): start = ((6%5)*2+2)%10 = 4; branch (6+1)%12 = 7 未
        // stem = (4 + 5) % 10 = 9 癸
        let p = month_pillar(1990, 6, 15);
        assert_eq!(p.name(), "癸未");
    }

    #[test]
    fn month_pillar_early_november_correction() {
        // Month 11 maps to branch (11+1)%12 = 0; day < 4 forces branch 1.
        let early = month_pillar(1990, 11, 3);
        assert_eq!(early.branch.index(), 1);
        let late = month_pillar(1990, 11, 4);
        assert_eq!(late.branch.index(), 0);
    }

    #[test]
    fn day_pillar_reference_date() {
        let (p, stem_idx) = day_pillar(days_from_civil(2000, 1, 1));
        assert_eq!(p.name(), "戊午");
        assert_eq!(stem_idx, 4);
    }

    #[test]
    fn day_pillar_next_day_advances_both_cycles() {
        let n = days_from_civil(2000, 1, 1);
        let (p, _) = day_pillar(n + 1);
        assert_eq!(p.name(), "己未");
    }

    #[test]
    fn day_pillar_before_reference_normalized() {
        // 1990-06-15 is 3487 days before the reference: stem 7 辛, branch 11 亥
        let (p, stem_idx) = day_pillar(days_from_civil(1990, 6, 15));
        assert_eq!(p.name(), "辛亥");
        assert_eq!(stem_idx, 7);
    }

    #[test]
    fn hour_pillar_afternoon() {
        // Day stem 辛(7): start = (7%5)*2 = 4; hour 14 → branch 7 未; stem (4+7)%10 = 1 乙
        let p = hour_pillar(7, 14);
        assert_eq!(p.name(), "乙未");
    }

    #[test]
    fn hour_pillar_rat_hour_uses_branch_zero() {
        let p = hour_pillar(0, 23);
        assert_eq!(p.branch.index(), 0);
        let p0 = hour_pillar(0, 0);
        assert_eq!(p0.branch.index(), 0);
    }

    #[test]
    fn full_chart_spec_example() {
        let config = SolarConfig::default();
        let local = LocalMoment::new(1990, 6, 15, 14, 30);
        let chart = four_pillars(&local, 120.0, &config);
        assert_eq!(chart.year.name(), "庚戌");
        assert_eq!(chart.month.name(), "癸未");
        assert_eq!(chart.day.name(), "辛亥");
        assert_eq!(chart.hour.name(), "乙未");
        assert_eq!(chart.solar_time_string(), "1990-06-15 14:29");
    }

    #[test]
    fn all_indices_always_in_range() {
        let config = SolarConfig::default();
        for (y, m, d, h, lon) in [
            (1900, 1, 1, 0, 73.5),
            (1969, 12, 31, 23, -122.4),
            (1984, 2, 29, 12, 120.0),
            (2024, 11, 2, 23, 139.7),
        ] {
            let chart = four_pillars(&LocalMoment::new(y, m, d, h, 30), lon, &config);
            for (_, p) in chart.pillars() {
                assert!(p.stem.index() < 10);
                assert!(p.branch.index() < 12);
            }
        }
    }
}
