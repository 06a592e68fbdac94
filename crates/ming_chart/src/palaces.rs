//! Twelve-palace layout of the Zi Wei chart.
//!
//! Palace positions are the twelve branch slots. The Life Palace anchor
//! is fixed by birth month and hour; role names rotate backward from it,
//! so the slot at `mingIndex` always carries 命宮. Star assignment is a
//! deterministic placeholder behind the `StarPlacement` trait: the
//! default implementation hashes the birth timestamp and slot into fixed
//! modulus thresholds. A faithful flying-star algorithm can be swapped
//! in without touching callers.
//!
//! The layout is intentionally independent of the solar-time correction:
//! it reads the raw calendar month and raw clock hour.

use ming_base::{
    ALL_BRANCHES, ALL_MINOR_STARS, HeavenlyStem, MajorStar, MinorStar, PalaceRole,
    hour_branch_index,
};
use ming_time::epoch_millis_at_midnight;

use crate::chart_types::Palace;

/// Strategy for assigning stars to a branch slot.
///
/// Implementations must be pure: the same slot and birth timestamp must
/// always produce the same star sets.
pub trait StarPlacement {
    /// Major (0-2) and minor (0-3) stars for branch slot `branch_index`,
    /// given the birth date's UTC-midnight timestamp in milliseconds.
    fn stars_for(&self, branch_index: u8, birth_epoch_ms: i64) -> (Vec<MajorStar>, Vec<MinorStar>);
}

/// Default placeholder placement: a timestamp hash against fixed
/// modulus thresholds.
///
/// Not canonical astrology, but a stable stand-in whose exact outputs are
/// part of the engine's compatibility surface.
#[derive(Debug, Clone, Copy, Default)]
pub struct HashPlacement;

impl StarPlacement for HashPlacement {
    fn stars_for(&self, branch_index: u8, birth_epoch_ms: i64) -> (Vec<MajorStar>, Vec<MinorStar>) {
        let hash = (birth_epoch_ms + branch_index as i64).rem_euclid(100);

        let mut major = Vec::new();
        if hash % 3 == 0 {
            major.push(MajorStar::from_index(hash));
        }
        if hash % 7 == 0 {
            major.push(MajorStar::from_index(hash + 5));
        }
        if hash % 11 == 0 && major.len() < 2 {
            major.push(MajorStar::from_index(hash + 2));
        }

        // Minor pool is consumed in three fixed sub-groups of four.
        let mut minor = Vec::new();
        if hash % 2 == 0 {
            minor.push(ALL_MINOR_STARS[(hash % 4) as usize]);
        }
        if hash % 5 == 0 {
            minor.push(ALL_MINOR_STARS[(4 + hash % 4) as usize]);
        }
        if hash % 6 == 0 {
            minor.push(ALL_MINOR_STARS[(8 + hash % 4) as usize]);
        }

        (major, minor)
    }
}

/// Branch index of the Life Palace: (2 + (month − 1) − hourBranch) mod 12.
pub fn life_palace_index(month: u32, hour: u32) -> u8 {
    (2 + (month as i64 - 1) - hour_branch_index(hour) as i64).rem_euclid(12) as u8
}

/// Lay out the twelve palaces for a birth date and clock hour.
///
/// Role of slot `i` is `ALL_PALACE_ROLES[(ming − i) mod 12]`; the decade
/// window starts at `roleIndex × 10 + 2`; the slot stem follows the
/// simplified cycling rule `(i × 2 + year) mod 10` (distinct from the
/// BaZi Five Tigers table, preserved for output compatibility).
pub fn palace_chart(
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    placement: &dyn StarPlacement,
) -> [Palace; 12] {
    let birth_ms = epoch_millis_at_midnight(year, month, day);
    let ming = life_palace_index(month, hour) as i64;

    std::array::from_fn(|i| {
        let role_idx = (ming - i as i64).rem_euclid(12);
        let role = PalaceRole::from_index(role_idx);
        let (major_stars, minor_stars) = placement.stars_for(i as u8, birth_ms);
        let age_start = role_idx as u32 * 10 + 2;

        Palace {
            branch: ALL_BRANCHES[i],
            stem: HeavenlyStem::from_index(i as i64 * 2 + year as i64),
            role,
            major_stars,
            minor_stars,
            age_start,
            age_end: age_start + 9,
        }
    })
}
