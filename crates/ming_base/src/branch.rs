//! The 12 Earthly Branches (地支).
//!
//! Branches cycle with period 12 through years, months, days, and the
//! twelve two-hour watches of the day. Each branch has a fixed
//! Five-Element association and a zodiac animal.
//!
//! The hour mapping is the traditional double-hour scheme: 子時 spans
//! 23:00–00:59 (wrapping midnight), 丑時 01:00–02:59, and so on.

use crate::element::Element;

/// One of the 12 Earthly Branches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EarthlyBranch {
    Zi,
    Chou,
    Yin,
    Mao,
    Chen,
    Si,
    Wu,
    Wei,
    Shen,
    You,
    Xu,
    Hai,
}

/// All 12 branches in cycle order (子=0 .. 亥=11).
pub const ALL_BRANCHES: [EarthlyBranch; 12] = [
    EarthlyBranch::Zi,
    EarthlyBranch::Chou,
    EarthlyBranch::Yin,
    EarthlyBranch::Mao,
    EarthlyBranch::Chen,
    EarthlyBranch::Si,
    EarthlyBranch::Wu,
    EarthlyBranch::Wei,
    EarthlyBranch::Shen,
    EarthlyBranch::You,
    EarthlyBranch::Xu,
    EarthlyBranch::Hai,
];

impl EarthlyBranch {
    /// Traditional glyph of the branch.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Zi => "子",
            Self::Chou => "丑",
            Self::Yin => "寅",
            Self::Mao => "卯",
            Self::Chen => "辰",
            Self::Si => "巳",
            Self::Wu => "午",
            Self::Wei => "未",
            Self::Shen => "申",
            Self::You => "酉",
            Self::Xu => "戌",
            Self::Hai => "亥",
        }
    }

    /// 0-based index in cycle order (子=0 .. 亥=11).
    pub const fn index(self) -> u8 {
        match self {
            Self::Zi => 0,
            Self::Chou => 1,
            Self::Yin => 2,
            Self::Mao => 3,
            Self::Chen => 4,
            Self::Si => 5,
            Self::Wu => 6,
            Self::Wei => 7,
            Self::Shen => 8,
            Self::You => 9,
            Self::Xu => 10,
            Self::Hai => 11,
        }
    }

    /// Branch from any integer index, normalized into the 12-cycle.
    pub fn from_index(idx: i64) -> Self {
        ALL_BRANCHES[idx.rem_euclid(12) as usize]
    }

    /// Fixed Five-Element association of the branch.
    pub const fn element(self) -> Element {
        match self {
            Self::Yin | Self::Mao => Element::Wood,
            Self::Si | Self::Wu => Element::Fire,
            Self::Chen | Self::Xu | Self::Chou | Self::Wei => Element::Earth,
            Self::Shen | Self::You => Element::Metal,
            Self::Hai | Self::Zi => Element::Water,
        }
    }

    /// Zodiac animal of the branch.
    pub const fn animal(self) -> &'static str {
        match self {
            Self::Zi => "鼠",
            Self::Chou => "牛",
            Self::Yin => "虎",
            Self::Mao => "兔",
            Self::Chen => "龍",
            Self::Si => "蛇",
            Self::Wu => "馬",
            Self::Wei => "羊",
            Self::Shen => "猴",
            Self::You => "雞",
            Self::Xu => "狗",
            Self::Hai => "豬",
        }
    }
}

/// Branch index for a clock hour (0-23).
///
/// 子 (index 0) spans 23:00–00:59; every other branch spans the two-hour
/// window starting at the preceding odd hour (丑 01:00–02:59, …).
pub fn hour_branch_index(hour: u32) -> u8 {
    if hour >= 23 || hour < 1 {
        0
    } else {
        ((hour + 1) / 2) as u8
    }
}

/// Branch for a clock hour (0-23).
pub fn hour_branch(hour: u32) -> EarthlyBranch {
    ALL_BRANCHES[hour_branch_index(hour) as usize]
}

/// Branch index for a calendar year: (year − 4) mod 12, normalized.
///
/// Also serves as the annual-branch lookup used to flag the palace
/// matching a chosen target year (12-year periodicity).
pub fn year_branch_index(year: i32) -> u8 {
    (year - 4).rem_euclid(12) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_branches_count() {
        assert_eq!(ALL_BRANCHES.len(), 12);
    }

    #[test]
    fn indices_sequential() {
        for (i, b) in ALL_BRANCHES.iter().enumerate() {
            assert_eq!(b.index() as usize, i);
        }
    }

    #[test]
    fn names_and_animals_nonempty() {
        for b in ALL_BRANCHES {
            assert!(!b.name().is_empty());
            assert!(!b.animal().is_empty());
        }
    }

    #[test]
    fn from_index_wraps() {
        assert_eq!(EarthlyBranch::from_index(12), EarthlyBranch::Zi);
        assert_eq!(EarthlyBranch::from_index(-1), EarthlyBranch::Hai);
    }

    #[test]
    fn earth_branches_are_four() {
        let earths: Vec<_> = ALL_BRANCHES
            .iter()
            .filter(|b| b.element() == Element::Earth)
            .collect();
        assert_eq!(earths.len(), 4);
    }

    #[test]
    fn hour_branch_rat_wraparound() {
        assert_eq!(hour_branch_index(23), 0);
        assert_eq!(hour_branch_index(0), 0);
        assert_eq!(hour_branch_index(1), 1);
    }

    #[test]
    fn hour_branch_midday() {
        // 12:00 falls in 午時 (11:00–12:59)
        assert_eq!(hour_branch_index(12), 6);
        assert_eq!(hour_branch(12), EarthlyBranch::Wu);
    }

    #[test]
    fn hour_branch_afternoon() {
        // 14:00 falls in 未時 (13:00–14:59)
        assert_eq!(hour_branch_index(14), 7);
        assert_eq!(hour_branch(14), EarthlyBranch::Wei);
    }

    #[test]
    fn hour_branch_last_window() {
        // 22:00 falls in 亥時 (21:00–22:59)
        assert_eq!(hour_branch_index(22), 11);
    }

    #[test]
    fn year_branch_1990_is_xu() {
        // (1990 - 4) % 12 = 10 → 戌
        assert_eq!(year_branch_index(1990), 10);
        assert_eq!(ALL_BRANCHES[10], EarthlyBranch::Xu);
    }

    #[test]
    fn year_branch_periodic() {
        for year in [1900, 1984, 2000, 2024] {
            assert_eq!(year_branch_index(year), year_branch_index(year + 12));
            assert!(year_branch_index(year) < 12);
        }
    }

    #[test]
    fn year_branch_negative_year() {
        // Normalization must keep the result in range even for year 0
        assert!(year_branch_index(0) < 12);
        assert_eq!(year_branch_index(0), 8);
    }
}
