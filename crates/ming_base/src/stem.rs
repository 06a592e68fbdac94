//! The 10 Heavenly Stems (天干).
//!
//! Stems cycle with period 10 through years, months, days, and hours.
//! Each stem carries a fixed Five-Element association (pairs of stems
//! share an element: 甲乙木, 丙丁火, 戊己土, 庚辛金, 壬癸水).

use crate::element::Element;

/// One of the 10 Heavenly Stems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeavenlyStem {
    Jia,
    Yi,
    Bing,
    Ding,
    Wu,
    Ji,
    Geng,
    Xin,
    Ren,
    Gui,
}

/// All 10 stems in cycle order (甲=0 .. 癸=9).
pub const ALL_STEMS: [HeavenlyStem; 10] = [
    HeavenlyStem::Jia,
    HeavenlyStem::Yi,
    HeavenlyStem::Bing,
    HeavenlyStem::Ding,
    HeavenlyStem::Wu,
    HeavenlyStem::Ji,
    HeavenlyStem::Geng,
    HeavenlyStem::Xin,
    HeavenlyStem::Ren,
    HeavenlyStem::Gui,
];

impl HeavenlyStem {
    /// Traditional glyph of the stem.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Jia => "甲",
            Self::Yi => "乙",
            Self::Bing => "丙",
            Self::Ding => "丁",
            Self::Wu => "戊",
            Self::Ji => "己",
            Self::Geng => "庚",
            Self::Xin => "辛",
            Self::Ren => "壬",
            Self::Gui => "癸",
        }
    }

    /// 0-based index in cycle order (甲=0 .. 癸=9).
    pub const fn index(self) -> u8 {
        match self {
            Self::Jia => 0,
            Self::Yi => 1,
            Self::Bing => 2,
            Self::Ding => 3,
            Self::Wu => 4,
            Self::Ji => 5,
            Self::Geng => 6,
            Self::Xin => 7,
            Self::Ren => 8,
            Self::Gui => 9,
        }
    }

    /// Stem from any integer index, normalized into the 10-cycle.
    pub fn from_index(idx: i64) -> Self {
        ALL_STEMS[idx.rem_euclid(10) as usize]
    }

    /// Fixed Five-Element association of the stem.
    pub const fn element(self) -> Element {
        match self {
            Self::Jia | Self::Yi => Element::Wood,
            Self::Bing | Self::Ding => Element::Fire,
            Self::Wu | Self::Ji => Element::Earth,
            Self::Geng | Self::Xin => Element::Metal,
            Self::Ren | Self::Gui => Element::Water,
        }
    }
}

/// Stem index for a calendar year: (year − 4) mod 10, normalized.
///
/// Year 4 CE is 甲 (index 0); 1984 likewise opens a sexagenary cycle.
pub fn year_stem_index(year: i32) -> u8 {
    (year - 4).rem_euclid(10) as u8
}
