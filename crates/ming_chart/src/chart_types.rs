//! Result types for chart computations.

use ming_base::{EarthlyBranch, Element, HeavenlyStem, MajorStar, MinorStar, PalaceRole};
use ming_time::LocalMoment;

/// Which of the four pillars a stem/branch pair belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PillarSlot {
    Year,
    Month,
    Day,
    Hour,
}

/// All four slots in chart order.
pub const ALL_PILLAR_SLOTS: [PillarSlot; 4] = [
    PillarSlot::Year,
    PillarSlot::Month,
    PillarSlot::Day,
    PillarSlot::Hour,
];

impl PillarSlot {
    /// Traditional slot name (年柱 月柱 日柱 時柱).
    pub const fn label(self) -> &'static str {
        match self {
            Self::Year => "年柱",
            Self::Month => "月柱",
            Self::Day => "日柱",
            Self::Hour => "時柱",
        }
    }

    /// Single-glyph display tag for the slot (命 提 元 時).
    pub const fn marker(self) -> &'static str {
        match self {
            Self::Year => "命",
            Self::Month => "提",
            Self::Day => "元",
            Self::Hour => "時",
        }
    }

    /// Short title of the life domain the slot governs.
    pub const fn title(self) -> &'static str {
        match self {
            Self::Year => "根基 (祖上)",
            Self::Month => "門戶 (父母/兄弟)",
            Self::Day => "自身 (夫妻宮)",
            Self::Hour => "歸宿 (子女/事業)",
        }
    }

    /// Plain-language definition of the slot.
    pub const fn description(self) -> &'static str {
        match self {
            Self::Year => "代表祖父母輩、祖業根基及幼年運勢。反映了你的出身背景與早年環境。",
            Self::Month => "代表父母、兄弟姐妹及青年運勢。這是八字中「提綱」，對性格和事業格局影響最大。",
            Self::Day => "天干代表「你自己」(日主)，地支代表配偶(夫妻宮)。反映中年運勢、婚姻生活及核心性格。",
            Self::Hour => "代表子女、下屬、晚年運勢及最終的事業成就。反映了你人生下半場的收成與歸宿。",
        }
    }

    /// Conventional age span the slot governs.
    pub const fn age_span(self) -> &'static str {
        match self {
            Self::Year => "1-16歲",
            Self::Month => "17-32歲",
            Self::Day => "33-48歲",
            Self::Hour => "49歲以後",
        }
    }

    /// Slot from its traditional label, if recognized.
    pub fn from_label(label: &str) -> Option<Self> {
        ALL_PILLAR_SLOTS.iter().copied().find(|s| s.label() == label)
    }
}

/// A stem/branch pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pillar {
    pub stem: HeavenlyStem,
    pub branch: EarthlyBranch,
}

impl Pillar {
    /// Two-glyph sexagenary name, e.g. 庚戌.
    pub fn name(&self) -> String {
        format!("{}{}", self.stem.name(), self.branch.name())
    }
}

/// The complete BaZi chart: four pillars plus the true solar time that
/// the day and hour pillars were derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FourPillarChart {
    pub year: Pillar,
    pub month: Pillar,
    pub day: Pillar,
    pub hour: Pillar,
    pub solar_time: LocalMoment,
}

impl FourPillarChart {
    /// The pillar in a given slot.
    pub fn pillar(&self, slot: PillarSlot) -> Pillar {
        match slot {
            PillarSlot::Year => self.year,
            PillarSlot::Month => self.month,
            PillarSlot::Day => self.day,
            PillarSlot::Hour => self.hour,
        }
    }

    /// All four pillars with their slots, in chart order.
    pub fn pillars(&self) -> [(PillarSlot, Pillar); 4] {
        [
            (PillarSlot::Year, self.year),
            (PillarSlot::Month, self.month),
            (PillarSlot::Day, self.day),
            (PillarSlot::Hour, self.hour),
        ]
    }

    /// The computed true-solar-time string, `YYYY-MM-DD HH:MM`.
    pub fn solar_time_string(&self) -> String {
        self.solar_time.to_string()
    }
}

/// One bucket of the five-element distribution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElementScore {
    pub element: Element,
    /// Raw weighted score (≥ 0).
    pub score: f64,
    /// Rounded share of the total, 0-100. All zero when the total is 0.
    pub percent: u8,
}

/// One of the twelve palaces of the Zi Wei chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palace {
    /// Fixed grid position: the branch anchoring this slot.
    pub branch: EarthlyBranch,
    /// Stem assigned to this slot by the simplified cycling rule.
    pub stem: HeavenlyStem,
    /// Life-domain role, rotated around the Life Palace anchor.
    pub role: PalaceRole,
    /// 0-2 major stars.
    pub major_stars: Vec<MajorStar>,
    /// 0-3 minor stars.
    pub minor_stars: Vec<MinorStar>,
    /// First year of the decade window (大限).
    pub age_start: u32,
    /// Last year of the decade window.
    pub age_end: u32,
}

impl Palace {
    /// Grid position 0-11 (branch index).
    pub fn id(&self) -> u8 {
        self.branch.index()
    }

    /// Decade window as a display string, e.g. `2-11`.
    pub fn age_range(&self) -> String {
        format!("{}-{}", self.age_start, self.age_end)
    }
}
