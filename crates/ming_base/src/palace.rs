//! The 12 palace roles (宮位) of the Zi Wei chart.
//!
//! Role names rotate around the twelve branch slots anchored at the Life
//! Palace (命宮); the rotation itself lives in the chart crate. This
//! module only fixes the role vocabulary and its canonical order.

/// One of the 12 life-domain palace roles, in rotation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PalaceRole {
    Life,
    Siblings,
    Spouse,
    Children,
    Wealth,
    Health,
    Travel,
    Friends,
    Career,
    Property,
    Fortune,
    Parents,
}

/// All 12 roles in rotation order (命宮=0 .. 父母=11).
pub const ALL_PALACE_ROLES: [PalaceRole; 12] = [
    PalaceRole::Life,
    PalaceRole::Siblings,
    PalaceRole::Spouse,
    PalaceRole::Children,
    PalaceRole::Wealth,
    PalaceRole::Health,
    PalaceRole::Travel,
    PalaceRole::Friends,
    PalaceRole::Career,
    PalaceRole::Property,
    PalaceRole::Fortune,
    PalaceRole::Parents,
];

impl PalaceRole {
    /// Traditional name of the role.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Life => "命宮",
            Self::Siblings => "兄弟",
            Self::Spouse => "夫妻",
            Self::Children => "子女",
            Self::Wealth => "財帛",
            Self::Health => "疾厄",
            Self::Travel => "遷移",
            Self::Friends => "交友",
            Self::Career => "官祿",
            Self::Property => "田宅",
            Self::Fortune => "福德",
            Self::Parents => "父母",
        }
    }

    /// 0-based index in rotation order (命宮=0 .. 父母=11).
    pub const fn index(self) -> u8 {
        match self {
            Self::Life => 0,
            Self::Siblings => 1,
            Self::Spouse => 2,
            Self::Children => 3,
            Self::Wealth => 4,
            Self::Health => 5,
            Self::Travel => 6,
            Self::Friends => 7,
            Self::Career => 8,
            Self::Property => 9,
            Self::Fortune => 10,
            Self::Parents => 11,
        }
    }

    /// Role from any integer index, normalized into the 12-cycle.
    pub fn from_index(idx: i64) -> Self {
        ALL_PALACE_ROLES[idx.rem_euclid(12) as usize]
    }

    /// Role from its traditional name, if recognized.
    pub fn from_name(name: &str) -> Option<Self> {
        ALL_PALACE_ROLES.iter().copied().find(|r| r.name() == name)
    }

    /// Plain-language definition of the life domain this role covers.
    pub const fn description(self) -> &'static str {
        match self {
            Self::Life => "核心自我：代表你的個性特質、天賦潛力以及整體的命運格局。這是解讀命盤的起點。",
            Self::Siblings => "人際手足：代表與兄弟姐妹、知心好友或合作夥伴的關係，也暗示現金流動的狀況。",
            Self::Spouse => "感情婚姻：代表對感情的態度、配偶的類型、婚姻關係的吉凶以及相處模式。",
            Self::Children => "親子晚輩：代表與子女的緣分、教育方式，也象徵你的創造力、桃花運及晚年運勢。",
            Self::Wealth => "財運理財：代表賺錢的能力、財富的來源、理財觀念以及物質生活的享受程度。",
            Self::Health => "身心健康：代表身體體質、易患疾病的傾向，也隱喻深層潛意識及心理狀態。",
            Self::Travel => "外出機遇：代表出外發展的運勢、社交場合的表現、貴人運以及環境適應能力。",
            Self::Friends => "社交人脈：代表普通朋友、部屬、同事的關係，反映你的人際圈層及受助力的多寡。",
            Self::Career => "事業學業：代表工作運勢、適合的職業方向、職場地位、創業能力及求學考試運。",
            Self::Property => "不動產運：代表居住環境、購屋運勢、家庭氛圍，也象徵財庫的積累與守財能力。",
            Self::Fortune => "精神享受：代表內心的安寧、興趣愛好、精神生活的品質，以及你的運氣和福氣。",
            Self::Parents => "長輩緣分：代表與父母的關係、遺傳基因、長輩的提攜助力，也象徵容貌與文書運。",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_roles_count() {
        assert_eq!(ALL_PALACE_ROLES.len(), 12);
    }

    #[test]
    fn indices_sequential() {
        for (i, r) in ALL_PALACE_ROLES.iter().enumerate() {
            assert_eq!(r.index() as usize, i);
        }
    }

    #[test]
    fn names_and_descriptions_nonempty() {
        for r in ALL_PALACE_ROLES {
            assert!(!r.name().is_empty());
            assert!(!r.description().is_empty());
        }
    }

    #[test]
    fn from_index_wraps() {
        assert_eq!(PalaceRole::from_index(12), PalaceRole::Life);
        assert_eq!(PalaceRole::from_index(-1), PalaceRole::Parents);
    }

    #[test]
    fn from_name_roundtrip() {
        for r in ALL_PALACE_ROLES {
            assert_eq!(PalaceRole::from_name(r.name()), Some(r));
        }
        assert_eq!(PalaceRole::from_name("不存在"), None);
    }

    #[test]
    fn life_palace_is_first() {
        assert_eq!(PalaceRole::from_index(0), PalaceRole::Life);
        assert_eq!(PalaceRole::Life.name(), "命宮");
    }
}
