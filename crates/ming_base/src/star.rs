//! The star pools of the Zi Wei chart: 14 major stars and 12 minor stars.
//!
//! Each star carries a free-form element label (some stars traditionally
//! straddle two elements, e.g. 貪狼 木/水) and a one-line base
//! description used as the fallback seed by the interpretation
//! generator.

/// One of the 14 major stars (十四主星).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MajorStar {
    ZiWei,
    TianJi,
    TaiYang,
    WuQu,
    TianTong,
    LianZhen,
    TianFu,
    TaiYin,
    TanLang,
    JuMen,
    TianXiang,
    TianLiang,
    QiSha,
    PoJun,
}

/// All 14 major stars in pool order (紫微=0 .. 破軍=13).
pub const ALL_MAJOR_STARS: [MajorStar; 14] = [
    MajorStar::ZiWei,
    MajorStar::TianJi,
    MajorStar::TaiYang,
    MajorStar::WuQu,
    MajorStar::TianTong,
    MajorStar::LianZhen,
    MajorStar::TianFu,
    MajorStar::TaiYin,
    MajorStar::TanLang,
    MajorStar::JuMen,
    MajorStar::TianXiang,
    MajorStar::TianLiang,
    MajorStar::QiSha,
    MajorStar::PoJun,
];

impl MajorStar {
    /// Traditional name of the star.
    pub const fn name(self) -> &'static str {
        match self {
            Self::ZiWei => "紫微",
            Self::TianJi => "天機",
            Self::TaiYang => "太陽",
            Self::WuQu => "武曲",
            Self::TianTong => "天同",
            Self::LianZhen => "廉貞",
            Self::TianFu => "天府",
            Self::TaiYin => "太陰",
            Self::TanLang => "貪狼",
            Self::JuMen => "巨門",
            Self::TianXiang => "天相",
            Self::TianLiang => "天梁",
            Self::QiSha => "七殺",
            Self::PoJun => "破軍",
        }
    }

    /// 0-based index in pool order.
    pub const fn index(self) -> u8 {
        match self {
            Self::ZiWei => 0,
            Self::TianJi => 1,
            Self::TaiYang => 2,
            Self::WuQu => 3,
            Self::TianTong => 4,
            Self::LianZhen => 5,
            Self::TianFu => 6,
            Self::TaiYin => 7,
            Self::TanLang => 8,
            Self::JuMen => 9,
            Self::TianXiang => 10,
            Self::TianLiang => 11,
            Self::QiSha => 12,
            Self::PoJun => 13,
        }
    }

    /// Star from any integer index, normalized into the 14-pool.
    pub fn from_index(idx: i64) -> Self {
        ALL_MAJOR_STARS[idx.rem_euclid(14) as usize]
    }
}

/// One of the 12 auxiliary stars (輔星/煞星 pool).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MinorStar {
    WenChang,
    WenQu,
    ZuoFu,
    YouBi,
    TianKui,
    TianYue,
    QingYang,
    TuoLuo,
    HuoXing,
    LingXing,
    DiKong,
    DiJie,
}

/// All 12 minor stars in pool order (文昌=0 .. 地劫=11).
///
/// The pool is consumed in three sub-groups of four by the placement
/// rules: 文昌–右弼 (0-3), 天魁–陀羅 (4-7), 火星–地劫 (8-11).
pub const ALL_MINOR_STARS: [MinorStar; 12] = [
    MinorStar::WenChang,
    MinorStar::WenQu,
    MinorStar::ZuoFu,
    MinorStar::YouBi,
    MinorStar::TianKui,
    MinorStar::TianYue,
    MinorStar::QingYang,
    MinorStar::TuoLuo,
    MinorStar::HuoXing,
    MinorStar::LingXing,
    MinorStar::DiKong,
    MinorStar::DiJie,
];

impl MinorStar {
    /// Traditional name of the star.
    pub const fn name(self) -> &'static str {
        match self {
            Self::WenChang => "文昌",
            Self::WenQu => "文曲",
            Self::ZuoFu => "左輔",
            Self::YouBi => "右弼",
            Self::TianKui => "天魁",
            Self::TianYue => "天鉞",
            Self::QingYang => "擎羊",
            Self::TuoLuo => "陀羅",
            Self::HuoXing => "火星",
            Self::LingXing => "鈴星",
            Self::DiKong => "地空",
            Self::DiJie => "地劫",
        }
    }

    /// 0-based index in pool order.
    pub const fn index(self) -> u8 {
        match self {
            Self::WenChang => 0,
            Self::WenQu => 1,
            Self::ZuoFu => 2,
            Self::YouBi => 3,
            Self::TianKui => 4,
            Self::TianYue => 5,
            Self::QingYang => 6,
            Self::TuoLuo => 7,
            Self::HuoXing => 8,
            Self::LingXing => 9,
            Self::DiKong => 10,
            Self::DiJie => 11,
        }
    }

    /// Star from any integer index, normalized into the 12-pool.
    pub fn from_index(idx: i64) -> Self {
        ALL_MINOR_STARS[idx.rem_euclid(12) as usize]
    }
}

/// Base information about a star: its element label and one-line nature.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StarInfo {
    /// Element label; may straddle two elements (e.g. "木/水").
    pub element: &'static str,
    /// One-line base description, used as the interpretation fallback seed.
    pub description: &'static str,
}

/// Look up base information for a star by its traditional name.
///
/// Covers both pools; unknown names return `None` and are handled by the
/// interpretation generator's generic fallback.
pub fn star_info(name: &str) -> Option<StarInfo> {
    let (element, description) = match name {
        "紫微" => ("土", "帝王之星，掌管尊貴與權力，具有解厄制化之功。"),
        "天機" => ("木", "智慧之星，主思慮變通，長於策劃與計算。"),
        "太陽" => ("火", "權貴之星，主博愛與付出，象徵光明與熱能。"),
        "武曲" => ("金", "財帛之星，主剛毅果決，長於理財與行動。"),
        "天同" => ("水", "福德之星，主溫順協調，重享受與安樂。"),
        "廉貞" => ("火", "次桃花星，主交際手腕，性格複雜多變，亦正亦邪。"),
        "天府" => ("土", "財庫之星，主包容與守成，性格穩重，善於管理。"),
        "太陰" => ("水", "財富之星，主溫柔細膩，象徵母性與陰柔之美。"),
        "貪狼" => ("木/水", "桃花之星，主慾望與多才多藝，長於交際應酬。"),
        "巨門" => ("水", "是非之星，主口才與分析，性格多疑，長於研究。"),
        "天相" => ("水", "印鑑之星，主忠誠與服務，性格公正，樂於助人。"),
        "天梁" => ("土", "蔭庇之星，主長壽與照顧，性格清高，具有領導力。"),
        "七殺" => ("金/火", "將星，主肅殺與衝勁，性格剛烈，喜冒險犯難。"),
        "破軍" => ("水", "耗星，主破壞與建設，性格衝動，喜新厭舊。"),
        "文昌" => ("金", "科甲之星，主正統學術與功名。"),
        "文曲" => ("水", "異路功名，主口才、藝術與才藝。"),
        "左輔" => ("土", "貴人星，主圓融與輔佐。"),
        "右弼" => ("水", "貴人星，主機智與輔佐。"),
        "天魁" => ("火", "天乙貴人，主機遇與長輩提攜。"),
        "天鉞" => ("火", "玉堂貴人，主暗助與逢凶化吉。"),
        "擎羊" => ("金", "刑星，主攻擊與剛強。"),
        "陀羅" => ("金", "忌星，主拖延與固執。"),
        "火星" => ("火", "煞星，主爆發與剛烈。"),
        "鈴星" => ("火", "煞星，主隱忍與深沈。"),
        "地空" => ("火", "空亡之星，主精神超脫，易有破耗與幻想。"),
        "地劫" => ("火", "劫煞之星，主起伏波折，破財後往往另有所悟。"),
        _ => return None,
    };
    Some(StarInfo {
        element,
        description,
    })
}
