//! Pillar commentary: stem/branch element relation plus the life-stage
//! clause of the slot.

use ming_base::Element;
use ming_chart::{Pillar, PillarSlot};

/// Relation between a pillar's stem element and branch element under
/// the generation cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementRelation {
    /// Stem and branch share one element.
    Congruent,
    /// Stem element generates the branch element.
    StemNourishesBranch,
    /// Branch element generates the stem element.
    BranchSupportsStem,
    /// Neither generates the other.
    Clashing,
}

impl ElementRelation {
    /// Classify a stem/branch element pair.
    pub fn classify(stem_el: Element, branch_el: Element) -> Self {
        if stem_el == branch_el {
            Self::Congruent
        } else if stem_el.generates() == branch_el {
            Self::StemNourishesBranch
        } else if branch_el.generates() == stem_el {
            Self::BranchSupportsStem
        } else {
            Self::Clashing
        }
    }

    /// Fixed commentary paragraph for the relation.
    pub const fn paragraph(self) -> &'static str {
        match self {
            Self::Congruent => {
                "【表裡如一】：天干與地支五行相同，代表這個階段您的外在表現與內心想法非常一致，能量純粹，執行力強。"
            }
            Self::StemNourishesBranch => {
                "【順勢而為】：外在環境（天干）滋養內在基礎（地支），代表雖然表面忙碌，但對您自身的積累是有益的，發展順遂。"
            }
            Self::BranchSupportsStem => {
                "【根基深厚】：內在實力（地支）支撐外在表現（天干），代表您底氣足，容易得到他人的支持或長輩的幫助。"
            }
            Self::Clashing => {
                "【磨礪成長】：天干與地支相剋，代表外在機遇與內在想法有衝突，雖然過程較為波折，但這也是一種自我突破和鍛煉。"
            }
        }
    }
}

/// Commentary for one pillar of a chart: the element relation paragraph
/// framed by the slot's life-stage clause.
pub fn interpret_pillar(pillar: &Pillar, slot: PillarSlot) -> String {
    let relation = ElementRelation::classify(pillar.stem.element(), pillar.branch.element());
    let rel = relation.paragraph();

    match slot {
        PillarSlot::Year => format!("此柱代表**幼年運及祖輩**。\n{rel}"),
        PillarSlot::Month => format!(
            "此柱代表**青年運及性格核心**。\n{rel}\n這是八字中最重要的部分，決定了您的主要性格特質。"
        ),
        PillarSlot::Day => format!(
            "此柱代表**中年運及配偶**。\n{rel}\n日支也代表配偶宮，這暗示了您與另一半的相處模式。"
        ),
        PillarSlot::Hour => {
            format!("此柱代表**晚年運及子女**。\n{rel}\n這是您人生最終的歸宿感。")
        }
    }
}
