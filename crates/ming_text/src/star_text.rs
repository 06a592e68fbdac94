//! Star-in-palace interpretation paragraphs.
//!
//! Four palaces carry bespoke readings (命宮 夫妻 財帛 官祿); each sorts
//! the star into one of a few thematic groups with a fixed paragraph,
//! falling back to a sentence seeded from the star's base description.
//! Every other palace gets the generic template. All outputs are fixed
//! rule-table text; the same input always yields the same string.

use ming_base::{PalaceRole, StarInfo, star_info};

// Thematic groups for the Life Palace reading.
const LIFE_LEADERS: [&str; 4] = ["紫微", "天府", "太陽", "太陰"];
const LIFE_PIONEERS: [&str; 4] = ["武曲", "七殺", "破軍", "貪狼"];
const LIFE_ADVISORS: [&str; 4] = ["天機", "天同", "天梁", "天相"];
const LIFE_MAVERICKS: [&str; 2] = ["巨門", "廉貞"];

// Spouse Palace groups.
const SPOUSE_STRONG: [&str; 4] = ["紫微", "太陽", "天府", "武曲"];
const SPOUSE_GENTLE: [&str; 4] = ["天機", "太陰", "天同", "天相"];
const SPOUSE_VOLATILE: [&str; 4] = ["貪狼", "廉貞", "七殺", "破軍"];

// Wealth Palace groups. 祿存 is a classical wealth star outside both
// placement pools; it stays in the table for direct lookups.
const WEALTH_KEEPERS: [&str; 4] = ["武曲", "太陰", "天府", "祿存"];
const WEALTH_GAMBLERS: [&str; 3] = ["貪狼", "破軍", "七殺"];
const WEALTH_NOTABLES: [&str; 3] = ["紫微", "太陽", "天梁"];

// Career Palace groups.
const CAREER_LEADERS: [&str; 4] = ["紫微", "太陽", "天相", "廉貞"];
const CAREER_DOERS: [&str; 3] = ["武曲", "七殺", "破軍"];
const CAREER_THINKERS: [&str; 4] = ["文昌", "文曲", "天機", "太陰"];

/// Clause after the first Chinese comma of a base description, used to
/// splice the star's character into a fallback sentence. Descriptions
/// without a comma fall back to the whole text.
fn second_clause(description: &str) -> &str {
    let mut clauses = description.split('，');
    let first = clauses.next().unwrap_or(description);
    clauses.next().map_or(first, |c| c.trim_end_matches('。'))
}

/// Clause before the first Chinese comma.
fn first_clause(description: &str) -> &str {
    description
        .split('，')
        .next()
        .unwrap_or(description)
        .trim_end_matches('。')
}

/// First four characters of a base description (char-based, not bytes).
fn leading_chars(description: &str) -> String {
    description.chars().take(4).collect()
}

fn life_reading(star: &str, info: StarInfo) -> String {
    let mut text = format!(
        "【{star}星】坐守命宮。{star}五行屬{}，{}。\n\n**性格特質**：您天生具有{star}的能量氣場。",
        info.element,
        info.description.trim_end_matches('。'),
    );
    if LIFE_LEADERS.contains(&star) {
        text.push_str(
            "這是一顆領導型或貴氣型的星曜，意味著您自尊心強，有宏觀視野，不喜歡被拘束。\
             在人群中往往不怒自威，容易成為核心人物。但需注意有時是否過於主觀或清高。",
        );
    } else if LIFE_PIONEERS.contains(&star) {
        text.push_str(
            "這是一顆開創型或行動力強的星曜。您性格剛毅果決，喜歡冒險和挑戰，不滿足於現狀。\
             人生軌跡往往起伏較大，屬於「富貴險中求」的類型。",
        );
    } else if LIFE_ADVISORS.contains(&star) {
        text.push_str(
            "這是一顆輔佐型或智慧型的星曜。您心思細膩，擅長思考與策劃，待人處事較為圓融。\
             比起衝鋒陷陣，您更適合運籌帷幄或從事專業技術領域。",
        );
    } else if LIFE_MAVERICKS.contains(&star) {
        text.push_str(
            "這是一顆個性鮮明且複雜的星曜。您觀察力敏銳，具有批判精神或獨特的魅力。\
             口才佳或社交手腕靈活，但也容易因直言或情緒多變而招惹是非。",
        );
    }
    text
}

fn spouse_reading(star: &str, info: StarInfo) -> String {
    let mut text = format!("【{star}星】入夫妻宮。象徵您對感情的態度及配偶的特質。\n\n");
    if SPOUSE_STRONG.contains(&star) {
        text.push_str(
            "**配偶特質**：您的另一半通常能力出眾，個性獨立甚至強勢，在事業上多有所成。\
             您欣賞強者，但相處時易有「誰說了算」的爭執。建議多包容對方的事業心。",
        );
    } else if SPOUSE_GENTLE.contains(&star) {
        text.push_str(
            "**配偶特質**：您的另一半多半溫柔體貼，或外貌清秀斯文。\
             感情相處較注重精神層面的交流與生活情趣。對方可能比較依賴您，或需要您的呵護。",
        );
    } else if SPOUSE_VOLATILE.contains(&star) {
        text.push_str(
            "**感情運勢**：這是一組變動較大的星曜。代表您的感情生活豐富精彩，\
             配偶個性剛烈或極具魅力（桃花旺）。相處模式較為激烈，需防爭吵或第三者介入，\
             晚婚或聚少離多較佳。",
        );
    } else {
        text.push_str(&format!(
            "**感情運勢**：配偶可能帶有{star}星的特質，{}。雙方緣分深厚，但相處細節需視星曜廟陷而定。",
            second_clause(info.description),
        ));
    }
    text
}

fn wealth_reading(star: &str, info: StarInfo) -> String {
    let mut text = format!("【{star}星】鎮守財帛宮。主宰您的理財觀念與財富來源。\n\n");
    if WEALTH_KEEPERS.contains(&star) {
        text.push_str(
            "**財運分析**：大吉。此乃正財星入庫，代表您天生對金錢敏感，善於理財與積蓄。\
             財源穩定，且具有聚財能力，適合經商或金融投資，晚年財庫豐盈。",
        );
    } else if WEALTH_GAMBLERS.contains(&star) {
        text.push_str(
            "**財運分析**：主偏財或橫財。您的財運帶有投機或波動性質，敢於冒險投資，\
             有機會一夜致富，但也容易大進大出。建議見好就收，避免過度貪婪。",
        );
    } else if WEALTH_NOTABLES.contains(&star) {
        text.push_str(
            "**財運分析**：名大於利。您的財富多半伴隨著聲望或地位而來。\
             適合從事公職、管理或專業顧問，先求名聲響亮，財富自然會隨之而來。",
        );
    } else {
        text.push_str(&format!(
            "**財運分析**：您的賺錢模式傾向於靠{}，財運平穩，需靠專業技能或辛勤工作來累積財富。",
            leading_chars(info.description),
        ));
    }
    text
}

fn career_reading(star: &str, info: StarInfo) -> String {
    let mut text = format!("【{star}星】坐守官祿宮。反映您的職場表現與適合行業。\n\n");
    if CAREER_LEADERS.contains(&star) {
        text.push_str(
            "**事業方向**：您具有領袖氣質，適合從事管理、行政、政治或公共關係等工作。\
             在組織中容易獲得提拔，擔任主管職務。",
        );
    } else if CAREER_DOERS.contains(&star) {
        text.push_str(
            "**事業方向**：您適合軍警、工程、重工業或外勤業務等需要開創力與執行力的工作。\
             創業成功的機率也很高，屬於實幹型人才。",
        );
    } else if CAREER_THINKERS.contains(&star) {
        text.push_str(
            "**事業方向**：您適合從事學術研究、教育、設計、藝術或企劃等需要動腦與創意的行業。\
             您的才華是您在職場上最大的武器。",
        );
    } else {
        text.push_str(&format!(
            "**事業方向**：工作風格受{star}星影響，表現為{}，適合穩定的行政職或專業技術職。",
            second_clause(info.description),
        ));
    }
    text
}

fn generic_reading(star: &str, palace: &str, info: StarInfo) -> String {
    let domain = match PalaceRole::from_name(palace) {
        Some(_) => palace,
        None => "該領域",
    };
    format!(
        "【{star}星】在{palace}。\n\n**宮位影響**：此宮位代表您人生中的{domain}面向。\
         {star}星在此，意味著您在處理這方面事務時，態度會傾向於「{}」。\n\n\
         **大師點評**：星曜入宮顯示吉凶，但更需看三方四正的會照。\
         若有吉星（如文昌、左輔）相佐，則{star}星的優點更易發揮；\
         若遇煞星（如擎羊、火星），則需防範{star}星負面特質的顯現。",
        first_clause(info.description),
    )
}

/// Interpretation paragraph for a named star sitting in a named palace.
///
/// Unknown stars still yield a usable generic sentence rather than an
/// empty string, so callers can render every palace slot uniformly.
pub fn interpret_star_in_palace(star: &str, palace: &str) -> String {
    let Some(info) = star_info(star) else {
        return format!(
            "【{star}星】在{palace}。此星不在本局主要星曜名錄中，入宮僅作輔助參考，\
             吉凶仍以同宮主星及三方四正的會照為準。"
        );
    };

    match palace {
        "命宮" => life_reading(star, info),
        "夫妻" => spouse_reading(star, info),
        "財帛" => wealth_reading(star, info),
        "官祿" => career_reading(star, info),
        _ => generic_reading(star, palace, info),
    }
}
