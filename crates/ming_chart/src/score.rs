//! Five-element scoring of a four-pillar chart.
//!
//! Each pillar contributes its stem element at stem weight and its
//! branch element at branch weight. Branches sit heavier by default:
//! they carry the hidden, rooted energy of the chart.

use std::cmp::Ordering;

use ming_base::ALL_ELEMENTS;

use crate::chart_types::{ElementScore, FourPillarChart};

/// Contribution weights for a pillar's stem and branch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreWeights {
    pub stem: f64,
    pub branch: f64,
}

impl Default for ScoreWeights {
    /// Stem 1.0, branch 1.2 (rooted energy weighted heavier).
    fn default() -> Self {
        Self {
            stem: 1.0,
            branch: 1.2,
        }
    }
}

/// Aggregate the elemental balance of a chart, ranked by score.
///
/// Returns all five elements, sorted descending by raw score; the sort
/// is stable, so equal scores keep the 金木水火土 bucket order. Percent
/// shares are rounded; a zero total (degenerate weights) reports all
/// zero percents rather than dividing by zero.
pub fn five_element_distribution(
    chart: &FourPillarChart,
    weights: &ScoreWeights,
) -> [ElementScore; 5] {
    let mut scores = [0.0_f64; 5];
    for (_, pillar) in chart.pillars() {
        scores[pillar.stem.element().index() as usize] += weights.stem;
        scores[pillar.branch.element().index() as usize] += weights.branch;
    }
    let total: f64 = scores.iter().sum();

    let mut out: [ElementScore; 5] = std::array::from_fn(|i| ElementScore {
        element: ALL_ELEMENTS[i],
        score: scores[i],
        percent: if total == 0.0 {
            0
        } else {
            (scores[i] / total * 100.0).round() as u8
        },
    });
    out.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bazi::four_pillars;
    use ming_base::Element;
    use ming_time::{LocalMoment, SolarConfig};

    fn example_chart() -> FourPillarChart {
        // 庚戌 癸未 辛亥 乙未
        four_pillars(
            &LocalMoment::new(1990, 6, 15, 14, 30),
            120.0,
            &SolarConfig::default(),
        )
    }

    #[test]
    fn example_scores() {
        // Stems: 庚金 癸水 辛金 乙木 (1.0 each)
        // Branches: 戌土 未土 亥水 未土 (1.2 each)
        let dist = five_element_distribution(&example_chart(), &ScoreWeights::default());
        let get = |e: Element| dist.iter().find(|s| s.element == e).copied().unwrap();
        assert!((get(Element::Metal).score - 2.0).abs() < 1e-9);
        assert!((get(Element::Water).score - 2.2).abs() < 1e-9);
        assert!((get(Element::Wood).score - 1.0).abs() < 1e-9);
        assert!((get(Element::Earth).score - 3.6).abs() < 1e-9);
        assert!((get(Element::Fire).score - 0.0).abs() < 1e-9);
    }

    #[test]
    fn example_percents_and_order() {
        let dist = five_element_distribution(&example_chart(), &ScoreWeights::default());
        // Descending: 土 3.6, 水 2.2, 金 2.0, 木 1.0, 火 0
        assert_eq!(dist[0].element, Element::Earth);
        assert_eq!(dist[0].percent, 41);
        assert_eq!(dist[1].element, Element::Water);
        assert_eq!(dist[1].percent, 25);
        assert_eq!(dist[2].element, Element::Metal);
        assert_eq!(dist[2].percent, 23);
        assert_eq!(dist[3].element, Element::Wood);
        assert_eq!(dist[3].percent, 11);
        assert_eq!(dist[4].element, Element::Fire);
        assert_eq!(dist[4].percent, 0);
    }

    #[test]
    fn percents_sum_near_100() {
        let dist = five_element_distribution(&example_chart(), &ScoreWeights::default());
        let sum: u32 = dist.iter().map(|s| s.percent as u32).sum();
        assert!((99..=101).contains(&sum), "sum = {sum}");
    }

    #[test]
    fn zero_weights_report_zero_percents() {
        let weights = ScoreWeights {
            stem: 0.0,
            branch: 0.0,
        };
        let dist = five_element_distribution(&example_chart(), &weights);
        for s in dist {
            assert_eq!(s.percent, 0);
            assert!(s.score.abs() < 1e-12);
        }
    }

    #[test]
    fn equal_scores_keep_bucket_order() {
        // Branch weight 0 and stem weight 1: 金 2, 水 1, 木 1, 火 0, 土 0.
        // The two 1.0 ties and the two 0.0 ties must stay in 金木水火土
        // bucket order after the stable sort.
        let weights = ScoreWeights {
            stem: 1.0,
            branch: 0.0,
        };
        let dist = five_element_distribution(&example_chart(), &weights);
        assert_eq!(dist[0].element, Element::Metal);
        assert_eq!(dist[1].element, Element::Wood);
        assert_eq!(dist[2].element, Element::Water);
        assert_eq!(dist[3].element, Element::Fire);
        assert_eq!(dist[4].element, Element::Earth);
    }

    #[test]
    fn deterministic() {
        let a = five_element_distribution(&example_chart(), &ScoreWeights::default());
        let b = five_element_distribution(&example_chart(), &ScoreWeights::default());
        assert_eq!(a.to_vec(), b.to_vec());
    }
}
