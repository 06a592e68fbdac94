//! The Five Elements (五行) and their generation cycle.
//!
//! Stems and branches each map onto one of the five elements. The
//! generation (相生) cycle 木→火→土→金→水→木 drives the pillar
//! relationship classification; the control (相剋) cycle is the
//! catch-all in that classification and is not modelled separately.

/// One of the Five Elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Element {
    Metal,
    Wood,
    Water,
    Fire,
    Earth,
}

/// All five elements in canonical scoring-bucket order (金木水火土).
///
/// This order is load-bearing: the five-element distribution sorts
/// stably by score, so equal scores keep this bucket order.
pub const ALL_ELEMENTS: [Element; 5] = [
    Element::Metal,
    Element::Wood,
    Element::Water,
    Element::Fire,
    Element::Earth,
];

impl Element {
    /// Traditional glyph of the element.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Metal => "金",
            Self::Wood => "木",
            Self::Water => "水",
            Self::Fire => "火",
            Self::Earth => "土",
        }
    }

    /// 0-based index in scoring-bucket order (金=0 .. 土=4).
    pub const fn index(self) -> u8 {
        match self {
            Self::Metal => 0,
            Self::Wood => 1,
            Self::Water => 2,
            Self::Fire => 3,
            Self::Earth => 4,
        }
    }

    /// The element this one generates (相生 cycle).
    pub const fn generates(self) -> Element {
        match self {
            Self::Wood => Self::Fire,
            Self::Fire => Self::Earth,
            Self::Earth => Self::Metal,
            Self::Metal => Self::Water,
            Self::Water => Self::Wood,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_elements_count() {
        assert_eq!(ALL_ELEMENTS.len(), 5);
    }

    #[test]
    fn indices_sequential() {
        for (i, e) in ALL_ELEMENTS.iter().enumerate() {
            assert_eq!(e.index() as usize, i);
        }
    }

    #[test]
    fn names_nonempty() {
        for e in ALL_ELEMENTS {
            assert!(!e.name().is_empty());
        }
    }

    #[test]
    fn generation_cycle_closes() {
        // Starting anywhere, five generation steps return to the start.
        for e in ALL_ELEMENTS {
            let mut cur = e;
            for _ in 0..5 {
                cur = cur.generates();
            }
            assert_eq!(cur, e);
        }
    }

    #[test]
    fn generation_pairs() {
        assert_eq!(Element::Wood.generates(), Element::Fire);
        assert_eq!(Element::Fire.generates(), Element::Earth);
        assert_eq!(Element::Earth.generates(), Element::Metal);
        assert_eq!(Element::Metal.generates(), Element::Water);
        assert_eq!(Element::Water.generates(), Element::Wood);
    }
}
