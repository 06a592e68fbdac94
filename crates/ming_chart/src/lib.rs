//! Chart computation engines: BaZi four pillars, five-element scoring,
//! and the Zi Wei twelve-palace layout.
//!
//! This crate provides:
//! - `four_pillars`: sexagenary year/month/day/hour pillar derivation
//!   from true solar time
//! - `five_element_distribution`: weighted elemental balance of a chart
//! - `palace_chart`: the twelve life palaces with role rotation and
//!   pluggable star placement
//! - `annual_branch_index`: the cyclic branch of a target year
//!
//! Every entry point is a pure function over immutable inputs; there is
//! no shared state, no I/O, and no failure mode past the parse boundary.

pub mod bazi;
pub mod chart_types;
pub mod palaces;
pub mod score;

pub use bazi::four_pillars;
pub use chart_types::{ElementScore, FourPillarChart, Palace, Pillar, PillarSlot};
pub use ming_base::year_branch_index as annual_branch_index;
pub use palaces::{HashPlacement, StarPlacement, life_palace_index, palace_chart};
pub use score::{ScoreWeights, five_element_distribution};
