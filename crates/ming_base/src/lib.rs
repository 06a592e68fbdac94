//! Fixed vocabularies of the sexagenary and Zi Wei systems.
//!
//! This crate provides:
//! - The 10 Heavenly Stems and 12 Earthly Branches with their Five-Element
//!   mappings
//! - The Five Elements and their generation cycle
//! - The 12 palace roles of the Zi Wei chart
//! - The 14 major and 12 minor star pools with base descriptions
//! - Pure cyclic helpers (hour → branch, year → stem/branch)
//!
//! All tables are process-wide read-only constants; every lookup is a
//! total function over a closed enum.

pub mod branch;
pub mod element;
pub mod palace;
pub mod star;
pub mod stem;

pub use branch::{
    ALL_BRANCHES, EarthlyBranch, hour_branch, hour_branch_index, year_branch_index,
};
pub use element::{ALL_ELEMENTS, Element};
pub use palace::{ALL_PALACE_ROLES, PalaceRole};
pub use star::{ALL_MAJOR_STARS, ALL_MINOR_STARS, MajorStar, MinorStar, StarInfo, star_info};
pub use stem::{ALL_STEMS, HeavenlyStem, year_stem_index};
