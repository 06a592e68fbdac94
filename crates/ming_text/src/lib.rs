//! Rule-table interpretation generator.
//!
//! This crate provides:
//! - `interpret_star_in_palace`: a fixed paragraph for a named star in a
//!   named palace, with bespoke readings for 命宮, 夫妻, 財帛 and 官祿
//! - `interpret_pillar`: commentary for one BaZi pillar from its
//!   stem/branch element relation and life-stage slot
//!
//! Everything here is a pure lookup over fixed text tables; no I/O, no
//! randomness, byte-identical output for identical input.

pub mod pillar_text;
pub mod star_text;

pub use pillar_text::{ElementRelation, interpret_pillar};
pub use star_text::interpret_star_in_palace;
