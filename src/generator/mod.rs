//! Random rule generation.
//!
//! [`RuleGenerator`] walks the grammar top-down, picking entries by weight
//! under a tag budget, and [`assemble`] turns each decision into a typed
//! fragment once its children and variant are known.

mod assemble;
mod generator;

pub use assemble::assemble;
pub use generator::RuleGenerator;
