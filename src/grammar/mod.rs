//! Rule grammar: fragment kinds, weighted entries, and the registry.
//!
//! ## Key Components
//!
//! - [`FragmentKind`]: What the generator is asked for (rule, noun, ...)
//! - [`FragmentTag`] / [`TagSet`]: Board dimensions a fragment constrains
//! - [`GrammarEntry`]: One weighted, tagged expansion of a kind
//! - [`GrammarRegistry`]: All entries, grouped by kind
//!
//! The registry is plain data. Build it once with
//! [`GrammarRegistry::standard`] (or by hand for experiments), validate it,
//! and hand it to the generator.

mod entry;
mod registry;
mod tags;

pub use entry::{Constructor, FragmentKind, FragmentRole, GrammarEntry};
pub use registry::GrammarRegistry;
pub use tags::{FragmentTag, TagSet};
