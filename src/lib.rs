//! # rust-zendo
//!
//! Random rules for a 3x3 board of colored shapes, their English wording,
//! and example boards that follow or break them.
//!
//! ## Design Principles
//!
//! 1. **Grammar as data**: Rules are sampled from a weighted, tagged
//!    grammar held in an explicit [`GrammarRegistry`] value. Tags keep one
//!    rule from constraining the same board dimension twice.
//!
//! 2. **Closed fragment types**: Each role (rule, predicate, group, group
//!    predicate) is an enum, so evaluation and wording are exhaustive
//!    matches and a tree is never half-built.
//!
//! 3. **Deterministic**: All randomness goes through [`RuleRng`]. The same
//!    seed gives the same rules, examples and challenge decks.
//!
//! ## Modules
//!
//! - `core`: Symbols, the board, RNG, configuration
//! - `grammar`: Fragment kinds, tags, weighted entries, the registry
//! - `fragments`: Fragment trees, evaluation and description
//! - `generator`: Weighted, tag-aware rule generation
//! - `synthesis`: Example boards and challenge decks
//! - `engine`: The facade a front-end drives
//!
//! ```
//! use rust_zendo::{Grid, ZendoConfig, ZendoEngine};
//!
//! let mut engine = ZendoEngine::new(ZendoConfig::default().with_seed(7)).unwrap();
//! let rule = engine.new_rule().unwrap();
//! println!("{}", engine.describe(&rule));
//!
//! let grid: Grid = "rC __ __ __ yT __ __ __ bS".parse().unwrap();
//! let _follows = engine.evaluate(&rule, &grid);
//! ```

pub mod core;
pub mod error;
pub mod grammar;
pub mod fragments;
pub mod generator;
pub mod synthesis;
pub mod engine;

// Re-export commonly used types
pub use crate::core::{
    Axis, Color, Column, Grid, Row, Shape, Symbol,
    RuleRng, RuleRngState,
    ConfigError, SynthesisConfig, ZendoConfig,
};

pub use crate::error::{EngineError, RuleError};

pub use crate::grammar::{Constructor, FragmentKind, FragmentRole, FragmentTag, GrammarEntry, GrammarRegistry, TagSet};

pub use crate::fragments::{CellGroup, Fragment, Group, GroupPredicate, Predicate, Rule};

pub use crate::generator::RuleGenerator;

pub use crate::synthesis::{ChallengeDeck, ChallengeOutcome, ChallengeRun, ExampleSet, ExampleSynthesizer};

pub use crate::engine::ZendoEngine;
