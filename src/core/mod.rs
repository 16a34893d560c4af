//! Core types: symbols, the board, RNG, configuration.
//!
//! Everything above this module works in terms of these values. A [`Grid`]
//! is a plain `Copy` value; rules never hold on to one.

pub mod symbol;
pub mod grid;
pub mod rng;
pub mod config;

pub use symbol::{Color, Shape, Symbol};
pub use grid::{Axis, Column, Grid, ParseGridError, Row, CELL_COUNT};
pub use rng::{RuleRng, RuleRngState};
pub use config::{ConfigError, SynthesisConfig, ZendoConfig};
