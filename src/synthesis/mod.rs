//! Example boards for a rule.
//!
//! - [`ExampleSynthesizer`]: random boards sorted into followers and breakers
//! - [`ChallengeDeck`] / [`ChallengeRun`]: a shuffled mixed deck and the
//!   player's answers against it

mod challenge;
mod sampler;

pub use challenge::{ChallengeDeck, ChallengeOutcome, ChallengeRun};
pub use sampler::{ExampleSet, ExampleSynthesizer};
