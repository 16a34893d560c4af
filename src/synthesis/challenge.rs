//! Challenge rounds: a shuffled deck of boards the player must classify.

use tracing::info;

use crate::core::grid::Grid;
use crate::core::rng::RuleRng;
use crate::fragments::Rule;

use super::sampler::ExampleSynthesizer;

/// Boards dealt for one challenge.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChallengeDeck {
    grids: Vec<Grid>,
}

impl ChallengeDeck {
    /// Deal up to `count` boards for `rule`.
    ///
    /// Draws `count - 1` boards on each side, so a deck always mixes both
    /// answers, then shuffles and keeps the first `count`. A short synthesis
    /// result gives a short deck.
    pub fn deal(rule: &Rule, count: usize, synth: &ExampleSynthesizer, rng: &mut RuleRng) -> Self {
        let per_side = count.saturating_sub(1);
        let mut grids = synth.generate(rule, per_side, per_side, rng).into_grids();
        rng.shuffle(&mut grids);
        grids.truncate(count);
        Self { grids }
    }

    #[must_use]
    pub fn grids(&self) -> &[Grid] {
        &self.grids
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.grids.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.grids.is_empty()
    }
}

/// Result of answering one board.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ChallengeOutcome {
    /// Right answer; `remaining` boards are left.
    Correct { remaining: usize },
    /// Right answer on the last board.
    Passed,
    /// Wrong answer. The run is over.
    Strike { grid: Grid, actual: bool },
}

/// A player's walk through a [`ChallengeDeck`].
///
/// ```
/// use rust_zendo::core::{Color, RuleRng, Shape};
/// use rust_zendo::fragments::{Predicate, Rule};
/// use rust_zendo::synthesis::{ChallengeDeck, ChallengeOutcome, ChallengeRun, ExampleSynthesizer};
///
/// let rule = Rule::Existential {
///     noun: Predicate::ColorNoun(Color::Red),
///     predicate: Predicate::Shape(Shape::Circle),
/// };
/// let deck = ChallengeDeck::deal(&rule, 5, &ExampleSynthesizer::default(), &mut RuleRng::new(1));
/// let mut run = ChallengeRun::new(rule.clone(), deck);
///
/// while let Some(grid) = run.current() {
///     let answer = rule.evaluate(grid);
///     if run.submit(answer) == Some(ChallengeOutcome::Passed) {
///         break;
///     }
/// }
/// assert!(run.is_passed());
/// ```
#[derive(Clone, Debug)]
pub struct ChallengeRun {
    rule: Rule,
    deck: ChallengeDeck,
    index: usize,
    struck: bool,
}

impl ChallengeRun {
    #[must_use]
    pub fn new(rule: Rule, deck: ChallengeDeck) -> Self {
        Self {
            rule,
            deck,
            index: 0,
            struck: false,
        }
    }

    #[must_use]
    pub fn rule(&self) -> &Rule {
        &self.rule
    }

    #[must_use]
    pub fn deck(&self) -> &ChallengeDeck {
        &self.deck
    }

    /// Board awaiting an answer, or `None` once the run is over.
    #[must_use]
    pub fn current(&self) -> Option<&Grid> {
        if self.struck {
            return None;
        }
        self.deck.grids.get(self.index)
    }

    /// Boards answered correctly so far.
    #[must_use]
    pub fn answered(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.current().is_none()
    }

    /// Every board answered correctly.
    #[must_use]
    pub fn is_passed(&self) -> bool {
        !self.struck && !self.deck.is_empty() && self.index == self.deck.len()
    }

    /// Answer the current board: `guess` is whether it follows the rule.
    ///
    /// Returns `None` when the run is already over.
    pub fn submit(&mut self, guess: bool) -> Option<ChallengeOutcome> {
        let grid = *self.current()?;
        let actual = self.rule.evaluate(&grid);

        if guess != actual {
            self.struck = true;
            info!("The grid was:");
            for line in grid.to_string().lines() {
                info!("{line}");
            }
            info!(
                "This was {} but you pressed {} - Strike!",
                if actual { "valid" } else { "invalid" },
                if guess { "Y" } else { "N" }
            );
            return Some(ChallengeOutcome::Strike { grid, actual });
        }

        self.index += 1;
        let remaining = self.deck.len() - self.index;
        if remaining == 0 {
            info!("Solved!");
            Some(ChallengeOutcome::Passed)
        } else {
            Some(ChallengeOutcome::Correct { remaining })
        }
    }
}
