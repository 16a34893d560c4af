//! Rejection sampling of example boards.

use serde::{Deserialize, Serialize};

use crate::core::config::{ConfigError, SynthesisConfig};
use crate::core::grid::{Grid, CELL_COUNT};
use crate::core::rng::RuleRng;
use crate::core::symbol::{Color, Shape, Symbol};
use crate::fragments::Rule;

/// Boards collected for one rule.
///
/// A set may come back short when the attempt cap runs out first; check
/// [`ExampleSet::is_complete`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExampleSet {
    /// Boards that follow the rule.
    pub positives: Vec<Grid>,
    /// Boards that break the rule.
    pub negatives: Vec<Grid>,
    /// Random boards drawn.
    pub attempts: u32,
    wanted_positive: usize,
    wanted_negative: usize,
}

impl ExampleSet {
    fn new(wanted_positive: usize, wanted_negative: usize) -> Self {
        Self {
            positives: Vec::with_capacity(wanted_positive),
            negatives: Vec::with_capacity(wanted_negative),
            attempts: 0,
            wanted_positive,
            wanted_negative,
        }
    }

    #[must_use]
    pub fn wanted(&self) -> (usize, usize) {
        (self.wanted_positive, self.wanted_negative)
    }

    /// Both quotas met.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.positives.len() == self.wanted_positive && self.negatives.len() == self.wanted_negative
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.positives.len() + self.negatives.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All boards, positives first.
    #[must_use]
    pub fn into_grids(self) -> Vec<Grid> {
        let mut grids = self.positives;
        grids.extend(self.negatives);
        grids
    }

    /// Offer a classified board; kept only if its quota has room.
    fn offer(&mut self, grid: Grid, follows: bool) {
        if follows {
            if self.positives.len() < self.wanted_positive {
                self.positives.push(grid);
            }
        } else if self.negatives.len() < self.wanted_negative {
            self.negatives.push(grid);
        }
    }
}

/// Draws random boards and sorts them by a rule until quotas are met.
///
/// ```
/// use rust_zendo::core::{Color, RuleRng, Shape, SynthesisConfig};
/// use rust_zendo::fragments::{Predicate, Rule};
/// use rust_zendo::synthesis::ExampleSynthesizer;
///
/// let rule = Rule::Existential {
///     noun: Predicate::ColorNoun(Color::Red),
///     predicate: Predicate::Shape(Shape::Circle),
/// };
///
/// let synth = ExampleSynthesizer::new(SynthesisConfig::default()).unwrap();
/// let examples = synth.generate(&rule, 2, 2, &mut RuleRng::new(7));
///
/// assert!(examples.is_complete());
/// assert!(examples.positives.iter().all(|g| rule.evaluate(g)));
/// ```
#[derive(Clone, Debug, Default)]
pub struct ExampleSynthesizer {
    config: SynthesisConfig,
}

impl ExampleSynthesizer {
    /// Synthesizer over a validated config.
    pub fn new(config: SynthesisConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    #[must_use]
    pub fn config(&self) -> &SynthesisConfig {
        &self.config
    }

    /// A board with a uniform fill count in `[min_fill, max_fill]`.
    ///
    /// Cells are swept in order and cell `i` is filled with probability
    /// `remaining / (9 - i)`, which fills exactly the drawn count.
    pub fn random_grid(&self, rng: &mut RuleRng) -> Grid {
        let mut remaining = rng.gen_range_usize(self.config.min_fill..self.config.max_fill + 1);
        let mut grid = Grid::empty();

        for cell in 0..CELL_COUNT {
            let odds = remaining as f64 / (CELL_COUNT - cell) as f64;
            if rng.unit() < odds {
                let color = Color::ALL[rng.gen_range_usize(0..Color::ALL.len())];
                let shape = Shape::ALL[rng.gen_range_usize(0..Shape::ALL.len())];
                grid.set(cell, Symbol::new(color, shape));
                remaining -= 1;
            }
        }

        grid
    }

    /// Collect up to `num_positive` boards that follow `rule` and up to
    /// `num_negative` that break it, giving up after `max_attempts` draws.
    pub fn generate(
        &self,
        rule: &Rule,
        num_positive: usize,
        num_negative: usize,
        rng: &mut RuleRng,
    ) -> ExampleSet {
        let mut examples = ExampleSet::new(num_positive, num_negative);

        while !examples.is_complete() && examples.attempts < self.config.max_attempts {
            examples.attempts += 1;
            let grid = self.random_grid(rng);
            examples.offer(grid, rule.evaluate(&grid));
        }

        examples
    }
}
