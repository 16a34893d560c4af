//! The rule engine a front-end talks to.

use tracing::{debug, warn};

use crate::core::config::ZendoConfig;
use crate::core::grid::Grid;
use crate::core::rng::RuleRng;
use crate::error::{EngineError, RuleError};
use crate::fragments::Rule;
use crate::generator::RuleGenerator;
use crate::grammar::GrammarRegistry;
use crate::synthesis::{ChallengeDeck, ChallengeRun, ExampleSet, ExampleSynthesizer};

/// Owns the grammar, the configuration and the random streams.
///
/// Rules and examples draw from separate streams, so the sequence of rules
/// for a seed does not depend on how many examples were asked for.
///
/// ```
/// use rust_zendo::core::ZendoConfig;
/// use rust_zendo::ZendoEngine;
///
/// let mut engine = ZendoEngine::new(ZendoConfig::default().with_seed(42)).unwrap();
/// let rule = engine.new_rule().unwrap();
///
/// let examples = engine.generate_examples(&rule, 1, 1);
/// if examples.is_complete() {
///     assert!(engine.evaluate(&rule, &examples.positives[0]));
///     assert!(!engine.evaluate(&rule, &examples.negatives[0]));
/// }
/// ```
#[derive(Clone, Debug)]
pub struct ZendoEngine {
    registry: GrammarRegistry,
    config: ZendoConfig,
    synth: ExampleSynthesizer,
    rule_rng: RuleRng,
    example_rng: RuleRng,
}

impl ZendoEngine {
    /// Engine over the standard grammar.
    pub fn new(config: ZendoConfig) -> Result<Self, EngineError> {
        Self::with_registry(GrammarRegistry::standard(), config)
    }

    /// Engine over a custom grammar. Both inputs are validated first.
    pub fn with_registry(registry: GrammarRegistry, config: ZendoConfig) -> Result<Self, EngineError> {
        config.validate()?;
        registry.validate()?;
        let synth = ExampleSynthesizer::new(config.synthesis.clone())?;

        let base = config.seed.map_or_else(RuleRng::from_entropy, RuleRng::new);
        debug!(seed = base.seed(), entries = registry.len(), "engine ready");

        Ok(Self {
            synth,
            rule_rng: base.for_context("rules"),
            example_rng: base.for_context("examples"),
            registry,
            config,
        })
    }

    #[must_use]
    pub fn registry(&self) -> &GrammarRegistry {
        &self.registry
    }

    #[must_use]
    pub fn config(&self) -> &ZendoConfig {
        &self.config
    }

    /// A fresh random rule.
    pub fn new_rule(&mut self) -> Result<Rule, RuleError> {
        let rule = RuleGenerator::new(&self.registry).new_rule(&mut self.rule_rng)?;
        debug!("The rule is: {}", rule.describe());
        Ok(rule)
    }

    #[must_use]
    pub fn evaluate(&self, rule: &Rule, grid: &Grid) -> bool {
        rule.evaluate(grid)
    }

    #[must_use]
    pub fn describe(&self, rule: &Rule) -> String {
        rule.describe()
    }

    /// Boards that follow and break `rule`. A short set is logged, not
    /// raised.
    pub fn generate_examples(&mut self, rule: &Rule, num_positive: usize, num_negative: usize) -> ExampleSet {
        let examples = self.synth.generate(rule, num_positive, num_negative, &mut self.example_rng);
        if !examples.is_complete() {
            warn!(
                rule = %rule,
                positives = examples.positives.len(),
                negatives = examples.negatives.len(),
                wanted_positive = num_positive,
                wanted_negative = num_negative,
                attempts = examples.attempts,
                "example synthesis ran out of attempts"
            );
        }
        examples
    }

    /// One board that follows (`valid`) or breaks the rule, if one was found.
    pub fn example(&mut self, rule: &Rule, valid: bool) -> Option<Grid> {
        let (positive, negative) = if valid { (1, 0) } else { (0, 1) };
        self.generate_examples(rule, positive, negative).into_grids().into_iter().next()
    }

    /// Deal a challenge of `challenge_count` boards.
    pub fn deal_challenges(&mut self, rule: &Rule) -> ChallengeRun {
        let deck = ChallengeDeck::deal(rule, self.config.challenge_count, &self.synth, &mut self.example_rng);
        if deck.len() < self.config.challenge_count {
            warn!(rule = %rule, dealt = deck.len(), "challenge deck is short");
        }
        ChallengeRun::new(rule.clone(), deck)
    }
}
