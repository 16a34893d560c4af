//! Engine facade integration tests.

use rust_zendo::{
    ChallengeOutcome, ConfigError, Grid, GrammarEntry, GrammarRegistry, Constructor, EngineError, FragmentKind,
    FragmentTag, RuleError, SynthesisConfig, ZendoConfig, ZendoEngine,
};

fn engine(seed: u64) -> ZendoEngine {
    ZendoEngine::new(ZendoConfig::default().with_seed(seed)).unwrap()
}

/// A full round: rule, description, examples, challenge.
#[test]
fn test_round_trip_through_engine() {
    let mut engine = engine(2718);

    for _ in 0..25 {
        let rule = engine.new_rule().unwrap();
        let description = engine.describe(&rule);
        assert!(!description.is_empty());
        assert_eq!(description, engine.describe(&rule));

        let examples = engine.generate_examples(&rule, 2, 2);
        for grid in &examples.positives {
            assert!(engine.evaluate(&rule, grid));
        }
        for grid in &examples.negatives {
            assert!(!engine.evaluate(&rule, grid));
        }

        let mut run = engine.deal_challenges(&rule);
        while let Some(grid) = run.current() {
            let answer = rule.evaluate(grid);
            if let Some(ChallengeOutcome::Strike { .. }) = run.submit(answer) {
                panic!("correct answer counted as a strike for {rule}");
            }
        }
    }
}

/// Config loaded from TOML drives the engine.
#[test]
fn test_engine_from_toml() {
    let config = ZendoConfig::from_toml(
        r#"
        seed = 17
        challenge_count = 3

        [synthesis]
        max_attempts = 500
        "#,
    )
    .unwrap();
    assert_eq!(config.synthesis.min_fill, 3);

    let mut a = ZendoEngine::new(config.clone()).unwrap();
    let mut b = ZendoEngine::new(config).unwrap();

    let rule = a.new_rule().unwrap();
    assert_eq!(rule, b.new_rule().unwrap());
    assert!(a.deal_challenges(&rule).deck().len() <= 3);
}

/// Different seeds give different rule sequences.
#[test]
fn test_seeds_differ() {
    let mut a = engine(1);
    let mut b = engine(2);

    let rules_a: Vec<_> = (0..10).map(|_| a.new_rule().unwrap()).collect();
    let rules_b: Vec<_> = (0..10).map(|_| b.new_rule().unwrap()).collect();
    assert_ne!(rules_a, rules_b);
}

/// Single examples come out on the requested side.
#[test]
fn test_single_examples() {
    let mut engine = engine(12);
    let rule = engine.new_rule().unwrap();

    if let Some(grid) = engine.example(&rule, true) {
        assert!(engine.evaluate(&rule, &grid));
    }
    if let Some(grid) = engine.example(&rule, false) {
        assert!(!engine.evaluate(&rule, &grid));
    }
}

/// Parsed boards evaluate as expected through the facade.
#[test]
fn test_evaluate_parsed_grid() {
    let engine = engine(0);
    let rule = rust_zendo::Rule::Universal {
        noun: rust_zendo::Predicate::ColorNoun(rust_zendo::Color::Red),
        predicate: rust_zendo::Predicate::Shape(rust_zendo::Shape::Circle),
    };
    let grid: Grid = "rC __ __ __ yT __ __ __ bS".parse().unwrap();

    assert!(engine.evaluate(&rule, &grid));
    assert_eq!(engine.describe(&rule), "Every red symbol is a circle");
    assert_eq!(
        grid.to_string(),
        "rC|  |  \n--+--+--\n  |yT|  \n--+--+--\n  |  |bS"
    );
}

/// A grammar whose only root is tagged is refused.
#[test]
fn test_engine_rejects_tagged_root() {
    let mut registry = GrammarRegistry::new();
    registry.register(
        GrammarEntry::new(Constructor::LineRule, 10)
            .with_tags(&[FragmentTag::Position])
            .with_variants(2)
            .with_children(&[FragmentKind::Noun]),
    );
    registry.register(GrammarEntry::new(Constructor::ColorNoun, 10).with_tags(&[FragmentTag::Color]).with_variants(3));

    let err = ZendoEngine::with_registry(registry, ZendoConfig::default()).unwrap_err();
    assert!(matches!(err, EngineError::Grammar(RuleError::NoTagFreeRoot)));
}

/// A trimmed grammar still works when it validates.
#[test]
fn test_engine_with_custom_grammar() {
    let mut registry = GrammarRegistry::new();
    registry.register(
        GrammarEntry::new(Constructor::Existential, 1).with_children(&[FragmentKind::Noun, FragmentKind::Predicate]),
    );
    registry.register(GrammarEntry::new(Constructor::ShapeNoun, 1).with_tags(&[FragmentTag::Shape]).with_variants(3));
    registry.register(GrammarEntry::new(Constructor::ColorPredicate, 1).with_tags(&[FragmentTag::Color]).with_variants(3));

    let mut engine = ZendoEngine::with_registry(registry, ZendoConfig::default().with_seed(4)).unwrap();
    for _ in 0..20 {
        let rule = engine.new_rule().unwrap();
        assert!(engine.describe(&rule).starts_with("There is a "));
    }
}

/// A challenge needs at least one board of each side.
#[test]
fn test_engine_rejects_tiny_challenge() {
    for count in [0, 1] {
        let config = ZendoConfig::default().with_seed(1).with_challenge_count(count);
        let err = ZendoEngine::new(config).unwrap_err();
        assert!(matches!(err, EngineError::Config(ConfigError::Invalid(_))), "count {count}");
    }

    let mut engine = ZendoEngine::new(ZendoConfig::default().with_seed(1).with_challenge_count(2)).unwrap();
    let rule = engine.new_rule().unwrap();
    let run = engine.deal_challenges(&rule);
    assert!(!run.deck().is_empty());
}

/// Inverted fill bounds are refused up front instead of panicking in synthesis.
#[test]
fn test_engine_rejects_inverted_fill() {
    let config = ZendoConfig {
        synthesis: SynthesisConfig {
            min_fill: 6,
            max_fill: 4,
            max_attempts: 10,
        },
        ..ZendoConfig::default().with_seed(1)
    };

    let err = ZendoEngine::new(config).unwrap_err();
    assert!(matches!(err, EngineError::Config(ConfigError::Invalid(_))));
}

/// An entry without variants is refused before any rule is drawn.
#[test]
fn test_engine_rejects_entry_without_variants() {
    let mut registry = GrammarRegistry::new();
    registry.register(
        GrammarEntry::new(Constructor::Existential, 1).with_children(&[FragmentKind::Noun, FragmentKind::Predicate]),
    );
    let mut shapes = GrammarEntry::new(Constructor::ShapeNoun, 1).with_variants(3);
    shapes.variant_count = 0;
    registry.register(shapes);
    registry.register(GrammarEntry::new(Constructor::ColorPredicate, 1).with_variants(3));

    let err = ZendoEngine::with_registry(registry, ZendoConfig::default()).unwrap_err();
    assert!(matches!(
        err,
        EngineError::Grammar(RuleError::NoVariants {
            constructor: Constructor::ShapeNoun
        })
    ));
}
