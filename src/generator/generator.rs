//! Weighted, tag-aware rule generation.

use smallvec::SmallVec;
use tracing::trace;

use crate::core::rng::RuleRng;
use crate::error::RuleError;
use crate::fragments::{Fragment, Rule};
use crate::grammar::{FragmentKind, FragmentRole, GrammarEntry, GrammarRegistry, TagSet};

use super::assemble::assemble;

/// Samples fragment trees from a grammar.
///
/// Construction is top-down, depth-first, left-to-right:
///
/// 1. drop entries whose tags intersect the budget; fail if none remain
/// 2. pick one by weight (single running-sum pass)
/// 3. claim its tags in the caller's budget, so later siblings see them
/// 4. generate each child, sharing the budget or, for separate-tags
///    entries, with a fresh budget that keeps a claimed position
/// 5. draw the variant and assemble the node
///
/// ```
/// use rust_zendo::core::RuleRng;
/// use rust_zendo::generator::RuleGenerator;
/// use rust_zendo::grammar::GrammarRegistry;
///
/// let registry = GrammarRegistry::standard();
/// let generator = RuleGenerator::new(&registry);
///
/// let rule = generator.new_rule(&mut RuleRng::new(42)).unwrap();
/// let again = generator.new_rule(&mut RuleRng::new(42)).unwrap();
/// assert_eq!(rule, again);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct RuleGenerator<'a> {
    registry: &'a GrammarRegistry,
}

impl<'a> RuleGenerator<'a> {
    #[must_use]
    pub fn new(registry: &'a GrammarRegistry) -> Self {
        Self { registry }
    }

    #[must_use]
    pub fn registry(&self) -> &'a GrammarRegistry {
        self.registry
    }

    /// Generate a complete rule with an empty tag budget.
    pub fn new_rule(&self, rng: &mut RuleRng) -> Result<Rule, RuleError> {
        let mut used = TagSet::new();
        let fragment = self.generate(FragmentKind::Rule, &mut used, rng)?;
        let constructor = fragment.constructor();
        let found = fragment.role();
        fragment.into_rule().ok_or(RuleError::ChildMismatch {
            constructor,
            slot: 0,
            expected: FragmentRole::Rule,
            found: Some(found),
        })
    }

    /// Generate one fragment of `kind`, claiming tags in `used`.
    ///
    /// Any failure below aborts the whole build.
    pub fn generate(
        &self,
        kind: FragmentKind,
        used: &mut TagSet,
        rng: &mut RuleRng,
    ) -> Result<Fragment, RuleError> {
        let entry = self.choose(kind, *used, rng)?;
        trace!(%kind, constructor = %entry.constructor, used = %used, "chose grammar entry");

        used.extend(entry.tags);

        let mut children = Vec::with_capacity(entry.children.len());
        for &child in &entry.children {
            let mut budget = entry.child_budget(*used);
            children.push(self.generate(child, &mut budget, rng)?);
            if !entry.separate_tags {
                *used = budget;
            }
        }

        let variant = rng.gen_range_usize(0..entry.variant_count);
        assemble(entry.constructor, variant, children)
    }

    /// Weighted pick among the entries of `kind` compatible with `used`.
    fn choose(
        &self,
        kind: FragmentKind,
        used: TagSet,
        rng: &mut RuleRng,
    ) -> Result<&'a GrammarEntry, RuleError> {
        let candidates: SmallVec<[&GrammarEntry; 8]> = self
            .registry
            .entries_for(kind)
            .iter()
            .filter(|entry| !entry.tags.intersects(used))
            .collect();
        let weights: SmallVec<[u32; 8]> = candidates.iter().map(|entry| entry.weight).collect();

        rng.choose_running_sum(&weights)
            .map(|i| candidates[i])
            .ok_or(RuleError::NoApplicableEntry { kind, used })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grammar::{Constructor, FragmentTag};

    #[test]
    fn test_generates_rules() {
        let registry = GrammarRegistry::standard();
        let generator = RuleGenerator::new(&registry);
        let mut rng = RuleRng::new(42);

        for _ in 0..200 {
            let rule = generator.new_rule(&mut rng).unwrap();
            assert!(!rule.describe().is_empty());
        }
    }

    #[test]
    fn test_claims_tags_in_callers_budget() {
        let registry = GrammarRegistry::standard();
        let generator = RuleGenerator::new(&registry);
        let mut rng = RuleRng::new(3);

        for _ in 0..50 {
            let mut used = TagSet::new();
            let fragment = generator.generate(FragmentKind::Group, &mut used, &mut rng).unwrap();
            let entry = registry.entry_for(fragment.constructor()).unwrap();
            assert_eq!(used, entry.tags);
        }
    }

    #[test]
    fn test_respects_budget() {
        let registry = GrammarRegistry::standard();
        let generator = RuleGenerator::new(&registry);
        let mut rng = RuleRng::new(11);

        for _ in 0..100 {
            let mut used = TagSet::of(&[FragmentTag::Color, FragmentTag::Position]);
            let fragment = generator.generate(FragmentKind::Noun, &mut used, &mut rng).unwrap();
            assert_eq!(fragment.constructor(), Constructor::ShapeNoun);
        }
    }

    #[test]
    fn test_no_applicable_entry() {
        let registry = GrammarRegistry::standard();
        let generator = RuleGenerator::new(&registry);
        let mut used = TagSet::of(&FragmentTag::ALL);

        let err = generator
            .generate(FragmentKind::GroupPredicate, &mut used, &mut RuleRng::new(1))
            .unwrap_err();
        assert_eq!(
            err,
            RuleError::NoApplicableEntry {
                kind: FragmentKind::GroupPredicate,
                used: TagSet::of(&FragmentTag::ALL),
            }
        );
    }

    #[test]
    fn test_child_failure_aborts_build() {
        // The only noun conflicts with the tag the rule claims.
        let mut registry = GrammarRegistry::new();
        registry.register(
            GrammarEntry::new(Constructor::LineRule, 1)
                .with_tags(&[FragmentTag::Position])
                .with_variants(2)
                .with_children(&[FragmentKind::Noun]),
        );
        registry.register(
            GrammarEntry::new(Constructor::RowNoun, 1)
                .with_tags(&[FragmentTag::Position])
                .with_variants(3),
        );

        let err = RuleGenerator::new(&registry)
            .new_rule(&mut RuleRng::new(5))
            .unwrap_err();
        assert!(matches!(
            err,
            RuleError::NoApplicableEntry { kind: FragmentKind::Noun, .. }
        ));
    }

    #[test]
    fn test_variant_count_mismatch_is_reported() {
        let mut registry = GrammarRegistry::new();
        registry.register(
            GrammarEntry::new(Constructor::Existential, 1)
                .with_children(&[FragmentKind::Noun, FragmentKind::Predicate]),
        );
        registry.register(GrammarEntry::new(Constructor::EmptyCellNoun, 1));
        registry.register(GrammarEntry::new(Constructor::ColorPredicate, 1).with_variants(40));

        let generator = RuleGenerator::new(&registry);
        let mut rng = RuleRng::new(8);
        let failures = (0..50)
            .filter_map(|_| generator.new_rule(&mut rng).err())
            .collect::<Vec<_>>();

        assert!(!failures.is_empty());
        assert!(failures
            .iter()
            .all(|e| matches!(e, RuleError::MalformedVariant { constructor: Constructor::ColorPredicate, .. })));
    }

    #[test]
    fn test_separate_tags_keeps_position() {
        let registry = GrammarRegistry::standard();
        let generator = RuleGenerator::new(&registry);
        let mut rng = RuleRng::new(21);

        for _ in 0..200 {
            let mut used = TagSet::new();
            let fragment = generator.generate(FragmentKind::Predicate, &mut used, &mut rng).unwrap();
            if let Fragment::Predicate(crate::fragments::Predicate::AdjacentTo(noun)) = fragment {
                let tags = registry.entry_for(noun.constructor()).unwrap().tags;
                assert!(!tags.contains(FragmentTag::Position), "{noun:?}");
            }
        }
    }
}
