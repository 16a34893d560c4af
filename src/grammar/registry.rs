//! Grammar registry.
//!
//! The `GrammarRegistry` maps each fragment kind to its weighted entries,
//! in registration order. It is built once at startup, validated, and then
//! only read.

use rustc_hash::FxHashMap;

use crate::error::RuleError;

use super::entry::{Constructor, FragmentKind, GrammarEntry};
use super::tags::FragmentTag;

/// Registry of grammar entries.
///
/// ## Example
///
/// ```
/// use rust_zendo::grammar::{Constructor, FragmentKind, GrammarRegistry};
///
/// let registry = GrammarRegistry::standard();
/// assert!(registry.validate().is_ok());
///
/// let rules = registry.entries_for(FragmentKind::Rule);
/// assert_eq!(rules[0].constructor, Constructor::Universal);
/// ```
#[derive(Clone, Debug, Default)]
pub struct GrammarRegistry {
    entries: FxHashMap<FragmentKind, Vec<GrammarEntry>>,
}

impl GrammarRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The stock catalog.
    #[must_use]
    pub fn standard() -> Self {
        use Constructor::*;
        use FragmentKind as K;
        use FragmentTag::{Color, Position, Shape};

        let mut registry = Self::new();
        let mut add = |entry: GrammarEntry| registry.register(entry);

        // RULE
        add(GrammarEntry::new(Universal, 10).with_children(&[K::Noun, K::Predicate]));
        add(GrammarEntry::new(Existential, 10).with_children(&[K::Noun, K::Predicate]));
        add(GrammarEntry::new(NegativeUniversal, 10).with_children(&[K::Noun, K::Predicate]));
        add(GrammarEntry::new(GroupRule, 20).with_children(&[K::Group, K::GroupPredicate]));
        add(GrammarEntry::new(LineRule, 10)
            .with_tags(&[Position])
            .with_variants(2)
            .with_children(&[K::Noun]));

        // NOUN
        add(GrammarEntry::new(ColorNoun, 20).with_tags(&[Color]).with_variants(3));
        add(GrammarEntry::new(ShapeNoun, 20).with_tags(&[Shape]).with_variants(3));
        add(GrammarEntry::new(RowNoun, 20).with_tags(&[Position]).with_variants(3));
        add(GrammarEntry::new(ColumnNoun, 20).with_tags(&[Position]).with_variants(3));
        add(GrammarEntry::new(EmptyCellNoun, 10).with_tags(&[Color, Shape]));

        // PREDICATE
        add(GrammarEntry::new(ColorPredicate, 20).with_tags(&[Color]).with_variants(3));
        add(GrammarEntry::new(ShapePredicate, 20).with_tags(&[Shape]).with_variants(3));
        add(GrammarEntry::new(RowPredicate, 20).with_tags(&[Position]).with_variants(3));
        add(GrammarEntry::new(ColumnPredicate, 20).with_tags(&[Position]).with_variants(3));
        add(GrammarEntry::new(AdjacencyPredicate, 20)
            .with_tags(&[Position])
            .with_children(&[K::Noun])
            .separate_tags());

        // GROUP
        add(GrammarEntry::new(ColorGroup, 10).with_tags(&[Color]));
        add(GrammarEntry::new(ShapeGroup, 10).with_tags(&[Shape]));
        add(GrammarEntry::new(IdenticalGroup, 10).with_tags(&[Color, Shape]));
        add(GrammarEntry::new(LineGroup, 20).with_tags(&[Position]).with_variants(2));
        add(GrammarEntry::new(AdjacentGroup, 10).with_tags(&[Position]));

        // GROUP_PREDICATE
        add(GrammarEntry::new(ColorGroupPredicate, 20).with_tags(&[Color]));
        add(GrammarEntry::new(ShapeGroupPredicate, 20).with_tags(&[Shape]));
        add(GrammarEntry::new(ColorDistinctGroupPredicate, 20).with_tags(&[Color]));
        add(GrammarEntry::new(ShapeDistinctGroupPredicate, 20).with_tags(&[Shape]));
        add(GrammarEntry::new(ColorShapeGroupPredicate, 20).with_tags(&[Color, Shape]));
        add(GrammarEntry::new(ContiguousGroupPredicate, 20).with_tags(&[Position]));

        registry
    }

    /// Register an entry under its constructor's kind.
    ///
    /// Panics if the constructor is already registered.
    pub fn register(&mut self, entry: GrammarEntry) {
        if self.entry_for(entry.constructor).is_some() {
            panic!("Constructor {} already registered", entry.constructor);
        }
        self.entries.entry(entry.kind()).or_default().push(entry);
    }

    /// Entries of a kind, in registration order. Empty if none.
    #[must_use]
    pub fn entries_for(&self, kind: FragmentKind) -> &[GrammarEntry] {
        self.entries.get(&kind).map(Vec::as_slice).unwrap_or_default()
    }

    /// The entry that builds a constructor.
    #[must_use]
    pub fn entry_for(&self, constructor: Constructor) -> Option<&GrammarEntry> {
        self.entries_for(constructor.kind())
            .iter()
            .find(|e| e.constructor == constructor)
    }

    /// Number of registered entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate over all entries.
    pub fn iter(&self) -> impl Iterator<Item = &GrammarEntry> {
        self.entries.values().flatten()
    }

    /// Check that generation can only fail through tag conflicts.
    ///
    /// - every child kind has an entry with positive weight
    /// - every entry's child kinds match the slots its constructor holds
    /// - the root kind has a tag-free entry with positive weight
    pub fn validate(&self) -> Result<(), RuleError> {
        for entry in self.iter() {
            if entry.variant_count == 0 {
                return Err(RuleError::NoVariants {
                    constructor: entry.constructor,
                });
            }

            let roles = entry.constructor.child_roles();
            if entry.children.len() != roles.len() {
                return Err(RuleError::ChildCount {
                    constructor: entry.constructor,
                    expected: roles.len(),
                    found: entry.children.len(),
                });
            }

            for (slot, (&kind, &expected)) in entry.children.iter().zip(roles).enumerate() {
                if kind.role() != expected {
                    return Err(RuleError::ChildMismatch {
                        constructor: entry.constructor,
                        slot,
                        expected,
                        found: Some(kind.role()),
                    });
                }
            }

            for &kind in &entry.children {
                if !self.entries_for(kind).iter().any(|e| e.weight > 0) {
                    return Err(RuleError::UnreachableKind {
                        parent: entry.constructor,
                        kind,
                    });
                }
            }
        }

        let has_root = self
            .entries_for(FragmentKind::Rule)
            .iter()
            .any(|e| e.weight > 0 && e.tags.is_empty());
        if !has_root {
            return Err(RuleError::NoTagFreeRoot);
        }

        Ok(())
    }
}
